//! Reply composition: tone phrases + intent frame + slot substitution.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use super::choice::ChoiceSource;
use super::intent::Intent;
use super::library::{ScriptLibrary, FALLBACK_FRAME};
use super::slots::{SlotName, SlotSet};
use super::tone::Tone;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^{}]*\}").expect("placeholder pattern is valid"));

static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("blank run pattern is valid"));

static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +([.,:;!?»])").expect("punctuation pattern is valid"));

/// The four lines of a composed script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedReply {
    pub hook: String,
    pub ask: String,
    pub frame: String,
    pub close: String,
}

impl ComposedReply {
    /// Bullet-formatted script, one line per part.
    pub fn render(&self) -> String {
        format!(
            "— {}\n— {}\n— {}\n— {}",
            self.hook, self.ask, self.frame, self.close
        )
    }
}

/// Builds reply scripts from a [`ScriptLibrary`].
#[derive(Clone)]
pub struct ReplyComposer {
    library: &'static ScriptLibrary,
    choice: Arc<dyn ChoiceSource>,
}

impl ReplyComposer {
    pub fn new(library: &'static ScriptLibrary, choice: Arc<dyn ChoiceSource>) -> Self {
        Self { library, choice }
    }

    /// Composes a script. Never fails: missing pools fall back to fixed text.
    pub fn compose(&self, intent: Intent, tone: Tone, slots: &SlotSet) -> ComposedReply {
        let (hook, ask, close) = match self.library.tone(tone) {
            Some(profile) => (
                self.pick(&profile.hooks, ""),
                self.pick(&profile.asks, ""),
                self.pick(&profile.closes, ""),
            ),
            None => ("", "", ""),
        };

        let template = match self.library.frames(intent) {
            Some(pool) => self.pick(pool, FALLBACK_FRAME),
            None => FALLBACK_FRAME,
        };

        ComposedReply {
            hook: hook.to_string(),
            ask: ask.to_string(),
            frame: fill_template(template, slots),
            close: close.to_string(),
        }
    }

    fn pick<'a>(&self, pool: &[&'a str], fallback: &'a str) -> &'a str {
        if pool.is_empty() {
            return fallback;
        }
        let index = self.choice.choose(pool.len()).min(pool.len() - 1);
        pool[index]
    }
}

/// Replaces `{slot}` placeholders with slot values; unknown or absent ones
/// render as nothing.
pub fn fill_template(template: &str, slots: &SlotSet) -> String {
    let filled = PLACEHOLDER.replace_all(template, |caps: &regex::Captures<'_>| {
        let name = caps[0].trim_start_matches('{').trim_end_matches('}');
        SlotName::from_placeholder(name)
            .and_then(|slot| slots.get(slot))
            .unwrap_or_default()
            .to_string()
    });
    let collapsed = BLANK_RUN.replace_all(&filled, " ");
    SPACE_BEFORE_PUNCT
        .replace_all(&collapsed, "$1")
        .trim()
        .to_string()
}
