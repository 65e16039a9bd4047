//! Outbound reply and the follow-up actions offered with it.

use serde::Serialize;

use crate::domain::script::{Intent, Tone};

use super::action::{MORE_PREFIX, SUMMARY_TOKEN, TONE_TOKEN};

pub const GREETING: &str =
    "Скриптолог на связи. Выберите ситуацию или введите фразу клиента.";
pub const FREE_TEXT_PROMPT: &str = "Напишите фразу клиента целиком.";
pub const SUMMARY_PROMPT: &str = "Коротко: итог разговора (1–2 фразы):";
pub const SUMMARY_SAVED: &str = "Готово. Конспект сохранён. Продолжим? /start";
pub const FAREWELL: &str = "Ок, вернёмся позже. Наберите /start, чтобы продолжить.";

/// A button the transport renders verbatim; `token` comes back as a callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowUp {
    pub label: String,
    pub token: String,
}

impl FollowUp {
    pub fn another_variant(intent: Intent) -> Self {
        Self {
            label: "Ещё вариант".to_string(),
            token: format!("{}{}", MORE_PREFIX, intent.key()),
        }
    }

    pub fn request_summary() -> Self {
        Self {
            label: "Итоги разговора".to_string(),
            token: SUMMARY_TOKEN.to_string(),
        }
    }

    pub fn switch_tone() -> Self {
        Self {
            label: "Тон ⟳".to_string(),
            token: TONE_TOKEN.to_string(),
        }
    }

    /// The set offered under every composed script.
    pub fn for_script(intent: Intent) -> Vec<FollowUp> {
        vec![
            Self::another_variant(intent),
            Self::request_summary(),
            Self::switch_tone(),
        ]
    }
}

/// What the core hands back to the transport for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnReply {
    /// Multi-line reply text.
    pub text: String,
    /// Category title for composed scripts.
    pub title: Option<String>,
    pub follow_ups: Vec<FollowUp>,
    /// Set when the dialog was ended and needs the entry command to resume.
    pub flow_ended: bool,
}

impl TurnReply {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn script(intent: Intent, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: Some(intent.title().to_string()),
            follow_ups: FollowUp::for_script(intent),
            flow_ended: false,
        }
    }

    pub fn tone_switched(tone: Tone) -> Self {
        Self::message(format!("Тон переключён: {}", tone))
    }

    pub fn ended(text: impl Into<String>) -> Self {
        Self {
            flow_ended: true,
            ..Self::message(text)
        }
    }

    /// Nothing to show; used for ignored actions.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.follow_ups.is_empty()
    }
}
