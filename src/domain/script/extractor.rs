//! Slot extraction from free-form client speech.
//!
//! Every rule is independent and yields at most one slot. Fragments that do
//! not fit a rule are skipped; extraction itself never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::slots::{SlotName, SlotSet};

static BUDGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(\d{1,3}(?:[.,]\d)?)\s*(?:(?:-|–|—|до)\s*(\d{1,3}(?:[.,]\d)?)\s*)?(?:млн|миллион|лям)",
    )
    .expect("budget pattern is valid")
});

static ROOMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([1-5])\s*-?\s*(?:комн|к\b)").expect("rooms pattern is valid"));

static METRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:до|не более|макс\w*)\s*(\d{1,2})\s*мин").expect("metro pattern is valid")
});

static TIME_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bчерез\s+(\d{1,3})\s*(дн|нед|мес)").expect("time span pattern is valid")
});

static DISTRICT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(ювао|свао|сзао|юзао|зелао|тинао|новая москва|ц[аa][оo]|сао|вао|юао|зао|нао)\b",
    )
    .expect("district pattern is valid")
});

/// Pulls budget, rooms, metro, time, district and goal out of an utterance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotExtractor;

impl SlotExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts every detectable slot; absent slots are simply missing.
    pub fn extract(&self, utterance: &str) -> SlotSet {
        let text = utterance.to_lowercase();
        let mut slots = SlotSet::new();

        let rules: [(SlotName, fn(&str) -> Option<String>); 6] = [
            (SlotName::Budget, budget),
            (SlotName::Rooms, rooms),
            (SlotName::Metro, metro),
            (SlotName::Time, time),
            (SlotName::District, district),
            (SlotName::Goal, goal),
        ];
        for (name, rule) in rules {
            if let Some(value) = rule(&text) {
                slots.insert(name, value);
            }
        }

        debug!(count = slots.len(), ?slots, "Slots extracted");
        slots
    }
}

fn budget(text: &str) -> Option<String> {
    let caps = BUDGET.captures(text)?;
    let low = caps.get(1)?.as_str();
    Some(match caps.get(2) {
        Some(high) => format!("{}–{} млн", low, high.as_str()),
        None => format!("до {} млн", low),
    })
}

fn rooms(text: &str) -> Option<String> {
    if text.contains("студ") {
        return Some("студия".to_string());
    }
    let caps = ROOMS.captures(text)?;
    Some(format!("{}к", caps.get(1)?.as_str()))
}

fn metro(text: &str) -> Option<String> {
    let caps = METRO.captures(text)?;
    Some(format!("≤{} мин", caps.get(1)?.as_str()))
}

fn time(text: &str) -> Option<String> {
    if text.contains("сегодня") || text.contains("вечер") {
        return Some("сегодня".to_string());
    }
    if text.contains("завтра") {
        return Some("завтра".to_string());
    }
    if text.contains("выходн") {
        return Some("на выходных".to_string());
    }
    let caps = TIME_SPAN.captures(text)?;
    let unit = match caps.get(2)?.as_str() {
        "дн" => "дн.",
        "нед" => "нед.",
        _ => "мес.",
    };
    Some(format!("через {} {}", caps.get(1)?.as_str(), unit))
}

fn district(text: &str) -> Option<String> {
    let found = DISTRICT.find(text)?.as_str();
    // "цао" is often typed with Latin a/o
    if found.starts_with('ц') && found.chars().count() == 3 {
        return Some("ЦАО".to_string());
    }
    Some(found.to_uppercase())
}

fn goal(text: &str) -> Option<String> {
    if text.contains("инвест") || text.contains("сдач") {
        Some("инвестиция".to_string())
    } else if text.contains("для себя") || text.contains("жив") {
        Some("для себя".to_string())
    } else {
        None
    }
}
