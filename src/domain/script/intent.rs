//! Intent enum: the fixed client-objection categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Objection category detected in a client utterance.
///
/// The ten objection categories come first, in menu order. `General` is the
/// designated default returned when nothing in the utterance points anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    NotInterested,
    BusyLater,
    DontNeed,
    SelfSearch,
    OtherAgent,
    Expensive,
    ThinkLater,
    NoMortgage,
    JustBrowsing,
    SendWhatsapp,
    General,
}

impl Intent {
    /// The designated default category.
    pub const DEFAULT: Intent = Intent::General;

    /// Returns the ten objection categories in declaration (menu) order.
    pub fn objections() -> &'static [Intent] {
        &[
            Intent::NotInterested,
            Intent::BusyLater,
            Intent::DontNeed,
            Intent::SelfSearch,
            Intent::OtherAgent,
            Intent::Expensive,
            Intent::ThinkLater,
            Intent::NoMortgage,
            Intent::JustBrowsing,
            Intent::SendWhatsapp,
        ]
    }

    /// Returns every member of the set, default last.
    pub fn all() -> &'static [Intent] {
        &[
            Intent::NotInterested,
            Intent::BusyLater,
            Intent::DontNeed,
            Intent::SelfSearch,
            Intent::OtherAgent,
            Intent::Expensive,
            Intent::ThinkLater,
            Intent::NoMortgage,
            Intent::JustBrowsing,
            Intent::SendWhatsapp,
            Intent::General,
        ]
    }

    /// Resolves a 1-based menu index to its category.
    pub fn from_menu_index(index: usize) -> Option<Intent> {
        index
            .checked_sub(1)
            .and_then(|i| Self::objections().get(i))
            .copied()
    }

    /// Stable snake_case key, used in correlation tokens and digests.
    pub fn key(&self) -> &'static str {
        match self {
            Intent::NotInterested => "not_interested",
            Intent::BusyLater => "busy_later",
            Intent::DontNeed => "dont_need",
            Intent::SelfSearch => "self_search",
            Intent::OtherAgent => "other_agent",
            Intent::Expensive => "expensive",
            Intent::ThinkLater => "think_later",
            Intent::NoMortgage => "no_mortgage",
            Intent::JustBrowsing => "just_browsing",
            Intent::SendWhatsapp => "send_whatsapp",
            Intent::General => "general",
        }
    }

    /// Menu title shown to the salesperson.
    pub fn title(&self) -> &'static str {
        match self {
            Intent::NotInterested => "Неинтересно / я ничего не оставлял",
            Intent::BusyLater => "Сейчас занят, давайте позже",
            Intent::DontNeed => "Ничего не нужно",
            Intent::SelfSearch => "Я сам смотрю (ЦИАН/Авито)",
            Intent::OtherAgent => "Мне уже звонили / я с агентом",
            Intent::Expensive => "Дорого / цены кусаются",
            Intent::ThinkLater => "Подумаю / перезвоните позже",
            Intent::NoMortgage => "Нет одобрения / ставки высокие",
            Intent::JustBrowsing => "Пока присматриваюсь",
            Intent::SendWhatsapp => "Пришлите в WhatsApp/почту",
            Intent::General => "Общий запрос",
        }
    }

    /// Lower-case keyword phrases matched as substrings by the classifier.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Intent::NotInterested => &["неинтерес", "ничего не оставлял", "кто вы", "зачем звоните"],
            Intent::BusyLater => &["занят", "перезвон", "позже", "через", "после"],
            Intent::DontNeed => &["не нужно", "не нужен", "не актуал"],
            Intent::SelfSearch => &["сам смотрю", "циан", "avito", "авито"],
            Intent::OtherAgent => &["уже звонили", "другой агент", "есть агент"],
            Intent::Expensive => &["дорого", "кусают", "дороговато", "дорогая", "цены"],
            Intent::ThinkLater => &["подумаю", "через месяц", "позже решу"],
            Intent::NoMortgage => &["ипотек", "ставк", "не одобрили", "нет одобрения", "банк"],
            Intent::JustBrowsing => &["присматриваюсь", "смотрю пока", "пока смотрю"],
            Intent::SendWhatsapp => &["whatsapp", "ватсап", "почту", "email", "e-mail", "электрон"],
            Intent::General => &[],
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Intent {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|intent| intent.key() == s)
            .copied()
            .ok_or_else(|| ValidationError::unknown_value("intent", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objections_has_ten_categories() {
        assert_eq!(Intent::objections().len(), 10);
        assert!(!Intent::objections().contains(&Intent::General));
    }

    #[test]
    fn all_ends_with_default() {
        assert_eq!(Intent::all().len(), 11);
        assert_eq!(Intent::all().last(), Some(&Intent::DEFAULT));
    }

    #[test]
    fn menu_index_is_one_based() {
        assert_eq!(Intent::from_menu_index(1), Some(Intent::NotInterested));
        assert_eq!(Intent::from_menu_index(6), Some(Intent::Expensive));
        assert_eq!(Intent::from_menu_index(10), Some(Intent::SendWhatsapp));
    }

    #[test]
    fn menu_index_out_of_range_is_none() {
        assert_eq!(Intent::from_menu_index(0), None);
        assert_eq!(Intent::from_menu_index(11), None);
    }

    #[test]
    fn key_parses_back() {
        for intent in Intent::all() {
            assert_eq!(intent.key().parse::<Intent>().unwrap(), *intent);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!("weather".parse::<Intent>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_key() {
        let json = serde_json::to_string(&Intent::SendWhatsapp).unwrap();
        assert_eq!(json, "\"send_whatsapp\"");
    }

    #[test]
    fn only_default_has_no_keywords() {
        for intent in Intent::objections() {
            assert!(!intent.keywords().is_empty(), "{intent} has no keywords");
        }
        assert!(Intent::General.keywords().is_empty());
    }
}
