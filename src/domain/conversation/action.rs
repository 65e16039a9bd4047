//! Actions delivered by the transport.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::script::Intent;

/// Callback token prefix for "another variant".
pub const MORE_PREFIX: &str = "more:";
/// Callback token for switching tone.
pub const TONE_TOKEN: &str = "tone";
/// Callback token for requesting the closing summary.
pub const SUMMARY_TOKEN: &str = "summary";

/// Entry command that (re)starts the dialog.
pub const START_COMMAND: &str = "/start";
/// Command that ends the active dialog.
pub const CANCEL_COMMAND: &str = "/cancel";

static MENU_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3})\.(?:\s|$)").expect("menu item pattern is valid"));

/// Reply-keyboard button, delivered as a plain text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    FreeInput,
    SwitchTone,
    RequestSummary,
}

/// One thing the user did in a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start,
    /// Menu button `"<n>. <title>"`; `index` is 1-based.
    MenuSelection { index: usize, text: String },
    /// Keyboard button; `text` is the message as typed, kept so it can
    /// still serve as a closing note.
    MenuButton { button: MenuButton, text: String },
    FreeText(String),
    SwitchTone,
    AnotherVariant(Intent),
    RequestSummary,
    Cancel,
    /// Callback token or slash command nobody recognised.
    Unknown(String),
}

impl Action {
    /// Maps a text message (commands, menu buttons, free text) to an action.
    pub fn from_message(text: &str) -> Action {
        let trimmed = text.trim();

        if trimmed == START_COMMAND {
            return Action::Start;
        }
        if trimmed == CANCEL_COMMAND {
            return Action::Cancel;
        }
        if trimmed.starts_with('/') {
            return Action::Unknown(trimmed.to_string());
        }

        let button = if trimmed.starts_with("Итоги") {
            Some(MenuButton::RequestSummary)
        } else if trimmed.starts_with("Тон:") {
            Some(MenuButton::SwitchTone)
        } else if trimmed.starts_with("Свободный") {
            Some(MenuButton::FreeInput)
        } else {
            None
        };
        if let Some(button) = button {
            return Action::MenuButton {
                button,
                text: trimmed.to_string(),
            };
        }
        if let Some(index) = MENU_ITEM
            .captures(trimmed)
            .and_then(|caps| caps[1].parse::<usize>().ok())
        {
            return Action::MenuSelection {
                index,
                text: trimmed.to_string(),
            };
        }

        Action::FreeText(trimmed.to_string())
    }

    /// Maps an inline-button correlation token to an action.
    pub fn from_callback(token: &str) -> Action {
        match token {
            TONE_TOKEN => Action::SwitchTone,
            SUMMARY_TOKEN => Action::RequestSummary,
            other => other
                .strip_prefix(MORE_PREFIX)
                .and_then(|key| key.parse::<Intent>().ok())
                .map(Action::AnotherVariant)
                .unwrap_or_else(|| Action::Unknown(other.to_string())),
        }
    }

    /// Text carried by message-like actions.
    pub fn text(&self) -> Option<&str> {
        match self {
            Action::MenuSelection { text, .. }
            | Action::MenuButton { text, .. }
            | Action::FreeText(text) => Some(text),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::MenuSelection { .. } => "menu_selection",
            Action::MenuButton { .. } => "menu_button",
            Action::FreeText(_) => "free_text",
            Action::SwitchTone => "switch_tone",
            Action::AnotherVariant(_) => "another_variant",
            Action::RequestSummary => "request_summary",
            Action::Cancel => "cancel",
            Action::Unknown(_) => "unknown",
        }
    }
}
