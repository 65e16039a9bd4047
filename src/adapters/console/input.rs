//! Console line parsing.

use crate::domain::conversation::action::{MORE_PREFIX, SUMMARY_TOKEN, TONE_TOKEN};
use crate::domain::conversation::Action;

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Action(Action),
    Menu,
    Quit,
}

impl ConsoleInput {
    pub fn parse(line: &str) -> ConsoleInput {
        let trimmed = line.trim();

        match trimmed {
            "/menu" => return ConsoleInput::Menu,
            "/quit" | "/exit" => return ConsoleInput::Quit,
            "/tone" => return ConsoleInput::Action(Action::from_callback(TONE_TOKEN)),
            "/summary" => return ConsoleInput::Action(Action::from_callback(SUMMARY_TOKEN)),
            _ => {}
        }

        if let Some(key) = trimmed.strip_prefix("/more") {
            let token = format!("{}{}", MORE_PREFIX, key.trim());
            return ConsoleInput::Action(Action::from_callback(&token));
        }

        ConsoleInput::Action(Action::from_message(trimmed))
    }
}

/// Console command that produces the same action as a callback token.
pub(super) fn command_for_token(token: &str) -> String {
    match token.strip_prefix(MORE_PREFIX) {
        Some(key) => format!("/more {}", key),
        None => format!("/{}", token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::script::Intent;

    #[test]
    fn slash_commands_map_to_callbacks() {
        assert_eq!(ConsoleInput::parse("/tone"), ConsoleInput::Action(Action::SwitchTone));
        assert_eq!(
            ConsoleInput::parse("/summary"),
            ConsoleInput::Action(Action::RequestSummary)
        );
        assert_eq!(
            ConsoleInput::parse("/more expensive"),
            ConsoleInput::Action(Action::AnotherVariant(Intent::Expensive))
        );
    }

    #[test]
    fn unknown_intent_in_more_is_unknown_action() {
        assert_eq!(
            ConsoleInput::parse("/more nonsense"),
            ConsoleInput::Action(Action::Unknown("more:nonsense".into()))
        );
    }

    #[test]
    fn control_lines() {
        assert_eq!(ConsoleInput::parse(" /menu "), ConsoleInput::Menu);
        assert_eq!(ConsoleInput::parse("/quit"), ConsoleInput::Quit);
        assert_eq!(ConsoleInput::parse("/start"), ConsoleInput::Action(Action::Start));
    }

    #[test]
    fn plain_text_goes_through_message_parsing() {
        assert_eq!(
            ConsoleInput::parse("дорого"),
            ConsoleInput::Action(Action::FreeText("дорого".into()))
        );
    }

    #[test]
    fn tokens_round_trip_through_commands() {
        for token in ["tone", "summary", "more:busy_later"] {
            let parsed = ConsoleInput::parse(&command_for_token(token));
            assert_eq!(parsed, ConsoleInput::Action(Action::from_callback(token)));
        }
    }
}
