//! Pure dialog transition function.
//!
//! `transition` decides the next [`DialogState`] and which effects the
//! application layer must run. It performs no I/O and touches no session.

use crate::domain::script::Intent;

use super::action::{Action, MenuButton};
use super::state::DialogState;

/// Work the application layer carries out for a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Greet,
    PromptFreeText,
    /// Classify (or take the menu category), extract, compose, record a turn.
    Respond {
        menu_index: Option<usize>,
        utterance: String,
    },
    /// Recompose for `intent` with slots of its latest turn.
    ReplayVariant(Intent),
    RotateTone,
    PromptSummary,
    PersistSummary { note: String },
    EndFlow,
    IgnoreUnknown(String),
}

/// Result of [`transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: DialogState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(next: DialogState, effect: Effect) -> Self {
        Self {
            next,
            effects: vec![effect],
        }
    }
}

pub fn transition(state: DialogState, action: &Action) -> Transition {
    use DialogState::*;

    match (state, action) {
        (_, Action::Start) => Transition::to(AwaitingInput, Effect::Greet),
        (_, Action::Cancel) => Transition::to(AwaitingInput, Effect::EndFlow),
        (current, Action::Unknown(token)) => {
            Transition::to(current, Effect::IgnoreUnknown(token.clone()))
        }
        (current, Action::SwitchTone) => Transition::to(current, Effect::RotateTone),
        (current, Action::AnotherVariant(intent)) => {
            Transition::to(current, Effect::ReplayVariant(*intent))
        }
        (_, Action::RequestSummary) => Transition::to(AwaitingSummary, Effect::PromptSummary),

        (AwaitingInput, Action::MenuSelection { index, text }) => Transition::to(
            AwaitingInput,
            Effect::Respond {
                menu_index: Some(*index),
                utterance: text.clone(),
            },
        ),
        (AwaitingInput, Action::FreeText(text)) => Transition::to(
            AwaitingInput,
            Effect::Respond {
                menu_index: None,
                utterance: text.clone(),
            },
        ),
        (AwaitingInput, Action::MenuButton { button, .. }) => match button {
            MenuButton::FreeInput => Transition::to(AwaitingInput, Effect::PromptFreeText),
            MenuButton::SwitchTone => Transition::to(AwaitingInput, Effect::RotateTone),
            MenuButton::RequestSummary => {
                Transition::to(AwaitingSummary, Effect::PromptSummary)
            }
        },

        // Every typed message is the closing note, buttons included.
        (AwaitingSummary, Action::MenuSelection { text, .. })
        | (AwaitingSummary, Action::MenuButton { text, .. })
        | (AwaitingSummary, Action::FreeText(text)) => Transition::to(
            AwaitingInput,
            Effect::PersistSummary {
                note: text.trim().to_string(),
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn single_effect(t: &Transition) -> &Effect {
        assert_eq!(t.effects.len(), 1);
        &t.effects[0]
    }

    #[test]
    fn free_text_is_answered_in_place() {
        let t = transition(DialogState::AwaitingInput, &Action::FreeText("дорого".into()));
        assert_eq!(t.next, DialogState::AwaitingInput);
        assert_eq!(
            single_effect(&t),
            &Effect::Respond {
                menu_index: None,
                utterance: "дорого".into()
            }
        );
    }

    #[test]
    fn menu_selection_carries_index() {
        let action = Action::MenuSelection {
            index: 3,
            text: "3. Ничего не нужно".into(),
        };
        let t = transition(DialogState::AwaitingInput, &action);
        assert!(matches!(
            single_effect(&t),
            Effect::Respond { menu_index: Some(3), .. }
        ));
    }

    #[test]
    fn summary_request_moves_to_summary_state() {
        let t = transition(DialogState::AwaitingInput, &Action::RequestSummary);
        assert_eq!(t.next, DialogState::AwaitingSummary);
        assert_eq!(single_effect(&t), &Effect::PromptSummary);
    }

    #[test]
    fn text_in_summary_state_becomes_note() {
        let t = transition(
            DialogState::AwaitingSummary,
            &Action::FreeText(" клиенту важна цена ".into()),
        );
        assert_eq!(t.next, DialogState::AwaitingInput);
        assert_eq!(
            single_effect(&t),
            &Effect::PersistSummary {
                note: "клиенту важна цена".into()
            }
        );
    }

    #[test]
    fn menu_text_in_summary_state_becomes_note() {
        let action = Action::MenuSelection {
            index: 1,
            text: "1. Неинтересно".into(),
        };
        let t = transition(DialogState::AwaitingSummary, &action);
        assert!(matches!(single_effect(&t), Effect::PersistSummary { .. }));
    }

    #[test]
    fn tone_switch_keeps_state() {
        for state in [DialogState::AwaitingInput, DialogState::AwaitingSummary] {
            let t = transition(state, &Action::SwitchTone);
            assert_eq!(t.next, state);
            assert_eq!(single_effect(&t), &Effect::RotateTone);
        }
    }

    #[test]
    fn another_variant_keeps_state() {
        let t = transition(
            DialogState::AwaitingInput,
            &Action::AnotherVariant(Intent::Expensive),
        );
        assert_eq!(t.next, DialogState::AwaitingInput);
        assert_eq!(single_effect(&t), &Effect::ReplayVariant(Intent::Expensive));
    }

    #[test]
    fn cancel_ends_flow_from_any_state() {
        for state in [DialogState::AwaitingInput, DialogState::AwaitingSummary] {
            let t = transition(state, &Action::Cancel);
            assert_eq!(t.next, DialogState::AwaitingInput);
            assert_eq!(single_effect(&t), &Effect::EndFlow);
        }
    }

    #[test]
    fn start_resets_to_input() {
        let t = transition(DialogState::AwaitingSummary, &Action::Start);
        assert_eq!(t.next, DialogState::AwaitingInput);
        assert_eq!(single_effect(&t), &Effect::Greet);
    }

    #[test]
    fn unknown_action_is_ignored_without_state_change() {
        let t = transition(DialogState::AwaitingSummary, &Action::Unknown("x".into()));
        assert_eq!(t.next, DialogState::AwaitingSummary);
        assert_eq!(single_effect(&t), &Effect::IgnoreUnknown("x".into()));
    }

    fn menu_button(button: MenuButton, text: &str) -> Action {
        Action::MenuButton {
            button,
            text: text.into(),
        }
    }

    #[test]
    fn menu_buttons_act_while_awaiting_input() {
        let t = transition(
            DialogState::AwaitingInput,
            &menu_button(MenuButton::FreeInput, "Свободный ввод фразы клиента"),
        );
        assert_eq!(single_effect(&t), &Effect::PromptFreeText);

        let t = transition(
            DialogState::AwaitingInput,
            &menu_button(MenuButton::SwitchTone, "Тон: уверенный"),
        );
        assert_eq!(t.next, DialogState::AwaitingInput);
        assert_eq!(single_effect(&t), &Effect::RotateTone);

        let t = transition(
            DialogState::AwaitingInput,
            &menu_button(MenuButton::RequestSummary, "Итоги разговора"),
        );
        assert_eq!(t.next, DialogState::AwaitingSummary);
        assert_eq!(single_effect(&t), &Effect::PromptSummary);
    }

    #[test]
    fn typed_button_text_in_summary_state_becomes_note() {
        for (button, text) in [
            (MenuButton::RequestSummary, "Итоги: клиенту важна цена"),
            (MenuButton::SwitchTone, "Тон: клиент раздражён"),
            (MenuButton::FreeInput, "Свободный график, звонить вечером"),
        ] {
            let t = transition(DialogState::AwaitingSummary, &menu_button(button, text));
            assert_eq!(t.next, DialogState::AwaitingInput);
            assert_eq!(
                single_effect(&t),
                &Effect::PersistSummary { note: text.into() }
            );
        }
    }

    #[test]
    fn summary_callback_in_summary_state_reprompts() {
        let t = transition(DialogState::AwaitingSummary, &Action::RequestSummary);
        assert_eq!(t.next, DialogState::AwaitingSummary);
        assert_eq!(single_effect(&t), &Effect::PromptSummary);
    }

    proptest! {
        #[test]
        fn free_text_never_leaves_input_state(text in ".{0,40}") {
            let t = transition(DialogState::AwaitingInput, &Action::FreeText(text));
            prop_assert_eq!(t.next, DialogState::AwaitingInput);
        }

        #[test]
        fn any_typed_message_in_summary_state_is_persisted(text in ".{0,40}") {
            prop_assume!(!text.trim_start().starts_with('/'));
            let action = Action::from_message(&text);
            let t = transition(DialogState::AwaitingSummary, &action);
            let persisted = matches!(t.effects.as_slice(), [Effect::PersistSummary { .. }]);
            prop_assert!(persisted);
        }
    }
}
