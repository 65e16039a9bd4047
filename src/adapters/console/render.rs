//! Plain-text rendering of replies and the menu.

use crate::domain::conversation::TurnReply;
use crate::domain::script::Intent;

use super::input::command_for_token;

/// Menu lines: numbered objections, then the free-input, tone and summary buttons.
pub fn menu() -> Vec<String> {
    let mut lines: Vec<String> = Intent::objections()
        .iter()
        .enumerate()
        .map(|(i, intent)| format!("{}. {}", i + 1, intent.title()))
        .collect();
    lines.push("Свободный ввод фразы клиента".to_string());
    lines.push("Тон: /tone".to_string());
    lines.push("Итоги разговора".to_string());
    lines
}

pub fn render_reply(reply: &TurnReply) -> String {
    let mut out = String::new();
    if let Some(title) = &reply.title {
        out.push_str(&format!("[{}]\n", title));
    }
    out.push_str(&reply.text);
    if !reply.follow_ups.is_empty() {
        let buttons: Vec<String> = reply
            .follow_ups
            .iter()
            .map(|f| format!("{} ({})", f.label, command_for_token(&f.token)))
            .collect();
        out.push_str("\n  ");
        out.push_str(&buttons.join(" | "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{Action, MenuButton};

    #[test]
    fn menu_items_parse_back_to_selections() {
        let lines = menu();
        assert_eq!(lines.len(), Intent::objections().len() + 3);

        for (i, line) in lines.iter().take(10).enumerate() {
            assert!(matches!(
                Action::from_message(line),
                Action::MenuSelection { index, .. } if index == i + 1
            ));
        }
        assert!(matches!(
            Action::from_message(&lines[10]),
            Action::MenuButton { button: MenuButton::FreeInput, .. }
        ));
        assert!(matches!(
            Action::from_message(&lines[11]),
            Action::MenuButton { button: MenuButton::SwitchTone, .. }
        ));
        assert!(matches!(
            Action::from_message(&lines[12]),
            Action::MenuButton { button: MenuButton::RequestSummary, .. }
        ));
    }

    #[test]
    fn script_reply_shows_title_and_buttons() {
        let reply = TurnReply::script(Intent::Expensive, "— a\n— b\n— c\n— d");
        let rendered = render_reply(&reply);

        assert!(rendered.starts_with("[Дорого / цены кусаются]\n— a"));
        assert!(rendered.contains("Ещё вариант (/more expensive)"));
        assert!(rendered.contains("(/summary)"));
        assert!(rendered.contains("(/tone)"));
    }

    #[test]
    fn plain_message_is_text_only() {
        assert_eq!(render_reply(&TurnReply::message("ok")), "ok");
    }
}
