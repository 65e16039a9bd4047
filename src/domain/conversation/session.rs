//! Session: everything the assistant remembers about one user.

use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::script::{Intent, Tone};

use super::state::DialogState;
use super::turn::Turn;

/// Per-user conversation state. Turn history is append-only.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    user_id: UserId,
    tone: Tone,
    state: DialogState,
    turns: Vec<Turn>,
}

impl Session {
    pub fn new(user_id: UserId, tone: Tone) -> Self {
        Self {
            user_id,
            tone,
            state: DialogState::default(),
            turns: Vec::new(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Advances the tone one step around the cycle and returns the new tone.
    pub fn rotate_tone(&mut self) -> Tone {
        self.tone = self.tone.next();
        self.tone
    }

    pub fn set_state(&mut self, next: DialogState) {
        self.state = next;
    }

    pub fn record_turn(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// The last `n` turns, oldest first.
    pub fn recent_turns(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// Most recent turn classified as `intent`.
    pub fn last_turn_for(&self, intent: Intent) -> Option<&Turn> {
        self.turns.iter().rev().find(|turn| turn.intent() == intent)
    }
}
