//! ProcessTurnHandler - Command handler for one conversation turn.
//!
//! The session mutex is held from lookup until the reply is built, including
//! the summary write, so turns for one user never interleave.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::conversation::{
    reply::{FAREWELL, FREE_TEXT_PROMPT, GREETING, SUMMARY_PROMPT, SUMMARY_SAVED},
    transition, Action, DialogState, Effect, Session, SummaryRecord, Transition, Turn, TurnReply,
};
use crate::domain::foundation::UserId;
use crate::domain::script::{Intent, IntentClassifier, ReplyComposer, SlotExtractor, SlotSet};
use crate::ports::{SessionStore, SummaryLog, SummaryLogError};

/// Turns included in a summary digest unless configured otherwise.
const DEFAULT_DIGEST_TURNS: usize = 5;

/// Command carrying one inbound action.
#[derive(Debug, Clone)]
pub struct ProcessTurnCommand {
    pub user_id: UserId,
    pub action: Action,
}

/// Result of a processed turn.
#[derive(Debug, Clone)]
pub struct ProcessTurnResult {
    pub reply: TurnReply,
    /// Dialog state after the turn.
    pub state: DialogState,
}

/// Errors from processing a turn.
#[derive(Debug, thiserror::Error)]
pub enum ProcessTurnError {
    /// The summary could not be written; the session is unchanged.
    #[error("Failed to persist summary: {0}")]
    Persistence(#[from] SummaryLogError),
}

/// Handler for conversation turns.
pub struct ProcessTurnHandler {
    sessions: Arc<dyn SessionStore>,
    summary_log: Arc<dyn SummaryLog>,
    classifier: Arc<dyn IntentClassifier>,
    extractor: SlotExtractor,
    composer: ReplyComposer,
    digest_turns: usize,
}

impl ProcessTurnHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        summary_log: Arc<dyn SummaryLog>,
        classifier: Arc<dyn IntentClassifier>,
        composer: ReplyComposer,
    ) -> Self {
        Self {
            sessions,
            summary_log,
            classifier,
            extractor: SlotExtractor::new(),
            composer,
            digest_turns: DEFAULT_DIGEST_TURNS,
        }
    }

    /// Number of most recent turns folded into a summary digest.
    pub fn with_digest_turns(mut self, digest_turns: usize) -> Self {
        self.digest_turns = digest_turns;
        self
    }

    pub async fn handle(
        &self,
        cmd: ProcessTurnCommand,
    ) -> Result<ProcessTurnResult, ProcessTurnError> {
        let handle = self.sessions.session(cmd.user_id).await;
        let mut session = handle.lock().await;

        // 1. Decide
        let Transition { next, effects } = transition(session.state(), &cmd.action);
        debug!(
            user_id = %cmd.user_id,
            action = cmd.action.kind(),
            from = ?session.state(),
            to = ?next,
            "Dialog transition"
        );

        // 2. Apply effects; a failure here leaves the state where it was
        let mut reply = TurnReply::default();
        for effect in effects {
            reply = self.apply(&mut session, effect).await?;
        }

        // 3. Commit the state change
        session.set_state(next);

        Ok(ProcessTurnResult {
            reply,
            state: session.state(),
        })
    }

    async fn apply(
        &self,
        session: &mut Session,
        effect: Effect,
    ) -> Result<TurnReply, ProcessTurnError> {
        let reply = match effect {
            Effect::Greet => TurnReply::message(GREETING),
            Effect::PromptFreeText => TurnReply::message(FREE_TEXT_PROMPT),
            Effect::PromptSummary => TurnReply::message(SUMMARY_PROMPT),
            Effect::EndFlow => {
                info!(user_id = %session.user_id(), "Flow ended");
                TurnReply::ended(FAREWELL)
            }
            Effect::RotateTone => {
                let tone = session.rotate_tone();
                info!(user_id = %session.user_id(), tone = %tone, "Tone switched");
                TurnReply::tone_switched(tone)
            }
            Effect::Respond {
                menu_index,
                utterance,
            } => self.respond(session, menu_index, utterance),
            Effect::ReplayVariant(intent) => self.replay(session, intent),
            Effect::PersistSummary { note } => self.persist_summary(session, note).await?,
            Effect::IgnoreUnknown(token) => {
                warn!(user_id = %session.user_id(), token = %token, "Ignoring unknown action");
                TurnReply::default()
            }
        };
        Ok(reply)
    }

    fn respond(
        &self,
        session: &mut Session,
        menu_index: Option<usize>,
        utterance: String,
    ) -> TurnReply {
        let intent = menu_index
            .and_then(Intent::from_menu_index)
            .unwrap_or_else(|| self.classifier.classify(&utterance));
        let slots = self.extractor.extract(&utterance);
        let text = self.composer.compose(intent, session.tone(), &slots).render();

        info!(
            user_id = %session.user_id(),
            intent = %intent,
            slots = slots.len(),
            tone = %session.tone(),
            "Composed reply"
        );

        session.record_turn(Turn::new(utterance, intent, slots, text.clone()));
        TurnReply::script(intent, text)
    }

    fn replay(&self, session: &Session, intent: Intent) -> TurnReply {
        let slots = session
            .last_turn_for(intent)
            .map(|turn| turn.slots().clone())
            .unwrap_or_else(SlotSet::new);
        let text = self.composer.compose(intent, session.tone(), &slots).render();

        info!(
            user_id = %session.user_id(),
            intent = %intent,
            slots = slots.len(),
            "Composed another variant"
        );

        TurnReply::script(intent, text)
    }

    async fn persist_summary(
        &self,
        session: &Session,
        note: String,
    ) -> Result<TurnReply, ProcessTurnError> {
        let record = SummaryRecord::new(
            session.user_id(),
            note,
            session.recent_turns(self.digest_turns),
        );

        if let Err(e) = self.summary_log.append_record(&record).await {
            warn!(user_id = %session.user_id(), error = %e, "Summary not saved");
            return Err(e.into());
        }

        info!(
            user_id = %session.user_id(),
            turns = session.recent_turns(self.digest_turns).len(),
            "Summary saved"
        );
        Ok(TurnReply::message(SUMMARY_SAVED))
    }
}
