//! Read-eval-print loop over any async line source.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info};

use crate::application::{ProcessTurnCommand, ProcessTurnError, ProcessTurnHandler};
use crate::domain::conversation::Action;
use crate::domain::foundation::UserId;

use super::input::ConsoleInput;
use super::render::{menu, render_reply};

/// The console talks as a single user.
pub const CONSOLE_USER_ID: i64 = 1;

const SAVE_FAILED: &str = "Не удалось сохранить конспект. Отправьте его ещё раз.";

pub struct ConsoleTransport {
    handler: Arc<ProcessTurnHandler>,
    user_id: UserId,
}

impl ConsoleTransport {
    pub fn new(handler: Arc<ProcessTurnHandler>) -> Self {
        Self {
            handler,
            user_id: UserId::new(CONSOLE_USER_ID),
        }
    }

    /// Processes lines until `/quit` or end of input. After a cancel, lines
    /// are ignored until the next `/start`.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut ended = false;
        info!(user_id = %self.user_id, "Console transport started");

        while let Some(line) = lines.next_line().await? {
            let action = match ConsoleInput::parse(&line) {
                ConsoleInput::Quit => break,
                ConsoleInput::Menu => {
                    write_block(&mut writer, &menu().join("\n")).await?;
                    continue;
                }
                ConsoleInput::Action(action) => action,
            };

            let show_menu = matches!(action, Action::Start);
            if ended && !show_menu {
                continue;
            }
            let cmd = ProcessTurnCommand {
                user_id: self.user_id,
                action,
            };

            let output = match self.handler.handle(cmd).await {
                Ok(result) if result.reply.is_empty() => continue,
                Ok(result) => {
                    ended = result.reply.flow_ended;
                    render_reply(&result.reply)
                }
                Err(ProcessTurnError::Persistence(e)) => {
                    error!(error = %e, "Summary persistence failed");
                    SAVE_FAILED.to_string()
                }
            };

            write_block(&mut writer, &output).await?;
            if show_menu {
                write_block(&mut writer, &menu().join("\n")).await?;
            }
        }

        info!(user_id = %self.user_id, "Console transport stopped");
        writer.flush().await
    }
}

async fn write_block<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n\n").await?;
    writer.flush().await
}
