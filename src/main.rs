use std::sync::Arc;

use tokio::io::BufReader;
use tracing::info;

use skriptolog::adapters::{ConsoleTransport, InMemorySessionStore, JsonLinesSummaryLog};
use skriptolog::application::ProcessTurnHandler;
use skriptolog::config::{AppConfig, ConfigError};
use skriptolog::domain::script::{KeywordIntentClassifier, ReplyComposer, ScriptLibrary, ThreadRngChoice};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    config.logging.init()?;
    info!(
        summary_path = %config.storage.summary_path.display(),
        default_tone = %config.dialog.default_tone,
        digest_turns = config.dialog.digest_turns,
        "Starting Skriptolog"
    );

    let sessions = InMemorySessionStore::new(config.dialog.default_tone);
    let summary_log = JsonLinesSummaryLog::new(&config.storage.summary_path);
    let composer = ReplyComposer::new(ScriptLibrary::standard(), Arc::new(ThreadRngChoice));

    let handler = ProcessTurnHandler::new(
        Arc::new(sessions),
        Arc::new(summary_log),
        Arc::new(KeywordIntentClassifier),
        composer,
    )
    .with_digest_turns(config.dialog.digest_turns);

    let transport = ConsoleTransport::new(Arc::new(handler));
    transport
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    Ok(())
}
