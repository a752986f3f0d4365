use anyhow::Result;

use crate::chat::ChatSession;
use crate::config::{ConfigManager, ResolveOptions, resolve_persona};

pub struct ChatOptions {
    pub name: Option<String>,
    pub interval_ms: Option<u64>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let persona = resolve_persona(
        &ResolveOptions {
            name: options.name,
            interval_ms: options.interval_ms,
        },
        &config_file,
    )?;

    let mut session = ChatSession::new(persona);
    session.run().await
}
