use anyhow::Result;
use clap::Parser;

use buddy_chat::cli::commands::{chat, configure, fetch};
use buddy_chat::cli::{Args, Command};
use buddy_chat::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    match args.command {
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Fetch {
            page_id,
            base_url,
            username,
        }) => {
            let options = fetch::FetchOptions {
                page_id,
                base_url,
                username,
            };
            fetch::run_fetch(options).await?;
        }
        Some(Command::Chat { name, interval_ms }) => {
            let options = chat::ChatOptions { name, interval_ms };
            chat::run_chat(options).await?;
        }
        None => {
            let options = chat::ChatOptions {
                name: None,
                interval_ms: None,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
