use anyhow::Result;

use crate::config::{ConfigManager, WikiOptions, resolve_wiki};
use crate::ui::LiveLine;
use crate::wiki::PageClient;

pub struct FetchOptions {
    pub page_id: String,
    pub base_url: Option<String>,
    pub username: Option<String>,
}

/// Prints the storage body of a wiki page to stdout.
pub async fn run_fetch(options: FetchOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let wiki = resolve_wiki(
        &WikiOptions {
            base_url: options.base_url,
            username: options.username,
        },
        &config_file,
    )?;
    let client = PageClient::from_config(&wiki);

    let spinner = LiveLine::spinner("Fetching page...");
    let content = client.fetch_page_content(&options.page_id).await;
    spinner.clear();

    println!("{}", content?);
    Ok(())
}
