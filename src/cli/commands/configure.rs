//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Text};

use crate::chat::{DEFAULT_INTERVAL_MS, DEFAULT_NAME, DEFAULT_REPLY};
use crate::config::{ConfigFile, ConfigManager};
use crate::ui::{PromptResultExt, Style};

/// Runs the configure command.
///
/// With `show`, prints the current configuration. Otherwise asks for the
/// persona and wiki defaults and saves them. Cancelling any prompt leaves
/// the file untouched.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_config(&config, &manager);
    if show {
        return Ok(());
    }

    if !ask_settings(&mut config)? {
        println!();
        return Ok(());
    }

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

/// Fills `config` from prompts. Returns `false` if the user backed out.
fn ask_settings(config: &mut ConfigFile) -> Result<bool> {
    let Some(name) = prompt_text(
        "Assistant name:",
        config.buddy.name.as_deref().unwrap_or(DEFAULT_NAME),
    )?
    else {
        return Ok(false);
    };
    let Some(reply) = prompt_text(
        "Reply text:",
        config.buddy.reply.as_deref().unwrap_or(DEFAULT_REPLY),
    )?
    else {
        return Ok(false);
    };
    let Some(interval_ms) = CustomType::<u64>::new("Typing interval (ms):")
        .with_default(config.buddy.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS))
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()
        .or_cancelled()?
    else {
        return Ok(false);
    };
    if interval_ms == 0 {
        bail!("Typing interval must be greater than 0");
    }

    let Some(base_url) = prompt_optional(
        "Wiki base URL:",
        config.wiki.base_url.as_deref(),
        "e.g. https://example.atlassian.net (leave empty to skip)",
    )?
    else {
        return Ok(false);
    };
    let Some(username) = prompt_optional(
        "Wiki username:",
        config.wiki.username.as_deref(),
        "Account used for the wiki API",
    )?
    else {
        return Ok(false);
    };
    let Some(token_env) = prompt_text(
        "Environment variable holding the wiki API token:",
        config.wiki.token_env(),
    )?
    else {
        return Ok(false);
    };

    config.buddy.name = Some(name);
    config.buddy.reply = Some(reply);
    config.buddy.interval_ms = Some(interval_ms);
    config.wiki.base_url = base_url;
    config.wiki.username = username;
    config.wiki.api_token_env = Some(token_env);
    Ok(true)
}

fn prompt_text(message: &str, default: &str) -> Result<Option<String>> {
    let Some(value) = Text::new(message).with_default(default).prompt().or_cancelled()? else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        bail!("Value cannot be empty");
    }
    Ok(Some(value.to_string()))
}

/// `Ok(Some(None))` is an answered prompt left empty.
fn prompt_optional(
    message: &str,
    default: Option<&str>,
    help: &str,
) -> Result<Option<Option<String>>> {
    let mut prompt = Text::new(message).with_help_message(help);
    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    let Some(value) = prompt.prompt().or_cancelled()? else {
        return Ok(None);
    };
    let value = value.trim();
    Ok(Some((!value.is_empty()).then(|| value.to_string())))
}

fn print_config(config: &ConfigFile, manager: &ConfigManager) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Chat"));
    println!(
        "  {}        {}",
        Style::label("name"),
        config.buddy.name.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}       {}",
        Style::label("reply"),
        config.buddy.reply.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {} {}",
        Style::label("interval_ms"),
        config
            .buddy
            .interval_ms
            .map_or_else(not_set, Style::value)
    );
    println!();

    println!("{}", Style::header("Wiki"));
    println!(
        "  {}    {}",
        Style::label("base_url"),
        config.wiki.base_url.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}    {}",
        Style::label("username"),
        config.wiki.username.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("api_token"),
        if config.wiki.get_api_token().is_some() {
            Style::value("(set)")
        } else {
            Style::secondary(format!("(not set, export {})", config.wiki.token_env()))
        }
    );
    println!();
    println!(
        "{}",
        Style::hint(format!("config file: {}", manager.config_path().display()))
    );
    println!();
}
