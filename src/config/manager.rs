use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::chat::{
    DEFAULT_IDLE_AVATAR, DEFAULT_INTERVAL_MS, DEFAULT_NAME, DEFAULT_REPLY, DEFAULT_TALKING_AVATAR,
    DEFAULT_USER_NAME, Persona, default_greeting,
};
use crate::paths;

/// Environment variable consulted for the wiki API token when
/// `api_token_env` is not set.
pub const DEFAULT_TOKEN_ENV: &str = "BUDDY_WIKI_TOKEN";

/// Persona settings in the `[buddy]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuddyConfig {
    /// Assistant name.
    pub name: Option<String>,
    /// First message of every session.
    pub greeting: Option<String>,
    /// The reply typed out after each user message.
    pub reply: Option<String>,
    /// Milliseconds between two revealed characters.
    pub interval_ms: Option<u64>,
    pub idle_avatar: Option<String>,
    pub talking_avatar: Option<String>,
}

/// Wiki connection settings in the `[wiki]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Site root, e.g. `https://example.atlassian.net`.
    pub base_url: Option<String>,
    /// Account used for HTTP Basic authentication.
    pub username: Option<String>,
    /// API token stored directly in config (not recommended).
    #[serde(default)]
    pub api_token: Option<String>,
    /// Environment variable name containing the API token.
    #[serde(default)]
    pub api_token_env: Option<String>,
}

impl WikiConfig {
    /// Name of the environment variable holding the token.
    pub fn token_env(&self) -> &str {
        self.api_token_env.as_deref().unwrap_or(DEFAULT_TOKEN_ENV)
    }

    /// Gets the API token, preferring the environment variable over the config file.
    pub fn get_api_token(&self) -> Option<String> {
        if let Ok(token) = std::env::var(self.token_env())
            && !token.is_empty()
        {
            return Some(token);
        }
        self.api_token.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/buddy/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub buddy: BuddyConfig,
    #[serde(default)]
    pub wiki: WikiConfig,
}

/// CLI overrides for the chat persona.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub name: Option<String>,
    pub interval_ms: Option<u64>,
}

/// CLI overrides for the wiki connection.
#[derive(Debug, Clone, Default)]
pub struct WikiOptions {
    pub base_url: Option<String>,
    pub username: Option<String>,
}

/// Wiki connection settings after merging CLI options, config file and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWiki {
    pub base_url: String,
    pub username: String,
    pub api_token: String,
}

/// Builds the chat persona from CLI options and config file settings.
///
/// CLI options take precedence over config file values; anything unset
/// falls back to the built-in persona.
pub fn resolve_persona(options: &ResolveOptions, config_file: &ConfigFile) -> Result<Persona> {
    let buddy = &config_file.buddy;

    let name = options
        .name
        .as_ref()
        .or(buddy.name.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_NAME.to_string());
    // replies replace the tail only when it is the assistant's
    if name == DEFAULT_USER_NAME {
        bail!(
            "Invalid configuration: assistant name '{name}' is the name used for your own messages\n\n\
             Pick another name via:\n  \
             - CLI option: buddy chat --name <name>\n  \
             - Config file: ~/.config/buddy/config.toml ([buddy] name)"
        );
    }

    let interval_ms = options
        .interval_ms
        .or(buddy.interval_ms)
        .unwrap_or(DEFAULT_INTERVAL_MS);
    if interval_ms == 0 {
        bail!(
            "Invalid configuration: 'interval_ms' must be greater than 0\n\n\
             Set it via:\n  \
             - CLI option: buddy chat --interval-ms <ms>\n  \
             - Config file: ~/.config/buddy/config.toml"
        );
    }

    Ok(Persona {
        greeting: buddy
            .greeting
            .clone()
            .unwrap_or_else(|| default_greeting(&name)),
        name,
        user_name: DEFAULT_USER_NAME.to_string(),
        reply: buddy
            .reply
            .clone()
            .unwrap_or_else(|| DEFAULT_REPLY.to_string()),
        interval: Duration::from_millis(interval_ms),
        idle_avatar: buddy
            .idle_avatar
            .clone()
            .unwrap_or_else(|| DEFAULT_IDLE_AVATAR.to_string()),
        talking_avatar: buddy
            .talking_avatar
            .clone()
            .unwrap_or_else(|| DEFAULT_TALKING_AVATAR.to_string()),
    })
}

/// Resolves the wiki connection by merging CLI options with config file settings.
///
/// # Errors
///
/// Returns an error if the base URL, username or API token is missing.
pub fn resolve_wiki(options: &WikiOptions, config_file: &ConfigFile) -> Result<ResolvedWiki> {
    let wiki = &config_file.wiki;

    let base_url = options
        .base_url
        .as_ref()
        .or(wiki.base_url.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'base_url'\n\n\
                 Please provide it via:\n  \
                 - CLI option: buddy fetch --base-url <url>\n  \
                 - Config file: [wiki] base_url in ~/.config/buddy/config.toml"
            )
        })?;

    let username = options
        .username
        .as_ref()
        .or(wiki.username.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'username'\n\n\
                 Please provide it via:\n  \
                 - CLI option: buddy fetch --username <user>\n  \
                 - Config file: [wiki] username in ~/.config/buddy/config.toml"
            )
        })?;

    let Some(api_token) = wiki.get_api_token() else {
        let env_var = wiki.token_env();
        bail!(
            "The wiki requires an API token\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-token\"\n\n\
             Or set api_token under [wiki] in ~/.config/buddy/config.toml"
        );
    };

    Ok(ResolvedWiki {
        base_url,
        username,
        api_token,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/buddy/config.toml`
    /// or `~/.config/buddy/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            return Ok(ConfigFile::default());
        }
        self.load()
    }
}
