mod manager;

pub use manager::{
    BuddyConfig, ConfigFile, ConfigManager, DEFAULT_TOKEN_ENV, ResolveOptions, ResolvedWiki,
    WikiConfig, WikiOptions, resolve_persona, resolve_wiki,
};
