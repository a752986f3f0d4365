#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file values
//! 3. Built-in defaults

use std::time::Duration;

use buddy_chat::chat::{DEFAULT_NAME, DEFAULT_REPLY, Persona, default_greeting};
use buddy_chat::config::{
    BuddyConfig, ConfigFile, ResolveOptions, WikiConfig, WikiOptions, resolve_persona,
    resolve_wiki,
};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        buddy: BuddyConfig {
            name: Some("Config Bot".to_string()),
            greeting: Some("Hello from config".to_string()),
            reply: Some("Config reply".to_string()),
            interval_ms: Some(75),
            idle_avatar: Some("idle.png".to_string()),
            talking_avatar: Some("talking.png".to_string()),
        },
        wiki: WikiConfig {
            base_url: Some("http://config.local".to_string()),
            username: Some("config-user".to_string()),
            api_token: Some("config-token".to_string()),
            api_token_env: Some("BUDDY_PRIORITY_TEST_UNSET_TOKEN".to_string()),
        },
    }
}

#[test]
fn test_builtin_defaults_without_config() {
    let persona = resolve_persona(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(persona.name, DEFAULT_NAME);
    assert_eq!(persona.reply, DEFAULT_REPLY);
    assert_eq!(persona, Persona::default());
}

#[test]
fn test_config_values_used_when_cli_not_specified() {
    let persona =
        resolve_persona(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(persona.name, "Config Bot");
    assert_eq!(persona.greeting, "Hello from config");
    assert_eq!(persona.reply, "Config reply");
    assert_eq!(persona.interval, Duration::from_millis(75));
    assert_eq!(persona.idle_avatar, "idle.png");
    assert_eq!(persona.talking_avatar, "talking.png");
}

#[test]
fn test_cli_name_overrides_config_name() {
    let options = ResolveOptions {
        name: Some("Cli Bot".to_string()),
        interval_ms: None,
    };

    let persona = resolve_persona(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(persona.name, "Cli Bot");
    // an explicit greeting is kept even when the name changes
    assert_eq!(persona.greeting, "Hello from config");
}

#[test]
fn test_default_greeting_follows_cli_name() {
    let options = ResolveOptions {
        name: Some("Cli Bot".to_string()),
        interval_ms: None,
    };

    let persona = resolve_persona(&options, &ConfigFile::default()).unwrap();

    assert_eq!(persona.greeting, default_greeting("Cli Bot"));
}

#[test]
fn test_cli_interval_overrides_config_interval() {
    let options = ResolveOptions {
        name: None,
        interval_ms: Some(10),
    };

    let persona = resolve_persona(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(persona.interval, Duration::from_millis(10));
}

#[test]
fn test_cli_wiki_options_override_config() {
    let options = WikiOptions {
        base_url: Some("http://cli.local".to_string()),
        username: Some("cli-user".to_string()),
    };

    let resolved = resolve_wiki(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.base_url, "http://cli.local");
    assert_eq!(resolved.username, "cli-user");
    assert_eq!(resolved.api_token, "config-token");
}

#[test]
fn test_wiki_config_used_when_cli_not_specified() {
    let resolved = resolve_wiki(&WikiOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.base_url, "http://config.local");
    assert_eq!(resolved.username, "config-user");
}

#[test]
fn test_config_name_matching_user_sender_is_rejected() {
    let mut config = make_config_with_defaults();
    config.buddy.name = Some("You".to_string());

    let err = resolve_persona(&ResolveOptions::default(), &config).unwrap_err();

    assert!(err.to_string().contains("'You'"));
}

#[test]
fn test_cli_name_can_replace_a_conflicting_config_name() {
    let mut config = make_config_with_defaults();
    config.buddy.name = Some("You".to_string());
    let options = ResolveOptions {
        name: Some("Robo".to_string()),
        interval_ms: None,
    };

    let persona = resolve_persona(&options, &config).unwrap();

    assert_eq!(persona.name, "Robo");
    assert_ne!(persona.name, persona.user_name);
}
