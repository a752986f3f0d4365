//! # buddy - a chat buddy for the terminal
//!
//! `buddy` is a small chat widget: you type a message and a robot persona
//! types its reply back one character at a time. It can also fetch the
//! storage body of a wiki page.
//!
//! ## Quick Start
//!
//! ```bash
//! # Chat with the default persona
//! buddy
//!
//! # Faster typing, different name
//! buddy chat --name Robo --interval-ms 40
//!
//! # Print a wiki page body
//! BUDDY_WIKI_TOKEN=... buddy fetch 229597 --base-url https://example.atlassian.net --username me@example.com
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/buddy/config.toml`:
//!
//! ```toml
//! [buddy]
//! name = "Purple Pete"
//! reply = "At the moment we are under maintenance..."
//! interval_ms = 100
//!
//! [wiki]
//! base_url = "https://example.atlassian.net"
//! username = "me@example.com"
//! api_token_env = "BUDDY_WIKI_TOKEN"
//! ```

/// Chat log, typing animation and the interactive session.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Repeating timers for the typing animation.
pub mod scheduler;

/// Terminal UI components (styles, avatar, live line).
pub mod ui;

/// Wiki page content client.
pub mod wiki;
