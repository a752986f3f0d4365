//! The chat widget: message log, typing animation and the terminal session.
//!
//! [`ChatController`] holds all state and is independent of how it is drawn
//! or timed. [`ChatSession`] feeds it prompt lines from a [`PromptReader`]
//! and ticks from a tokio-backed scheduler.

mod animator;
/// Slash commands, prompt line parsing and autocomplete.
pub mod command;
mod controller;
mod message;
mod persona;
mod prompt;
mod session;
mod terminal;
mod ui;
mod view;

pub use animator::{AnimatorState, Reveal, RunId, TypingAnimator};
pub use controller::{ChatController, KeyInput};
pub use message::{ChatLog, ChatMessage};
pub use persona::{
    DEFAULT_IDLE_AVATAR, DEFAULT_INTERVAL_MS, DEFAULT_NAME, DEFAULT_REPLY, DEFAULT_TALKING_AVATAR,
    DEFAULT_USER_NAME, Persona, default_greeting,
};
pub use prompt::{PromptEvent, PromptReader};
pub use session::ChatSession;
pub use terminal::{TerminalView, format_message};
pub use view::{ChatView, NullView, Presentation, RecordingView};
