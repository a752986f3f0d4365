//! Terminal rendition of the chat view.
//!
//! Settled messages are printed once, in order. The reply the assistant is
//! still typing lives on a [`LiveLine`] that is redrawn on every tick and
//! printed for good once the run completes or is interrupted.

use std::io::{self, Write};

use super::message::{ChatLog, ChatMessage};
use super::view::{ChatView, Presentation};
use crate::ui::{LiveLine, RobotAvatar, Style};

pub struct TerminalView {
    assistant: String,
    printed: usize,
    live: Option<LiveLine>,
    avatar: RobotAvatar,
}

impl TerminalView {
    pub fn new(assistant: impl Into<String>) -> Self {
        let mut avatar = RobotAvatar::new();
        avatar.init();
        Self {
            assistant: assistant.into(),
            printed: 0,
            live: None,
            avatar,
        }
    }

    fn settle_live(&mut self) {
        if let Some(live) = self.live.take() {
            live.clear();
        }
    }
}

impl ChatView for TerminalView {
    fn render(&mut self, log: &ChatLog, presentation: &Presentation) {
        self.avatar.set_talking(presentation.assistant_active);

        // the log shrank: it was cleared, start over
        if log.len() < self.printed {
            self.settle_live();
            println!();
            self.printed = 0;
        }

        let live_tail = presentation.assistant_active
            && log.len() > self.printed
            && log.tail().is_some_and(|tail| tail.is_from(&self.assistant));
        let settled = if live_tail { log.len() - 1 } else { log.len() };

        if settled > self.printed {
            self.settle_live();
            for message in &log.messages()[self.printed..settled] {
                println!("{}", format_message(message, &self.assistant));
            }
            self.printed = settled;
        }

        match log.tail() {
            Some(tail) if live_tail => {
                let face = Style::assistant(self.avatar.next_face());
                let text = format!("{}: {}", Style::assistant(tail.sender()), tail.text());
                self.live.get_or_insert_with(LiveLine::new).update(&face, &text);
            }
            _ => self.settle_live(),
        }
    }

    fn scroll_to_bottom(&mut self) {
        if let Err(err) = io::stdout().flush() {
            tracing::debug!(%err, "stdout flush failed");
        }
    }
}

/// Formats one settled message as a single line.
pub fn format_message(message: &ChatMessage, assistant: &str) -> String {
    let face = if message.avatar().is_some() {
        RobotAvatar::idle_face()
    } else {
        "     "
    };

    if message.is_from(assistant) {
        format!(
            "{} {}: {}",
            Style::assistant(face),
            Style::assistant(message.sender()),
            message.text()
        )
    } else {
        format!("{face} {}: {}", Style::user(message.sender()), message.text())
    }
}
