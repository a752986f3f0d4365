//! Prompt input read on a blocking thread and delivered as events.
//!
//! The thread asks for one line, sends it, then waits until the session
//! has handled it before asking again. Ticks keep flowing in the meantime.

use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::command::SlashCommandCompleter;
use crate::ui::PromptResultExt;

/// Something the user did at the prompt.
#[derive(Debug)]
pub enum PromptEvent {
    Line(String),
    /// Ctrl+C or Esc.
    Cancelled,
    Failed(anyhow::Error),
}

pub struct PromptReader {
    events: UnboundedReceiver<PromptEvent>,
    resume: UnboundedSender<()>,
}

impl PromptReader {
    /// Starts reading lines from the terminal.
    ///
    /// The thread stops once the reader is dropped.
    pub fn spawn() -> Self {
        let (events_tx, events) = mpsc::unbounded_channel();
        let (resume, mut resume_rx) = mpsc::unbounded_channel::<()>();

        tokio::task::spawn_blocking(move || {
            let render_config = render_config();
            loop {
                let event = match Text::new("")
                    .with_render_config(render_config)
                    .with_autocomplete(SlashCommandCompleter)
                    .with_help_message("Say something, /help for commands, Ctrl+C to stop")
                    .prompt()
                    .or_cancelled()
                {
                    Ok(Some(line)) => PromptEvent::Line(line),
                    Ok(None) => PromptEvent::Cancelled,
                    Err(err) => PromptEvent::Failed(err),
                };

                if events_tx.send(event).is_err() || resume_rx.blocking_recv().is_none() {
                    break;
                }
            }
            tracing::debug!("prompt reader stopped");
        });

        Self { events, resume }
    }

    /// A reader fed through the returned sender instead of the terminal.
    pub fn channel() -> (UnboundedSender<PromptEvent>, Self) {
        let (events_tx, events) = mpsc::unbounded_channel();
        let (resume, _) = mpsc::unbounded_channel();
        (events_tx, Self { events, resume })
    }

    /// Waits for the next event. `None` once input has ended.
    pub async fn next(&mut self) -> Option<PromptEvent> {
        self.events.recv().await
    }

    /// Lets the reader ask for the next line.
    pub fn resume(&self) {
        if self.resume.send(()).is_err() {
            tracing::trace!("no prompt thread to resume");
        }
    }
}

fn render_config() -> RenderConfig<'static> {
    let prompt_style = Styled::new("❯")
        .with_fg(Color::LightBlue)
        .with_attr(Attributes::BOLD);
    let mut render_config = RenderConfig::default()
        .with_prompt_prefix(prompt_style)
        .with_answered_prompt_prefix(prompt_style);

    // Non-highlighted suggestions: gray
    render_config.option = StyleSheet::new().with_fg(Color::Grey);
    // Highlighted suggestion: purple
    render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));
    render_config
}
