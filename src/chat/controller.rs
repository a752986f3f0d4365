//! The chat session controller.
//!
//! Owns the log, the input buffer, the presentation flags and the typing
//! animator. Every mutation happens here, one event at a time: either a
//! user action or a tick delivered through [`ChatController::next_tick`].

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::animator::{Reveal, RunId, TypingAnimator};
use super::message::{ChatLog, ChatMessage};
use super::persona::Persona;
use super::view::{ChatView, Presentation};
use crate::scheduler::Scheduler;

/// A key press on the input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Enter,
}

pub struct ChatController<S, V> {
    persona: Persona,
    log: ChatLog,
    input: String,
    presentation: Presentation,
    animator: TypingAnimator,
    scheduler: S,
    view: V,
    ticks_tx: UnboundedSender<RunId>,
    ticks_rx: UnboundedReceiver<RunId>,
}

impl<S: Scheduler, V: ChatView> ChatController<S, V> {
    /// Creates a controller whose log starts with the persona's greeting.
    pub fn new(persona: Persona, scheduler: S, view: V) -> Self {
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
        let presentation = Presentation {
            assistant_active: false,
            avatar: persona.idle_avatar.clone(),
        };

        let mut controller = Self {
            animator: TypingAnimator::new(persona.interval),
            persona,
            log: ChatLog::new(),
            input: String::new(),
            presentation,
            scheduler,
            view,
            ticks_tx,
            ticks_rx,
        };
        controller.push_greeting();
        controller
    }

    fn push_greeting(&mut self) {
        self.log.push(ChatMessage::new(
            self.persona.name.clone(),
            self.persona.greeting.clone(),
            Some(self.persona.idle_avatar.clone()),
        ));
    }

    /// Sends `text` as a user message and starts typing the reply.
    ///
    /// Whitespace-only input is ignored. Returns `true` if a message was sent.
    pub fn send_message(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        // the previous run must be dead before the log changes
        self.animator.cancel();

        self.log.push(ChatMessage::new(
            self.persona.user_name.clone(),
            text,
            None,
        ));
        self.input.clear();
        self.view.scroll_to_bottom();

        self.presentation.assistant_active = true;
        self.presentation.avatar.clone_from(&self.persona.talking_avatar);
        self.render();

        tracing::debug!(len = text.len(), "user message sent");
        if self
            .animator
            .start(&self.persona.reply, &self.scheduler, &self.ticks_tx)
            .is_none()
        {
            self.on_complete();
        }
        true
    }

    /// Applies one key press to the input buffer. Enter sends the buffer.
    ///
    /// Returns `true` if a message was sent.
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) => {
                self.input.push(c);
                false
            }
            KeyInput::Backspace => {
                self.input.pop();
                false
            }
            KeyInput::Enter => {
                let text = self.input.trim().to_string();
                self.send_message(&text)
            }
        }
    }

    /// Waits for the next tick of any run.
    pub async fn next_tick(&mut self) -> Option<RunId> {
        self.ticks_rx.recv().await
    }

    /// Applies a tick. Returns `true` if the log changed.
    pub fn handle_tick(&mut self, run: RunId) -> bool {
        let Some(Reveal { partial, finished }) = self.animator.tick(run) else {
            return false;
        };

        self.on_tick(partial);
        if finished {
            self.on_complete();
        }
        true
    }

    /// Applies every tick that is already queued, without waiting.
    ///
    /// Returns how many of them changed the log.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(run) = self.ticks_rx.try_recv() {
            if self.handle_tick(run) {
                applied += 1;
            }
        }
        applied
    }

    fn on_tick(&mut self, partial: String) {
        let message = ChatMessage::new(
            self.persona.name.clone(),
            partial,
            Some(self.persona.talking_avatar.clone()),
        );
        self.log.replace_tail_from(&self.persona.name, message);
        self.render();
        self.view.scroll_to_bottom();
    }

    fn on_complete(&mut self) {
        self.presentation.assistant_active = false;
        self.presentation.avatar.clone_from(&self.persona.idle_avatar);
        self.render();
    }

    /// Stops the reply being typed, leaving the partial text in the log.
    pub fn interrupt(&mut self) {
        if self.animator.cancel() {
            self.on_complete();
        }
    }

    /// Resets the log to the greeting.
    pub fn clear(&mut self) {
        self.animator.cancel();
        self.log.clear();
        self.input.clear();
        self.push_greeting();
        self.on_complete();
        self.view.scroll_to_bottom();
    }

    /// Draws the current state.
    pub fn render(&mut self) {
        self.view.render(&self.log, &self.presentation);
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn log(&self) -> &ChatLog {
        &self.log
    }

    pub const fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub const fn animator(&self) -> &TypingAnimator {
        &self.animator
    }

    pub const fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub const fn persona(&self) -> &Persona {
        &self.persona
    }

    pub const fn view(&self) -> &V {
        &self.view
    }
}
