use anyhow::Result;

use super::command::{Input, SlashCommand, parse_input};
use super::controller::{ChatController, KeyInput};
use super::persona::Persona;
use super::prompt::{PromptEvent, PromptReader};
use super::terminal::TerminalView;
use super::ui;
use super::view::ChatView;
use crate::scheduler::{Scheduler, TokioScheduler};

/// An interactive chat session.
///
/// Prompt input and animation ticks are handled as they arrive, so a line
/// sent while a reply is being typed interrupts it and starts a new one.
pub struct ChatSession<S = TokioScheduler, V = TerminalView> {
    controller: ChatController<S, V>,
}

impl ChatSession {
    pub fn new(persona: Persona) -> Self {
        let view = TerminalView::new(persona.name.clone());
        Self::from_controller(ChatController::new(persona, TokioScheduler, view))
    }

    /// Runs the session in the terminal until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.controller.persona());
        self.controller.render();

        let mut prompt = PromptReader::spawn();
        let result = self.drive(&mut prompt).await;

        self.controller.interrupt();
        ui::print_goodbye();
        result
    }
}

impl<S: Scheduler, V: ChatView> ChatSession<S, V> {
    pub const fn from_controller(controller: ChatController<S, V>) -> Self {
        Self { controller }
    }

    pub const fn controller(&self) -> &ChatController<S, V> {
        &self.controller
    }

    /// Applies prompt events and ticks in arrival order until the user
    /// quits or input ends.
    pub async fn drive(&mut self, prompt: &mut PromptReader) -> Result<()> {
        loop {
            tokio::select! {
                Some(run) = self.controller.next_tick() => {
                    self.controller.handle_tick(run);
                }
                event = prompt.next() => {
                    let Some(event) = event else {
                        return Ok(());
                    };
                    if !self.handle_event(event)? {
                        return Ok(());
                    }
                    prompt.resume();
                }
            }
        }
    }

    /// Returns `false` when the session should end.
    fn handle_event(&mut self, event: PromptEvent) -> Result<bool> {
        match event {
            PromptEvent::Line(line) => Ok(self.handle_line(&line)),
            PromptEvent::Cancelled if self.controller.is_animating() => {
                self.controller.interrupt();
                ui::print_interrupted();
                Ok(true)
            }
            PromptEvent::Cancelled => {
                println!(); // Clear line before goodbye message
                Ok(false)
            }
            PromptEvent::Failed(err) => Err(err),
        }
    }

    fn handle_line(&mut self, line: &str) -> bool {
        match parse_input(line) {
            Input::Empty => true,
            Input::Message(text) => {
                self.controller.set_input(text);
                self.controller.handle_key(KeyInput::Enter);
                true
            }
            Input::Command(SlashCommand::Clear) => {
                self.controller.clear();
                true
            }
            Input::Command(SlashCommand::Help) => {
                ui::print_help();
                true
            }
            Input::Command(SlashCommand::Quit) => false,
            Input::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd} (try /help)"));
                true
            }
        }
    }
}
