use super::message::ChatLog;

/// Presentation flags the controller hands to the view next to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Set while the assistant is typing a reply.
    pub assistant_active: bool,
    /// Avatar currently shown for the assistant.
    pub avatar: String,
}

/// Something that can display a chat log.
pub trait ChatView {
    /// Draws the current log and presentation state.
    fn render(&mut self, log: &ChatLog, presentation: &Presentation);

    /// Brings the newest message into view.
    fn scroll_to_bottom(&mut self);
}

/// A view that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl ChatView for NullView {
    fn render(&mut self, _log: &ChatLog, _presentation: &Presentation) {}

    fn scroll_to_bottom(&mut self) {}
}

/// A view that remembers what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub renders: usize,
    pub scrolls: usize,
    /// Text of the tail message at every render.
    pub tails: Vec<Option<String>>,
    pub last_presentation: Option<Presentation>,
}

impl ChatView for RecordingView {
    fn render(&mut self, log: &ChatLog, presentation: &Presentation) {
        self.renders += 1;
        self.tails
            .push(log.tail().map(|message| message.text().to_string()));
        self.last_presentation = Some(presentation.clone());
    }

    fn scroll_to_bottom(&mut self) {
        self.scrolls += 1;
    }
}
