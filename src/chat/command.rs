//! What a line typed at the chat prompt means.
//!
//! Every slash command is described once, by [`SlashCommand`]. Parsing,
//! autocompletion and the `/help` listing all read from it.

use inquire::autocompletion::{Autocomplete, Replacement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    /// Reset the log to the greeting.
    Clear,
    Help,
    Quit,
}

impl SlashCommand {
    pub const ALL: [Self; 3] = [Self::Clear, Self::Help, Self::Quit];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Clear => &["reset"],
            Self::Help => &["?"],
            Self::Quit => &["exit", "q"],
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Clear => "Start the conversation over",
            Self::Help => "Show available commands",
            Self::Quit => "Leave the chat",
        }
    }

    /// Looks a command up by name or alias, without the leading slash.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == word || cmd.aliases().contains(&word))
    }

    fn matches_prefix(self, prefix: &str) -> bool {
        self.name().starts_with(prefix) || self.aliases().iter().any(|a| a.starts_with(prefix))
    }
}

/// One line of prompt input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    /// Text to send to the assistant, trimmed.
    Message(String),
    Command(SlashCommand),
    /// A slash command nobody knows, without the slash.
    Unknown(String),
}

/// Classifies a prompt line.
///
/// A line starting with `//` is a message whose text starts with a single
/// `/`.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    if let Some(text) = line.strip_prefix("//") {
        return Input::Message(format!("/{text}"));
    }

    match line.strip_prefix('/') {
        Some(rest) => {
            let word = rest.split_whitespace().next().unwrap_or_default();
            SlashCommand::from_word(word)
                .map_or_else(|| Input::Unknown(rest.trim().to_string()), Input::Command)
        }
        None => Input::Message(line.to_string()),
    }
}

/// Suggests slash commands while the first word is being typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlashCommandCompleter;

impl SlashCommandCompleter {
    fn candidates(input: &str) -> Vec<SlashCommand> {
        let Some(prefix) = input.strip_prefix('/') else {
            return Vec::new();
        };
        // escaped message, or the command word is already finished
        if prefix.starts_with('/') || prefix.contains(char::is_whitespace) {
            return Vec::new();
        }

        SlashCommand::ALL
            .into_iter()
            .filter(|cmd| cmd.matches_prefix(prefix))
            .collect()
    }
}

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        Ok(Self::candidates(input)
            .into_iter()
            .map(|cmd| format!("/{}  {}", cmd.name(), cmd.summary()))
            .collect())
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        if let Some(suggestion) = highlighted_suggestion {
            return Ok(suggestion.split_whitespace().next().map(str::to_string));
        }

        // a single match completes without being highlighted
        Ok(match Self::candidates(input).as_slice() {
            [only] => Some(format!("/{}", only.name())),
            _ => None,
        })
    }
}
