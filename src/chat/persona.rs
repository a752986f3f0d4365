use std::time::Duration;

pub const DEFAULT_NAME: &str = "Purple Pete";
pub const DEFAULT_USER_NAME: &str = "You";
pub const DEFAULT_REPLY: &str = "At the moment we are under maintenance...";
pub const DEFAULT_INTERVAL_MS: u64 = 100;
pub const DEFAULT_IDLE_AVATAR: &str = "/avatars/PurpleRobot.png";
pub const DEFAULT_TALKING_AVATAR: &str = "/avatars/PurpleRobotTalking.png";

/// Greeting used when none is configured.
pub fn default_greeting(name: &str) -> String {
    format!("Hi! My name is {name} and I'm here to help!")
}

/// Who the assistant is and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Sender name of assistant messages.
    pub name: String,
    /// Sender name of user messages.
    pub user_name: String,
    /// First message in every session.
    pub greeting: String,
    /// The canned reply typed out after every user message.
    pub reply: String,
    /// Delay between two revealed characters.
    pub interval: Duration,
    pub idle_avatar: String,
    pub talking_avatar: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            user_name: DEFAULT_USER_NAME.to_string(),
            greeting: default_greeting(DEFAULT_NAME),
            reply: DEFAULT_REPLY.to_string(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            idle_avatar: DEFAULT_IDLE_AVATAR.to_string(),
            talking_avatar: DEFAULT_TALKING_AVATAR.to_string(),
        }
    }
}
