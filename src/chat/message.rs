/// One entry in the chat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    sender: String,
    text: String,
    avatar: Option<String>,
}

impl ChatMessage {
    pub fn new(sender: impl Into<String>, text: impl Into<String>, avatar: Option<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            avatar,
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn is_from(&self, sender: &str) -> bool {
        self.sender == sender
    }
}

/// Ordered list of chat messages.
///
/// Append-only, except that the tail can be swapped out while the
/// assistant is typing (see [`ChatLog::replace_tail_from`]).
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Drops the tail if it was sent by `sender`, then appends `message`.
    pub fn replace_tail_from(&mut self, sender: &str, message: ChatMessage) {
        if self.tail().is_some_and(|tail| tail.is_from(sender)) {
            self.messages.pop();
        }
        self.messages.push(message);
    }

    pub fn tail(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl<'a> IntoIterator for &'a ChatLog {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_tail_swaps_matching_sender() {
        let mut log = ChatLog::new();
        log.push(ChatMessage::new("You", "hi", None));
        log.push(ChatMessage::new("Pete", "A", None));

        log.replace_tail_from("Pete", ChatMessage::new("Pete", "At", None));

        assert_eq!(log.len(), 2);
        assert_eq!(log.tail().map(ChatMessage::text), Some("At"));
    }

    #[test]
    fn test_replace_tail_appends_after_other_sender() {
        let mut log = ChatLog::new();
        log.push(ChatMessage::new("You", "hi", None));

        log.replace_tail_from("Pete", ChatMessage::new("Pete", "A", None));

        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].text(), "hi");
        assert_eq!(log.messages()[1].text(), "A");
    }

    #[test]
    fn test_replace_tail_on_empty_log() {
        let mut log = ChatLog::new();
        log.replace_tail_from("Pete", ChatMessage::new("Pete", "A", None));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_message_accessors() {
        let message = ChatMessage::new("Pete", "hello", Some("/avatars/a.png".to_string()));
        assert_eq!(message.sender(), "Pete");
        assert_eq!(message.text(), "hello");
        assert_eq!(message.avatar(), Some("/avatars/a.png"));
        assert!(message.is_from("Pete"));
        assert!(!message.is_from("You"));
    }
}
