//! Preview application messages.
//!
//! This module defines the message enum used for communication between
//! the terminal input handler and the preview application.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the card preview.
///
/// # Examples
///
/// ```
/// use cardex_protocol::Message;
///
/// let msg = Message::NextItem;
/// assert!(matches!(msg, Message::NextItem));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Show the previous work item's card.
    PreviousItem,
    /// Show the next work item's card.
    NextItem,
    /// Jump to the first work item.
    FirstItem,
    /// Jump to the last work item.
    LastItem,
    /// Reload the card configuration from disk.
    Reload,
    /// Quit the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::PreviousItem).expect("serialize");
        assert_eq!(json, r#""previous_item""#);
    }

    #[test]
    fn message_roundtrip() {
        for msg in [
            Message::PreviousItem,
            Message::NextItem,
            Message::FirstItem,
            Message::LastItem,
            Message::Reload,
            Message::Quit,
        ] {
            let json = serde_json::to_string(&msg).expect("serialize");
            let parsed: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(msg, parsed);
        }
    }
}
