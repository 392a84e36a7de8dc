//! Inbound frame classification.
//!
//! The relay speaks bare UTF-8 text: no envelope, no metadata. Every data
//! frame is coerced into a question string, control frames are ignored,
//! and a close frame ends the conversation.

use axum::extract::ws::Message;

/// What the relay loop should do with one received frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// A question to answer.
    Question(String),
    /// Ping/pong; handled by the transport, no reply.
    Control,
    /// Peer is closing.
    Closed,
}

impl From<Message> for Inbound {
    fn from(msg: Message) -> Self {
        match msg {
            Message::Text(text) => Self::Question(text.as_str().to_owned()),
            Message::Binary(bytes) => Self::Question(String::from_utf8_lossy(&bytes).into_owned()),
            Message::Ping(_) | Message::Pong(_) => Self::Control,
            Message::Close(_) => Self::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_verbatim() {
        assert_eq!(
            Inbound::from(Message::text("¿Cual es la hora?")),
            Inbound::Question("¿Cual es la hora?".to_string())
        );
    }

    #[test]
    fn binary_is_coerced_to_text() {
        let msg = Message::Binary(b"hola".to_vec().into());
        assert_eq!(Inbound::from(msg), Inbound::Question("hola".to_string()));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let msg = Message::Binary(vec![0x68, 0xff, 0x61].into());
        assert_eq!(Inbound::from(msg), Inbound::Question("h\u{fffd}a".to_string()));
    }

    #[test]
    fn control_and_close() {
        assert_eq!(Inbound::from(Message::Ping(Vec::new().into())), Inbound::Control);
        assert_eq!(Inbound::from(Message::Pong(Vec::new().into())), Inbound::Control);
        assert_eq!(Inbound::from(Message::Close(None)), Inbound::Closed);
    }
}
