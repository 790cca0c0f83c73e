//! Message source port interface

use async_trait::async_trait;

use crate::domain::message::MessagePayload;

/// Port for subscribing to inbound background messages.
///
/// The transport provider is a black box behind this trait: it wakes the
/// worker with one payload per delivery. No ordering or delivery
/// guarantees are owned on this side of the boundary.
#[async_trait]
pub trait MessageSource: Send {
    /// Wait for the next background message.
    ///
    /// # Returns
    /// The next payload, or `None` once the transport has closed and no
    /// further messages will arrive.
    async fn recv(&mut self) -> Option<MessagePayload>;
}
