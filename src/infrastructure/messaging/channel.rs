//! In-process channel message source

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::ports::MessageSource;
use crate::domain::message::MessagePayload;

/// Message source backed by a tokio mpsc channel.
///
/// Lets an embedding application deliver payloads to the dispatcher
/// in-process. The source closes when every sender is dropped.
pub struct ChannelSource {
    rx: mpsc::Receiver<MessagePayload>,
}

/// Create a sender/source pair with the given buffer capacity
pub fn channel_source(capacity: usize) -> (mpsc::Sender<MessagePayload>, ChannelSource) {
    let (tx, rx) = mpsc::channel(capacity);
    (tx, ChannelSource { rx })
}

#[async_trait]
impl MessageSource for ChannelSource {
    async fn recv(&mut self) -> Option<MessagePayload> {
        self.rx.recv().await
    }
}
