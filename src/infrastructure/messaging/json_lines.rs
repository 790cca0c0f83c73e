//! JSON-lines message source
//!
//! Reads one JSON-encoded payload per line from an async byte stream,
//! typically the worker's stdin. Blank lines and lines that do not parse
//! as payloads are skipped; the transport contract is owned upstream.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

use crate::application::ports::MessageSource;
use crate::domain::message::MessagePayload;

/// Message source decoding newline-delimited JSON payloads
pub struct JsonLineSource<R: AsyncRead + Unpin + Send> {
    lines: Lines<BufReader<R>>,
}

impl<R: AsyncRead + Unpin + Send> JsonLineSource<R> {
    /// Create a source reading from the given stream
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> MessageSource for JsonLineSource<R> {
    async fn recv(&mut self) -> Option<MessagePayload> {
        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match serde_json::from_str(line) {
                        Ok(payload) => return Some(payload),
                        Err(_) => continue,
                    }
                }
                // EOF or a broken stream both end the subscription
                Ok(None) | Err(_) => return None,
            }
        }
    }
}
