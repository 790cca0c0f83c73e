//! Message source infrastructure module
//!
//! Two adapters: an in-process channel for embedding applications, and
//! a JSON-lines reader for driving the worker from a byte stream.

mod channel;
mod json_lines;

pub use channel::{channel_source, ChannelSource};
pub use json_lines::JsonLineSource;
