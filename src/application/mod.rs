//! Application layer - Use cases and port interfaces
//!
//! Contains the core dispatch operation and trait definitions
//! for external system interactions.

pub mod client;
pub mod dispatch;
pub mod ports;

// Re-export use cases
pub use client::MessagingClient;
pub use dispatch::{BackgroundDispatcher, DispatchCallbacks, DispatchOutcome, RunSummary};
