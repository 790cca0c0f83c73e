//! StockBeacon push worker - background message-to-notification delivery
//!
//! This crate receives background push payloads from a cloud messaging
//! transport and turns them into user-visible desktop notifications while
//! the StockBeacon inventory app is not in the foreground.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Message payloads, notification requests, config, and errors
//! - **Application**: The background dispatcher, the messaging client
//!   handle, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust sink,
//!   channel/JSON-lines message sources, TOML config store)
//! - **CLI**: Command-line interface, worker runner, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
