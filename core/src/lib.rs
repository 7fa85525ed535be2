//! Bounded, thread-safe buffers for the most recent diagnostic events.
//!
//! A [`BoundedBuffer`] keeps the last `capacity` values added to it and hands
//! out ordered copies for periodic reporting.

pub mod buffer;
pub mod config;
pub mod error;

pub use buffer::{BoundedBuffer, BufferStats};
pub use config::BufferConfig;
pub use error::{BufferError, Result};
