use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::buffer::BoundedBuffer;
use crate::error::{BufferError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Signed so that a negative value in a config file is reported as an
    /// invalid argument instead of a parse error.
    #[serde(default = "default_capacity")]
    pub capacity: i64,

    /// Passed through to the buffer as-is.
    #[serde(default = "default_retention_secs")]
    pub retention_secs: u64,
}

fn default_name() -> String {
    "diagnostics".to_string()
}

fn default_capacity() -> i64 {
    10
}

fn default_retention_secs() -> u64 {
    60
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            capacity: default_capacity(),
            retention_secs: default_retention_secs(),
        }
    }
}

impl BufferConfig {
    pub fn retention(&self) -> Duration {
        Duration::from_secs(self.retention_secs)
    }

    /// Checks the name and capacity, returning the capacity as a `usize`.
    pub fn validate(&self) -> Result<usize> {
        if self.name.trim().is_empty() {
            return Err(BufferError::InvalidArgument(
                "buffer name must not be empty".to_string(),
            ));
        }
        if self.capacity <= 0 {
            return Err(BufferError::InvalidArgument(format!(
                "capacity of buffer {:?} must be positive, got {}",
                self.name, self.capacity
            )));
        }
        usize::try_from(self.capacity).map_err(|_| {
            BufferError::InvalidArgument(format!(
                "capacity {} does not fit this platform",
                self.capacity
            ))
        })
    }

    pub fn build<T>(&self) -> Result<BoundedBuffer<T>> {
        let capacity = self.validate()?;
        BoundedBuffer::new(self.name.clone(), capacity, self.retention())
    }
}
