mod bounded;
mod stats;

pub use bounded::BoundedBuffer;
pub use stats::BufferStats;
