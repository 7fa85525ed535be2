#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;

use diagbuf_core::BoundedBuffer;

static TRACING: Once = Once::new();

/// Installs a test subscriber once per binary; honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds a buffer named "sampleListGauge" holding 10 entries with a 60s retention.
pub fn sample_buffer<T>() -> BoundedBuffer<T> {
    init_tracing();
    BoundedBuffer::new("sampleListGauge", 10, Duration::from_secs(60))
        .expect("capacity 10 is valid")
}

pub fn env_usize(name: &str, default_value: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default_value)
}
