//! Producers record exception events while a reporter drains the buffer on a timer.
//!
//! Run with `RUST_LOG=diagbuf_core=debug cargo run -p diagbuf-core --example periodic_reporter`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use diagbuf_core::config::{apply_env_overrides, load_from_str};

#[derive(Debug, Clone)]
struct ExceptionEvent {
    worker: usize,
    seq: u64,
    message: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut cfg = load_from_str(
        r#"
        name = "exceptions"
        capacity = 5
        retention_secs = 60
        "#,
    )?;
    apply_env_overrides(&mut cfg)?;
    let buffer = Arc::new(cfg.build::<ExceptionEvent>()?);

    let mut producers = Vec::new();
    for worker in 0..3 {
        let buffer = Arc::clone(&buffer);
        producers.push(tokio::spawn(async move {
            for seq in 0..20 {
                buffer.add(ExceptionEvent {
                    worker,
                    seq,
                    message: format!("worker {worker} failed step {seq}"),
                });
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        }));
    }

    let reporter = {
        let buffer = Arc::clone(&buffer);
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(Duration::from_millis(100));
            for _ in 0..4 {
                tick.tick().await;
                let stats = buffer.stats();
                let events = buffer.drain();
                println!(
                    "[{}] {} events (total added {}, evicted {})",
                    stats.name,
                    events.len(),
                    stats.total_added,
                    stats.evicted
                );
                for e in events {
                    println!("  worker={} seq={} {}", e.worker, e.seq, e.message);
                }
            }
        })
    };

    for p in producers {
        p.await?;
    }
    reporter.await?;

    println!("final snapshot: {:?}", buffer.snapshot());
    Ok(())
}
