use std::path::Path;

use super::types::BufferConfig;
use crate::error::{BufferError, Result};

pub const ENV_NAME: &str = "DIAGBUF_NAME";
pub const ENV_CAPACITY: &str = "DIAGBUF_CAPACITY";
pub const ENV_RETENTION_SECS: &str = "DIAGBUF_RETENTION_SECS";

pub fn load_from_str(s: &str) -> Result<BufferConfig> {
    Ok(toml::from_str::<BufferConfig>(s)?)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<BufferConfig> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path).map_err(|source| BufferError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = load_from_str(&s)?;
    tracing::info!(path = %path.display(), name = %cfg.name, "loaded buffer config");
    Ok(cfg)
}

/// Environment variables override the file when set and non-blank.
pub fn apply_env_overrides(cfg: &mut BufferConfig) -> Result<()> {
    apply_overrides(cfg, |key| std::env::var(key).ok())
}

fn apply_overrides(
    cfg: &mut BufferConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    let get = |key: &str| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(v) = get(ENV_NAME) {
        cfg.name = v;
    }
    if let Some(v) = get(ENV_CAPACITY) {
        cfg.capacity = v
            .parse()
            .map_err(|e| BufferError::Config(format!("{ENV_CAPACITY}={v:?}: {e}")))?;
    }
    if let Some(v) = get(ENV_RETENTION_SECS) {
        cfg.retention_secs = v
            .parse()
            .map_err(|e| BufferError::Config(format!("{ENV_RETENTION_SECS}={v:?}: {e}")))?;
    }
    Ok(())
}
