mod load;
mod types;

pub use load::{apply_env_overrides, load_from_path, load_from_str};
pub use types::BufferConfig;
