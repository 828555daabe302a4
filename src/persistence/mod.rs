pub mod config;
pub mod files;
pub mod store;

pub use config::{load_config_or_default, save_config, Config};
pub use files::{atomic_write, config_file, ensure_data_dir, init_local_data_dir, report_file};
pub use store::{FileStore, KeyValueStore, ProgressStore};
#[cfg(test)]
pub use store::MemoryStore;
