mod config;

pub use config::{Config, load_or_create_config};
