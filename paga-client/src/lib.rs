mod client;
mod config;
mod interface;

pub use {
    client::PagaClient,
    config::{load_config, ConfigError, PagaConfig, DEFAULT_CALL_TIMEOUT},
    interface::Transport,
};
