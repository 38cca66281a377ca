//! Core Module
//!
//! 配置加载和服务器状态。

pub mod config;
pub mod state;

pub use config::Config;
pub use state::ServerState;
