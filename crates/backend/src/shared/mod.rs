pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod indicators;
pub mod logger;
