//! Repository-backed configuration loading.
//!
//! Pure parsing and validation live in `domain::config`.

mod load_config;

pub use load_config::load_config;
