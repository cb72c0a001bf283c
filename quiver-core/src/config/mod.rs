//! Engine configuration.

mod defaults;
mod selection_config;

pub use selection_config::SelectionConfig;
