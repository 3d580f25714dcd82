pub mod collate;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod links;
pub mod loader;
pub mod logging;
pub mod normalize;
pub mod pagination;
pub mod registry;
pub mod state;
pub mod types;
