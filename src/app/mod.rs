pub mod api;
pub mod cli;
mod context;
pub mod nodes;

pub use context::AppContext;
