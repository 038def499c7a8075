pub mod config;
pub mod handlers;
pub mod startup;

pub use startup::{build_router, openapi, Application};
