//! CLI command handlers, one file per command.

mod demo;
mod group;
mod params;
mod query;

pub use demo::run_demo;
pub use group::run_group;
pub use params::run_params;
pub use query::{decode_requested, run_query};
