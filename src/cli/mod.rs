//! Command-line interface module.

mod args;
pub mod check;
pub mod query;
pub mod serve;
pub mod sitemap;

pub use args::{Cli, Commands, QueryArgs};
