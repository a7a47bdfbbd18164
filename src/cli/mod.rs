//! Command-line interface module.

mod args;
pub mod load;
pub mod wait;

pub use args::{Cli, Commands, LoadArgs};
