//! Command-line front end of the generator.

pub mod generate_cmd;
pub mod output;
