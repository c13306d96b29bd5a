//! ctable CLI library module.
//!
//! - `cli/` - command-line argument parsing and command dispatch
//! - `document` - the TOML table document format read by `ctable render`

pub mod cli;
pub mod document;
