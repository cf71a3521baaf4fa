//! `perfdeck` v1:
//! Fund performance spreadsheet -> one-slide table deck.
//!
//! - `cli`      : command-line surface
//! - `conf`     : default paths and run options
//! - `pipeline` : load -> transform -> layout -> render -> save
pub mod cli;
pub mod conf;
pub mod pipeline;

pub use conf::SpecRunOptions;
pub use pipeline::{run_report, run_sample};
