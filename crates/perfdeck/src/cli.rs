//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::conf::{C_PATH_INPUT_DEFAULT, C_PATH_OUTPUT_DEFAULT, SpecRunOptions};

#[derive(Debug, Parser)]
#[command(
    name = "perfdeck",
    version,
    about = "Render a fund performance spreadsheet into a one-slide table deck"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the slide deck from the input workbook (default).
    Render(RenderArgs),
    /// Write a demo input workbook.
    Sample(SampleArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Input workbook (xlsx, xls, xlsb, ods).
    #[arg(short, long, default_value = C_PATH_INPUT_DEFAULT)]
    pub input: PathBuf,

    /// Output presentation.
    #[arg(short, long, default_value = C_PATH_OUTPUT_DEFAULT)]
    pub output: PathBuf,

    /// Slide title.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Worksheet name; first worksheet by default.
    #[arg(short, long)]
    pub sheet: Option<String>,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(C_PATH_INPUT_DEFAULT),
            output: PathBuf::from(C_PATH_OUTPUT_DEFAULT),
            title: None,
            sheet: None,
        }
    }
}

impl RenderArgs {
    /// Overlay CLI values onto the default run options.
    pub fn to_run_options(&self) -> SpecRunOptions {
        let defaults = SpecRunOptions::default();
        SpecRunOptions {
            path_input: self.input.clone(),
            path_output: self.output.clone(),
            title: self.title.clone().unwrap_or(defaults.title.clone()),
            sheet_name: self.sheet.clone(),
            ..defaults
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SampleArgs {
    /// Workbook to create.
    #[arg(short, long, default_value = C_PATH_INPUT_DEFAULT)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["perfdeck"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_render_args_override_defaults() {
        let cli = Cli::try_parse_from([
            "perfdeck", "-vv", "render", "--input", "in.xlsx", "--title", "Q3 Review",
        ])
        .expect("parse");
        assert_eq!(cli.verbose, 2);

        let Some(Commands::Render(args)) = cli.command else {
            panic!("expected render command");
        };
        let options = args.to_run_options();
        assert_eq!(options.path_input, PathBuf::from("in.xlsx"));
        assert_eq!(options.path_output, PathBuf::from(C_PATH_OUTPUT_DEFAULT));
        assert_eq!(options.title, "Q3 Review");
        assert_eq!(options.sheet_name, None);
    }

    #[test]
    fn test_default_render_args_keep_default_title() {
        let options = RenderArgs::default().to_run_options();
        assert_eq!(options, SpecRunOptions::default());
    }

    #[test]
    fn test_sample_output_flag() {
        let cli = Cli::try_parse_from(["perfdeck", "sample", "-o", "demo.xlsx"]).expect("parse");
        let Some(Commands::Sample(args)) = cli.command else {
            panic!("expected sample command");
        };
        assert_eq!(args.output, PathBuf::from("demo.xlsx"));
    }
}
