pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Parser)]
#[command(name = "taskproc")]
#[command(about = "Process JSON files containing task items")]
pub struct CliConfig {
    // Optional so the binary can print usage and exit 1 itself.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process a JSON input file
    Process(ProcessArgs),
}

#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct ProcessArgs {
    /// Path to input JSON file
    #[arg(long)]
    pub input: String,

    /// Path to output JSON file
    #[arg(long)]
    pub output: String,

    /// Enable verbose (debug) logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl ConfigProvider for ProcessArgs {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl Validate for ProcessArgs {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_command_parsing() {
        let cli = CliConfig::try_parse_from([
            "taskproc", "process", "--input", "in.json", "--output", "out.json",
        ])
        .unwrap();
        let Some(Command::Process(args)) = cli.command else {
            panic!("expected process subcommand");
        };
        assert_eq!(args.input, "in.json");
        assert_eq!(args.output, "out.json");
        assert!(!args.verbose);
    }

    #[test]
    fn test_missing_input_flag() {
        let result = CliConfig::try_parse_from(["taskproc", "process", "--output", "out.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_output_flag() {
        let result = CliConfig::try_parse_from(["taskproc", "process", "--input", "in.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_flag_short() {
        let cli = CliConfig::try_parse_from([
            "taskproc", "process", "--input", "in.json", "--output", "out.json", "-v",
        ])
        .unwrap();
        let Some(Command::Process(args)) = cli.command else {
            panic!("expected process subcommand");
        };
        assert!(args.verbose);
    }

    #[test]
    fn test_verbose_flag_long() {
        let cli = CliConfig::try_parse_from([
            "taskproc",
            "process",
            "--input",
            "in.json",
            "--output",
            "out.json",
            "--verbose",
        ])
        .unwrap();
        let Some(Command::Process(args)) = cli.command else {
            panic!("expected process subcommand");
        };
        assert!(args.verbose);
    }

    #[test]
    fn test_no_subcommand() {
        let cli = CliConfig::try_parse_from(["taskproc"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_args_validate() {
        let args = ProcessArgs {
            input: "in.json".to_string(),
            output: "out.json".to_string(),
            verbose: false,
        };
        assert!(args.validate().is_ok());

        let bad = ProcessArgs {
            input: String::new(),
            output: "out.json".to_string(),
            verbose: false,
        };
        assert!(bad.validate().is_err());
    }
}
