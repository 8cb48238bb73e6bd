use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas3-ts-gen")]
#[command(author, version, about = "OpenAPI to TypeScript type generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Convert an OpenAPI JSON document into TypeScript declarations
  Convert(ConvertCommand),
  /// List information from an OpenAPI document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
}

#[derive(Args, Debug)]
pub struct ConvertCommand {
  /// Path to the OpenAPI schema JSON file
  #[arg(value_name = "INPUT_FILE")]
  pub input: PathBuf,

  /// Path where the TypeScript definitions will be written
  #[arg(value_name = "OUTPUT_FILE")]
  pub output: PathBuf,

  /// Prefix to add to all referenced type names
  #[arg(short, long, value_name = "PREFIX", default_value = "")]
  pub prefix: String,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations defined in the OpenAPI document
  Operations {
    /// Path to the OpenAPI schema JSON file
    #[arg(value_name = "INPUT_FILE")]
    input: PathBuf,
  },
}

#[cfg(test)]
mod tests {
  use clap::{CommandFactory, Parser};

  use super::*;

  #[test]
  fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_convert_with_prefix() {
    let cli = Cli::parse_from(["oas3-ts-gen", "convert", "api.json", "out/types.ts", "--prefix", "Api"]);
    let Commands::Convert(command) = cli.command else {
      panic!("expected convert command");
    };
    assert_eq!(command.input, PathBuf::from("api.json"));
    assert_eq!(command.output, PathBuf::from("out/types.ts"));
    assert_eq!(command.prefix, "Api");
    assert!(!command.verbose);
    assert!(!command.quiet);
  }

  #[test]
  fn test_parse_convert_prefix_defaults_to_empty() {
    let cli = Cli::parse_from(["oas3-ts-gen", "convert", "api.json", "types.ts"]);
    let Commands::Convert(command) = cli.command else {
      panic!("expected convert command");
    };
    assert_eq!(command.prefix, "");
  }

  #[test]
  fn test_parse_convert_requires_output() {
    let result = Cli::try_parse_from(["oas3-ts-gen", "convert", "api.json"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_parse_list_operations() {
    let cli = Cli::parse_from(["oas3-ts-gen", "--color", "never", "list", "operations", "api.json"]);
    let Commands::List {
      list_command: ListCommands::Operations { input },
    } = cli.command
    else {
      panic!("expected list operations command");
    };
    assert_eq!(input, PathBuf::from("api.json"));
  }
}
