use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::orchestrator::{GenerationStats, Orchestrator},
  ui::{Colors, ConvertCommand},
  utils::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub prefix: String,
  pub verbose: bool,
  pub quiet: bool,
}

impl ConvertConfig {
  #[must_use]
  pub fn from_command(command: ConvertCommand) -> Self {
    let ConvertCommand {
      input,
      output,
      prefix,
      verbose,
      quiet,
    } = command;

    Self {
      input,
      output,
      prefix,
      verbose,
      quiet,
    }
  }

  fn ensure_input_exists(&self) -> anyhow::Result<()> {
    anyhow::ensure!(
      self.input.is_file(),
      "Input file '{}' does not exist",
      self.input.display()
    );
    Ok(())
  }

  async fn write_output(&self, code: String) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, code).await?;
    Ok(())
  }
}

struct ConvertLogger<'a> {
  config: &'a ConvertConfig,
  colors: &'a Colors,
}

impl<'a> ConvertLogger<'a> {
  fn new(config: &'a ConvertConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI document from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating TypeScript types...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Types generated:", stats.declarations_generated().to_string());
    if self.config.verbose {
      self.stat("", format!("{} enums", stats.enums_generated));
      self.stat("", format!("{} interfaces", stats.interfaces_generated));
      self.stat("", format!("{} type aliases", stats.type_aliases_generated));
      self.stat("", format!("{} request types", stats.request_types_generated));
    }
    self.stat("Operations scanned:", stats.operations_scanned.to_string());
    if stats.schemas_skipped > 0 {
      self.stat("Schemas skipped:", stats.schemas_skipped.to_string());
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("TypeScript types written to {}", self.config.output.display()).with(self.colors.success())
      );
    }
  }
}

/// Reads the input document, generates TypeScript declarations and writes
/// them to the output path, creating its parent directory when missing.
///
/// Nothing is written when generation fails.
pub async fn convert(config: &ConvertConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = ConvertLogger::new(config, colors);

  config.ensure_input_exists()?;

  logger.log_loading();
  let document = SpecLoader::open(&config.input).await?.parse()?;

  logger.log_generating();
  let output = Orchestrator::new(&document, &config.prefix).generate()?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_output(output.code).await?;

  logger.log_success();
  Ok(())
}
