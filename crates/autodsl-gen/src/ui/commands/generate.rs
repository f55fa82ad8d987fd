use std::{
  collections::HashSet,
  path::{Path, PathBuf},
};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  descriptor::DescriptorFile,
  generator::{
    metrics::GenerationStats,
    orchestrator::{GeneratedFile, Orchestrator},
  },
  ui::{Colors, GenerateCommand},
  utils::descriptor::load_descriptor,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: Option<PathBuf>,
  pub only_classes: Option<HashSet<String>>,
  pub excluded_classes: Option<HashSet<String>>,
  pub support_path: String,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      only,
      exclude,
      support_path,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be combined");
    }

    Ok(Self {
      input,
      output,
      only_classes: only.map(|classes| classes.into_iter().collect()),
      excluded_classes: exclude.map(|classes| classes.into_iter().collect()),
      support_path,
      verbose,
      quiet,
    })
  }

  fn create_orchestrator(&self, descriptor: DescriptorFile) -> anyhow::Result<Orchestrator> {
    Orchestrator::new(
      descriptor,
      self.only_classes.as_ref(),
      self.excluded_classes.as_ref(),
      &self.support_path,
    )
  }

  /// The explicit `--output`, else the descriptor's generated sources root.
  fn resolve_output(&self, orchestrator: &Orchestrator) -> anyhow::Result<PathBuf> {
    self
      .output
      .clone()
      .filter(|path| !path.as_os_str().is_empty())
      .or_else(|| orchestrator.generated_sources_root().map(PathBuf::from))
      .ok_or_else(|| anyhow::anyhow!("Can't find the target directory for generated files."))
  }

  async fn write_files(output: &Path, files: &[GeneratedFile]) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(output).await?;
    for file in files {
      tokio::fs::write(output.join(&file.file_name), &file.code).await?;
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
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
      &format!("Loading descriptor from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating builders...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Classes found:", stats.classes_found.to_string());
    self.stat("Builders generated:", stats.builders_generated.to_string());
    self.stat("", format!("{} properties", stats.properties_generated));
    if self.config.verbose {
      self.stat("", format!("{} nested builder functions", stats.nested_functions_generated));
      self.stat("", format!("{} collection scopes", stats.collection_scopes_generated));
      self.stat("", format!("{} inline insertions", stats.inline_insertions_generated));
    }
    if stats.skipped_count() > 0 {
      self.stat("Skipped:", stats.skipped_count().to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
  }

  /// Rejections are always printed, even with `--quiet`; other warnings
  /// only with `--verbose`.
  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      let should_print = warning.is_skipped_item() || self.config.verbose;
      if !should_print {
        continue;
      }

      if !printed_header && !self.config.quiet {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self, output: &Path, files: &[GeneratedFile]) {
    self.info(
      &format!("Writing to: {}", output.display())
        .with(self.colors.primary())
        .to_string(),
    );
    if self.config.verbose {
      for file in files {
        self.stat("", file.file_name.clone());
      }
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated builders".with(self.colors.success())
      );
    }
  }
}

/// Generates every builder the descriptor asks for. Classes that cannot be
/// processed are reported and the rest are still written; the command then
/// fails with the number of rejected classes.
pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let descriptor = load_descriptor(&config.input).await?;

  logger.log_generating();
  let orchestrator = config.create_orchestrator(descriptor)?;
  let output_dir = config.resolve_output(&orchestrator)?;
  let source_path = config.input.display().to_string();

  let output = orchestrator.generate(&source_path)?;
  logger.print_statistics(&output.stats);
  logger.print_warnings(&output.stats);

  logger.log_writing(&output_dir, &output.files);
  GenerateConfig::write_files(&output_dir, &output.files).await?;

  let skipped = output.stats.skipped_count();
  if skipped > 0 {
    anyhow::bail!("{skipped} class(es) could not be processed");
  }

  logger.log_success();
  Ok(())
}
