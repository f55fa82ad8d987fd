use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::registry::DEFAULT_SUPPORT_PATH;

#[derive(Parser, Debug)]
#[command(name = "autodsl-gen")]
#[command(author, version, about = "Generates fluent builders from class descriptors")]
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
  /// List the classes a descriptor marks for generation
  List {
    /// Path to the JSON class descriptor
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
  /// Generate builder modules from a class descriptor
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the JSON class descriptor
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the builder modules are written to. Defaults to the
  /// descriptor's `generated_sources_root`
  #[arg(short, long, value_name = "DIR")]
  pub output: Option<PathBuf>,

  /// Generate builders only for these classes (comma-separated class names)
  #[arg(long, value_name = "CLASSES", value_delimiter = ',')]
  pub only: Option<Vec<String>>,

  /// Skip these classes (comma-separated class names)
  #[arg(long, value_name = "CLASSES", value_delimiter = ',')]
  pub exclude: Option<Vec<String>>,

  /// Path of the runtime support crate referenced by generated code
  #[arg(long, value_name = "PATH", default_value = DEFAULT_SUPPORT_PATH)]
  pub support_path: String,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}
