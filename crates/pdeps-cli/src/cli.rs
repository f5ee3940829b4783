//! CLI argument definitions for pdeps.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pdeps_core::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "pdeps",
    version,
    about = "List the immediate dependencies of a package from its product_deps file",
    long_about = "Reads a product_deps file once, keeps the product list rows whose qualifier \
                  filter matches, and assigns each dependency the qualifiers given by the first \
                  qualifier table row matching <QUALIFIERS>. The build types `prof` and `debug` \
                  are ignored when matching."
)]
pub struct Cli {
    /// Path to the product_deps file
    pub filename: PathBuf,

    /// Package whose dependencies are listed
    pub package: String,

    /// Version of that package
    #[arg(id = "pkg_version", value_name = "VERSION")]
    pub version: String,

    /// Colon-delimited qualifiers (e.g. e15:s21:prof)
    #[arg(allow_hyphen_values = true)]
    pub qualifiers: String,

    /// Output format [default: from config, else plain]
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Config file to use instead of ~/.pdeps/config.toml
    #[arg(long, env = "PDEPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
