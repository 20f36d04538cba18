use std::path::Path;

use clap::Parser;

use crate::errors::{Error, Result};
use crate::{transform_file, TransformConfig};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// File to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Wrap the tikzpicture in a standalone LaTeX document
    #[arg(short, long)]
    standalone: bool,

    /// Unit appended to emitted coordinates
    #[arg(short, long, default_value = "mm")]
    unit: String,

    /// Add conversion info comments to the output
    #[arg(long)]
    debug: bool,
}

/// Top-level configuration used by the `svg2tikz` command-line process.
///
/// 'front-end' program settings (input/output paths) are stored directly
/// in this struct; per-conversion settings are in the embedded
/// `TransformConfig`.
#[derive(Clone)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// conversion config options
    pub transform: TransformConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.file != "-" && args.output != "-" {
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists()
                && out_path.canonicalize().map_err(Error::from_err)?
                    == in_path.canonicalize().map_err(Error::from_err)?
            {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            transform: TransformConfig {
                unit: args.unit,
                standalone: args.standalone,
                debug: args.debug,
            },
        })
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Run the `svg2tikz` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    transform_file(&config.input_path, &config.output_path, &config.transform)
}
