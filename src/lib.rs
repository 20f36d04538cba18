//! ## svg2tikz - convert simple SVG documents to TikZ code
//!
//! `svg2tikz` is normally run as a command line tool, taking an SVG input
//! file and writing an equivalent TikZ picture, optionally wrapped in a
//! standalone LaTeX document.
//!
//! ## Library use
//!
//! A `TransformConfig` value configures the conversion; pass it with the
//! input/output to one of the `transform_*` functions. The path-data
//! interpreter and arc geometry are exposed in the [`path`] and
//! [`geometry`] modules for callers which only need the `d` attribute
//! mini-language.
//!
//! ## Example
//!
//! ```
//! let cfg = svg2tikz::TransformConfig::default();
//!
//! let input = r#"<svg><rect x="0" y="0" width="20" height="10"/></svg>"#;
//! let output = svg2tikz::transform_str(input, &cfg).unwrap();
//!
//! assert!(output.contains("rectangle"));
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Write};

pub mod cli;
mod document;
mod element;
pub mod errors;
pub mod geometry;
pub mod path;
mod style;
mod tikz;
mod transform_attr;
mod types;

pub use errors::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings to configure a single conversion.
///
/// Alternate front-ends may use this directly rather than `cli::Config`,
/// which wraps this struct when `svg2tikz` runs as a command-line program.
#[derive(Clone, Debug)]
pub struct TransformConfig {
    /// Unit appended to every emitted coordinate (default "mm")
    pub unit: String,
    /// Wrap the tikzpicture in a standalone LaTeX document
    pub standalone: bool,
    /// Add conversion info comments to the output
    pub debug: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            unit: "mm".to_owned(),
            standalone: false,
            debug: false,
        }
    }
}

/// Reads an SVG document from `reader` and writes TikZ code to `writer`.
///
/// The entire document is read before any output is written.
pub fn transform_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &TransformConfig,
) -> Result<()> {
    let root = document::read_document(reader)?;
    tikz::TikzRenderer::new(writer, config).render(&root)
}

/// Transform `input` provided as a string, returning the result as a string.
pub fn transform_str<T: Into<String>>(input: T, config: &TransformConfig) -> Result<String> {
    let input = input.into();

    let mut input = Cursor::new(input);
    let mut output: Vec<u8> = vec![];

    transform_stream(&mut input, &mut output, config)?;

    String::from_utf8(output).map_err(Into::into)
}

/// Transform the provided `input` string using default config.
pub fn transform_str_default<T: Into<String>>(input: T) -> Result<String> {
    transform_str(input, &TransformConfig::default())
}

/// Transform `input` file to `output` file; '-' means stdin / stdout.
pub fn transform_file(input: &str, output: &str, config: &TransformConfig) -> Result<()> {
    let mut reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(input)?))
    };
    // render to a buffer first so a conversion failure doesn't leave a
    // truncated output file behind
    let mut buffer: Vec<u8> = vec![];
    transform_stream(&mut reader, &mut buffer, config)?;
    if output == "-" {
        io::stdout().write_all(&buffer)?;
    } else {
        File::create(output)?.write_all(&buffer)?;
    }
    Ok(())
}
