//! Command handlers for the Almanac CLI
//!
//! Argument parsing lives in [`crate::args`]; this module turns parsed
//! arguments into core calls:
//!
//! ```text
//! CLI flags (clap) ─┐
//! config file ──────┼─▶ OutlineOverrides ─▶ OutlineOptions ─▶ generate()
//! defaults ─────────┘
//! ```

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use almanac_core::{
    config::{default_config_path, load_overrides},
    generate, to_iso, year_start, OutlineOptions, OutlineOverrides,
};
use anyhow::{Context, Result};
use jiff::{civil::Date, Zoned};
use log::info;

use crate::args::GenerateArgs;

/// Handles CLI commands with a resolved config file layer
pub struct Cli {
    file_overrides: OutlineOverrides,
}

impl Cli {
    /// Create a handler, loading the config file layer.
    ///
    /// An explicit `--config` path must exist; the XDG default file is
    /// optional.
    pub fn new(config: Option<&Path>) -> Result<Self> {
        let path = config.map(Path::to_path_buf).or_else(default_config_path);
        let file_overrides = match path {
            Some(path) => Self::load_config(&path)?,
            None => OutlineOverrides::default(),
        };
        Ok(Self { file_overrides })
    }

    fn load_config(path: &Path) -> Result<OutlineOverrides> {
        info!("Using config file {}", path.display());
        load_overrides(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))
    }

    /// Generate an outline and write it to stdout or the requested file
    pub fn generate(self, args: GenerateArgs) -> Result<()> {
        let GenerateArgs {
            year,
            start,
            output,
            options,
        } = args;

        let start = resolve_start(year, start)?;
        let options = self
            .file_overrides
            .merge(options.into())
            .apply(OutlineOptions::default());
        info!("Generating outline from {start}");

        let outline = generate(start, &options).context("Failed to generate outline")?;
        let text = outline.to_string();

        match output {
            Some(path) => {
                fs::write(&path, text)
                    .with_context(|| format!("Failed to write '{}'", path.display()))?;
                info!("Wrote {} lines to {}", outline.len(), path.display());
            }
            None => io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("Failed to write outline to stdout")?,
        }
        Ok(())
    }

    /// Print the effective options (defaults plus config file) as JSON
    pub fn defaults(self) -> Result<()> {
        let options = self.file_overrides.into_options();
        let json = serde_json::to_string_pretty(&options).context("Failed to serialize options")?;
        println!("{json}");
        Ok(())
    }

    /// Print the JSON Schema of the options file
    pub fn schema() -> Result<()> {
        let schema = schemars::schema_for!(OutlineOverrides);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        println!("{json}");
        Ok(())
    }

    /// Print the ISO week date of `date`
    pub fn iso(date: Date) -> Result<()> {
        let iso = to_iso(date).with_context(|| format!("Failed to convert {date}"))?;
        println!("{iso}");
        Ok(())
    }
}

/// Picks the outline start: an explicit date, January 1 of an explicit year,
/// or January 1 of the current local year.
fn resolve_start(year: Option<i16>, start: Option<Date>) -> Result<Date> {
    if let Some(start) = start {
        return Ok(start);
    }
    let year = year.unwrap_or_else(|| Zoned::now().year());
    Ok(year_start(year)?)
}
