//! Core library for the Almanac year outline generator.
//!
//! This crate turns a start date and a set of templates into an indented,
//! plain-text outline of the rest of that year (Year → Quarter → Month → ISO
//! Week → Day), ready to paste into an outliner application.
//!
//! # Architecture
//!
//! Data flows one way, leaf modules first:
//!
//! - [`format`]: `%Y %m %d %a %B` date placeholders and `{}` item templates
//! - [`iso`]: ISO-8601 week-date conversion ([`iso::to_iso`] and its exact
//!   inverse [`iso::from_iso`])
//! - [`outline`]: the recursive walk emitting [`OutlineLine`]s
//! - [`display`]: turning lines into tab-indented text
//! - [`options`] and [`config`]: documented defaults, partial overrides and
//!   JSON config files
//!
//! # Quick Start
//!
//! ```rust
//! use almanac_core::{generate, OutlineOptions};
//! use jiff::civil::date;
//!
//! let outline = generate(date(2025, 1, 1), &OutlineOptions::default())?;
//! let text = outline.to_string();
//!
//! let mut lines = text.lines();
//! assert_eq!(lines.next(), Some("#Y 2025"));
//! assert_eq!(lines.next(), Some("\t#YO Overview"));
//! assert_eq!(lines.next(), Some("\t#Q Q1"));
//! assert_eq!(text.lines().last(), Some("\t\t\t\t#D 2025-12-31 Wed"));
//! # Ok::<(), almanac_core::AlmanacError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod iso;
pub mod options;
pub mod outline;

// Re-export commonly used types
pub use display::{Outline, OutlineLine};
pub use error::{AlmanacError, Result};
pub use iso::{from_iso, to_iso, IsoWeekDate};
pub use options::{OutlineOptions, OutlineOverrides};
pub use outline::{generate, render, year_start, OutlineGenerator};
