use std::path::PathBuf;

use almanac_core::OutlineOverrides;
use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;

/// Generate an indented year outline for outliner apps
///
/// Almanac writes the remainder of a calendar year as a plain-text tree
/// (Year → Quarter → Month → ISO Week → Day), one tab per level, with
/// configurable headings and optional overview lines at every level.
/// Options are layered: documented defaults, then a JSON config file, then
/// command-line flags.
#[derive(Parser)]
#[command(version, about, name = "almanac")]
pub struct Args {
    /// Path to a JSON options file. Defaults to
    /// $XDG_CONFIG_HOME/almanac/config.json when it exists
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Almanac CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an outline (the default command)
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Print the default options as JSON
    Defaults,
    /// Print the JSON Schema of the options file
    Schema,
    /// Print the ISO week date of a calendar date
    Iso {
        /// Calendar date (YYYY-MM-DD)
        date: Date,
    },
}

/// Arguments for the `generate` command
#[derive(ClapArgs, Default)]
pub struct GenerateArgs {
    /// Outline the whole of this year, starting January 1
    #[arg(short, long, conflicts_with = "start")]
    pub year: Option<i16>,

    /// Start the outline on this date (YYYY-MM-DD) and run to December 31
    #[arg(short, long)]
    pub start: Option<Date>,

    /// Write the outline to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub options: OutlineArgs,
}

/// Per-option overrides, applied on top of the config file
#[derive(ClapArgs, Default)]
#[command(next_help_heading = "Outline options")]
pub struct OutlineArgs {
    /// Year heading template, `{}` receives the formatted year
    #[arg(long, value_name = "TEMPLATE")]
    pub year_item_format: Option<String>,
    /// Date pattern for the year (%Y %m %d %a %B)
    #[arg(long, value_name = "PATTERN")]
    pub year_date_format: Option<String>,
    /// Add an overview line under the year
    #[arg(long, value_name = "BOOL")]
    pub add_year_overview: Option<bool>,
    /// Literal text of the year overview line
    #[arg(long, value_name = "TEXT")]
    pub year_overview_format: Option<String>,

    /// Group months into quarters
    #[arg(long, value_name = "BOOL")]
    pub show_quarter: Option<bool>,
    /// Quarter heading template, `{}` receives the formatted number
    #[arg(long, value_name = "TEMPLATE")]
    pub quarter_item_format: Option<String>,
    /// Quarter number template (`{}` or `{:0Nd}`)
    #[arg(long, value_name = "TEMPLATE")]
    pub quarter_number_format: Option<String>,
    /// Add an overview line under each quarter
    #[arg(long, value_name = "BOOL")]
    pub add_quarter_overview: Option<bool>,
    /// Literal text of the quarter overview line
    #[arg(long, value_name = "TEXT")]
    pub quarter_overview_format: Option<String>,

    /// Month heading template, `{}` receives the formatted month
    #[arg(long, value_name = "TEMPLATE")]
    pub month_item_format: Option<String>,
    /// Date pattern for months (%Y %m %d %a %B)
    #[arg(long, value_name = "PATTERN")]
    pub month_date_format: Option<String>,
    /// Add an overview line under each month
    #[arg(long, value_name = "BOOL")]
    pub add_month_overview: Option<bool>,
    /// Literal text of the month overview line
    #[arg(long, value_name = "TEXT")]
    pub month_overview_format: Option<String>,

    /// Group days into ISO weeks
    #[arg(long, value_name = "BOOL")]
    pub show_week: Option<bool>,
    /// Week heading template, `{}` receives the formatted week number
    #[arg(long, value_name = "TEMPLATE")]
    pub week_item_format: Option<String>,
    /// Week number template (`{}` or `{:0Nd}`, at least two digits)
    #[arg(long, value_name = "TEMPLATE")]
    pub week_number_format: Option<String>,
    /// Add an overview line under each week
    #[arg(long, value_name = "BOOL")]
    pub add_week_overview: Option<bool>,
    /// Literal text of the week overview line
    #[arg(long, value_name = "TEXT")]
    pub week_overview_format: Option<String>,

    /// Day heading template, `{}` receives the formatted date
    #[arg(long, value_name = "TEMPLATE")]
    pub day_item_format: Option<String>,
    /// Date pattern for days (%Y %m %d %a %B)
    #[arg(long, value_name = "PATTERN")]
    pub day_date_format: Option<String>,
    /// Add an overview line under each day
    #[arg(long, value_name = "BOOL")]
    pub add_day_overview: Option<bool>,
    /// Literal text of the day overview line
    #[arg(long, value_name = "TEXT")]
    pub day_overview_format: Option<String>,

    /// Number of tabs before the year heading
    #[arg(long, value_name = "DEPTH")]
    pub initial_indent: Option<usize>,
}

impl From<OutlineArgs> for OutlineOverrides {
    fn from(val: OutlineArgs) -> Self {
        OutlineOverrides {
            year_item_format: val.year_item_format,
            year_date_format: val.year_date_format,
            add_year_overview: val.add_year_overview,
            year_overview_format: val.year_overview_format,
            show_quarter: val.show_quarter,
            quarter_item_format: val.quarter_item_format,
            quarter_number_format: val.quarter_number_format,
            add_quarter_overview: val.add_quarter_overview,
            quarter_overview_format: val.quarter_overview_format,
            month_item_format: val.month_item_format,
            month_date_format: val.month_date_format,
            add_month_overview: val.add_month_overview,
            month_overview_format: val.month_overview_format,
            show_week: val.show_week,
            week_item_format: val.week_item_format,
            week_number_format: val.week_number_format,
            add_week_overview: val.add_week_overview,
            week_overview_format: val.week_overview_format,
            day_item_format: val.day_item_format,
            day_date_format: val.day_date_format,
            add_day_overview: val.add_day_overview,
            day_overview_format: val.day_overview_format,
            initial_indent: val.initial_indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_with_overrides() {
        let args = Args::parse_from([
            "almanac",
            "generate",
            "--start",
            "2025-06-15",
            "--show-week",
            "false",
            "--initial-indent",
            "2",
        ]);
        let Some(Commands::Generate(generate)) = args.command else {
            panic!("expected generate command");
        };
        assert_eq!(generate.start, Some(jiff::civil::date(2025, 6, 15)));

        let overrides = OutlineOverrides::from(generate.options);
        assert_eq!(overrides.show_week, Some(false));
        assert_eq!(overrides.initial_indent, Some(2));
        assert_eq!(overrides.show_quarter, None);
    }

    #[test]
    fn test_year_conflicts_with_start() {
        let result = Args::try_parse_from([
            "almanac",
            "generate",
            "--year",
            "2025",
            "--start",
            "2025-01-01",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::parse_from(["almanac"]);
        assert!(args.command.is_none());
        assert!(args.config.is_none());
    }
}
