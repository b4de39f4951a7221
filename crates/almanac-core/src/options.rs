//! Outline configuration.
//!
//! [`OutlineOptions`] is the complete, immutable configuration consumed by
//! the generator. [`OutlineOverrides`] is its partial counterpart: every field
//! is optional, layers are combined with [`OutlineOverrides::merge`] and the
//! result is laid over the documented defaults with
//! [`OutlineOverrides::apply`].
//!
//! ```text
//! defaults ◀── config file overrides ◀── command-line overrides
//! ```
//!
//! Item formats (`*_item_format`) take one `{}` token. Date formats use the
//! `%Y %m %d %a %B` placeholders of [`crate::format::format_date`]. Number
//! formats accept `{}` or a zero-padded `{:0Nd}` token; week numbers are
//! always padded to at least two digits. Overview formats are
//! literal lines.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_YEAR_ITEM_FORMAT: &str = "#Y {}";
pub const DEFAULT_YEAR_DATE_FORMAT: &str = "%Y";
pub const DEFAULT_ADD_YEAR_OVERVIEW: bool = true;
pub const DEFAULT_YEAR_OVERVIEW_FORMAT: &str = "#YO Overview";

pub const DEFAULT_SHOW_QUARTER: bool = true;
pub const DEFAULT_QUARTER_ITEM_FORMAT: &str = "#Q Q{}";
pub const DEFAULT_QUARTER_NUMBER_FORMAT: &str = "{}";
pub const DEFAULT_ADD_QUARTER_OVERVIEW: bool = true;
pub const DEFAULT_QUARTER_OVERVIEW_FORMAT: &str = "#QO Overview";

pub const DEFAULT_MONTH_ITEM_FORMAT: &str = "#M {}";
pub const DEFAULT_MONTH_DATE_FORMAT: &str = "%B";
pub const DEFAULT_ADD_MONTH_OVERVIEW: bool = true;
pub const DEFAULT_MONTH_OVERVIEW_FORMAT: &str = "#MO Overview";

pub const DEFAULT_SHOW_WEEK: bool = true;
pub const DEFAULT_WEEK_ITEM_FORMAT: &str = "#W W{}";
pub const DEFAULT_WEEK_NUMBER_FORMAT: &str = "{:02d}";
pub const DEFAULT_ADD_WEEK_OVERVIEW: bool = true;
pub const DEFAULT_WEEK_OVERVIEW_FORMAT: &str = "#WO Overview";

pub const DEFAULT_DAY_ITEM_FORMAT: &str = "#D {}";
pub const DEFAULT_DAY_DATE_FORMAT: &str = "%Y-%m-%d %a";
pub const DEFAULT_ADD_DAY_OVERVIEW: bool = false;
pub const DEFAULT_DAY_OVERVIEW_FORMAT: &str = "#DO Overview";

pub const DEFAULT_INITIAL_INDENT: usize = 0;

/// Complete outline configuration, one field group per level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OutlineOptions {
    pub year_item_format: String,
    pub year_date_format: String,
    pub add_year_overview: bool,
    pub year_overview_format: String,

    /// When false, months hang directly under the year
    pub show_quarter: bool,
    pub quarter_item_format: String,
    pub quarter_number_format: String,
    pub add_quarter_overview: bool,
    pub quarter_overview_format: String,

    pub month_item_format: String,
    pub month_date_format: String,
    pub add_month_overview: bool,
    pub month_overview_format: String,

    /// When false, days hang directly under the month
    pub show_week: bool,
    pub week_item_format: String,
    pub week_number_format: String,
    pub add_week_overview: bool,
    pub week_overview_format: String,

    pub day_item_format: String,
    pub day_date_format: String,
    pub add_day_overview: bool,
    pub day_overview_format: String,

    /// Depth of the root year line
    pub initial_indent: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            year_item_format: DEFAULT_YEAR_ITEM_FORMAT.to_string(),
            year_date_format: DEFAULT_YEAR_DATE_FORMAT.to_string(),
            add_year_overview: DEFAULT_ADD_YEAR_OVERVIEW,
            year_overview_format: DEFAULT_YEAR_OVERVIEW_FORMAT.to_string(),

            show_quarter: DEFAULT_SHOW_QUARTER,
            quarter_item_format: DEFAULT_QUARTER_ITEM_FORMAT.to_string(),
            quarter_number_format: DEFAULT_QUARTER_NUMBER_FORMAT.to_string(),
            add_quarter_overview: DEFAULT_ADD_QUARTER_OVERVIEW,
            quarter_overview_format: DEFAULT_QUARTER_OVERVIEW_FORMAT.to_string(),

            month_item_format: DEFAULT_MONTH_ITEM_FORMAT.to_string(),
            month_date_format: DEFAULT_MONTH_DATE_FORMAT.to_string(),
            add_month_overview: DEFAULT_ADD_MONTH_OVERVIEW,
            month_overview_format: DEFAULT_MONTH_OVERVIEW_FORMAT.to_string(),

            show_week: DEFAULT_SHOW_WEEK,
            week_item_format: DEFAULT_WEEK_ITEM_FORMAT.to_string(),
            week_number_format: DEFAULT_WEEK_NUMBER_FORMAT.to_string(),
            add_week_overview: DEFAULT_ADD_WEEK_OVERVIEW,
            week_overview_format: DEFAULT_WEEK_OVERVIEW_FORMAT.to_string(),

            day_item_format: DEFAULT_DAY_ITEM_FORMAT.to_string(),
            day_date_format: DEFAULT_DAY_DATE_FORMAT.to_string(),
            add_day_overview: DEFAULT_ADD_DAY_OVERVIEW,
            day_overview_format: DEFAULT_DAY_OVERVIEW_FORMAT.to_string(),

            initial_indent: DEFAULT_INITIAL_INDENT,
        }
    }
}

/// Partial outline configuration.
///
/// Deserializes from config files where any subset of keys may be present.
/// The legacy key names `year_format`, `quarter_format`, `month_format`,
/// `week_format`, `day_format` and `initial_padding` are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct OutlineOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_item_format: Option<String>,
    #[serde(default, alias = "year_format", skip_serializing_if = "Option::is_none")]
    pub year_date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_year_overview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_overview_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_quarter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter_item_format: Option<String>,
    #[serde(default, alias = "quarter_format", skip_serializing_if = "Option::is_none")]
    pub quarter_number_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_quarter_overview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter_overview_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_item_format: Option<String>,
    #[serde(default, alias = "month_format", skip_serializing_if = "Option::is_none")]
    pub month_date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_month_overview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_overview_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_week: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_item_format: Option<String>,
    #[serde(default, alias = "week_format", skip_serializing_if = "Option::is_none")]
    pub week_number_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_week_overview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_overview_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_item_format: Option<String>,
    #[serde(default, alias = "day_format", skip_serializing_if = "Option::is_none")]
    pub day_date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_day_overview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_overview_format: Option<String>,

    #[serde(default, alias = "initial_padding", skip_serializing_if = "Option::is_none")]
    pub initial_indent: Option<usize>,
}

impl OutlineOverrides {
    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: OutlineOverrides) -> OutlineOverrides {
        OutlineOverrides {
            year_item_format: other.year_item_format.or(self.year_item_format),
            year_date_format: other.year_date_format.or(self.year_date_format),
            add_year_overview: other.add_year_overview.or(self.add_year_overview),
            year_overview_format: other.year_overview_format.or(self.year_overview_format),

            show_quarter: other.show_quarter.or(self.show_quarter),
            quarter_item_format: other.quarter_item_format.or(self.quarter_item_format),
            quarter_number_format: other.quarter_number_format.or(self.quarter_number_format),
            add_quarter_overview: other.add_quarter_overview.or(self.add_quarter_overview),
            quarter_overview_format: other
                .quarter_overview_format
                .or(self.quarter_overview_format),

            month_item_format: other.month_item_format.or(self.month_item_format),
            month_date_format: other.month_date_format.or(self.month_date_format),
            add_month_overview: other.add_month_overview.or(self.add_month_overview),
            month_overview_format: other.month_overview_format.or(self.month_overview_format),

            show_week: other.show_week.or(self.show_week),
            week_item_format: other.week_item_format.or(self.week_item_format),
            week_number_format: other.week_number_format.or(self.week_number_format),
            add_week_overview: other.add_week_overview.or(self.add_week_overview),
            week_overview_format: other.week_overview_format.or(self.week_overview_format),

            day_item_format: other.day_item_format.or(self.day_item_format),
            day_date_format: other.day_date_format.or(self.day_date_format),
            add_day_overview: other.add_day_overview.or(self.add_day_overview),
            day_overview_format: other.day_overview_format.or(self.day_overview_format),

            initial_indent: other.initial_indent.or(self.initial_indent),
        }
    }

    /// Produces complete options by filling unset fields from `base`.
    pub fn apply(self, base: OutlineOptions) -> OutlineOptions {
        OutlineOptions {
            year_item_format: self.year_item_format.unwrap_or(base.year_item_format),
            year_date_format: self.year_date_format.unwrap_or(base.year_date_format),
            add_year_overview: self.add_year_overview.unwrap_or(base.add_year_overview),
            year_overview_format: self
                .year_overview_format
                .unwrap_or(base.year_overview_format),

            show_quarter: self.show_quarter.unwrap_or(base.show_quarter),
            quarter_item_format: self.quarter_item_format.unwrap_or(base.quarter_item_format),
            quarter_number_format: self
                .quarter_number_format
                .unwrap_or(base.quarter_number_format),
            add_quarter_overview: self
                .add_quarter_overview
                .unwrap_or(base.add_quarter_overview),
            quarter_overview_format: self
                .quarter_overview_format
                .unwrap_or(base.quarter_overview_format),

            month_item_format: self.month_item_format.unwrap_or(base.month_item_format),
            month_date_format: self.month_date_format.unwrap_or(base.month_date_format),
            add_month_overview: self.add_month_overview.unwrap_or(base.add_month_overview),
            month_overview_format: self
                .month_overview_format
                .unwrap_or(base.month_overview_format),

            show_week: self.show_week.unwrap_or(base.show_week),
            week_item_format: self.week_item_format.unwrap_or(base.week_item_format),
            week_number_format: self.week_number_format.unwrap_or(base.week_number_format),
            add_week_overview: self.add_week_overview.unwrap_or(base.add_week_overview),
            week_overview_format: self
                .week_overview_format
                .unwrap_or(base.week_overview_format),

            day_item_format: self.day_item_format.unwrap_or(base.day_item_format),
            day_date_format: self.day_date_format.unwrap_or(base.day_date_format),
            add_day_overview: self.add_day_overview.unwrap_or(base.add_day_overview),
            day_overview_format: self.day_overview_format.unwrap_or(base.day_overview_format),

            initial_indent: self.initial_indent.unwrap_or(base.initial_indent),
        }
    }

    /// Shorthand for `apply(OutlineOptions::default())`.
    pub fn into_options(self) -> OutlineOptions {
        self.apply(OutlineOptions::default())
    }
}
