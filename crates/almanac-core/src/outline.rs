//! Year outline generation.
//!
//! A depth-first walk over Year → Quarter → Month → Week → Day, starting at a
//! given date and running through December 31 of that date's year. The first
//! segment at every level starts exactly at the start date; later segments
//! start at their natural first day.
//!
//! ```text
//! #Y 2025
//!     #YO Overview
//!     #Q Q1
//!         #QO Overview
//!         #M January
//!             #MO Overview
//!             #W W01
//!                 #WO Overview
//!                 #D 2025-01-01 Wed
//! ```
//!
//! Quarters and weeks are optional levels (`show_quarter`, `show_week`). A
//! week that crosses a month boundary is listed under both months, each time
//! with only the days of that month.

use jiff::civil::Date;
use log::{debug, trace};

use crate::{
    display::{Outline, OutlineLine},
    error::{AlmanacError, Result},
    format::{fill_number, fill_template, format_date},
    iso::{from_iso, shift_days, to_iso, week_monday},
    options::{OutlineOptions, OutlineOverrides},
};

/// Week headings always carry at least two digits, whatever the template.
const WEEK_NUMBER_MIN_WIDTH: usize = 2;

/// Quarter (1..=4) containing `month` (1..=12).
pub fn quarter_of(month: i8) -> i8 {
    (month + 2) / 3
}

/// First day of `quarter` in `year`.
///
/// # Errors
///
/// Returns `AlmanacError::DateArithmetic` if the date is not representable.
pub fn quarter_start(year: i16, quarter: i8) -> Result<Date> {
    Ok(Date::new(year, (quarter - 1) * 3 + 1, 1)?)
}

/// January 1 of `year`, the start date of a whole-year outline.
///
/// # Errors
///
/// Returns `AlmanacError::InvalidInput` for years outside -9999..=9999.
pub fn year_start(year: i16) -> Result<Date> {
    Date::new(year, 1, 1)
        .map_err(|e| AlmanacError::invalid_input("year").with_reason(e.to_string()))
}

/// Walks the calendar and collects outline lines for one set of options.
#[derive(Debug)]
pub struct OutlineGenerator<'a> {
    options: &'a OutlineOptions,
    lines: Vec<OutlineLine>,
}

impl<'a> OutlineGenerator<'a> {
    pub fn new(options: &'a OutlineOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
        }
    }

    /// Generates the outline from `start` through December 31 of its year.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::DateArithmetic` if a step of the walk leaves the
    /// supported date range. The walk never looks past December 31 of the
    /// start year, so this does not happen for start dates in -9999..=9999.
    pub fn generate(mut self, start: Date) -> Result<Outline> {
        debug!("Generating outline starting {start}");
        self.year(self.options.initial_indent, start)?;
        debug!("Generated {} outline lines", self.lines.len());
        Ok(Outline::new(self.lines))
    }

    fn push(&mut self, depth: usize, text: impl Into<String>) {
        self.lines.push(OutlineLine::new(depth, text));
    }

    fn overview(&mut self, enabled: bool, depth: usize, format: &str) {
        if enabled {
            self.push(depth, format);
        }
    }

    fn year(&mut self, depth: usize, date: Date) -> Result<()> {
        let opts = self.options;
        trace!("year {} at depth {depth}", date.year());

        let heading = fill_template(
            &opts.year_item_format,
            &format_date(date, &opts.year_date_format),
        );
        self.push(depth, heading);
        self.overview(opts.add_year_overview, depth + 1, &opts.year_overview_format);

        if opts.show_quarter {
            self.quarter(depth + 1, date)?;
            for quarter in quarter_of(date.month()) + 1..=4 {
                self.quarter(depth + 1, quarter_start(date.year(), quarter)?)?;
            }
        } else {
            self.month(depth + 1, date)?;
            for month in date.month() + 1..=12 {
                self.month(depth + 1, date.with().month(month).day(1).build()?)?;
            }
        }
        Ok(())
    }

    fn quarter(&mut self, depth: usize, date: Date) -> Result<()> {
        let opts = self.options;
        let quarter = quarter_of(date.month());
        trace!("quarter {quarter} from {date} at depth {depth}");

        let number = fill_number(&opts.quarter_number_format, i64::from(quarter), 1);
        self.push(depth, fill_template(&opts.quarter_item_format, &number));
        self.overview(
            opts.add_quarter_overview,
            depth + 1,
            &opts.quarter_overview_format,
        );

        self.month(depth + 1, date)?;
        for month in date.month() + 1..=quarter * 3 {
            self.month(depth + 1, date.with().month(month).day(1).build()?)?;
        }
        Ok(())
    }

    fn month(&mut self, depth: usize, date: Date) -> Result<()> {
        let opts = self.options;
        trace!("month {date} at depth {depth}");

        let heading = fill_template(
            &opts.month_item_format,
            &format_date(date, &opts.month_date_format),
        );
        self.push(depth, heading);
        self.overview(
            opts.add_month_overview,
            depth + 1,
            &opts.month_overview_format,
        );

        let last = date.last_of_month();
        if opts.show_week {
            let mut week_start = date;
            loop {
                self.week(depth + 1, week_start)?;
                let monday = week_monday(week_start)?;
                if monday.until(last)?.get_days() < 7 {
                    break;
                }
                week_start = shift_days(monday, 7)?;
            }
        } else {
            let mut day = date;
            loop {
                self.day(depth + 1, day);
                if day >= last {
                    break;
                }
                day = day.tomorrow()?;
            }
        }
        Ok(())
    }

    fn week(&mut self, depth: usize, date: Date) -> Result<()> {
        let opts = self.options;
        let iso = to_iso(date)?;
        trace!("week {iso} at depth {depth}");

        let number = fill_number(
            &opts.week_number_format,
            i64::from(iso.iso_week),
            WEEK_NUMBER_MIN_WIDTH,
        );
        self.push(depth, fill_template(&opts.week_item_format, &number));
        self.overview(opts.add_week_overview, depth + 1, &opts.week_overview_format);

        let last = date.last_of_month();
        for iso_day in iso.iso_day..=7 {
            let day = from_iso(iso.iso_year, iso.iso_week, iso_day)?;
            self.day(depth + 1, day);
            if day >= last {
                break;
            }
        }
        Ok(())
    }

    fn day(&mut self, depth: usize, date: Date) {
        let opts = self.options;
        let heading = fill_template(
            &opts.day_item_format,
            &format_date(date, &opts.day_date_format),
        );
        self.push(depth, heading);
        self.overview(opts.add_day_overview, depth + 1, &opts.day_overview_format);
    }
}

/// Generates the outline for `start` with complete options.
///
/// # Errors
///
/// See [`OutlineGenerator::generate`].
pub fn generate(start: Date, options: &OutlineOptions) -> Result<Outline> {
    OutlineGenerator::new(options).generate(start)
}

/// Generates the outline text for `start`, laying `overrides` over the
/// documented defaults.
///
/// ```rust
/// use almanac_core::{render, OutlineOverrides};
/// use jiff::civil::date;
///
/// let overrides = OutlineOverrides {
///     show_quarter: Some(false),
///     show_week: Some(false),
///     add_year_overview: Some(false),
///     add_month_overview: Some(false),
///     ..Default::default()
/// };
/// let text = render(date(2025, 12, 30), overrides).unwrap();
/// assert_eq!(
///     text,
///     "#Y 2025\n\t#M December\n\t\t#D 2025-12-30 Tue\n\t\t#D 2025-12-31 Wed\n"
/// );
/// ```
///
/// # Errors
///
/// See [`OutlineGenerator::generate`].
pub fn render(start: Date, overrides: OutlineOverrides) -> Result<String> {
    let options = overrides.into_options();
    Ok(generate(start, &options)?.to_string())
}
