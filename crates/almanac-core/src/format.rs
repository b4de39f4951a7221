//! Text substitution for outline headings.
//!
//! Two independent rules are implemented here:
//!
//! - [`format_date`] expands the `%Y`, `%m`, `%d`, `%a` and `%B` date
//!   placeholders, passing every other character through verbatim.
//! - [`fill_template`] and [`fill_number`] substitute a single value into an
//!   item template at its first `{}` (or `{:0Nd}`) token.
//!
//! Neither rule ever fails: unknown `%x` sequences are copied unchanged and a
//! template without a substitution token is returned as-is.

use jiff::civil::Date;

/// Short weekday names indexed by Sunday-zero offset.
const WEEKDAY_NAMES_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Full month names indexed by zero-based month.
const MONTH_NAMES_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Renders `date` according to `pattern`.
///
/// | Placeholder | Output |
/// |---|---|
/// | `%Y` | year, no padding |
/// | `%m` | month, `01`..`12` |
/// | `%d` | day of month, `01`..`31` |
/// | `%a` | `Sun`..`Sat` |
/// | `%B` | `January`..`December` |
///
/// ```rust
/// use almanac_core::format::format_date;
/// use jiff::civil::date;
///
/// assert_eq!(format_date(date(2025, 1, 1), "%Y-%m-%d %a"), "2025-01-01 Wed");
/// assert_eq!(format_date(date(2025, 1, 1), "%B (%q)"), "January (%q)");
/// ```
pub fn format_date(date: Date, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let expansion = chars.peek().and_then(|&placeholder| expand(date, placeholder));
        match expansion {
            Some(text) => {
                chars.next();
                out.push_str(&text);
            }
            // A lone or unknown `%` is copied and scanning resumes at the next
            // character, so `%%Y` still expands its trailing `%Y`.
            None => out.push(c),
        }
    }

    out
}

fn expand(date: Date, placeholder: char) -> Option<String> {
    let text = match placeholder {
        'Y' => date.year().to_string(),
        'm' => format!("{:02}", date.month()),
        'd' => format!("{:02}", date.day()),
        'a' => weekday_name_short(date).to_string(),
        'B' => month_name_full(date).to_string(),
        _ => return None,
    };
    Some(text)
}

/// Returns the short English weekday name (`Mon`..`Sun`) of `date`.
pub fn weekday_name_short(date: Date) -> &'static str {
    WEEKDAY_NAMES_SHORT[date.weekday().to_sunday_zero_offset() as usize]
}

/// Returns the full English month name of `date`.
pub fn month_name_full(date: Date) -> &'static str {
    MONTH_NAMES_FULL[(date.month() - 1) as usize]
}

/// Replaces the first `{}` in `template` with `value`.
///
/// A template without `{}` is returned unchanged and the value is dropped.
///
/// ```rust
/// use almanac_core::format::fill_template;
///
/// assert_eq!(fill_template("#M {}", "June"), "#M June");
/// assert_eq!(fill_template("{} and {}", "a"), "a and {}");
/// assert_eq!(fill_template("#M", "June"), "#M");
/// ```
pub fn fill_template(template: &str, value: &str) -> String {
    template.replacen("{}", value, 1)
}

/// Substitutes `number` into a number template, zero-padded to at least
/// `min_width` digits.
///
/// The first token wins: `{}` inserts the number padded to `min_width`, and
/// `{:0Nd}` (N a single digit) pads it to the larger of N and `min_width`.
/// Without a token the template is returned as-is.
///
/// ```rust
/// use almanac_core::format::fill_number;
///
/// assert_eq!(fill_number("{:02d}", 7, 1), "07");
/// assert_eq!(fill_number("{}", 7, 1), "7");
/// assert_eq!(fill_number("{}", 7, 2), "07");
/// assert_eq!(fill_number("week {:03d}", 42, 2), "week 042");
/// ```
pub fn fill_number(template: &str, number: i64, min_width: usize) -> String {
    let plain = template.find("{}").map(|at| (at, "{}".len(), min_width));
    let padded =
        find_padded_token(template).map(|(at, len, width)| (at, len, width.max(min_width)));

    let first = plain.into_iter().chain(padded).min_by_key(|&(at, _, _)| at);
    let Some((at, len, width)) = first else {
        return template.to_string();
    };

    let mut out = String::with_capacity(template.len() + width);
    out.push_str(&template[..at]);
    out.push_str(&format!("{number:0width$}"));
    out.push_str(&template[at + len..]);
    out
}

/// Locates the first `{:0Nd}` token, returning (offset, token length, width).
fn find_padded_token(template: &str) -> Option<(usize, usize, usize)> {
    const TOKEN_LEN: usize = "{:0Nd}".len();

    template.match_indices("{:0").find_map(|(at, _)| {
        let token = template.get(at..at + TOKEN_LEN)?;
        let width = token.as_bytes()[3];
        if matches!(width, b'1'..=b'9') && &token[4..] == "d}" {
            Some((at, TOKEN_LEN, usize::from(width - b'0')))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_format_all_placeholders() {
        let d = date(2025, 3, 9);
        assert_eq!(format_date(d, "%Y"), "2025");
        assert_eq!(format_date(d, "%m"), "03");
        assert_eq!(format_date(d, "%d"), "09");
        assert_eq!(format_date(d, "%a"), "Sun");
        assert_eq!(format_date(d, "%B"), "March");
    }

    #[test]
    fn test_format_default_day_pattern() {
        assert_eq!(format_date(date(2025, 1, 1), "%Y-%m-%d %a"), "2025-01-01 Wed");
        assert_eq!(format_date(date(2024, 2, 29), "%Y-%m-%d %a"), "2024-02-29 Thu");
    }

    #[test]
    fn test_format_year_is_not_padded() {
        assert_eq!(format_date(date(987, 6, 1), "%Y"), "987");
    }

    #[test]
    fn test_format_passes_unknown_sequences_through() {
        let d = date(2025, 12, 31);
        assert_eq!(format_date(d, "%H:%M"), "%H:%M");
        assert_eq!(format_date(d, "100%"), "100%");
        assert_eq!(format_date(d, "%%Y"), "%2025");
        assert_eq!(format_date(d, "plain text"), "plain text");
        assert_eq!(format_date(d, ""), "");
    }

    #[test]
    fn test_format_repeated_placeholders() {
        assert_eq!(format_date(date(2025, 7, 4), "%B %B %d"), "July July 04");
    }

    #[test]
    fn test_format_preserves_non_ascii() {
        assert_eq!(format_date(date(2025, 5, 1), "📅 %d·%m"), "📅 01·05");
    }

    #[test]
    fn test_weekday_names_cover_a_full_week() {
        let names: Vec<_> = (5..=11)
            .map(|day| weekday_name_short(date(2025, 1, day)))
            .collect();
        assert_eq!(names, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    }

    #[test]
    fn test_fill_template_first_occurrence_only() {
        assert_eq!(fill_template("#Y {}", "2025"), "#Y 2025");
        assert_eq!(fill_template("{}-{}", "x"), "x-{}");
        assert_eq!(fill_template("no marker", "x"), "no marker");
    }

    #[test]
    fn test_fill_number_padding() {
        assert_eq!(fill_number("{:02d}", 1, 1), "01");
        assert_eq!(fill_number("{:02d}", 53, 1), "53");
        assert_eq!(fill_number("{:02d}", 123, 1), "123");
        assert_eq!(fill_number("W{:02d}!", 9, 1), "W09!");
    }

    #[test]
    fn test_fill_number_minimum_width() {
        assert_eq!(fill_number("{}", 1, 2), "01");
        assert_eq!(fill_number("W{}", 53, 2), "W53");
        assert_eq!(fill_number("{:01d}", 4, 2), "04");
        assert_eq!(fill_number("{:03d}", 4, 2), "004");
        assert_eq!(fill_number("{}", 4, 1), "4");
    }

    #[test]
    fn test_fill_number_first_token_wins() {
        assert_eq!(fill_number("{} / {:02d}", 3, 1), "3 / {:02d}");
        assert_eq!(fill_number("{:02d} / {}", 3, 1), "03 / {}");
        assert_eq!(fill_number("{} / {:03d}", 3, 2), "03 / {:03d}");
    }

    #[test]
    fn test_fill_number_rejects_malformed_tokens() {
        assert_eq!(fill_number("{:00d}", 3, 1), "{:00d}");
        assert_eq!(fill_number("{:0xd}", 3, 1), "{:0xd}");
        assert_eq!(fill_number("{:02", 3, 1), "{:02");
        assert_eq!(fill_number("Q", 3, 2), "Q");
    }
}
