use almanac_core::{generate, OutlineOptions};
use jiff::civil::Date;

/// Helper function to render an outline into its text lines
#[allow(dead_code)]
pub fn outline_lines(start: Date, options: &OutlineOptions) -> Vec<String> {
    generate(start, options)
        .expect("Failed to generate outline")
        .to_string()
        .lines()
        .map(String::from)
        .collect()
}

/// Helper function to count lines whose heading starts with `tag`
#[allow(dead_code)]
pub fn count_tagged(lines: &[String], tag: &str) -> usize {
    lines
        .iter()
        .filter(|line| line.trim_start_matches('\t').starts_with(tag))
        .count()
}

/// Helper function to iterate every calendar date in `from..=to`
#[allow(dead_code)]
pub fn each_date(from: Date, to: Date) -> impl Iterator<Item = Date> {
    std::iter::successors(Some(from), move |d| {
        if *d >= to {
            None
        } else {
            Some(d.tomorrow().expect("Date within supported range"))
        }
    })
}
