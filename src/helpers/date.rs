//! Round-trip validation of date strings before they go into a request.
//!
//! Formats use the token language HMRC's own documentation writes dates in
//! (`Y-m-d`, `d/m/Y H:i`, ...). Each token is translated to a chrono
//! strftime item; the value is parsed with those items and must format back
//! to exactly the same string.
//!
//! Supported tokens: `Y y m n M F d j D l H G h g A a i s`, plus `\x` for a
//! literal `x`. Other letters, including the ordinal suffix `S` (`jS` ->
//! `25th`), are rejected as a mismatch.

use chrono::format::{self, Item, Parsed, StrftimeItems};
use thiserror::Error;

/// The value does not match the expected date format.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("date string does not match the expected format")]
pub struct InvalidDateFormat;

/// Checks that `value` is written exactly in `expected_format`.
///
/// Parsing alone is not enough: `2020-1-25` parses under `Y-m-d` but formats
/// back as `2020-01-25`, so it is rejected.
///
/// Fields the format leaves out are taken from 2000-01-01, a leap year, so
/// `m-d` accepts `02-29`. A weekday without a full date is matched against
/// the first default date falling on that weekday.
///
/// # Errors
///
/// Returns [`InvalidDateFormat`] if the value does not parse, names an
/// impossible date, does not round-trip, or if the format has a token that
/// is not supported.
pub fn check_date_string_format(
    value: &str,
    expected_format: &str,
) -> Result<(), InvalidDateFormat> {
    let layout = DateFormat::translate(expected_format)?;
    let items: Vec<Item<'_>> = StrftimeItems::new(&layout.strftime).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(InvalidDateFormat);
    }

    let mut parsed = Parsed::new();
    format::parse(&mut parsed, value, items.iter()).map_err(|_| InvalidDateFormat)?;

    let rendered = layout
        .default_dates()
        .into_iter()
        .find_map(|date| {
            let mut candidate = parsed.clone();
            layout.fill_defaults(&mut candidate, date);
            layout.render(&candidate, &items)
        })
        .ok_or(InvalidDateFormat)?;

    if rendered == value {
        Ok(())
    } else {
        Err(InvalidDateFormat)
    }
}

/// A token format translated to strftime, plus which fields it pins down.
#[derive(Debug, Default)]
struct DateFormat {
    strftime: String,
    has_year: bool,
    has_month: bool,
    has_day: bool,
    has_hour: bool,
    has_minute: bool,
    has_twelve_hour: bool,
    has_meridiem: bool,
    has_weekday: bool,
    has_time: bool,
}

impl DateFormat {
    fn translate(tokens: &str) -> Result<Self, InvalidDateFormat> {
        let mut out = DateFormat::default();
        let mut chars = tokens.chars();

        while let Some(c) = chars.next() {
            let directive = match c {
                'Y' => {
                    out.has_year = true;
                    "%Y"
                }
                'y' => {
                    out.has_year = true;
                    "%y"
                }
                'm' => {
                    out.has_month = true;
                    "%m"
                }
                'n' => {
                    out.has_month = true;
                    "%-m"
                }
                'M' => {
                    out.has_month = true;
                    "%b"
                }
                'F' => {
                    out.has_month = true;
                    "%B"
                }
                'd' => {
                    out.has_day = true;
                    "%d"
                }
                'j' => {
                    out.has_day = true;
                    "%-d"
                }
                'D' => {
                    out.has_weekday = true;
                    "%a"
                }
                'l' => {
                    out.has_weekday = true;
                    "%A"
                }
                'H' => {
                    out.mark_hour(false);
                    "%H"
                }
                'G' => {
                    out.mark_hour(false);
                    "%-H"
                }
                'h' => {
                    out.mark_hour(true);
                    "%I"
                }
                'g' => {
                    out.mark_hour(true);
                    "%-I"
                }
                'A' => {
                    out.mark_meridiem();
                    "%p"
                }
                'a' => {
                    out.mark_meridiem();
                    "%P"
                }
                'i' => {
                    out.has_minute = true;
                    out.has_time = true;
                    "%M"
                }
                's' => {
                    out.has_time = true;
                    "%S"
                }
                '\\' => {
                    let literal = chars.next().ok_or(InvalidDateFormat)?;
                    out.push_literal(literal);
                    continue;
                }
                c if c.is_ascii_alphabetic() => return Err(InvalidDateFormat),
                c => {
                    out.push_literal(c);
                    continue;
                }
            };
            out.strftime.push_str(directive);
        }

        Ok(out)
    }

    fn mark_hour(&mut self, twelve_hour: bool) {
        self.has_hour = true;
        self.has_twelve_hour |= twelve_hour;
        self.has_time = true;
    }

    fn mark_meridiem(&mut self) {
        self.has_meridiem = true;
        self.has_time = true;
    }

    fn push_literal(&mut self, c: char) {
        if c == '%' {
            self.strftime.push_str("%%");
        } else {
            self.strftime.push(c);
        }
    }

    /// `(year, month, day)` defaults to try, in order.
    ///
    /// Only a weekday with an incomplete date needs more than 2000-01-01:
    /// the open fields are stepped until one candidate lands on it.
    fn default_dates(&self) -> Vec<(i64, i64, i64)> {
        if !self.has_weekday || (self.has_year && self.has_month && self.has_day) {
            return vec![(2000, 1, 1)];
        }

        let years = if self.has_year { 2000..=2000 } else { 2000..=2027 };
        let months = if self.has_month { 1..=1 } else { 1..=12 };
        let days = if self.has_day { 1..=1 } else { 1..=7 };

        let mut dates = Vec::new();
        for year in years {
            for month in months.clone() {
                for day in days.clone() {
                    dates.push((year, month, day));
                }
            }
        }
        dates
    }

    /// Pins the fields the format leaves open so the value can be resolved.
    ///
    /// Setters fail when a field is already set; that is the intended no-op.
    fn fill_defaults(&self, parsed: &mut Parsed, (year, month, day): (i64, i64, i64)) {
        if !self.has_year {
            let _ = parsed.set_year(year);
        }
        if !self.has_month {
            let _ = parsed.set_month(month);
        }
        if !self.has_day {
            let _ = parsed.set_day(day);
        }

        if self.has_time {
            if !self.has_hour {
                if self.has_meridiem {
                    let _ = parsed.set_hour12(12);
                } else {
                    let _ = parsed.set_hour(0);
                }
            }
            if !self.has_minute {
                let _ = parsed.set_minute(0);
            }
            if self.has_twelve_hour && !self.has_meridiem {
                let _ = parsed.set_ampm(false);
            }
        }
    }

    /// Formats the resolved value back with `items`, or `None` if the fields
    /// do not make a valid date (or time).
    fn render(&self, parsed: &Parsed, items: &[Item<'_>]) -> Option<String> {
        if self.has_time {
            let datetime = parsed.to_naive_datetime_with_offset(0).ok()?;
            Some(datetime.format_with_items(items.iter()).to_string())
        } else {
            let date = parsed.to_naive_date().ok()?;
            Some(date.format_with_items(items.iter()).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_date_format_passes() {
        assert_eq!(check_date_string_format("2020-01-25", "Y-m-d"), Ok(()));
    }

    #[test]
    fn test_wrong_date_format_fails() {
        assert_eq!(
            check_date_string_format("2020-01-25", "Y"),
            Err(InvalidDateFormat)
        );
    }

    #[test]
    fn test_unpadded_component_does_not_round_trip() {
        assert!(check_date_string_format("2020-1-25", "Y-m-d").is_err());
        assert!(check_date_string_format("2020-1-25", "Y-n-d").is_ok());
        assert!(check_date_string_format("2020-1-5", "Y-n-j").is_ok());
    }

    #[test]
    fn test_impossible_dates_fail() {
        assert!(check_date_string_format("2020-13-01", "Y-m-d").is_err());
        assert!(check_date_string_format("2021-02-29", "Y-m-d").is_err());
        assert!(check_date_string_format("2020-02-29", "Y-m-d").is_ok());
    }

    #[test]
    fn test_partial_formats() {
        assert!(check_date_string_format("2020", "Y").is_ok());
        // 2000 fills the year, so 02-29 passes whatever year is meant.
        assert!(check_date_string_format("02-29", "m-d").is_ok());
        assert!(check_date_string_format("02-30", "m-d").is_err());
    }

    #[test]
    fn test_separators_and_order() {
        assert!(check_date_string_format("25/01/2020", "d/m/Y").is_ok());
        assert!(check_date_string_format("25/01/2020", "Y-m-d").is_err());
        assert!(check_date_string_format("2020-01-25 ", "Y-m-d").is_err());
    }

    #[test]
    fn test_names_and_weekday_consistency() {
        assert!(check_date_string_format("Sat 25 Jan 2020", "D d M Y").is_ok());
        assert!(check_date_string_format("Mon 25 Jan 2020", "D d M Y").is_err());
        assert!(check_date_string_format("25 January 2020", "d F Y").is_ok());
    }

    #[test]
    fn test_weekday_without_full_date() {
        assert!(check_date_string_format("Sat", "D").is_ok());
        assert!(check_date_string_format("Mon", "D").is_ok());
        assert!(check_date_string_format("Monday", "l").is_ok());
        assert!(check_date_string_format("Mon 25 Jan", "D d M").is_ok());
        assert!(check_date_string_format("Funday", "l").is_err());
        assert!(check_date_string_format("Mon", "l").is_err());
    }

    #[test]
    fn test_ordinal_suffix_is_unsupported() {
        assert_eq!(
            check_date_string_format("25th", "jS"),
            Err(InvalidDateFormat)
        );
    }

    #[test]
    fn test_times() {
        assert!(check_date_string_format("2020-01-25T10:30:00", "Y-m-d\\TH:i:s").is_ok());
        assert!(check_date_string_format("10:30", "H:i").is_ok());
        assert!(check_date_string_format("25:30", "H:i").is_err());
        assert!(check_date_string_format("3:05 PM", "g:i A").is_ok());
    }

    #[test]
    fn test_unsupported_token_fails() {
        assert!(check_date_string_format("2020-01-25", "Y-m-dQ").is_err());
        assert!(check_date_string_format("2020", "Y\\").is_err());
    }

    #[test]
    fn test_literal_percent() {
        assert!(check_date_string_format("2020%01", "Y%m").is_ok());
    }
}
