//! Shared helpers for presenting results to the form front-end.

use chrono::{Local, NaiveDate};

/// Format a date the way the form displays it (e.g., "01.01.2035").
pub fn format_ru_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Current local date, used when the caller does not pin one.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Escape text for embedding inside a JavaScript template literal.
///
/// Used for the "copy to clipboard" button of the compliance tool.
pub fn escape_js_template(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('`', r"\`")
        .replace("${", r"\${")
        .replace('\r', "")
        .replace('\n', r"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ru_date_pads_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2035, 1, 5).unwrap();
        assert_eq!(format_ru_date(date), "05.01.2035");
    }

    #[test]
    fn test_escape_js_template_handles_interpolation() {
        assert_eq!(escape_js_template("cost ${x}"), r"cost \${x}");
        assert_eq!(escape_js_template("a\r\nb"), r"a\nb");
    }
}
