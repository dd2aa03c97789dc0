//! CSS length helpers.

use cssparser::{Parser, ParserInput, Token};

use crate::constants::REM_BASE_PX;

/// The leading numeric token of a CSS value.
#[derive(Debug, Clone, PartialEq)]
pub enum CssNumeric {
    /// Unitless number (`1024`)
    Number(f64),
    /// Percentage, in percent (`66.67%` → `66.67`)
    Percentage(f64),
    /// Number with a unit (`64rem` → `(64.0, "rem")`)
    Dimension(f64, String),
}

impl CssNumeric {
    /// The numeric part, whatever the unit.
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(value) | Self::Percentage(value) | Self::Dimension(value, _) => *value,
        }
    }
}

/// Tokenizes a CSS value and returns its first token if it is numeric.
///
/// Anything after the first token is ignored. The number is read back from the
/// source text so `66.67%` stays `66.67` instead of going through `f32`.
pub fn parse_numeric(value: &str) -> Option<CssNumeric> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    parser.skip_whitespace();
    let start = parser.position();
    let token = parser.next().ok()?.clone();
    let text = parser.slice_from(start).trim_end();

    match token {
        Token::Number { value, .. } => Some(CssNumeric::Number(
            text.parse().unwrap_or_else(|_| f64::from(value)),
        )),
        Token::Percentage { unit_value, .. } => Some(CssNumeric::Percentage(
            text.strip_suffix('%')
                .and_then(|number| number.parse().ok())
                .unwrap_or_else(|| f64::from(unit_value) * 100.0),
        )),
        Token::Dimension { value, unit, .. } => {
            let number = text
                .len()
                .checked_sub(unit.len())
                .and_then(|end| text.get(..end))
                .and_then(|number| number.parse().ok())
                .unwrap_or_else(|| f64::from(value));
            Some(CssNumeric::Dimension(number, unit.to_ascii_lowercase()))
        }
        _ => None,
    }
}

/// Parses the leading number of a CSS value (`"66.67%"` → `66.67`).
///
/// Returns `None` when the value does not start with a number.
pub fn parse_leading_number(value: &str) -> Option<f64> {
    parse_numeric(value).map(|numeric| numeric.value())
}

/// Parses a percentage (`"33.33%"` → `33.33`).
pub fn parse_percentage(value: &str) -> Option<f64> {
    match parse_numeric(value)? {
        CssNumeric::Percentage(percent) => Some(percent),
        _ => None,
    }
}

/// Converts a CSS length to pixels.
///
/// `px` and unitless values are read directly; `rem` is multiplied by the
/// root font size. Other units are not resolvable and return `None`.
pub fn length_to_px(value: &str) -> Option<f64> {
    match parse_numeric(value)? {
        CssNumeric::Number(number) => Some(number),
        CssNumeric::Dimension(number, unit) => match unit.as_str() {
            "px" => Some(number),
            "rem" => Some(number * REM_BASE_PX),
            _ => None,
        },
        CssNumeric::Percentage(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("1024"), Some(CssNumeric::Number(1024.0)));
        assert_eq!(parse_numeric("66.67%"), Some(CssNumeric::Percentage(66.67)));
        assert_eq!(
            parse_numeric("64REM"),
            Some(CssNumeric::Dimension(64.0, "rem".to_string()))
        );
        assert_eq!(parse_numeric("auto"), None);
        assert_eq!(parse_numeric("calc(50% - 1rem)"), None);
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("66.67%"), Some(66.67));
        assert_eq!(parse_leading_number("50vw"), Some(50.0));
        assert_eq!(parse_leading_number(" 1024px "), Some(1024.0));
        assert_eq!(parse_leading_number("-1.5rem"), Some(-1.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("1e2px"), Some(100.0));
        assert_eq!(parse_leading_number("25%@1024"), Some(25.0));
        assert_eq!(parse_leading_number("auto"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number(""), None);
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("33.33%"), Some(33.33));
        assert_eq!(parse_percentage("33.33vw"), None);
        assert_eq!(parse_percentage("%"), None);
    }

    #[test]
    fn test_length_to_px() {
        assert_eq!(length_to_px("1024px"), Some(1024.0));
        assert_eq!(length_to_px("1024"), Some(1024.0));
        assert_eq!(length_to_px("64rem"), Some(1024.0));
        assert_eq!(length_to_px("90vw"), None);
        assert_eq!(length_to_px("50%"), None);
        assert_eq!(length_to_px("80ch"), None);
        assert_eq!(length_to_px("none"), None);
    }
}
