//! Parameter value formatting and parsing.
//!
//! The [`Formatter`] enum converts between plain parameter values and the
//! display strings a host shows in its generic parameter view. Choice
//! parameters format through their option names instead.
//!
//! # Example
//!
//! ```ignore
//! use plinth_core::parameter_format::Formatter;
//!
//! let formatter = Formatter::Float { precision: 1 };
//! assert_eq!(formatter.text(0.5), "0.5");
//! assert_eq!(Formatter::Boolean.text(1.0), "On");
//! ```

/// Parameter value formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formatter {
    /// Generic number with configurable precision (e.g., "1.23").
    Float {
        /// Number of decimal places.
        precision: usize,
    },

    /// Boolean formatter.
    ///
    /// Display: "On", "Off"
    Boolean,
}

impl Formatter {
    /// Convert a plain value to a display string.
    pub fn text(&self, value: f64) -> String {
        match self {
            Formatter::Float { precision } => {
                format!("{:.prec$}", value, prec = *precision)
            }

            Formatter::Boolean => {
                if value > 0.5 {
                    "On".to_string()
                } else {
                    "Off".to_string()
                }
            }
        }
    }

    /// Parse a display string to a plain value.
    ///
    /// Returns `None` if the string cannot be parsed.
    pub fn parse(&self, s: &str) -> Option<f64> {
        let s = s.trim();

        match self {
            Formatter::Float { .. } => s.parse::<f64>().ok().filter(|v| v.is_finite()),

            Formatter::Boolean => match s.to_lowercase().as_str() {
                "on" | "true" | "yes" | "1" | "enabled" => Some(1.0),
                "off" | "false" | "no" | "0" | "disabled" => Some(0.0),
                _ => None,
            },
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::Float { precision: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_text() {
        assert_eq!(Formatter::Float { precision: 1 }.text(0.26), "0.3");
        assert_eq!(Formatter::Float { precision: 0 }.text(7.0), "7");
        assert_eq!(Formatter::default().text(1.0), "1.00");
    }

    #[test]
    fn test_float_parse() {
        let formatter = Formatter::Float { precision: 2 };
        assert_eq!(formatter.parse(" 0.75 "), Some(0.75));
        assert_eq!(formatter.parse("abc"), None);
        assert_eq!(formatter.parse("NaN"), None);
    }

    #[test]
    fn test_boolean_round_trip() {
        assert_eq!(Formatter::Boolean.text(1.0), "On");
        assert_eq!(Formatter::Boolean.text(0.0), "Off");
        assert_eq!(Formatter::Boolean.parse("ON"), Some(1.0));
        assert_eq!(Formatter::Boolean.parse("disabled"), Some(0.0));
        assert_eq!(Formatter::Boolean.parse("maybe"), None);
    }
}
