//! Converter settings as stored by the embedding application.
//!
//! ```toml
//! calendar = "jalali"
//! ```

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarKind;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Calendar used by every operation of the converter.
    pub calendar: CalendarKind,
}

impl ConverterConfig {
    /// Parses the settings from TOML; missing keys take their defaults.
    ///
    /// ```
    /// use tarikh::{CalendarKind, ConverterConfig};
    ///
    /// let config = ConverterConfig::from_toml_str("calendar = \"hijri\"").unwrap();
    /// assert_eq!(CalendarKind::Hijri, config.calendar);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        tracing::debug!(calendar = %config.calendar, "loaded converter config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults_to_gregorian() {
        let config = ConverterConfig::from_toml_str("").unwrap();
        assert_eq!(CalendarKind::Gregorian, config.calendar);
    }

    #[test]
    fn parses_each_calendar() {
        for (name, std) in [
            ("gregorian", CalendarKind::Gregorian),
            ("jalali", CalendarKind::Jalali),
            ("hijri", CalendarKind::Hijri),
        ] {
            let config = ConverterConfig::from_toml_str(&format!("calendar = \"{name}\"")).unwrap();
            assert_eq!(std, config.calendar);
        }
    }

    #[test]
    fn rejects_unknown() {
        for input in ["calendar = \"julian\"", "calendar = 1", "locale = \"fa\""] {
            assert!(
                matches!(ConverterConfig::from_toml_str(input), Err(Error::Config(_))),
                "{input}"
            );
        }
    }
}
