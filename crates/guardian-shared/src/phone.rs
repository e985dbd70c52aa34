//! Phone-lookup simulation behind the verification page.
//!
//! The page's input widget already does the syntactic country-aware
//! validation; this module reproduces the demo's carrier and region lookup.
//! It is a simulation, not a directory query: the report is deterministic
//! from its inputs.

use serde::Serialize;
use thiserror::Error;

/// Structural screening failures, in the input widget's vocabulary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineCheckError {
    #[error("input contains non-digit characters")]
    NotANumber,
    #[error("the number is too short")]
    TooShort,
    #[error("the number is too long")]
    TooLong,
}

/// What the input widget hands over after country selection.
#[derive(Debug, Clone)]
pub struct DialedNumber {
    /// ISO-3166 alpha-2, any case.
    pub country_iso2: String,
    pub country_name: String,
    /// Country calling code without the plus, e.g. "1".
    pub dial_code: String,
    /// National number, digits only.
    pub national_number: String,
    /// E.164 rendering, e.g. "+12025550149".
    pub international_format: String,
}

/// The simulated lookup result panel.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneReport {
    pub valid: bool,
    pub number: String,
    pub international_format: String,
    pub country_prefix: String,
    pub country_code: String,
    pub country_name: String,
    pub location: String,
    pub carrier: String,
    pub line_type: String,
}

/// National prefixes the simulation attributes to SMART in the Philippines.
const SMART_PREFIXES: &[&str] = &[
    "907", "908", "909", "910", "912", "918", "919", "920", "921", "928", "929", "930", "939",
    "946", "947", "948", "949", "950", "951", "989", "998", "999",
];

/// E.164-ish structural bounds.
const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

/// Screen `input` structurally and produce the simulated report.
pub fn simulate_lookup(input: &DialedNumber) -> Result<PhoneReport, LineCheckError> {
    let number = input.national_number.as_str();
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineCheckError::NotANumber);
    }
    if number.len() < MIN_DIGITS {
        return Err(LineCheckError::TooShort);
    }
    if number.len() > MAX_DIGITS {
        return Err(LineCheckError::TooLong);
    }

    let code = input.country_iso2.to_uppercase();
    let prefix = &number[..3];

    let mut report = PhoneReport {
        valid: true,
        number: number.to_string(),
        international_format: input.international_format.clone(),
        country_prefix: format!("+{}", input.dial_code),
        country_code: code.clone(),
        country_name: input.country_name.clone(),
        location: "Global Region".to_string(),
        carrier: "International Network".to_string(),
        line_type: "mobile".to_string(),
    };

    match code.as_str() {
        "US" | "CA" => {
            report.country_name = if code == "US" {
                "United States of America".to_string()
            } else {
                "Canada".to_string()
            };
            report.location = "North America".to_string();
            // Lexicographic split on the leading three digits.
            report.carrier = if prefix < "500" {
                "Verizon Wireless".to_string()
            } else {
                "T-Mobile USA / Bell Canada".to_string()
            };
        }
        "PH" => {
            report.country_name = "Philippines".to_string();
            report.location = "Metro Manila".to_string();
            report.carrier = if SMART_PREFIXES.contains(&prefix) {
                "SMART Communications".to_string()
            } else {
                "Globe Telecom / DITO".to_string()
            };
        }
        _ => {}
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialed(iso2: &str, name: &str, dial: &str, national: &str) -> DialedNumber {
        DialedNumber {
            country_iso2: iso2.to_string(),
            country_name: name.to_string(),
            dial_code: dial.to_string(),
            national_number: national.to_string(),
            international_format: format!("+{dial}{national}"),
        }
    }

    #[test]
    fn test_us_low_prefix_maps_to_verizon() {
        let report = simulate_lookup(&dialed("us", "United States", "1", "2025550149")).unwrap();
        assert!(report.valid);
        assert_eq!(report.carrier, "Verizon Wireless");
        assert_eq!(report.location, "North America");
        assert_eq!(report.country_name, "United States of America");
        assert_eq!(report.country_prefix, "+1");
    }

    #[test]
    fn test_us_high_prefix_maps_to_tmobile() {
        let report = simulate_lookup(&dialed("US", "United States", "1", "6175550199")).unwrap();
        assert_eq!(report.carrier, "T-Mobile USA / Bell Canada");
    }

    #[test]
    fn test_ph_smart_prefix() {
        let report = simulate_lookup(&dialed("PH", "Philippines", "63", "9181234567")).unwrap();
        assert_eq!(report.carrier, "SMART Communications");
        assert_eq!(report.location, "Metro Manila");
    }

    #[test]
    fn test_ph_other_prefix_is_globe() {
        let report = simulate_lookup(&dialed("PH", "Philippines", "63", "9171234567")).unwrap();
        assert_eq!(report.carrier, "Globe Telecom / DITO");
    }

    #[test]
    fn test_unknown_country_gets_defaults() {
        let report = simulate_lookup(&dialed("GB", "United Kingdom", "44", "7911123456")).unwrap();
        assert_eq!(report.carrier, "International Network");
        assert_eq!(report.location, "Global Region");
        assert_eq!(report.country_name, "United Kingdom");
        assert_eq!(report.line_type, "mobile");
    }

    #[test]
    fn test_non_digit_input_is_rejected() {
        let err = simulate_lookup(&dialed("US", "United States", "1", "202-555-0149")).unwrap_err();
        assert_eq!(err, LineCheckError::NotANumber);
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            simulate_lookup(&dialed("US", "United States", "1", "123456")).unwrap_err(),
            LineCheckError::TooShort
        );
        assert_eq!(
            simulate_lookup(&dialed("US", "United States", "1", "1234567890123456")).unwrap_err(),
            LineCheckError::TooLong
        );
    }
}
