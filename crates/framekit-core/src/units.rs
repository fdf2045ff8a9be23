//! Length unit utilities
//!
//! Engine lengths are expressed in inches. User-typed spacing values may be
//! entered as decimal inches, mixed fractions (`15 1/2`), feet and inches
//! (`1' 4"`) or, in the metric system, millimetres.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;
const INCHES_PER_FOOT: f64 = 12.0;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Feet and inches
    #[default]
    Imperial,
    /// Millimetres
    Metric,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "Imperial"),
            Self::Metric => write!(f, "Metric"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            "metric" | "mm" => Ok(Self::Metric),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a length for display
///
/// * `value_in` - Value in inches
/// * `system` - Target measurement system
pub fn format_length(value_in: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Imperial => format!("{:.3}", value_in),
        MeasurementSystem::Metric => format!("{:.3}", value_in * MM_PER_INCH),
    }
}

/// Format a length in inches as feet and inches, e.g. `1' 4"`.
pub fn format_feet_inches(value_in: f64) -> String {
    let sign = if value_in < 0.0 { "-" } else { "" };
    let total = value_in.abs();
    let mut feet = (total / INCHES_PER_FOOT).floor();
    let mut inches = total - feet * INCHES_PER_FOOT;
    // 11.9999 would otherwise print as 12"
    if (INCHES_PER_FOOT - inches) < 0.005 {
        feet += 1.0;
        inches = 0.0;
    }
    if feet > 0.0 {
        format!("{}{}' {}\"", sign, feet, trim_decimal(inches))
    } else {
        format!("{}{}\"", sign, trim_decimal(inches))
    }
}

fn trim_decimal(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Parse a length string to inches
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => {
            let mm = input
                .trim_end_matches("mm")
                .trim()
                .parse::<f64>()
                .map_err(|e| e.to_string())?;
            Ok(mm / MM_PER_INCH)
        }
        MeasurementSystem::Imperial => {
            if let Some((feet, inches)) = input.split_once('\'') {
                let feet = parse_mixed_number(feet)?;
                let inches = parse_mixed_number(inches.trim().trim_end_matches('"'))?;
                let sign = if feet < 0.0 { -1.0 } else { 1.0 };
                Ok(feet * INCHES_PER_FOOT + sign * inches)
            } else {
                parse_mixed_number(input.trim_end_matches('"'))
            }
        }
    }
}

/// Parse `15`, `15.5`, `1/2` or `15 1/2`. Empty input is zero.
fn parse_mixed_number(input: &str) -> Result<f64, String> {
    let mut total = 0.0;

    for part in input.split_whitespace() {
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err("Invalid fraction format".to_string());
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| "Invalid numerator")?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| "Invalid denominator")?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total += num / den;
        } else {
            total += part.parse::<f64>().map_err(|_| "Invalid number part")?;
        }
    }

    Ok(total)
}

/// Get the unit label for the given system ("in" or "mm")
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Imperial => "in",
        MeasurementSystem::Metric => "mm",
    }
}
