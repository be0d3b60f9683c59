/// Utility functions for formatting market values for display
use tracing::error;

use crate::constants::{INVALID_DATA, NOT_AVAILABLE};

/// Direction of a price change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Up
        } else if value < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Up => "🟢",
            Self::Down => "🔴",
            Self::Flat => "⚪",
        }
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a volume/liquidity value with one decimal and space-grouped thousands.
///
/// Non-numeric input is returned unchanged.
pub fn format_magnitude(raw: &str) -> String {
    let Some(value) = parse_finite(raw) else {
        return raw.to_string();
    };

    let fixed = format!("{:.1}", value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "0"));

    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a percent change as `<marker> <abs>%`
pub fn format_change(raw: &str) -> String {
    if raw == NOT_AVAILABLE {
        return NOT_AVAILABLE.to_string();
    }

    match parse_finite(raw) {
        Some(value) => format!(
            "{} {}%",
            ChangeDirection::of(value).marker(),
            display_float(value.abs())
        ),
        None => {
            error!("Error processing change: {}", raw);
            INVALID_DATA.to_string()
        }
    }
}

/// Shortest round-trip form. Whole numbers keep one decimal (`5` -> `5.0`),
/// magnitudes outside `1e-4..1e16` switch to exponent form (`1e+20`, `1e-05`).
fn display_float(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn exponent_form(value: f64) -> String {
    let shortest = format!("{:e}", value);
    let (mantissa, exponent) = shortest.split_once('e').unwrap_or((shortest.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };

    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}
