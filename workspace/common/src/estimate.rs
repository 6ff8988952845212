use std::fmt;

use crate::api::PredictionResponse;

/// Estimates at or above this many lakhs are shown in crores.
pub const CRORE_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denomination {
    Lakhs,
    Crores,
}

impl Denomination {
    pub fn label(self) -> &'static str {
        match self {
            Denomination::Lakhs => "Lakhs",
            Denomination::Crores => "Crores",
        }
    }
}

/// Price estimate ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEstimate {
    /// Raw model output in lakhs
    pub lakhs: f64,
    pub amount: f64,
    pub denomination: Denomination,
}

impl PriceEstimate {
    pub fn from_lakhs(lakhs: f64) -> Self {
        if lakhs >= CRORE_THRESHOLD {
            Self {
                lakhs,
                amount: lakhs / 100.0,
                denomination: Denomination::Crores,
            }
        } else {
            Self {
                lakhs,
                amount: lakhs,
                denomination: Denomination::Lakhs,
            }
        }
    }

    /// Uses `prediction`, then `price`, then 0. Zero and non-finite values
    /// count as absent.
    pub fn from_response(response: &PredictionResponse) -> Self {
        let usable = |value: Option<f64>| value.filter(|v| v.is_finite() && *v != 0.0);
        let lakhs = usable(response.prediction)
            .or_else(|| usable(response.price))
            .unwrap_or(0.0);
        Self::from_lakhs(lakhs)
    }

    /// Two decimals; lakh amounts also get Indian digit grouping.
    pub fn formatted_amount(&self) -> String {
        match self.denomination {
            Denomination::Crores => format!("{:.2}", self.amount),
            Denomination::Lakhs => format_indian(self.amount),
        }
    }
}

impl fmt::Display for PriceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{} {}", self.formatted_amount(), self.denomination.label())
    }
}

/// Formats with two decimals and `en-IN` grouping: `1234567.5` → `12,34,567.50`.
pub fn format_indian(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 2 + 4);
    if digits.len() > 3 {
        let head = &int_part[..digits.len() - 3];
        let lead = head.len() % 2;
        if lead == 1 {
            grouped.push_str(&head[..1]);
        }
        for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
            if i > 0 || lead == 1 {
                grouped.push(',');
            }
            grouped.extend(pair.iter().map(|b| *b as char));
        }
        grouped.push(',');
        grouped.push_str(&int_part[digits.len() - 3..]);
    } else {
        grouped.push_str(int_part);
    }

    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}
