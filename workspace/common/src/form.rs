//! Flat snapshot of the prediction form, built fresh on every submit.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::error::ValidationGap;
use crate::property::is_floorless;

pub const PROPERTY_TYPE_FIELD: &str = "Property_Type";
pub const FLOOR_FIELD: &str = "Floor_No";
pub const AMENITIES_FIELD: &str = "Amenities";

/// Fields sent to the backend as integers.
pub const NUMERIC_FIELDS: [&str; 7] = [
    "BHK",
    "Size_in_SqFt",
    "Floor_No",
    "Total_Floors",
    "Age_of_Property",
    "Nearby_Schools",
    "Nearby_Hospitals",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

/// Request body of `POST /predict`: field name → text or integer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: BTreeMap<String, FieldValue>,
}

impl FormSnapshot {
    /// Builds the request from the form's named entries.
    ///
    /// `floor_input` is the current value of the floor control, which is
    /// missing from the entries while the control is disabled. Numeric fields
    /// that do not start with an integer are dropped and reported as gaps.
    pub fn capture<I, K, V>(entries: I, floor_input: Option<&str>) -> (Self, Vec<ValidationGap>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: BTreeMap<String, FieldValue> = entries
            .into_iter()
            .map(|(name, value)| (name.into(), FieldValue::Text(value.into())))
            .collect();

        let floorless = fields
            .get(PROPERTY_TYPE_FIELD)
            .and_then(FieldValue::as_text)
            .is_some_and(is_floorless);
        let has_floor = fields
            .get(FLOOR_FIELD)
            .and_then(FieldValue::as_text)
            .is_some_and(|v| !v.is_empty());
        if floorless {
            fields.insert(FLOOR_FIELD.to_string(), FieldValue::Text("0".to_string()));
        } else if !has_floor {
            if let Some(input) = floor_input {
                let value = if input.is_empty() { "0" } else { input };
                fields.insert(FLOOR_FIELD.to_string(), FieldValue::Text(value.to_string()));
            }
        }

        let mut gaps = Vec::new();
        for name in NUMERIC_FIELDS {
            let Some(FieldValue::Text(raw)) = fields.get(name).cloned() else {
                continue;
            };
            // blank values are left as they are
            if raw.is_empty() {
                continue;
            }
            match parse_leading_int(&raw) {
                Some(number) => {
                    fields.insert(name.to_string(), FieldValue::Number(number));
                }
                None => {
                    let gap = ValidationGap {
                        field: name.to_string(),
                        value: raw,
                    };
                    warn!(%gap, "Skipping non-numeric field");
                    fields.remove(name);
                    gaps.push(gap);
                }
            }
        }

        (Self { fields }, gaps)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Integer at the start of `raw`, after leading whitespace and an optional
/// sign: `"12.7"` → 12, `" 3 floors"` → 3, `"abc"` → `None`.
///
/// Values beyond the `i64` range saturate at `i64::MAX` / `i64::MIN`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    let number = &trimmed[..sign_len + digits];
    match number.parse() {
        Ok(value) => Some(value),
        // only overflow is left once the digits are known to be valid
        Err(_) if number.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
