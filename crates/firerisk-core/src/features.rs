//! Feature layout for the fire-risk model
//!
//! The scaler and the model were both fit on nine readings in a fixed order:
//!
//! | index | field       | meaning                          |
//! |-------|-------------|----------------------------------|
//! | 0     | Temperature | noon temperature (°C)            |
//! | 1     | RH          | relative humidity (%)            |
//! | 2     | Ws          | wind speed (km/h)                |
//! | 3     | Rain        | daily rain (mm)                  |
//! | 4     | FFMC        | Fine Fuel Moisture Code          |
//! | 5     | DMC         | Duff Moisture Code               |
//! | 6     | ISI         | Initial Spread Index             |
//! | 7     | Classes     | fire / not fire label, encoded   |
//! | 8     | Region      | region, encoded                  |
//!
//! Values are never range-checked. Anything that parses as a real number is
//! passed through to the model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// Number of features the artifacts were fit on
pub const FEATURE_COUNT: usize = 9;

/// Feature names in model order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Temperature",
    "RH",
    "Ws",
    "Rain",
    "FFMC",
    "DMC",
    "ISI",
    "Classes",
    "Region",
];

/// Check that a raw feature slice has the expected number of entries
pub fn check_arity(values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(InputError::Arity {
            expected,
            actual: values.len(),
        }
        .into());
    }
    Ok(())
}

/// One set of environmental readings, named
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "RH")]
    pub rh: f64,
    #[serde(rename = "Ws")]
    pub ws: f64,
    #[serde(rename = "Rain")]
    pub rain: f64,
    #[serde(rename = "FFMC")]
    pub ffmc: f64,
    #[serde(rename = "DMC")]
    pub dmc: f64,
    #[serde(rename = "ISI")]
    pub isi: f64,
    #[serde(rename = "Classes")]
    pub classes: f64,
    #[serde(rename = "Region")]
    pub region: f64,
}

impl FeatureRecord {
    /// Values in model order
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.temperature,
            self.rh,
            self.ws,
            self.rain,
            self.ffmc,
            self.dmc,
            self.isi,
            self.classes,
            self.region,
        ]
    }

    /// Build a record from values in model order
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        check_arity(values, FEATURE_COUNT)?;
        Ok(Self::from_array([
            values[0], values[1], values[2], values[3], values[4], values[5], values[6],
            values[7], values[8],
        ]))
    }

    fn from_array(v: [f64; FEATURE_COUNT]) -> Self {
        Self {
            temperature: v[0],
            rh: v[1],
            ws: v[2],
            rain: v[3],
            ffmc: v[4],
            dmc: v[5],
            isi: v[6],
            classes: v[7],
            region: v[8],
        }
    }

    /// Coerce string fields into a record
    ///
    /// `lookup` is asked for each name in [`FEATURE_NAMES`]. Surrounding
    /// whitespace is ignored; the rest must parse as an `f64`.
    pub fn from_fields<F, S>(mut lookup: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<S>,
        S: AsRef<str>,
    {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
            let raw = lookup(name).ok_or_else(|| InputError::MissingField(name.to_string()))?;
            *slot = parse_number(name, raw.as_ref())?;
        }
        Ok(Self::from_array(values))
    }

    /// Coerce a submitted HTML form into a record
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self> {
        Self::from_fields(|name| form.get(name))
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureRecord {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self::from_array(values)
    }
}

fn parse_number(field: &str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        InputError::NotANumber {
            field: field.to_string(),
            value: raw.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FireRiskError;

    fn full_form() -> HashMap<String, String> {
        FEATURE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), format!("{}", i as f64 + 0.5)))
            .collect()
    }

    #[test]
    fn test_to_array_preserves_order() {
        let record = FeatureRecord::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(record.temperature, 1.0);
        assert_eq!(record.region, 9.0);
        assert_eq!(
            record.to_array(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
    }

    #[test]
    fn test_from_slice_rejects_wrong_arity() {
        let err = FeatureRecord::from_slice(&[0.0; 8]).unwrap_err();
        assert_eq!(
            err,
            FireRiskError::InvalidInput(InputError::Arity {
                expected: 9,
                actual: 8
            })
        );
        assert!(FeatureRecord::from_slice(&[0.0; 10]).is_err());
    }

    #[test]
    fn test_from_form() {
        let record = FeatureRecord::from_form(&full_form()).unwrap();
        assert_eq!(record.temperature, 0.5);
        assert_eq!(record.isi, 6.5);
        assert_eq!(record.region, 8.5);
    }

    #[test]
    fn test_from_form_trims_whitespace() {
        let mut form = full_form();
        form.insert("Rain".to_string(), "  12.25 \n".to_string());
        let record = FeatureRecord::from_form(&form).unwrap();
        assert_eq!(record.rain, 12.25);
    }

    #[test]
    fn test_from_form_accepts_out_of_range_values() {
        let mut form = full_form();
        form.insert("Rain".to_string(), "-40".to_string());
        form.insert("RH".to_string(), "1e3".to_string());
        let record = FeatureRecord::from_form(&form).unwrap();
        assert_eq!(record.rain, -40.0);
        assert_eq!(record.rh, 1000.0);
    }

    #[test]
    fn test_from_form_missing_field() {
        let mut form = full_form();
        form.remove("DMC");
        let err = FeatureRecord::from_form(&form).unwrap_err();
        assert_eq!(
            err,
            FireRiskError::InvalidInput(InputError::MissingField("DMC".to_string()))
        );
    }

    #[test]
    fn test_from_form_not_a_number() {
        let mut form = full_form();
        form.insert("Ws".to_string(), "windy".to_string());
        let err = FeatureRecord::from_form(&form).unwrap_err();
        assert!(matches!(
            err,
            FireRiskError::InvalidInput(InputError::NotANumber { ref field, .. }) if field == "Ws"
        ));
    }

    #[test]
    fn test_json_uses_form_field_names() {
        let record = FeatureRecord::from([0.0; FEATURE_COUNT]);
        let json = serde_json::to_value(record).unwrap();
        for name in FEATURE_NAMES {
            assert!(json.get(name).is_some(), "missing {name}");
        }
    }
}
