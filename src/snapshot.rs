// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot of the device state obtained from one poll.
//!
//! A [`Snapshot`] holds the complete set of field values from one successful
//! fetch of `data.jsn` and `setup.jsn`. Snapshots are never mutated after
//! publication; the coordinator replaces the shared reference wholesale, and
//! switch writes produce a copy with a single setup field overridden.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::error::ParseError;
use crate::profile::{self, Section};

/// A scalar value reported by the device.
///
/// The JSON API only ever reports scalars: numeric readings, status codes,
/// and strings such as IP addresses or firmware versions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer value (readings, status codes, mode flags).
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Boolean value.
    Bool(bool),
}

impl FieldValue {
    /// Returns the value as an integer, if it is one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a float, converting from integer if needed.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the value as a string slice, if it is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl TryFrom<&Value> for FieldValue {
    type Error = ParseError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Int).or_else(|| n.as_f64().map(Self::Float)).ok_or_else(
                || ParseError::UnexpectedFormat(format!("unrepresentable number: {n}")),
            ),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            other => Err(ParseError::UnexpectedFormat(format!(
                "expected scalar, got {other}"
            ))),
        }
    }
}

/// Identifying information of the polled device.
///
/// Sourced from the info fields of the data section of the first successful
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DeviceInfo {
    /// Manufacturer, always "my-PV".
    pub manufacturer: &'static str,
    /// Product name as reported by the device.
    pub model: String,
    /// Firmware version.
    pub firmware_version: String,
    /// Serial number.
    pub serial_number: String,
}

/// The complete set of field values obtained from one successful poll.
///
/// Fields are kept per source section because the same identifier namespace
/// covers both endpoints; [`Snapshot::get`] resolves the section through the
/// profile table.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Snapshot {
    data: HashMap<String, FieldValue>,
    setup: HashMap<String, FieldValue>,
}

impl Snapshot {
    /// Builds a snapshot from the parsed `data.jsn` and `setup.jsn` objects.
    ///
    /// Non-scalar members (nested objects, arrays, nulls) are skipped; the
    /// device API does not use them for entity fields.
    #[must_use]
    pub fn from_payloads(data: &serde_json::Map<String, Value>, setup: &serde_json::Map<String, Value>) -> Self {
        let scalars = |map: &serde_json::Map<String, Value>| {
            map.iter()
                .filter_map(|(k, v)| FieldValue::try_from(v).ok().map(|fv| (k.clone(), fv)))
                .collect()
        };
        Self {
            data: scalars(data),
            setup: scalars(setup),
        }
    }

    /// Looks up a field, resolving its source section via the profile table.
    ///
    /// Fields not listed in the table are looked up in the data section
    /// first, then in the setup section.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        match profile::profile(field).map(|p| p.section) {
            Some(Section::Data) => self.data.get(field),
            Some(Section::Setup) => self.setup.get(field),
            None => self.data.get(field).or_else(|| self.setup.get(field)),
        }
    }

    /// Looks up a field in a specific section.
    #[must_use]
    pub fn get_in(&self, section: Section, field: &str) -> Option<&FieldValue> {
        match section {
            Section::Data => self.data.get(field),
            Section::Setup => self.setup.get(field),
        }
    }

    /// Returns `true` if the field is present in either section.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Returns a copy of this snapshot with one setup field overridden.
    ///
    /// This is the optimistic-patch path for switch writes: the shared
    /// snapshot reference is replaced with the copy, never mutated in place.
    #[must_use]
    pub fn with_setup_field(&self, field: &str, value: FieldValue) -> Self {
        let mut patched = self.clone();
        patched.setup.insert(field.to_string(), value);
        patched
    }

    /// Extracts the device identity from the info fields.
    ///
    /// Returns `None` until the device has reported all of `device`,
    /// `fwversion` and `sn`.
    #[must_use]
    pub fn device_info(&self) -> Option<DeviceInfo> {
        let text = |field: &str| {
            self.data
                .get(field)
                .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
        };
        Some(DeviceInfo {
            manufacturer: "my-PV",
            model: text("device")?,
            firmware_version: text("fwversion")?,
            serial_number: text("sn")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn sample() -> Snapshot {
        Snapshot::from_payloads(
            &object(json!({
                "device": "AC ELWA-E",
                "fwversion": "00205",
                "sn": "120100012345",
                "power": 850,
                "temp1": 48.5,
                "status": 3,
            })),
            &object(json!({
                "devmode": 0,
                "bstmode": 1,
            })),
        )
    }

    #[test]
    fn get_resolves_section_from_profile() {
        let snapshot = sample();
        assert_eq!(snapshot.get("power"), Some(&FieldValue::Int(850)));
        assert_eq!(snapshot.get("bstmode"), Some(&FieldValue::Int(1)));
        assert!(snapshot.get("legmode").is_none());
    }

    #[test]
    fn get_in_section() {
        let snapshot = sample();
        assert!(snapshot.get_in(Section::Data, "power").is_some());
        assert!(snapshot.get_in(Section::Setup, "power").is_none());
        assert!(snapshot.get_in(Section::Setup, "devmode").is_some());
    }

    #[test]
    fn unknown_field_falls_back_to_either_section() {
        let snapshot = Snapshot::from_payloads(
            &object(json!({"custom_reading": 7})),
            &object(json!({"custom_knob": 1})),
        );
        assert_eq!(snapshot.get("custom_reading"), Some(&FieldValue::Int(7)));
        assert_eq!(snapshot.get("custom_knob"), Some(&FieldValue::Int(1)));
    }

    #[test]
    fn non_scalar_members_are_skipped() {
        let snapshot = Snapshot::from_payloads(
            &object(json!({"power": 850, "nested": {"a": 1}, "list": [1, 2], "gone": null})),
            &object(json!({})),
        );
        assert!(snapshot.contains("power"));
        assert!(!snapshot.contains("nested"));
        assert!(!snapshot.contains("list"));
        assert!(!snapshot.contains("gone"));
    }

    #[test]
    fn with_setup_field_leaves_original_untouched() {
        let snapshot = sample();
        let patched = snapshot.with_setup_field("devmode", FieldValue::Int(1));

        assert_eq!(snapshot.get("devmode"), Some(&FieldValue::Int(0)));
        assert_eq!(patched.get("devmode"), Some(&FieldValue::Int(1)));
        // Everything else carries over.
        assert_eq!(patched.get("power"), Some(&FieldValue::Int(850)));
        assert_eq!(patched.get("bstmode"), Some(&FieldValue::Int(1)));
    }

    #[test]
    fn device_info_from_info_fields() {
        let info = sample().device_info().unwrap();
        assert_eq!(info.manufacturer, "my-PV");
        assert_eq!(info.model, "AC ELWA-E");
        assert_eq!(info.firmware_version, "00205");
        assert_eq!(info.serial_number, "120100012345");
    }

    #[test]
    fn device_info_requires_all_fields() {
        let snapshot = Snapshot::from_payloads(&object(json!({"power": 1})), &object(json!({})));
        assert!(snapshot.device_info().is_none());
    }

    #[test]
    fn device_info_accepts_numeric_serial() {
        let snapshot = Snapshot::from_payloads(
            &object(json!({"device": "AC-THOR", "fwversion": "a0010202", "sn": 2001})),
            &object(json!({})),
        );
        assert_eq!(snapshot.device_info().unwrap().serial_number, "2001");
    }

    #[test]
    fn field_value_accessors() {
        assert_eq!(FieldValue::Int(3).as_i64(), Some(3));
        assert_eq!(FieldValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(FieldValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(FieldValue::Text("x".into()).as_str(), Some("x"));
        assert!(FieldValue::Float(1.5).as_i64().is_none());
    }

    #[test]
    fn field_value_from_json() {
        assert_eq!(
            FieldValue::try_from(&json!(850)).unwrap(),
            FieldValue::Int(850)
        );
        assert_eq!(
            FieldValue::try_from(&json!(48.5)).unwrap(),
            FieldValue::Float(48.5)
        );
        assert_eq!(
            FieldValue::try_from(&json!("elwa")).unwrap(),
            FieldValue::Text("elwa".into())
        );
        assert!(FieldValue::try_from(&json!([1])).is_err());
        assert!(FieldValue::try_from(&json!(null)).is_err());
    }
}
