// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `mypv_lib` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: HTTP communication, JSON parsing, and entity construction.

use thiserror::Error;

use crate::profile::DeviceModel;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with my-PV devices.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during HTTP communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a device response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The field identifier is not listed in the device profile table.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The field exists but does not apply to the configured device model.
    #[error("field {field} is not available on model {model}")]
    NotApplicable {
        /// The requested field identifier.
        field: String,
        /// The configured device model.
        model: DeviceModel,
    },

    /// The field is not one of the writable switch fields.
    #[error("field {0} is not a switch")]
    NotASwitch(String),
}

/// Errors related to HTTP communication with the device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Device responded with a non-success status code.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_display() {
        let err = Error::UnknownField("bogus".to_string());
        assert_eq!(err.to_string(), "unknown field: bogus");
    }

    #[test]
    fn not_applicable_display() {
        let err = Error::NotApplicable {
            field: "pump_pwm".to_string(),
            model: DeviceModel::AcElwaE,
        };
        assert_eq!(
            err.to_string(),
            "field pump_pwm is not available on model AC ELWA-E"
        );
    }

    #[test]
    fn error_from_parse_error() {
        let parse_err = ParseError::MissingField("power".to_string());
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(ParseError::MissingField(_))));
    }

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::ConnectionFailed("HTTP 503 - Service Unavailable".to_string());
        assert_eq!(
            err.to_string(),
            "connection failed: HTTP 503 - Service Unavailable"
        );
    }
}
