// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol implementation for communicating with my-PV devices.
//!
//! my-PV devices expose a plain HTTP/JSON API on the local network:
//!
//! - `GET /data.jsn` - live readings
//! - `GET /setup.jsn` - configuration values
//! - `GET /setup.jsn?<field>=<value>` - write one setup field, the response
//!   echoes the confirmed setup values
//!
//! [`HttpClient`] implements the transport; the [`DeviceApi`] trait is the
//! seam the polling coordinator fetches through, so tests can substitute a
//! scripted device.

mod http;

pub use http::{HttpClient, HttpConfig};

use std::future::Future;

use serde_json::Value;

use crate::error::Error;

/// A parsed JSON object payload, keyed by field identifier.
pub type FieldMap = serde_json::Map<String, Value>;

/// Access to a my-PV device's status and setup endpoints.
///
/// Implemented by [`HttpClient`] for real devices. The futures are `Send`
/// because the coordinator drives them from a spawned poll task.
pub trait DeviceApi: Send + Sync + 'static {
    /// Fetches the live data section.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, non-success HTTP status, or
    /// a malformed JSON body.
    fn fetch_data(&self) -> impl Future<Output = Result<FieldMap, Error>> + Send;

    /// Fetches the setup section.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`DeviceApi::fetch_data`].
    fn fetch_setup(&self) -> impl Future<Output = Result<FieldMap, Error>> + Send;

    /// Writes one setup field and returns the device's confirmation payload.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`DeviceApi::fetch_data`].
    fn write_setup(&self, field: &str, value: i64)
    -> impl Future<Output = Result<FieldMap, Error>> + Send;
}
