// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `MyPV` Lib - A Rust library for my-PV solar-thermal devices.
//!
//! This library polls my-PV power diversion devices (AC ELWA-E, AC-THOR,
//! ELWA 2, SOL-THOR, HEATHOR and friends) over their local HTTP JSON API
//! and exposes their fields as typed sensor and switch entities.
//!
//! # Supported Features
//!
//! - **Periodic polling**: One shared coordinator fetches live data and
//!   setup values on an interval and caches them as an immutable snapshot
//! - **Sensors**: Read-only views of any field the device's model carries,
//!   with labels, units and icons from a built-in profile table
//! - **Switches**: Writable setup fields (device mode, hot water boost,
//!   legionella protection, cloud mode) with confirmed writes
//! - **Change notification**: Listeners fire after every completed poll
//!
//! # Quick Start
//!
//! ```no_run
//! use mypv_lib::entity::{Sensor, Switch};
//! use mypv_lib::profile::DeviceModel;
//! use mypv_lib::protocol::HttpConfig;
//! use mypv_lib::PollCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> mypv_lib::Result<()> {
//!     // One coordinator per device; entities share it.
//!     let coordinator = PollCoordinator::http(HttpConfig::new("192.168.1.50"))?;
//!
//!     let power = Sensor::new(coordinator.clone(), "power", DeviceModel::AcElwaE)?;
//!     let boost = Switch::new(coordinator.clone(), "bstmode", DeviceModel::AcElwaE)?;
//!
//!     // React to every completed poll.
//!     coordinator.subscribe(move |outcome| {
//!         println!("poll finished, success = {}", outcome.success);
//!     });
//!
//!     // First fetch happens immediately, then every poll interval.
//!     coordinator.start();
//!     tokio::time::sleep(std::time::Duration::from_secs(15)).await;
//!
//!     if power.available() {
//!         println!("power: {:?}", power.value());
//!     }
//!     if boost.is_on() == Some(false) {
//!         boost.turn_on().await?;
//!     }
//!
//!     coordinator.shutdown();
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The [`PollCoordinator`] owns the fetch loop and the snapshot cache;
//! entities in [`entity`] are cheap handles that render the current
//! snapshot. The [`protocol::DeviceApi`] trait separates the coordinator
//! from the transport, so tests can substitute a fake device for the HTTP
//! client in [`protocol`]. Which fields a device has is described by the
//! static table in [`profile`].

pub mod coordinator;
pub mod entity;
pub mod error;
pub mod profile;
pub mod protocol;
pub mod snapshot;

pub use coordinator::{DEFAULT_POLL_INTERVAL, PollCoordinator, PollOutcome, SubscriptionId};
pub use entity::{Sensor, Switch, sensors_for_model, switches_for_model};
pub use error::{Error, ParseError, ProtocolError, Result};
pub use profile::{DeviceModel, FieldProfile, Section, Unit};
pub use protocol::{DeviceApi, HttpClient, HttpConfig};
pub use snapshot::{DeviceInfo, FieldValue, Snapshot};
