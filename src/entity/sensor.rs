// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only sensor adapter.

use crate::coordinator::PollCoordinator;
use crate::error::{Error, Result};
use crate::profile::{self, DeviceModel, FieldProfile, Unit};
use crate::protocol::DeviceApi;
use crate::snapshot::{DeviceInfo, FieldValue};

/// Read-only view of one field of the coordinator's snapshot.
///
/// # Examples
///
/// ```no_run
/// use mypv_lib::entity::Sensor;
/// use mypv_lib::profile::DeviceModel;
/// use mypv_lib::protocol::HttpConfig;
/// use mypv_lib::PollCoordinator;
///
/// # async fn example() -> mypv_lib::Result<()> {
/// let coordinator = PollCoordinator::http(HttpConfig::new("192.168.1.50"))?;
/// let power = Sensor::new(coordinator.clone(), "power", DeviceModel::AcElwaE)?;
///
/// coordinator.refresh().await;
/// if power.available() {
///     println!("{}: {:?} {:?}", power.name(), power.value(), power.unit());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Sensor<A: DeviceApi> {
    coordinator: PollCoordinator<A>,
    profile: &'static FieldProfile,
}

impl<A: DeviceApi> Sensor<A> {
    /// Creates a sensor for the given field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if the field is not in the profile
    /// table, or [`Error::NotApplicable`] if the configured model does not
    /// carry it.
    pub fn new(
        coordinator: PollCoordinator<A>,
        field: &str,
        model: DeviceModel,
    ) -> Result<Self> {
        let profile =
            profile::profile(field).ok_or_else(|| Error::UnknownField(field.to_string()))?;
        if !profile.applies_to(model) {
            return Err(Error::NotApplicable {
                field: field.to_string(),
                model,
            });
        }
        Ok(Self::from_profile(coordinator, profile))
    }

    pub(crate) fn from_profile(
        coordinator: PollCoordinator<A>,
        profile: &'static FieldProfile,
    ) -> Self {
        Self {
            coordinator,
            profile,
        }
    }

    /// Returns the field identifier.
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.profile.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.profile.label
    }

    /// Returns the stable entity identifier.
    #[must_use]
    pub fn unique_id(&self) -> String {
        format!("mypv_{}", self.profile.id)
    }

    /// Returns the measurement unit, if any.
    #[must_use]
    pub fn unit(&self) -> Option<Unit> {
        self.profile.unit
    }

    /// Returns the icon name, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&'static str> {
        self.profile.icon
    }

    /// Returns `true` if the last fetch succeeded and the field is present
    /// in the snapshot.
    #[must_use]
    pub fn available(&self) -> bool {
        self.coordinator.last_update_success()
            && self
                .coordinator
                .snapshot()
                .is_some_and(|s| s.contains(self.profile.id))
    }

    /// Returns the cached value of the field.
    ///
    /// This reads whatever snapshot is currently published, even when the
    /// last fetch failed; callers gate on [`Sensor::available`] for display.
    #[must_use]
    pub fn value(&self) -> Option<FieldValue> {
        self.coordinator
            .snapshot()
            .and_then(|s| s.get(self.profile.id).cloned())
    }

    /// Returns the polled device's identity, once known.
    #[must_use]
    pub fn device_info(&self) -> Option<DeviceInfo> {
        self.coordinator.snapshot().and_then(|s| s.device_info())
    }
}
