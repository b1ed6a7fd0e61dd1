// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity adapters over the coordinator's snapshot.
//!
//! A [`Sensor`] is a read-only view of one field; a [`Switch`] additionally
//! writes its setup field on the device. Adapters hold a coordinator handle
//! and render whatever snapshot is currently published; they never cache
//! values of their own.
//!
//! Which fields exist on a device depends on its model. The helpers
//! [`sensors_for_model`] and [`switches_for_model`] build every adapter the
//! profile table lists for a model; constructing an adapter for a field the
//! model does not carry fails with [`Error::NotApplicable`].
//!
//! [`Error::NotApplicable`]: crate::Error::NotApplicable

mod sensor;
mod switch;

pub use sensor::Sensor;
pub use switch::Switch;

use crate::coordinator::PollCoordinator;
use crate::profile::{self, DeviceModel};
use crate::protocol::DeviceApi;

/// Builds a sensor adapter for every readable field of the given model.
///
/// Switch fields are excluded; use [`switches_for_model`] for those.
#[must_use]
pub fn sensors_for_model<A: DeviceApi>(
    coordinator: &PollCoordinator<A>,
    model: DeviceModel,
) -> Vec<Sensor<A>> {
    profile::profiles_for(model)
        .filter(|p| !profile::is_switch(p.id))
        .map(|p| Sensor::from_profile(coordinator.clone(), p))
        .collect()
}

/// Builds a switch adapter for every writable field of the given model.
#[must_use]
pub fn switches_for_model<A: DeviceApi>(
    coordinator: &PollCoordinator<A>,
    model: DeviceModel,
) -> Vec<Switch<A>> {
    profile::profiles_for(model)
        .filter(|p| profile::is_switch(p.id))
        .map(|p| Switch::from_profile(coordinator.clone(), p))
        .collect()
}
