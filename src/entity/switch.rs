// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Writable switch adapter over a setup field.

use crate::coordinator::PollCoordinator;
use crate::error::{Error, Result};
use crate::profile::{self, DeviceModel, FieldProfile};
use crate::protocol::DeviceApi;
use crate::snapshot::DeviceInfo;

/// On/off control over one setup field.
///
/// A switch reads its state from the coordinator's snapshot like a
/// [`Sensor`](crate::entity::Sensor), and toggles it by writing the field's
/// on-value (or `0`) to the device. Writes are confirmed by the device's
/// response and patched into the snapshot immediately, without waiting for
/// the next poll.
///
/// # Examples
///
/// ```no_run
/// use mypv_lib::entity::Switch;
/// use mypv_lib::profile::DeviceModel;
/// use mypv_lib::protocol::HttpConfig;
/// use mypv_lib::PollCoordinator;
///
/// # async fn example() -> mypv_lib::Result<()> {
/// let coordinator = PollCoordinator::http(HttpConfig::new("192.168.1.50"))?;
/// let device_mode = Switch::new(coordinator.clone(), "devmode", DeviceModel::AcElwaE)?;
///
/// coordinator.refresh().await;
/// if device_mode.is_on() == Some(false) {
///     device_mode.turn_on().await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Switch<A: DeviceApi> {
    coordinator: PollCoordinator<A>,
    profile: &'static FieldProfile,
    on_value: i64,
}

impl<A: DeviceApi> Switch<A> {
    /// Creates a switch for the given setup field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if the field is not in the profile
    /// table, [`Error::NotASwitch`] if it is not a writable switch field,
    /// or [`Error::NotApplicable`] if the configured model does not carry
    /// it.
    pub fn new(
        coordinator: PollCoordinator<A>,
        field: &str,
        model: DeviceModel,
    ) -> Result<Self> {
        let profile =
            profile::profile(field).ok_or_else(|| Error::UnknownField(field.to_string()))?;
        if !profile::is_switch(profile.id) {
            return Err(Error::NotASwitch(field.to_string()));
        }
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
            on_value: profile.on_value(),
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
        format!("mypv_{}_sw", self.profile.id)
    }

    /// Returns the icon name, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&'static str> {
        self.profile.icon
    }

    /// Returns the value this switch writes when turned on.
    #[must_use]
    pub fn on_value(&self) -> i64 {
        self.on_value
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

    /// Returns whether the switch is on, or `None` if the field has not
    /// been observed yet.
    ///
    /// The cached value counts as on only when it equals the field's
    /// on-value; any other value reads as off.
    #[must_use]
    pub fn is_on(&self) -> Option<bool> {
        let snapshot = self.coordinator.snapshot()?;
        let value = snapshot.get(self.profile.id)?;
        Some(value.as_i64() == Some(self.on_value))
    }

    /// Turns the switch on by writing its on-value to the device.
    ///
    /// On success the confirmed value is patched into the snapshot so
    /// [`Switch::is_on`] reflects the change immediately. On failure the
    /// snapshot is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or the device's response does
    /// not confirm the field.
    pub async fn turn_on(&self) -> Result<()> {
        self.coordinator
            .write_setup(self.profile.id, self.on_value)
            .await
            .map(drop)
    }

    /// Turns the switch off by writing `0` to the device.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or the device's response does
    /// not confirm the field.
    pub async fn turn_off(&self) -> Result<()> {
        self.coordinator
            .write_setup(self.profile.id, 0)
            .await
            .map(drop)
    }

    /// Returns the polled device's identity, once known.
    #[must_use]
    pub fn device_info(&self) -> Option<DeviceInfo> {
        self.coordinator.snapshot().and_then(|s| s.device_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::FieldMap;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

    #[derive(Clone)]
    struct FakeDevice {
        devmode: Arc<AtomicI64>,
        bstmode: Arc<AtomicI64>,
        write_fails: Arc<AtomicBool>,
        writes: Arc<Mutex<Vec<(String, i64)>>>,
    }

    impl FakeDevice {
        fn new() -> Self {
            Self {
                devmode: Arc::new(AtomicI64::new(0)),
                bstmode: Arc::new(AtomicI64::new(0)),
                write_fails: Arc::new(AtomicBool::new(false)),
                writes: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl DeviceApi for FakeDevice {
        async fn fetch_data(&self) -> crate::Result<FieldMap> {
            Ok(json!({"device": "AC ELWA-E", "fwversion": "00205", "sn": "1"})
                .as_object()
                .unwrap()
                .clone())
        }

        async fn fetch_setup(&self) -> crate::Result<FieldMap> {
            Ok(json!({
                "devmode": self.devmode.load(Ordering::SeqCst),
                "bstmode": self.bstmode.load(Ordering::SeqCst),
            })
            .as_object()
            .unwrap()
            .clone())
        }

        async fn write_setup(&self, field: &str, value: i64) -> crate::Result<FieldMap> {
            if self.write_fails.load(Ordering::SeqCst) {
                return Err(crate::error::ProtocolError::ConnectionFailed(
                    "write refused".to_string(),
                )
                .into());
            }
            self.writes.lock().push((field.to_string(), value));
            match field {
                "devmode" => self.devmode.store(value, Ordering::SeqCst),
                "bstmode" => self.bstmode.store(value, Ordering::SeqCst),
                other => panic!("unexpected field {other}"),
            }
            Ok(json!({ field: value }).as_object().unwrap().clone())
        }
    }

    fn coordinator(device: FakeDevice) -> PollCoordinator<FakeDevice> {
        PollCoordinator::new(device, "192.0.2.20")
    }

    #[test]
    fn construction_validates_field() {
        let c = coordinator(FakeDevice::new());

        assert!(Switch::new(c.clone(), "devmode", DeviceModel::AcElwaE).is_ok());
        assert!(matches!(
            Switch::new(c.clone(), "nonsense", DeviceModel::AcElwaE),
            Err(Error::UnknownField(_))
        ));
        // "power" is a data field, not a switch.
        assert!(matches!(
            Switch::new(c.clone(), "power", DeviceModel::AcElwaE),
            Err(Error::NotASwitch(_))
        ));
        // The hot-water boost switch only exists on the AC ELWA-E.
        assert!(matches!(
            Switch::new(c, "bstmode", DeviceModel::AcThor),
            Err(Error::NotApplicable { .. })
        ));
    }

    #[test]
    fn unique_id_carries_the_switch_suffix() {
        let c = coordinator(FakeDevice::new());
        let switch = Switch::new(c, "devmode", DeviceModel::AcElwaE).unwrap();
        assert_eq!(switch.unique_id(), "mypv_devmode_sw");
    }

    #[test]
    fn on_values_per_field() {
        let c = coordinator(FakeDevice::new());
        let devmode = Switch::new(c.clone(), "devmode", DeviceModel::AcElwaE).unwrap();
        let bstmode = Switch::new(c, "bstmode", DeviceModel::AcElwaE).unwrap();

        assert_eq!(devmode.on_value(), 1);
        assert_eq!(bstmode.on_value(), 2);
    }

    #[tokio::test]
    async fn is_on_compares_against_the_on_value() {
        let device = FakeDevice::new();
        let c = coordinator(device.clone());
        let bstmode = Switch::new(c.clone(), "bstmode", DeviceModel::AcElwaE).unwrap();

        assert_eq!(bstmode.is_on(), None);

        for (raw, expected) in [(0, false), (1, false), (2, true)] {
            device.bstmode.store(raw, Ordering::SeqCst);
            c.refresh().await;
            assert_eq!(bstmode.is_on(), Some(expected), "bstmode = {raw}");
        }
    }

    #[tokio::test]
    async fn turn_on_patches_the_snapshot_immediately() {
        let device = FakeDevice::new();
        let c = coordinator(device.clone());
        let switch = Switch::new(c.clone(), "devmode", DeviceModel::AcElwaE).unwrap();

        c.refresh().await;
        assert_eq!(switch.is_on(), Some(false));

        switch.turn_on().await.unwrap();
        // Confirmed state is visible without another poll.
        assert_eq!(switch.is_on(), Some(true));
        assert_eq!(*device.writes.lock(), vec![("devmode".to_string(), 1)]);

        switch.turn_off().await.unwrap();
        assert_eq!(switch.is_on(), Some(false));
    }

    #[tokio::test]
    async fn failed_write_leaves_state_untouched() {
        let device = FakeDevice::new();
        let c = coordinator(device.clone());
        let switch = Switch::new(c.clone(), "devmode", DeviceModel::AcElwaE).unwrap();

        c.refresh().await;
        device.write_fails.store(true, Ordering::SeqCst);

        assert!(switch.turn_on().await.is_err());
        assert_eq!(switch.is_on(), Some(false));
        assert!(c.last_update_success());
    }

    #[tokio::test]
    async fn availability_tracks_the_snapshot() {
        let device = FakeDevice::new();
        let c = coordinator(device.clone());
        let switch = Switch::new(c.clone(), "devmode", DeviceModel::AcElwaE).unwrap();

        assert!(!switch.available());
        c.refresh().await;
        assert!(switch.available());
    }
}
