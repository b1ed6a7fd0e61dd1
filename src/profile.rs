// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static device profile table for my-PV devices.
//!
//! Every field the local JSON API can report is described by a
//! [`FieldProfile`]: display label, unit, icon, the device models that carry
//! the field, and which endpoint (`data.jsn` or `setup.jsn`) serves it.
//!
//! The table is process-wide static data. Entity adapters filter it by the
//! configured [`DeviceModel`] at construction time; there is no per-model
//! dispatch at read time.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Which device endpoint serves a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Live values from `GET /data.jsn`.
    Data,
    /// Configuration values from `GET /setup.jsn`.
    Setup,
}

/// Measurement unit of a sensor field.
///
/// Display strings match the conventional unit symbols used by home
/// automation platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Power in Watts.
    Watt,
    /// Temperature in degrees Celsius.
    Celsius,
    /// Electric potential in Volts.
    Volt,
    /// Electric current in Amperes.
    Ampere,
    /// Frequency in Hertz.
    Hertz,
    /// Percentage.
    Percent,
    /// Duration in days.
    Days,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Watt => "W",
            Self::Celsius => "°C",
            Self::Volt => "V",
            Self::Ampere => "A",
            Self::Hertz => "Hz",
            Self::Percent => "%",
            Self::Days => "d",
        };
        f.write_str(symbol)
    }
}

/// The my-PV device model family.
///
/// The device reports its model as a product name string in the `device`
/// info field; the profile table references models by these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceModel {
    /// AC ELWA-E immersion heater.
    AcElwaE,
    /// AC-THOR power controller.
    AcThor,
    /// AC-THOR 9s three-phase power controller.
    AcThor9s,
    /// AC ELWA 2 immersion heater.
    AcElwa2,
    /// DC ELWA immersion heater.
    DcElwa,
    /// Wi-Fi Meter.
    WifiMeter,
    /// Solthor DC controller.
    Solthor,
    /// heathorIoT 9 heating element.
    HeathorIot9,
    /// heathorIoT 35 heating element.
    HeathorIot35,
    /// AC-THOR32 power controller.
    AcThor32,
    /// AC-THOR32 9s three-phase power controller.
    AcThor329s,
}

impl DeviceModel {
    /// All known models.
    pub const ALL: &'static [Self] = &[
        Self::AcElwaE,
        Self::AcThor,
        Self::AcThor9s,
        Self::AcElwa2,
        Self::DcElwa,
        Self::WifiMeter,
        Self::Solthor,
        Self::HeathorIot9,
        Self::HeathorIot35,
        Self::AcThor32,
        Self::AcThor329s,
    ];

    /// Returns the product name as reported by the device.
    #[must_use]
    pub fn product_name(&self) -> &'static str {
        match self {
            Self::AcElwaE => "AC ELWA-E",
            Self::AcThor => "AC-THOR",
            Self::AcThor9s => "AC-THOR 9s",
            Self::AcElwa2 => "AC ELWA 2",
            Self::DcElwa => "dc_elwa",
            Self::WifiMeter => "Wi-Fi Meter",
            Self::Solthor => "Solthor",
            Self::HeathorIot9 => "heathorIoT 9",
            Self::HeathorIot35 => "heathorIoT 35",
            Self::AcThor32 => "AC-THOR32",
            Self::AcThor329s => "AC-THOR32 9s",
        }
    }

    /// Returns the short identifier used internally by the firmware.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::AcElwaE => "elwa",
            Self::AcThor => "acthor",
            Self::AcThor9s => "acthor9s",
            Self::AcElwa2 => "elwa2",
            Self::DcElwa => "dc_elwa",
            Self::WifiMeter => "meter",
            Self::Solthor => "solthor",
            Self::HeathorIot9 => "heathorIot9",
            Self::HeathorIot35 => "heathorIot35",
            Self::AcThor32 => "acthor32",
            Self::AcThor329s => "acthor329s",
        }
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.product_name())
    }
}

impl FromStr for DeviceModel {
    type Err = ParseError;

    /// Parses either the product name or the short firmware identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|m| m.product_name() == s || m.short_name() == s)
            .copied()
            .ok_or_else(|| ParseError::UnexpectedFormat(format!("unknown device model: {s}")))
    }
}

/// Static display metadata for one field of the device API.
#[derive(Debug, Clone, Copy)]
pub struct FieldProfile {
    /// Field identifier, as used in the JSON payloads.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Measurement unit, if the field is a measurement.
    pub unit: Option<Unit>,
    /// Material Design icon name, if any.
    pub icon: Option<&'static str>,
    /// Models carrying this field. Empty means every model.
    pub models: &'static [DeviceModel],
    /// Endpoint serving this field.
    pub section: Section,
}

impl FieldProfile {
    const fn data(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            unit: None,
            icon: None,
            models: &[],
            section: Section::Data,
        }
    }

    const fn setup(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            unit: None,
            icon: None,
            models: &[],
            section: Section::Setup,
        }
    }

    const fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    const fn models(mut self, models: &'static [DeviceModel]) -> Self {
        self.models = models;
        self
    }

    /// Returns `true` if this field exists on the given model.
    ///
    /// An empty model list means the field is common to all models.
    #[must_use]
    pub fn applies_to(&self, model: DeviceModel) -> bool {
        self.models.is_empty() || self.models.contains(&model)
    }

    /// Returns the value representing "on" for a switch field.
    ///
    /// The ELWA firmware reports an active hot water boost as 2, every other
    /// switch field uses 1.
    #[must_use]
    pub fn on_value(&self) -> i64 {
        if self.id == "bstmode" { 2 } else { 1 }
    }
}

/// The writable setup fields exposed as switches.
pub const SWITCH_FIELDS: &[&str] = &["devmode", "bstmode", "legmode", "cloudmode"];

/// Returns `true` if the field is one of the writable switch fields.
#[must_use]
pub fn is_switch(field: &str) -> bool {
    SWITCH_FIELDS.contains(&field)
}

/// Looks up the profile for a field identifier.
#[must_use]
pub fn profile(field: &str) -> Option<&'static FieldProfile> {
    FIELD_PROFILES.iter().find(|p| p.id == field)
}

/// Returns every profile that applies to the given model.
pub fn profiles_for(model: DeviceModel) -> impl Iterator<Item = &'static FieldProfile> {
    FIELD_PROFILES.iter().filter(move |p| p.applies_to(model))
}

use DeviceModel::{
    AcElwa2, AcElwaE, AcThor, AcThor9s, AcThor32, AcThor329s, DcElwa, HeathorIot9, HeathorIot35,
    Solthor,
};

const ACTHORS: &[DeviceModel] = &[AcThor, AcThor9s, AcThor32, AcThor329s];
const ACTHORS_ELWA2: &[DeviceModel] = &[AcThor, AcThor9s, AcThor32, AcThor329s, AcElwa2];
const STATUS_MODELS: &[DeviceModel] = &[
    AcElwaE, AcThor, AcThor9s, AcThor32, AcThor329s, AcElwa2, Solthor, HeathorIot9, HeathorIot35,
];
const POWER_SPLIT: &[DeviceModel] = &[AcThor, AcThor9s, AcThor32, AcThor329s, AcElwa2, Solthor];
const POWER_STAGE: &[DeviceModel] = &[
    AcThor, AcThor9s, AcThor32, AcThor329s, AcElwa2, Solthor, HeathorIot35, HeathorIot9,
];
const HEATERS: &[DeviceModel] = &[
    AcThor, AcThor9s, AcThor32, AcThor329s, AcElwaE, AcElwa2, DcElwa, Solthor, HeathorIot35,
    HeathorIot9,
];
const HEATHORS: &[DeviceModel] = &[HeathorIot35, HeathorIot9];
const METER_HOSTS: &[DeviceModel] = &[AcElwaE, AcThor, AcThor9s, AcElwa2];

/// The complete field profile table.
pub const FIELD_PROFILES: &[FieldProfile] = &[
    FieldProfile::data("device", "Device").models(&[AcElwaE]),
    FieldProfile::data("acthor9s", "Acthor 9s"),
    FieldProfile::data("fwversion", "Firmware Version")
        .icon("mdi:numeric")
        .models(&[AcElwaE]),
    FieldProfile::data("psversion", "Power Supply Version").icon("mdi:numeric"),
    FieldProfile::data("p9sversion", "Power Supply Version Acthor 9").icon("mdi:numeric"),
    FieldProfile::data("screen_mode_flag", "Screen Mode"),
    FieldProfile::data("status", "Status ID").models(STATUS_MODELS),
    FieldProfile::data("power", "Aktueller Verbrauch")
        .unit(Unit::Watt)
        .icon("mdi:lightning-bolt")
        .models(&[AcElwaE, Solthor]),
    FieldProfile::data("power_act", "Power AC-Thor")
        .unit(Unit::Watt)
        .icon("mdi:lightning-bolt")
        .models(&[AcThor]),
    FieldProfile::data("power_ac9", "Power Acthor 9")
        .unit(Unit::Watt)
        .icon("mdi:lightning-bolt")
        .models(&[AcThor9s]),
    FieldProfile::data("power_elwa2", "Power ELWA 2")
        .unit(Unit::Watt)
        .icon("mdi:lightning-bolt")
        .models(&[AcElwa2]),
    FieldProfile::data("boostpower", "Warmwassersicherstellung")
        .unit(Unit::Watt)
        .icon("mdi:thermometer-lines")
        .models(&[AcElwaE, DcElwa]),
    FieldProfile::data("power_solar", "Solaranteil")
        .unit(Unit::Watt)
        .icon("mdi:solar-power-variant")
        .models(POWER_SPLIT),
    FieldProfile::data("power_grid", "Netzanteil")
        .unit(Unit::Watt)
        .icon("mdi:solar-power-variant")
        .models(POWER_STAGE),
    FieldProfile::data("power_L1", "Leistung L1")
        .unit(Unit::Watt)
        .models(HEATHORS),
    FieldProfile::data("power_L2", "Leistung L2")
        .unit(Unit::Watt)
        .models(&[HeathorIot9]),
    FieldProfile::data("power_L3", "Leistung L3")
        .unit(Unit::Watt)
        .models(&[HeathorIot9]),
    FieldProfile::data("power_solar_act", "Power from solar")
        .unit(Unit::Watt)
        .icon("mdi:solar-power-variant"),
    FieldProfile::data("power_grid_act", "Power from grid")
        .unit(Unit::Watt)
        .icon("mdi:transmission-tower-export"),
    FieldProfile::data("power_solar_ac9", "Power from solar Acthor 9")
        .unit(Unit::Watt)
        .icon("mdi:solar-power-variant"),
    FieldProfile::data("power_grid_ac9", "Power from grid Acthor 9")
        .unit(Unit::Watt)
        .icon("mdi:transmission-tower-export"),
    FieldProfile::data("power1_solar", "power1_solar")
        .unit(Unit::Watt)
        .icon("mdi:solar-power-variant")
        .models(ACTHORS_ELWA2),
    FieldProfile::data("power1_grid", "power1_grid")
        .unit(Unit::Watt)
        .icon("mdi:transmission-tower-export")
        .models(ACTHORS_ELWA2),
    FieldProfile::data("power2_solar", "power2_solar")
        .unit(Unit::Watt)
        .icon("mdi:solar-power-variant")
        .models(ACTHORS_ELWA2),
    FieldProfile::data("power2_grid", "power2_grid")
        .unit(Unit::Watt)
        .icon("mdi:transmission-tower-export")
        .models(ACTHORS_ELWA2),
    FieldProfile::data("power3_solar", "power3_solar")
        .unit(Unit::Watt)
        .icon("mdi:solar-power-variant")
        .models(&[AcThor9s]),
    FieldProfile::data("power3_grid", "power3_grid")
        .unit(Unit::Watt)
        .icon("mdi:transmission-tower-export")
        .models(&[AcThor9s]),
    FieldProfile::data("load_state", "load_state").models(ACTHORS),
    FieldProfile::data("load_nom", "load_nom")
        .unit(Unit::Watt)
        .models(ACTHORS),
    FieldProfile::data("rel1_out", "rel1_out")
        .icon("mdi:electric-switch")
        .models(ACTHORS_ELWA2),
    FieldProfile::data("rel_selv", "SELV Relais Status").models(&[
        AcElwa2,
        HeathorIot35,
        HeathorIot9,
    ]),
    FieldProfile::data("ww1target", "Zieltemperatur")
        .unit(Unit::Celsius)
        .icon("mdi:thermometer-auto")
        .models(&[AcElwaE]),
    FieldProfile::data("temp1", "Wassertemperatur")
        .unit(Unit::Celsius)
        .icon("mdi:thermometer-water")
        .models(HEATERS),
    FieldProfile::data("temp2", "Temperatur 2")
        .unit(Unit::Celsius)
        .icon("mdi:thermometer")
        .models(POWER_STAGE),
    FieldProfile::data("temp3", "Temperatur 3")
        .unit(Unit::Celsius)
        .icon("mdi:thermometer")
        .models(&[AcThor, AcThor9s, AcThor32, AcThor329s, Solthor]),
    FieldProfile::data("temp4", "Temperatur 4")
        .unit(Unit::Celsius)
        .icon("mdi:thermometer")
        .models(ACTHORS),
    FieldProfile::data("boostactive", "Boost aktiv")
        .icon("mdi:thermometer-chevron-up")
        .models(HEATERS),
    FieldProfile::data("legboostnext", "Nächster Legionellen Boost")
        .unit(Unit::Days)
        .icon("mdi:bacteria")
        .models(&[
            AcElwaE,
            AcThor,
            AcThor9s,
            AcThor32,
            AcThor329s,
            AcElwa2,
            HeathorIot35,
            HeathorIot9,
        ]),
    FieldProfile::data("date", "Date").icon("mdi:calendar-today"),
    FieldProfile::data("loctime", "Lokale Uhrzeit")
        .icon("mdi:home-clock")
        .models(&[AcElwaE]),
    FieldProfile::data("unixtime", "Unix time")
        .icon("mdi:web-clock")
        .models(&[AcElwaE]),
    FieldProfile::data("wp_flag", "wp_flag"),
    FieldProfile::data("wp_time1_ctr", "wp_time1_ctr"),
    FieldProfile::data("wp_time2_ctr", "wp_time2_ctr"),
    FieldProfile::data("wp_time3_ctr", "wp_time3_ctr"),
    FieldProfile::data("pump_pwm", "Pump PWM")
        .icon("mdi:pump")
        .models(ACTHORS),
    FieldProfile::data("schicht_flag", "Schicht"),
    FieldProfile::data("act_night_flag", "Night flag"),
    FieldProfile::data("ctrlstate", "Status Ansteuerung").models(&[
        AcElwaE, AcThor, AcThor9s, AcThor32, AcThor329s, AcElwa2,
    ]),
    FieldProfile::data("blockactive", "Block active").models(&[
        AcThor, AcThor9s, AcThor32, AcThor329s, AcElwaE, AcElwa2, DcElwa,
    ]),
    FieldProfile::data("error_state", "Error state").icon("mdi:alert-circle"),
    FieldProfile::data("meter1_id", "my-PV Meter 1 ID")
        .icon("mdi:identifier")
        .models(&[AcElwaE]),
    FieldProfile::data("meter1_ip", "my-PV Meter 1 IP")
        .icon("mdi:ip-network")
        .models(&[AcElwaE]),
    FieldProfile::data("meter2_id", "my-PV Meter 2 ID")
        .icon("mdi:identifier")
        .models(&[AcElwaE]),
    FieldProfile::data("meter2_ip", "my-PV Meter 2 IP")
        .icon("mdi:ip-network")
        .models(&[AcElwaE]),
    FieldProfile::data("meter3_id", "my-PV Meter 3 ID")
        .icon("mdi:identifier")
        .models(&[AcElwaE]),
    FieldProfile::data("meter3_ip", "my-PV Meter 3 IP")
        .icon("mdi:ip-network")
        .models(&[AcElwaE]),
    FieldProfile::data("meter4_id", "my-PV Meter 4 ID")
        .icon("mdi:identifier")
        .models(&[AcElwaE]),
    FieldProfile::data("meter4_ip", "my-PV Meter 4 IP")
        .icon("mdi:ip-network")
        .models(&[AcElwaE]),
    FieldProfile::data("meter5_id", "my-PV Meter 5 ID")
        .icon("mdi:identifier")
        .models(&[AcElwaE]),
    FieldProfile::data("meter5_ip", "my-PV Meter 5 IP")
        .icon("mdi:ip-network")
        .models(&[AcElwaE]),
    FieldProfile::data("meter6_id", "my-PV Meter 6 ID")
        .icon("mdi:identifier")
        .models(&[AcElwaE]),
    FieldProfile::data("meter6_ip", "my-PV Meter 6 IP")
        .icon("mdi:ip-network")
        .models(&[AcElwaE]),
    FieldProfile::data("meter_ss", "WiFi Meter Signalstärke")
        .unit(Unit::Percent)
        .icon("mdi:wifi")
        .models(METER_HOSTS),
    FieldProfile::data("meter_ssid", "WiFi Meter SSID")
        .icon("mdi:wifi-marker")
        .models(METER_HOSTS),
    FieldProfile::data("surplus", "Meter + Batterieladeleistung")
        .unit(Unit::Watt)
        .icon("mdi:lightning-bolt")
        .models(&[AcElwaE]),
    FieldProfile::data("m0sum", "Hausanschluss")
        .unit(Unit::Watt)
        .icon("mdi:transmission-tower")
        .models(&[AcElwaE]),
    FieldProfile::data("m0l1", "Hausanschluss L1")
        .unit(Unit::Watt)
        .icon("mdi:transmission-tower")
        .models(&[AcElwaE]),
    FieldProfile::data("m0l2", "Hausanschluss L2")
        .unit(Unit::Watt)
        .icon("mdi:transmission-tower")
        .models(&[AcElwaE]),
    FieldProfile::data("m0l3", "Hausanschluss L3")
        .unit(Unit::Watt)
        .icon("mdi:transmission-tower")
        .models(&[AcElwaE]),
    FieldProfile::data("m0bat", "Batteriespeicher")
        .unit(Unit::Watt)
        .icon("mdi:transmission-tower")
        .models(&[AcElwaE]),
    FieldProfile::data("m1sum", "PV Leistung")
        .unit(Unit::Watt)
        .icon("mdi:solar-power")
        .models(&[AcElwaE]),
    FieldProfile::data("m1l1", "PV Leistung L1")
        .unit(Unit::Watt)
        .icon("mdi:solar-power")
        .models(&[AcElwaE]),
    FieldProfile::data("m1l2", "PV Leistung L2")
        .unit(Unit::Watt)
        .icon("mdi:solar-power")
        .models(&[AcElwaE]),
    FieldProfile::data("m1l3", "PV Leistung L3")
        .unit(Unit::Watt)
        .icon("mdi:solar-power")
        .models(&[AcElwaE]),
    FieldProfile::data("m1devstate", "PV Kommunikationsstatus")
        .icon("mdi:link")
        .models(&[AcElwaE]),
    FieldProfile::data("m2sum", "Batterie Leistung")
        .unit(Unit::Watt)
        .icon("mdi:home-battery")
        .models(&[AcElwaE]),
    FieldProfile::data("m2l1", "Batterie Leistung L1")
        .unit(Unit::Watt)
        .icon("mdi:home-battery")
        .models(&[AcElwaE]),
    FieldProfile::data("m2l2", "Batterie Leistung L2")
        .unit(Unit::Watt)
        .icon("mdi:home-battery")
        .models(&[AcElwaE]),
    FieldProfile::data("m2l3", "Batterie Leistung L3")
        .unit(Unit::Watt)
        .icon("mdi:home-battery")
        .models(&[AcElwaE]),
    FieldProfile::data("m2soc", "Batterie SoC")
        .unit(Unit::Percent)
        .icon("mdi:battery-charging-50")
        .models(&[AcElwaE]),
    FieldProfile::data("m2state", "Batterie Status")
        .icon("mdi:battery-heart-variant")
        .models(&[AcElwaE]),
    FieldProfile::data("m2devstate", "Batterie Kommunikationsstatus").icon("mdi:link"),
    FieldProfile::data("m3sum", "Ladestation Leistung")
        .unit(Unit::Watt)
        .icon("mdi:ev-station")
        .models(&[AcElwaE]),
    FieldProfile::data("m3l1", "Ladestation L1")
        .unit(Unit::Watt)
        .icon("mdi:ev-station")
        .models(&[AcElwaE]),
    FieldProfile::data("m3l2", "Ladestation L2")
        .unit(Unit::Watt)
        .icon("mdi:ev-station")
        .models(&[AcElwaE]),
    FieldProfile::data("m3l3", "Ladestation L3")
        .unit(Unit::Watt)
        .icon("mdi:ev-station")
        .models(&[AcElwaE]),
    FieldProfile::data("m3soc", "Ladestation SoC")
        .unit(Unit::Percent)
        .icon("mdi:battery-charging-50")
        .models(&[AcElwaE]),
    FieldProfile::data("m3devstate", "Ladestation Kommunikationsstatus")
        .icon("mdi:link")
        .models(&[AcElwaE]),
    FieldProfile::data("m4sum", "Wärmepumpe Leistung")
        .unit(Unit::Watt)
        .icon("mdi:heat-pump")
        .models(&[AcElwaE]),
    FieldProfile::data("m4l1", "Wärmepumpe L1")
        .unit(Unit::Watt)
        .icon("mdi:heat-pump")
        .models(&[AcElwaE]),
    FieldProfile::data("m4l2", "Wärmepumpe L2")
        .unit(Unit::Watt)
        .icon("mdi:heat-pump")
        .models(&[AcElwaE]),
    FieldProfile::data("m4l3", "Wärmepumpe L3")
        .unit(Unit::Watt)
        .icon("mdi:heat-pump")
        .models(&[AcElwaE]),
    FieldProfile::data("m4devstate", "Wärmepumpe Kommunikationsstatus")
        .icon("mdi:link")
        .models(&[AcElwaE]),
    FieldProfile::data("ecarstate", "E-Auto Status")
        .icon("mdi:car-electric")
        .models(&[AcElwaE]),
    FieldProfile::data("ecarboostctr", "ecarboostctr").models(&[AcElwaE]),
    FieldProfile::data("mss2", "Sekundärregler 2 Status").models(ACTHORS_ELWA2),
    FieldProfile::data("mss3", "Sekundärregler 3 Status").models(ACTHORS_ELWA2),
    FieldProfile::data("mss4", "Sekundärregler 4 Status").models(ACTHORS_ELWA2),
    FieldProfile::data("mss5", "Sekundärregler 5 Status").models(ACTHORS_ELWA2),
    FieldProfile::data("mss6", "Sekundärregler 6 Status").models(ACTHORS_ELWA2),
    FieldProfile::data("mss7", "Sekundärregler 7 Status").models(ACTHORS_ELWA2),
    FieldProfile::data("mss8", "Sekundärregler 8 Status").models(ACTHORS_ELWA2),
    FieldProfile::data("mss9", "Sekundärregler 9 Status").models(ACTHORS_ELWA2),
    FieldProfile::data("mss10", "Sekundärregler 10 Status").models(ACTHORS_ELWA2),
    FieldProfile::data("mss11", "Sekundärregler 11 Status").models(ACTHORS_ELWA2),
    FieldProfile::data("tempchip", "tempchip")
        .unit(Unit::Celsius)
        .icon("mdi:chip")
        .models(&[AcElwaE]),
    FieldProfile::data("volt_mains", "Eingangsspannung Leistungsteil L1")
        .unit(Unit::Volt)
        .icon("mdi:flash-triangle")
        .models(POWER_SPLIT),
    FieldProfile::data("curr_mains", "Netzstrom L1")
        .unit(Unit::Ampere)
        .icon("mdi:current-ac")
        .models(&[AcThor, AcThor9s, AcThor32, AcThor329s, Solthor]),
    FieldProfile::data("volt_mains_L1", "Eingangsspannung Leistungsteil L1")
        .unit(Unit::Volt)
        .icon("mdi:flash-triangle")
        .models(POWER_SPLIT),
    FieldProfile::data("curr_L1", "Current L1")
        .unit(Unit::Ampere)
        .icon("mdi:current-ac")
        .models(HEATHORS),
    FieldProfile::data("volt_mains_L2", "Eingangsspannung Leistungsteil L2")
        .unit(Unit::Volt)
        .icon("mdi:flash-triangle")
        .models(&[HeathorIot9]),
    FieldProfile::data("volt_L2", "Eingangsspannung Leistungsteil L2")
        .unit(Unit::Volt)
        .icon("mdi:flash-triangle")
        .models(&[AcThor9s]),
    FieldProfile::data("curr_L2", "Current L2")
        .unit(Unit::Ampere)
        .icon("mdi:current-ac")
        .models(&[HeathorIot9, AcThor9s]),
    FieldProfile::data("volt_mains_L3", "Eingangsspannung Leistungsteil L3")
        .unit(Unit::Volt)
        .icon("mdi:flash-triangle")
        .models(&[HeathorIot9]),
    FieldProfile::data("volt_L3", "Eingangsspannung Leistungsteil L3")
        .unit(Unit::Volt)
        .icon("mdi:flash-triangle")
        .models(&[AcThor9s]),
    FieldProfile::data("curr_L3", "Current L3")
        .unit(Unit::Ampere)
        .icon("mdi:current-ac")
        .models(&[HeathorIot9, AcThor9s]),
    FieldProfile::data("volt_out", "Ausgangsspannung Leistungsteil")
        .unit(Unit::Volt)
        .icon("mdi:flash-triangle")
        .models(ACTHORS),
    FieldProfile::data("volt_aux", "Spannung L2 an AUX-Relais")
        .unit(Unit::Volt)
        .icon("mdi:flash-triangle")
        .models(&[AcElwa2]),
    FieldProfile::data("freq", "Netzfrequenz")
        .unit(Unit::Hertz)
        .icon("mdi:sine-wave")
        .models(POWER_STAGE),
    FieldProfile::data("temp_ps", "Temperatur Leistungsteil")
        .unit(Unit::Celsius)
        .icon("mdi:thermometer")
        .models(POWER_STAGE),
    FieldProfile::data("fan_speed", "Lüfterstufe")
        .icon("mdi:fan")
        .models(ACTHORS_ELWA2),
    FieldProfile::data("ps_state", "Status Leistungsteil").models(ACTHORS_ELWA2),
    FieldProfile::data("relay_boost", "Relais Boost").models(&[Solthor]),
    FieldProfile::data("relay_alarm", "Relais Alarm").models(&[Solthor]),
    FieldProfile::data("cur_ip", "Current IP")
        .icon("mdi:ip-network")
        .models(&[AcElwaE]),
    FieldProfile::data("cur_sn", "Current subnet mask")
        .icon("mdi:numeric")
        .models(&[AcElwaE]),
    FieldProfile::data("cur_gw", "Current gateway")
        .icon("mdi:router-network")
        .models(&[AcElwaE]),
    FieldProfile::data("cur_dns", "Current DNS")
        .icon("mdi:dns")
        .models(&[AcElwaE]),
    FieldProfile::data("fwversionlatest", "latest Firmware version").icon("mdi:numeric"),
    FieldProfile::data("psversionlatest", "latest Power supply version").icon("mdi:numeric"),
    FieldProfile::data("p9sversionlatest", "latest Power supply version Acthor 9")
        .icon("mdi:numeric"),
    FieldProfile::data("upd_state", "Update state").icon("mdi:update"),
    FieldProfile::data("upd_files_left", "Update files left").icon("mdi:update"),
    FieldProfile::data("ps_upd_state", "Power supply update state").icon("mdi:update"),
    FieldProfile::data("p9s_upd_state", "Acthor 9 Power supply update state").icon("mdi:update"),
    FieldProfile::data("cloudstate", "Cloud Status")
        .icon("mdi:cloud-check")
        .models(&[
            AcElwaE,
            AcThor,
            AcThor9s,
            AcElwa2,
            Solthor,
            HeathorIot35,
            HeathorIot9,
        ]),
    FieldProfile::data("debug_ip", "Debug IP")
        .icon("mdi:ip-network")
        .models(METER_HOSTS),
    FieldProfile::data("cur_eth_mode", "Ethernet-Modus").models(&[
        AcElwa2,
        Solthor,
        HeathorIot35,
        HeathorIot9,
    ]),
    // Writable setup fields, exposed as switches.
    FieldProfile::setup("devmode", "Device State")
        .icon("mdi:power")
        .models(&[AcElwaE]),
    FieldProfile::setup("bstmode", "Hot Water Boost Mode")
        .icon("mdi:thermometer-lines")
        .models(&[AcElwaE]),
    FieldProfile::setup("legmode", "Legionella Protection")
        .icon("mdi:bacteria-outline")
        .models(&[AcElwaE]),
    FieldProfile::setup("cloudmode", "Cloud Mode").models(&[AcElwaE]),
];
