//! Entity descriptors
//!
//! One [`EntityDescription`] per managed MQTT topic: display metadata, the
//! decode rule for inbound state, and — through the [`EntityKind`]
//! discriminant — the kind-specific write configuration for commands.
//! Descriptors are plain static data; the tables in [`crate::tables`] build
//! them with the `const fn` constructors below and never mutate them
//! afterwards.

use aquamon_core::DeviceType;
use serde::{Deserialize, Serialize};

use crate::transform::{DecodeRule, EncodeRule};

/// UI grouping hint for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Config,
    Diagnostic,
}

/// Measurement class hint, mirroring the host platform's sensor classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Temperature,
    Power,
    Duration,
    Frequency,
    Current,
    Voltage,
    /// Binary: device is actively running
    Running,
    /// Binary: a heating element is active
    Heat,
}

/// Statistics class hint for numeric sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    Measurement,
    TotalIncreasing,
}

/// Cross-cutting side effect fired after a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnReceive {
    /// Record the resolved model name on the owning device's registry entry
    UpdateDeviceModel,
}

/// Kind discriminant plus the kind-specific write configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    Sensor,
    BinarySensor,
    Switch {
        command_topic: &'static str,
        payload_on: &'static str,
        payload_off: &'static str,
    },
    Select {
        command_topic: &'static str,
        options: &'static [&'static str],
        encode: EncodeRule,
    },
    Number {
        command_topic: &'static str,
        min: f64,
        max: f64,
        encode: EncodeRule,
    },
}

/// Static description of one managed MQTT topic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityDescription {
    /// Unique key into the topic registry
    pub topic_id: &'static str,
    /// Namespaced path under which the host stores derived state
    pub state_key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Physical device the reading belongs to
    pub device: DeviceType,
    pub category: Option<EntityCategory>,
    pub device_class: Option<DeviceClass>,
    pub state_class: Option<StateClass>,
    pub unit: Option<&'static str>,
    /// How to interpret inbound payloads
    pub decode: DecodeRule,
    /// Optional side effect fired after a successful decode
    pub on_receive: Option<OnReceive>,
    pub kind: EntityKind,
}

impl EntityDescription {
    const fn base(
        topic_id: &'static str,
        state_key: &'static str,
        name: &'static str,
        decode: DecodeRule,
        kind: EntityKind,
    ) -> Self {
        Self {
            topic_id,
            state_key,
            name,
            device: DeviceType::HeatPump,
            category: None,
            device_class: None,
            state_class: None,
            unit: None,
            decode,
            on_receive: None,
            kind,
        }
    }

    /// Read-only sensor; decode defaults to raw text.
    pub const fn sensor(
        topic_id: &'static str,
        state_key: &'static str,
        name: &'static str,
    ) -> Self {
        Self::base(topic_id, state_key, name, DecodeRule::Text, EntityKind::Sensor)
    }

    /// Binary sensor over a `"1"`/`"0"` bit flag.
    pub const fn binary_sensor(
        topic_id: &'static str,
        state_key: &'static str,
        name: &'static str,
    ) -> Self {
        Self::base(
            topic_id,
            state_key,
            name,
            DecodeRule::BitToBool,
            EntityKind::BinarySensor,
        )
    }

    /// Writable on/off switch publishing `"1"`/`"0"`.
    pub const fn switch(
        topic_id: &'static str,
        state_key: &'static str,
        name: &'static str,
        command_topic: &'static str,
    ) -> Self {
        Self::base(
            topic_id,
            state_key,
            name,
            DecodeRule::BitToBool,
            EntityKind::Switch {
                command_topic,
                payload_on: "1",
                payload_off: "0",
            },
        )
    }

    /// Writable select over a fixed option list.
    pub const fn select(
        topic_id: &'static str,
        state_key: &'static str,
        name: &'static str,
        command_topic: &'static str,
        options: &'static [&'static str],
        decode: DecodeRule,
        encode: EncodeRule,
    ) -> Self {
        Self::base(
            topic_id,
            state_key,
            name,
            decode,
            EntityKind::Select {
                command_topic,
                options,
                encode,
            },
        )
    }

    /// Writable bounded number.
    pub const fn number(
        topic_id: &'static str,
        state_key: &'static str,
        name: &'static str,
        command_topic: &'static str,
        min: f64,
        max: f64,
    ) -> Self {
        Self::base(
            topic_id,
            state_key,
            name,
            DecodeRule::Integer,
            EntityKind::Number {
                command_topic,
                min,
                max,
                encode: EncodeRule::Integer,
            },
        )
    }

    pub const fn with_decode(mut self, decode: DecodeRule) -> Self {
        self.decode = decode;
        self
    }

    pub const fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    pub const fn with_device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = Some(device_class);
        self
    }

    pub const fn with_state_class(mut self, state_class: StateClass) -> Self {
        self.state_class = Some(state_class);
        self
    }

    pub const fn with_category(mut self, category: EntityCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub const fn with_on_receive(mut self, hook: OnReceive) -> Self {
        self.on_receive = Some(hook);
        self
    }

    /// Attribute the reading to the HeishaMon bridge board.
    pub const fn on_heishamon(mut self) -> Self {
        self.device = DeviceType::HeishaMon;
        self
    }

    /// Whether this entity accepts commands.
    pub fn is_writable(&self) -> bool {
        !matches!(self.kind, EntityKind::Sensor | EntityKind::BinarySensor)
    }

    /// Command topic for writable entities.
    pub fn command_topic(&self) -> Option<&'static str> {
        match self.kind {
            EntityKind::Switch { command_topic, .. }
            | EntityKind::Select { command_topic, .. }
            | EntityKind::Number { command_topic, .. } => Some(command_topic),
            EntityKind::Sensor | EntityKind::BinarySensor => None,
        }
    }
}
