//! Device model and host-facing capabilities
//!
//! Two physical devices publish on the topic set: the heat pump itself and
//! the HeishaMon bridge board that translates its serial bus to MQTT. Each
//! descriptor declares which of the two a reading belongs to.
//!
//! The host platform is reached through two narrow traits instead of a
//! framework import: [`DeviceModelRegistry`] for recording detected
//! hardware models against a device record, and [`CommandPublisher`] for
//! handing outbound topic/payload pairs to the transport.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::error::MappingResult;

/// Which physical device a reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// The Panasonic Aquarea heat pump (main unit)
    HeatPump,
    /// The HeishaMon bridge board itself
    HeishaMon,
}

impl DeviceType {
    /// Stable slug used to build device registry identifiers.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::HeatPump => "heatpump",
            Self::HeishaMon => "heishamon",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Identifier tuple under which the host registers a device record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceIdentifiers {
    /// Host configuration entry owning the device
    pub config_entry_id: String,
    /// Stable per-device slug within that entry
    pub device_slug: String,
}

impl DeviceIdentifiers {
    pub fn new(config_entry_id: impl Into<String>, device: DeviceType) -> Self {
        Self {
            config_entry_id: config_entry_id.into(),
            device_slug: device.slug().to_string(),
        }
    }
}

/// Host capability: record a detected hardware model against a device.
///
/// Implementations must be idempotent — the transport delivers at least
/// once, so the same decoded model arrives repeatedly.
pub trait DeviceModelRegistry: Send + Sync {
    fn upsert_model(&self, identifiers: &DeviceIdentifiers, model: &str);
}

/// Host capability: publish an outbound command payload.
///
/// The mapping layer only produces the topic/payload pair; delivery is the
/// host's concern.
pub trait CommandPublisher: Send + Sync {
    fn publish(&self, topic: &str, payload: &str) -> MappingResult<()>;
}

/// One registered device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub identifiers: DeviceIdentifiers,
    pub model: String,
    pub updated_at: DateTime<Utc>,
}

/// In-memory [`DeviceModelRegistry`] used by hosts without their own
/// registry and by tests.
#[derive(Debug, Default)]
pub struct InMemoryDeviceRegistry {
    records: DashMap<DeviceIdentifiers, DeviceRecord>,
}

impl InMemoryDeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn model_of(&self, identifiers: &DeviceIdentifiers) -> Option<String> {
        self.records.get(identifiers).map(|r| r.model.clone())
    }
}

impl DeviceModelRegistry for InMemoryDeviceRegistry {
    fn upsert_model(&self, identifiers: &DeviceIdentifiers, model: &str) {
        if let Some(existing) = self.records.get(identifiers) {
            if existing.model == model {
                return;
            }
        }
        tracing::debug!(device = %identifiers.device_slug, model, "recording device model");
        self.records.insert(
            identifiers.clone(),
            DeviceRecord {
                identifiers: identifiers.clone(),
                model: model.to_string(),
                updated_at: Utc::now(),
            },
        );
    }
}
