//! Aquarea/HeishaMon entity mapping
//!
//! Declarative mapping between the HeishaMon bridge's MQTT topic set and
//! typed entities. The crate is two things:
//!
//! - **Descriptor tables** ([`tables`]): one static row per managed topic,
//!   binding a topic id to display metadata, a decode rule, and — for
//!   writable entities — a command topic with its encode rule and domain.
//! - **A small engine** ([`registry`]): topic-id lookup, decode dispatch
//!   with side-effect hooks, and guarded command encoding.
//!
//! Everything else (MQTT transport, entity state storage, the device
//! registry proper) belongs to the host platform, reached through the
//! narrow traits in `aquamon-core`.

pub mod description;
pub mod models;
pub mod registry;
pub mod tables;
pub mod transform;

pub use description::{
    DeviceClass, EntityCategory, EntityDescription, EntityKind, OnReceive, StateClass,
};
pub use registry::{CommandRequest, HostContext, StateUpdate, TopicRegistry};
pub use transform::{DecodeRule, EncodeRule};

// Re-export the shared core types so hosts depend on one crate.
pub use aquamon_core::{
    CommandPublisher, DeviceIdentifiers, DeviceModelRegistry, DeviceType, EntityValue,
    InMemoryDeviceRegistry, MappingError, MappingResult,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_registry_builds() {
        let registry = TopicRegistry::default();
        assert!(registry.lookup("TOP0").is_some());
    }
}
