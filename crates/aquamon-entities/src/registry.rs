//! Topic registry and dispatch
//!
//! [`TopicRegistry`] is the lookup surface the host drives: an inbound
//! message dispatches through [`TopicRegistry::handle_message`] into a
//! decode and optional side-effect hook, a user command dispatches through
//! [`TopicRegistry::encode_command`] into a validated topic/payload pair.
//!
//! Decode dispatch never fails — an unmodeled topic id is `None`, a
//! malformed payload is a `Null` state update. Encode dispatch is the one
//! place that fails loudly, because a value outside the declared domain
//! means the host offered something this layer cannot produce.

use std::collections::HashMap;

use aquamon_core::{
    CommandPublisher, DeviceIdentifiers, DeviceModelRegistry, DeviceType, EntityValue,
    MappingError, MappingResult,
};

use crate::description::{EntityDescription, EntityKind, OnReceive};
use crate::tables;

/// Outbound command: the pair the host hands to its transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub topic: String,
    pub payload: String,
}

/// Result of decoding one inbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct StateUpdate {
    /// Namespaced path under which the host stores the value
    pub state_key: &'static str,
    pub value: EntityValue,
}

/// Host context handed to side-effect hooks.
pub struct HostContext<'a> {
    pub device_registry: &'a dyn DeviceModelRegistry,
    pub config_entry_id: &'a str,
}

impl HostContext<'_> {
    fn identifiers_for(&self, device: DeviceType) -> DeviceIdentifiers {
        DeviceIdentifiers::new(self.config_entry_id, device)
    }
}

/// Immutable map from topic id to its descriptor, built once over the
/// shipped tables.
pub struct TopicRegistry {
    by_topic: HashMap<&'static str, &'static EntityDescription>,
}

impl TopicRegistry {
    /// Build the registry from all descriptor tables.
    ///
    /// Panics on a duplicate topic id: the tables are compile-time data, so
    /// a duplicate is a bug in this crate, not a runtime condition.
    pub fn new() -> Self {
        let mut by_topic = HashMap::new();
        for desc in tables::all_descriptions() {
            if by_topic.insert(desc.topic_id, desc).is_some() {
                panic!("duplicate topic id in descriptor tables: {}", desc.topic_id);
            }
        }
        Self { by_topic }
    }

    /// Descriptor for a topic id, if the topic is modeled.
    pub fn lookup(&self, topic_id: &str) -> Option<&'static EntityDescription> {
        self.by_topic.get(topic_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_topic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_topic.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static EntityDescription> + '_ {
        self.by_topic.values().copied()
    }

    /// Decode one inbound message.
    ///
    /// Returns `None` for topic ids this layer does not model — the caller
    /// treats that as "not for us", not as an error. A payload that fails to
    /// decode still yields an update, carrying `Null`.
    pub fn handle_message(
        &self,
        topic_id: &str,
        payload: &str,
        ctx: &HostContext<'_>,
    ) -> Option<StateUpdate> {
        let desc = self.lookup(topic_id)?;
        let value = desc.decode.apply(payload);

        if let Some(hook) = desc.on_receive {
            self.run_hook(hook, desc, &value, ctx);
        }

        Some(StateUpdate {
            state_key: desc.state_key,
            value,
        })
    }

    fn run_hook(
        &self,
        hook: OnReceive,
        desc: &EntityDescription,
        value: &EntityValue,
        ctx: &HostContext<'_>,
    ) {
        match hook {
            OnReceive::UpdateDeviceModel => {
                if let Some(model) = value.as_str() {
                    ctx.device_registry
                        .upsert_model(&ctx.identifiers_for(desc.device), model);
                }
            }
        }
    }

    /// Encode a user-chosen value for a writable topic.
    ///
    /// Select values are validated against the declared option list, number
    /// values against the declared bounds. Anything outside the domain is a
    /// host-side bug and is rejected rather than published.
    pub fn encode_command(&self, topic_id: &str, value: &str) -> MappingResult<CommandRequest> {
        let desc = self
            .lookup(topic_id)
            .ok_or_else(|| MappingError::UnknownTopic(topic_id.to_string()))?;

        let invalid = || {
            tracing::warn!(topic_id, value, "rejecting unencodable command value");
            MappingError::InvalidOption {
                topic_id: topic_id.to_string(),
                value: value.to_string(),
            }
        };

        match &desc.kind {
            EntityKind::Select {
                command_topic,
                options,
                encode,
            } => {
                if !options.iter().any(|option| *option == value) {
                    return Err(invalid());
                }
                let payload = encode.apply(value).ok_or_else(invalid)?;
                Ok(CommandRequest {
                    topic: (*command_topic).to_string(),
                    payload,
                })
            }
            EntityKind::Number {
                command_topic,
                min,
                max,
                encode,
            } => {
                let parsed: f64 = value.trim().parse().map_err(|_| invalid())?;
                if parsed < *min || parsed > *max {
                    tracing::warn!(topic_id, value, "rejecting out-of-range command value");
                    return Err(MappingError::OutOfRange {
                        topic_id: topic_id.to_string(),
                        value: parsed,
                        min: *min,
                        max: *max,
                    });
                }
                let payload = encode.apply(value).ok_or_else(invalid)?;
                Ok(CommandRequest {
                    topic: (*command_topic).to_string(),
                    payload,
                })
            }
            EntityKind::Switch {
                command_topic,
                payload_on,
                payload_off,
            } => {
                // Switches only ever publish their declared payloads.
                if value != *payload_on && value != *payload_off {
                    return Err(invalid());
                }
                Ok(CommandRequest {
                    topic: (*command_topic).to_string(),
                    payload: value.to_string(),
                })
            }
            EntityKind::Sensor | EntityKind::BinarySensor => {
                Err(MappingError::NotWritable(topic_id.to_string()))
            }
        }
    }

    /// Encode an on/off command for a switch.
    pub fn switch_command(&self, topic_id: &str, on: bool) -> MappingResult<CommandRequest> {
        let desc = self
            .lookup(topic_id)
            .ok_or_else(|| MappingError::UnknownTopic(topic_id.to_string()))?;
        match desc.kind {
            EntityKind::Switch {
                command_topic,
                payload_on,
                payload_off,
            } => Ok(CommandRequest {
                topic: command_topic.to_string(),
                payload: if on { payload_on } else { payload_off }.to_string(),
            }),
            _ => Err(MappingError::NotWritable(topic_id.to_string())),
        }
    }

    /// Encode and hand the command to the host's publisher.
    pub fn send_command(
        &self,
        publisher: &dyn CommandPublisher,
        topic_id: &str,
        value: &str,
    ) -> MappingResult<()> {
        let request = self.encode_command(topic_id, value)?;
        publisher.publish(&request.topic, &request.payload)
    }
}

impl Default for TopicRegistry {
    fn default() -> Self {
        Self::new()
    }
}
