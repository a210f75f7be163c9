//! End-to-end mapping scenarios: inbound messages through decode and hooks,
//! user commands through encode and publish.

use std::sync::Mutex;

use aquamon_entities::{
    CommandPublisher, DeviceIdentifiers, DeviceType, EntityValue, HostContext,
    InMemoryDeviceRegistry, MappingError, MappingResult, TopicRegistry,
};

/// Publisher that records what the mapping layer asked it to send.
#[derive(Default)]
struct RecordingPublisher {
    published: Mutex<Vec<(String, String)>>,
}

impl CommandPublisher for RecordingPublisher {
    fn publish(&self, topic: &str, payload: &str) -> MappingResult<()> {
        self.published
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.to_string()));
        Ok(())
    }
}

fn host<'a>(devices: &'a InMemoryDeviceRegistry) -> HostContext<'a> {
    HostContext {
        device_registry: devices,
        config_entry_id: "entry-1",
    }
}

#[test]
fn main_power_message_decodes_to_running() {
    let registry = TopicRegistry::new();
    let devices = InMemoryDeviceRegistry::new();

    let update = registry.handle_message("TOP0", "1", &host(&devices)).unwrap();
    assert_eq!(update.state_key, "panasonic_heat_pump/main/Heatpump_State");
    assert_eq!(update.value, EntityValue::Boolean(true));
}

#[test]
fn valve_message_decodes_to_tank() {
    let registry = TopicRegistry::new();
    let devices = InMemoryDeviceRegistry::new();

    let update = registry.handle_message("TOP20", "1", &host(&devices)).unwrap();
    assert_eq!(update.value, EntityValue::String("Tank".to_string()));

    // Undocumented valve values drop to Null without failing the message.
    let update = registry.handle_message("TOP20", "7", &host(&devices)).unwrap();
    assert_eq!(update.value, EntityValue::Null);
}

#[test]
fn stats_document_feeds_uptime_and_rssi() {
    let registry = TopicRegistry::new();
    let devices = InMemoryDeviceRegistry::new();
    let ctx = host(&devices);

    // One stats document fans out to every STAT1_* row; the host calls
    // handle_message once per subscribed topic id.
    let stats = r#"{"uptime": 5000, "wifi": 10}"#;

    let uptime = registry.handle_message("STAT1_uptime", stats, &ctx).unwrap();
    assert_eq!(uptime.value, EntityValue::Float(5.0));

    let rssi = registry.handle_message("STAT1_rssi", stats, &ctx).unwrap();
    assert_eq!(rssi.value, EntityValue::Float(10.0));

    // Fields missing from the document decode to Null.
    let voltage = registry.handle_message("STAT1_voltage", stats, &ctx).unwrap();
    assert_eq!(voltage.value, EntityValue::Null);
}

#[test]
fn stats_zero_reading_is_suppressed() {
    // Present-but-zero conflates with absent; this is the established
    // contract of the stats topic and is asserted so it cannot change
    // silently.
    let registry = TopicRegistry::new();
    let devices = InMemoryDeviceRegistry::new();

    let update = registry
        .handle_message("STAT1_rssi", r#"{"wifi": 0}"#, &host(&devices))
        .unwrap();
    assert_eq!(update.value, EntityValue::Null);
}

#[test]
fn model_message_resolves_name_and_registers_device() {
    let registry = TopicRegistry::new();
    let devices = InMemoryDeviceRegistry::new();
    let ctx = host(&devices);

    let update = registry.handle_message("TOP92", "1", &ctx).unwrap();
    assert_eq!(update.value, EntityValue::String("WH-MDC07H3E5".to_string()));

    let ids = DeviceIdentifiers::new("entry-1", DeviceType::HeatPump);
    assert_eq!(devices.model_of(&ids).as_deref(), Some("WH-MDC07H3E5"));
}

#[test]
fn unknown_model_still_registers_placeholder() {
    let registry = TopicRegistry::new();
    let devices = InMemoryDeviceRegistry::new();
    let ctx = host(&devices);

    let update = registry.handle_message("TOP92", "99", &ctx).unwrap();
    assert_eq!(
        update.value,
        EntityValue::String("Unknown model for HeishaMon".to_string())
    );
    assert_eq!(devices.record_count(), 1);
}

#[test]
fn duplicate_model_delivery_keeps_one_record() {
    let registry = TopicRegistry::new();
    let devices = InMemoryDeviceRegistry::new();
    let ctx = host(&devices);

    for _ in 0..3 {
        registry.handle_message("TOP92", "0", &ctx).unwrap();
    }

    assert_eq!(devices.record_count(), 1);
    let ids = DeviceIdentifiers::new("entry-1", DeviceType::HeatPump);
    assert_eq!(devices.model_of(&ids).as_deref(), Some("WH-MDC05H3E5"));
}

#[test]
fn quiet_mode_select_round_trips_over_the_wire() {
    let registry = TopicRegistry::new();
    let devices = InMemoryDeviceRegistry::new();
    let ctx = host(&devices);

    for code in ["0", "1", "2", "3", "4"] {
        let update = registry.handle_message("SET3", code, &ctx).unwrap();
        let label = update.value.as_str().unwrap().to_string();

        let request = registry.encode_command("SET3", &label).unwrap();
        assert_eq!(request.topic, "panasonic_heat_pump/commands/SetQuietMode");
        assert_eq!(request.payload, code);
    }
}

#[test]
fn operating_mode_select_round_trips_for_supported_codes() {
    let registry = TopicRegistry::new();
    let devices = InMemoryDeviceRegistry::new();
    let ctx = host(&devices);

    for code in ["0", "2", "3", "4", "6"] {
        let update = registry.handle_message("SET9", code, &ctx).unwrap();
        let name = update.value.as_str().unwrap().to_string();

        let request = registry.encode_command("SET9", &name).unwrap();
        assert_eq!(request.payload, code);
    }

    // Codes outside the curated set decode to a descriptive string that is
    // not in the option list, so it can never be encoded back.
    for code in ["1", "5", "7", "8"] {
        let update = registry.handle_message("SET9", code, &ctx).unwrap();
        let name = update.value.as_str().unwrap().to_string();
        assert!(name.starts_with("Unknown operating mode value"));
        assert!(matches!(
            registry.encode_command("SET9", &name),
            Err(MappingError::InvalidOption { .. })
        ));
    }
}

#[test]
fn powerful_mode_time_scales_to_minutes() {
    let registry = TopicRegistry::new();
    let devices = InMemoryDeviceRegistry::new();

    let update = registry.handle_message("TOP17", "2", &host(&devices)).unwrap();
    assert_eq!(update.value, EntityValue::Integer(60));

    let update = registry.handle_message("TOP17", "0", &host(&devices)).unwrap();
    assert_eq!(update.value, EntityValue::Integer(0));
}

#[test]
fn send_command_publishes_through_the_host() {
    let registry = TopicRegistry::new();
    let publisher = RecordingPublisher::default();

    registry.send_command(&publisher, "SET9", "Heat only").unwrap();
    registry.send_command(&publisher, "SET11", "50").unwrap();

    let published = publisher.published.lock().unwrap();
    assert_eq!(
        published[0],
        (
            "panasonic_heat_pump/commands/SetOperationMode".to_string(),
            "0".to_string()
        )
    );
    assert_eq!(
        published[1],
        (
            "panasonic_heat_pump/commands/SetDHWTemp".to_string(),
            "50".to_string()
        )
    );
}

#[test]
fn rejected_command_publishes_nothing() {
    let registry = TopicRegistry::new();
    let publisher = RecordingPublisher::default();

    let err = registry
        .send_command(&publisher, "SET11", "90")
        .unwrap_err();
    assert!(matches!(err, MappingError::OutOfRange { .. }));
    assert!(publisher.published.lock().unwrap().is_empty());
}
