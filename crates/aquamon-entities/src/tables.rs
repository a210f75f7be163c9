//! Static descriptor tables
//!
//! One table per entity kind, each row binding a HeishaMon topic id to its
//! display metadata and transform rules. The tables are the whole
//! configuration surface of this layer: adding a topic means adding a row
//! here, nothing else.

use crate::description::{
    DeviceClass, EntityCategory, EntityDescription, OnReceive, StateClass,
};
use crate::transform::{
    DecodeRule, EncodeRule, OPERATING_MODE_OPTIONS, QUIET_MODE_OPTIONS,
};

/// Writable bounded numbers.
pub static NUMBERS: &[EntityDescription] = &[EntityDescription::number(
    "SET11",
    "panasonic_heat_pump/main/DHW_Target_Temp",
    "DHW Target Temperature",
    "panasonic_heat_pump/commands/SetDHWTemp",
    48.0,
    60.0,
)
.with_category(EntityCategory::Config)
.with_device_class(DeviceClass::Temperature)
.with_unit("°C")];

/// Writable selects over fixed option lists.
pub static SELECTS: &[EntityDescription] = &[
    // SET3 also corresponds to TOP18
    EntityDescription::select(
        "SET3",
        "panasonic_heat_pump/main/Quiet_Mode_Level",
        "Aquarea Quiet Mode",
        "panasonic_heat_pump/commands/SetQuietMode",
        QUIET_MODE_OPTIONS,
        DecodeRule::QuietModeLevel,
        EncodeRule::QuietModeLevel,
    )
    .with_category(EntityCategory::Config),
    EntityDescription::select(
        "SET9",
        "panasonic_heat_pump/main/Operating_Mode_State",
        "Aquarea Mode",
        "panasonic_heat_pump/commands/SetOperationMode",
        OPERATING_MODE_OPTIONS,
        DecodeRule::OperatingMode,
        EncodeRule::OperatingMode,
    ),
];

/// Writable on/off switches.
pub static SWITCHES: &[EntityDescription] = &[
    EntityDescription::switch(
        "TOP19",
        "panasonic_heat_pump/main/Holiday_Mode_State",
        "Aquarea Holiday Mode",
        "panasonic_heat_pump/main/Holiday_Mode_State",
    )
    .with_category(EntityCategory::Config),
    EntityDescription::switch(
        "TOP0",
        "panasonic_heat_pump/main/Heatpump_State",
        "Aquarea Main Power",
        "panasonic_heat_pump/commands/SetHeatpump",
    )
    .with_device_class(DeviceClass::Running),
    EntityDescription::switch(
        "TOP2",
        "panasonic_heat_pump/main/Force_DHW_State",
        "Aquarea Force DHW Mode",
        "panasonic_heat_pump/commands/SetForceDHW",
    )
    .with_category(EntityCategory::Config),
    // SET24 corresponds to TOP13
    EntityDescription::switch(
        "SET24",
        "panasonic_heat_pump/main/Main_Schedule_State",
        "Aquarea Main thermostat schedule",
        "panasonic_heat_pump/commands/SetMainSchedule",
    )
    .with_category(EntityCategory::Config),
];

/// Read-only bit flags.
pub static BINARY_SENSORS: &[EntityDescription] = &[
    EntityDescription::binary_sensor(
        "TOP3",
        "panasonic_heat_pump/main/Quiet_Mode_Schedule",
        "Aquarea Quiet Mode Schedule",
    ),
    EntityDescription::binary_sensor(
        "TOP26",
        "panasonic_heat_pump/main/Defrosting_State",
        "Aquarea Defrost State",
    )
    .with_device_class(DeviceClass::Heat),
    EntityDescription::binary_sensor(
        "TOP58",
        "panasonic_heat_pump/main/DHW_Heater_State",
        "Aquarea Tank Heater Enabled",
    )
    .with_device_class(DeviceClass::Heat),
    EntityDescription::binary_sensor(
        "TOP59",
        "panasonic_heat_pump/main/Room_Heater_State",
        "Aquarea Room Heater Enabled",
    )
    .with_device_class(DeviceClass::Heat),
    EntityDescription::binary_sensor(
        "TOP60",
        "panasonic_heat_pump/main/Internal_Heater_State",
        "Aquarea Internal Heater State",
    )
    .with_device_class(DeviceClass::Heat),
    EntityDescription::binary_sensor(
        "TOP61",
        "panasonic_heat_pump/main/External_Heater_State",
        "Aquarea External Heater State",
    )
    .with_device_class(DeviceClass::Heat),
];

const fn temp_sensor(
    topic_id: &'static str,
    state_key: &'static str,
    name: &'static str,
) -> EntityDescription {
    EntityDescription::sensor(topic_id, state_key, name)
        .with_decode(DecodeRule::Float)
        .with_device_class(DeviceClass::Temperature)
        .with_unit("°C")
}

const fn power_sensor(
    topic_id: &'static str,
    state_key: &'static str,
    name: &'static str,
) -> EntityDescription {
    EntityDescription::sensor(topic_id, state_key, name)
        .with_decode(DecodeRule::Float)
        .with_device_class(DeviceClass::Power)
        .with_unit("W")
}

const fn stats_counter(
    topic_id: &'static str,
    field: &'static str,
    name: &'static str,
) -> EntityDescription {
    EntityDescription::sensor(topic_id, "panasonic_heat_pump/stats", name)
        .with_decode(DecodeRule::StatsField(field))
        .on_heishamon()
        .with_category(EntityCategory::Diagnostic)
        .with_state_class(StateClass::TotalIncreasing)
}

/// Read-only sensors, including the HeishaMon bridge stats.
pub static SENSORS: &[EntityDescription] = &[
    EntityDescription::sensor(
        "TOP1",
        "panasonic_heat_pump/main/Pump_Flow",
        "Aquarea Pump Flow",
    )
    .with_decode(DecodeRule::Float)
    .with_unit("L/min"),
    EntityDescription::sensor(
        "TOP4",
        "panasonic_heat_pump/main/Operating_Mode_State",
        "Aquarea Mode",
    )
    .with_decode(DecodeRule::OperatingMode),
    temp_sensor(
        "TOP5",
        "panasonic_heat_pump/main/Main_Inlet_Temp",
        "Aquarea Inlet Temperature",
    ),
    temp_sensor(
        "TOP6",
        "panasonic_heat_pump/main/Main_Outlet_Temp",
        "Aquarea Outlet Temperature",
    ),
    temp_sensor(
        "TOP7",
        "panasonic_heat_pump/main/Main_Target_Temp",
        "Aquarea Outlet Target Temperature",
    ),
    EntityDescription::sensor(
        "TOP8",
        "panasonic_heat_pump/main/Compressor_Freq",
        "Aquarea Compressor Frequency",
    )
    .with_decode(DecodeRule::Float)
    .with_device_class(DeviceClass::Frequency)
    .with_unit("Hz")
    .with_category(EntityCategory::Diagnostic),
    temp_sensor(
        "TOP9",
        "panasonic_heat_pump/main/DHW_Target_Temp",
        "Aquarea Tank Set Temperature",
    )
    .with_category(EntityCategory::Config),
    temp_sensor(
        "TOP10",
        "panasonic_heat_pump/main/DHW_Temp",
        "Aquarea Tank Actual Tank Temperature",
    )
    .with_state_class(StateClass::Measurement),
    EntityDescription::sensor(
        "TOP11",
        "panasonic_heat_pump/main/Operations_Hours",
        "Aquarea Compressor Operating Hours",
    )
    .with_decode(DecodeRule::Integer)
    .with_device_class(DeviceClass::Duration)
    .with_unit("Hours")
    .with_state_class(StateClass::TotalIncreasing)
    .with_category(EntityCategory::Diagnostic),
    EntityDescription::sensor(
        "TOP12",
        "panasonic_heat_pump/main/Operations_Counter",
        "Aquarea Compressor Start/Stop Counter",
    )
    .with_decode(DecodeRule::Integer)
    .with_state_class(StateClass::TotalIncreasing)
    .with_category(EntityCategory::Diagnostic),
    temp_sensor(
        "TOP14",
        "panasonic_heat_pump/main/Outside_Temp",
        "Aquarea Outdoor Ambient",
    )
    .with_state_class(StateClass::Measurement),
    power_sensor(
        "TOP15",
        "panasonic_heat_pump/main/Heat_Energy_Production",
        "Aquarea Power Produced",
    )
    .with_state_class(StateClass::Measurement),
    power_sensor(
        "TOP16",
        "panasonic_heat_pump/main/Heat_Energy_Consumption",
        "Aquarea Power Consumed",
    )
    .with_state_class(StateClass::Measurement),
    EntityDescription::sensor(
        "TOP17",
        "panasonic_heat_pump/main/Powerful_Mode_Time",
        "Aquarea Powerful Mode",
    )
    .with_decode(DecodeRule::PowerfulModeTime)
    .with_device_class(DeviceClass::Duration)
    .with_unit("Min"),
    EntityDescription::sensor(
        "TOP20",
        "panasonic_heat_pump/main/ThreeWay_Valve_State",
        "Aquarea 3-way Valve",
    )
    .with_decode(DecodeRule::ThreeWayValve),
    temp_sensor(
        "TOP21",
        "panasonic_heat_pump/main/Outside_Pipe_Temp",
        "Aquarea Outdoor Pipe Temperature",
    ),
    temp_sensor(
        "TOP22",
        "panasonic_heat_pump/main/DHW_Heat_Delta",
        "Aquarea DHW heating delta",
    ),
    temp_sensor(
        "TOP23",
        "panasonic_heat_pump/main/Heat_Delta",
        "Aquarea Heat delta",
    ),
    temp_sensor(
        "TOP24",
        "panasonic_heat_pump/main/Cool_Delta",
        "Aquarea Cool delta",
    ),
    temp_sensor(
        "TOP25",
        "panasonic_heat_pump/main/DHW_Holiday_Shift_Temp",
        "Aquarea DHW Holiday shift temperature",
    ),
    // Request shifts can be relative (-5..+5) or absolute, depending on
    // remote configuration; the raw reading is forwarded either way.
    temp_sensor(
        "TOP27",
        "panasonic_heat_pump/main/Z1_Heat_Request_Temp",
        "Aquarea Zone 1 Heat Requested shift",
    ),
    temp_sensor(
        "TOP28",
        "panasonic_heat_pump/main/Z1_Cool_Request_Temp",
        "Aquarea Zone 1 Cool Requested shift",
    ),
    temp_sensor(
        "TOP29",
        "panasonic_heat_pump/main/Z1_Heat_Curve_Target_High_Temp",
        "Aquarea Zone 1 Target temperature at lowest point on heating curve",
    ),
    temp_sensor(
        "TOP30",
        "panasonic_heat_pump/main/Z1_Heat_Curve_Target_Low_Temp",
        "Aquarea Zone 1 Target temperature at highest point on heating curve",
    ),
    temp_sensor(
        "TOP31",
        "panasonic_heat_pump/main/Z1_Heat_Curve_Outside_High_Temp",
        "Aquarea Zone 1 Lowest outside temperature on the heating curve",
    ),
    temp_sensor(
        "TOP32",
        "panasonic_heat_pump/main/Z1_Heat_Curve_Outside_Low_Temp",
        "Aquarea Zone 1 Highest outside temperature on the heating curve",
    ),
    temp_sensor(
        "TOP33",
        "panasonic_heat_pump/main/Room_Thermostat_Temp",
        "Aquarea Remote control thermostat temperature",
    ),
    temp_sensor(
        "TOP34",
        "panasonic_heat_pump/main/Z2_Heat_Request_Temp",
        "Aquarea Zone 2 Heat Requested shift",
    ),
    temp_sensor(
        "TOP35",
        "panasonic_heat_pump/main/Z2_Cool_Request_Temp",
        "Aquarea Zone 2 Cool Requested shift",
    ),
    temp_sensor(
        "TOP36",
        "panasonic_heat_pump/main/Z1_Water_Temp",
        "Aquarea Zone 1 water outlet temperature",
    ),
    temp_sensor(
        "TOP37",
        "panasonic_heat_pump/main/Z2_Water_Temp",
        "Aquarea Zone 2 water outlet temperature",
    ),
    power_sensor(
        "TOP38",
        "panasonic_heat_pump/main/Cool_Energy_Production",
        "Aquarea Thermal Cooling power production",
    ),
    power_sensor(
        "TOP39",
        "panasonic_heat_pump/main/Cool_Energy_Consumption",
        "Aquarea Thermal Cooling power consumption",
    ),
    power_sensor(
        "TOP40",
        "panasonic_heat_pump/main/DHW_Energy_Production",
        "Aquarea DHW Power Produced",
    )
    .with_state_class(StateClass::Measurement),
    power_sensor(
        "TOP41",
        "panasonic_heat_pump/main/DHW_Energy_Consumption",
        "Aquarea DHW Power Consumed",
    )
    .with_state_class(StateClass::Measurement),
    temp_sensor(
        "TOP42",
        "panasonic_heat_pump/main/Z1_Water_Target_Temp",
        "Aquarea Zone 1 water target temperature",
    ),
    temp_sensor(
        "TOP43",
        "panasonic_heat_pump/main/Z2_Water_Target_Temp",
        "Aquarea Zone 2 water target temperature",
    ),
    EntityDescription::sensor(
        "TOP44",
        "panasonic_heat_pump/main/Error",
        "Aquarea Last Error",
    )
    .with_category(EntityCategory::Diagnostic),
    temp_sensor(
        "TOP45",
        "panasonic_heat_pump/main/Room_Holiday_Shift_Temp",
        "Aquarea Room heating Holiday shift temperature",
    ),
    temp_sensor(
        "TOP46",
        "panasonic_heat_pump/main/Buffer_Temp",
        "Aquarea Actual Buffer temperature",
    ),
    temp_sensor(
        "TOP47",
        "panasonic_heat_pump/main/Solar_Temp",
        "Aquarea Actual Solar temperature",
    ),
    temp_sensor(
        "TOP48",
        "panasonic_heat_pump/main/Pool_Temp",
        "Aquarea Actual Pool temperature",
    ),
    temp_sensor(
        "TOP49",
        "panasonic_heat_pump/main/Main_Hex_Outlet_Temp",
        "Aquarea Main HEX Outlet Temperature",
    ),
    temp_sensor(
        "TOP50",
        "panasonic_heat_pump/main/Discharge_Temp",
        "Aquarea Discharge Temperature",
    ),
    temp_sensor(
        "TOP51",
        "panasonic_heat_pump/main/Inside_Pipe_Temp",
        "Aquarea Inside Pipe Temperature",
    ),
    temp_sensor(
        "TOP52",
        "panasonic_heat_pump/main/Defrost_Temp",
        "Aquarea Defrost Temperature",
    ),
    temp_sensor(
        "TOP53",
        "panasonic_heat_pump/main/Eva_Outlet_Temp",
        "Aquarea Eva Outlet Temperature",
    ),
    temp_sensor(
        "TOP54",
        "panasonic_heat_pump/main/Bypass_Outlet_Temp",
        "Aquarea Bypass Outlet Temperature",
    ),
    temp_sensor(
        "TOP55",
        "panasonic_heat_pump/main/Ipm_Temp",
        "Aquarea Ipm Temperature",
    ),
    temp_sensor(
        "TOP56",
        "panasonic_heat_pump/main/Z1_Temp",
        "Aquarea Zone 1: Actual Temperature",
    ),
    temp_sensor(
        "TOP57",
        "panasonic_heat_pump/main/Z2_Temp",
        "Aquarea Zone 2: Actual Temperature",
    ),
    EntityDescription::sensor(
        "TOP62",
        "panasonic_heat_pump/main/Fan1_Motor_Speed",
        "Aquarea Fan 1 Speed",
    )
    .with_decode(DecodeRule::Float)
    .with_unit("R/min"),
    EntityDescription::sensor(
        "TOP63",
        "panasonic_heat_pump/main/Fan2_Motor_Speed",
        "Aquarea Fan 2 Speed",
    )
    .with_decode(DecodeRule::Float)
    .with_unit("R/min"),
    EntityDescription::sensor(
        "TOP64",
        "panasonic_heat_pump/main/High_Pressure",
        "Aquarea High pressure",
    )
    .with_decode(DecodeRule::Float)
    .with_unit("Kgf/cm2"),
    EntityDescription::sensor(
        "TOP65",
        "panasonic_heat_pump/main/Pump_Speed",
        "Aquarea Pump Speed",
    )
    .with_decode(DecodeRule::Float)
    .with_unit("R/min"),
    EntityDescription::sensor(
        "TOP66",
        "panasonic_heat_pump/main/Low_Pressure",
        "Aquarea Low Pressure",
    )
    .with_decode(DecodeRule::Float)
    .with_unit("Kgf/cm2"),
    EntityDescription::sensor(
        "TOP67",
        "panasonic_heat_pump/main/Compressor_Current",
        "Aquarea Compressor Current",
    )
    .with_decode(DecodeRule::Float)
    .with_device_class(DeviceClass::Current)
    .with_unit("A")
    .with_category(EntityCategory::Diagnostic),
    EntityDescription::sensor(
        "TOP92",
        "panasonic_heat_pump/main/Heat_Pump_Model",
        "Aquarea Heatpump model",
    )
    .with_decode(DecodeRule::HeatPumpModel)
    .with_on_receive(OnReceive::UpdateDeviceModel),
    EntityDescription::sensor("STAT1_rssi", "panasonic_heat_pump/stats", "HeishaMon RSSI")
        .with_decode(DecodeRule::StatsField("wifi"))
        .on_heishamon()
        .with_unit("%")
        .with_category(EntityCategory::Diagnostic),
    EntityDescription::sensor(
        "STAT1_uptime",
        "panasonic_heat_pump/stats",
        "HeishaMon Uptime",
    )
    .with_decode(DecodeRule::StatsFieldMsToSecs("uptime"))
    .on_heishamon()
    .with_device_class(DeviceClass::Duration)
    .with_unit("s")
    .with_category(EntityCategory::Diagnostic),
    stats_counter("STAT1_total_reads", "total reads", "HeishaMon Total reads"),
    stats_counter("STAT1_good_reads", "good reads", "HeishaMon Good reads"),
    stats_counter(
        "STAT1_badcrc_reads",
        "bad crc reads",
        "HeishaMon bad CRC reads",
    ),
    stats_counter(
        "STAT1_badheader_reads",
        "bad header reads",
        "HeishaMon bad header reads",
    ),
    stats_counter(
        "STAT1_tooshort_reads",
        "too short reads",
        "HeishaMon too short reads",
    ),
    stats_counter(
        "STAT1_toolong_reads",
        "too long reads",
        "HeishaMon too long reads",
    ),
    stats_counter(
        "STAT1_timeout_reads",
        "timeout reads",
        "HeishaMon timeout reads",
    ),
    EntityDescription::sensor(
        "STAT1_voltage",
        "panasonic_heat_pump/stats",
        "HeishaMon voltage",
    )
    .with_decode(DecodeRule::StatsField("voltage"))
    .on_heishamon()
    .with_device_class(DeviceClass::Voltage)
    .with_category(EntityCategory::Diagnostic),
    EntityDescription::sensor(
        "STAT1_freememory",
        "panasonic_heat_pump/stats",
        "HeishaMon free memory",
    )
    .with_decode(DecodeRule::StatsField("free memory"))
    .on_heishamon()
    .with_unit("%")
    .with_category(EntityCategory::Diagnostic),
    EntityDescription::sensor(
        "STAT1_freeheap",
        "panasonic_heat_pump/stats",
        "HeishaMon free heap",
    )
    .with_decode(DecodeRule::StatsField("free heap"))
    .on_heishamon()
    .with_state_class(StateClass::Measurement)
    .with_category(EntityCategory::Diagnostic),
    stats_counter(
        "STAT1-mqttreconnects",
        "mqtt reconnects",
        "HeishaMon mqtt reconnects",
    ),
];

/// All tables in registration order.
pub fn all_descriptions() -> impl Iterator<Item = &'static EntityDescription> {
    SENSORS
        .iter()
        .chain(BINARY_SENSORS)
        .chain(SWITCHES)
        .chain(SELECTS)
        .chain(NUMBERS)
}
