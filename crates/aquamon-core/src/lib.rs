//! Core types for the Aquamon mapping layer
//!
//! This crate carries the pieces shared by every entity table: the typed
//! value model produced by payload decoding, the device model (which
//! physical unit a reading belongs to), the narrow interfaces through which
//! the host platform is reached, and the error taxonomy of the
//! encode/publish surface.
//!
//! Decoding itself never errors — a payload that cannot be interpreted
//! becomes [`EntityValue::Null`] or a descriptive placeholder string. The
//! error type here exists only for the command (encode) direction, where an
//! invalid value indicates a host-side bug and must fail loudly.

pub mod device;
pub mod error;
pub mod value;

pub use device::{
    CommandPublisher, DeviceIdentifiers, DeviceModelRegistry, DeviceRecord, DeviceType,
    InMemoryDeviceRegistry,
};
pub use error::{MappingError, MappingResult};
pub use value::EntityValue;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
