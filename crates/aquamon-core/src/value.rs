//! Typed entity values
//!
//! Every decode rule resolves a raw MQTT payload into an [`EntityValue`].
//! `Null` means "not representable / not yet known" and is a legal state,
//! not an error.

use serde::{Deserialize, Serialize};

/// Typed value decoded from an MQTT payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
}

impl EntityValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Null => "null",
        }
    }
}

impl From<i64> for EntityValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for EntityValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for EntityValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for EntityValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<bool> for EntityValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

/// `None` maps to `Null`, so decode helpers returning `Option` convert
/// directly with `.into()`.
impl<T: Into<EntityValue>> From<Option<T>> for EntityValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(EntityValue::Integer(7).as_f64(), Some(7.0));
        assert_eq!(EntityValue::Float(1.5).as_i64(), Some(1));
        assert_eq!(EntityValue::Boolean(true).as_bool(), Some(true));
        assert_eq!(EntityValue::String("Tank".into()).as_str(), Some("Tank"));
        assert!(EntityValue::Null.is_null());
        assert_eq!(EntityValue::Null.as_f64(), None);
    }

    #[test]
    fn test_from_option() {
        let some: EntityValue = Some(42i64).into();
        assert_eq!(some, EntityValue::Integer(42));

        let none: EntityValue = Option::<bool>::None.into();
        assert_eq!(none, EntityValue::Null);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(EntityValue::Float(0.0).type_name(), "float");
        assert_eq!(EntityValue::Null.type_name(), "null");
    }
}
