use std::fmt;

use super::TextKey;

/// Raw value stored for a parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Text(String),
}

impl SetupValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Interprets the value as a boolean.
    ///
    /// Text values `"true"`/`"false"` are accepted because hosts commonly
    /// stringify checkbox state.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            Self::Text(text) => match text.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            Self::Int(_) | Self::UInt(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::UInt(value) => i64::try_from(*value).ok(),
            Self::Bool(_) | Self::Text(_) => None,
        }
    }
}

impl fmt::Display for SetupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<bool> for SetupValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SetupValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for SetupValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<&str> for SetupValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Kind of values a parameter accepts.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DomainKind {
    /// One of an enumerated list of possible values.
    Select,
    Boolean,
    Integer,
    UnsignedInteger,
    /// Free text.
    Text,
}

/// One entry of a selectable domain.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PossibleValue {
    pub value: SetupValue,
    pub name: TextKey,
}

impl PossibleValue {
    pub fn new(value: impl Into<SetupValue>, name: impl Into<TextKey>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }
}

/// Domain of a parameter: its kind plus the enumerated values for `Select`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    pub kind: DomainKind,
    pub possible_values: Vec<PossibleValue>,
}

impl Domain {
    pub fn new(kind: DomainKind) -> Self {
        Self {
            kind,
            possible_values: Vec::new(),
        }
    }

    pub fn select(possible_values: Vec<PossibleValue>) -> Self {
        Self {
            kind: DomainKind::Select,
            possible_values,
        }
    }

    /// Position of `value` among the possible values, if enumerated.
    pub fn index_of(&self, value: &SetupValue) -> Option<usize> {
        self.possible_values
            .iter()
            .position(|candidate| &candidate.value == value)
    }

    /// Returns true if `value` may be stored for a parameter of this domain.
    pub fn accepts(&self, value: &SetupValue) -> bool {
        match self.kind {
            DomainKind::Select => self.index_of(value).is_some(),
            DomainKind::Boolean => value.as_bool().is_some(),
            DomainKind::Integer => value.as_i64().is_some(),
            DomainKind::UnsignedInteger => match value {
                SetupValue::UInt(_) => true,
                SetupValue::Int(number) => *number >= 0,
                SetupValue::Bool(_) | SetupValue::Text(_) => false,
            },
            DomainKind::Text => matches!(value, SetupValue::Text(_)),
        }
    }
}

/// Current value of a parameter with its optional display name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterValue {
    pub value: SetupValue,
    pub name: Option<TextKey>,
}

impl ParameterValue {
    pub fn new(value: impl Into<SetupValue>) -> Self {
        Self {
            value: value.into(),
            name: None,
        }
    }

    pub fn named(value: impl Into<SetupValue>, name: impl Into<TextKey>) -> Self {
        Self {
            value: value.into(),
            name: Some(name.into()),
        }
    }
}
