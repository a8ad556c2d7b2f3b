//! Value objects shared by the console's domain records.
//!
//! The remote service is loosely typed: identifiers arrive as strings or
//! numbers, numeric fields sometimes arrive as text and missing values are
//! sent as `null`. The helpers here absorb those differences at the decode
//! boundary so the rest of the crate works with plain Rust types.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Server-assigned record identifier.
///
/// The console never generates ids; it only echoes back what the server sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Trims whitespace and rejects empty ids.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the id as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for records that arrived without an id.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RecordId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RecordId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

/// Records that carry a server-assigned id.
pub trait Identified {
    fn record_id(&self) -> &RecordId;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
            Some(NumberOrText::Number(number)) => Self(number.to_string()),
            Some(NumberOrText::Text(text)) => Self(text.trim().to_string()),
            None => Self::default(),
        })
    }
}

/// Decodes `null` as the type's default value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a number that may arrive as JSON number, numeric text or `null`.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(number)) => number.as_f64(),
        Some(NumberOrText::Text(text)) => parse_float(&text),
        None => None,
    })
}

/// Same as [`lenient_f64`] for non-negative integer counts.
pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(number)) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|n| *n >= 0.0).map(|n| n as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Some(NumberOrText::Text(text)) => parse_int(&text),
        None => None,
    })
}

/// Parses form text as a non-negative integer; anything else yields `None`.
pub fn parse_int(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Parses form text as a finite float; anything else yields `None`.
pub fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Splits comma separated tag input into trimmed, non-empty tags.
pub fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins tags back into the editable comma separated form.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// One `<option>` of a select input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Generates a closed string enum that keeps unrecognised wire values.
///
/// Every generated type parses its known values, falls back to
/// `Unknown(String)` for anything else and serializes back to the exact
/// string it was read from.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $($variant:ident => $wire:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Unknown(String),
        }

        impl $name {
            const OPTIONS: &'static [(&'static str, &'static str)] = &[$(($wire, $label)),+];

            /// Wire representation of the value.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unknown(s) => s,
                }
            }

            /// Select options for every known variant.
            pub fn options() -> Vec<$crate::domain::types::SelectOption> {
                Self::OPTIONS
                    .iter()
                    .map(|(value, label)| $crate::domain::types::SelectOption::new(*value, *label))
                    .collect()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($wire => $name::$variant,)+
                    _ => $name::Unknown(s.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                s.as_str().into()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
                Ok(value.map(Self::from).unwrap_or_default())
            }
        }
    };
}

pub(crate) use wire_enum;
