//! Variables and scalar decoding helpers

use serde::{Deserialize, Deserializer, Serialize};

/// A variable declared in a manifest or task.
///
/// Static values are kept verbatim. Dynamic values carry a shell snippet
/// whose output is computed later by the executor, never by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "RawVar")]
pub enum Var {
    Static(String),
    Dynamic { sh: String },
}

impl Var {
    /// The static value, if this is not a computed variable.
    pub fn as_static(&self) -> Option<&str> {
        match self {
            Self::Static(value) => Some(value),
            Self::Dynamic { .. } => None,
        }
    }
}

impl From<&str> for Var {
    fn from(value: &str) -> Self {
        Self::Static(value.to_string())
    }
}

impl From<String> for Var {
    fn from(value: String) -> Self {
        Self::Static(value)
    }
}

/// YAML scalars accepted where a string is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(f) => format!("{f:?}"),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVar {
    Scalar(Scalar),
    Sh { sh: String },
}

impl From<RawVar> for Var {
    fn from(raw: RawVar) -> Self {
        match raw {
            RawVar::Scalar(scalar) => Self::Static(scalar.into()),
            RawVar::Sh { sh } => Self::Dynamic { sh },
        }
    }
}

/// Deserialize any scalar (`2`, `'2'`, `2.5`, `true`) into its string form.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}
