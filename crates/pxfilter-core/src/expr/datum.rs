use pxfilter_primitives::Oid;
use serde::{Deserialize, Serialize};

///
/// Datum
///
/// In-memory constant value. The owning `Const` carries the type oid;
/// the variant only fixes the physical representation.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Datum {
    Bool(bool),
    Int2(i16),
    Int4(i32),
    Int8(i64),
    Float4(f32),
    Float8(f64),
    /// Any type whose host input and output form is plain text
    /// (character, numeric, temporal, JSON).
    Text(String),
    Bytes(Vec<u8>),
    Uuid([u8; 16]),
    Array(ArrayDatum),
}

impl Datum {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Representation label used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int2(_) => "int2",
            Self::Int4(_) => "int4",
            Self::Int8(_) => "int8",
            Self::Float4(_) => "float4",
            Self::Float8(_) => "float8",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Uuid(_) => "uuid",
            Self::Array(_) => "array",
        }
    }
}

///
/// ArrayDatum
///
/// One-dimensional array value. `None` elements are SQL NULLs.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArrayDatum {
    pub element_type: Oid,
    pub elements: Vec<Option<Datum>>,
}

impl ArrayDatum {
    #[must_use]
    pub const fn new(element_type: Oid, elements: Vec<Option<Datum>>) -> Self {
        Self {
            element_type,
            elements,
        }
    }

    /// Build an array without NULL elements.
    #[must_use]
    pub fn from_values(element_type: Oid, values: impl IntoIterator<Item = Datum>) -> Self {
        Self::new(element_type, values.into_iter().map(Some).collect())
    }

    #[must_use]
    pub fn has_nulls(&self) -> bool {
        self.elements.iter().any(Option::is_none)
    }
}
