//! Type identifiers shared by the pxfilter crates.
//!
//! The registry in `macros.rs` is the single source of truth for which host
//! types are eligible for filter pushdown.

#[macro_use]
mod macros;


/// Host catalog object identifier.
pub type Oid = u32;

///
/// PgType
///
/// Host types eligible for pushdown: fixed-width numerics, boolean,
/// character, temporal, UUID, byte-string, JSON, and their one-dimensional
/// array counterparts.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PgType {
    Bool,
    Bytea,
    Char,
    Int8,
    Int2,
    Int4,
    Text,
    Json,
    Float4,
    Float8,
    Bpchar,
    Varchar,
    Date,
    Time,
    Timestamp,
    TimestampTz,
    Interval,
    Numeric,
    Uuid,
    Jsonb,
    JsonArray,
    BoolArray,
    ByteaArray,
    Int2Array,
    Int4Array,
    TextArray,
    BpcharArray,
    VarcharArray,
    Int8Array,
    Float4Array,
    Float8Array,
    TimestampArray,
    DateArray,
    TimeArray,
    TimestampTzArray,
    IntervalArray,
    NumericArray,
    UuidArray,
    JsonbArray,
}

impl PgType {
    /// Return the full registry descriptor for one type.
    #[must_use]
    pub const fn metadata(self) -> PgTypeMetadata {
        pg_type_registry!(metadata_from_registry, self)
    }

    /// Resolve a catalog oid to a supported type.
    #[must_use]
    pub const fn from_oid(oid: Oid) -> Option<Self> {
        pg_type_registry!(from_oid_from_registry, oid)
    }

    #[must_use]
    pub const fn oid(self) -> Oid {
        self.metadata().oid
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.metadata().name
    }

    #[must_use]
    pub const fn family(self) -> TypeFamily {
        self.metadata().family
    }

    /// Element type for array types, `None` for scalars.
    #[must_use]
    pub const fn element(self) -> Option<Self> {
        self.metadata().element
    }

    #[must_use]
    pub const fn is_array(self) -> bool {
        self.element().is_some()
    }

    /// Return whether values of this type are variable-length on disk.
    #[must_use]
    pub const fn is_varlena(self) -> bool {
        self.metadata().is_varlena
    }

    /// Return whether the host registers a default equality operator.
    #[must_use]
    pub const fn has_equality(self) -> bool {
        self.metadata().has_equality
    }
}

///
/// PgTypeMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PgTypeMetadata {
    pub oid: Oid,
    pub name: &'static str,
    pub family: TypeFamily,
    pub element: Option<PgType>,
    pub is_varlena: bool,
    pub has_equality: bool,
}

///
/// TypeFamily
///
/// Coarse grouping used to pick an output routine.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeFamily {
    Array,
    Binary,
    Bool,
    Character,
    Json,
    Numeric,
    Temporal,
    Uuid,
}

/// Ordered list of all supported types in registry order.
pub const ALL_PG_TYPES: [PgType; 39] = pg_type_registry!(all_types_from_registry);

/// Return whether `oid` is in the pushdown type set (scalars and arrays).
#[must_use]
pub const fn is_supported_type(oid: Oid) -> bool {
    PgType::from_oid(oid).is_some()
}

/// Return whether `oid` is one of the supported array types.
#[must_use]
pub const fn is_supported_array_type(oid: Oid) -> bool {
    match PgType::from_oid(oid) {
        Some(ty) => ty.is_array(),
        None => false,
    }
}
