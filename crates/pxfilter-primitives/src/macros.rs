#[macro_export]
macro_rules! pg_type_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            // scalar types
            (Bool, 16, "bool", Bool, element = [], is_varlena = false, has_equality = true),
            (Bytea, 17, "bytea", Binary, element = [], is_varlena = true, has_equality = true),
            (Char, 18, "char", Character, element = [], is_varlena = false, has_equality = true),
            (Int8, 20, "int8", Numeric, element = [], is_varlena = false, has_equality = true),
            (Int2, 21, "int2", Numeric, element = [], is_varlena = false, has_equality = true),
            (Int4, 23, "int4", Numeric, element = [], is_varlena = false, has_equality = true),
            (Text, 25, "text", Character, element = [], is_varlena = true, has_equality = true),
            (Json, 114, "json", Json, element = [], is_varlena = true, has_equality = false),
            (Float4, 700, "float4", Numeric, element = [], is_varlena = false, has_equality = true),
            (Float8, 701, "float8", Numeric, element = [], is_varlena = false, has_equality = true),
            (Bpchar, 1042, "bpchar", Character, element = [], is_varlena = true, has_equality = true),
            (Varchar, 1043, "varchar", Character, element = [], is_varlena = true, has_equality = true),
            (Date, 1082, "date", Temporal, element = [], is_varlena = false, has_equality = true),
            (Time, 1083, "time", Temporal, element = [], is_varlena = false, has_equality = true),
            (Timestamp, 1114, "timestamp", Temporal, element = [], is_varlena = false, has_equality = true),
            (TimestampTz, 1184, "timestamptz", Temporal, element = [], is_varlena = false, has_equality = true),
            (Interval, 1186, "interval", Temporal, element = [], is_varlena = false, has_equality = true),
            (Numeric, 1700, "numeric", Numeric, element = [], is_varlena = true, has_equality = true),
            (Uuid, 2950, "uuid", Uuid, element = [], is_varlena = false, has_equality = true),
            (Jsonb, 3802, "jsonb", Json, element = [], is_varlena = true, has_equality = true),
            // one-dimensional array types
            (JsonArray, 199, "_json", Array, element = [Json], is_varlena = true, has_equality = true),
            (BoolArray, 1000, "_bool", Array, element = [Bool], is_varlena = true, has_equality = true),
            (ByteaArray, 1001, "_bytea", Array, element = [Bytea], is_varlena = true, has_equality = true),
            (Int2Array, 1005, "_int2", Array, element = [Int2], is_varlena = true, has_equality = true),
            (Int4Array, 1007, "_int4", Array, element = [Int4], is_varlena = true, has_equality = true),
            (TextArray, 1009, "_text", Array, element = [Text], is_varlena = true, has_equality = true),
            (BpcharArray, 1014, "_bpchar", Array, element = [Bpchar], is_varlena = true, has_equality = true),
            (VarcharArray, 1015, "_varchar", Array, element = [Varchar], is_varlena = true, has_equality = true),
            (Int8Array, 1016, "_int8", Array, element = [Int8], is_varlena = true, has_equality = true),
            (Float4Array, 1021, "_float4", Array, element = [Float4], is_varlena = true, has_equality = true),
            (Float8Array, 1022, "_float8", Array, element = [Float8], is_varlena = true, has_equality = true),
            (TimestampArray, 1115, "_timestamp", Array, element = [Timestamp], is_varlena = true, has_equality = true),
            (DateArray, 1182, "_date", Array, element = [Date], is_varlena = true, has_equality = true),
            (TimeArray, 1183, "_time", Array, element = [Time], is_varlena = true, has_equality = true),
            (TimestampTzArray, 1185, "_timestamptz", Array, element = [TimestampTz], is_varlena = true, has_equality = true),
            (IntervalArray, 1187, "_interval", Array, element = [Interval], is_varlena = true, has_equality = true),
            (NumericArray, 1231, "_numeric", Array, element = [Numeric], is_varlena = true, has_equality = true),
            (UuidArray, 2951, "_uuid", Array, element = [Uuid], is_varlena = true, has_equality = true),
            (JsonbArray, 3807, "_jsonb", Array, element = [Jsonb], is_varlena = true, has_equality = true),
        }
    };
}

#[macro_export]
macro_rules! pg_type_registry {
    ($macro:ident) => {
        $crate::pg_type_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::pg_type_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! element_type {
    () => {
        None
    };
    ($element:ident) => {
        Some($crate::PgType::$element)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($variant:ident, $oid:literal, $name:literal, $family:ident, element = [$($element:ident)?], is_varlena = $is_varlena:expr, has_equality = $has_equality:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::PgType::$variant => $crate::PgTypeMetadata {
                    oid: $oid,
                    name: $name,
                    family: $crate::TypeFamily::$family,
                    element: element_type!($($element)?),
                    is_varlena: $is_varlena,
                    has_equality: $has_equality,
                },
            )*
        }
    };
}

macro_rules! from_oid_from_registry {
    ( @args $oid_value:expr; @entries $( ($variant:ident, $oid:literal, $name:literal, $family:ident, element = [$($element:ident)?], is_varlena = $is_varlena:expr, has_equality = $has_equality:expr) ),* $(,)? ) => {
        match $oid_value {
            $(
                $oid => Some($crate::PgType::$variant),
            )*
            _ => None,
        }
    };
}

macro_rules! all_types_from_registry {
    ( @entries $( ($variant:ident, $oid:literal, $name:literal, $family:ident, element = [$($element:ident)?], is_varlena = $is_varlena:expr, has_equality = $has_equality:expr) ),* $(,)? ) => {
        [ $( $crate::PgType::$variant ),* ]
    };
}
