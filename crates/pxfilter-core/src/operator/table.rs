use crate::operator::{
    MembershipEntry, OperatorEntry,
    PushdownOp::{self, Eq, Ge, Gt, In, Le, Like, Lt, Ne, NotIn, NotLike},
};
use pxfilter_primitives::Oid;

const fn op(opno: Oid, name: &'static str, op: PushdownOp) -> OperatorEntry {
    OperatorEntry { opno, name, op }
}

const fn any(opno: Oid, name: &'static str) -> MembershipEntry {
    MembershipEntry {
        opno,
        name,
        op: In,
        use_or: true,
    }
}

const fn all(opno: Oid, name: &'static str) -> MembershipEntry {
    MembershipEntry {
        opno,
        name,
        op: NotIn,
        use_or: false,
    }
}

/// Binary comparison operators, grouped by operand type family.
pub(super) static COMPARISON_OPERATORS: &[OperatorEntry] = &[
    // int2
    op(94, "int2eq", Eq),
    op(95, "int2lt", Lt),
    op(520, "int2gt", Gt),
    op(522, "int2le", Le),
    op(524, "int2ge", Ge),
    op(519, "int2ne", Ne),
    // int4
    op(96, "int4eq", Eq),
    op(97, "int4lt", Lt),
    op(521, "int4gt", Gt),
    op(523, "int4le", Le),
    op(525, "int4ge", Ge),
    op(518, "int4ne", Ne),
    // int8
    op(410, "int8eq", Eq),
    op(412, "int8lt", Lt),
    op(413, "int8gt", Gt),
    op(414, "int8le", Le),
    op(415, "int8ge", Ge),
    op(411, "int8ne", Ne),
    // text
    op(98, "texteq", Eq),
    op(664, "text_lt", Lt),
    op(666, "text_gt", Gt),
    op(665, "text_le", Le),
    op(667, "text_ge", Ge),
    op(531, "textne", Ne),
    op(1209, "textlike", Like),
    op(1210, "textnlike", NotLike),
    // int2 vs int4
    op(532, "int24eq", Eq),
    op(534, "int24lt", Lt),
    op(536, "int24gt", Gt),
    op(540, "int24le", Le),
    op(542, "int24ge", Ge),
    op(538, "int24ne", Ne),
    // int4 vs int2
    op(533, "int42eq", Eq),
    op(535, "int42lt", Lt),
    op(537, "int42gt", Gt),
    op(541, "int42le", Le),
    op(543, "int42ge", Ge),
    op(539, "int42ne", Ne),
    // int8 vs int4
    op(416, "int84eq", Eq),
    op(418, "int84lt", Lt),
    op(419, "int84gt", Gt),
    op(420, "int84le", Le),
    op(430, "int84ge", Ge),
    op(417, "int84ne", Ne),
    // int4 vs int8
    op(15, "int48eq", Eq),
    op(37, "int48lt", Lt),
    op(76, "int48gt", Gt),
    op(80, "int48le", Le),
    op(82, "int48ge", Ge),
    op(36, "int48ne", Ne),
    // int2 vs int8
    op(1862, "int28eq", Eq),
    op(1864, "int28lt", Lt),
    op(1865, "int28gt", Gt),
    op(1866, "int28le", Le),
    op(1867, "int28ge", Ge),
    op(1863, "int28ne", Ne),
    // int8 vs int2
    op(1868, "int82eq", Eq),
    op(1870, "int82lt", Lt),
    op(1871, "int82gt", Gt),
    op(1872, "int82le", Le),
    op(1873, "int82ge", Ge),
    op(1869, "int82ne", Ne),
    // date
    op(1093, "date_eq", Eq),
    op(1095, "date_lt", Lt),
    op(1097, "date_gt", Gt),
    op(1096, "date_le", Le),
    op(1098, "date_ge", Ge),
    op(1094, "date_ne", Ne),
    // timestamp
    op(2060, "timestamp_eq", Eq),
    op(2062, "timestamp_lt", Lt),
    op(2064, "timestamp_gt", Gt),
    op(2063, "timestamp_le", Le),
    op(2065, "timestamp_ge", Ge),
    op(2061, "timestamp_ne", Ne),
    // float8
    op(670, "float8eq", Eq),
    op(672, "float8lt", Lt),
    op(674, "float8gt", Gt),
    op(673, "float8le", Le),
    op(675, "float8ge", Ge),
    op(671, "float8ne", Ne),
    // float4 vs float8
    op(1120, "float48eq", Eq),
    op(1122, "float48lt", Lt),
    op(1123, "float48gt", Gt),
    op(1124, "float48le", Le),
    op(1125, "float48ge", Ge),
    op(1121, "float48ne", Ne),
    // float8 vs float4
    op(1130, "float84eq", Eq),
    op(1132, "float84lt", Lt),
    op(1133, "float84gt", Gt),
    op(1134, "float84le", Le),
    op(1135, "float84ge", Ge),
    op(1131, "float84ne", Ne),
    // float4
    op(620, "float4eq", Eq),
    op(622, "float4lt", Lt),
    op(623, "float4gt", Gt),
    op(624, "float4le", Le),
    op(625, "float4ge", Ge),
    op(621, "float4ne", Ne),
    // bool
    op(91, "booleq", Eq),
    op(58, "boollt", Lt),
    op(59, "boolgt", Gt),
    op(1694, "boolle", Le),
    op(1695, "boolge", Ge),
    op(85, "boolne", Ne),
    // bpchar
    op(1054, "bpchareq", Eq),
    op(1058, "bpcharlt", Lt),
    op(1060, "bpchargt", Gt),
    op(1059, "bpcharle", Le),
    op(1061, "bpcharge", Ge),
    op(1057, "bpcharne", Ne),
    op(1211, "bpcharlike", Like),
    op(1212, "bpcharnlike", NotLike),
    // numeric
    op(1752, "numeric_eq", Eq),
    op(1754, "numeric_lt", Lt),
    op(1756, "numeric_gt", Gt),
    op(1755, "numeric_le", Le),
    op(1757, "numeric_ge", Ge),
    op(1753, "numeric_ne", Ne),
    // any array
    op(super::ARRAY_EQ_OP, "array_eq", Eq),
    op(super::ARRAY_NE_OP, "array_ne", Ne),
    // bytea
    op(1955, "byteaeq", Eq),
    op(1957, "bytealt", Lt),
    op(1959, "byteagt", Gt),
    op(1958, "byteale", Le),
    op(1960, "byteage", Ge),
    op(1956, "byteane", Ne),
    op(2016, "bytealike", Like),
    op(2017, "byteanlike", NotLike),
    // time
    op(1108, "time_eq", Eq),
    op(1110, "time_lt", Lt),
    op(1112, "time_gt", Gt),
    op(1111, "time_le", Le),
    op(1113, "time_ge", Ge),
    op(1109, "time_ne", Ne),
    // timestamptz
    op(1320, "timestamptz_eq", Eq),
    op(1322, "timestamptz_lt", Lt),
    op(1324, "timestamptz_gt", Gt),
    op(1323, "timestamptz_le", Le),
    op(1325, "timestamptz_ge", Ge),
    op(1321, "timestamptz_ne", Ne),
    // interval
    op(1330, "interval_eq", Eq),
    op(1332, "interval_lt", Lt),
    op(1334, "interval_gt", Gt),
    op(1333, "interval_le", Le),
    op(1335, "interval_ge", Ge),
    op(1331, "interval_ne", Ne),
    // uuid
    op(2972, "uuid_eq", Eq),
    op(2974, "uuid_lt", Lt),
    op(2975, "uuid_gt", Gt),
    op(2976, "uuid_le", Le),
    op(2977, "uuid_ge", Ge),
    op(2973, "uuid_ne", Ne),
    // jsonb
    op(3240, "jsonb_eq", Eq),
    op(3242, "jsonb_lt", Lt),
    op(3243, "jsonb_gt", Gt),
    op(3244, "jsonb_le", Le),
    op(3245, "jsonb_ge", Ge),
    op(3241, "jsonb_ne", Ne),
];

/// `= ANY (...)` pushes as IN, `<> ALL (...)` as NOT IN.
pub(super) static MEMBERSHIP_OPERATORS: &[MembershipEntry] = &[
    any(94, "int2eq"),
    all(519, "int2ne"),
    any(96, "int4eq"),
    all(518, "int4ne"),
    any(410, "int8eq"),
    all(411, "int8ne"),
    any(98, "texteq"),
    all(531, "textne"),
    any(532, "int24eq"),
    all(538, "int24ne"),
    any(533, "int42eq"),
    all(539, "int42ne"),
    any(416, "int84eq"),
    all(417, "int84ne"),
    any(15, "int48eq"),
    all(36, "int48ne"),
    any(1862, "int28eq"),
    all(1863, "int28ne"),
    any(1868, "int82eq"),
    all(1869, "int82ne"),
    any(1093, "date_eq"),
    all(1094, "date_ne"),
    any(2060, "timestamp_eq"),
    all(2061, "timestamp_ne"),
    any(670, "float8eq"),
    all(671, "float8ne"),
    any(1120, "float48eq"),
    all(1121, "float48ne"),
    any(1130, "float84eq"),
    all(1131, "float84ne"),
    any(620, "float4eq"),
    all(621, "float4ne"),
    any(1054, "bpchareq"),
    all(1057, "bpcharne"),
    any(91, "booleq"),
    all(85, "boolne"),
    any(1955, "byteaeq"),
    all(1956, "byteane"),
    any(1108, "time_eq"),
    all(1109, "time_ne"),
    any(1320, "timestamptz_eq"),
    all(1321, "timestamptz_ne"),
    any(1330, "interval_eq"),
    all(1331, "interval_ne"),
    any(1752, "numeric_eq"),
    all(1753, "numeric_ne"),
    any(2972, "uuid_eq"),
    all(2973, "uuid_ne"),
    any(3240, "jsonb_eq"),
    all(3241, "jsonb_ne"),
];
