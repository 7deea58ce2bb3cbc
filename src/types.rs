use std::collections::HashMap;

/// Wire-level type tag from the query protocol's closed type set.
///
/// String forms follow the wire names (`NULL_TYPE`, `VARCHAR`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    NullType,
    Varchar,
    Varbinary,
    Int64,
    Uint64,
    Float64,
    Decimal,
    Tuple,
}

/// A type tag plus its canonical payload bytes.
///
/// The tag fully determines how the payload is interpreted. Numeric
/// kinds carry decimal ASCII text; `Varchar` carries UTF-8; `Varbinary`
/// carries raw bytes; `NullType` carries an empty payload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TypedValue {
    pub field_type: FieldType,
    pub value: Vec<u8>,
}

impl TypedValue {
    pub fn new(field_type: FieldType, value: impl Into<Vec<u8>>) -> Self {
        Self {
            field_type,
            value: value.into(),
        }
    }

    /// The empty `NULL_TYPE` value.
    pub fn null() -> Self {
        Self {
            field_type: FieldType::NullType,
            value: Vec::new(),
        }
    }
}

/// One bind slot of a query: either a single typed value or an ordered
/// tuple of typed values (the protocol's list bind variable).
///
/// The protocol has no recursive tuple type, so nesting is
/// unrepresentable by construction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum BindVariable {
    Single(TypedValue),
    Tuple(Vec<TypedValue>),
}

/// A query string together with its encoded bind variables, ready to be
/// serialized by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BoundQuery {
    pub sql: String,
    pub bind_variables: HashMap<String, BindVariable>,
}

/// The fixed vtrpc status code enumeration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcCode {
    Ok,
    Canceled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl RpcCode {
    /// Maps a numeric vtrpc code to its enum variant, `None` for
    /// numbers outside the known enumeration.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::Canceled),
            2 => Some(Self::Unknown),
            3 => Some(Self::InvalidArgument),
            4 => Some(Self::DeadlineExceeded),
            5 => Some(Self::NotFound),
            6 => Some(Self::AlreadyExists),
            7 => Some(Self::PermissionDenied),
            8 => Some(Self::ResourceExhausted),
            9 => Some(Self::FailedPrecondition),
            10 => Some(Self::Aborted),
            11 => Some(Self::OutOfRange),
            12 => Some(Self::Unimplemented),
            13 => Some(Self::Internal),
            14 => Some(Self::Unavailable),
            15 => Some(Self::DataLoss),
            16 => Some(Self::Unauthenticated),
            _ => None,
        }
    }

    pub fn as_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Canceled => 1,
            Self::Unknown => 2,
            Self::InvalidArgument => 3,
            Self::DeadlineExceeded => 4,
            Self::NotFound => 5,
            Self::AlreadyExists => 6,
            Self::PermissionDenied => 7,
            Self::ResourceExhausted => 8,
            Self::FailedPrecondition => 9,
            Self::Aborted => 10,
            Self::OutOfRange => 11,
            Self::Unimplemented => 12,
            Self::Internal => 13,
            Self::Unavailable => 14,
            Self::DataLoss => 15,
            Self::Unauthenticated => 16,
        }
    }
}

/// An application-level error returned by VTGate, as received from the
/// transport layer. The message may embed `(errno N)` and
/// `(sqlstate XXXXX)` tags, an informal but stable server convention.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct RpcError {
    pub code: RpcCode,
    pub message: String,
}

impl RpcError {
    pub fn new(code: RpcCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
