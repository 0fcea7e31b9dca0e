//! Native SQL values produced by conversion.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use super::types::TypeCode;

/// A value ready for positional binding to a parameterized statement.
///
/// Values are always owned: every one of them is parsed out of the textual
/// row representation, so there is no source buffer to borrow from. NULL
/// carries the column's type code so a client can emit the correct wire
/// encoding for typed NULLs.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL with the type code it binds as.
    Null(TypeCode),

    /// Boolean value (BOOLEAN, BIT).
    Bool(bool),

    /// 8-bit signed integer (TINYINT).
    I8(i8),

    /// 16-bit signed integer (SMALLINT).
    I16(i16),

    /// 32-bit signed integer (INTEGER).
    I32(i32),

    /// 64-bit signed integer (BIGINT).
    I64(i64),

    /// 32-bit floating point (REAL).
    F32(f32),

    /// 64-bit floating point (FLOAT, DOUBLE).
    F64(f64),

    /// Exact decimal (NUMERIC, DECIMAL).
    Decimal(Decimal),

    /// Character data (CHAR, VARCHAR and friends).
    Text(String),

    /// Binary data (BINARY, VARBINARY and friends).
    Bytes(Vec<u8>),

    /// Calendar date without time component.
    Date(NaiveDate),

    /// Time of day without date component.
    Time(NaiveTime),

    /// Date and time, interpreted in the converter's configured offset.
    Timestamp(DateTime<FixedOffset>),

    /// String array for list-typed columns.
    TextArray(Vec<String>),
}

impl SqlValue {
    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null(_))
    }

    /// The type code this value binds as.
    #[must_use]
    pub fn type_code(&self) -> TypeCode {
        match self {
            SqlValue::Null(t) => *t,
            SqlValue::Bool(_) => TypeCode::Boolean,
            SqlValue::I8(_) => TypeCode::TinyInt,
            SqlValue::I16(_) => TypeCode::SmallInt,
            SqlValue::I32(_) => TypeCode::Integer,
            SqlValue::I64(_) => TypeCode::BigInt,
            SqlValue::F32(_) => TypeCode::Real,
            SqlValue::F64(_) => TypeCode::Double,
            SqlValue::Decimal(_) => TypeCode::Decimal,
            SqlValue::Text(_) => TypeCode::Varchar,
            SqlValue::Bytes(_) => TypeCode::Varbinary,
            SqlValue::Date(_) => TypeCode::Date,
            SqlValue::Time(_) => TypeCode::Time,
            SqlValue::Timestamp(_) => TypeCode::Timestamp,
            SqlValue::TextArray(_) => TypeCode::Array,
        }
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i8> for SqlValue {
    fn from(v: i8) -> Self {
        SqlValue::I8(v)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        SqlValue::I16(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::I32(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::I64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        SqlValue::F32(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::F64(v)
    }
}

impl From<Decimal> for SqlValue {
    fn from(v: Decimal) -> Self {
        SqlValue::Decimal(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(v: NaiveDate) -> Self {
        SqlValue::Date(v)
    }
}

impl From<NaiveTime> for SqlValue {
    fn from(v: NaiveTime) -> Self {
        SqlValue::Time(v)
    }
}

impl From<DateTime<FixedOffset>> for SqlValue {
    fn from(v: DateTime<FixedOffset>) -> Self {
        SqlValue::Timestamp(v)
    }
}
