//! The fixed enumeration of supported SQL type codes.
//!
//! The numeric values are the JDBC-style type constants the database catalog
//! reports for each column. [`TypeCode::from_code`] is the single place where
//! raw catalog codes enter the typed world; everything downstream matches on
//! the enum, so adding a variant forces every converter to handle it.

use std::fmt;

/// SQL type codes supported by the conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// Single bit, treated as boolean.
    Bit,
    /// 8-bit integer.
    TinyInt,
    /// 16-bit integer.
    SmallInt,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInt,
    /// Approximate numeric, 64-bit.
    Float,
    /// Single-precision float, 32-bit.
    Real,
    /// Double-precision float, 64-bit.
    Double,
    /// Exact fixed-point numeric.
    Numeric,
    /// Exact fixed-point decimal.
    Decimal,
    /// Fixed-length character.
    Char,
    /// Variable-length character.
    Varchar,
    /// Long variable-length character.
    LongVarchar,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time.
    Timestamp,
    /// Fixed-length binary.
    Binary,
    /// Variable-length binary.
    Varbinary,
    /// Long variable-length binary.
    LongVarbinary,
    /// Boolean.
    Boolean,
    /// Fixed-length national character.
    NChar,
    /// Variable-length national character.
    NVarchar,
    /// Long variable-length national character.
    LongNVarchar,
    /// Delimited string array extension for list-typed columns.
    Array,
}

impl TypeCode {
    /// The JDBC-style numeric constant for this type.
    pub const fn code(self) -> i32 {
        match self {
            TypeCode::Bit => -7,
            TypeCode::TinyInt => -6,
            TypeCode::SmallInt => 5,
            TypeCode::Integer => 4,
            TypeCode::BigInt => -5,
            TypeCode::Float => 6,
            TypeCode::Real => 7,
            TypeCode::Double => 8,
            TypeCode::Numeric => 2,
            TypeCode::Decimal => 3,
            TypeCode::Char => 1,
            TypeCode::Varchar => 12,
            TypeCode::LongVarchar => -1,
            TypeCode::Date => 91,
            TypeCode::Time => 92,
            TypeCode::Timestamp => 93,
            TypeCode::Binary => -2,
            TypeCode::Varbinary => -3,
            TypeCode::LongVarbinary => -4,
            TypeCode::Boolean => 16,
            TypeCode::NChar => -15,
            TypeCode::NVarchar => -9,
            TypeCode::LongNVarchar => -16,
            TypeCode::Array => 2003,
        }
    }

    /// Look up the variant for a catalog-reported code.
    ///
    /// Returns `None` for any code outside the supported universe
    /// (BLOB 2004, CLOB 2005, TIMESTAMP_WITH_TIMEZONE 2014, OTHER 1111, ...).
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -7 => Some(TypeCode::Bit),
            -6 => Some(TypeCode::TinyInt),
            5 => Some(TypeCode::SmallInt),
            4 => Some(TypeCode::Integer),
            -5 => Some(TypeCode::BigInt),
            6 => Some(TypeCode::Float),
            7 => Some(TypeCode::Real),
            8 => Some(TypeCode::Double),
            2 => Some(TypeCode::Numeric),
            3 => Some(TypeCode::Decimal),
            1 => Some(TypeCode::Char),
            12 => Some(TypeCode::Varchar),
            -1 => Some(TypeCode::LongVarchar),
            91 => Some(TypeCode::Date),
            92 => Some(TypeCode::Time),
            93 => Some(TypeCode::Timestamp),
            -2 => Some(TypeCode::Binary),
            -3 => Some(TypeCode::Varbinary),
            -4 => Some(TypeCode::LongVarbinary),
            16 => Some(TypeCode::Boolean),
            -15 => Some(TypeCode::NChar),
            -9 => Some(TypeCode::NVarchar),
            -16 => Some(TypeCode::LongNVarchar),
            2003 => Some(TypeCode::Array),
            _ => None,
        }
    }

    /// SQL name of this type, for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeCode::Bit => "BIT",
            TypeCode::TinyInt => "TINYINT",
            TypeCode::SmallInt => "SMALLINT",
            TypeCode::Integer => "INTEGER",
            TypeCode::BigInt => "BIGINT",
            TypeCode::Float => "FLOAT",
            TypeCode::Real => "REAL",
            TypeCode::Double => "DOUBLE",
            TypeCode::Numeric => "NUMERIC",
            TypeCode::Decimal => "DECIMAL",
            TypeCode::Char => "CHAR",
            TypeCode::Varchar => "VARCHAR",
            TypeCode::LongVarchar => "LONGVARCHAR",
            TypeCode::Date => "DATE",
            TypeCode::Time => "TIME",
            TypeCode::Timestamp => "TIMESTAMP",
            TypeCode::Binary => "BINARY",
            TypeCode::Varbinary => "VARBINARY",
            TypeCode::LongVarbinary => "LONGVARBINARY",
            TypeCode::Boolean => "BOOLEAN",
            TypeCode::NChar => "NCHAR",
            TypeCode::NVarchar => "NVARCHAR",
            TypeCode::LongNVarchar => "LONGNVARCHAR",
            TypeCode::Array => "ARRAY",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
