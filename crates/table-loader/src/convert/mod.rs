//! Dialect value converters.
//!
//! Each variant implements [`ColumnConverter`] for one dialect's identifier
//! quoting and placeholder syntax; the type-directed text conversion table
//! itself is fixed and shared by all of them. Numeric parsing is
//! locale-invariant radix-10, binary fields are hex-encoded, and date/time
//! fields follow the configurable patterns in [`TextFormat`].

mod ansi;
mod mssql;
mod postgres;

pub use ansi::AnsiConverter;
pub use mssql::MssqlConverter;
pub use postgres::PostgresConverter;

use std::fmt;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc};
use rust_decimal::Decimal;

use crate::core::traits::ColumnConverter;
use crate::core::types::TypeCode;
use crate::core::value::SqlValue;
use crate::error::{LoadError, Result};

/// Textual formats used when parsing date/time fields.
///
/// The offset applies to TIMESTAMP interpretation only; DATE and TIME
/// convert to naive values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    /// chrono pattern for TIMESTAMP fields.
    pub datetime_format: String,

    /// chrono pattern for DATE fields.
    pub date_format: String,

    /// chrono pattern for TIME fields.
    pub time_format: String,

    /// Offset a parsed TIMESTAMP is interpreted in.
    pub timezone: FixedOffset,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            datetime_format: "%Y/%m/%d %H:%M:%S".to_string(),
            date_format: "%Y/%m/%d".to_string(),
            time_format: "%H:%M:%S".to_string(),
            timezone: Utc.fix(),
        }
    }
}

/// The shared conversion table: text in, native value out.
///
/// `None` converts to a typed NULL for every supported code; unsupported
/// codes fail either way.
fn convert_text(format: &TextFormat, type_code: i32, value: Option<&str>) -> Result<SqlValue> {
    let code = TypeCode::from_code(type_code)
        .ok_or_else(|| LoadError::conversion(format!("type code {}", type_code), "unsupported SQL type"))?;

    let Some(text) = value else {
        return Ok(SqlValue::Null(code));
    };

    match code {
        TypeCode::Integer => text
            .parse::<i32>()
            .map(SqlValue::I32)
            .map_err(|e| parse_err(code, text, e)),
        TypeCode::Boolean | TypeCode::Bit => Ok(SqlValue::Bool(text.eq_ignore_ascii_case("true"))),
        TypeCode::TinyInt => text
            .parse::<i8>()
            .map(SqlValue::I8)
            .map_err(|e| parse_err(code, text, e)),
        TypeCode::SmallInt => text
            .parse::<i16>()
            .map(SqlValue::I16)
            .map_err(|e| parse_err(code, text, e)),
        TypeCode::BigInt => text
            .parse::<i64>()
            .map(SqlValue::I64)
            .map_err(|e| parse_err(code, text, e)),
        TypeCode::Numeric | TypeCode::Decimal => Decimal::from_str_exact(text)
            .map(SqlValue::Decimal)
            .map_err(|e| parse_err(code, text, e)),
        TypeCode::Float | TypeCode::Double => text
            .parse::<f64>()
            .map(SqlValue::F64)
            .map_err(|e| parse_err(code, text, e)),
        TypeCode::Real => text
            .parse::<f32>()
            .map(SqlValue::F32)
            .map_err(|e| parse_err(code, text, e)),
        TypeCode::Time => NaiveTime::parse_from_str(text, &format.time_format)
            .map(SqlValue::Time)
            .map_err(|e| parse_err(code, text, e)),
        TypeCode::Date => NaiveDate::parse_from_str(text, &format.date_format)
            .map(SqlValue::Date)
            .map_err(|e| parse_err(code, text, e)),
        TypeCode::Timestamp => {
            let naive = NaiveDateTime::parse_from_str(text, &format.datetime_format)
                .map_err(|e| parse_err(code, text, e))?;
            naive
                .and_local_timezone(format.timezone)
                .single()
                .map(SqlValue::Timestamp)
                .ok_or_else(|| parse_err(code, text, "not a valid local time"))
        }
        TypeCode::Binary | TypeCode::Varbinary | TypeCode::LongVarbinary => hex::decode(text)
            .map(SqlValue::Bytes)
            .map_err(|e| parse_err(code, text, e)),
        TypeCode::Char
        | TypeCode::Varchar
        | TypeCode::LongVarchar
        | TypeCode::NChar
        | TypeCode::NVarchar
        | TypeCode::LongNVarchar => Ok(SqlValue::Text(text.to_string())),
        TypeCode::Array => Ok(SqlValue::TextArray(
            text.split(',').map(str::to_string).collect(),
        )),
    }
}

fn parse_err(code: TypeCode, text: &str, err: impl fmt::Display) -> LoadError {
    LoadError::conversion(format!("{} value {:?}", code, text), err.to_string())
}

/// Enum-based static dispatch over the shipped converter variants.
///
/// The compiler generates a match statement instead of vtable dispatch;
/// use this when the dialect is chosen at runtime (e.g. from configuration).
#[derive(Debug, Clone)]
pub enum ConverterImpl {
    Ansi(AnsiConverter),
    Mssql(MssqlConverter),
    Postgres(PostgresConverter),
}

impl ConverterImpl {
    /// Look up a variant by dialect name.
    pub fn from_name(name: &str, format: TextFormat) -> Option<Self> {
        match name {
            "ansi" => Some(ConverterImpl::Ansi(AnsiConverter::with_format(format))),
            "mssql" => Some(ConverterImpl::Mssql(MssqlConverter::with_format(format))),
            "postgres" => Some(ConverterImpl::Postgres(PostgresConverter::with_format(
                format,
            ))),
            _ => None,
        }
    }
}

impl ColumnConverter for ConverterImpl {
    fn name(&self) -> &str {
        match self {
            ConverterImpl::Ansi(c) => c.name(),
            ConverterImpl::Mssql(c) => c.name(),
            ConverterImpl::Postgres(c) => c.name(),
        }
    }

    fn convert(&self, type_code: i32, value: Option<&str>) -> Result<SqlValue> {
        match self {
            ConverterImpl::Ansi(c) => c.convert(type_code, value),
            ConverterImpl::Mssql(c) => c.convert(type_code, value),
            ConverterImpl::Postgres(c) => c.convert(type_code, value),
        }
    }

    fn wrap_column_name(&self, name: &str) -> String {
        match self {
            ConverterImpl::Ansi(c) => c.wrap_column_name(name),
            ConverterImpl::Mssql(c) => c.wrap_column_name(name),
            ConverterImpl::Postgres(c) => c.wrap_column_name(name),
        }
    }

    fn param_placeholder(&self, index: usize) -> String {
        match self {
            ConverterImpl::Ansi(c) => c.param_placeholder(index),
            ConverterImpl::Mssql(c) => c.param_placeholder(index),
            ConverterImpl::Postgres(c) => c.param_placeholder(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(type_code: TypeCode, value: &str) -> Result<SqlValue> {
        convert_text(&TextFormat::default(), type_code.code(), Some(value))
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(convert(TypeCode::Integer, "65535").unwrap(), SqlValue::I32(65535));
        assert_eq!(convert(TypeCode::Integer, "-1").unwrap(), SqlValue::I32(-1));
    }

    #[test]
    fn test_boolean_conversion() {
        assert_eq!(convert(TypeCode::Boolean, "true").unwrap(), SqlValue::Bool(true));
        assert_eq!(convert(TypeCode::Boolean, "TRUE").unwrap(), SqlValue::Bool(true));
        assert_eq!(convert(TypeCode::Boolean, "false").unwrap(), SqlValue::Bool(false));
        // Anything that is not "true" is false, as the reference parser does.
        assert_eq!(convert(TypeCode::Bit, "yes").unwrap(), SqlValue::Bool(false));
    }

    #[test]
    fn test_small_integer_conversions() {
        assert_eq!(convert(TypeCode::TinyInt, "7").unwrap(), SqlValue::I8(7));
        assert_eq!(convert(TypeCode::SmallInt, "1024").unwrap(), SqlValue::I16(1024));
        assert_eq!(
            convert(TypeCode::BigInt, "8589934592").unwrap(),
            SqlValue::I64(8_589_934_592)
        );
    }

    #[test]
    fn test_decimal_is_exact() {
        let value = convert(TypeCode::Decimal, "62.19").unwrap();
        assert_eq!(value, SqlValue::Decimal(Decimal::new(6219, 2)));

        let value = convert(TypeCode::Numeric, "31.14").unwrap();
        assert_eq!(value, SqlValue::Decimal(Decimal::new(3114, 2)));
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(convert(TypeCode::Double, "3.1415").unwrap(), SqlValue::F64(3.1415));
        assert_eq!(convert(TypeCode::Float, "1.4142").unwrap(), SqlValue::F64(1.4142));
        assert_eq!(convert(TypeCode::Real, "12.5").unwrap(), SqlValue::F32(12.5));
    }

    #[test]
    fn test_time_round_trip() {
        let SqlValue::Time(t) = convert(TypeCode::Time, "13:54:22").unwrap() else {
            panic!("expected a time value");
        };
        assert_eq!(t.format("%H:%M:%S").to_string(), "13:54:22");
    }

    #[test]
    fn test_date_round_trip() {
        let SqlValue::Date(d) = convert(TypeCode::Date, "2019/02/01").unwrap() else {
            panic!("expected a date value");
        };
        assert_eq!(d.format("%Y/%m/%d").to_string(), "2019/02/01");
    }

    #[test]
    fn test_timestamp_round_trip() {
        let SqlValue::Timestamp(ts) = convert(TypeCode::Timestamp, "2019/02/25 13:11:22").unwrap()
        else {
            panic!("expected a timestamp value");
        };
        assert_eq!(
            ts.format("%Y/%m/%d %H:%M:%S").to_string(),
            "2019/02/25 13:11:22"
        );
    }

    #[test]
    fn test_timestamp_respects_configured_offset() {
        let format = TextFormat {
            timezone: FixedOffset::east_opt(9 * 3600).expect("+09:00 is a valid offset"),
            ..TextFormat::default()
        };
        let value = convert_text(&format, TypeCode::Timestamp.code(), Some("2019/02/25 13:11:22"))
            .unwrap();
        let SqlValue::Timestamp(ts) = value else {
            panic!("expected a timestamp value");
        };
        assert_eq!(ts.offset().local_minus_utc(), 9 * 3600);
        assert_eq!(ts.format("%H:%M:%S").to_string(), "13:11:22");
    }

    #[test]
    fn test_binary_is_hex_decoded() {
        assert_eq!(
            convert(TypeCode::Varbinary, "deadBEEF").unwrap(),
            SqlValue::Bytes(vec![0xde, 0xad, 0xbe, 0xef])
        );
    }

    #[test]
    fn test_character_types_pass_through() {
        for code in [
            TypeCode::Char,
            TypeCode::Varchar,
            TypeCode::LongVarchar,
            TypeCode::NChar,
            TypeCode::NVarchar,
            TypeCode::LongNVarchar,
        ] {
            assert_eq!(
                convert(code, "line1").unwrap(),
                SqlValue::Text("line1".to_string())
            );
        }
    }

    #[test]
    fn test_array_splits_on_comma() {
        assert_eq!(
            convert(TypeCode::Array, "a,b,c").unwrap(),
            SqlValue::TextArray(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_null_equivalent_passes_through_untouched() {
        for code in [TypeCode::Integer, TypeCode::Varchar, TypeCode::Timestamp] {
            let value = convert_text(&TextFormat::default(), code.code(), None).unwrap();
            assert_eq!(value, SqlValue::Null(code));
        }
    }

    #[test]
    fn test_unsupported_type_code_fails() {
        // BLOB, CLOB, NCLOB, TIMESTAMP_WITH_TIMEZONE, OTHER
        for code in [2004, 2005, 2011, 2014, 1111] {
            let err = convert_text(&TextFormat::default(), code, Some("x")).unwrap_err();
            assert!(matches!(err, LoadError::Conversion { .. }), "code {}", code);
            assert!(err.to_string().contains(&code.to_string()));

            // A null input does not sneak past the type check either.
            let err = convert_text(&TextFormat::default(), code, None).unwrap_err();
            assert!(matches!(err, LoadError::Conversion { .. }));
        }
    }

    #[test]
    fn test_parse_failures_wrap_the_diagnostic() {
        let err = convert(TypeCode::Integer, "not-a-number").unwrap_err();
        assert!(matches!(err, LoadError::Conversion { .. }));
        assert!(err.to_string().contains("not-a-number"));

        let err = convert(TypeCode::Varbinary, "zz").unwrap_err();
        assert!(matches!(err, LoadError::Conversion { .. }));

        let err = convert(TypeCode::Date, "02-01-2019").unwrap_err();
        assert!(matches!(err, LoadError::Conversion { .. }));
    }

    #[test]
    fn test_converter_impl_from_name() {
        let ansi = ConverterImpl::from_name("ansi", TextFormat::default()).unwrap();
        assert_eq!(ansi.name(), "ansi");
        assert_eq!(ansi.wrap_column_name("col"), "col");

        let mssql = ConverterImpl::from_name("mssql", TextFormat::default()).unwrap();
        assert_eq!(mssql.wrap_column_name("col"), "[col]");
        assert_eq!(mssql.param_placeholder(2), "@p2");

        let pg = ConverterImpl::from_name("postgres", TextFormat::default()).unwrap();
        assert_eq!(pg.wrap_column_name("col"), "\"col\"");
        assert_eq!(pg.param_placeholder(2), "$2");

        assert!(ConverterImpl::from_name("oracle", TextFormat::default()).is_none());
    }
}
