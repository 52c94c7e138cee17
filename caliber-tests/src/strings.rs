use crate::error_kind;
use caliber_core::{BindOptions, DataType, Dialect, StringType, Value};

pub fn strings(dialect: &dyn Dialect) {
    let options = BindOptions::new(dialect);
    let varchar = DataType::string_with(StringType::new().length(10))
        .to_dialect_data_type(dialect)
        .expect("STRING must be supported by every dialect");
    assert_eq!(varchar.to_sql(dialect).expect("VARCHAR declaration"), "VARCHAR(10)");
    assert_eq!(
        DataType::string()
            .to_dialect_data_type(dialect)
            .expect("STRING must be supported by every dialect")
            .to_sql(dialect)
            .expect("VARCHAR declaration"),
        "VARCHAR(255)"
    );

    varchar
        .validate(&"hello".into())
        .expect("A string is a valid STRING");
    let error = varchar
        .validate(&12.into())
        .expect_err("A number is not a valid STRING");
    assert!(error_kind(&error).is_validation());
    assert!(
        varchar.validate(&Value::Bytes([1, 2].into())).is_err(),
        "Bytes require a binary STRING"
    );

    // Escaping
    assert_eq!(
        varchar
            .escape(&"O'Brien".into(), &options)
            .expect("Could not escape O'Brien"),
        dialect.escape_string("O'Brien")
    );
    let injection = "'; DROP TABLE users; --";
    let escaped = varchar
        .escape(&injection.into(), &options)
        .expect("Could not escape the injection attempt");
    assert_eq!(escaped, dialect.escape_string(injection));
    assert!(escaped.starts_with('\'') && escaped.ends_with('\''));
    assert!(escaped.len() > injection.len() + 2, "The inner quote must be escaped");

    // Binary
    let binary = DataType::string()
        .binary()
        .expect("STRING has a BINARY variant")
        .to_dialect_data_type(dialect)
        .expect("Binary STRING must be supported");
    binary
        .validate(&Value::Bytes([0xCA, 0xFE].into()))
        .expect("Bytes are a valid binary STRING");
    binary
        .validate(&"text".into())
        .expect("Text is always a valid STRING");
    assert_eq!(
        binary
            .escape(&Value::Bytes([0xCA, 0xFE].into()), &options)
            .expect("Could not escape bytes"),
        dialect.escape_buffer(&[0xCA, 0xFE])
    );

    // Text size
    let error = DataType::text_sized("huge").expect_err("Only tiny, medium and long are sizes");
    assert!(error_kind(&error).is_configuration());
    assert!(DataType::text_sized("Medium").is_ok());
    let text = DataType::text()
        .to_dialect_data_type(dialect)
        .expect("TEXT must be supported by every dialect");
    text.validate(&"long text".into())
        .expect("A string is a valid TEXT");
    assert!(text.validate(&Value::Boolean(true)).is_err());
    assert!(DataType::integer().binary().is_err());
}

#[cfg(not(feature = "disable-network"))]
pub fn network(dialect: &dyn Dialect) {
    let options = BindOptions::new(dialect);
    let cidr = DataType::cidr()
        .to_dialect_data_type(dialect)
        .expect("CIDR must be supported");
    cidr.validate(&"10.0.0.0/8".into()).expect("Valid CIDR");
    cidr.validate(&"2001:db8::/32".into()).expect("Valid IPv6 CIDR");
    assert!(cidr.validate(&"10.0.0.0/33".into()).is_err());
    assert!(cidr.validate(&"10.0.0.0".into()).is_err());

    let inet = DataType::inet()
        .to_dialect_data_type(dialect)
        .expect("INET must be supported");
    inet.validate(&"192.168.1.1".into()).expect("Valid INET");
    assert!(inet.validate(&"192.168.1.256".into()).is_err());
    assert_eq!(
        inet.escape(&"::1".into(), &options)
            .expect("Could not escape an INET"),
        dialect.escape_string("::1")
    );

    let macaddr = DataType::macaddr()
        .to_dialect_data_type(dialect)
        .expect("MACADDR must be supported");
    macaddr
        .validate(&"08:00:2b:01:02:03".into())
        .expect("Valid MACADDR");
    macaddr
        .validate(&"08-00-2b-01-02-03".into())
        .expect("Valid MACADDR");
    assert!(macaddr.validate(&"08:00:2b:01:02".into()).is_err());
    assert!(macaddr.validate(&"08:00-2b:01:02:03".into()).is_err());
}
