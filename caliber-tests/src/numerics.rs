use crate::error_kind;
use caliber_core::{
    BindOptions, DataType, DecimalOptions, Dialect, FloatType, IntegerType, MAX_SAFE_INTEGER,
    TypeKind, Value,
};
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn numerics(dialect: &dyn Dialect) {
    let options = BindOptions::new(dialect);

    // Integer
    let integer = DataType::integer()
        .to_dialect_data_type(dialect)
        .expect("INTEGER must be supported by every dialect");
    assert_eq!(integer.sanitize("42".into()).unwrap(), Value::Number(42.0));
    assert_eq!(
        integer.sanitize("not a number".into()).unwrap(),
        Value::from("not a number")
    );
    assert_eq!(
        integer.sanitize(Value::BigInt(7)).unwrap(),
        Value::Number(7.0)
    );
    let sanitized = integer.sanitize("-13".into()).unwrap();
    assert_eq!(integer.sanitize(sanitized.clone()).unwrap(), sanitized);
    integer.validate(&42.into()).expect("42 is an integer");
    integer.validate(&"-42".into()).expect("-42 is an integer string");
    integer
        .validate(&Value::Number(MAX_SAFE_INTEGER as f64))
        .expect("The largest safe integer is valid");
    let error = integer
        .validate(&Value::Number(MAX_SAFE_INTEGER as f64 + 2.0))
        .expect_err("Unsafe integers are rejected");
    assert!(error_kind(&error).is_validation());
    assert!(integer.validate(&4.5.into()).is_err());
    assert!(integer.validate(&"4.5".into()).is_err());
    assert_eq!(integer.escape(&42.into(), &options).unwrap(), "42");
    assert_eq!(integer.escape(&"-7".into(), &options).unwrap(), "-7");
    assert!(integer.escape(&"7; DROP TABLE users".into(), &options).is_err());

    // Placeholders
    let mut bound = Vec::new();
    let token = integer
        .bind_param(&42.into(), &options, &mut |v: Value| {
            bound.push(v);
            dialect.placeholder(bound.len())
        })
        .expect("Could not bind 42");
    assert_eq!(token, dialect.placeholder(1));
    assert_eq!(bound, [Value::Number(42.0)]);

    // Big integer
    let bigint = DataType::bigint()
        .to_dialect_data_type(dialect)
        .expect("BIGINT must be supported by every dialect");
    assert_eq!(bigint.sanitize(123.into()).unwrap(), Value::from("123"));
    assert_eq!(
        bigint.sanitize("9007199254740993".into()).unwrap(),
        Value::from("9007199254740993")
    );
    assert_eq!(
        bigint.sanitize(Value::BigInt(i64::MAX as i128 + 1)).unwrap(),
        Value::BigInt(i64::MAX as i128 + 1)
    );
    let sanitized = bigint.sanitize(Value::Number(-5.0)).unwrap();
    assert_eq!(sanitized, Value::from("-5"));
    assert_eq!(bigint.sanitize(sanitized.clone()).unwrap(), sanitized);
    bigint
        .validate(&"9007199254740993".into())
        .expect("Large integer strings are valid BIGINT");
    assert_eq!(
        bigint
            .escape(&"9007199254740993".into(), &options)
            .unwrap(),
        "9007199254740993"
    );

    // Unsigned
    let unsigned = DataType::integer().unsigned().expect("INTEGER has an UNSIGNED variant");
    assert!(matches!(unsigned.kind(), TypeKind::Integer(IntegerType { unsigned: true, .. })));
    assert!(matches!(integer.kind(), TypeKind::Integer(IntegerType { unsigned: false, .. })));
    assert!(unsigned.validate(&(-1).into()).is_err());
    unsigned.validate(&1.into()).expect("1 is a valid unsigned integer");

    // Float
    let float = DataType::from(FloatType::new())
        .to_dialect_data_type(dialect)
        .expect("FLOAT must be supported by every dialect");
    float.validate(&f64::NAN.into()).expect("NaN is a valid FLOAT");
    float
        .validate(&f64::NEG_INFINITY.into())
        .expect("-Infinity is a valid FLOAT");
    assert_eq!(float.sanitize("1.5".into()).unwrap(), Value::Number(1.5));
    assert_eq!(
        float.to_bindable_value(&f64::NAN.into(), &options).unwrap(),
        Value::from("NaN")
    );
    assert_eq!(
        float
            .to_bindable_value(&f64::INFINITY.into(), &options)
            .unwrap(),
        Value::from("Infinity")
    );
    assert_eq!(
        float
            .to_bindable_value(&f64::NEG_INFINITY.into(), &options)
            .unwrap(),
        Value::from("-Infinity")
    );
    assert_eq!(
        float.escape(&f64::INFINITY.into(), &options).unwrap(),
        dialect.escape_string("Infinity")
    );
    assert_eq!(float.escape(&1.25.into(), &options).unwrap(), "1.25");
    assert!(float.validate(&"one".into()).is_err());

    // Decimal
    let error = DataType::decimal_with(DecimalOptions {
        precision: Some(10),
        ..Default::default()
    })
    .expect_err("Precision without scale is a configuration error");
    assert!(error_kind(&error).is_configuration());
    let decimal = DataType::decimal(10, 2)
        .to_dialect_data_type(dialect)
        .expect("DECIMAL(10,2) must be supported by every dialect");
    decimal.validate(&"12.34".into()).expect("12.34 is a decimal");
    decimal
        .validate(&Decimal::from_str("12.34").unwrap().into())
        .expect("A decimal is a decimal");
    assert!(decimal.validate(&"x".into()).is_err());
    assert!(decimal.validate(&f64::NAN.into()).is_err());
    assert_eq!(decimal.escape(&"12.34".into(), &options).unwrap(), "12.34");
    let unconstrained = DataType::decimal_unconstrained().to_dialect_data_type(dialect);
    #[cfg(feature = "disable-unconstrained-decimal")]
    {
        let error = unconstrained.expect_err("Unconstrained DECIMAL is not supported");
        assert!(error_kind(&error).is_capability());
    }
    #[cfg(not(feature = "disable-unconstrained-decimal"))]
    assert_eq!(
        unconstrained
            .expect("Unconstrained DECIMAL must be supported")
            .to_sql(dialect)
            .unwrap(),
        "DECIMAL"
    );

    // Zerofill
    let zerofill = DataType::integer()
        .zerofill()
        .expect("INTEGER has a ZEROFILL variant")
        .to_dialect_data_type(dialect);
    #[cfg(feature = "disable-zerofill")]
    assert!(error_kind(&zerofill.expect_err("ZEROFILL is not supported")).is_capability());
    #[cfg(not(feature = "disable-zerofill"))]
    assert_eq!(
        zerofill
            .expect("ZEROFILL must be supported")
            .to_sql(dialect)
            .unwrap(),
        "INTEGER ZEROFILL"
    );
}
