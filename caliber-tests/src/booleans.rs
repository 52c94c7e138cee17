use crate::error_kind;
use caliber_core::{BindOptions, DataType, Dialect, Value};

pub fn booleans(dialect: &dyn Dialect) {
    let options = BindOptions::new(dialect);
    let boolean = DataType::boolean()
        .to_dialect_data_type(dialect)
        .expect("BOOLEAN must be supported by every dialect");

    boolean.validate(&true.into()).expect("true is a boolean");
    boolean.validate(&false.into()).expect("false is a boolean");
    let error = boolean
        .validate(&1.into())
        .expect_err("Validation does not coerce numbers");
    assert!(error_kind(&error).is_validation());
    assert!(boolean.validate(&"true".into()).is_err());

    // Lenient sanitize
    assert_eq!(boolean.sanitize(1.into()).unwrap(), Value::Boolean(true));
    assert_eq!(boolean.sanitize(0.into()).unwrap(), Value::Boolean(false));
    assert_eq!(
        boolean.sanitize(Value::Bytes([1].into())).unwrap(),
        Value::Boolean(true)
    );
    assert_eq!(
        boolean.sanitize(Value::Bytes([0].into())).unwrap(),
        Value::Boolean(false)
    );
    assert_eq!(boolean.sanitize("yes".into()).unwrap(), Value::from("yes"));

    // Most lenient parse
    for raw in [
        Value::Number(1.0),
        Value::from("1"),
        Value::from("t"),
        Value::from("true"),
        Value::BigInt(1),
        Value::Bytes([1].into()),
    ] {
        assert_eq!(
            boolean.parse(raw.clone(), dialect).unwrap(),
            Value::Boolean(true),
            "{raw} must parse as true"
        );
    }
    for raw in [
        Value::Number(0.0),
        Value::from("0"),
        Value::from("f"),
        Value::from("false"),
        Value::BigInt(0),
    ] {
        assert_eq!(
            boolean.parse(raw.clone(), dialect).unwrap(),
            Value::Boolean(false),
            "{raw} must parse as false"
        );
    }
    assert_eq!(boolean.parse(Value::Null, dialect).unwrap(), Value::Null);
    let error = boolean
        .parse("maybe".into(), dialect)
        .expect_err("maybe is not a boolean");
    assert!(error_kind(&error).is_validation());
    assert!(error.to_string().contains("maybe"));

    assert_eq!(
        boolean.escape(&true.into(), &options).unwrap(),
        dialect.escape_bool(true)
    );
    assert_eq!(
        boolean.escape(&false.into(), &options).unwrap(),
        dialect.escape_bool(false)
    );
    assert!(boolean.escape(&"true".into(), &options).is_err());
}
