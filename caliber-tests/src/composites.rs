use crate::error_kind;
use caliber_core::{DataType, Dialect, EnumType, TypeKind, Value};
#[cfg(any(not(feature = "disable-ranges"), not(feature = "disable-arrays")))]
use caliber_core::BindOptions;
#[cfg(not(feature = "disable-arrays"))]
use caliber_core::{DataTypeId, is_array_of};
#[cfg(not(feature = "disable-ranges"))]
use caliber_core::RangeOptions;

pub fn enums(dialect: &dyn Dialect) {
    let status = DataType::enumeration(["active", "archived"])
        .expect("A list of strings is a valid ENUM")
        .to_dialect_data_type(dialect)
        .expect("ENUM must be supported by every dialect");
    let TypeKind::Enum(options) = status.kind() else {
        panic!("Expected an ENUM, got {status}");
    };
    assert_eq!(options.values(), ["active", "archived"]);
    status.validate(&"active".into()).expect("A member is valid");
    let error = status
        .validate(&"deleted".into())
        .expect_err("Only members are valid");
    assert!(error_kind(&error).is_validation());
    assert_eq!(
        error.to_string(),
        "'deleted' is not a valid choice for enum [ 'active', 'archived' ]"
    );
    assert!(status.validate(&1.into()).is_err());

    let error = DataType::enumeration(Vec::<String>::new())
        .expect_err("An ENUM needs at least one member");
    assert!(error_kind(&error).is_configuration());
    let error = EnumType::new([Value::from("a"), Value::from(1)])
        .expect_err("ENUM members are strings");
    assert!(error_kind(&error).is_configuration());
}

#[cfg(not(feature = "disable-ranges"))]
pub fn ranges(dialect: &dyn Dialect) {
    let options = BindOptions::new(dialect);

    let integers = DataType::range_with(RangeOptions::default());
    assert_eq!(integers.to_string(), "RANGE(INTEGER)");
    let integers = integers
        .to_dialect_data_type(dialect)
        .expect("RANGE must be supported");
    assert_eq!(
        integers.to_bindable_value(&Value::array([1, 10]), &options).unwrap(),
        Value::from("[1,10)")
    );
    assert_eq!(
        integers
            .to_bindable_value(&Value::Array(Vec::new()), &options)
            .unwrap(),
        Value::from("empty")
    );
    assert_eq!(
        integers
            .to_bindable_value(
                &Value::array([
                    Value::map([("value", Value::Null), ("inclusive", Value::from(false))]),
                    Value::map([("value", Value::from(5)), ("inclusive", Value::from(true))]),
                ]),
                &options
            )
            .unwrap(),
        Value::from("(,5]")
    );

    let dates = DataType::range(DataType::date())
        .to_dialect_data_type(dialect)
        .expect("RANGE(DATE) must be supported");
    assert_eq!(dates.sanitize(Value::Array(Vec::new())).unwrap(), Value::Array(Vec::new()));
    assert_eq!(
        dates.sanitize(Value::array([Value::Null, Value::Null])).unwrap(),
        Value::array([
            Value::map([("value", Value::Null), ("inclusive", Value::from(true))]),
            Value::map([("value", Value::Null), ("inclusive", Value::from(false))]),
        ])
    );
    assert_eq!(
        dates.sanitize(Value::from("[2024-01-01,)")).unwrap(),
        Value::from("[2024-01-01,)"),
        "Non arrays are left to validation"
    );
    let error = dates
        .validate(&Value::array(["2024-01-01"]))
        .expect_err("A single bound is not a range");
    assert!(error_kind(&error).is_validation());
    assert!(error.to_string().starts_with("A range must either be an array with two elements"));
    dates
        .validate(&Value::array([Value::from("2024-01-01"), Value::Null]))
        .expect("Unbounded ranges are valid");
    assert!(
        dates
            .validate(&Value::array(["2024-01-01", "someday"]))
            .is_err()
    );

    let parsed = integers
        .parse("[1,10)".into(), dialect)
        .expect("Could not parse a range literal");
    assert_eq!(
        parsed,
        Value::array([
            Value::map([("value", Value::from(1)), ("inclusive", Value::from(true))]),
            Value::map([("value", Value::from(10)), ("inclusive", Value::from(false))]),
        ])
    );
    assert_eq!(
        integers.parse("empty".into(), dialect).unwrap(),
        Value::Array(Vec::new())
    );
}

#[cfg(not(feature = "disable-arrays"))]
pub fn arrays(dialect: &dyn Dialect) {
    let options = BindOptions::new(dialect);
    let decimals = DataType::array(DataType::decimal(10, 2))
        .to_dialect_data_type(dialect)
        .expect("ARRAY must be supported");
    assert!(is_array_of(&decimals, DataTypeId::Decimal));
    assert!(!is_array_of(&decimals, DataTypeId::Integer));
    assert!(!is_array_of(&DataType::decimal(10, 2), DataTypeId::Decimal));

    decimals
        .validate(&Value::array(["1.5", "2"]))
        .expect("Every element is a decimal");
    let error = decimals
        .validate(&Value::array([Value::from(1), Value::from(2), Value::from("x")]))
        .expect_err("The third element is not a decimal");
    assert!(error_kind(&error).is_validation());
    assert!(format!("{error:#}").contains("Element 2"));
    assert!(decimals.validate(&"1.5".into()).is_err());

    let integers = DataType::array(DataType::integer())
        .to_dialect_data_type(dialect)
        .expect("ARRAY(INTEGER) must be supported");
    assert_eq!(
        integers.sanitize(Value::array(["1", "2"])).unwrap(),
        Value::array([1, 2])
    );
    assert!(integers.are_values_equal(&Value::array([1, 2]), &Value::array([1, 2])));
    assert!(!integers.are_values_equal(&Value::array([1, 2]), &Value::array([1])));
    assert_eq!(
        integers
            .to_bindable_value(&Value::array([Value::from(1), Value::Null]), &options)
            .unwrap(),
        Value::array([Value::from(1), Value::Null])
    );
    let escaped = integers
        .escape(&Value::array([Value::from(1), Value::Null]), &options)
        .expect("Could not escape an array");
    assert!(escaped.starts_with("ARRAY[1,NULL]"), "Unexpected {escaped}");
}
