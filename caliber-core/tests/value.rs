#[cfg(test)]
mod tests {
    use caliber_core::{AsValue, Foreign, MAX_SAFE_INTEGER, Value};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use time::macros::datetime;

    #[test]
    fn value_equality() {
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::Now, Value::Now);
        assert_ne!(Value::Null, Value::Boolean(false));
        assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_ne!(Value::Number(1.0), Value::BigInt(1));
        assert_ne!(Value::from("1"), Value::Number(1.0));
        let foreign = Foreign::new(5u8);
        assert_eq!(Value::Foreign(foreign.clone()), Value::Foreign(foreign));
        assert_ne!(
            Value::Foreign(Foreign::new(5u8)),
            Value::Foreign(Foreign::new(5u8))
        );
    }

    #[test]
    fn value_conversions() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(42i32), Value::Number(42.0));
        assert_eq!(Value::from(42u8), Value::Number(42.0));
        assert_eq!(Value::from(1.5f32), Value::Number(1.5));
        assert_eq!(Value::from(42i64), Value::BigInt(42));
        assert_eq!(Value::from("text"), Value::String("text".into()));
        assert_eq!(Value::from(vec![1u8, 2]), Value::Bytes([1, 2].into()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3i32)), Value::Number(3.0));

        assert_eq!(i64::try_from_value(Value::Number(7.0)).unwrap(), 7);
        assert_eq!(i64::try_from_value("-12".into()).unwrap(), -12);
        assert!(i64::try_from_value(Value::Number(0.5)).is_err());
        assert!(i64::try_from_value(Value::Number(MAX_SAFE_INTEGER as f64 * 4.0)).is_err());
        assert_eq!(f64::try_from_value(Value::BigInt(3)).unwrap(), 3.0);
        assert_eq!(
            Decimal::try_from_value("12.345".into()).unwrap(),
            Decimal::from_str("12.345").unwrap()
        );
        assert_eq!(
            Decimal::try_from_value(Value::BigInt(10)).unwrap(),
            Decimal::from(10)
        );
        assert!(bool::try_from_value(1.into()).is_err());
        assert_eq!(
            Option::<String>::try_from_value(Value::Null).unwrap(),
            None
        );
        assert!(String::try_from_value(Value::Bytes([].into())).is_err());
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(0.1).to_string(), "0.1");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::BigInt(9).to_string(), "9n");
        assert_eq!(Value::from("it").to_string(), "'it'");
        assert_eq!(Value::Bytes([0xca, 0xfe].into()).to_string(), "<Buffer ca fe>");
        assert_eq!(Value::array([1, 2]).to_string(), "[1, 2]");
        assert_eq!(
            Value::map([("a", 1), ("b", 2)]).to_string(),
            "{ a: 1, b: 2 }"
        );
        assert_eq!(Value::Map(Default::default()).to_string(), "{}");
        assert_eq!(Value::Foreign(Foreign::new(1u8)).to_string(), "[u8]");
        let long = "x".repeat(600);
        assert!(Value::from(long.as_str()).to_string().ends_with("...'"));
    }

    #[test]
    fn value_falsy() {
        assert!(Value::Null.is_falsy());
        assert!(Value::Boolean(false).is_falsy());
        assert!(Value::Number(0.0).is_falsy());
        assert!(Value::Number(f64::NAN).is_falsy());
        assert!(Value::BigInt(0).is_falsy());
        assert!(Value::from("").is_falsy());
        assert!(!Value::from("0").is_falsy());
        assert!(!Value::Array(Vec::new()).is_falsy());
        assert!(!Value::Now.is_falsy());
    }

    #[test]
    fn value_json() {
        let value = Value::map([
            ("int", Value::from(1)),
            ("float", Value::from(0.5)),
            ("big", Value::BigInt(1 << 60)),
            ("list", Value::array([Value::Null, Value::from(true)])),
            ("at", Value::Timestamp(datetime!(2024-01-02 03:04:05 UTC))),
        ]);
        let json = value.to_json().expect("Could not convert to JSON");
        assert_eq!(
            json.to_string(),
            r#"{"at":"2024-01-02T03:04:05Z","big":1152921504606846976,"float":0.5,"int":1,"list":[null,true]}"#
        );
        assert!(Value::Bytes([1].into()).to_json().is_err());
        assert!(Value::BigInt(i128::MAX).to_json().is_err());

        let back: Value = serde_json::json!({"a": [1, "b", null], "n": 9007199254740993u64}).into();
        assert_eq!(
            back,
            Value::map([
                ("a", Value::array([Value::from(1), Value::from("b"), Value::Null])),
                ("n", Value::BigInt(9007199254740993)),
            ])
        );
    }
}
