#[cfg(test)]
mod tests {
    use caliber_core::{
        BindOptions, Capabilities, DataType, DataTypeId, DataTypeOverride, Dialect, Result, Value,
        data_type_error,
    };
    use std::sync::LazyLock;

    struct GenericDialect {
        capabilities: Capabilities,
    }

    impl GenericDialect {
        fn new() -> Self {
            Self {
                capabilities: Capabilities::new()
                    .with_feature("DECIMAL", "unconstrained", true)
                    .with("ZEROFILL", false)
                    .with("GEOGRAPHY", false),
            }
        }
    }

    struct ShoutingInteger;

    impl DataTypeOverride for ShoutingInteger {
        fn to_sql(&self, data_type: &DataType, dialect: &dyn Dialect) -> Result<String> {
            Ok(format!("{}!", data_type.base().to_sql(dialect)?))
        }
    }

    static SHOUTING_INTEGER: ShoutingInteger = ShoutingInteger;

    impl Dialect for GenericDialect {
        fn name(&self) -> &'static str {
            "generic"
        }

        fn capabilities(&self) -> &Capabilities {
            &self.capabilities
        }

        fn data_type_override(&self, id: DataTypeId) -> Option<&'static dyn DataTypeOverride> {
            match id {
                DataTypeId::Integer => Some(&SHOUTING_INTEGER),
                _ => None,
            }
        }
    }

    static DIALECT: LazyLock<GenericDialect> = LazyLock::new(GenericDialect::new);

    #[test]
    fn end_to_end() {
        let dialect = &*DIALECT;
        let options = BindOptions::new(dialect);
        let varchar = DataType::string_with(caliber_core::StringType::new().length(10))
            .to_dialect_data_type(dialect)
            .expect("Could not resolve STRING(10)");
        assert_eq!(varchar.to_sql(dialect).unwrap(), "VARCHAR(10)");
        varchar.validate(&"O'Brien".into()).unwrap();
        assert_eq!(
            varchar.escape(&"O'Brien".into(), &options).unwrap(),
            "'O''Brien'"
        );

        let mut bound = Vec::new();
        let token = varchar
            .bind_param(&"hello".into(), &options, &mut |value| {
                bound.push(value);
                dialect.placeholder(bound.len())
            })
            .unwrap();
        assert_eq!(token, "?");
        assert_eq!(bound, [Value::from("hello")]);
    }

    #[test]
    fn overrides() {
        let dialect = &*DIALECT;
        let options = BindOptions::new(dialect);
        let integer = DataType::integer();
        assert_eq!(integer.dialect_name(), None);
        assert_eq!(integer.to_sql(dialect).unwrap(), "INTEGER");

        let resolved = integer.to_dialect_data_type(dialect).unwrap();
        assert_eq!(resolved.dialect_name(), Some("generic"));
        assert_eq!(resolved.to_sql(dialect).unwrap(), "INTEGER!");
        assert_eq!(resolved.escape(&7.into(), &options).unwrap(), "7");
        assert!(resolved.validate(&"seven".into()).is_err());

        let array = DataType::array(DataType::integer())
            .to_dialect_data_type(dialect)
            .unwrap();
        assert_eq!(array.dialect_name(), None);
        assert_eq!(array.kind().inner(), Some(&resolved));
        assert_eq!(array.to_sql(dialect).unwrap(), "INTEGER![]");

        let bigint = DataType::bigint().to_dialect_data_type(dialect).unwrap();
        assert_eq!(bigint.dialect_name(), None);
        assert_eq!(bigint.to_sql(dialect).unwrap(), "BIGINT");
    }

    #[test]
    fn capabilities() {
        let dialect = &*DIALECT;
        assert!(dialect.capabilities().is_declared("DECIMAL"));
        assert_eq!(
            dialect.capabilities().feature("DECIMAL", "unconstrained"),
            Some(true)
        );
        assert!(dialect.capabilities().is_unsupported("GEOGRAPHY"));
        assert!(!dialect.capabilities().is_unsupported("GEOMETRY"));

        assert_eq!(
            DataType::decimal_unconstrained()
                .to_dialect_data_type(dialect)
                .and_then(|v| v.to_sql(dialect))
                .unwrap(),
            "DECIMAL"
        );
        assert_eq!(
            DataType::decimal(10, 2)
                .unsigned()
                .unwrap()
                .to_dialect_data_type(dialect)
                .and_then(|v| v.to_sql(dialect))
                .unwrap(),
            "DECIMAL(10,2) UNSIGNED"
        );

        let error = DataType::geography()
            .to_dialect_data_type(dialect)
            .expect_err("GEOGRAPHY is disabled");
        assert_eq!(
            error.to_string(),
            "generic does not support the GEOGRAPHY data type"
        );
        let error = DataType::bigint()
            .zerofill()
            .unwrap()
            .to_dialect_data_type(dialect)
            .expect_err("ZEROFILL is disabled");
        assert!(
            data_type_error(&error).is_some_and(|v| v.is_capability()),
            "{error:#}"
        );
        assert_eq!(
            error.to_string(),
            "generic does not support the BIGINT.ZEROFILL data type"
        );
        let error = DataType::tsvector()
            .to_dialect_data_type(dialect)
            .expect_err("TSVECTOR must be declared explicitly");
        assert!(data_type_error(&error).is_some_and(|v| v.is_capability()));

        let error = DataType::enumeration(["a"])
            .unwrap()
            .to_dialect_data_type(dialect)
            .and_then(|v| v.to_sql(dialect))
            .expect_err("The generic declaration has no ENUM");
        assert!(data_type_error(&error).is_some_and(|v| v.is_capability()));
        let error = DataType::range(DataType::integer())
            .to_dialect_data_type(dialect)
            .and_then(|v| v.to_sql(dialect))
            .expect_err("The generic declaration has no RANGE");
        assert!(data_type_error(&error).is_some_and(|v| v.is_capability()));
    }

    #[test]
    fn configuration() {
        let error = DataType::decimal_with(caliber_core::DecimalOptions {
            precision: Some(4),
            ..Default::default()
        })
        .expect_err("Precision without scale");
        assert!(data_type_error(&error).is_some_and(|v| v.is_configuration()));
        let error = DataType::decimal_with(caliber_core::DecimalOptions {
            precision: Some(2),
            scale: Some(4),
            ..Default::default()
        })
        .expect_err("Scale above precision");
        assert!(data_type_error(&error).is_some_and(|v| v.is_configuration()));
        assert!(DataType::boolean().unsigned().is_err());
        assert!(DataType::text().zerofill().is_err());
        assert!(DataType::blob_sized("tiny").is_ok());
        assert!(DataType::blob_sized("huge").is_err());
    }

    #[test]
    fn sanitize_is_idempotent() {
        let cases = [
            (DataType::integer(), Value::from("42")),
            (DataType::integer(), Value::BigInt(7)),
            (DataType::bigint(), Value::from(12)),
            (DataType::bigint(), Value::from("-0012")),
            (DataType::float(), Value::from("1.5")),
            (DataType::boolean(), Value::from(1)),
            (DataType::date(), Value::from("2024-01-02 03:04:05")),
            (DataType::date_only(), Value::from("2024-01-02T03:04:05Z")),
            (DataType::string(), Value::from("kept")),
            (DataType::array(DataType::integer()), Value::array(["1", "2"])),
            (DataType::bigint(), Value::Number(1e40)),
            (DataType::bigint(), Value::Number(-1e40)),
            (DataType::bigint(), Value::Number(f64::NAN)),
            (DataType::date(), Value::Number(1e18)),
            (DataType::date(), Value::Number(f64::NAN)),
            (DataType::date_only(), Value::Number(1e18)),
            (DataType::date_only(), Value::Number(f64::NAN)),
            (DataType::date_only(), Value::Number(86_400_000.0)),
            (DataType::decimal(10, 2), Value::Number(f64::NAN)),
            (
                DataType::range(DataType::date()),
                Value::array([Value::from("2024-01-02"), Value::Null]),
            ),
            (DataType::range(DataType::date()), Value::array([Value::Null, Value::Null])),
            (DataType::range(DataType::date()), Value::Array(Vec::new())),
            (
                DataType::range(DataType::date()),
                Value::array([Value::Number(1e18), Value::Null]),
            ),
            (
                DataType::hstore(),
                Value::map([("a", Value::from("1")), ("b", Value::Null)]),
            ),
            (
                DataType::geometry(),
                Value::map([
                    ("type", Value::from("Point")),
                    ("coordinates", Value::array([1.5, 2.0])),
                ]),
            ),
        ];
        for (data_type, value) in cases {
            let once = data_type.sanitize(value.clone()).unwrap();
            let twice = data_type.sanitize(once.clone()).unwrap();
            assert_eq!(once, twice, "{data_type} sanitize of {value}");
        }
        assert_eq!(
            DataType::bigint().sanitize(Value::from(12)).unwrap(),
            Value::from("12")
        );
        assert_eq!(
            DataType::integer().sanitize(Value::from("42")).unwrap(),
            Value::Number(42.0)
        );
    }

    #[test]
    fn numbers() {
        let dialect = &*DIALECT;
        let options = BindOptions::new(dialect);
        let integer = DataType::integer();
        integer.validate(&Value::from(-3)).unwrap();
        integer.validate(&Value::from("-12")).unwrap();
        integer.validate(&Value::BigInt(i128::MAX)).unwrap();
        let error = integer
            .validate(&Value::Number(2f64.powi(60)))
            .expect_err("Not a safe integer");
        assert!(error.to_string().contains("is not a safe integer"));
        assert_eq!(
            integer.validate(&Value::from(1.5)).unwrap_err().to_string(),
            "1.5 is not a valid integer"
        );
        let unsigned = DataType::integer().unsigned().unwrap();
        unsigned.validate(&Value::from("-0")).unwrap();
        assert!(unsigned.validate(&Value::from(-1)).is_err());

        let float = DataType::float();
        float.validate(&Value::Number(f64::NAN)).unwrap();
        float.validate(&Value::from("Infinity")).unwrap();
        assert_eq!(
            float.escape(&Value::Number(f64::NAN), &options).unwrap(),
            "'NaN'"
        );
        assert_eq!(float.escape(&Value::from(0.25), &options).unwrap(), "0.25");

        let decimal = DataType::decimal(10, 2);
        decimal.validate(&Value::from("12.50")).unwrap();
        assert!(decimal.validate(&Value::from("12,50")).is_err());
        assert!(decimal.validate(&Value::Number(f64::INFINITY)).is_err());
        assert_eq!(
            decimal.escape(&Value::BigInt(3), &options).unwrap(),
            "3"
        );
        assert_eq!(
            DataType::bigint()
                .escape(&Value::BigInt(-9007199254740993), &options)
                .unwrap(),
            "-9007199254740993"
        );
    }

    #[test]
    fn bigint_beyond_i128() {
        let bigint = DataType::bigint();
        for number in [1e40, -1e40, f64::INFINITY] {
            let sanitized = bigint.sanitize(Value::Number(number)).unwrap();
            assert_eq!(sanitized, Value::Number(number), "{number} must be left unchanged");
            assert!(bigint.validate(&sanitized).is_err());
        }
        assert_eq!(
            bigint.sanitize(Value::Number(2f64.powi(100))).unwrap(),
            Value::from("1267650600228229401496703205376")
        );
        assert_eq!(
            bigint.sanitize(Value::Number(-2f64.powi(126))).unwrap(),
            Value::from("-85070591730234615865843651857942052864")
        );
    }

    #[test]
    fn date_only_numbers() {
        let dialect = &*DIALECT;
        let options = BindOptions::new(dialect);
        let date_only = DataType::date_only();
        for number in [f64::NAN, f64::INFINITY, 1e18, -1e18] {
            let error = date_only
                .validate(&Value::Number(number))
                .expect_err("Not a representable epoch");
            assert!(data_type_error(&error).is_some_and(|v| v.is_validation()));
        }
        let day = Value::Number(86_400_000.0);
        date_only.validate(&day).unwrap();
        assert_eq!(
            date_only.to_bindable_value(&day, &options).unwrap(),
            Value::from("1970-01-02")
        );
        assert_eq!(date_only.escape(&day, &options).unwrap(), "'1970-01-02'");
    }

    #[test]
    fn accepted_values_escape() {
        let dialect = &*DIALECT;
        let options = BindOptions::new(dialect);
        let cases = [
            (DataType::bigint(), Value::Number(1e40)),
            (DataType::bigint(), Value::Number(2f64.powi(100))),
            (DataType::integer(), Value::Number(2f64.powi(53))),
            (DataType::date(), Value::Number(1e18)),
            (DataType::date(), Value::Number(0.0)),
            (DataType::date_only(), Value::Number(f64::NAN)),
            (DataType::date_only(), Value::Number(-86_400_000.0)),
            (DataType::decimal(10, 2), Value::Number(f64::NAN)),
            (DataType::decimal(10, 2), Value::BigInt(i128::MAX)),
            (DataType::float(), Value::Number(f64::NEG_INFINITY)),
            (DataType::boolean(), Value::Number(2.0)),
            (
                DataType::hstore(),
                Value::map([("quote", Value::from("say \"hi\"")), ("none", Value::Null)]),
            ),
            (DataType::hstore(), Value::map([("n", 1)])),
            (
                DataType::geometry(),
                Value::map([
                    ("type", Value::from("Point")),
                    ("coordinates", Value::array([1.0, f64::NAN])),
                ]),
            ),
        ];
        for (data_type, value) in cases {
            let value = data_type.sanitize(value).unwrap();
            if data_type.validate(&value).is_err() {
                continue;
            }
            data_type
                .to_bindable_value(&value, &options)
                .unwrap_or_else(|e| panic!("{data_type} could not bind {value}: {e:#}"));
            data_type
                .escape(&value, &options)
                .unwrap_or_else(|e| panic!("{data_type} could not escape {value}: {e:#}"));
        }
    }

    #[test]
    fn hstore_literals() {
        let dialect = &*DIALECT;
        let hstore = DataType::hstore();
        assert_eq!(
            hstore
                .parse(
                    r#"NULLABLE=>"x", NULL_KEY=>NULL, plain => "y", "NULL"=>NULL"#.into(),
                    dialect
                )
                .unwrap(),
            Value::map([
                ("NULL", Value::Null),
                ("NULLABLE", Value::from("x")),
                ("NULL_KEY", Value::Null),
                ("plain", Value::from("y")),
            ])
        );
        let error = hstore
            .parse(r#"NULL=>"x""#.into(), dialect)
            .expect_err("A key cannot be NULL");
        assert!(data_type_error(&error).is_some_and(|v| v.is_validation()));
    }
}
