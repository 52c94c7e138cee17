#[cfg(test)]
mod tests {
    use caliber::{
        BindOptions, Catalog, DataType, Dialect, StringType, UsageContext, Value, data_type_error,
        mysql::MySQLDialect, postgres::PostgresDialect, sqlite::SqliteDialect,
    };
    use caliber_tests::init_logs;
    use time::macros::datetime;

    #[test]
    fn varchar_everywhere() {
        init_logs();
        let postgres = PostgresDialect::new();
        let mysql = MySQLDialect::new();
        let sqlite = SqliteDialect::new();
        let dialects: [(&dyn Dialect, &str); 3] = [
            (&postgres, "'O''Brien'"),
            (&mysql, "'O\\'Brien'"),
            (&sqlite, "'O''Brien'"),
        ];
        for (dialect, expected) in dialects {
            let varchar = DataType::string_with(StringType::new().length(10))
                .to_dialect_data_type(dialect)
                .expect("Could not resolve STRING(10)");
            assert_eq!(varchar.to_sql(dialect).unwrap(), "VARCHAR(10)");
            let value = Value::from("O'Brien");
            varchar.validate(&value).unwrap();
            assert_eq!(
                varchar.escape(&value, &BindOptions::new(dialect)).unwrap(),
                expected,
                "{} escaping",
                dialect.name()
            );
        }
    }

    #[test]
    fn enum_everywhere() {
        init_logs();
        let status = DataType::enumeration(["a", "b"]).unwrap();
        let error = status.validate(&"c".into()).expect_err("c is not a member");
        assert!(data_type_error(&error).is_some_and(|v| v.is_validation()));
        assert_eq!(
            error.to_string(),
            "'c' is not a valid choice for enum [ 'a', 'b' ]"
        );

        let postgres = PostgresDialect::new();
        let error = status
            .to_dialect_data_type(&postgres)
            .and_then(|v| v.to_sql(&postgres))
            .expect_err("A Postgres enum is named after its column");
        assert!(data_type_error(&error).is_some_and(|v| v.is_configuration()));

        let catalog = Catalog::named("blog").into_shared();
        let mut attached = status.clone();
        attached
            .attach_usage_context(UsageContext::column(&catalog, "posts", "status"))
            .unwrap();
        assert_eq!(
            attached
                .to_dialect_data_type(&postgres)
                .and_then(|v| v.to_sql(&postgres))
                .unwrap(),
            "\"enum_posts_status\""
        );

        let mysql = MySQLDialect::new();
        assert_eq!(
            status
                .to_dialect_data_type(&mysql)
                .and_then(|v| v.to_sql(&mysql))
                .unwrap(),
            "ENUM('a', 'b')"
        );
        let sqlite = SqliteDialect::new();
        assert_eq!(
            status
                .to_dialect_data_type(&sqlite)
                .and_then(|v| v.to_sql(&sqlite))
                .unwrap(),
            "TEXT"
        );
    }

    #[test]
    fn valid_values_encode() {
        init_logs();
        let postgres = PostgresDialect::new();
        let mysql = MySQLDialect::new();
        let sqlite = SqliteDialect::new();
        let dialects: [&dyn Dialect; 3] = [&postgres, &mysql, &sqlite];
        let cases = [
            (DataType::string(), Value::from("plain")),
            (DataType::text(), Value::from("it's \"quoted\"")),
            (DataType::integer(), Value::from(-42)),
            (DataType::bigint(), Value::BigInt(9007199254740993)),
            (DataType::float(), Value::from(0.5)),
            (DataType::double(), Value::Number(f64::INFINITY)),
            (DataType::decimal(10, 2), Value::from("12.50")),
            (DataType::boolean(), Value::from(true)),
            (
                DataType::date(),
                Value::Timestamp(datetime!(2024-01-02 03:04:05 UTC)),
            ),
            (DataType::date_only(), Value::from("2024-01-02")),
            (DataType::time(), Value::from("03:04:05")),
            (DataType::uuid(), Value::from("6ba7b810-9dad-11d1-80b4-00c04fd430c8")),
            (
                DataType::json(),
                Value::map([("nested", Value::array([1, 2]))]),
            ),
            (DataType::blob(), Value::Bytes([0, 1, 2].into())),
        ];
        for dialect in dialects {
            let options = BindOptions::new(dialect);
            for (data_type, value) in &cases {
                let resolved = data_type
                    .to_dialect_data_type(dialect)
                    .unwrap_or_else(|e| panic!("{data_type} on {}: {e:#}", dialect.name()));
                let value = resolved.sanitize(value.clone()).unwrap();
                resolved
                    .validate(&value)
                    .unwrap_or_else(|e| panic!("{data_type} rejected {value}: {e:#}"));
                resolved
                    .to_bindable_value(&value, &options)
                    .unwrap_or_else(|e| panic!("{data_type} could not bind {value}: {e:#}"));
                let escaped = resolved
                    .escape(&value, &options)
                    .unwrap_or_else(|e| panic!("{data_type} could not escape {value}: {e:#}"));
                assert!(!escaped.is_empty());
                assert!(
                    resolved.are_values_equal(&value, &value),
                    "{data_type} must consider {value} equal to itself"
                );
            }
        }
    }

    #[test]
    fn boundary_values() {
        init_logs();
        let postgres = PostgresDialect::new();
        let mysql = MySQLDialect::new();
        let sqlite = SqliteDialect::new();
        let dialects: [&dyn Dialect; 3] = [&postgres, &mysql, &sqlite];
        let point = Value::map([
            ("type", Value::from("Point")),
            ("coordinates", Value::array([1.5, 2.0])),
        ]);
        let cases = [
            (DataType::bigint(), Value::Number(1e40), false),
            (DataType::bigint(), Value::Number(-1e40), false),
            (DataType::bigint(), Value::Number(f64::NAN), false),
            (DataType::bigint(), Value::BigInt(i64::MIN as i128), true),
            (DataType::integer(), Value::Number(9007199254740992.0), false),
            (DataType::date(), Value::Number(1e18), false),
            (DataType::date(), Value::Number(f64::NAN), false),
            (DataType::date(), Value::Number(-86_400_000.0), true),
            (DataType::date_only(), Value::Number(1e18), false),
            (DataType::date_only(), Value::Number(f64::NAN), false),
            (DataType::date_only(), Value::Number(86_400_000.0), true),
            (DataType::decimal(10, 2), Value::Number(f64::NAN), false),
            (DataType::decimal(10, 2), Value::Number(f64::INFINITY), false),
            (DataType::float(), Value::Number(f64::NAN), true),
            (DataType::string(), Value::from(""), true),
        ];
        let composites = [
            (
                DataType::range(DataType::date()),
                Value::array([Value::from("2024-01-02"), Value::Null]),
                true,
                ["postgres"].as_slice(),
            ),
            (
                DataType::range(DataType::date()),
                Value::Array(Vec::new()),
                true,
                ["postgres"].as_slice(),
            ),
            (
                DataType::range(DataType::date()),
                Value::array([Value::Number(1e18), Value::Null]),
                false,
                ["postgres"].as_slice(),
            ),
            (
                DataType::hstore(),
                Value::map([("a", Value::from("1")), ("b", Value::Null)]),
                true,
                ["postgres"].as_slice(),
            ),
            (
                DataType::hstore(),
                Value::map([("a", 1)]),
                false,
                ["postgres"].as_slice(),
            ),
            (DataType::geometry(), point, true, ["postgres", "mysql"].as_slice()),
            (
                DataType::geometry(),
                Value::map([("coordinates", Value::array([1.5, 2.0]))]),
                false,
                ["postgres", "mysql"].as_slice(),
            ),
        ];
        for dialect in dialects {
            let options = BindOptions::new(dialect);
            let applicable = composites
                .iter()
                .filter(|(.., supported)| supported.contains(&dialect.name()))
                .map(|(data_type, value, accepted, _)| (data_type, value, accepted));
            for (data_type, value, accepted) in cases
                .iter()
                .map(|(data_type, value, accepted)| (data_type, value, accepted))
                .chain(applicable)
            {
                let resolved = data_type
                    .to_dialect_data_type(dialect)
                    .unwrap_or_else(|e| panic!("{data_type} on {}: {e:#}", dialect.name()));
                let value = resolved.sanitize(value.clone()).unwrap();
                assert_eq!(
                    resolved.sanitize(value.clone()).unwrap(),
                    value,
                    "{data_type} sanitize must be stable on {}",
                    dialect.name()
                );
                let result = resolved.validate(&value);
                if !accepted {
                    let Err(error) = result else {
                        panic!("{data_type} must reject {value} on {}", dialect.name());
                    };
                    assert!(
                        data_type_error(&error).is_some_and(|v| v.is_validation()),
                        "{error:#}"
                    );
                    continue;
                }
                result.unwrap_or_else(|e| panic!("{data_type} rejected {value}: {e:#}"));
                resolved
                    .to_bindable_value(&value, &options)
                    .unwrap_or_else(|e| panic!("{data_type} could not bind {value}: {e:#}"));
                let escaped = resolved.escape(&value, &options).unwrap_or_else(|e| {
                    panic!(
                        "{data_type} could not escape {value} on {}: {e:#}",
                        dialect.name()
                    )
                });
                assert!(!escaped.is_empty());
            }
        }

        let range = DataType::range(DataType::date())
            .to_dialect_data_type(&postgres)
            .unwrap();
        let value = range
            .sanitize(Value::array([Value::from("2024-01-02"), Value::Null]))
            .unwrap();
        assert!(
            range
                .escape(&value, &BindOptions::new(&postgres))
                .unwrap()
                .ends_with("::tstzrange")
        );
        let error = DataType::hstore()
            .to_dialect_data_type(&sqlite)
            .expect_err("SQLite has no HSTORE");
        assert!(data_type_error(&error).is_some_and(|v| v.is_capability()));
    }

    #[test]
    fn json_documents() {
        init_logs();
        let dialect = PostgresDialect::new();
        let json = DataType::jsonb().to_dialect_data_type(&dialect).unwrap();
        let document = Value::map([
            ("title", Value::from("Caliber")),
            ("pages", Value::from(12)),
            ("draft", Value::from(false)),
        ]);
        let escaped = json
            .escape(&document, &BindOptions::new(&dialect))
            .unwrap();
        assert_eq!(
            escaped,
            r#"'{"draft":false,"pages":12,"title":"Caliber"}'"#
        );
    }
}
