#[cfg(test)]
mod tests {
    use caliber_core::{BindOptions, Catalog, DataType, Dialect, UsageContext, Value};
    use caliber_sqlite::SqliteDialect;
    use caliber_tests::{error_kind, execute_tests, init_logs};
    use time::macros::datetime;

    #[test]
    fn sqlite() {
        init_logs();
        execute_tests(&SqliteDialect::new());
    }

    #[test]
    fn declarations() {
        init_logs();
        let dialect = SqliteDialect::new();
        let sql = |data_type: DataType| {
            data_type
                .to_dialect_data_type(&dialect)
                .and_then(|v| v.to_sql(&dialect))
                .expect("Could not render the declaration")
        };
        assert_eq!(sql(DataType::boolean()), "INTEGER");
        assert_eq!(sql(DataType::uuid()), "TEXT");
        assert_eq!(sql(DataType::enumeration(["a", "b"]).unwrap()), "TEXT");
        assert_eq!(sql(DataType::date()), "DATETIME");
        assert_eq!(sql(DataType::integer().unsigned().unwrap()), "INTEGER UNSIGNED");
        assert_eq!(sql(DataType::decimal_unconstrained()), "DECIMAL");
        assert_eq!(sql(DataType::json()), "JSON");

        let catalog = Catalog::new().into_shared();
        let mut status = DataType::enumeration(["on", "off"]).unwrap();
        status
            .attach_usage_context(UsageContext::column(&catalog, "switches", "status"))
            .unwrap();
        assert_eq!(sql(status), "TEXT", "Enums are not named after their column");

        for data_type in [
            DataType::geometry(),
            DataType::hstore(),
            DataType::inet(),
            DataType::integer().zerofill().unwrap(),
        ] {
            let error = data_type
                .to_dialect_data_type(&dialect)
                .expect_err("Not supported by Sqlite");
            assert!(error_kind(&error).is_capability());
        }
    }

    #[test]
    fn booleans() {
        init_logs();
        let dialect = SqliteDialect::new();
        let options = BindOptions::new(&dialect);
        let boolean = DataType::boolean().to_dialect_data_type(&dialect).unwrap();
        assert_eq!(
            boolean.to_bindable_value(&true.into(), &options).unwrap(),
            Value::Number(1.0)
        );
        assert_eq!(
            boolean.to_bindable_value(&false.into(), &options).unwrap(),
            Value::Number(0.0)
        );
        assert_eq!(boolean.escape(&true.into(), &options).unwrap(), "1");
        assert_eq!(
            boolean.parse(Value::Number(1.0), &dialect).unwrap(),
            Value::Boolean(true)
        );
        assert!(boolean.to_bindable_value(&1.into(), &options).is_err());
    }

    #[test]
    fn literals() {
        init_logs();
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.escape_string("O'Brien"), "'O''Brien'");
        assert_eq!(dialect.escape_string("back\\slash"), "'back\\slash'");
        assert_eq!(dialect.escape_buffer(&[0, 255]), "X'00FF'");
        assert_eq!(dialect.escape_bool(false), "0");
        assert_eq!(dialect.placeholder(2), "?");

        let blob = DataType::blob().to_dialect_data_type(&dialect).unwrap();
        let options = BindOptions::new(&dialect);
        assert_eq!(
            blob.escape(&Value::Bytes([0xAB].into()), &options).unwrap(),
            "X'AB'"
        );
        assert_eq!(
            blob.to_bindable_value(&"é".into(), &options).unwrap(),
            Value::Bytes([0xE9].into())
        );
    }

    #[test]
    fn stored_values() {
        init_logs();
        let dialect = SqliteDialect::new();
        let date = DataType::date().to_dialect_data_type(&dialect).unwrap();
        assert_eq!(
            date.parse("2024-01-02 03:04:05.000 +00:00".into(), &dialect)
                .unwrap(),
            Value::Timestamp(datetime!(2024-01-02 03:04:05 UTC))
        );
        assert_eq!(
            date.parse("2024-01-02 05:04:05".into(), &dialect).unwrap(),
            Value::Timestamp(datetime!(2024-01-02 05:04:05 UTC))
        );
        assert_eq!(
            date.parse("garbage".into(), &dialect).unwrap(),
            Value::from("garbage")
        );

        let json = DataType::json().to_dialect_data_type(&dialect).unwrap();
        assert_eq!(
            json.parse(r#"{"a":[1,null]}"#.into(), &dialect).unwrap(),
            Value::map([("a", Value::array([Value::from(1), Value::Null]))])
        );
    }
}
