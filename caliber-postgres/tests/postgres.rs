#[cfg(test)]
mod tests {
    use caliber_core::{
        BindOptions, Catalog, DataType, DateType, Dialect, GeometryKind, IntegerType, StringType,
        UsageContext, Value,
    };
    use caliber_postgres::{PostgresDialect, range_type_name};
    use caliber_tests::{error_kind, execute_tests, init_logs, silent_logs};
    use rust_decimal::Decimal;
    use time::macros::{datetime, offset};

    #[test]
    fn postgres() {
        init_logs();
        execute_tests(&PostgresDialect::new());
    }

    #[test]
    fn declarations() {
        init_logs();
        let dialect = PostgresDialect::new();
        let sql = |data_type: DataType| {
            data_type
                .to_dialect_data_type(&dialect)
                .and_then(|v| v.to_sql(&dialect))
                .expect("Could not render the declaration")
        };
        silent_logs! {
            assert_eq!(sql(DataType::tinyint()), "SMALLINT");
            assert_eq!(sql(DataType::mediumint()), "INTEGER");
            assert_eq!(sql(IntegerType::new().length(11).into()), "INTEGER");
            assert_eq!(sql(DataType::float()), "REAL");
        }
        assert_eq!(sql(DataType::smallint()), "SMALLINT");
        assert_eq!(sql(DataType::bigint()), "BIGINT");
        assert_eq!(sql(DataType::real()), "REAL");
        assert_eq!(sql(DataType::double()), "DOUBLE PRECISION");
        assert_eq!(sql(DataType::decimal(10, 2)), "DECIMAL(10,2)");
        assert_eq!(sql(DataType::decimal_unconstrained()), "DECIMAL");
        assert_eq!(sql(DataType::boolean()), "BOOLEAN");
        assert_eq!(sql(DataType::date()), "TIMESTAMP WITH TIME ZONE");
        assert_eq!(
            sql(DateType::new().precision(3).into()),
            "TIMESTAMP(3) WITH TIME ZONE"
        );
        assert_eq!(sql(DataType::date_only()), "DATE");
        assert_eq!(sql(DataType::time()), "TIME");
        assert_eq!(sql(DataType::uuid()), "UUID");
        assert_eq!(sql(DataType::string()), "VARCHAR(255)");
        assert_eq!(
            sql(StringType::new().length(64).binary().into()),
            "BYTEA"
        );
        assert_eq!(sql(DataType::blob()), "BYTEA");
        assert_eq!(sql(DataType::citext()), "CITEXT");
        assert_eq!(sql(DataType::tsvector()), "TSVECTOR");
        assert_eq!(sql(DataType::hstore()), "HSTORE");
        assert_eq!(sql(DataType::jsonb()), "JSONB");
        assert_eq!(sql(DataType::array(DataType::string())), "VARCHAR(255)[]");
        assert_eq!(
            sql(DataType::geography_with(GeometryKind::Point, Some(4326))),
            "GEOGRAPHY(POINT,4326)"
        );
        assert_eq!(sql(DataType::range(DataType::integer())), "int4range");
        assert_eq!(sql(DataType::range(DataType::bigint())), "int8range");
        assert_eq!(sql(DataType::range(DataType::decimal(10, 2))), "numrange");
        assert_eq!(sql(DataType::range(DataType::date())), "tstzrange");
        assert_eq!(sql(DataType::range(DataType::date_only())), "daterange");
        assert_eq!(range_type_name(&DataType::string()), None);
    }

    #[test]
    fn unsupported() {
        init_logs();
        let dialect = PostgresDialect::new();
        let error = DataType::integer()
            .unsigned()
            .unwrap()
            .to_dialect_data_type(&dialect)
            .expect_err("Postgres has no UNSIGNED");
        assert!(error_kind(&error).is_capability());
        assert_eq!(
            error.to_string(),
            "postgres does not support the INTEGER.UNSIGNED data type"
        );
        let error = DataType::range(DataType::string())
            .to_dialect_data_type(&dialect)
            .unwrap()
            .to_sql(&dialect)
            .expect_err("There is no range of strings");
        assert!(error_kind(&error).is_capability());
        assert!(error.to_string().contains("RANGE(STRING)"));
    }

    #[test]
    fn enums() {
        init_logs();
        let dialect = PostgresDialect::new();
        let catalog = Catalog::named("app").into_shared();
        let status = DataType::enumeration(["draft", "published"]).unwrap();
        let error = status
            .to_dialect_data_type(&dialect)
            .unwrap()
            .to_sql(&dialect)
            .expect_err("The enum name comes from the usage context");
        assert!(error_kind(&error).is_configuration());

        let mut attached = status.clone();
        attached
            .attach_usage_context(UsageContext::column(&catalog, "posts", "status"))
            .unwrap();
        assert_eq!(
            attached
                .to_dialect_data_type(&dialect)
                .unwrap()
                .to_sql(&dialect)
                .unwrap(),
            "\"enum_posts_status\""
        );
    }

    #[test]
    fn literals() {
        init_logs();
        let dialect = PostgresDialect::new();
        let options = BindOptions::new(&dialect);
        assert_eq!(dialect.escape_string("O'Brien"), "'O''Brien'");
        assert_eq!(dialect.escape_string("nul\0byte"), "'nulbyte'");
        assert_eq!(dialect.escape_buffer(&[0xCA, 0xFE]), "'\\xcafe'");
        assert_eq!(dialect.escape_bool(true), "true");
        assert_eq!(dialect.placeholder(1), "$1");
        assert_eq!(dialect.placeholder(12), "$12");

        let range = DataType::range(DataType::integer())
            .to_dialect_data_type(&dialect)
            .unwrap();
        assert_eq!(
            range.escape(&Value::array([1, 10]), &options).unwrap(),
            "'[1,10)'::int4range"
        );
        assert_eq!(
            range.escape(&Value::Array(Vec::new()), &options).unwrap(),
            "'empty'::int4range"
        );
        let numbers = DataType::range(DataType::decimal(10, 2))
            .to_dialect_data_type(&dialect)
            .unwrap();
        assert_eq!(
            numbers
                .escape(
                    &Value::array([Decimal::new(15, 1), Decimal::new(25, 1)]),
                    &options
                )
                .unwrap(),
            "'[1.5,2.5)'::numrange"
        );

        let array = DataType::array(DataType::integer())
            .to_dialect_data_type(&dialect)
            .unwrap();
        assert_eq!(
            array.escape(&Value::array([1, 2]), &options).unwrap(),
            "ARRAY[1,2]::INTEGER[]"
        );
        assert_eq!(
            array.escape(&Value::Array(Vec::new()), &options).unwrap(),
            "ARRAY[]::INTEGER[]"
        );

        let point = Value::map([
            ("type", Value::from("Point")),
            ("coordinates", Value::array([1, 2])),
        ]);
        let geometry = DataType::geometry().to_dialect_data_type(&dialect).unwrap();
        assert_eq!(
            geometry.escape(&point, &options).unwrap(),
            r#"ST_GeomFromGeoJSON('{"coordinates":[1,2],"type":"Point"}')"#
        );
        let geography = DataType::geography().to_dialect_data_type(&dialect).unwrap();
        assert!(
            geography
                .escape(&point, &options)
                .unwrap()
                .ends_with(")::geography")
        );
    }

    #[test]
    fn dates() {
        init_logs();
        let dialect = PostgresDialect::new();
        let date = DataType::date().to_dialect_data_type(&dialect).unwrap();
        let instant = datetime!(2024-01-02 03:04:05.678 UTC);
        assert_eq!(
            date.to_bindable_value(&instant.into(), &BindOptions::new(&dialect))
                .unwrap(),
            Value::from("2024-01-02 03:04:05.678 +00:00")
        );
        assert_eq!(
            date.escape(
                &instant.into(),
                &BindOptions::new(&dialect).timezone(offset!(-5))
            )
            .unwrap(),
            "'2024-01-01 22:04:05.678 -05:00'"
        );
    }
}
