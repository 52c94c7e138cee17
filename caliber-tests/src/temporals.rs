use crate::error_kind;
use caliber_core::{BindOptions, Catalog, DataType, Dialect, Foreign, UsageContext, Value};
use time::{
    OffsetDateTime,
    macros::{datetime, offset},
};

struct EpochSeconds(i64);

pub fn temporals(dialect: &dyn Dialect) {
    let date = DataType::date()
        .to_dialect_data_type(dialect)
        .expect("DATE must be supported by every dialect");
    let instant = datetime!(2024-01-02 03:04:05 UTC);

    // Sanitize
    assert_eq!(
        date.sanitize("2024-01-02T03:04:05Z".into()).unwrap(),
        Value::Timestamp(instant)
    );
    assert_eq!(
        date.sanitize("2024-01-02 05:04:05+02:00".into()).unwrap(),
        Value::Timestamp(instant)
    );
    assert_eq!(
        date.sanitize(1_704_164_645_000i64.into()).unwrap(),
        Value::Timestamp(instant)
    );
    assert_eq!(
        date.sanitize(0.into()).unwrap(),
        Value::Timestamp(OffsetDateTime::UNIX_EPOCH)
    );
    assert_eq!(
        date.sanitize("not a date".into()).unwrap(),
        Value::from("not a date")
    );
    assert_eq!(date.sanitize(Value::Now).unwrap(), Value::Now);
    assert_eq!(date.sanitize(Value::Null).unwrap(), Value::Null);
    let error = date
        .sanitize(true.into())
        .expect_err("A boolean can never be a date");
    assert!(error_kind(&error).is_type_mismatch());
    let error = date
        .sanitize(Value::Foreign(Foreign::new(EpochSeconds(0))))
        .expect_err("Foreign values need a calendar");
    assert!(error_kind(&error).is_type_mismatch());

    // Calendar of the owning catalog
    let catalog = Catalog::named("calendar")
        .with_calendar(|value: &Foreign| {
            value
                .downcast_ref::<EpochSeconds>()
                .and_then(|v| OffsetDateTime::from_unix_timestamp(v.0).ok())
        })
        .into_shared();
    let mut attached = DataType::date();
    attached
        .attach_usage_context(UsageContext::attribute(&catalog, "Event", "startsAt"))
        .expect("A fresh data type can be attached");
    let attached = attached
        .to_dialect_data_type(dialect)
        .expect("DATE must be supported by every dialect");
    assert_eq!(
        attached
            .sanitize(Value::Foreign(Foreign::new(EpochSeconds(1_704_164_645))))
            .unwrap(),
        Value::Timestamp(instant)
    );
    attached
        .validate(&Value::Foreign(Foreign::new(EpochSeconds(0))))
        .expect("The calendar recognizes the value");

    // Validate
    date.validate(&instant.into()).expect("A timestamp is a date");
    date.validate(&"2024-01-02".into()).expect("A date string is a date");
    date.validate(&Value::Now).expect("NOW is a date");
    let error = date
        .validate(&"yesterday".into())
        .expect_err("Free text is not a date");
    assert!(error_kind(&error).is_validation());

    // Change detection
    assert!(!date.are_values_equal(&Value::Now, &Value::Now));
    assert!(date.are_values_equal(&Value::Null, &Value::Null));
    assert!(date.are_values_equal(&"2024-01-02T03:04:05Z".into(), &instant.into()));
    assert!(date.are_values_equal(
        &datetime!(2024-01-02 05:04:05 +02:00).into(),
        &instant.into()
    ));
    assert!(!date.are_values_equal(&instant.into(), &OffsetDateTime::UNIX_EPOCH.into()));

    // Encoding, the offset shifts the rendered wall clock
    let bound = date
        .to_bindable_value(&instant.into(), &BindOptions::new(dialect))
        .expect("Could not bind a timestamp");
    assert!(
        bound.as_str().unwrap_or_default().starts_with("2024-01-02 03:04:05.000"),
        "Unexpected UTC encoding {bound}"
    );
    let bound = date
        .to_bindable_value(
            &instant.into(),
            &BindOptions::new(dialect).timezone(offset!(+2)),
        )
        .expect("Could not bind a timestamp with an offset");
    assert!(
        bound.as_str().unwrap_or_default().starts_with("2024-01-02 05:04:05.000"),
        "Unexpected shifted encoding {bound}"
    );
    assert!(
        date.to_bindable_value(&"yesterday".into(), &BindOptions::new(dialect))
            .is_err()
    );

    // Date only
    let date_only = DataType::date_only()
        .to_dialect_data_type(dialect)
        .expect("DATEONLY must be supported by every dialect");
    assert_eq!(date_only.to_sql(dialect).unwrap(), "DATE");
    assert_eq!(
        date_only.sanitize(instant.into()).unwrap(),
        Value::from("2024-01-02")
    );
    assert_eq!(
        date_only.sanitize("2024-01-02 10:00:00".into()).unwrap(),
        Value::from("2024-01-02")
    );
    assert!(date_only.are_values_equal(&"2024-01-02".into(), &instant.into()));
    assert!(date_only.validate(&true.into()).is_err());
    assert_eq!(
        date_only
            .escape(&instant.into(), &BindOptions::new(dialect))
            .unwrap(),
        dialect.escape_string("2024-01-02")
    );

    // Time
    let time = DataType::time()
        .to_dialect_data_type(dialect)
        .expect("TIME must be supported by every dialect");
    time.validate(&"12:30:00".into()).expect("A valid time");
    time.validate(&"12:30".into()).expect("Seconds are optional");
    assert!(time.validate(&"25:00".into()).is_err());
    assert_eq!(
        time.to_bindable_value(&instant.into(), &BindOptions::new(dialect))
            .unwrap(),
        Value::from("03:04:05.000")
    );
}
