use crate::error_kind;
use caliber_core::{BindOptions, DataType, Dialect, TypeKind, Value};

pub fn sentinels(dialect: &dyn Dialect) {
    let options = BindOptions::new(dialect);

    // Default value generators
    let uuid = DataType::uuid()
        .to_dialect_data_type(dialect)
        .expect("UUID must be supported by every dialect");
    for generator in [DataType::uuid_v1(), DataType::uuid_v4()] {
        let generator = generator
            .to_dialect_data_type(dialect)
            .expect("UUID generators must be supported by every dialect");
        let value = generator
            .default_value()
            .expect("UUID generators produce a default value");
        generator
            .validate(&value)
            .expect("A generated identifier is valid for its generator");
        uuid.validate(&value)
            .expect("A generated identifier is a valid UUID");
        assert_ne!(generator.default_value(), Some(value));
        let error = generator
            .to_sql(dialect)
            .expect_err("Generators are not column types");
        assert!(error_kind(&error).is_configuration());
    }
    let v4 = DataType::uuid_v4();
    let error = v4
        .validate(&"a0eebc99-9c0b-11d1-b465-00c04fd430c8".into())
        .expect_err("A version 1 identifier is not a UUIDV4");
    assert!(error_kind(&error).is_validation());
    assert!(error.to_string().contains("uuidv4"));
    uuid.validate(&"A0EEBC99-9C0B-4EF8-BB6D-6BB9BD380A11".into())
        .expect("Upper case identifiers are valid");
    assert!(uuid.validate(&"a0eebc999c0b4ef8bb6d6bb9bd380a11".into()).is_err());
    assert!(uuid.validate(&"{a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11}".into()).is_err());
    assert!(uuid.validate(&Value::Bytes([0; 16].into())).is_err());
    assert_eq!(
        uuid.escape(&"a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11".into(), &options)
            .unwrap(),
        dialect.escape_string("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11")
    );

    let now = DataType::now()
        .to_dialect_data_type(dialect)
        .expect("NOW must be supported by every dialect");
    assert!(matches!(now.default_value(), Some(Value::Timestamp(..))));
    assert_eq!(now.to_sql(dialect).unwrap(), "NOW");
    assert_eq!(DataType::integer().default_value(), None);

    // Virtual
    let full_name = DataType::virtual_type(Some(DataType::string()), ["first", "last"])
        .to_dialect_data_type(dialect)
        .expect("VIRTUAL must be supported by every dialect");
    let TypeKind::Virtual(options_of_full_name) = full_name.kind() else {
        panic!("Expected a VIRTUAL, got {full_name}");
    };
    assert_eq!(options_of_full_name.fields(), ["first", "last"]);
    assert_eq!(full_name.to_string(), "VIRTUAL(STRING)");
    full_name
        .validate(&"Ada Lovelace".into())
        .expect("Validation goes through the return type");
    assert!(full_name.validate(&1.into()).is_err());
    assert_eq!(
        full_name.escape(&"Ada".into(), &options).unwrap(),
        dialect.escape_string("Ada")
    );
    let error = full_name
        .to_sql(dialect)
        .expect_err("VIRTUAL has no declaration");
    assert!(error_kind(&error).is_configuration());

    let untyped = DataType::virtual_type(None, Vec::<String>::new());
    untyped
        .validate(&Value::map([("anything", 1)]))
        .expect("An untyped VIRTUAL accepts anything");
    assert_eq!(untyped.sanitize(7.into()).unwrap(), Value::from(7));
}
