use crate::error_kind;
use caliber_core::{Catalog, DataType, DataTypeId, Dialect, UsageContext, UsageTarget};

pub fn usage_context(_dialect: &dyn Dialect) {
    let catalog = Catalog::named("main").into_shared();
    let other_catalog = Catalog::named("other").into_shared();
    let email = UsageContext::attribute(&catalog, "User", "email");

    let mut data_type = DataType::string();
    assert!(data_type.usage_context().is_none());
    data_type
        .attach_usage_context(email.clone())
        .expect("A fresh data type can be attached");
    assert_eq!(data_type.usage_context(), Some(&email));
    assert_eq!(
        data_type
            .usage_context()
            .map(UsageContext::names),
        Some(("User", "email"))
    );

    // Same context again is a no-op
    data_type
        .attach_usage_context(UsageContext::attribute(&catalog, "User", "email"))
        .expect("Attaching the same context twice is allowed");
    assert_eq!(data_type.usage_context(), Some(&email));

    let error = data_type
        .attach_usage_context(UsageContext::attribute(&catalog, "User", "name"))
        .expect_err("A data type belongs to a single attribute");
    assert!(error_kind(&error).is_configuration());
    let message = error.to_string();
    assert!(message.contains("User#email"), "{message}");
    assert!(message.contains("User#name"), "{message}");
    assert!(
        data_type
            .attach_usage_context(UsageContext::attribute(&other_catalog, "User", "email"))
            .is_err(),
        "Same names in another catalog are another usage"
    );

    // Copies
    let mut copy = data_type.detached();
    assert!(copy.usage_context().is_none());
    assert_eq!(copy.kind(), data_type.kind());
    copy.attach_usage_context(UsageContext::column(&catalog, "users", "email"))
        .expect("A detached copy can be attached elsewhere");
    assert!(matches!(
        copy.usage_context().map(UsageContext::target),
        Some(UsageTarget::Column { .. })
    ));
    let mut counter = DataType::integer();
    counter
        .attach_usage_context(UsageContext::attribute(&catalog, "Post", "views"))
        .expect("A fresh data type can be attached");
    assert!(
        counter
            .unsigned()
            .expect("INTEGER has an UNSIGNED variant")
            .usage_context()
            .is_none(),
        "Variants start detached"
    );

    // Composites carry the context to the inner type
    let mut tags = DataType::array(DataType::string());
    tags.attach_usage_context(UsageContext::attribute(&catalog, "Post", "tags"))
        .expect("A fresh data type can be attached");
    let inner = tags.kind().inner().expect("ARRAY has an element type");
    assert_eq!(inner.usage_context(), tags.usage_context());
    assert!(tags.detached().kind().inner().unwrap().usage_context().is_none());
}

pub fn resolution(dialect: &dyn Dialect) {
    let catalog = Catalog::named("main").into_shared();
    let mut data_type = DataType::string();
    data_type
        .attach_usage_context(UsageContext::attribute(&catalog, "User", "name"))
        .expect("A fresh data type can be attached");

    let resolved = data_type
        .to_dialect_data_type(dialect)
        .expect("STRING must be supported by every dialect");
    assert_eq!(resolved.data_type_id(), DataTypeId::String);
    assert_eq!(resolved.usage_context(), data_type.usage_context());
    assert_eq!(
        resolved
            .to_dialect_data_type(dialect)
            .expect("Resolving twice must succeed"),
        resolved
    );
    assert!(data_type.dialect_name().is_none(), "The original is untouched");
    if resolved.dialect_name().is_some() {
        assert_eq!(resolved.dialect_name(), Some(dialect.name()));
    }

    let array = DataType::array(DataType::integer());
    if let Ok(resolved) = array.to_dialect_data_type(dialect) {
        let element = resolved.kind().inner().expect("ARRAY has an element type");
        assert_eq!(
            element,
            &DataType::integer()
                .to_dialect_data_type(dialect)
                .expect("INTEGER must be supported by every dialect")
        );
    }
    for id in DataTypeId::ALL {
        assert_eq!(id.as_str().parse::<DataTypeId>().unwrap(), id);
    }
    let error = "VARCHAR2"
        .parse::<DataTypeId>()
        .expect_err("Not a data type");
    assert!(error_kind(&error).is_configuration());
}
