use crate::error_kind;
use caliber_core::{BindOptions, DataType, Dialect, Value};
#[cfg(not(feature = "disable-geometry"))]
use caliber_core::{GeometryKind, to_wkt};
#[cfg(not(feature = "disable-hstore"))]
use caliber_core::{parse_hstore, stringify_hstore};

pub fn json(dialect: &dyn Dialect) {
    let options = BindOptions::new(dialect);
    let json = DataType::json()
        .to_dialect_data_type(dialect)
        .expect("JSON must be supported by every dialect");
    let document = Value::map([
        ("name", Value::from("caliber")),
        ("tags", Value::array(["a", "b"])),
        ("version", Value::from(1)),
    ]);
    json.validate(&document).expect("A map is valid JSON");
    json.validate(&Value::Null).expect("null is valid JSON");
    let error = json
        .validate(&Value::Bytes([1].into()))
        .expect_err("Bytes have no JSON representation");
    assert!(error_kind(&error).is_validation());
    assert_eq!(
        json.to_bindable_value(&document, &options).unwrap(),
        Value::from(r#"{"name":"caliber","tags":["a","b"],"version":1}"#)
    );
    assert_eq!(
        json.to_bindable_value(&Value::from(0.5), &options).unwrap(),
        Value::from("0.5")
    );
    assert_eq!(
        json.escape(&Value::map([("quote", "it's")]), &options)
            .unwrap(),
        dialect.escape_string(r#"{"quote":"it's"}"#)
    );
}

#[cfg(not(feature = "disable-hstore"))]
pub fn hstore(dialect: &dyn Dialect) {
    let options = BindOptions::new(dialect);
    let hstore = DataType::hstore()
        .to_dialect_data_type(dialect)
        .expect("HSTORE must be supported");
    let document = Value::map([
        ("plain", Value::from("value")),
        ("quoted", Value::from(r#"say "hi""#)),
        ("missing", Value::Null),
    ]);
    hstore.validate(&document).expect("Valid hstore");
    let error = hstore
        .validate(&Value::map([("nested", Value::map([("a", "b")]))]))
        .expect_err("Nested objects are not valid hstore values");
    assert!(error_kind(&error).is_validation());
    assert!(hstore.validate(&"a=>b".into()).is_err());

    let Value::Map(entries) = &document else {
        unreachable!();
    };
    let text = stringify_hstore(entries);
    assert_eq!(
        text,
        r#""missing"=>NULL,"plain"=>"value","quoted"=>"say \"hi\"""#
    );
    assert_eq!(&parse_hstore(&text).expect("Could not parse hstore"), entries);
    assert_eq!(
        hstore.to_bindable_value(&document, &options).unwrap(),
        Value::String(text.clone())
    );
    assert_eq!(hstore.parse(text.into(), dialect).unwrap(), document);
    assert!(parse_hstore(r#""open"=>"never closed"#).is_err());
}

#[cfg(not(feature = "disable-geometry"))]
pub fn geometry(dialect: &dyn Dialect) {
    let point = Value::map([
        ("type", Value::from("Point")),
        ("coordinates", Value::array([1.5, 2.0])),
    ]);
    let line = Value::map([
        ("type", Value::from("LineString")),
        (
            "coordinates",
            Value::array([Value::array([0, 0]), Value::array([1, 1])]),
        ),
    ]);

    let geometry = DataType::geometry()
        .to_dialect_data_type(dialect)
        .expect("GEOMETRY must be supported");
    geometry.validate(&point).expect("A point is a geometry");
    geometry.validate(&line).expect("A line is a geometry");
    let error = geometry
        .validate(&Value::map([("type", "Point")]))
        .expect_err("A point needs coordinates");
    assert!(error_kind(&error).is_validation());
    assert!(geometry.validate(&"POINT(1 2)".into()).is_err());

    let points = DataType::geometry_with(GeometryKind::Point, Some(4326))
        .to_dialect_data_type(dialect)
        .expect("GEOMETRY(POINT) must be supported");
    assert_eq!(points.to_sql(dialect).unwrap(), "GEOMETRY(POINT,4326)");
    points.validate(&point).expect("A point is a point");
    let error = points
        .validate(&line)
        .expect_err("A line is not a point");
    assert!(error_kind(&error).is_validation());
    assert!(error.to_string().contains("expected a Point"));

    assert_eq!(to_wkt(&point).unwrap(), "POINT(1.5 2)");
    assert_eq!(to_wkt(&line).unwrap(), "LINESTRING(0 0,1 1)");
}
