use crate::{
    ArrayType, BindOptions, BlobType, Calendar, DataTypeOverride, DateType, DecimalOptions,
    DecimalType, Dialect, EnumType, Error, FloatType, GeometryKind, GeometryType, IntegerType,
    RangeOptions, RangeType, Result, SizeClass, StringType, TextType, TimeType, UsageContext,
    Value, VirtualType, capability_error, check_numeric_flags, configuration_error,
    number_to_string, type_mismatch_error,
    types::{
        binary::{blob_to_bindable_value, escape_blob, validate_blob},
        boolean,
        identifier::{generate, validate_uuid},
        network::{validate_cidr, validate_inet, validate_macaddr},
        string::validate_text,
        structured::{
            hstore_to_bindable_value, json_to_bindable_value, parse_hstore_value,
            validate_hstore, validate_json,
        },
        temporal::{
            date_only_to_bindable_value, date_only_values_equal, format_timestamp,
            sanitize_date_only, validate_date_only,
        },
    },
};
use std::{fmt, str::FromStr};
use time::OffsetDateTime;

/// Stable identifier of a data type family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataTypeId {
    String,
    Char,
    Text,
    Citext,
    TinyInt,
    SmallInt,
    MediumInt,
    Integer,
    BigInt,
    Float,
    Real,
    Double,
    Decimal,
    Boolean,
    Time,
    Date,
    DateOnly,
    Now,
    HStore,
    Json,
    Jsonb,
    Blob,
    Range,
    Uuid,
    UuidV1,
    UuidV4,
    Virtual,
    Enum,
    Array,
    Geometry,
    Geography,
    Cidr,
    Inet,
    MacAddr,
    TsVector,
}

impl DataTypeId {
    pub const ALL: [DataTypeId; 35] = [
        DataTypeId::String,
        DataTypeId::Char,
        DataTypeId::Text,
        DataTypeId::Citext,
        DataTypeId::TinyInt,
        DataTypeId::SmallInt,
        DataTypeId::MediumInt,
        DataTypeId::Integer,
        DataTypeId::BigInt,
        DataTypeId::Float,
        DataTypeId::Real,
        DataTypeId::Double,
        DataTypeId::Decimal,
        DataTypeId::Boolean,
        DataTypeId::Time,
        DataTypeId::Date,
        DataTypeId::DateOnly,
        DataTypeId::Now,
        DataTypeId::HStore,
        DataTypeId::Json,
        DataTypeId::Jsonb,
        DataTypeId::Blob,
        DataTypeId::Range,
        DataTypeId::Uuid,
        DataTypeId::UuidV1,
        DataTypeId::UuidV4,
        DataTypeId::Virtual,
        DataTypeId::Enum,
        DataTypeId::Array,
        DataTypeId::Geometry,
        DataTypeId::Geography,
        DataTypeId::Cidr,
        DataTypeId::Inet,
        DataTypeId::MacAddr,
        DataTypeId::TsVector,
    ];

    /// Key used in capability tables and override lookups.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataTypeId::String => "STRING",
            DataTypeId::Char => "CHAR",
            DataTypeId::Text => "TEXT",
            DataTypeId::Citext => "CITEXT",
            DataTypeId::TinyInt => "TINYINT",
            DataTypeId::SmallInt => "SMALLINT",
            DataTypeId::MediumInt => "MEDIUMINT",
            DataTypeId::Integer => "INTEGER",
            DataTypeId::BigInt => "BIGINT",
            DataTypeId::Float => "FLOAT",
            DataTypeId::Real => "REAL",
            DataTypeId::Double => "DOUBLE",
            DataTypeId::Decimal => "DECIMAL",
            DataTypeId::Boolean => "BOOLEAN",
            DataTypeId::Time => "TIME",
            DataTypeId::Date => "DATE",
            DataTypeId::DateOnly => "DATEONLY",
            DataTypeId::Now => "NOW",
            DataTypeId::HStore => "HSTORE",
            DataTypeId::Json => "JSON",
            DataTypeId::Jsonb => "JSONB",
            DataTypeId::Blob => "BLOB",
            DataTypeId::Range => "RANGE",
            DataTypeId::Uuid => "UUID",
            DataTypeId::UuidV1 => "UUIDV1",
            DataTypeId::UuidV4 => "UUIDV4",
            DataTypeId::Virtual => "VIRTUAL",
            DataTypeId::Enum => "ENUM",
            DataTypeId::Array => "ARRAY",
            DataTypeId::Geometry => "GEOMETRY",
            DataTypeId::Geography => "GEOGRAPHY",
            DataTypeId::Cidr => "CIDR",
            DataTypeId::Inet => "INET",
            DataTypeId::MacAddr => "MACADDR",
            DataTypeId::TsVector => "TSVECTOR",
        }
    }
}

impl fmt::Display for DataTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataTypeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DataTypeId::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| configuration_error(format!("'{s}' is not a known data type")))
    }
}

/// Every concrete data type with its options.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    String(StringType),
    Char(StringType),
    Text(TextType),
    Citext,
    TinyInt(IntegerType),
    SmallInt(IntegerType),
    MediumInt(IntegerType),
    Integer(IntegerType),
    BigInt(IntegerType),
    Float(FloatType),
    Real(FloatType),
    Double(FloatType),
    Decimal(DecimalType),
    Boolean,
    Time(TimeType),
    Date(DateType),
    DateOnly,
    Now,
    HStore,
    Json,
    Jsonb,
    Blob(BlobType),
    Range(RangeType),
    Uuid,
    UuidV1,
    UuidV4,
    Virtual(VirtualType),
    Enum(EnumType),
    Array(ArrayType),
    Geometry(GeometryType),
    Geography(GeometryType),
    Cidr,
    Inet,
    MacAddr,
    TsVector,
}

impl TypeKind {
    pub fn data_type_id(&self) -> DataTypeId {
        match self {
            TypeKind::String(..) => DataTypeId::String,
            TypeKind::Char(..) => DataTypeId::Char,
            TypeKind::Text(..) => DataTypeId::Text,
            TypeKind::Citext => DataTypeId::Citext,
            TypeKind::TinyInt(..) => DataTypeId::TinyInt,
            TypeKind::SmallInt(..) => DataTypeId::SmallInt,
            TypeKind::MediumInt(..) => DataTypeId::MediumInt,
            TypeKind::Integer(..) => DataTypeId::Integer,
            TypeKind::BigInt(..) => DataTypeId::BigInt,
            TypeKind::Float(..) => DataTypeId::Float,
            TypeKind::Real(..) => DataTypeId::Real,
            TypeKind::Double(..) => DataTypeId::Double,
            TypeKind::Decimal(..) => DataTypeId::Decimal,
            TypeKind::Boolean => DataTypeId::Boolean,
            TypeKind::Time(..) => DataTypeId::Time,
            TypeKind::Date(..) => DataTypeId::Date,
            TypeKind::DateOnly => DataTypeId::DateOnly,
            TypeKind::Now => DataTypeId::Now,
            TypeKind::HStore => DataTypeId::HStore,
            TypeKind::Json => DataTypeId::Json,
            TypeKind::Jsonb => DataTypeId::Jsonb,
            TypeKind::Blob(..) => DataTypeId::Blob,
            TypeKind::Range(..) => DataTypeId::Range,
            TypeKind::Uuid => DataTypeId::Uuid,
            TypeKind::UuidV1 => DataTypeId::UuidV1,
            TypeKind::UuidV4 => DataTypeId::UuidV4,
            TypeKind::Virtual(..) => DataTypeId::Virtual,
            TypeKind::Enum(..) => DataTypeId::Enum,
            TypeKind::Array(..) => DataTypeId::Array,
            TypeKind::Geometry(..) => DataTypeId::Geometry,
            TypeKind::Geography(..) => DataTypeId::Geography,
            TypeKind::Cidr => DataTypeId::Cidr,
            TypeKind::Inet => DataTypeId::Inet,
            TypeKind::MacAddr => DataTypeId::MacAddr,
            TypeKind::TsVector => DataTypeId::TsVector,
        }
    }

    /// Inner type of the composite kinds.
    pub fn inner(&self) -> Option<&DataType> {
        match self {
            TypeKind::Array(v) => Some(&v.element),
            TypeKind::Range(v) => Some(&v.subtype),
            TypeKind::Virtual(v) => v.return_type.as_deref(),
            _ => None,
        }
    }

    fn inner_mut(&mut self) -> Option<&mut DataType> {
        match self {
            TypeKind::Array(v) => Some(&mut v.element),
            TypeKind::Range(v) => Some(&mut v.subtype),
            TypeKind::Virtual(v) => v.return_type.as_deref_mut(),
            _ => None,
        }
    }
}

/// Dialect specialization a data type was resolved to.
#[derive(Clone, Copy)]
struct Binding {
    dialect: &'static str,
    behavior: &'static dyn DataTypeOverride,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("dialect", &self.dialect)
            .finish()
    }
}

/// A data type instance: options, where it is used and which dialect it was resolved for.
///
/// Options never change after construction. Variants such as "the same type
/// but UNSIGNED" are new instances, see [`DataType::unsigned`].
#[derive(Debug, Clone)]
pub struct DataType {
    kind: TypeKind,
    usage: Option<UsageContext>,
    binding: Option<Binding>,
}

impl PartialEq for DataType {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.usage == other.usage
            && self.binding.map(|v| v.dialect) == other.binding.map(|v| v.dialect)
    }
}

impl From<TypeKind> for DataType {
    fn from(kind: TypeKind) -> Self {
        Self::new(kind)
    }
}

impl From<StringType> for DataType {
    fn from(options: StringType) -> Self {
        Self::new(TypeKind::String(options))
    }
}

impl From<TextType> for DataType {
    fn from(options: TextType) -> Self {
        Self::new(TypeKind::Text(options))
    }
}

impl From<IntegerType> for DataType {
    fn from(options: IntegerType) -> Self {
        Self::new(TypeKind::Integer(options))
    }
}

impl From<FloatType> for DataType {
    fn from(options: FloatType) -> Self {
        Self::new(TypeKind::Float(options))
    }
}

impl From<DecimalType> for DataType {
    fn from(options: DecimalType) -> Self {
        Self::new(TypeKind::Decimal(options))
    }
}

impl From<DateType> for DataType {
    fn from(options: DateType) -> Self {
        Self::new(TypeKind::Date(options))
    }
}

impl From<BlobType> for DataType {
    fn from(options: BlobType) -> Self {
        Self::new(TypeKind::Blob(options))
    }
}

impl From<EnumType> for DataType {
    fn from(options: EnumType) -> Self {
        Self::new(TypeKind::Enum(options))
    }
}

impl From<VirtualType> for DataType {
    fn from(options: VirtualType) -> Self {
        Self::new(TypeKind::Virtual(options))
    }
}

impl From<GeometryType> for DataType {
    fn from(options: GeometryType) -> Self {
        Self::new(TypeKind::Geometry(options))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data_type_id())?;
        if let Some(inner) = self.kind.inner() {
            write!(f, "({inner})")?;
        }
        Ok(())
    }
}

impl DataType {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            usage: None,
            binding: None,
        }
    }

    pub fn string() -> Self {
        StringType::new().into()
    }
    pub fn string_with(options: StringType) -> Self {
        options.into()
    }
    pub fn char() -> Self {
        Self::new(TypeKind::Char(StringType::new()))
    }
    pub fn char_with(options: StringType) -> Self {
        Self::new(TypeKind::Char(options))
    }
    pub fn text() -> Self {
        TextType::new().into()
    }
    /// Size class is one of `tiny`, `medium` or `long`, case insensitive.
    pub fn text_sized(size: &str) -> Result<Self> {
        Ok(TextType::new().size(size.parse::<SizeClass>()?).into())
    }
    pub fn citext() -> Self {
        Self::new(TypeKind::Citext)
    }
    pub fn tinyint() -> Self {
        Self::new(TypeKind::TinyInt(IntegerType::new()))
    }
    pub fn smallint() -> Self {
        Self::new(TypeKind::SmallInt(IntegerType::new()))
    }
    pub fn mediumint() -> Self {
        Self::new(TypeKind::MediumInt(IntegerType::new()))
    }
    pub fn integer() -> Self {
        IntegerType::new().into()
    }
    pub fn bigint() -> Self {
        Self::new(TypeKind::BigInt(IntegerType::new()))
    }
    pub fn float() -> Self {
        FloatType::new().into()
    }
    pub fn real() -> Self {
        Self::new(TypeKind::Real(FloatType::new()))
    }
    pub fn double() -> Self {
        Self::new(TypeKind::Double(FloatType::new()))
    }
    pub fn decimal(precision: u32, scale: u32) -> Self {
        DecimalType::new(precision, scale).into()
    }
    /// Precision and scale must be given together or not at all.
    pub fn decimal_with(options: DecimalOptions) -> Result<Self> {
        Ok(DecimalType::try_from(options)?.into())
    }
    pub fn decimal_unconstrained() -> Self {
        DecimalType::unconstrained().into()
    }
    pub fn boolean() -> Self {
        Self::new(TypeKind::Boolean)
    }
    pub fn time() -> Self {
        Self::new(TypeKind::Time(TimeType::new()))
    }
    pub fn date() -> Self {
        DateType::new().into()
    }
    pub fn date_only() -> Self {
        Self::new(TypeKind::DateOnly)
    }
    pub fn now() -> Self {
        Self::new(TypeKind::Now)
    }
    pub fn hstore() -> Self {
        Self::new(TypeKind::HStore)
    }
    pub fn json() -> Self {
        Self::new(TypeKind::Json)
    }
    pub fn jsonb() -> Self {
        Self::new(TypeKind::Jsonb)
    }
    pub fn blob() -> Self {
        BlobType::new().into()
    }
    pub fn blob_sized(size: &str) -> Result<Self> {
        Ok(BlobType::new().size(size.parse::<SizeClass>()?).into())
    }
    pub fn range(subtype: DataType) -> Self {
        Self::new(TypeKind::Range(RangeType::new(subtype)))
    }
    /// Missing subtype means INTEGER.
    pub fn range_with(options: RangeOptions) -> Self {
        Self::range(options.subtype.unwrap_or_else(Self::integer))
    }
    pub fn uuid() -> Self {
        Self::new(TypeKind::Uuid)
    }
    pub fn uuid_v1() -> Self {
        Self::new(TypeKind::UuidV1)
    }
    pub fn uuid_v4() -> Self {
        Self::new(TypeKind::UuidV4)
    }
    pub fn virtual_type<I, S>(return_type: Option<DataType>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = VirtualType::new().depends_on(fields);
        if let Some(return_type) = return_type {
            options = options.returning(return_type);
        }
        options.into()
    }
    /// Fails on an empty list or a non textual member.
    pub fn enumeration<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Ok(EnumType::new(values)?.into())
    }
    pub fn array(element: DataType) -> Self {
        Self::new(TypeKind::Array(ArrayType::new(element)))
    }
    pub fn geometry() -> Self {
        GeometryType::new().into()
    }
    pub fn geometry_with(kind: GeometryKind, srid: Option<u32>) -> Self {
        Self::new(TypeKind::Geometry(GeometryType { kind: Some(kind), srid }))
    }
    pub fn geography() -> Self {
        Self::new(TypeKind::Geography(GeometryType::new()))
    }
    pub fn geography_with(kind: GeometryKind, srid: Option<u32>) -> Self {
        Self::new(TypeKind::Geography(GeometryType { kind: Some(kind), srid }))
    }
    pub fn cidr() -> Self {
        Self::new(TypeKind::Cidr)
    }
    pub fn inet() -> Self {
        Self::new(TypeKind::Inet)
    }
    pub fn macaddr() -> Self {
        Self::new(TypeKind::MacAddr)
    }
    pub fn tsvector() -> Self {
        Self::new(TypeKind::TsVector)
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn data_type_id(&self) -> DataTypeId {
        self.kind.data_type_id()
    }

    /// Generic behavior, ignoring any dialect specialization.
    pub fn base(&self) -> Base<'_> {
        Base(self)
    }

    pub fn usage_context(&self) -> Option<&UsageContext> {
        self.usage.as_ref()
    }

    /// Name of the dialect this instance was resolved for.
    pub fn dialect_name(&self) -> Option<&'static str> {
        self.binding.map(|v| v.dialect)
    }

    /// Date-like value recognizer of the owning catalog.
    pub fn calendar(&self) -> Option<&dyn Calendar> {
        self.usage.as_ref().and_then(|v| v.catalog().calendar())
    }

    fn behavior(&self) -> Option<&'static dyn DataTypeOverride> {
        self.binding.map(|v| v.behavior)
    }

    /// Same options, no usage context.
    pub fn detached(&self) -> Self {
        let mut result = self.clone();
        result.detach();
        result
    }

    fn detach(&mut self) {
        self.usage = None;
        if let Some(inner) = self.kind.inner_mut() {
            inner.detach();
        }
    }

    /// Attaching the same context twice is a no-op, a different one is an error.
    pub fn attach_usage_context(&mut self, usage: UsageContext) -> Result<&mut Self> {
        if let Some(existing) = &self.usage {
            if *existing == usage {
                return Ok(self);
            }
            return Err(configuration_error(format!(
                "This data type is already attached to {existing}, and therefore cannot be attached to {usage}"
            )));
        }
        if let Some(inner) = self.kind.inner_mut() {
            inner.attach_usage_context(usage.clone())?;
        }
        self.usage = Some(usage);
        Ok(self)
    }

    /// Instance specialized for `dialect`, with its options checked against the dialect capabilities.
    pub fn to_dialect_data_type(&self, dialect: &dyn Dialect) -> Result<DataType> {
        let id = self.data_type_id();
        let binding = dialect.data_type_override(id).map(|behavior| Binding {
            dialect: dialect.name(),
            behavior,
        });
        let mut resolved = self.clone();
        if let Some(binding) = binding {
            if self.dialect_name() != Some(binding.dialect) {
                log::debug!("Resolved {id} to its {} specialization", binding.dialect);
            }
        }
        resolved.binding = binding;
        resolved.check_option_support(dialect)?;
        if let Some(inner) = resolved.kind.inner_mut() {
            *inner = inner.to_dialect_data_type(dialect)?;
        }
        Ok(resolved)
    }

    pub fn check_option_support(&self, dialect: &dyn Dialect) -> Result<()> {
        match self.behavior() {
            Some(behavior) => behavior.check_option_support(self, dialect),
            None => self.base().check_option_support(dialect),
        }
    }

    pub fn validate(&self, value: &Value) -> Result<()> {
        match self.behavior() {
            Some(behavior) => behavior.validate(self, value),
            None => self.base().validate(value),
        }
    }

    pub fn sanitize(&self, value: Value) -> Result<Value> {
        match self.behavior() {
            Some(behavior) => behavior.sanitize(self, value),
            None => self.base().sanitize(value),
        }
    }

    pub fn parse(&self, value: Value, dialect: &dyn Dialect) -> Result<Value> {
        match self.behavior() {
            Some(behavior) => behavior.parse(self, value, dialect),
            None => self.base().parse(value, dialect),
        }
    }

    pub fn are_values_equal(&self, value: &Value, original: &Value) -> bool {
        match self.behavior() {
            Some(behavior) => behavior.are_values_equal(self, value, original),
            None => self.base().are_values_equal(value, original),
        }
    }

    pub fn to_bindable_value(&self, value: &Value, options: &BindOptions) -> Result<Value> {
        match self.behavior() {
            Some(behavior) => behavior.to_bindable_value(self, value, options),
            None => self.base().to_bindable_value(value, options),
        }
    }

    /// Hands the bindable value to the caller's binder and returns its token.
    pub fn bind_param(
        &self,
        value: &Value,
        options: &BindOptions,
        binder: &mut dyn FnMut(Value) -> String,
    ) -> Result<String> {
        Ok(binder(self.to_bindable_value(value, options)?))
    }

    pub fn escape(&self, value: &Value, options: &BindOptions) -> Result<String> {
        match self.behavior() {
            Some(behavior) => behavior.escape(self, value, options),
            None => self.base().escape(value, options),
        }
    }

    pub fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        match self.behavior() {
            Some(behavior) => behavior.to_sql(self, dialect),
            None => self.base().to_sql(dialect),
        }
    }

    /// Generated value of the default value markers (NOW, UUIDV1, UUIDV4).
    pub fn default_value(&self) -> Option<Value> {
        match self.kind {
            TypeKind::Now => Some(Value::Timestamp(OffsetDateTime::now_utc())),
            TypeKind::UuidV1 => Some(generate(1)),
            TypeKind::UuidV4 => Some(generate(4)),
            _ => None,
        }
    }

    /// New instance with the UNSIGNED flag.
    pub fn unsigned(&self) -> Result<Self> {
        let mut result = self.detached();
        match &mut result.kind {
            TypeKind::TinyInt(o)
            | TypeKind::SmallInt(o)
            | TypeKind::MediumInt(o)
            | TypeKind::Integer(o)
            | TypeKind::BigInt(o) => o.unsigned = true,
            TypeKind::Float(o) | TypeKind::Real(o) | TypeKind::Double(o) => o.unsigned = true,
            TypeKind::Decimal(o) => o.unsigned = true,
            _ => {
                return Err(configuration_error(format!(
                    "{} has no UNSIGNED variant",
                    self.data_type_id()
                )));
            }
        }
        Ok(result)
    }

    /// New instance with the ZEROFILL flag.
    pub fn zerofill(&self) -> Result<Self> {
        let mut result = self.detached();
        match &mut result.kind {
            TypeKind::TinyInt(o)
            | TypeKind::SmallInt(o)
            | TypeKind::MediumInt(o)
            | TypeKind::Integer(o)
            | TypeKind::BigInt(o) => o.zerofill = true,
            TypeKind::Float(o) | TypeKind::Real(o) | TypeKind::Double(o) => o.zerofill = true,
            TypeKind::Decimal(o) => o.zerofill = true,
            _ => {
                return Err(configuration_error(format!(
                    "{} has no ZEROFILL variant",
                    self.data_type_id()
                )));
            }
        }
        Ok(result)
    }

    /// New instance with the BINARY flag.
    pub fn binary(&self) -> Result<Self> {
        let mut result = self.detached();
        match &mut result.kind {
            TypeKind::String(o) | TypeKind::Char(o) => o.binary = true,
            _ => {
                return Err(configuration_error(format!(
                    "{} has no BINARY variant",
                    self.data_type_id()
                )));
            }
        }
        Ok(result)
    }
}

/// The generic implementation of every operation.
///
/// Dialect specializations call into it for the parts they do not change.
#[derive(Debug, Clone, Copy)]
pub struct Base<'a>(&'a DataType);

impl<'a> Base<'a> {
    pub fn data_type(&self) -> &'a DataType {
        self.0
    }

    pub fn check_option_support(&self, dialect: &dyn Dialect) -> Result<()> {
        let id = self.0.data_type_id();
        let capabilities = dialect.capabilities();
        if capabilities.is_unsupported(id.as_str()) {
            return Err(capability_error(dialect.name(), id.as_str()));
        }
        match &self.0.kind {
            TypeKind::Char(o) => o.check_char_support(dialect),
            TypeKind::TinyInt(o)
            | TypeKind::SmallInt(o)
            | TypeKind::MediumInt(o)
            | TypeKind::Integer(o)
            | TypeKind::BigInt(o) => check_numeric_flags(dialect, id, o.unsigned, o.zerofill),
            TypeKind::Float(o) | TypeKind::Real(o) | TypeKind::Double(o) => {
                check_numeric_flags(dialect, id, o.unsigned, o.zerofill)
            }
            TypeKind::Decimal(o) => {
                o.check_support(dialect)?;
                check_numeric_flags(dialect, id, o.unsigned, o.zerofill)
            }
            TypeKind::TsVector if !capabilities.is_declared(id.as_str()) => {
                Err(capability_error(dialect.name(), id.as_str()))
            }
            _ => Ok(()),
        }
    }

    pub fn validate(&self, value: &Value) -> Result<()> {
        let id = self.0.data_type_id();
        match &self.0.kind {
            TypeKind::String(o) | TypeKind::Char(o) => o.validate(value),
            TypeKind::Text(..) | TypeKind::Citext | TypeKind::TsVector => validate_text(value),
            TypeKind::TinyInt(o)
            | TypeKind::SmallInt(o)
            | TypeKind::MediumInt(o)
            | TypeKind::Integer(o)
            | TypeKind::BigInt(o) => o.validate(value, id),
            TypeKind::Float(o) | TypeKind::Real(o) | TypeKind::Double(o) => o.validate(value, id),
            TypeKind::Decimal(o) => o.validate(value),
            TypeKind::Boolean => boolean::validate(value),
            TypeKind::Time(o) => o.validate(value),
            TypeKind::Date(o) => o.validate(value, self.0.calendar()),
            TypeKind::DateOnly => validate_date_only(value),
            TypeKind::HStore => validate_hstore(value),
            TypeKind::Json | TypeKind::Jsonb => validate_json(value),
            TypeKind::Blob(..) => validate_blob(value),
            TypeKind::Range(o) => o.validate(value),
            TypeKind::Uuid => validate_uuid(value, None),
            TypeKind::UuidV1 => validate_uuid(value, Some(1)),
            TypeKind::UuidV4 => validate_uuid(value, Some(4)),
            TypeKind::Virtual(o) => match o.return_type() {
                Some(return_type) => return_type.validate(value),
                None => Ok(()),
            },
            TypeKind::Enum(o) => o.validate(value),
            TypeKind::Array(o) => o.validate(value),
            TypeKind::Geometry(o) => o.validate(value, "geometry"),
            TypeKind::Geography(o) => o.validate(value, "geography"),
            TypeKind::Cidr => validate_cidr(value),
            TypeKind::Inet => validate_inet(value),
            TypeKind::MacAddr => validate_macaddr(value),
            TypeKind::Now => Ok(()),
        }
    }

    pub fn sanitize(&self, value: Value) -> Result<Value> {
        match &self.0.kind {
            TypeKind::TinyInt(o)
            | TypeKind::SmallInt(o)
            | TypeKind::MediumInt(o)
            | TypeKind::Integer(o) => Ok(o.sanitize(value)),
            TypeKind::BigInt(o) => Ok(o.sanitize_big(value)),
            TypeKind::Float(o) | TypeKind::Real(o) | TypeKind::Double(o) => Ok(o.sanitize(value)),
            TypeKind::Boolean => Ok(boolean::sanitize(value)),
            TypeKind::Date(o) => o.sanitize(value, self.0.calendar()),
            TypeKind::DateOnly => Ok(sanitize_date_only(value)),
            TypeKind::Range(o) => o.sanitize(value),
            TypeKind::Array(o) => o.sanitize(value),
            TypeKind::Virtual(o) => match o.return_type() {
                Some(return_type) => return_type.sanitize(value),
                None => Ok(value),
            },
            _ => Ok(value),
        }
    }

    /// Identity unless the wire format is ambiguous.
    pub fn parse(&self, value: Value, dialect: &dyn Dialect) -> Result<Value> {
        match &self.0.kind {
            TypeKind::Boolean => boolean::parse(value),
            TypeKind::HStore => parse_hstore_value(value),
            TypeKind::Array(o) => o.parse(value, dialect),
            TypeKind::Range(o) => match value {
                Value::String(v) => crate::parse_range_literal(&v, &o.subtype, dialect),
                v => Ok(v),
            },
            _ => Ok(value),
        }
    }

    pub fn are_values_equal(&self, value: &Value, original: &Value) -> bool {
        match &self.0.kind {
            TypeKind::Date(o) => o.are_values_equal(value, original, self.0.calendar()),
            TypeKind::DateOnly => date_only_values_equal(value, original),
            TypeKind::Array(o) => o.are_values_equal(value, original),
            _ => value == original,
        }
    }

    pub fn to_bindable_value(&self, value: &Value, options: &BindOptions) -> Result<Value> {
        let id = self.0.data_type_id();
        match &self.0.kind {
            TypeKind::String(o) | TypeKind::Char(o) => o.to_bindable_value(value),
            TypeKind::Text(..) | TypeKind::Citext | TypeKind::TsVector => {
                validate_text(value)?;
                Ok(value.clone())
            }
            TypeKind::TinyInt(o)
            | TypeKind::SmallInt(o)
            | TypeKind::MediumInt(o)
            | TypeKind::Integer(o)
            | TypeKind::BigInt(o) => o.to_bindable_value(value, id),
            TypeKind::Float(o) | TypeKind::Real(o) | TypeKind::Double(o) => {
                o.to_bindable_value(value, id)
            }
            TypeKind::Decimal(o) => o.to_bindable_value(value),
            TypeKind::Boolean => boolean::to_bindable_value(value),
            TypeKind::Time(o) => o.to_bindable_value(value),
            TypeKind::Date(o) => o.to_bindable_value(value, options, self.0.calendar()),
            TypeKind::DateOnly => date_only_to_bindable_value(value),
            TypeKind::HStore => hstore_to_bindable_value(value),
            TypeKind::Json | TypeKind::Jsonb => json_to_bindable_value(value),
            TypeKind::Blob(..) => blob_to_bindable_value(value),
            TypeKind::Range(o) => o.to_bindable_value(value, options),
            TypeKind::Array(o) => o.to_bindable_value(value, options),
            TypeKind::Geometry(o) => {
                o.validate(value, "geometry")?;
                json_to_bindable_value(value)
            }
            TypeKind::Geography(o) => {
                o.validate(value, "geography")?;
                json_to_bindable_value(value)
            }
            TypeKind::Virtual(o) => match o.return_type() {
                Some(return_type) => return_type.to_bindable_value(value, options),
                None => Ok(Value::String(stringify(value)?)),
            },
            _ => Ok(Value::String(stringify(value)?)),
        }
    }

    /// Inline literal. Types binding to something else than text escape it themselves.
    pub fn escape(&self, value: &Value, options: &BindOptions) -> Result<String> {
        let id = self.0.data_type_id();
        match &self.0.kind {
            TypeKind::String(o) | TypeKind::Char(o) => o.escape(value, options),
            TypeKind::TinyInt(o)
            | TypeKind::SmallInt(o)
            | TypeKind::MediumInt(o)
            | TypeKind::Integer(o)
            | TypeKind::BigInt(o) => o.escape(value, id),
            TypeKind::Float(o) | TypeKind::Real(o) | TypeKind::Double(o) => {
                o.escape(value, options, id)
            }
            TypeKind::Decimal(o) => o.escape(value),
            TypeKind::Boolean => boolean::escape(value, options),
            TypeKind::Blob(..) => escape_blob(value, options),
            TypeKind::Array(o) => o.escape(value, options),
            TypeKind::Virtual(VirtualType {
                return_type: Some(return_type),
                ..
            }) => return_type.escape(value, options),
            _ => match self.0.to_bindable_value(value, options)? {
                Value::String(v) => Ok(options.dialect.escape_string(&v)),
                v => Err(type_mismatch_error(format!(
                    "{id} must be converted to a string before it can be escaped, got {v}"
                ))),
            },
        }
    }

    pub fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        let mut out = String::new();
        match &self.0.kind {
            TypeKind::String(o) => o.write_sql(&mut out, "VARCHAR"),
            TypeKind::Char(o) => o.write_sql(&mut out, "CHAR"),
            TypeKind::Text(o) => o.write_sql(&mut out),
            TypeKind::Citext => out.push_str("CITEXT"),
            TypeKind::TinyInt(o) => o.write_sql(&mut out, "TINYINT"),
            TypeKind::SmallInt(o) => o.write_sql(&mut out, "SMALLINT"),
            TypeKind::MediumInt(o) => o.write_sql(&mut out, "MEDIUMINT"),
            TypeKind::Integer(o) => o.write_sql(&mut out, "INTEGER"),
            TypeKind::BigInt(o) => o.write_sql(&mut out, "BIGINT"),
            TypeKind::Float(o) => o.write_sql(&mut out, "FLOAT"),
            TypeKind::Real(o) => o.write_sql(&mut out, "REAL"),
            TypeKind::Double(o) => o.write_sql(&mut out, "DOUBLE PRECISION"),
            TypeKind::Decimal(o) => o.write_sql(&mut out, "DECIMAL"),
            TypeKind::Boolean => out.push_str("BOOLEAN"),
            TypeKind::Time(o) => o.write_sql(&mut out),
            TypeKind::Date(o) => o.write_sql(&mut out, "DATETIME"),
            TypeKind::DateOnly => out.push_str("DATE"),
            TypeKind::Now => out.push_str("NOW"),
            TypeKind::HStore => out.push_str("HSTORE"),
            TypeKind::Json => out.push_str("JSON"),
            TypeKind::Jsonb => out.push_str("JSONB"),
            TypeKind::Blob(o) => o.write_sql(&mut out),
            TypeKind::Range(..) => return Err(capability_error(dialect.name(), "RANGE")),
            TypeKind::Uuid => out.push_str("UUID"),
            TypeKind::UuidV1 | TypeKind::UuidV4 => {
                return Err(configuration_error(format!(
                    "{} is a default value generator, use UUID as the column type",
                    self.0.data_type_id()
                )));
            }
            TypeKind::Virtual(..) => {
                return Err(configuration_error(
                    "VIRTUAL data types are never stored and have no SQL declaration",
                ));
            }
            TypeKind::Enum(..) => return Err(capability_error(dialect.name(), "ENUM")),
            TypeKind::Array(o) => {
                out.push_str(&o.element.to_sql(dialect)?);
                out.push_str("[]");
            }
            TypeKind::Geometry(o) => o.write_sql(&mut out, "GEOMETRY"),
            TypeKind::Geography(o) => o.write_sql(&mut out, "GEOGRAPHY"),
            TypeKind::Cidr => out.push_str("CIDR"),
            TypeKind::Inet => out.push_str("INET"),
            TypeKind::MacAddr => out.push_str("MACADDR"),
            TypeKind::TsVector => out.push_str("TSVECTOR"),
        }
        Ok(out)
    }
}

/// Default textual form of a bindable value.
pub fn stringify(value: &Value) -> Result<String> {
    Ok(match value {
        Value::String(v) => v.clone(),
        Value::Number(v) => number_to_string(*v),
        Value::BigInt(v) => {
            let mut buffer = itoa::Buffer::new();
            buffer.format(*v).into()
        }
        Value::Decimal(v) => v.to_string(),
        Value::Boolean(v) => v.to_string(),
        Value::Timestamp(v) => format_timestamp(*v, true)?,
        Value::Null => "NULL".into(),
        Value::Now => "NOW".into(),
        _ => value.to_string(),
    })
}
