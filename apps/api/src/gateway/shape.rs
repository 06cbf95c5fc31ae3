//! Expected-shape descriptors and field back-fill.
//!
//! A `Shape` is the declared contract of one operation's JSON output. It does two jobs:
//! - renders the `responseSchema` sent to the model (`to_schema`)
//! - turns whatever JSON the model produced into a fully populated object (`backfill`)
//!
//! `backfill` is total: missing or mistyped fields get their declared default, unknown
//! fields are dropped, so every declared field is always present with the right kind.

use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Integer,
    Array(Box<FieldKind>),
    Object(Shape),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Overrides the kind's natural default (e.g. a placeholder sentence).
    default: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    fields: Vec<Field>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(self, name: &'static str) -> Self {
        self.field(name, FieldKind::String, None)
    }

    /// A string field whose default is `placeholder` instead of the empty string.
    pub fn string_or(self, name: &'static str, placeholder: impl Into<String>) -> Self {
        self.field(
            name,
            FieldKind::String,
            Some(Value::String(placeholder.into())),
        )
    }

    pub fn integer(self, name: &'static str) -> Self {
        self.field(name, FieldKind::Integer, None)
    }

    pub fn string_list(self, name: &'static str) -> Self {
        self.field(name, FieldKind::Array(Box::new(FieldKind::String)), None)
    }

    pub fn object(self, name: &'static str, shape: Shape) -> Self {
        self.field(name, FieldKind::Object(shape), None)
    }

    pub fn object_list(self, name: &'static str, shape: Shape) -> Self {
        self.field(
            name,
            FieldKind::Array(Box::new(FieldKind::Object(shape))),
            None,
        )
    }

    fn field(mut self, name: &'static str, kind: FieldKind, default: Option<Value>) -> Self {
        self.fields.push(Field {
            name,
            kind,
            default,
        });
        self
    }

    /// The first string field; plain-text operations put the model's prose here.
    pub fn text_field(&self) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.kind == FieldKind::String)
            .map(|f| f.name)
    }

    /// The object produced when nothing usable was extracted.
    pub fn default_value(&self) -> Value {
        self.backfill(&Value::Null)
    }

    /// Conforms an arbitrary JSON value to this shape, field by field.
    pub fn backfill(&self, value: &Value) -> Value {
        let source = value.as_object();
        let mut out = Map::with_capacity(self.fields.len());

        for field in &self.fields {
            let conformed = source
                .and_then(|obj| obj.get(field.name))
                .and_then(|v| field.kind.conform(v))
                .unwrap_or_else(|| field.default_value());
            out.insert(field.name.to_string(), conformed);
        }

        Value::Object(out)
    }

    /// Renders the schema in the generative API's `responseSchema` dialect.
    pub fn to_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.kind.to_schema()))
            .collect();

        json!({
            "type": "OBJECT",
            "properties": properties,
        })
    }
}

impl Field {
    fn default_value(&self) -> Value {
        match &self.default {
            Some(v) => v.clone(),
            None => self.kind.default_value(),
        }
    }
}

impl FieldKind {
    fn default_value(&self) -> Value {
        match self {
            FieldKind::String => Value::String(String::new()),
            FieldKind::Integer => Value::from(0),
            FieldKind::Array(_) => Value::Array(Vec::new()),
            FieldKind::Object(shape) => shape.default_value(),
        }
    }

    /// Returns the value coerced to this kind, or `None` if it is the wrong kind.
    fn conform(&self, value: &Value) -> Option<Value> {
        match self {
            FieldKind::String => value.as_str().map(Value::from),
            FieldKind::Integer => value
                .as_i64()
                .or_else(|| {
                    value
                        .as_f64()
                        .filter(|f| f.is_finite())
                        .map(|f| f.round() as i64)
                })
                .map(Value::from),
            // Mistyped elements are dropped rather than defaulted.
            FieldKind::Array(item) => value
                .as_array()
                .map(|items| Value::Array(items.iter().filter_map(|i| item.conform(i)).collect())),
            FieldKind::Object(shape) => value.is_object().then(|| shape.backfill(value)),
        }
    }

    fn to_schema(&self) -> Value {
        match self {
            FieldKind::String => json!({ "type": "STRING" }),
            FieldKind::Integer => json!({ "type": "INTEGER" }),
            FieldKind::Array(item) => json!({ "type": "ARRAY", "items": item.to_schema() }),
            FieldKind::Object(shape) => shape.to_schema(),
        }
    }
}
