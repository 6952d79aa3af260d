//! Response schema descriptors.
//!
//! A `Schema` is sent to the service with every structured request and is
//! checked again against the parsed response before it is deserialized into a
//! model type. Validation does not trust the service to have honoured the schema.

use serde_json::{json, Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Empty `enum_values` means any string.
    String {
        enum_values: &'static [&'static str],
    },
    Number {
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
    Array {
        items: Box<Schema>,
        min_items: usize,
    },
    Object {
        properties: Vec<Property>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: &'static str,
    pub schema: Schema,
    pub required: bool,
    pub description: Option<&'static str>,
}

impl Property {
    pub fn required(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            required: true,
            description: None,
        }
    }

    pub fn optional(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            required: false,
            description: None,
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// First mismatch found between a response and its schema.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {reason}")]
pub struct SchemaViolation {
    pub path: String,
    pub reason: String,
}

impl Schema {
    pub fn string() -> Self {
        Schema::String { enum_values: &[] }
    }

    pub fn one_of(values: &'static [&'static str]) -> Self {
        Schema::String {
            enum_values: values,
        }
    }

    pub fn number() -> Self {
        Schema::Number {
            minimum: None,
            maximum: None,
        }
    }

    pub fn bounded(minimum: f64, maximum: f64) -> Self {
        Schema::Number {
            minimum: Some(minimum),
            maximum: Some(maximum),
        }
    }

    /// An array that must hold at least one element.
    pub fn non_empty(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
            min_items: 1,
        }
    }

    pub fn object(properties: Vec<Property>) -> Self {
        Schema::Object { properties }
    }

    /// Renders the OpenAPI-subset JSON the generative service accepts as `responseSchema`.
    pub fn to_wire(&self) -> Value {
        match self {
            Schema::String { enum_values } if enum_values.is_empty() => json!({ "type": "STRING" }),
            Schema::String { enum_values } => json!({
                "type": "STRING",
                "format": "enum",
                "enum": enum_values,
            }),
            Schema::Number { minimum, maximum } => {
                let mut wire = Map::new();
                wire.insert("type".into(), json!("NUMBER"));
                if let Some(min) = minimum {
                    wire.insert("minimum".into(), json!(min));
                }
                if let Some(max) = maximum {
                    wire.insert("maximum".into(), json!(max));
                }
                Value::Object(wire)
            }
            Schema::Array { items, min_items } => {
                let mut wire = Map::new();
                wire.insert("type".into(), json!("ARRAY"));
                wire.insert("items".into(), items.to_wire());
                if *min_items > 0 {
                    wire.insert("minItems".into(), json!(min_items));
                }
                Value::Object(wire)
            }
            Schema::Object { properties } => {
                let mut wire_props = Map::new();
                for prop in properties {
                    let mut child = prop.schema.to_wire();
                    if let (Some(description), Value::Object(fields)) =
                        (prop.description, &mut child)
                    {
                        fields.insert("description".into(), json!(description));
                    }
                    wire_props.insert(prop.name.to_string(), child);
                }
                let required: Vec<&str> = properties
                    .iter()
                    .filter(|p| p.required)
                    .map(|p| p.name)
                    .collect();
                let ordering: Vec<&str> = properties.iter().map(|p| p.name).collect();

                json!({
                    "type": "OBJECT",
                    "properties": wire_props,
                    "required": required,
                    "propertyOrdering": ordering,
                })
            }
        }
    }

    /// Checks `value` against this schema. Unknown object fields are ignored.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), SchemaViolation> {
        match self {
            Schema::String { enum_values } => {
                let s = value
                    .as_str()
                    .ok_or_else(|| mismatch(path, "string", value))?;
                if !enum_values.is_empty() && !enum_values.contains(&s) {
                    return Err(violation(
                        path,
                        format!("'{s}' is not one of {}", enum_values.join(", ")),
                    ));
                }
                Ok(())
            }
            Schema::Number { minimum, maximum } => {
                let n = value
                    .as_f64()
                    .ok_or_else(|| mismatch(path, "number", value))?;
                if let Some(min) = minimum {
                    if n < *min {
                        return Err(violation(path, format!("{n} is below minimum {min}")));
                    }
                }
                if let Some(max) = maximum {
                    if n > *max {
                        return Err(violation(path, format!("{n} is above maximum {max}")));
                    }
                }
                Ok(())
            }
            Schema::Array { items, min_items } => {
                let elements = value
                    .as_array()
                    .ok_or_else(|| mismatch(path, "array", value))?;
                if elements.len() < *min_items {
                    return Err(violation(
                        path,
                        format!(
                            "expected at least {min_items} item(s), found {}",
                            elements.len()
                        ),
                    ));
                }
                for (i, element) in elements.iter().enumerate() {
                    items.validate_at(element, &format!("{path}[{i}]"))?;
                }
                Ok(())
            }
            Schema::Object { properties } => {
                let fields = value
                    .as_object()
                    .ok_or_else(|| mismatch(path, "object", value))?;
                for prop in properties {
                    let child_path = format!("{path}.{}", prop.name);
                    match fields.get(prop.name) {
                        None | Some(Value::Null) if prop.required => {
                            return Err(violation(&child_path, "required field is missing"));
                        }
                        None | Some(Value::Null) => {}
                        Some(child) => prop.schema.validate_at(child, &child_path)?,
                    }
                }
                Ok(())
            }
        }
    }
}

fn violation(path: &str, reason: impl Into<String>) -> SchemaViolation {
    SchemaViolation {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn mismatch(path: &str, expected: &str, found: &Value) -> SchemaViolation {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    violation(path, format!("expected {expected}, found {found}"))
}
