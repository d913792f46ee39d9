//! Response schema descriptors
//!
//! A [`SchemaDescriptor`] is sent with every generation call so the model's
//! output is constrained at the source. It serialises to the structured
//! output format of the model API (`type` in upper case, `properties`,
//! `required`, `nullable`) and can check a parsed value against itself.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Shape of a JSON value the model must return
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum SchemaDescriptor {
    String {
        #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
        allowed: Option<Vec<String>>,
        #[serde(skip_serializing_if = "is_false")]
        nullable: bool,
    },
    Number {
        #[serde(skip_serializing_if = "is_false")]
        nullable: bool,
    },
    Array {
        items: Box<SchemaDescriptor>,
        #[serde(skip_serializing_if = "is_false")]
        nullable: bool,
    },
    Object {
        properties: IndexMap<String, SchemaDescriptor>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        required: Vec<String>,
        #[serde(skip_serializing_if = "is_false")]
        nullable: bool,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

/// A value that does not fit its descriptor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {message}")]
pub struct SchemaViolation {
    /// JSON path of the offending value, e.g. `$.patterns[1].name`
    pub path: String,
    pub message: String,
}

impl SchemaDescriptor {
    #[must_use]
    pub fn string() -> Self {
        Self::String {
            allowed: None,
            nullable: false,
        }
    }

    /// String restricted to the given values
    #[must_use]
    pub fn one_of(values: &[&str]) -> Self {
        Self::String {
            allowed: Some(values.iter().map(|v| (*v).to_string()).collect()),
            nullable: false,
        }
    }

    #[must_use]
    pub fn number() -> Self {
        Self::Number { nullable: false }
    }

    #[must_use]
    pub fn array(items: SchemaDescriptor) -> Self {
        Self::Array {
            items: Box::new(items),
            nullable: false,
        }
    }

    /// Array of strings
    #[must_use]
    pub fn strings() -> Self {
        Self::array(Self::string())
    }

    /// Object without properties
    #[must_use]
    pub fn object() -> Self {
        Self::Object {
            properties: IndexMap::new(),
            required: Vec::new(),
            nullable: false,
        }
    }

    /// Add a required property (objects only)
    #[must_use]
    pub fn required(mut self, name: &str, schema: SchemaDescriptor) -> Self {
        if let Self::Object {
            properties,
            required,
            ..
        } = &mut self
        {
            properties.insert(name.to_string(), schema);
            required.push(name.to_string());
        }
        self
    }

    /// Add an optional, nullable property (objects only)
    #[must_use]
    pub fn optional(mut self, name: &str, schema: SchemaDescriptor) -> Self {
        if let Self::Object { properties, .. } = &mut self {
            properties.insert(name.to_string(), schema.nullable());
        }
        self
    }

    /// Allow `null`
    #[must_use]
    pub fn nullable(mut self) -> Self {
        match &mut self {
            Self::String { nullable, .. }
            | Self::Number { nullable }
            | Self::Array { nullable, .. }
            | Self::Object { nullable, .. } => *nullable = true,
        }
        self
    }

    /// Whether `null` is accepted
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::String { nullable, .. }
            | Self::Number { nullable }
            | Self::Array { nullable, .. }
            | Self::Object { nullable, .. } => *nullable,
        }
    }

    /// Check `value` against this descriptor
    ///
    /// Absent optional properties are accepted; unknown properties are
    /// ignored. The first violation found is reported.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.check(value, "$")
    }

    fn check(&self, value: &Value, path: &str) -> Result<(), SchemaViolation> {
        if value.is_null() {
            return if self.is_nullable() {
                Ok(())
            } else {
                Err(violation(path, "must not be null"))
            };
        }

        match self {
            Self::String { allowed, .. } => {
                let s = value
                    .as_str()
                    .ok_or_else(|| violation(path, "expected string"))?;
                match allowed {
                    Some(allowed) if !allowed.iter().any(|a| a == s) => Err(violation(
                        path,
                        &format!("'{s}' is not one of {}", allowed.join(", ")),
                    )),
                    _ => Ok(()),
                }
            }
            Self::Number { .. } => {
                if value.is_number() {
                    Ok(())
                } else {
                    Err(violation(path, "expected number"))
                }
            }
            Self::Array { items, .. } => {
                let array = value
                    .as_array()
                    .ok_or_else(|| violation(path, "expected array"))?;
                for (i, item) in array.iter().enumerate() {
                    items.check(item, &format!("{path}[{i}]"))?;
                }
                Ok(())
            }
            Self::Object {
                properties,
                required,
                ..
            } => {
                let object = value
                    .as_object()
                    .ok_or_else(|| violation(path, "expected object"))?;
                for name in required {
                    if !object.contains_key(name) {
                        return Err(violation(
                            &format!("{path}.{name}"),
                            "missing required field",
                        ));
                    }
                }
                for (name, schema) in properties {
                    if let Some(field) = object.get(name) {
                        schema.check(field, &format!("{path}.{name}"))?;
                    }
                }
                Ok(())
            }
        }
    }
}

fn violation(path: &str, message: &str) -> SchemaViolation {
    SchemaViolation {
        path: path.to_string(),
        message: message.to_string(),
    }
}

/// Schema of an analysis response
#[must_use]
pub fn analysis_schema() -> SchemaDescriptor {
    let flows = SchemaDescriptor::object()
        .required("primary", SchemaDescriptor::strings())
        .required("secondary", SchemaDescriptor::strings())
        .required("edgeCases", SchemaDescriptor::strings());

    let improvement = SchemaDescriptor::object()
        .required("title", SchemaDescriptor::string())
        .required("rationale", SchemaDescriptor::string())
        .required("howToApply", SchemaDescriptor::string())
        .optional("suggestedComponents", SchemaDescriptor::strings());

    let pattern = SchemaDescriptor::object()
        .required("name", SchemaDescriptor::string())
        .required("why", SchemaDescriptor::string())
        .optional("componentsHint", SchemaDescriptor::strings());

    let wcag = SchemaDescriptor::object()
        .required("issue", SchemaDescriptor::string())
        .required("detail", SchemaDescriptor::string())
        .required("fix", SchemaDescriptor::string());

    SchemaDescriptor::object()
        .required("flows", flows)
        .required("uxImprovements", SchemaDescriptor::array(improvement))
        .required("patterns", SchemaDescriptor::array(pattern))
        .required("wcagNotes", SchemaDescriptor::array(wcag))
        .required("canvasNotes", SchemaDescriptor::strings())
}

/// Schema of a design-generation response
#[must_use]
pub fn design_schema() -> SchemaDescriptor {
    let layout_mode = || SchemaDescriptor::one_of(&["HORIZONTAL", "VERTICAL"]);

    let frame = SchemaDescriptor::object()
        .required("width", SchemaDescriptor::number())
        .required("height", SchemaDescriptor::number())
        .required("layoutMode", layout_mode())
        .optional("gap", SchemaDescriptor::number())
        .optional("padding", SchemaDescriptor::number());

    let node = SchemaDescriptor::object()
        .required(
            "type",
            SchemaDescriptor::one_of(&["component", "text", "rect", "divider"]),
        )
        .optional("componentName", SchemaDescriptor::string())
        .optional("textOverride", SchemaDescriptor::string());

    let region = SchemaDescriptor::object()
        .required("name", SchemaDescriptor::string())
        .optional("height", SchemaDescriptor::number())
        .optional("layoutMode", layout_mode())
        .optional("gap", SchemaDescriptor::number())
        .optional("padding", SchemaDescriptor::number())
        .required("nodes", SchemaDescriptor::array(node));

    let scaffold = SchemaDescriptor::object()
        .required("frame", frame)
        .required("regions", SchemaDescriptor::array(region));

    let proposal = SchemaDescriptor::object()
        .required("title", SchemaDescriptor::string())
        .required("why", SchemaDescriptor::string())
        .required("patternsUsed", SchemaDescriptor::strings());

    SchemaDescriptor::object()
        .required("scaffoldSpec", scaffold)
        .required("proposal", proposal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_to_model_format() {
        let schema = SchemaDescriptor::object()
            .required("name", SchemaDescriptor::string())
            .optional("hint", SchemaDescriptor::strings());
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "OBJECT",
                "properties": {
                    "name": {"type": "STRING"},
                    "hint": {"type": "ARRAY", "items": {"type": "STRING"}, "nullable": true}
                },
                "required": ["name"]
            })
        );
    }

    #[test]
    fn missing_required_field_reports_path() {
        let value = json!({
            "flows": {"primary": [], "secondary": []},
            "uxImprovements": [], "patterns": [], "wcagNotes": [], "canvasNotes": []
        });
        let err = analysis_schema().validate(&value).unwrap_err();
        assert_eq!(err.path, "$.flows.edgeCases");
    }

    #[test]
    fn wrong_item_type_reports_index() {
        let value = json!({
            "flows": {"primary": [], "secondary": [], "edgeCases": []},
            "uxImprovements": [],
            "patterns": [{"name": "A", "why": "b"}, {"name": 3, "why": "c"}],
            "wcagNotes": [], "canvasNotes": []
        });
        let err = analysis_schema().validate(&value).unwrap_err();
        assert_eq!(err.path, "$.patterns[1].name");
        assert_eq!(err.message, "expected string");
    }

    #[test]
    fn nullable_hint_accepts_null() {
        let value = json!({
            "flows": {"primary": ["a"], "secondary": [], "edgeCases": []},
            "uxImprovements": [],
            "patterns": [{"name": "A", "why": "b", "componentsHint": null}],
            "wcagNotes": [], "canvasNotes": ["n"]
        });
        assert!(analysis_schema().validate(&value).is_ok());
    }

    #[test]
    fn design_node_type_is_restricted() {
        let value = json!({
            "scaffoldSpec": {
                "frame": {"width": 1200, "height": 800, "layoutMode": "VERTICAL"},
                "regions": [{"name": "Main", "nodes": [{"type": "image"}]}]
            },
            "proposal": {"title": "t", "why": "w", "patternsUsed": []}
        });
        let err = design_schema().validate(&value).unwrap_err();
        assert_eq!(err.path, "$.scaffoldSpec.regions[0].nodes[0].type");
    }
}
