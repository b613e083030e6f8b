use indexmap::IndexMap;

/// A GraphQL
/// [input value literal](https://spec.graphql.org/October2021/#sec-Input-Values)
/// as it appears in a field argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    String(String),
    Bool(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),

            // JSON string escaping is valid GraphQL string syntax.
            Self::String(value) => write!(
                f,
                "{}",
                serde_json::Value::String(value.to_owned()),
            ),

            Self::Bool(value) => write!(f, "{value}"),

            Self::Null => f.write_str("null"),

            Self::Enum(value) => f.write_str(value),

            Self::List(values) => {
                f.write_str("[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            },

            Self::Object(entries) => {
                if entries.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {key}: {value}")?;
                }
                f.write_str(" }")
            },
        }
    }
}
