//! Helpers for building [`Schema`]s in tests.
//!
//! Tests describe schemas in SDL; [`introspection_from_sdl()`] converts the SDL
//! into the same [`IntrospectionSchema`] an endpoint would answer with, so
//! everything downstream of the introspection payload is exercised for real.

use crate::introspection::IntrospectionEnumValue;
use crate::introspection::IntrospectionField;
use crate::introspection::IntrospectionInputValue;
use crate::introspection::IntrospectionRootRef;
use crate::introspection::IntrospectionSchema;
use crate::introspection::IntrospectionType;
use crate::introspection::IntrospectionTypeRef;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLTypeKind;
use graphql_parser::schema as ast;
use std::collections::HashMap;

pub(crate) fn schema_from_sdl(sdl: &str) -> Schema {
    SchemaBuilder::from_introspection(introspection_from_sdl(sdl))
        .build()
        .expect("schema builds")
}

pub(crate) fn schema_from_introspection_json(value: serde_json::Value) -> Schema {
    SchemaBuilder::from_introspection_value(value)
        .expect("introspection parses")
        .build()
        .expect("schema builds")
}

/// Serialize the introspection payload for `sdl` as a full GraphQL response
/// body (`{"data": {"__schema": ...}}`).
pub(crate) fn introspection_response_from_sdl(sdl: &str) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "__schema": serde_json::to_value(introspection_from_sdl(sdl)).unwrap(),
        },
    })
}

pub(crate) fn introspection_from_sdl(sdl: &str) -> IntrospectionSchema {
    let doc = ast::parse_schema::<String>(sdl).expect("test SDL parses");

    let mut kinds: HashMap<String, GraphQLTypeKind> = ["Boolean", "Float", "ID", "Int", "String"]
        .into_iter()
        .map(|name| (name.to_string(), GraphQLTypeKind::Scalar))
        .collect();
    let mut implementors: HashMap<String, Vec<String>> = HashMap::new();
    let mut schema_def = None;
    for def in &doc.definitions {
        match def {
            ast::Definition::SchemaDefinition(def) => schema_def = Some(def.clone()),
            ast::Definition::TypeDefinition(type_def) => {
                let (name, kind) = match type_def {
                    ast::TypeDefinition::Scalar(t) => (&t.name, GraphQLTypeKind::Scalar),
                    ast::TypeDefinition::Object(t) => {
                        for iface in &t.implements_interfaces {
                            implementors.entry(iface.clone())
                                .or_default()
                                .push(t.name.clone());
                        }
                        (&t.name, GraphQLTypeKind::Object)
                    },
                    ast::TypeDefinition::Interface(t) => (&t.name, GraphQLTypeKind::Interface),
                    ast::TypeDefinition::Union(t) => (&t.name, GraphQLTypeKind::Union),
                    ast::TypeDefinition::Enum(t) => (&t.name, GraphQLTypeKind::Enum),
                    ast::TypeDefinition::InputObject(t) => (&t.name, GraphQLTypeKind::InputObject),
                };
                kinds.insert(name.clone(), kind);
            },
            _ => (),
        }
    }

    let type_ref = |ast_type: &ast::Type<'_, String>| type_ref_from_ast(&kinds, ast_type);
    let input_value = |value: &ast::InputValue<'_, String>| IntrospectionInputValue {
        name: value.name.clone(),
        type_ref: type_ref(&value.value_type),
        default_value: value.default_value.as_ref().map(default_literal),
    };
    let field = |field: &ast::Field<'_, String>| IntrospectionField {
        name: field.name.clone(),
        args: field.arguments.iter().map(&input_value).collect(),
        type_ref: type_ref(&field.field_type),
    };
    let named = |name: &String| IntrospectionTypeRef {
        kind: kinds.get(name).copied().unwrap_or(GraphQLTypeKind::Object),
        name: Some(name.clone()),
        of_type: None,
    };

    let mut types = vec![];
    for def in &doc.definitions {
        let ast::Definition::TypeDefinition(type_def) = def else {
            continue;
        };
        let mut introspection_type = IntrospectionType {
            kind: GraphQLTypeKind::Scalar,
            name: None,
            fields: None,
            input_fields: None,
            interfaces: None,
            enum_values: None,
            possible_types: None,
        };
        match type_def {
            ast::TypeDefinition::Scalar(t) => {
                introspection_type.name = Some(t.name.clone());
            },
            ast::TypeDefinition::Object(t) => {
                introspection_type.kind = GraphQLTypeKind::Object;
                introspection_type.name = Some(t.name.clone());
                introspection_type.fields = Some(t.fields.iter().map(&field).collect());
                introspection_type.interfaces =
                    Some(t.implements_interfaces.iter().map(&named).collect());
            },
            ast::TypeDefinition::Interface(t) => {
                introspection_type.kind = GraphQLTypeKind::Interface;
                introspection_type.name = Some(t.name.clone());
                introspection_type.fields = Some(t.fields.iter().map(&field).collect());
                introspection_type.possible_types = Some(
                    implementors.get(&t.name)
                        .into_iter()
                        .flatten()
                        .map(&named)
                        .collect(),
                );
            },
            ast::TypeDefinition::Union(t) => {
                introspection_type.kind = GraphQLTypeKind::Union;
                introspection_type.name = Some(t.name.clone());
                introspection_type.possible_types = Some(t.types.iter().map(&named).collect());
            },
            ast::TypeDefinition::Enum(t) => {
                introspection_type.kind = GraphQLTypeKind::Enum;
                introspection_type.name = Some(t.name.clone());
                introspection_type.enum_values = Some(
                    t.values.iter()
                        .map(|v| IntrospectionEnumValue { name: v.name.clone() })
                        .collect(),
                );
            },
            ast::TypeDefinition::InputObject(t) => {
                introspection_type.kind = GraphQLTypeKind::InputObject;
                introspection_type.name = Some(t.name.clone());
                introspection_type.input_fields = Some(t.fields.iter().map(&input_value).collect());
            },
        }
        types.push(introspection_type);
    }

    let root = |explicit: Option<&String>, default_name: &str| {
        explicit
            .cloned()
            .or_else(|| kinds.contains_key(default_name).then(|| default_name.to_string()))
            .map(|name| IntrospectionRootRef { name: Some(name) })
    };
    let (query, mutation, subscription) = match &schema_def {
        Some(def) => (def.query.as_ref(), def.mutation.as_ref(), def.subscription.as_ref()),
        None => (None, None, None),
    };

    IntrospectionSchema {
        query_type: root(query, "Query"),
        mutation_type: root(mutation, "Mutation"),
        subscription_type: root(subscription, "Subscription"),
        types,
    }
}

/// Render a default value the way introspection reports `defaultValue`.
fn default_literal(value: &ast::Value<'_, String>) -> String {
    match value {
        ast::Value::Variable(name) => format!("${name}"),
        ast::Value::Int(number) => number.as_i64().unwrap_or_default().to_string(),
        ast::Value::Float(number) => format!("{number:?}"),
        ast::Value::String(string) => serde_json::Value::String(string.clone()).to_string(),
        ast::Value::Boolean(boolean) => boolean.to_string(),
        ast::Value::Null => "null".to_string(),
        ast::Value::Enum(name) => name.clone(),
        ast::Value::List(values) => format!(
            "[{}]",
            values.iter().map(default_literal).collect::<Vec<_>>().join(", "),
        ),
        ast::Value::Object(entries) => format!(
            "{{{}}}",
            entries.iter()
                .map(|(key, value)| format!("{key}: {}", default_literal(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

fn type_ref_from_ast(
    kinds: &HashMap<String, GraphQLTypeKind>,
    ast_type: &ast::Type<'_, String>,
) -> IntrospectionTypeRef {
    match ast_type {
        ast::Type::NamedType(name) => IntrospectionTypeRef {
            kind: kinds.get(name).copied().unwrap_or(GraphQLTypeKind::Object),
            name: Some(name.clone()),
            of_type: None,
        },
        ast::Type::ListType(inner) => IntrospectionTypeRef {
            kind: GraphQLTypeKind::List,
            name: None,
            of_type: Some(Box::new(type_ref_from_ast(kinds, inner))),
        },
        ast::Type::NonNullType(inner) => IntrospectionTypeRef {
            kind: GraphQLTypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(type_ref_from_ast(kinds, inner))),
        },
    }
}
