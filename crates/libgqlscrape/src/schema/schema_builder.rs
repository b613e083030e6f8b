use crate::introspection::IntrospectionField;
use crate::introspection::IntrospectionInputValue;
use crate::introspection::IntrospectionRootRef;
use crate::introspection::IntrospectionSchema;
use crate::introspection::IntrospectionType;
use crate::introspection::IntrospectionTypeRef;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Turns an introspection result into a [`Schema`].
///
/// ```ignore
/// let schema = SchemaBuilder::from_introspection_str(&response_body)?.build()?;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaBuilder {
    introspection: IntrospectionSchema,
}
impl SchemaBuilder {
    pub fn from_introspection(introspection: IntrospectionSchema) -> Self {
        Self { introspection }
    }

    /// Parse an introspection result from JSON text. See
    /// [`SchemaBuilder::from_introspection_value()`] for the accepted shapes.
    pub fn from_introspection_str(content: impl AsRef<str>) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(content.as_ref())
                .map_err(|err| SchemaBuildError::MalformedIntrospection {
                    reason: err.to_string(),
                })?;
        Self::from_introspection_value(value)
    }

    /// Accepts any of:
    ///
    /// * A full GraphQL response: `{"data": {"__schema": {...}}}`
    /// * The data object: `{"__schema": {...}}`
    /// * The bare `__schema` object (what gets written to `schema.json`).
    pub fn from_introspection_value(value: serde_json::Value) -> Result<Self> {
        let mut value = value;

        if let Some(obj) = value.as_object_mut()
            && obj.contains_key("data") {
            let data = obj.remove("data").unwrap_or_default();
            if data.is_null() {
                return Err(match obj.remove("errors") {
                    Some(errors) => SchemaBuildError::IntrospectionErrors {
                        errors: errors.to_string(),
                    },
                    None => SchemaBuildError::MalformedIntrospection {
                        reason: "response `data` is null".to_string(),
                    },
                });
            }
            value = data;
        } else if let Some(errors) = value.get("errors") {
            return Err(SchemaBuildError::IntrospectionErrors {
                errors: errors.to_string(),
            });
        }

        if let Some(obj) = value.as_object_mut()
            && let Some(schema) = obj.remove("__schema") {
            value = schema;
        }

        let introspection: IntrospectionSchema =
            serde_json::from_value(value)
                .map_err(|err| SchemaBuildError::MalformedIntrospection {
                    reason: format!("invalid `__schema`: {err}"),
                })?;

        Ok(Self::from_introspection(introspection))
    }

    /// Consume this [`SchemaBuilder`] to produce a [`Schema`].
    pub fn build(self) -> Result<Schema> {
        let introspection = self.introspection;
        let query_type_name =
            root_type_name(introspection.query_type.as_ref())
                .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;

        let mut types_map_builder = TypesMapBuilder::new();
        for introspection_type in &introspection.types {
            let type_name =
                introspection_type.name.as_deref().ok_or_else(|| {
                    SchemaBuildError::MalformedTypeDefinition {
                        type_name: None,
                        reason: format!(
                            "{} type has no name",
                            introspection_type.kind,
                        ),
                    }
                })?;

            // Introspection meta-types (`__Schema`, `__Type`, ...) are not part
            // of the endpoint's own surface.
            if type_name.starts_with("__") {
                log::trace!("Skipping introspection type `{type_name}`.");
                continue;
            }

            let type_ = build_type(type_name, introspection_type)?;
            types_map_builder.add_new_type(type_name, type_)?;
        }

        let query_type = check_root_type(
            &types_map_builder,
            OperationKind::Query,
            query_type_name,
        )?;
        let mutation_type =
            root_type_name(introspection.mutation_type.as_ref())
                .map(|type_name| check_root_type(
                    &types_map_builder,
                    OperationKind::Mutation,
                    type_name,
                ))
                .transpose()?;
        let subscription_type =
            root_type_name(introspection.subscription_type.as_ref())
                .map(|type_name| check_root_type(
                    &types_map_builder,
                    OperationKind::Subscription,
                    type_name,
                ))
                .transpose()?;

        let types = types_map_builder.into_types_map();
        log::debug!("Loaded {} types from introspection.", types.len());

        Ok(Schema {
            mutation_type,
            query_type,
            subscription_type,
            types,
        })
    }
}

fn root_type_name(root_ref: Option<&IntrospectionRootRef>) -> Option<&str> {
    root_ref.and_then(|root_ref| root_ref.name.as_deref())
}

fn check_root_type(
    types_map_builder: &TypesMapBuilder,
    operation_kind: OperationKind,
    type_name: &str,
) -> Result<NamedGraphQLTypeRef> {
    match types_map_builder.get_type(type_name) {
        Some(GraphQLType::Object(_)) =>
            Ok(NamedGraphQLTypeRef::new(type_name)),

        Some(_) => Err(SchemaBuildError::NonObjectRootType {
            operation_kind,
            type_name: type_name.to_string(),
        }),

        None => Err(SchemaBuildError::UndefinedRootType {
            operation_kind,
            type_name: type_name.to_string(),
        }),
    }
}

fn build_type(
    type_name: &str,
    introspection_type: &IntrospectionType,
) -> Result<GraphQLType> {
    let name = type_name.to_string();
    Ok(match introspection_type.kind {
        GraphQLTypeKind::Scalar =>
            GraphQLType::builtin_scalar(type_name)
                .unwrap_or(GraphQLType::Scalar(ScalarType { name })),

        GraphQLTypeKind::Enum => GraphQLType::Enum(EnumType {
            name,
            values:
                introspection_type.enum_values
                    .iter()
                    .flatten()
                    .map(|enum_value| enum_value.name.to_owned())
                    .collect(),
        }),

        GraphQLTypeKind::InputObject => GraphQLType::InputObject(InputObjectType {
            fields: input_values_from_introspection(
                introspection_type.input_fields.as_deref().unwrap_or_default(),
            )?,
            name,
        }),

        GraphQLTypeKind::Interface => GraphQLType::Interface(InterfaceType {
            data: object_or_interface_data(type_name, introspection_type)?,
            possible_types: type_refs_from_introspection(
                type_name,
                introspection_type.possible_types.as_deref().unwrap_or_default(),
            )?,
        }),

        GraphQLTypeKind::Object => GraphQLType::Object(ObjectType(
            object_or_interface_data(type_name, introspection_type)?,
        )),

        GraphQLTypeKind::Union => GraphQLType::Union(UnionType {
            members:
                type_refs_from_introspection(
                    type_name,
                    introspection_type.possible_types.as_deref().unwrap_or_default(),
                )?
                .into_iter()
                .map(|type_ref| (type_ref.name().to_string(), type_ref))
                .collect(),
            name,
        }),

        wrapper_kind @ (GraphQLTypeKind::List | GraphQLTypeKind::NonNull) =>
            return Err(SchemaBuildError::MalformedTypeDefinition {
                type_name: Some(name),
                reason: format!("{wrapper_kind} is not a named type kind"),
            }),
    })
}

fn object_or_interface_data(
    type_name: &str,
    introspection_type: &IntrospectionType,
) -> Result<ObjectOrInterfaceTypeData> {
    Ok(ObjectOrInterfaceTypeData {
        fields: fields_from_introspection(
            type_name,
            introspection_type.fields.as_deref().unwrap_or_default(),
        )?,
        interfaces: type_refs_from_introspection(
            type_name,
            introspection_type.interfaces.as_deref().unwrap_or_default(),
        )?,
        name: type_name.to_string(),
    })
}

fn fields_from_introspection(
    parent_type_name: &str,
    fields: &[IntrospectionField],
) -> Result<IndexMap<String, Field>> {
    let mut field_map = IndexMap::new();
    for field in fields {
        field_map.insert(field.name.to_string(), Field {
            arguments: input_values_from_introspection(&field.args)?,
            name: field.name.to_string(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::from_introspection(&field.type_ref)?,
        });
    }
    Ok(field_map)
}

fn input_values_from_introspection(
    input_values: &[IntrospectionInputValue],
) -> Result<IndexMap<String, InputValue>> {
    let mut input_value_map = IndexMap::new();
    for input_value in input_values {
        input_value_map.insert(input_value.name.to_string(), InputValue {
            default_value: input_value.default_value.to_owned(),
            name: input_value.name.to_string(),
            type_annotation: TypeAnnotation::from_introspection(
                &input_value.type_ref,
            )?,
        });
    }
    Ok(input_value_map)
}

fn type_refs_from_introspection(
    type_name: &str,
    type_refs: &[IntrospectionTypeRef],
) -> Result<Vec<NamedGraphQLTypeRef>> {
    type_refs.iter()
        .map(|type_ref| match type_ref.name.as_deref() {
            Some(name) if !type_ref.kind.is_wrapper() =>
                Ok(NamedGraphQLTypeRef::new(name)),
            _ => Err(SchemaBuildError::MalformedTypeDefinition {
                type_name: Some(type_name.to_string()),
                reason: "interface/possible-type reference must be a named type".to_string(),
            }),
        })
        .collect()
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Found multiple definitions of the `{type_name}` type")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("The introspection query was answered with errors: {errors}")]
    IntrospectionErrors {
        errors: String,
    },

    #[error("Malformed introspection result: {reason}")]
    MalformedIntrospection {
        reason: String,
    },

    #[error("Malformed type definition ({type_name:?}): {reason}")]
    MalformedTypeDefinition {
        type_name: Option<String>,
        reason: String,
    },

    #[error("Malformed type reference: {reason}")]
    MalformedTypeRef {
        reason: String,
    },

    #[error("The {operation_kind} root type `{type_name}` is not an object type")]
    NonObjectRootType {
        operation_kind: OperationKind,
        type_name: String,
    },

    #[error("No query root type is defined by this schema")]
    NoQueryOperationTypeDefined,

    #[error("The {operation_kind} root type `{type_name}` is not defined in the schema")]
    UndefinedRootType {
        operation_kind: OperationKind,
        type_name: String,
    },
}
