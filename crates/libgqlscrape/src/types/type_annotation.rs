use crate::introspection::IntrospectionTypeRef;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::named_ref::DerefByNameError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents the annotated type for a [`Field`](crate::types::Field) or an
/// [`InputValue`](crate::types::InputValue).
///
/// Introspection expresses non-null as a `NON_NULL` wrapper; here it is folded
/// into the `nullable` flag of the wrapped annotation.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub(crate) fn from_introspection(
        type_ref: &IntrospectionTypeRef,
    ) -> Result<Self> {
        Self::from_introspection_impl(type_ref, /* nullable = */ true)
    }

    fn from_introspection_impl(
        type_ref: &IntrospectionTypeRef,
        nullable: bool,
    ) -> Result<Self> {
        match type_ref.kind {
            GraphQLTypeKind::NonNull => {
                let inner = wrapped_type_ref(type_ref)?;
                if inner.kind == GraphQLTypeKind::NonNull {
                    return Err(SchemaBuildError::MalformedTypeRef {
                        reason: "NON_NULL wraps another NON_NULL".to_string(),
                    });
                }
                Self::from_introspection_impl(inner, false)
            },

            GraphQLTypeKind::List =>
                Ok(Self::List(ListTypeAnnotation {
                    inner_type_ref: Box::new(Self::from_introspection_impl(
                        wrapped_type_ref(type_ref)?,
                        true,
                    )?),
                    nullable,
                })),

            named_kind => {
                let name = type_ref.name.as_deref().ok_or_else(|| {
                    SchemaBuildError::MalformedTypeRef {
                        reason: format!("{named_kind} type reference has no name"),
                    }
                })?;
                Ok(Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_ref: NamedGraphQLTypeRef::new(name),
                }))
            },
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// Resolve the inner-most named type of this annotation against `schema`.
    pub fn innermost_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> std::result::Result<&'schema GraphQLType, DerefByNameError> {
        self.innermost_named_type_annotation().graphql_type(schema)
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}

fn wrapped_type_ref(type_ref: &IntrospectionTypeRef) -> Result<&IntrospectionTypeRef> {
    type_ref.of_type.as_deref().ok_or_else(|| SchemaBuildError::MalformedTypeRef {
        reason: format!("{} type reference has no `ofType`", type_ref.kind),
    })
}
