use crate::ast;
use crate::loc;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter),
/// [`InputField`](crate::types::InputField), or
/// [`Variable`](crate::operation::Variable).
///
/// Nullability is tracked independently at every level, so `[String!]` and
/// `[String]!` are distinct annotations and nested lists are representable.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
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

    pub(crate) fn from_ast_type(
        location: &loc::SchemaDefLocation,
        ast_type: &ast::operation::Type,
    ) -> Self {
        Self::from_ast_type_impl(location, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        location: &loc::SchemaDefLocation,
        ast_type: &ast::operation::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_ref: Box::new(Self::from_ast_type_impl(
                        location,
                        inner,
                        true,
                    )),
                    nullable,
                    ref_location: location.to_owned(),
                }),

            ast::operation::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_ref: NamedGraphQLTypeRef::new(
                        name,
                        location.to_owned(),
                    ),
                }),

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(location, inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Indicates if a variable declared with this annotation may be used in a
    /// position annotated with `location_type`.
    ///
    /// List structure and the innermost type name must match exactly. A
    /// non-null position only accepts a nullable variable when either the
    /// variable or the position provides a default value.
    pub fn is_valid_variable_usage(
        &self,
        location_type: &TypeAnnotation,
        has_default: bool,
    ) -> bool {
        self.is_compatible_with(
            location_type,
            /* ignore_location_non_null = */ has_default && self.nullable(),
        )
    }

    fn is_compatible_with(
        &self,
        location_type: &TypeAnnotation,
        ignore_location_non_null: bool,
    ) -> bool {
        let location_nullable =
            ignore_location_non_null || location_type.nullable();
        if !location_nullable && self.nullable() {
            return false;
        }

        match (self, location_type) {
            (Self::List(var_list), Self::List(location_list))
                => var_list.inner_type_annotation().is_compatible_with(
                    location_list.inner_type_annotation(),
                    false,
                ),
            (Self::Named(var_named), Self::Named(location_named))
                => var_named.graphql_type_name() == location_named.graphql_type_name(),
            _ => false,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            Self::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where
    /// this [`TypeAnnotation`] was written.
    pub fn ref_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Self::List(annot) => annot.ref_location(),
            Self::Named(annot) => annot.ref_location(),
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
