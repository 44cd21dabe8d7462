use crate::operation::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use std::collections::HashMap;
use std::collections::HashSet;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) directive_names: HashSet<String>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Build a [`Schema`] from one or more SDL documents. Types may be spread
    /// (and extended) across documents freely.
    pub fn load<S: AsRef<str>>(
        documents: impl IntoIterator<Item = S>,
    ) -> Result<Self, SchemaBuildError> {
        let mut builder = SchemaBuilder::new();
        for document in documents {
            builder = builder.load_str(None, document.as_ref())?;
        }
        builder.build()
    }

    /// Indicates if an SDL document loaded into this [`Schema`] declared a
    /// `directive @{name}`. The built-in `@skip` and `@include` directives are
    /// not included.
    pub fn defines_directive(&self, name: &str) -> bool {
        self.directive_names.contains(name)
    }

    pub fn lookup(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// GraphQL [defines an object type named "Mutation" as the _default_
    /// Mutation type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema { mutation: ... }` block may name a different type. This
    /// accounts for any such override.
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref()
            .and_then(|named_ref| named_ref.deref(self).ok())
    }

    /// The names of the object types a value of `type_` may be at runtime: the
    /// type itself for an object type, the implementing object types for an
    /// interface, the members of a union. Other types have no possible types.
    ///
    /// Interface implementations are returned sorted by name.
    pub fn possible_type_names<'a>(&'a self, type_: &'a GraphQLType) -> Vec<&'a str> {
        match type_ {
            GraphQLType::Object(obj_type) => vec![obj_type.name()],

            GraphQLType::Interface(iface_type) => {
                let mut impl_names = self.types
                    .values()
                    .filter_map(|type_| type_.as_object())
                    .filter(|obj_type| {
                        obj_type.implements_interface(self, iface_type.name())
                    })
                    .map(|obj_type| obj_type.name())
                    .collect::<Vec<_>>();
                impl_names.sort_unstable();
                impl_names
            },

            GraphQLType::Union(union_type) => union_type.member_type_names(),

            _ => vec![],
        }
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// As with [`Schema::mutation_type()`], this factors in any override from
    /// a `schema { query: ... }` block.
    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.query_type.deref(self).ok()
    }

    /// The root operation type that operations of the given kind select from.
    pub fn root_type(&self, kind: &OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => self.query_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref()
            .and_then(|named_ref| named_ref.deref(self).ok())
    }
}
