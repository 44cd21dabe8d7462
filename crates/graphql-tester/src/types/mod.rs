mod enum_type;
mod enum_value;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod input_object_type_validator;
mod interface_type;
mod list_type_annotation;
mod named_graphql_type_ref;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_or_interface_type_validator;
mod object_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod type_builder_helpers;
mod types_map_builder;
mod union_type;
mod union_type_validator;

pub use enum_type::EnumType;
pub use enum_value::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
use input_object_type_validator::InputObjectTypeValidator;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_graphql_type_ref::DanglingTypeRefError;
pub use named_graphql_type_ref::NamedGraphQLTypeRef;
pub use named_type_annotation::NamedTypeAnnotation;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use type_builder_helpers::TypeBuilderHelpers;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
use union_type_validator::UnionTypeValidator;

#[cfg(test)]
mod tests;
