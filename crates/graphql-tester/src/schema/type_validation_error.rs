use crate::loc;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable field. Unbroken \
        input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{non_interface_type_name}`, which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        def_location: loc::SchemaDefLocation,
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "Input fields can not be declared with an output type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is an output type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input object type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input object type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter of `{parent_type_name}.{field_name}` was \
        declared with the `{output_type_name}` type, which is not an \
        input-compatible type."
    )]
    InvalidParameterWithOutputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        output_type_name: String,
        parameter_name: String,
        parent_type_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{invalid_member_type_name}`, which is {} type. \
        Union members can only be object types.",
        invalid_member_type_kind.indefinite_name(),
    )]
    InvalidUnionMemberTypeKind {
        location: loc::SchemaDefLocation,
        union_type_name: String,
        invalid_member_type_name: String,
        invalid_member_type_kind: GraphQLTypeKind,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface, \
        but does not define a field named `{field_name}`"
    )]
    MissingInterfaceField {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error("There is no type defined with the name `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SchemaDefLocation,
        undefined_type_name: String,
    },
}
