use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::UnionType;
use std::collections::HashMap;

pub(super) struct UnionTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a UnionType,
    types_map: &'a HashMap<String, GraphQLType>,
}
impl<'a> UnionTypeValidator<'a> {
    pub fn new(
        type_: &'a UnionType,
        types_map: &'a HashMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        for member_type_ref in self.type_.members.values() {
            // Member types of a union type can only be object types.
            // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
            match member_type_ref.deref_in(self.types_map) {
                Ok(GraphQLType::Object(_)) => (),
                Ok(member_type) => self.errors.push(
                    TypeValidationError::InvalidUnionMemberTypeKind {
                        location: member_type_ref.ref_location().to_owned(),
                        union_type_name: self.type_.name().to_string(),
                        invalid_member_type_name: member_type.name().to_string(),
                        invalid_member_type_kind: member_type.type_kind(),
                    }
                ),
                Err(err) => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: err.ref_location,
                    undefined_type_name: err.type_name,
                }),
            }
        }

        self.errors
    }
}
