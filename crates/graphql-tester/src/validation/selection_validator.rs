use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeBuilderHelpers;
use crate::validation::ArgumentValidator;
use crate::validation::ValidationError;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, ValidationError>;

/// Walks a selection set against the object, interface, or union type it
/// selects from.
pub struct SelectionValidator<'a> {
    arg_validator: ArgumentValidator<'a>,
    fragments: &'a HashMap<&'a str, &'a ast::operation::FragmentDefinition>,
    schema: &'a Schema,
}
impl<'a> SelectionValidator<'a> {
    pub fn new(
        schema: &'a Schema,
        fragments: &'a HashMap<&'a str, &'a ast::operation::FragmentDefinition>,
        arg_validator: ArgumentValidator<'a>,
    ) -> Self {
        Self {
            arg_validator,
            fragments,
            schema,
        }
    }

    /// Validate `selection_set` against `parent_type`, stopping at the first
    /// failure.
    pub fn validate(
        &self,
        selection_set: &ast::operation::SelectionSet,
        parent_type: &GraphQLType,
    ) -> Result<()> {
        self.validate_impl(selection_set, parent_type, &mut vec![])
    }

    fn validate_impl(
        &self,
        selection_set: &ast::operation::SelectionSet,
        parent_type: &GraphQLType,
        fragment_stack: &mut Vec<String>,
    ) -> Result<()> {
        for selection in &selection_set.items {
            match selection {
                ast::operation::Selection::Field(field) =>
                    self.validate_field(field, parent_type, fragment_stack)?,

                ast::operation::Selection::FragmentSpread(spread) =>
                    self.validate_fragment_spread(spread, parent_type, fragment_stack)?,

                ast::operation::Selection::InlineFragment(inline_fragment) => {
                    self.arg_validator.validate_directives(&inline_fragment.directives)?;
                    let fragment_type = match &inline_fragment.type_condition {
                        Some(ast::operation::TypeCondition::On(type_name)) =>
                            self.resolve_type_condition(type_name, parent_type)?,
                        None => parent_type,
                    };
                    self.validate_impl(
                        &inline_fragment.selection_set,
                        fragment_type,
                        fragment_stack,
                    )?;
                },
            }
        }
        Ok(())
    }

    fn validate_field(
        &self,
        field: &ast::operation::Field,
        parent_type: &GraphQLType,
        fragment_stack: &mut Vec<String>,
    ) -> Result<()> {
        let field_name = field.name.as_str();
        log::trace!("Validating selection of `{}.{field_name}`", parent_type.name());

        self.arg_validator.validate_directives(&field.directives)?;

        // Unions declare no fields of their own; only the implicit
        // `__typename` may be selected without a fragment.
        if let GraphQLType::Union(union_type) = parent_type {
            if field_name != "__typename" {
                return Err(ValidationError::FieldSelectedOnUnion {
                    field_name: field_name.to_string(),
                    union_name: union_type.name().to_string(),
                });
            }
            self.arg_validator.validate_args(
                &TypeBuilderHelpers::typename_field(union_type.name()),
                &field.arguments,
            )?;
            if !field.selection_set.items.is_empty() {
                return Err(ValidationError::UnexpectedSelection {
                    field_name: field_name.to_string(),
                    type_name: GraphQLType::String.name().to_string(),
                });
            }
            return Ok(());
        }

        let Some(field_def) = parent_type.fields().and_then(|fields| fields.get(field_name)) else {
            return Err(ValidationError::UnknownField {
                field_name: field_name.to_string(),
                type_name: parent_type.name().to_string(),
            });
        };

        self.arg_validator.validate_args(field_def, &field.arguments)?;

        let return_type =
            field_def.type_annotation()
                .innermost_named_type_annotation()
                .type_ref()
                .deref(self.schema)?;
        let has_selection = !field.selection_set.items.is_empty();
        match (return_type.is_composite(), has_selection) {
            (true, true) =>
                self.validate_impl(&field.selection_set, return_type, fragment_stack),

            (true, false) => Err(ValidationError::MissingSelection {
                field_name: field_name.to_string(),
                type_name: return_type.name().to_string(),
            }),

            (false, true) => Err(ValidationError::UnexpectedSelection {
                field_name: field_name.to_string(),
                type_name: return_type.name().to_string(),
            }),

            (false, false) => Ok(()),
        }
    }

    fn validate_fragment_spread(
        &self,
        spread: &ast::operation::FragmentSpread,
        parent_type: &GraphQLType,
        fragment_stack: &mut Vec<String>,
    ) -> Result<()> {
        self.arg_validator.validate_directives(&spread.directives)?;

        let fragment_name = spread.fragment_name.as_str();
        let Some(fragment) = self.fragments.get(fragment_name) else {
            return Err(ValidationError::UnknownFragment {
                fragment_name: fragment_name.to_string(),
            });
        };

        if fragment_stack.iter().any(|name| name == fragment_name) {
            return Err(ValidationError::FragmentCycle {
                fragment_name: fragment_name.to_string(),
            });
        }

        self.arg_validator.validate_directives(&fragment.directives)?;

        let ast::operation::TypeCondition::On(type_name) = &fragment.type_condition;
        let fragment_type = self.resolve_type_condition(type_name, parent_type)?;

        fragment_stack.push(fragment_name.to_string());
        let result = self.validate_impl(&fragment.selection_set, fragment_type, fragment_stack);
        fragment_stack.pop();
        result
    }

    /// A fragment's type condition must name a composite type that shares at
    /// least one possible object type with the enclosing selection's type.
    fn resolve_type_condition(
        &self,
        type_name: &str,
        parent_type: &GraphQLType,
    ) -> Result<&'a GraphQLType> {
        let Some(fragment_type) = self.schema.lookup(type_name) else {
            return Err(ValidationError::UnknownFragmentType {
                type_name: type_name.to_string(),
            });
        };

        let parent_possible_types = self.schema.possible_type_names(parent_type);
        let overlaps =
            fragment_type.is_composite()
                && self.schema.possible_type_names(fragment_type)
                    .iter()
                    .any(|type_name| parent_possible_types.contains(type_name));
        if !overlaps {
            return Err(ValidationError::InvalidFragmentTypeCondition {
                fragment_type_name: fragment_type.name().to_string(),
                parent_type_name: parent_type.name().to_string(),
            });
        }

        Ok(fragment_type)
    }
}
