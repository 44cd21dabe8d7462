use crate::ast;
use crate::operation::OperationKind;
use crate::operation::Variable;
use crate::operation::VariablesBinding;
use crate::schema::Schema;
use crate::validation::ArgumentValidator;
use crate::validation::SelectionValidator;
use crate::validation::ValidationError;
use crate::validation::ValidationResult;
use crate::validation::ValueCoercer;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, ValidationError>;

struct OperationParts<'ast> {
    directives: &'ast [ast::operation::Directive],
    kind: OperationKind,
    name: Option<&'ast str>,
    selection_set: &'ast ast::operation::SelectionSet,
    variable_defs: &'ast [ast::operation::VariableDefinition],
}

/// Validates a parsed document holding exactly one operation (plus any
/// fragments it uses) against a [`Schema`].
pub struct OperationValidator<'schema> {
    schema: &'schema Schema,
}
impl<'schema> OperationValidator<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            schema,
        }
    }

    pub fn validate(
        &self,
        document: &ast::operation::Document,
        variables: &VariablesBinding,
    ) -> ValidationResult {
        let (operation, fragments) = Self::split_definitions(document)?;
        log::debug!(
            "Validating {} `{}` with {} bound variable(s)",
            operation.kind,
            operation.name.unwrap_or("<anonymous>"),
            variables.len(),
        );

        let result = self.validate_operation(&operation, &fragments, variables);
        if let Err(err) = &result {
            log::debug!("Operation failed validation: {err}");
        }
        result
    }

    fn validate_operation(
        &self,
        operation: &OperationParts<'_>,
        fragments: &HashMap<&str, &ast::operation::FragmentDefinition>,
        variables: &VariablesBinding,
    ) -> Result<()> {
        let Some(root_type) = self.schema.root_type(&operation.kind) else {
            return Err(ValidationError::MissingRootOperationType {
                operation: operation.kind,
            });
        };

        let variable_defs = self.declared_variables(operation.variable_defs)?;
        let coercer = ValueCoercer::new(self.schema, &variable_defs, variables);
        let arg_validator = ArgumentValidator::new(coercer);
        arg_validator.validate_directives(operation.directives)?;

        let selection_validator = SelectionValidator::new(
            self.schema,
            fragments,
            arg_validator,
        );
        selection_validator.validate(operation.selection_set, root_type)
    }

    /// Declared variables must be uniquely named and typed with input types
    /// the schema defines. Declared-but-unused variables are allowed.
    fn declared_variables(
        &self,
        ast_var_defs: &[ast::operation::VariableDefinition],
    ) -> Result<IndexMap<String, Variable>> {
        let mut variable_defs = IndexMap::new();
        for ast_var_def in ast_var_defs {
            let variable = Variable::from_ast(ast_var_def);
            if variable_defs.contains_key(variable.name()) {
                return Err(ValidationError::DuplicateVariable {
                    variable_name: variable.name().to_string(),
                });
            }

            let type_name =
                variable.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();
            match self.schema.lookup(type_name) {
                None => return Err(ValidationError::UndefinedVariableType {
                    type_name: type_name.to_string(),
                    variable_name: variable.name().to_string(),
                }),
                Some(type_) if !type_.is_input_type() =>
                    return Err(ValidationError::NonInputVariableType {
                        type_name: type_name.to_string(),
                        variable_name: variable.name().to_string(),
                    }),
                Some(_) => (),
            }

            variable_defs.insert(variable.name().to_string(), variable);
        }
        Ok(variable_defs)
    }

    fn split_definitions(
        document: &ast::operation::Document,
    ) -> Result<(OperationParts<'_>, HashMap<&str, &ast::operation::FragmentDefinition>)> {
        use ast::operation::Definition;
        use ast::operation::OperationDefinition;

        let mut operations = vec![];
        let mut fragments = HashMap::new();
        for def in &document.definitions {
            match def {
                Definition::Fragment(fragment) => {
                    if fragments.insert(fragment.name.as_str(), fragment).is_some() {
                        return Err(ValidationError::DuplicateFragment {
                            fragment_name: fragment.name.to_string(),
                        });
                    }
                },
                Definition::Operation(op_def) => operations.push(op_def),
            }
        }

        let op_def = match operations.as_slice() {
            [] => return Err(ValidationError::NoOperation),
            [op_def] => *op_def,
            _ => return Err(ValidationError::MultipleOperations {
                count: operations.len(),
            }),
        };

        let kind = OperationKind::from(op_def);
        let operation = match op_def {
            OperationDefinition::Mutation(mutation) => OperationParts {
                directives: &mutation.directives,
                kind,
                name: mutation.name.as_deref(),
                selection_set: &mutation.selection_set,
                variable_defs: &mutation.variable_definitions,
            },
            OperationDefinition::Query(query) => OperationParts {
                directives: &query.directives,
                kind,
                name: query.name.as_deref(),
                selection_set: &query.selection_set,
                variable_defs: &query.variable_definitions,
            },
            OperationDefinition::SelectionSet(selection_set) => OperationParts {
                directives: &[],
                kind,
                name: None,
                selection_set,
                variable_defs: &[],
            },
            OperationDefinition::Subscription(subscription) => OperationParts {
                directives: &subscription.directives,
                kind,
                name: subscription.name.as_deref(),
                selection_set: &subscription.selection_set,
                variable_defs: &subscription.variable_definitions,
            },
        };

        Ok((operation, fragments))
    }
}
