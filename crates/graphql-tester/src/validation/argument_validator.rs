use crate::ast;
use crate::types::Field;
use crate::types::Parameter;
use crate::types::TypeBuilderHelpers;
use crate::validation::CoercionSite;
use crate::validation::ValidationError;
use crate::validation::ValueCoercer;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, ValidationError>;

/// Checks the arguments supplied to one field invocation (or directive
/// annotation) against the declared parameters.
pub struct ArgumentValidator<'a> {
    coercer: ValueCoercer<'a>,
    condition_params: IndexMap<String, Parameter>,
}
impl<'a> ArgumentValidator<'a> {
    pub fn new(coercer: ValueCoercer<'a>) -> Self {
        Self {
            coercer,
            condition_params: TypeBuilderHelpers::condition_parameters(),
        }
    }

    /// Supplied arguments are checked in the order they were written;
    /// declared parameters in the order they were declared.
    pub fn validate_args(
        &self,
        field: &Field,
        supplied: &[(String, ast::Value)],
    ) -> Result<()> {
        self.validate_against_params(field.name(), field.parameters(), supplied)
    }

    /// `@skip` and `@include` take a required `if: Boolean!`. Any other
    /// directive must be declared by the schema; its arguments are only
    /// checked for undeclared variables.
    ///
    /// Errors name the directive as `@name` where a field name would
    /// otherwise go.
    pub fn validate_directives(
        &self,
        directives: &[ast::operation::Directive],
    ) -> Result<()> {
        for directive in directives {
            let directive_name = directive.name.as_str();
            let site_name = format!("@{directive_name}");
            log::trace!("Validating `{site_name}` annotation");

            match directive_name {
                "include" | "skip" => self.validate_against_params(
                    site_name.as_str(),
                    &self.condition_params,
                    &directive.arguments,
                )?,

                _ if self.coercer.schema().defines_directive(directive_name) => {
                    Self::check_unique_arg_names(site_name.as_str(), &directive.arguments)?;
                    for (_, ast_value) in &directive.arguments {
                        self.coercer.check_variables_declared(
                            &Value::from_ast(ast_value),
                            CoercionSite::new(site_name.as_str(), false),
                        )?;
                    }
                },

                _ => return Err(ValidationError::UnknownDirective {
                    directive_name: directive_name.to_string(),
                }),
            }
        }
        Ok(())
    }

    fn check_unique_arg_names<'s>(
        owner_name: &str,
        supplied: &'s [(String, ast::Value)],
    ) -> Result<HashSet<&'s str>> {
        let mut seen_arg_names = HashSet::new();
        for (arg_name, _) in supplied {
            if !seen_arg_names.insert(arg_name.as_str()) {
                return Err(ValidationError::DuplicateArgument {
                    argument_name: arg_name.to_string(),
                    field_name: owner_name.to_string(),
                });
            }
        }
        Ok(seen_arg_names)
    }

    fn validate_against_params(
        &self,
        owner_name: &str,
        params: &IndexMap<String, Parameter>,
        supplied: &[(String, ast::Value)],
    ) -> Result<()> {
        let seen_arg_names = Self::check_unique_arg_names(owner_name, supplied)?;

        for (param_name, param) in params {
            if param.is_required() && !seen_arg_names.contains(param_name.as_str()) {
                return Err(ValidationError::MissingRequiredArgument {
                    argument_name: param_name.to_string(),
                    field_name: owner_name.to_string(),
                });
            }
        }

        for (arg_name, _) in supplied {
            if !params.contains_key(arg_name) {
                return Err(ValidationError::UnknownArgument {
                    argument_name: arg_name.to_string(),
                    field_name: owner_name.to_string(),
                });
            }
        }

        for (arg_name, ast_value) in supplied {
            let Some(param) = params.get(arg_name) else {
                continue;
            };
            self.coercer.coerce(
                param.type_annotation(),
                &Value::from_ast(ast_value),
                CoercionSite::new(owner_name, param.default_value().is_some()),
            )?;
        }

        Ok(())
    }
}
