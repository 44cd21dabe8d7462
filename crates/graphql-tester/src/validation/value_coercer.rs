use crate::operation::Variable;
use crate::operation::VariablesBinding;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::validation::ValidationError;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ValidationError>;

/// Where a value is being coerced: the operation field whose invocation the
/// value belongs to (named in every error message) and whether the location
/// itself declares a default value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoercionSite<'a> {
    pub field_name: &'a str,
    pub has_default: bool,
}
impl<'a> CoercionSite<'a> {
    pub fn new(field_name: &'a str, has_default: bool) -> Self {
        Self {
            field_name,
            has_default,
        }
    }

    fn nested(&self, has_default: bool) -> Self {
        Self {
            field_name: self.field_name,
            has_default,
        }
    }
}

/// Literal values come from operation text, where enum values are bare
/// identifiers. Variable values come from a JSON binding, where they are
/// strings. Const values are variable defaults: literal syntax, but with no
/// variables of their own.
#[derive(Clone, Copy, Debug, PartialEq)]
enum CoercionMode {
    Const,
    Literal,
    Variable,
}

/// Decides whether a value structurally matches a declared type.
pub struct ValueCoercer<'a> {
    schema: &'a Schema,
    variable_defs: &'a IndexMap<String, Variable>,
    variables: &'a VariablesBinding,
}
impl<'a> ValueCoercer<'a> {
    pub fn new(
        schema: &'a Schema,
        variable_defs: &'a IndexMap<String, Variable>,
        variables: &'a VariablesBinding,
    ) -> Self {
        Self {
            schema,
            variable_defs,
            variables,
        }
    }

    /// Check a value written in the operation text (which may reference
    /// variables) against `type_annot`.
    pub fn coerce(
        &self,
        type_annot: &TypeAnnotation,
        value: &Value,
        site: CoercionSite<'_>,
    ) -> Result<()> {
        self.coerce_impl(type_annot, value, site, CoercionMode::Literal)
    }

    /// Check that every variable `value` references is declared by the
    /// operation, without checking the value against any type.
    pub fn check_variables_declared(
        &self,
        value: &Value,
        site: CoercionSite<'_>,
    ) -> Result<()> {
        match value {
            Value::VarRef(var_name) if !self.variable_defs.contains_key(var_name) =>
                Err(ValidationError::UndeclaredVariable {
                    field_name: site.field_name.to_string(),
                    variable_name: var_name.to_string(),
                }),
            Value::List(items) => items.iter()
                .try_for_each(|item| self.check_variables_declared(item, site)),
            Value::Object(entries) => entries.values()
                .try_for_each(|entry| self.check_variables_declared(entry, site)),
            _ => Ok(()),
        }
    }

    pub(crate) fn schema(&self) -> &'a Schema {
        self.schema
    }

    fn coerce_impl(
        &self,
        type_annot: &TypeAnnotation,
        value: &Value,
        site: CoercionSite<'_>,
        mode: CoercionMode,
    ) -> Result<()> {
        match (type_annot, value) {
            (_, Value::VarRef(var_name)) if mode == CoercionMode::Literal =>
                self.coerce_variable(type_annot, var_name, site),
            (_, Value::VarRef(_)) => Err(type_mismatch(type_annot, value, site)),

            (_, Value::Null) if type_annot.nullable() => Ok(()),
            (_, Value::Null) => Err(type_mismatch(type_annot, value, site)),

            (TypeAnnotation::List(list_annot), Value::List(items)) => {
                let item_annot = list_annot.inner_type_annotation();
                for item in items {
                    self.coerce_impl(item_annot, item, site.nested(false), mode)?;
                }
                Ok(())
            },

            (TypeAnnotation::List(_), _) => Err(ValidationError::ExpectedArray {
                field_name: site.field_name.to_string(),
                value_shape: value.shape_name().to_string(),
            }),

            (TypeAnnotation::Named(_), Value::List(_)) =>
                Err(ValidationError::ArrayMismatch {
                    field_name: site.field_name.to_string(),
                }),

            (TypeAnnotation::Named(named_annot), _) => {
                let type_ = named_annot.type_ref().deref(self.schema)?;
                self.coerce_named(type_annot, type_, value, site, mode)
            },
        }
    }

    fn coerce_input_object(
        &self,
        input_type: &InputObjectType,
        entries: &IndexMap<String, Value>,
        site: CoercionSite<'_>,
        mode: CoercionMode,
    ) -> Result<()> {
        let fields = input_type.fields();

        for (field_name, field) in fields {
            if field.is_required() && !entries.contains_key(field_name) {
                return Err(ValidationError::MissingRequiredField {
                    field_name: field_name.to_string(),
                    type_name: input_type.name().to_string(),
                });
            }
        }

        for (entry_name, entry_value) in entries {
            let Some(field) = fields.get(entry_name) else {
                return Err(ValidationError::UnknownField {
                    field_name: entry_name.to_string(),
                    type_name: input_type.name().to_string(),
                });
            };
            self.coerce_impl(
                field.type_annotation(),
                entry_value,
                site.nested(field.default_value().is_some()),
                mode,
            )?;
        }

        Ok(())
    }

    fn coerce_named(
        &self,
        type_annot: &TypeAnnotation,
        type_: &GraphQLType,
        value: &Value,
        site: CoercionSite<'_>,
        mode: CoercionMode,
    ) -> Result<()> {
        let accepted = match (type_, value) {
            (GraphQLType::Bool, Value::Bool(_)) => true,

            (GraphQLType::Float, Value::Float(_) | Value::Int(_)) => true,

            (GraphQLType::ID, Value::String(_) | Value::Int(_)) => true,

            (GraphQLType::Int, Value::Int(int)) => i32::try_from(*int).is_ok(),

            // JSON does not distinguish `1.0` from `1`.
            (GraphQLType::Int, Value::Float(float)) if mode == CoercionMode::Variable =>
                float.fract() == 0.0
                    && *float >= f64::from(i32::MIN)
                    && *float <= f64::from(i32::MAX),

            (GraphQLType::String, Value::String(_)) => true,

            // Custom scalars define their own serialization, so any
            // (non-list) shape is plausible.
            (GraphQLType::Scalar(_), _) => true,

            (GraphQLType::Enum(enum_type), Value::Enum(value_name))
                if mode != CoercionMode::Variable
                => return self.check_enum_value(enum_type, value_name, site),

            (GraphQLType::Enum(enum_type), Value::String(value_name))
                if mode == CoercionMode::Variable
                => return self.check_enum_value(enum_type, value_name, site),

            (GraphQLType::InputObject(input_type), Value::Object(entries))
                => return self.coerce_input_object(input_type, entries, site, mode),

            _ => false,
        };

        if accepted {
            Ok(())
        } else {
            Err(type_mismatch(type_annot, value, site))
        }
    }

    fn check_enum_value(
        &self,
        enum_type: &EnumType,
        value_name: &str,
        site: CoercionSite<'_>,
    ) -> Result<()> {
        if enum_type.has_value(value_name) {
            Ok(())
        } else {
            Err(ValidationError::UnknownEnumValue {
                enum_name: enum_type.name().to_string(),
                field_name: site.field_name.to_string(),
                value: value_name.to_string(),
            })
        }
    }

    fn coerce_variable(
        &self,
        location_annot: &TypeAnnotation,
        var_name: &str,
        site: CoercionSite<'_>,
    ) -> Result<()> {
        log::trace!("Resolving `${var_name}` on {}", site.field_name);

        let Some(var_def) = self.variable_defs.get(var_name) else {
            return Err(ValidationError::UndeclaredVariable {
                field_name: site.field_name.to_string(),
                variable_name: var_name.to_string(),
            });
        };

        let var_annot = var_def.type_annotation();
        let has_default = site.has_default || var_def.default_value().is_some();
        if !var_annot.is_valid_variable_usage(location_annot, has_default) {
            return Err(ValidationError::VariableTypeMismatch {
                location_type: location_annot.to_string(),
                variable_name: var_name.to_string(),
                variable_type: var_annot.to_string(),
            });
        }

        match (self.variables.get(var_name), var_def.default_value()) {
            (Some(bound_value), _) => self.coerce_impl(
                var_annot,
                bound_value,
                site.nested(false),
                CoercionMode::Variable,
            ),

            (None, Some(default_value)) => self.coerce_impl(
                var_annot,
                default_value,
                site.nested(false),
                CoercionMode::Const,
            ),

            (None, None) if !location_annot.nullable() && !site.has_default =>
                Err(ValidationError::MissingVariable {
                    field_name: site.field_name.to_string(),
                    variable_name: var_name.to_string(),
                }),

            (None, None) => Ok(()),
        }
    }
}

fn type_mismatch(
    type_annot: &TypeAnnotation,
    value: &Value,
    site: CoercionSite<'_>,
) -> ValidationError {
    ValidationError::TypeMismatch {
        expected_type: type_annot.to_string(),
        field_name: site.field_name.to_string(),
        value: value.to_string(),
    }
}
