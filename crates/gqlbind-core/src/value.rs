use crate::ast;
use indexmap::IndexMap;
use thiserror::Error;

/// A generation-time literal value.
///
/// Produced from a schema value expression (a default value or a directive
/// argument) by [`Value::from_ast`]. Variable references have no meaning at
/// generation time, so there is no variant for them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Evaluate a schema value expression into a literal.
    ///
    /// Evaluation happens with no variable bindings available: any variable
    /// reference (at any depth) fails with
    /// [`LiteralError::VariableReference`].
    pub fn from_ast(ast_value: &ast::Value) -> Result<Self, LiteralError> {
        Ok(match ast_value {
            ast::Value::Variable(var_name) =>
                return Err(LiteralError::VariableReference {
                    variable_name: var_name.to_string(),
                }),

            ast::Value::Int(number) =>
                Value::Int(number.as_i64().ok_or_else(||
                    LiteralError::IntOutOfRange {
                        literal: format!("{number:?}"),
                    }
                )?),

            ast::Value::Float(value) =>
                Value::Float(*value),

            ast::Value::String(value) =>
                Value::String(value.clone()),

            ast::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::Value::List(values) =>
                Value::List(
                    values.iter()
                        .map(Value::from_ast)
                        .collect::<Result<Vec<_>, _>>()?,
                ),

            ast::Value::Object(entries) =>
                Value::Object(
                    entries.iter()
                        .map(|(key, ast_value)| {
                            Ok((key.clone(), Value::from_ast(ast_value)?))
                        })
                        .collect::<Result<IndexMap<_, _>, _>>()?,
                ),
        })
    }
}
impl std::fmt::Display for Value {
    /// Renders the value using GraphQL literal syntax.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Enum(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => write!(
                f,
                "[{}]",
                values.iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Null => write!(f, "null"),
            Self::Object(entries) => write!(
                f,
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::String(value) => write!(f, "{value:?}"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LiteralError {
    #[error("the integer literal `{literal}` does not fit in a 64-bit integer")]
    IntOutOfRange {
        literal: String,
    },

    #[error(
        "the variable `${variable_name}` cannot be used here: values are \
        evaluated at generation time, where no variables are defined"
    )]
    VariableReference {
        variable_name: String,
    },
}
