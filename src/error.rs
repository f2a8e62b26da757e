use std::fmt;

use annotate_snippets::{Group, Renderer};

use crate::{evaluation::EvaluationError, typing::TypeCheckError};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CompilationError {
    TypeCheck(TypeCheckError),
    Evaluation(EvaluationError),
}

impl From<TypeCheckError> for CompilationError {
    fn from(value: TypeCheckError) -> Self {
        Self::TypeCheck(value)
    }
}

impl From<EvaluationError> for CompilationError {
    fn from(value: EvaluationError) -> Self {
        Self::Evaluation(value)
    }
}

impl CompilationError {
    pub fn into_record(self) -> Vec<Group<'static>> {
        match self {
            Self::TypeCheck(type_check_error) => type_check_error.into_record(),
            Self::Evaluation(evaluation_error) => evaluation_error.into_record(),
        }
    }

    pub fn render_styled(self) -> String {
        Renderer::styled().render(&self.into_record())
    }

    pub fn render_plain(self) -> String {
        Renderer::plain().render(&self.into_record())
    }
}

impl fmt::Display for CompilationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeCheck(err) => write!(f, "type check failed: {err}"),
            Self::Evaluation(err) => write!(f, "evaluation failed: {err}"),
        }
    }
}

impl std::error::Error for CompilationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TypeCheck(err) => Some(err),
            Self::Evaluation(err) => Some(err),
        }
    }
}
