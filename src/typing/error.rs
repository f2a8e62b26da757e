use std::{borrow::Cow, fmt};

use annotate_snippets::{Group, Level};

use crate::reprs::{ast::Type, common::Id};

/// Why a term was rejected by the type checker.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeCheckError {
    UnboundIdent(Id),
    UnknownOperator(Id),
    OperandMismatch {
        op: Id,
        side: Operand,
        found: Type,
    },
    NotAFunction(Type),
    ArityMismatch {
        callee: Type,
        expected: usize,
        found: usize,
    },
    ArgumentMismatch {
        position: usize,
        expected: Type,
        found: Type,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operand {
    Lhs,
    Rhs,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operand::Lhs => "left",
            Operand::Rhs => "right",
        })
    }
}

impl TypeCheckError {
    fn title(&self) -> Cow<'static, str> {
        match self {
            Self::UnboundIdent(name) => format!("unbound identifier `{name}`").into(),
            Self::UnknownOperator(op) => format!("unknown operator `{op}`").into(),
            Self::OperandMismatch { op, side, .. } => {
                format!("type mismatch in {side} operand of `{op}`").into()
            }
            Self::NotAFunction(_) => "cannot apply a non-function".into(),
            Self::ArityMismatch {
                expected, found, ..
            } => format!("expected {expected} argument(s), got {found}").into(),
            Self::ArgumentMismatch { position, .. } => {
                format!("type mismatch in argument {position}").into()
            }
        }
    }

    fn text(&self) -> Option<String> {
        match self {
            Self::UnboundIdent(_) | Self::UnknownOperator(_) => None,
            Self::OperandMismatch { found, .. } => Some(mismatch(&Type::Int, found)),
            Self::NotAFunction(found) => Some(format!("found: `{found}`")),
            Self::ArityMismatch { callee, .. } => Some(format!("callee: `{callee}`")),
            Self::ArgumentMismatch {
                expected, found, ..
            } => Some(mismatch(expected, found)),
        }
    }

    pub fn into_record(self) -> Vec<Group<'static>> {
        let text = self.text();
        let group = Group::with_title(Level::ERROR.primary_title(self.title()))
            .elements(text.map(|text| Level::ERROR.message(text)));

        vec![group]
    }
}

fn mismatch(expected: &Type, found: &Type) -> String {
    format!(
        "expected: `{expected}`\n\
        found:    `{found}`"
    )
}

impl fmt::Display for TypeCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())?;
        if let Some(text) = self.text() {
            write!(f, "\n{text}")?;
        }
        Ok(())
    }
}

impl std::error::Error for TypeCheckError {}
