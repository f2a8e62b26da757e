use itertools::Itertools;
use log::{debug, trace};

use crate::{
    reprs::{
        ast::{Expr, Type},
        common::Id,
    },
    stdlib::Binops,
};

use self::context::Context;
pub use self::error::EvaluationError;

mod substitution;

/// The evaluator's negative outcome.
pub type Stuck = EvaluationError;

/// What to do when a lambda is applied to a different number of arguments
/// than it has parameters.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub enum ArityMismatch {
    /// The application is stuck.
    #[default]
    Stuck,
    /// Pairs parameters and arguments up to the shorter of the two and
    /// returns the partially substituted body without evaluating it.
    Truncate,
}

#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub struct EvaluationOptions {
    pub arity_mismatch: ArityMismatch,
}

mod context {
    use crate::stdlib::Binops;

    use super::EvaluationOptions;

    #[derive(Copy, Clone)]
    pub(super) struct Context<'b> {
        pub(super) binops: &'b Binops,
        pub(super) options: EvaluationOptions,
    }
}

mod error {
    use std::fmt;

    use annotate_snippets::{Group, Level};

    use crate::reprs::{ast::Expr, common::Id};

    /// Why evaluation got stuck.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum EvaluationError {
        FreeIdent(Id),
        UnknownOperator(Id),
        NonIntOperand { op: Id, found: Expr },
        NotALambda(Expr),
        ArityMismatch { params: usize, args: usize },
    }

    impl EvaluationError {
        pub fn into_record(self) -> Vec<Group<'static>> {
            let group = Group::with_title(Level::ERROR.primary_title("evaluation is stuck"))
                .element(Level::ERROR.message(self.to_string()));

            vec![group]
        }
    }

    impl fmt::Display for EvaluationError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FreeIdent(name) => write!(f, "free identifier `{name}`"),
                Self::UnknownOperator(op) => write!(f, "unknown operator `{op}`"),
                Self::NonIntOperand { op, found } => {
                    write!(f, "operand of `{op}` is not an integer: {found:?}")
                }
                Self::NotALambda(found) => write!(f, "application of a non-lambda: {found:?}"),
                Self::ArityMismatch { params, args } => write!(
                    f,
                    "lambda with {params} parameter(s) applied to {args} argument(s)"
                ),
            }
        }
    }

    impl std::error::Error for EvaluationError {}
}

/// Evaluates `expr` to a value (unit, an integer or a lambda), call-by-value.
///
/// # Errors
/// When evaluation gets stuck.
pub fn evaluate(expr: &Expr, binops: &Binops) -> Result<Expr, EvaluationError> {
    evaluate_with(expr, binops, EvaluationOptions::default())
}

/// [`evaluate`] with explicit [`EvaluationOptions`].
///
/// # Errors
/// When evaluation gets stuck.
pub fn evaluate_with(
    expr: &Expr,
    binops: &Binops,
    options: EvaluationOptions,
) -> Result<Expr, EvaluationError> {
    let ctx = Context { binops, options };
    expr.evaluate(&ctx).inspect_err(|err| debug!("stuck: {err}"))
}

trait Evaluate {
    fn evaluate(&self, ctx: &Context<'_>) -> Result<Expr, EvaluationError>;
}

impl Evaluate for Expr {
    fn evaluate(&self, ctx: &Context<'_>) -> Result<Expr, EvaluationError> {
        let value = match self {
            Expr::Unit | Expr::Int(_) | Expr::Lambda { .. } => self.clone(),
            Expr::Ident(name) => return Err(EvaluationError::FreeIdent(name.clone())),
            Expr::Binop { op, lhs, rhs } => {
                let Some(func) = ctx.binops.get(op.as_str()) else {
                    return Err(EvaluationError::UnknownOperator(op.clone()));
                };
                let lhs = lhs.evaluate(ctx)?.into_int(op)?;
                let rhs = rhs.evaluate(ctx)?.into_int(op)?;
                Expr::Int(func(lhs, rhs))
            }
            Expr::App { callee, args } => {
                let (params, body) = match callee.evaluate(ctx)? {
                    Expr::Lambda { params, body } => (params, body),
                    found => return Err(EvaluationError::NotALambda(found)),
                };
                apply(&params, *body, args, ctx)?
            }
        };
        Ok(value)
    }
}

fn apply(
    params: &[(Id, Type)],
    body: Expr,
    args: &[Expr],
    ctx: &Context<'_>,
) -> Result<Expr, EvaluationError> {
    let saturated = params.len() == args.len();
    if !saturated && ctx.options.arity_mismatch == ArityMismatch::Stuck {
        return Err(EvaluationError::ArityMismatch {
            params: params.len(),
            args: args.len(),
        });
    }
    let consumed = &params[..params.len().min(args.len())];

    trace!(
        "applying lambda over ({}) to {} argument(s)",
        params.iter().map(|(name, _)| name).join(", "),
        args.len()
    );
    let body = consumed
        .iter()
        .zip(args)
        .enumerate()
        .try_fold(body, |acc, (i, ((name, _), arg))| -> Result<_, EvaluationError> {
            let arg = arg.evaluate(ctx)?;
            // a later parameter of the same name shadows this one
            if params[i + 1..].iter().any(|(later, _)| later == name) {
                Ok(acc)
            } else {
                Ok(acc.substitute(name, &arg))
            }
        })?;

    if saturated { body.evaluate(ctx) } else { Ok(body) }
}

impl Expr {
    fn into_int(self, op: &Id) -> Result<i64, EvaluationError> {
        match self {
            Expr::Int(n) => Ok(n),
            found => Err(EvaluationError::NonIntOperand {
                op: op.clone(),
                found,
            }),
        }
    }
}
