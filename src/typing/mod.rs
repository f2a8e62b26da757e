use itertools::{Itertools, zip_eq};
use log::{debug, trace};

use crate::{
    reprs::ast::{Expr, Type},
    stdlib::Binops,
};

use self::context::Context;
pub use self::context::Env;
pub use self::error::{Operand, TypeCheckError};

mod context;
mod error;
mod ty;

/// The type checker's negative outcome.
pub type Rejected = TypeCheckError;

trait TypeCheck {
    fn type_check(&self, ctx: &Context<'_>) -> Result<Type, TypeCheckError>;
}

/// Decides the type of `expr` under `env`, with `binops` as the operators in
/// scope.
///
/// # Errors
/// When no type can be derived for the term.
pub fn type_check(expr: &Expr, env: &Env, binops: &Binops) -> Result<Type, TypeCheckError> {
    let ctx = Context::new(env.clone(), binops);
    expr.type_check(&ctx).inspect_err(|err| debug!("rejected: {err}"))
}

impl TypeCheck for Expr {
    fn type_check(&self, ctx: &Context<'_>) -> Result<Type, TypeCheckError> {
        let ty = match self {
            Expr::Unit => Type::Unit,
            Expr::Int(_) => Type::Int,
            Expr::Ident(name) => ctx
                .get_var_ty(name)
                .cloned()
                .ok_or_else(|| TypeCheckError::UnboundIdent(name.clone()))?,
            Expr::Binop { op, lhs, rhs } => {
                for (side, operand) in [(Operand::Lhs, lhs), (Operand::Rhs, rhs)] {
                    let found = operand.type_check(ctx)?;
                    if found != Type::Int {
                        return Err(TypeCheckError::OperandMismatch {
                            op: op.clone(),
                            side,
                            found,
                        });
                    }
                }
                if !ctx.has_binop(op) {
                    return Err(TypeCheckError::UnknownOperator(op.clone()));
                }
                Type::Int
            }
            Expr::Lambda { params, body } => {
                let ctx_ = ctx.push_params(params);
                let body_type = body.type_check(&ctx_)?;
                Type::Fun {
                    domains: params.iter().map(|(_, ty)| ty.clone()).collect(),
                    range: Box::new(body_type),
                }
            }
            Expr::App { callee, args } => {
                let callee_type = callee.type_check(ctx)?;
                let Type::Fun { domains, range } = &callee_type else {
                    return Err(TypeCheckError::NotAFunction(callee_type));
                };
                if domains.len() != args.len() {
                    return Err(TypeCheckError::ArityMismatch {
                        expected: domains.len(),
                        found: args.len(),
                        callee: callee_type.clone(),
                    });
                }

                let arg_types: Vec<_> = args.iter().map(|arg| arg.type_check(ctx)).try_collect()?;
                trace!(
                    "applying `{callee_type}` to ({})",
                    arg_types.iter().join(", ")
                );
                if let Some((position, (expected, found))) = zip_eq(domains, arg_types)
                    .enumerate()
                    .find(|(_, (expected, found))| *expected != found)
                {
                    return Err(TypeCheckError::ArgumentMismatch {
                        position,
                        expected: expected.clone(),
                        found,
                    });
                }
                (**range).clone()
            }
        };
        Ok(ty)
    }
}
