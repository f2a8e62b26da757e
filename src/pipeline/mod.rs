use log::debug;

use crate::{
    error::CompilationError,
    evaluation::{EvaluationOptions, evaluate_with},
    reprs::ast::{Expr, Type},
    stdlib::Binops,
    typing::{Env, type_check},
};

/// A fixed operator registry and evaluation options shared by every
/// check and evaluation run through it.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    binops: Binops,
    options: EvaluationOptions,
}

impl Pipeline {
    pub fn new(binops: Binops) -> Self {
        Self {
            binops,
            options: EvaluationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(self, options: EvaluationOptions) -> Self {
        Self { options, ..self }
    }

    pub fn binops(&self) -> &Binops {
        &self.binops
    }

    pub fn options(&self) -> EvaluationOptions {
        self.options
    }

    pub fn type_check(&self, expr: &Expr, env: &Env) -> Result<Type, CompilationError> {
        type_check(expr, env, &self.binops).map_err(Into::into)
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<Expr, CompilationError> {
        evaluate_with(expr, &self.binops, self.options).map_err(Into::into)
    }

    /// Type-checks the closed term `expr`, then evaluates it.
    pub fn run(&self, expr: &Expr) -> Result<(Expr, Type), CompilationError> {
        let ty = self.type_check(expr, &Env::new())?;
        debug!("evaluating term of type `{ty}`");
        let value = self.evaluate(expr)?;
        Ok((value, ty))
    }
}
