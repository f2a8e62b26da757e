use hashbrown::HashMap;

use crate::{
    reprs::{ast::Type, common::Id},
    stdlib::Binops,
};

/// Types of the identifiers in scope.
#[must_use]
#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct Env {
    vars: HashMap<Id, Type>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new environment with `bindings` added in order, so a later binding
    /// overrides both the existing entry and earlier bindings of the same name.
    pub fn extend<'b>(&self, bindings: impl IntoIterator<Item = &'b (Id, Type)>) -> Self {
        let mut new = self.clone();
        new.vars.extend(bindings.into_iter().cloned());
        new
    }

    pub fn with(&self, name: impl Into<Id>, ty: Type) -> Self {
        let mut new = self.clone();
        new.vars.insert(name.into(), ty);
        new
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.vars.get(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<N: Into<Id>> FromIterator<(N, Type)> for Env {
    fn from_iter<I: IntoIterator<Item = (N, Type)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
        }
    }
}

#[must_use]
#[derive(Clone)]
pub(super) struct Context<'b> {
    env: Env,
    binops: &'b Binops,
}

impl<'b> Context<'b> {
    pub(super) fn new(env: Env, binops: &'b Binops) -> Self {
        Self { env, binops }
    }

    pub(super) fn push_params(&self, params: &[(Id, Type)]) -> Self {
        Self {
            env: self.env.extend(params),
            binops: self.binops,
        }
    }

    pub(super) fn get_var_ty(&self, name: &Id) -> Option<&Type> {
        self.env.get(name.as_str())
    }

    pub(super) fn has_binop(&self, op: &Id) -> bool {
        self.binops.contains(op.as_str())
    }
}
