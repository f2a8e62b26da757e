use std::{fmt, sync::Arc};

use hashbrown::HashMap;
use itertools::Itertools;
use log::debug;

use crate::reprs::common::Id;

pub type BinopFn = Arc<dyn Fn(i64, i64) -> i64 + Send + Sync>;

/// Registry of the binary operators terms may name.
///
/// A registry is assembled with the consuming [`Binops::with`] before any
/// checking or evaluation and is only read afterwards; sharing it by
/// reference freezes it.
#[derive(Clone)]
pub struct Binops {
    table: HashMap<Id, BinopFn>,
}

impl Binops {
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// `+`, `-` and `*`, wrapping on overflow.
    pub fn standard() -> Self {
        Self::empty()
            .with("+", i64::wrapping_add)
            .with("-", i64::wrapping_sub)
            .with("*", i64::wrapping_mul)
    }

    /// Registers `func` under `name`, replacing any previous entry.
    #[must_use]
    pub fn with(
        mut self,
        name: impl Into<Id>,
        func: impl Fn(i64, i64) -> i64 + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        debug!("registering binop `{name}`");
        self.table.insert(name, Arc::new(func));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&BinopFn> {
        self.table.get(name)
    }

    /// Applies the operator registered as `name`, `None` if there is none.
    pub fn apply(&self, name: &str, lhs: i64, rhs: i64) -> Option<i64> {
        self.get(name).map(|func| func(lhs, rhs))
    }

    pub fn names(&self) -> impl Iterator<Item = &Id> {
        self.table.keys().sorted_unstable()
    }
}

impl Default for Binops {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Binops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
