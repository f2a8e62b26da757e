use std::{borrow::Borrow, sync::Arc};

use crate::newtype_fmt;

/// An identifier naming a variable or an operator.
///
/// Cloning is cheap and the name can be shared between threads.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Id(Arc<str>);

newtype_fmt!(Id: Debug, Display);

impl Id {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The next candidate when this name has to be replaced by a fresh one.
    pub(crate) fn primed(&self) -> Self {
        Self(format!("{}'", self.0).into())
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&Id> for Id {
    fn from(value: &Id) -> Self {
        value.clone()
    }
}

// `Hash` of `Arc<str>` is the `Hash` of the `str`, so maps keyed by `Id`
// can be queried with plain `&str`
impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
