pub mod error;
pub mod macros;

pub mod evaluation;
pub mod pipeline;
pub mod reprs;
pub mod stdlib;
pub mod typing;

pub use crate::{
    evaluation::{evaluate, evaluate_with},
    reprs::{
        ast::{Expr, Type},
        common::Id,
    },
    stdlib::Binops,
    typing::{Env, type_check},
};
