pub mod ast;
pub mod common;
