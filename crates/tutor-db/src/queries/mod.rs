//! Query functions, one module per table.

pub mod items;
pub mod plans;
