//! Grammar productions, split by node family.

mod expr;
mod stmt;
