//! Numerical solvers for numeth.
//!
//! - [`factorization`]: dense LU with partial pivoting and LDLᴴ
//! - [`equation`]: scalar root finders sharing one evaluation adapter

pub mod equation;
pub mod factorization;
