//! Domain Models - The vocabulary of Roster
//!
//! Departments and the employees that belong to them.

pub mod department;
pub mod employee;
