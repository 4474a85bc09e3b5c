//! Domain Services - Stateless operations over the model

pub mod grouping;
pub mod salary_ranking;
