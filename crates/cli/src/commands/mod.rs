//! CLI Commands

pub mod department;
pub mod roster;
pub mod summary;
pub mod top_earners;

pub use department::DepartmentCommand;
pub use roster::RosterArgs;
pub use summary::SummaryCommand;
pub use top_earners::TopEarnersCommand;
