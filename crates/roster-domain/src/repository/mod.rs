//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from storage,
//! but NOT how it's done. That's the adapter's job.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼────────────────────────
//! trait EmployeeRepository│  InMemoryEmployeeRepository
//!   fn add()              │
//!   fn list_all()         │
//! ```

pub mod employee_repository;
