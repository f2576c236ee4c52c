//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **report**: Excel workbook rendering over the repository ports
//!
//! Adapters translate between domain types and infrastructure-specific
//! representations. They contain no business logic.

pub mod persistence;
pub mod report;
