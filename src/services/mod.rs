//! Service layer
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation order, lookups and audit logging.

pub mod contact;

pub use contact::{AddOutcome, BirthdayOutcome, ContactService};
