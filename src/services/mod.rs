//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle validation and orchestrate the account store and
//! transaction log.

pub mod transfer_service;
