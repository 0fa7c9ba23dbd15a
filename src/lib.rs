//! Funds Transfer Service
//!
//! An in-memory service that keeps a fixed set of accounts and moves money
//! between them atomically, recording every completed transfer in an
//! append-only transaction log.
//!
//! # Architecture
//!
//! - **Storage**: `store::AccountStore` (per-account locks) and
//!   `store::TransactionLog`
//! - **Business logic**: `services::transfer_service::TransferService`
//! - **Web Framework**: Axum handlers in `handlers`, wired up in `routes`
//! - **Money**: integer cents internally, `rust_decimal` at the boundary

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod money;
pub mod routes;
pub mod services;
pub mod store;
