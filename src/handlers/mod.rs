//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Delegates to the transfer service
//! 3. Returns HTTP response (JSON, status code)

/// Account balance endpoint
pub mod accounts;
/// Service health endpoint
pub mod health;
/// Transfer endpoint
pub mod transfers;
