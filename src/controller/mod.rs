//! HTTP request handlers.
//!
//! Controllers validate access through the auth guard, convert request
//! bodies into operation parameters, call into the service layer, and map
//! domain results to JSON responses. Every handler returns
//! `Result<_, AppError>` so error mapping stays in one place.

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod request;
pub mod super_admin;
pub mod word;
