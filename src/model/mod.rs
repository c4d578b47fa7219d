//! Domain models, operation parameters, and API DTOs.
//!
//! Types here sit between the HTTP surface and the data layer: entity models
//! are converted into these structs at the repository boundary, and the same
//! structs (with their serde derives) form the JSON bodies of the API.

pub mod admin;
pub mod analytics;
pub mod api;
pub mod auth;
pub mod request;
pub mod word;
