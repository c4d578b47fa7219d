//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: The approval workflow's two-table unit of work

pub mod admin;
pub mod analytics;
pub mod approval;
pub mod auth;
pub mod notification;
pub mod request;
pub mod word;

#[cfg(test)]
mod test;
