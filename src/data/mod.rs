//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these
//! repositories, with one exception: the approval workflow runs its two-table unit of
//! work directly against a transaction in the service layer.

pub mod admin;
pub mod analytics;
pub mod invitation;
pub mod lookup;
pub mod notification;
pub mod request;
pub mod super_admin;
pub mod token;
pub mod word;

#[cfg(test)]
mod test;
