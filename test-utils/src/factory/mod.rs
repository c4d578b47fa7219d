//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Each entity has its own factory module
//! with both a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let word = factory::create_word(&db).await?;
//!     let request = factory::create_request(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let word = factory::word::WordFactory::new(&db)
//!     .term("latency")
//!     .status("Active")
//!     .search_count(7)
//!     .build()
//!     .await?;
//! ```

pub mod admin;
pub mod helpers;
pub mod invitation;
pub mod request;
pub mod super_admin;
pub mod word;

// Re-export commonly used factory functions for concise usage
pub use admin::create_admin;
pub use invitation::create_invitation;
pub use request::{create_request, create_request_for_word};
pub use super_admin::create_super_admin;
pub use word::{create_word, create_word_with_term};
