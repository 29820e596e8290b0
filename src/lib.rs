//! Category catalog core.
//!
//! The crate is split into layers: `domain` holds the [`Category`] entity and
//! its value objects, `repository` defines the storage port together with an
//! in-memory adapter, and `services` orchestrates them in use cases such as
//! [`CreateCategory`].
//!
//! [`Category`]: domain::category::Category
//! [`CreateCategory`]: services::categories::CreateCategory

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod repository;
pub mod services;
