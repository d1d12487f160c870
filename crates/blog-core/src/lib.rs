//! # Blog Core
//!
//! The domain layer of the blog post service.
//! This crate contains the entity, its validation rules, the repository port
//! and the resource store. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::{DomainError, RepoError};
pub use store::BlogPostStore;
