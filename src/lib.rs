//! Catalog data-access and query layer.
//!
//! This crate owns the persistent `Product` catalog: validated CRUD with
//! optimistic-concurrency conflict detection, substring search with
//! multi-key sorting, and statistics derived from the visible result set.
//! Presentation concerns (HTTP, templates, forms) live in the consuming
//! application.

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
