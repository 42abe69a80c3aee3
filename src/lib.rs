//! RBAC Console - Terminal-based user and role administration
//!
//! This library provides the core functionality for the RBAC console, an
//! interactive tool for managing users, roles, and permissions in a single
//! session. Every record lives in memory for the lifetime of the session
//! and every mutation leaves an entry in the audit trail.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Runtime settings
//! - `error`: Custom error types
//! - `models`: Core data models (users, roles, permissions, filters)
//! - `store`: In-memory record stores and the session directory
//! - `services`: Business logic layer with audit logging
//! - `audit`: Append-only audit trail
//! - `tui`: Interactive terminal interface

pub mod audit;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod tui;

pub use error::RbacError;
