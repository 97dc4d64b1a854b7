//! Friendlist - a terminal friends list with a synchronized table and form
//!
//! The list of friends is owned by a single [`store::FriendStore`]. The
//! table and the form are two views of that store: selecting a row in the
//! table, editing a field in the form, adding or removing a friend all go
//! through the store, and both views re-render from its snapshot.
//!
//! # Modules
//!
//! * [`cli`] - Command-line arguments
//! * [`config`] - Application configuration management
//! * [`store`] - The friends list and its exclusive selection
//! * [`pagination`] - Page arithmetic for the table
//! * [`validation`] - Email checks shown by the form on submit
//! * [`ui`] - Terminal user interface components

/// Command-line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Page arithmetic for the paginated table
pub mod pagination;

/// Selection-synchronized friends store
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Form validation feedback
pub mod validation;

pub use store::{Friend, FriendField, FriendStore, StoreError};
