//! Core UI functionality for the Friendlist application.
//!
//! This module contains the building blocks every component relies on:
//! the [`Action`] vocabulary, the [`Component`] trait, and terminal event
//! polling.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe what a key press or click asks for
//! 3. **Events** are produced by the [`EventHandler`]
//!
//! Components never mutate the friends list themselves. They return actions,
//! the app applies them to the store, and every component gets a fresh
//! snapshot afterwards.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
