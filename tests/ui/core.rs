#[path = "core/actions.rs"]
mod actions;

#[path = "core/component.rs"]
mod component;
