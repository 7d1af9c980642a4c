//! Gamebook — serves branching stories over HTTP.
//!
//! Every request path names a chapter. The `StoryHandler` derives a
//! chapter key from the request, looks the chapter up and renders it
//! through a template.

pub mod config;
pub mod error;
pub mod handler;
pub mod keys;
pub mod routes;
pub mod state;
