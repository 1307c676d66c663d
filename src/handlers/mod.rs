//! Route handlers for both demo servers.
//!
//! Each handler validates the HTTP method itself, optionally reads or
//! writes bytes, and renders or writes its response. No handler keeps
//! state across requests.

pub mod assets;
pub mod echo;
pub mod forms;
pub mod pages;
pub mod upload;
