//! Reusable UI components.

pub mod loading;
pub mod role_guard;
pub mod top_header;
