//! Route classification and canonical navigation targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard infers a route's required role from its first path segment:
//! `/student/...` belongs to students, `/trainer/...` to teachers. Everything
//! else (landing, login, registration, the `/auth/...` flows, marketing pages)
//! is public.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::session::Role;

pub const LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Access requirement for a navigable path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected(Role),
}

/// First path segment of each role's area.
pub fn area_segment(role: Role) -> &'static str {
    match role {
        Role::Student => "student",
        Role::Teacher => "trainer",
    }
}

/// Strip query, fragment and trailing slashes; always keeps a leading `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { LANDING_PATH } else { trimmed }
}

pub fn classify(path: &str) -> RouteAccess {
    let first = normalize_path(path).split('/').find(|s| !s.is_empty());
    match first {
        Some(seg) if seg == area_segment(Role::Student) => RouteAccess::Protected(Role::Student),
        Some(seg) if seg == area_segment(Role::Teacher) => RouteAccess::Protected(Role::Teacher),
        _ => RouteAccess::Public,
    }
}

/// Landing route for a signed-in user of `role`.
pub fn dashboard_path(role: Role, user_id: &str) -> String {
    format!("/{}/{user_id}/dashboard", area_segment(role))
}

/// Login and registration: pages a signed-in user is bounced away from.
pub fn is_entry_path(path: &str) -> bool {
    matches!(normalize_path(path), LOGIN_PATH | REGISTER_PATH)
}
