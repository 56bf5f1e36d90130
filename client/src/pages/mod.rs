//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. The student and trainer areas
//! are wrapped by `RoleGuard` in `area`, so pages under them can assume an
//! authorized session.

pub mod area;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod register;
