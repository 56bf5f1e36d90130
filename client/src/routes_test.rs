use super::*;

#[test]
fn classify_student_area() {
    assert_eq!(classify("/student/7/dashboard"), RouteAccess::Protected(Role::Student));
    assert_eq!(classify("/student/messages"), RouteAccess::Protected(Role::Student));
    assert_eq!(classify("/student"), RouteAccess::Protected(Role::Student));
}

#[test]
fn classify_trainer_area_requires_teacher() {
    assert_eq!(classify("/trainer/42/dashboard"), RouteAccess::Protected(Role::Teacher));
    assert_eq!(classify("/trainer/42/students/3/edit"), RouteAccess::Protected(Role::Teacher));
}

#[test]
fn classify_public_routes() {
    for path in [
        "/",
        "",
        "/login",
        "/register",
        "/auth/forgot-password",
        "/auth/forgot-password/verify",
        "/student-benefits",
        "/teacher-benefits",
        "/teacher/1/dashboard",
        "/students",
    ] {
        assert_eq!(classify(path), RouteAccess::Public, "{path}");
    }
}

#[test]
fn classify_ignores_query_and_fragment() {
    assert_eq!(classify("/trainer/1/dashboard?tab=stats"), RouteAccess::Protected(Role::Teacher));
    assert_eq!(classify("/login#top"), RouteAccess::Public);
}

#[test]
fn normalize_path_trims_trailing_slashes() {
    assert_eq!(normalize_path("/login/"), "/login");
    assert_eq!(normalize_path("///"), "/");
    assert_eq!(normalize_path("/student/7/?x=1"), "/student/7");
}

#[test]
fn dashboard_path_uses_role_area() {
    assert_eq!(dashboard_path(Role::Student, "7"), "/student/7/dashboard");
    assert_eq!(dashboard_path(Role::Teacher, "42"), "/trainer/42/dashboard");
}

#[test]
fn dashboard_path_classifies_back_to_its_role() {
    for role in [Role::Student, Role::Teacher] {
        assert_eq!(classify(&dashboard_path(role, "1")), RouteAccess::Protected(role));
    }
}

#[test]
fn entry_paths_are_login_and_register() {
    assert!(is_entry_path("/login"));
    assert!(is_entry_path("/register/"));
    assert!(!is_entry_path("/"));
    assert!(!is_entry_path("/auth/forgot-password"));
}
