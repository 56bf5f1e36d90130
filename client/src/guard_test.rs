use super::*;
use crate::session::{MemorySessionStore, Session, StoredUser, TOKEN_KEY, USER_KEY, USER_TYPE_KEY};

fn session(role: Role, id: &str) -> Session {
    Session {
        user: StoredUser { id: id.to_owned(), username: format!("user{id}"), role },
        token: format!("token-{id}"),
        refresh_token: None,
    }
}

fn store_with(role: Role, id: &str) -> MemorySessionStore {
    let store = MemorySessionStore::default();
    store.save(&session(role, id)).unwrap();
    store
}

fn user_json(role: Role, id: &str) -> String {
    serde_json::to_string(&StoredUser { id: id.to_owned(), username: "x".to_owned(), role }).unwrap()
}

// =============================================================
// Matching role
// =============================================================

#[test]
fn matching_role_is_allowed() {
    for role in [Role::Student, Role::Teacher] {
        let store = store_with(role, "5");
        let decision = enforce(&store, role);
        assert_eq!(decision, GuardDecision::Allow);
        assert!(decision.redirect_target().is_none());
        assert!(store.is_authenticated());
    }
}

#[test]
fn allowed_path_inference_matches_explicit_role() {
    let store = store_with(Role::Teacher, "42");
    assert!(enforce_path(&store, "/trainer/42/workouts/new").is_allowed());
}

// =============================================================
// Role mismatch
// =============================================================

#[test]
fn student_on_trainer_dashboard_goes_to_own_dashboard() {
    let store = store_with(Role::Student, "7");
    let decision = enforce_path(&store, "/trainer/42/dashboard");
    assert_eq!(
        decision,
        GuardDecision::Redirect { to: "/student/7/dashboard".to_owned(), denial: Denial::RoleMismatch }
    );
}

#[test]
fn teacher_in_student_area_goes_to_trainer_dashboard() {
    let store = store_with(Role::Teacher, "42");
    let decision = enforce(&store, Role::Student);
    assert_eq!(decision.redirect_target(), Some("/trainer/42/dashboard"));
    assert_eq!(decision.denial(), Some(Denial::RoleMismatch));
}

#[test]
fn mismatch_target_is_always_own_area() {
    for (role, other) in [(Role::Student, Role::Teacher), (Role::Teacher, Role::Student)] {
        let store = store_with(role, "9");
        let target = enforce(&store, other).redirect_target().map(str::to_owned).unwrap();
        assert_eq!(routes::classify(&target), RouteAccess::Protected(role));
    }
}

#[test]
fn mismatch_keeps_session() {
    let store = store_with(Role::Student, "7");
    let _ = enforce(&store, Role::Teacher);
    assert_eq!(store.session(), Some(session(Role::Student, "7")));
}

// =============================================================
// No session
// =============================================================

#[test]
fn no_session_redirects_to_login() {
    let store = MemorySessionStore::default();
    let decision = enforce_path(&store, "/trainer/42/dashboard");
    assert_eq!(decision, GuardDecision::Redirect { to: "/login".to_owned(), denial: Denial::NoSession });
}

#[test]
fn no_session_redirects_to_login_for_every_protected_path() {
    let store = MemorySessionStore::default();
    for path in ["/student/1/dashboard", "/student/1/diet", "/trainer/2/students", "/trainer/2/settings"] {
        assert_eq!(enforce_path(&store, path).redirect_target(), Some("/login"), "{path}");
    }
}

#[test]
fn user_data_without_token_is_no_session() {
    let store = MemorySessionStore::with_items([
        (USER_KEY, user_json(Role::Student, "7")),
        (USER_TYPE_KEY, "student".to_owned()),
    ]);
    assert_eq!(enforce(&store, Role::Student).denial(), Some(Denial::NoSession));
}

// =============================================================
// Corrupted session
// =============================================================

#[test]
fn role_missing_with_user_present_is_corrupted_and_cleared() {
    let store = MemorySessionStore::with_items([(TOKEN_KEY, "t".to_owned()), (USER_KEY, user_json(Role::Student, "7"))]);
    let decision = enforce(&store, Role::Student);
    assert_eq!(decision, GuardDecision::Redirect { to: "/login".to_owned(), denial: Denial::CorruptedSession });
    assert!(store.is_empty());
}

#[test]
fn user_missing_with_role_present_is_corrupted_and_cleared() {
    let store = MemorySessionStore::with_items([(TOKEN_KEY, "t"), (USER_TYPE_KEY, "teacher")]);
    let decision = enforce(&store, Role::Teacher);
    assert_eq!(decision.denial(), Some(Denial::CorruptedSession));
    assert_eq!(decision.redirect_target(), Some("/login"));
    assert!(store.is_empty());
}

#[test]
fn disagreeing_user_and_role_is_corrupted() {
    let store = MemorySessionStore::with_items([
        (TOKEN_KEY, "t".to_owned()),
        (USER_KEY, user_json(Role::Student, "7")),
        (USER_TYPE_KEY, "teacher".to_owned()),
    ]);
    assert_eq!(enforce(&store, Role::Teacher).denial(), Some(Denial::CorruptedSession));
    assert!(store.is_empty());
}

#[test]
fn unknown_user_type_is_corrupted() {
    let store = MemorySessionStore::with_items([
        (TOKEN_KEY, "t".to_owned()),
        (USER_KEY, user_json(Role::Student, "7")),
        (USER_TYPE_KEY, "admin".to_owned()),
    ]);
    assert_eq!(enforce(&store, Role::Student).denial(), Some(Denial::CorruptedSession));
    assert!(store.is_empty());
}

#[test]
fn id_with_path_separators_is_corrupted_and_cleared() {
    for id in ["7/../../trainer/1", "7?x", "7#x"] {
        let store = MemorySessionStore::with_items([
            (TOKEN_KEY, "t".to_owned()),
            (USER_KEY, user_json(Role::Student, id)),
            (USER_TYPE_KEY, "student".to_owned()),
        ]);
        let decision = enforce(&store, Role::Teacher);
        assert_eq!(
            decision,
            GuardDecision::Redirect { to: "/login".to_owned(), denial: Denial::CorruptedSession },
            "{id}"
        );
        assert!(store.is_empty(), "{id}");
    }
}

#[test]
fn corrupted_session_never_reaches_role_check() {
    let store = MemorySessionStore::with_items([(TOKEN_KEY, "t"), (USER_TYPE_KEY, "student")]);
    assert_eq!(enforce(&store, Role::Teacher).redirect_target(), Some("/login"));
}

#[test]
fn second_pass_after_clear_is_no_session() {
    let store = MemorySessionStore::with_items([(TOKEN_KEY, "t"), (USER_TYPE_KEY, "student")]);
    let _ = enforce(&store, Role::Student);
    assert_eq!(enforce(&store, Role::Student).denial(), Some(Denial::NoSession));
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn decide_is_idempotent_for_unchanged_snapshot() {
    let stores = [
        MemorySessionStore::default(),
        store_with(Role::Student, "1"),
        store_with(Role::Teacher, "2"),
        MemorySessionStore::with_items([(TOKEN_KEY, "t"), (USER_TYPE_KEY, "student")]),
    ];
    for store in &stores {
        let snapshot = store.snapshot();
        for required in [Role::Student, Role::Teacher] {
            assert_eq!(decide(&snapshot, required), decide(&snapshot, required));
        }
    }
}

#[test]
fn enforce_twice_without_corruption_gives_same_decision() {
    let store = store_with(Role::Student, "3");
    assert_eq!(enforce(&store, Role::Teacher), enforce(&store, Role::Teacher));
    assert_eq!(enforce(&store, Role::Student), enforce(&store, Role::Student));
}

// =============================================================
// Public paths
// =============================================================

#[test]
fn public_paths_pass_without_session() {
    let store = MemorySessionStore::default();
    for path in ["/", "/login", "/register", "/auth/forgot-password/reset"] {
        assert!(enforce_path(&store, path).is_allowed(), "{path}");
    }
}

#[test]
fn signed_in_user_on_login_goes_to_dashboard() {
    let store = store_with(Role::Teacher, "42");
    assert_eq!(public_redirect(&store, "/login"), Some("/trainer/42/dashboard".to_owned()));
    assert_eq!(public_redirect(&store, "/register"), Some("/trainer/42/dashboard".to_owned()));
}

#[test]
fn public_redirect_ignores_other_public_paths() {
    let store = store_with(Role::Student, "7");
    assert_eq!(public_redirect(&store, "/"), None);
    assert_eq!(public_redirect(&store, "/auth/forgot-password"), None);
}

#[test]
fn public_redirect_needs_consistent_session() {
    let store = MemorySessionStore::with_items([(TOKEN_KEY, "t"), (USER_TYPE_KEY, "student")]);
    assert_eq!(public_redirect(&store, "/login"), None);
    assert_eq!(public_redirect(&MemorySessionStore::default(), "/login"), None);
}

// =============================================================
// GuardPhase
// =============================================================

#[test]
fn phase_starts_checking() {
    assert_eq!(GuardPhase::default(), GuardPhase::Checking);
    assert!(!GuardPhase::Checking.is_authorized());
}

#[test]
fn phase_from_decision() {
    assert_eq!(GuardPhase::from_decision(&GuardDecision::Allow), GuardPhase::Authorized);
    let redirect = GuardDecision::Redirect { to: "/login".to_owned(), denial: Denial::NoSession };
    let phase = GuardPhase::from_decision(&redirect);
    assert_eq!(phase, GuardPhase::Redirecting("/login".to_owned()));
    assert!(!phase.is_authorized());
}
