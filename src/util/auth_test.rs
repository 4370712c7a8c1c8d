use super::*;

#[test]
fn redirects_when_signed_out_and_idle() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn no_redirect_while_request_in_flight() {
    let state = AuthState { loading: true, ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn no_redirect_when_signed_in() {
    let state = AuthState { signed_in: true, ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn enters_dashboard_only_after_login_completes() {
    let mut state = AuthState::default();
    assert!(!should_enter_dashboard(&state));
    state.begin_request();
    assert!(!should_enter_dashboard(&state));
    state.complete_login();
    assert!(should_enter_dashboard(&state));
}
