//! Session state. There is no backend: any non-empty credentials start
//! a session, and the session lives only as long as the page.

use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub email: Option<String>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// The only login rule: both fields non-blank. Returns the trimmed email.
pub fn validate_credentials(email: &str, password: &str) -> Result<String, String> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Please enter both email and password".to_string());
    }
    Ok(email.to_string())
}

/// Helper: Perform login
pub fn do_login(
    set_auth_state: &WriteSignal<AuthState>,
    email: &str,
    password: &str,
) -> Result<(), String> {
    let email = validate_credentials(email, password)?;
    leptos::logging::log!("login: email='{}'", email);
    set_auth_state.set(AuthState { email: Some(email) });
    Ok(())
}

/// Helper: Perform logout. Clears the session and returns to the dashboard.
pub fn do_logout(ctx: &AppGlobalContext, set_auth_state: &WriteSignal<AuthState>) {
    leptos::logging::log!("logout");
    set_auth_state.set(AuthState::default());
    ctx.navigate(Page::Dashboard);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_non_empty_pair_is_accepted() {
        assert_eq!(
            validate_credentials("admin@mel.org", "secret"),
            Ok("admin@mel.org".to_string())
        );
        assert_eq!(
            validate_credentials("  admin@mel.org  ", "x"),
            Ok("admin@mel.org".to_string())
        );
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("admin@mel.org", "").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
        assert!(validate_credentials("admin@mel.org", "   ").is_err());
    }
}
