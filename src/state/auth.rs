//! Simulated auth-session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no account backend; `signed_in` flips after the simulated
//! request completes and only lives for the page session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Which auth form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn switched(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

pub const MSG_REGISTERED: &str = "Account created successfully! Please sign in.";

/// Provided via context as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub mode: AuthMode,
    pub loading: bool,
    pub signed_in: bool,
    /// Submit-level error shown above the form.
    pub error: Option<String>,
    /// Informational banner, e.g. after registering.
    pub notice: Option<String>,
}

impl AuthState {
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
        self.notice = None;
    }

    pub fn fail_request(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn complete_login(&mut self) {
        self.loading = false;
        self.signed_in = true;
    }

    /// Registration succeeded: show the notice and switch to the login form.
    pub fn complete_registration(&mut self) {
        self.loading = false;
        self.mode = AuthMode::Login;
        self.notice = Some(MSG_REGISTERED.to_owned());
    }

    pub fn switch_mode(&mut self) {
        self.mode = self.mode.switched();
        self.error = None;
        self.notice = None;
    }

    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}
