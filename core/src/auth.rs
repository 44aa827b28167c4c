//! Simulated sign-in.
//!
//! There is no account service: after [`AUTH_DELAY`] every submission
//! succeeds, whatever the credentials say.

use crate::clock::Clock;
use crate::config::AUTH_DELAY;
use crate::shell::AuthMode;

/// Whatever the artist typed into the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only collected in signup mode.
    pub name: String,
}

/// Modal copy for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit: &'static str,
    pub switch_prompt: &'static str,
    pub switch_action: &'static str,
}

impl AuthMode {
    pub fn copy(self) -> AuthCopy {
        match self {
            AuthMode::Login => AuthCopy {
                title: "Welcome Back",
                subtitle: "Enter your credentials to access your artist dashboard.",
                submit: "Sign In",
                switch_prompt: "Don't have an account?",
                switch_action: "Sign Up",
            },
            AuthMode::Signup => AuthCopy {
                title: "Create Account",
                subtitle: "Join 10k+ artists distributing their music globally.",
                submit: "Create Account",
                switch_prompt: "Already have an account?",
                switch_action: "Log In",
            },
        }
    }

    /// Whether the full-name field is shown.
    pub fn asks_for_name(self) -> bool {
        self == AuthMode::Signup
    }
}

/// Wait out the simulated round trip. Always succeeds.
pub async fn authenticate<C: Clock>(clock: &C, mode: AuthMode, credentials: &Credentials) {
    log::info!("🔑 {:?} request for '{}'", mode, credentials.email);
    clock.sleep(AUTH_DELAY).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::InstantClock;
    use crate::shell::{Shell, View};

    #[tokio::test]
    async fn test_any_credentials_sign_in_after_one_delay() {
        let clock = InstantClock::default();
        let mut shell = Shell::new();
        shell.enter_dashboard();

        authenticate(&clock, shell.auth_mode, &Credentials::default()).await;
        shell.on_auth_success();

        assert_eq!(clock.sleeps(), vec![AUTH_DELAY]);
        assert!(shell.authenticated);
        assert_eq!(shell.view, View::Dashboard);
    }

    #[tokio::test]
    async fn test_signup_same_delay() {
        let clock = InstantClock::default();
        let credentials = Credentials {
            email: "nova@orbitx.com".into(),
            password: "hunter2".into(),
            name: "Nova".into(),
        };
        authenticate(&clock, AuthMode::Signup, &credentials).await;
        assert_eq!(clock.total_slept(), AUTH_DELAY);
    }

    #[test]
    fn test_copy_per_mode() {
        assert_eq!(AuthMode::Login.copy().title, "Welcome Back");
        assert_eq!(AuthMode::Signup.copy().switch_action, "Log In");
        assert!(AuthMode::Signup.asks_for_name());
        assert!(!AuthMode::Login.asks_for_name());
    }
}
