//! Top-level application state: landing vs dashboard, session and auth modal.

/// Which top-level view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Dashboard,
}

/// Copy set the auth modal opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Shell state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shell {
    pub view: View,
    pub authenticated: bool,
    pub modal_open: bool,
    pub auth_mode: AuthMode,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// "Log In" / "Dashboard": go straight in or ask for credentials.
    pub fn enter_dashboard(&mut self) {
        self.open_or_enter(AuthMode::Login);
    }

    /// "Sign Up" / "Start Distributing": same gate, signup copy.
    pub fn start_distributing(&mut self) {
        self.open_or_enter(AuthMode::Signup);
    }

    pub fn on_auth_success(&mut self) {
        log::info!("✅ Signed in, entering dashboard");
        self.authenticated = true;
        self.view = View::Dashboard;
        self.modal_open = false;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn logout(&mut self) {
        log::info!("👋 Logged out");
        self.authenticated = false;
        self.view = View::Landing;
    }

    fn open_or_enter(&mut self, mode: AuthMode) {
        if self.authenticated {
            self.view = View::Dashboard;
        } else {
            self.auth_mode = mode;
            self.modal_open = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_opens_modal() {
        let mut shell = Shell::new();
        shell.enter_dashboard();
        assert!(shell.modal_open);
        assert_eq!(shell.auth_mode, AuthMode::Login);
        assert_eq!(shell.view, View::Landing);

        shell.close_modal();
        shell.start_distributing();
        assert_eq!(shell.auth_mode, AuthMode::Signup);
    }

    #[test]
    fn test_auth_success_enters_dashboard() {
        let mut shell = Shell::new();
        shell.start_distributing();
        shell.on_auth_success();
        assert!(shell.authenticated);
        assert!(!shell.modal_open);
        assert_eq!(shell.view, View::Dashboard);
    }

    #[test]
    fn test_authenticated_skips_modal() {
        let mut shell = Shell {
            authenticated: true,
            ..Shell::new()
        };
        shell.enter_dashboard();
        assert_eq!(shell.view, View::Dashboard);
        assert!(!shell.modal_open);
    }

    #[test]
    fn test_logout_returns_to_landing() {
        let mut shell = Shell::new();
        shell.enter_dashboard();
        shell.on_auth_success();
        shell.logout();
        assert!(!shell.authenticated);
        assert_eq!(shell.view, View::Landing);

        shell.enter_dashboard();
        assert!(shell.modal_open);
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.toggled().toggled(), AuthMode::Signup);
    }
}
