//! Portal session state machine.
//!
//! The whole client is one machine with three views. Every transition is a
//! plain method on [`PortalSession`]; the UI reads the state and forwards
//! events, nothing else. Asynchronous work (the login request and the
//! redirect delay) carries a [`Generation`] captured when it started, and its
//! result is applied only if the session still carries that generation.

use crate::error::LoginError;
use crate::portal::{find_portal, PortalDescriptor, PortalId};
use crate::requests::LoginCredentials;
use std::fmt;

/// The three-way UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionViewState {
    Selector,
    Login,
    Dashboard,
}

impl fmt::Display for SessionViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionViewState::Selector => write!(f, "Selector"),
            SessionViewState::Login => write!(f, "Login"),
            SessionViewState::Dashboard => write!(f, "Dashboard"),
        }
    }
}

/// Outcome of the most recent login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Form payload of the Login view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub credentials: LoginCredentials,
    pub status: LoginStatus,
    pub submitting: bool,
}

/// View plus payload. Login and Dashboard always carry a portal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Selector,
    Login { portal: PortalId, form: LoginForm },
    Dashboard { portal: PortalId },
}

impl SessionState {
    pub fn view(&self) -> SessionViewState {
        match self {
            SessionState::Selector => SessionViewState::Selector,
            SessionState::Login { .. } => SessionViewState::Login,
            SessionState::Dashboard { .. } => SessionViewState::Dashboard,
        }
    }
}

/// Token identifying the session generation an async operation started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the controller needs to send one login request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub token: Generation,
    pub portal: PortalId,
    pub credentials: LoginCredentials,
}

/// What the controller should do after a login response was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptResolution {
    /// Login succeeded; call [`PortalSession::finish_redirect`] with this
    /// token after the redirect delay.
    Redirect(Generation),
    /// Login failed; the form shows the error banner.
    Failed,
    /// The session moved on while the request was in flight. Nothing changed.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortalSession {
    state: SessionState,
    generation: u64,
}

impl PortalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> SessionViewState {
        self.state.view()
    }

    pub fn generation(&self) -> Generation {
        Generation(self.generation)
    }

    /// Selected portal, if the view carries one.
    pub fn portal(&self) -> Option<PortalId> {
        match &self.state {
            SessionState::Selector => None,
            SessionState::Login { portal, .. } | SessionState::Dashboard { portal } => {
                Some(*portal)
            }
        }
    }

    /// Resolve the selected portal against the catalog. `None` means the
    /// view has nothing to render.
    pub fn descriptor(&self) -> Option<&'static PortalDescriptor> {
        self.portal().and_then(|p| find_portal(p.as_str()))
    }

    pub fn form(&self) -> Option<&LoginForm> {
        match &self.state {
            SessionState::Login { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn status(&self) -> LoginStatus {
        self.form().map(|f| f.status).unwrap_or_default()
    }

    pub fn is_submitting(&self) -> bool {
        self.form().map(|f| f.submitting).unwrap_or(false)
    }

    pub fn credentials(&self) -> Option<&LoginCredentials> {
        self.form().map(|f| &f.credentials)
    }

    /// Whether the submit control should accept a click.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.form(),
            Some(form) if !form.submitting && form.status != LoginStatus::Success
        )
    }

    fn advance(&mut self) -> Generation {
        self.generation += 1;
        Generation(self.generation)
    }

    /// Selector → Login with an empty form. Ignored outside the Selector.
    pub fn select_portal(&mut self, portal: PortalId) -> bool {
        if !matches!(self.state, SessionState::Selector) {
            return false;
        }
        self.advance();
        self.state = SessionState::Login {
            portal,
            form: LoginForm::default(),
        };
        true
    }

    /// Select by string key. Unknown keys are a no-op.
    pub fn select_portal_key(&mut self, key: &str) -> bool {
        match PortalId::from_key(key) {
            Some(portal) => self.select_portal(portal),
            None => false,
        }
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        if let SessionState::Login { form, .. } = &mut self.state {
            form.credentials.username = username.into();
        }
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        if let SessionState::Login { form, .. } = &mut self.state {
            form.credentials.password = password.into();
        }
    }

    /// Start a login attempt. Returns `None` when not in Login, when a
    /// request is already outstanding, or when a redirect is pending.
    pub fn begin_login(&mut self) -> Option<LoginAttempt> {
        if !self.can_submit() {
            return None;
        }
        let token = self.advance();
        match &mut self.state {
            SessionState::Login { portal, form } => {
                form.submitting = true;
                form.status = LoginStatus::Idle;
                Some(LoginAttempt {
                    token,
                    portal: *portal,
                    credentials: form.credentials.clone(),
                })
            }
            _ => None,
        }
    }

    /// Apply the outcome of the attempt started with `token`.
    pub fn complete_login<T>(
        &mut self,
        token: Generation,
        outcome: &Result<T, LoginError>,
    ) -> AttemptResolution {
        if token != self.generation() {
            return AttemptResolution::Stale;
        }
        let SessionState::Login { form, .. } = &mut self.state else {
            return AttemptResolution::Stale;
        };
        if !form.submitting {
            return AttemptResolution::Stale;
        }
        form.submitting = false;
        match outcome {
            Ok(_) => {
                form.status = LoginStatus::Success;
                AttemptResolution::Redirect(token)
            }
            Err(_) => {
                form.status = LoginStatus::Error;
                AttemptResolution::Failed
            }
        }
    }

    /// Login → Dashboard once the redirect delay has elapsed. Applies at most
    /// once per successful attempt.
    pub fn finish_redirect(&mut self, token: Generation) -> bool {
        if token != self.generation() {
            return false;
        }
        let portal = match &self.state {
            SessionState::Login { portal, form } if form.status == LoginStatus::Success => *portal,
            _ => return false,
        };
        self.advance();
        self.state = SessionState::Dashboard { portal };
        true
    }

    /// Any view → Selector, clearing portal, credentials and status. Any
    /// in-flight request or pending redirect becomes stale.
    pub fn back(&mut self) {
        self.advance();
        self.state = SessionState::Selector;
    }
}
