use client::SessionHandle;
use dioxus::prelude::*;
use shared_types::{PortalId, PortalSession};

/// Global portal session state.
///
/// Wraps the session state machine in a signal so every view re-renders on
/// transitions. All mutation goes through [`SessionHandle::update`].
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    pub session: Signal<PortalSession>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(PortalSession::new()),
        }
    }

    pub fn select(&mut self, portal: PortalId) {
        if self.update(|s| s.select_portal(portal)) {
            tracing::debug!(%portal, "portal selected");
        }
    }

    pub fn set_username(&mut self, value: String) {
        self.update(|s| s.set_username(value));
    }

    pub fn set_password(&mut self, value: String) {
        self.update(|s| s.set_password(value));
    }

    pub fn back(&self) {
        client::go_back(*self);
    }
}

impl SessionHandle for SessionState {
    fn update<R>(&mut self, f: impl FnOnce(&mut PortalSession) -> R) -> R {
        f(&mut self.session.write())
    }
}

/// Hook to access the session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
