//! Login form controller: drives one submission through the session state
//! machine, the backend, and the redirect delay.

use crate::api::LoginBackend;
use crate::timer;
use shared_types::{AttemptResolution, PortalSession};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Shared, mutable access to the session owned by the UI.
///
/// Each `update` runs to completion before the next event is handled, so a
/// closure always sees a consistent session.
pub trait SessionHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut PortalSession) -> R) -> R;
}

impl SessionHandle for Rc<RefCell<PortalSession>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut PortalSession) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Submit the current login form.
///
/// Returns `None` when the submission was refused (not on the login view,
/// already submitting, or a redirect is pending). Otherwise returns how the
/// attempt resolved. On success this future also waits out
/// `redirect_delay` and then moves the session to the dashboard, unless the
/// user navigated away in the meantime.
pub async fn submit_login<H, B>(
    mut handle: H,
    backend: &B,
    redirect_delay: Duration,
) -> Option<AttemptResolution>
where
    H: SessionHandle,
    B: LoginBackend,
{
    let Some(attempt) = handle.update(|s| s.begin_login()) else {
        tracing::debug!("login submission ignored");
        return None;
    };
    tracing::info!(portal = %attempt.portal, token = %attempt.token, "submitting login");

    let outcome = backend.login(attempt.portal, &attempt.credentials).await;
    match &outcome {
        Ok(response) => tracing::info!(
            portal = %attempt.portal,
            role = ?response.role,
            message = ?response.message,
            "login accepted"
        ),
        Err(err) => tracing::warn!(
            portal = %attempt.portal,
            kind = %err.kind,
            error = %err.message,
            "login failed"
        ),
    }

    let resolution = handle.update(|s| s.complete_login(attempt.token, &outcome));
    match resolution {
        AttemptResolution::Redirect(token) => {
            timer::sleep(redirect_delay).await;
            if handle.update(|s| s.finish_redirect(token)) {
                tracing::info!(portal = %attempt.portal, "entered dashboard");
            } else {
                tracing::debug!(token = %token, "redirect dropped; session moved on");
            }
        }
        AttemptResolution::Stale => {
            tracing::debug!(token = %attempt.token, "login response arrived after navigation; ignored");
        }
        AttemptResolution::Failed => {}
    }
    Some(resolution)
}

/// Return to the portal selector from any view.
pub fn go_back<H: SessionHandle>(mut handle: H) {
    let from = handle.update(|s| {
        let from = s.view();
        s.back();
        from
    });
    tracing::debug!(%from, "back to portal selector");
}
