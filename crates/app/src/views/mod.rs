pub mod dashboard;
pub mod login;
pub mod selector;

use crate::session::use_session;
use dashboard::DashboardView;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use login::LoginView;
use selector::PortalSelector;
use shared_types::SessionViewState;
use shared_ui::{Button, ButtonVariant};

/// Renders whichever of the three session views is active.
#[component]
pub fn PortalSessionView() -> Element {
    let state = use_session();
    let view = state.session.read().view();

    rsx! {
        div { class: "portal-backdrop",
            match view {
                SessionViewState::Selector => rsx! { PortalSelector {} },
                SessionViewState::Login => rsx! { LoginView {} },
                SessionViewState::Dashboard => rsx! { DashboardView {} },
            }
        }
    }
}

/// "Back to Portals" link shared by the login and dashboard views.
#[component]
pub fn BackToPortals() -> Element {
    let state = use_session();

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: "back-link",
            onclick: move |_| state.back(),
            Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
            "Back to Portals"
        }
    }
}
