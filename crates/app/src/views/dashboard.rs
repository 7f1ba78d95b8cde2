use super::BackToPortals;
use crate::portal_theme::portal_theme;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardIcon, CardTitle};

/// Post-login placeholder for the selected portal.
#[component]
pub fn DashboardView() -> Element {
    let state = use_session();
    let Some(portal) = state.session.read().descriptor() else {
        return rsx! {};
    };
    let theme = portal_theme(portal.id);
    let title = portal.title.en;
    let title_am = portal.title.am;
    let title_lower = title.to_lowercase();

    rsx! {
        div { class: "dashboard-page",
            div { class: "dashboard-header",
                BackToPortals {}
                div { class: "dashboard-welcome",
                    h1 { "Welcome to {title}" }
                    p { class: "dashboard-welcome-am", "{title_am}" }
                }
                div { class: "dashboard-header-spacer" }
            }

            Card { accent: theme.accent,
                CardHeader {
                    CardIcon { "{theme.icon}" }
                    CardTitle { "{title} Dashboard" }
                    CardDescription { "You have successfully logged into the {title_lower}." }
                }
                CardContent {
                    div { class: "dashboard-panels",
                        div { class: "dashboard-panel",
                            h3 { "Quick Actions" }
                            p { "Access frequently used features" }
                        }
                        div { class: "dashboard-panel",
                            h3 { "Recent Activity" }
                            p { "View your recent interactions" }
                        }
                    }
                }
            }
        }
    }
}
