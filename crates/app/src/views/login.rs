use super::BackToPortals;
use crate::portal_theme::portal_theme;
use crate::session::use_session;
use client::{submit_login, HttpLoginBackend};
use dioxus::prelude::*;
use shared_types::{LoginStatus, INVALID_CREDENTIALS_MESSAGE};
use shared_ui::{Button, Card, CardContent, CardHeader, CardIcon, CardSubtitle, CardTitle, Input};

/// Login form for the selected portal.
///
/// Renders nothing if the session carries no resolvable portal.
#[component]
pub fn LoginView() -> Element {
    let mut state = use_session();
    let backend: HttpLoginBackend = use_context();

    let (portal, credentials, status, submitting, can_submit) = {
        let session = state.session.read();
        let Some(portal) = session.descriptor() else {
            return rsx! {};
        };
        (
            portal,
            session.credentials().cloned().unwrap_or_default(),
            session.status(),
            session.is_submitting(),
            session.can_submit(),
        )
    };
    let theme = portal_theme(portal.id);
    let demo_username = portal.demo_username();
    let demo_password = portal.demo_password();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let delay = client::config::client_config().redirect_delay();
        async move {
            submit_login(state, &backend, delay).await;
        }
    };

    rsx! {
        div { class: "login-page",
            BackToPortals {}

            Card { class: "login-card",
                CardHeader {
                    CardIcon { "{theme.icon}" }
                    CardTitle { "{portal.title.en}" }
                    CardSubtitle { "{portal.title.am}" }
                }

                CardContent {
                    form { class: "login-form", onsubmit: handle_login,
                        Input {
                            input_type: "text",
                            id: "username",
                            placeholder: "Username",
                            required: true,
                            value: credentials.username,
                            on_input: move |e: FormEvent| state.set_username(e.value()),
                        }
                        Input {
                            input_type: "password",
                            id: "password",
                            placeholder: "Password",
                            required: true,
                            value: credentials.password,
                            on_input: move |e: FormEvent| state.set_password(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            accent: theme.accent,
                            disabled: !can_submit,
                            if submitting { "Signing In..." } else { "Enter" }
                        }
                    }

                    match status {
                        LoginStatus::Success => rsx! {
                            div { class: "login-banner login-banner-success",
                                "Login successful! Redirecting..."
                            }
                        },
                        LoginStatus::Error => rsx! {
                            div { class: "login-banner login-banner-error",
                                "{INVALID_CREDENTIALS_MESSAGE}"
                            }
                        },
                        LoginStatus::Idle => rsx! {},
                    }

                    div { class: "demo-credentials",
                        p { class: "demo-credentials-title", "Demo Credentials:" }
                        p {
                            "Username: "
                            span { class: "demo-credentials-value", "{demo_username}" }
                        }
                        p {
                            "Password: "
                            span { class: "demo-credentials-value", "{demo_password}" }
                        }
                    }
                }
            }
        }
    }
}
