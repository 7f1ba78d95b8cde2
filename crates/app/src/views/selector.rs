use crate::portal_theme::{portal_theme, ACADEMY_ICON};
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{landing, PortalDescriptor, PORTALS};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardIcon,
    CardSubtitle, CardTitle,
};

/// Landing page: academy header, one card per portal, footer verse.
#[component]
pub fn PortalSelector() -> Element {
    let name = landing::ACADEMY_NAME;
    let instruction = landing::INSTRUCTION;

    rsx! {
        div { class: "portal-page",
            header { class: "landing-header",
                div { class: "landing-emblem", "{ACADEMY_ICON}" }
                h1 { class: "landing-title", "{name.en}" }
                h2 { class: "landing-title-am", "{name.am}" }
                p { class: "landing-instruction", "{instruction.en}" }
                p { class: "landing-instruction-am", "{instruction.am}" }
            }

            div { class: "portal-grid",
                for portal in PORTALS.iter() {
                    PortalCard { key: "{portal.id}", portal: *portal }
                }
            }

            footer { class: "landing-footer",
                p { class: "landing-verse", {landing::FOOTER_VERSE} }
                p { class: "landing-verse-am", {landing::FOOTER_VERSE_AM} }
                p { class: "landing-copyright", {landing::COPYRIGHT} }
            }
        }
    }
}

#[component]
fn PortalCard(portal: PortalDescriptor) -> Element {
    let mut state = use_session();
    let theme = portal_theme(portal.id);
    let id = portal.id;

    rsx! {
        div {
            class: "portal-card",
            onclick: move |_| state.select(id),
            Card { accent: theme.accent,
                CardHeader {
                    CardIcon { "{theme.icon}" }
                    CardTitle { "{portal.title.en}" }
                    CardSubtitle { "{portal.title.am}" }
                }
                CardContent {
                    CardDescription { "{portal.description.en}" }
                    CardDescription { class: "card-description-am", "{portal.description.am}" }
                    Button { variant: ButtonVariant::Glass, "Enter Portal" }
                }
            }
        }
    }
}
