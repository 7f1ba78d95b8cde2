use client::HttpLoginBackend;
use dioxus::prelude::*;

mod portal_theme;
mod session;
mod views;
use session::SessionState;
use views::PortalSessionView;

const PORTAL_CSS: Asset = asset!("/assets/portal.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Dioxus installs the tracing subscriber during launch, so config is
    // loaded here rather than in main to keep its log lines.
    let config = use_hook(|| {
        tracing::info!(platform = client_platform(), "portal client starting");
        client::config::load_client_config()
    });

    use_context_provider(SessionState::new);
    use_context_provider(|| HttpLoginBackend::new(config));

    rsx! {
        document::Title { "Al-Muhsin Quran Academy" }
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        PortalSessionView {}
    }
}
