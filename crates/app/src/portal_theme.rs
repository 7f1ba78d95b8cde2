use shared_types::PortalId;
use shared_ui::Accent;

/// Presentation tokens for a portal. Kept apart from the domain descriptor
/// so the session state machine never depends on rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalTheme {
    pub accent: Accent,
    pub icon: &'static str,
}

pub fn portal_theme(portal: PortalId) -> PortalTheme {
    match portal {
        PortalId::Admin => PortalTheme {
            accent: Accent::Blue,
            icon: "👨‍💼",
        },
        PortalId::Teacher => PortalTheme {
            accent: Accent::Green,
            icon: "👨‍🏫",
        },
        PortalId::Student => PortalTheme {
            accent: Accent::Teal,
            icon: "👨‍🎓",
        },
    }
}

/// Emblem shown above the academy name.
pub const ACADEMY_ICON: &str = "🕌";
