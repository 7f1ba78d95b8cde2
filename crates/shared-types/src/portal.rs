use serde::{Deserialize, Serialize};
use std::fmt;

/// The three role-based entry points of the school portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortalId {
    Admin,
    Teacher,
    Student,
}

/// All portals in display order.
pub const ALL_PORTALS: &[PortalId] = &[PortalId::Admin, PortalId::Teacher, PortalId::Student];

impl PortalId {
    /// Lowercase key used in the login path (`/api/login/{key}`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PortalId::Admin => "admin",
            PortalId::Teacher => "teacher",
            PortalId::Student => "student",
        }
    }

    /// Parse a portal key. Unknown keys yield `None`; callers treat that as
    /// a navigation no-op.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(PortalId::Admin),
            "teacher" => Some(PortalId::Teacher),
            "student" => Some(PortalId::Student),
            _ => None,
        }
    }

    /// Static descriptor for this portal.
    pub fn descriptor(&self) -> &'static PortalDescriptor {
        match self {
            PortalId::Admin => &PORTALS[0],
            PortalId::Teacher => &PORTALS[1],
            PortalId::Student => &PORTALS[2],
        }
    }
}

impl fmt::Display for PortalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pair of display strings: English and Amharic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub am: &'static str,
}

/// Domain data for a portal entry. Presentation tokens (accent, icon) live
/// with the UI, keyed by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalDescriptor {
    pub id: PortalId,
    pub title: Bilingual,
    pub description: Bilingual,
}

impl PortalDescriptor {
    /// Username shown in the demo credentials hint.
    pub fn demo_username(&self) -> &'static str {
        self.id.as_str()
    }

    /// Password shown in the demo credentials hint (`{id}123`).
    pub fn demo_password(&self) -> String {
        format!("{}123", self.id.as_str())
    }
}

/// The fixed portal catalog, in display order.
pub static PORTALS: [PortalDescriptor; 3] = [
    PortalDescriptor {
        id: PortalId::Admin,
        title: Bilingual {
            en: "Admin Portal",
            am: "የአስተዳደር መግቢያ",
        },
        description: Bilingual {
            en: "Manage the entire system and oversee all operations",
            am: "መላውን ስርዓት ማስተዳደር እና ሁሉንም ተግባራት መቆጣጠር",
        },
    },
    PortalDescriptor {
        id: PortalId::Teacher,
        title: Bilingual {
            en: "Teachers Portal",
            am: "የመምህራን መግቢያ",
        },
        description: Bilingual {
            en: "Access teaching resources and student management",
            am: "የማስተማሪያ ግብዓቶችን እና የተማሪ አስተዳደርን ማግኘት",
        },
    },
    PortalDescriptor {
        id: PortalId::Student,
        title: Bilingual {
            en: "Students Portal",
            am: "የተማሪዎች መግቢያ",
        },
        description: Bilingual {
            en: "Embark on your journey with the Divine Revelation as your guide",
            am: "Allah ገለጣ እንደ መሪ ተጠቅመው ጉዞዎን ጀምሩ",
        },
    },
];

/// Resolve a portal key against the catalog.
pub fn find_portal(key: &str) -> Option<&'static PortalDescriptor> {
    PORTALS.iter().find(|p| p.id.as_str() == key)
}

/// Landing page copy that is not tied to a single portal.
pub mod landing {
    use super::Bilingual;

    pub const ACADEMY_NAME: Bilingual = Bilingual {
        en: "Al-Muhsin Quran Academy",
        am: "ኣል-ሙሕሲን የቁርኣን ኣካዳሚ",
    };

    pub const INSTRUCTION: Bilingual = Bilingual {
        en: "Choose your portal to access the learning system",
        am: "የትምህርት ስርዓቱን ለመጠቀም የእርስዎን መግቢያ ይምረጡ",
    };

    pub const FOOTER_VERSE: &str = "\"وَلَقَدْ يَسَّرْنَا الْقُرْآنَ لِلذِّكْرِ فَهَلْ مِن مُّدَّكِرٍ\"";

    pub const FOOTER_VERSE_AM: &str = "\"ቁርኣንን ለመዘከር አስቀል አድርገነዋል፤ ከሚዘከር ማንኛውም ሰው አለን?\"";

    pub const COPYRIGHT: &str = "© 1445H Al-Muhsin Quran Academy. All rights reserved.";
}
