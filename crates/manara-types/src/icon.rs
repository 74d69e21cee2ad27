//! Closed icon identifier registry.
//!
//! Icon fields in persisted content are strings like `"GraduationCap"`.
//! Rather than resolving those reflectively at render time, the recognized
//! set is a closed enum validated when a block is parsed; an unknown icon
//! name fails the parse with the offending name in the error.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// A recognized icon identifier.
///
/// The wire form is the PascalCase variant name, matching the names stored
/// by the dashboard's icon picker.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default, EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Icon {
    // Academic
    GraduationCap,
    BookOpen,
    Library,
    School,
    Pencil,
    Calculator,
    Microscope,
    FlaskConical,
    Globe,
    Languages,
    Music,
    Palette,
    Trophy,
    Medal,
    #[default]
    Star,
    Award,
    // People
    User,
    Users,
    UserCheck,
    Baby,
    Accessibility,
    // Transport & time
    Bus,
    Clock,
    Calendar,
    MapPin,
    // Communication
    Phone,
    Mail,
    Bell,
    Megaphone,
    Info,
    HelpCircle,
    CheckCircle,
    AlertCircle,
    // Files & media
    FileText,
    Download,
    Search,
    Play,
    Video,
    Image,
    Heart,
    Shield,
    Briefcase,
    Wrench,
    Sparkles,
}

impl Icon {
    /// Parse from the stored string form (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// The canonical wire name.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
