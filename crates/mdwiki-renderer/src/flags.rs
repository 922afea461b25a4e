//! Optional renderer behavior.

use std::ops::{BitOr, BitOrAssign};

use mdwiki_config::RenderConfig;

/// Set of optional renderer behaviors, combined with `|`.
///
/// The empty set renders every code block as a `{code}` block and escapes
/// every significant character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderFlags(u8);

impl RenderFlags {
    /// No optional behavior.
    pub const NONE: Self = Self(0);

    /// Render fenced blocks tagged `info`, `tip`, `note` or `warning` as the
    /// matching wiki macro instead of a code block.
    pub const INFORMATION_MACROS: Self = Self(1);

    /// Do not escape `{`, so wiki macros written in the markdown source pass
    /// through untouched.
    pub const IGNORE_MACRO_ESCAPING: Self = Self(1 << 1);

    /// Whether every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for RenderFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RenderFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<&RenderConfig> for RenderFlags {
    fn from(config: &RenderConfig) -> Self {
        let mut flags = Self::NONE;
        if config.information_macros {
            flags |= Self::INFORMATION_MACROS;
        }
        if config.ignore_macro_escaping {
            flags |= Self::IGNORE_MACRO_ESCAPING;
        }
        flags
    }
}

/// Wiki callout macros that fenced code blocks can map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InformationMacro {
    Info,
    Tip,
    Note,
    Warning,
}

impl InformationMacro {
    /// Match a fence language against the macro names.
    #[must_use]
    pub fn from_language(language: &str) -> Option<Self> {
        match language {
            "info" => Some(Self::Info),
            "tip" => Some(Self::Tip),
            "note" => Some(Self::Note),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Macro name as written inside `{}`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Tip => "tip",
            Self::Note => "note",
            Self::Warning => "warning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_combine() {
        let flags = RenderFlags::INFORMATION_MACROS | RenderFlags::IGNORE_MACRO_ESCAPING;
        assert!(flags.contains(RenderFlags::INFORMATION_MACROS));
        assert!(flags.contains(RenderFlags::IGNORE_MACRO_ESCAPING));
        assert!(!RenderFlags::INFORMATION_MACROS.contains(RenderFlags::IGNORE_MACRO_ESCAPING));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(RenderFlags::default().is_empty());
        assert_eq!(RenderFlags::default(), RenderFlags::NONE);
        assert!(RenderFlags::NONE.contains(RenderFlags::NONE));
    }

    #[test]
    fn test_flags_from_config() {
        let flags = RenderFlags::from(&RenderConfig::default());
        assert_eq!(flags, RenderFlags::INFORMATION_MACROS);

        let config = RenderConfig {
            information_macros: false,
            ignore_macro_escaping: true,
        };
        assert_eq!(RenderFlags::from(&config), RenderFlags::IGNORE_MACRO_ESCAPING);
    }

    #[test]
    fn test_information_macro_names() {
        for name in ["info", "tip", "note", "warning"] {
            let kind = InformationMacro::from_language(name).unwrap();
            assert_eq!(kind.name(), name);
        }
        assert_eq!(InformationMacro::from_language("Info"), None);
        assert_eq!(InformationMacro::from_language("rust"), None);
    }
}
