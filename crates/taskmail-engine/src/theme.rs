use taskmail_types::{Role, Source};

/// Accent colours for the header bar and status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: &'static str,
    pub accent_light: &'static str,
    pub accent_dark: &'static str,
}

impl Theme {
    pub fn for_source(source: Source) -> Self {
        match source {
            Source::ClaudeCode => Self {
                accent: "#D97706",
                accent_light: "#FEF3C7",
                accent_dark: "#92400E",
            },
            Source::Codex => Self {
                accent: "#059669",
                accent_light: "#D1FAE5",
                accent_dark: "#065F46",
            },
            Source::Unknown => Self {
                accent: "#2563EB",
                accent_light: "#DBEAFE",
                accent_dark: "#1E40AF",
            },
        }
    }
}

/// Visual treatment of one conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleStyle {
    pub label: &'static str,
    pub class: &'static str,
    pub color: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

impl RoleStyle {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::User => Self {
                label: "USER",
                class: "turn turn-user",
                color: "#4F46E5",
                background: "#EEF2FF",
                border: "#6366F1",
            },
            Role::Assistant => Self {
                label: "AI ASSISTANT",
                class: "turn turn-assistant",
                color: "#047857",
                background: "#F0FDF4",
                border: "#10B981",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_source_has_distinct_accent() {
        let claude = Theme::for_source(Source::ClaudeCode);
        let codex = Theme::for_source(Source::Codex);
        let unknown = Theme::for_source(Source::Unknown);
        assert_ne!(claude.accent, codex.accent);
        assert_ne!(codex.accent, unknown.accent);
        assert_ne!(claude.accent, unknown.accent);
    }

    #[test]
    fn test_roles_are_visually_distinct() {
        let user = RoleStyle::for_role(Role::User);
        let assistant = RoleStyle::for_role(Role::Assistant);
        assert_ne!(user.class, assistant.class);
        assert_ne!(user.background, assistant.background);
    }
}
