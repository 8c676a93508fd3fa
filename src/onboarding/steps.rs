//! Setup wizard steps.

/// Steps in the first-run setup wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SetupStep {
    /// Welcome screen with overview
    #[default]
    Welcome,
    /// Theme selection
    Theme,
    /// Text size selection
    FontSize,
    /// Audio playback speed selection
    AudioSpeed,
}

impl SetupStep {
    /// Get all steps in order.
    pub fn all() -> &'static [SetupStep] {
        &[
            SetupStep::Welcome,
            SetupStep::Theme,
            SetupStep::FontSize,
            SetupStep::AudioSpeed,
        ]
    }

    /// Get the step index (0-based).
    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    /// 1-based position for display.
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    /// Get the next step, if any.
    pub fn next(&self) -> Option<SetupStep> {
        Self::all().get(self.index() + 1).copied()
    }

    /// Get the previous step, if any.
    pub fn previous(&self) -> Option<SetupStep> {
        self.index().checked_sub(1).map(|idx| Self::all()[idx])
    }

    /// Get the title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            SetupStep::Welcome => "Welcome to Accessibility Setup",
            SetupStep::Theme => "Choose Your Theme",
            SetupStep::FontSize => "Text Size",
            SetupStep::AudioSpeed => "Audio Playback Speed",
        }
    }

    /// Get the description for this step.
    pub fn description(&self) -> &'static str {
        match self {
            SetupStep::Welcome => {
                "Let's personalize your experience with a few accessibility preferences."
            }
            SetupStep::Theme => "Pick the theme that works best for your visual needs.",
            SetupStep::FontSize => "Adjust text size for better readability.",
            SetupStep::AudioSpeed => "Set your preferred speed for audio content.",
        }
    }

    pub fn is_first(&self) -> bool {
        *self == SetupStep::Welcome
    }

    pub fn is_last(&self) -> bool {
        *self == SetupStep::AudioSpeed
    }
}

impl std::fmt::Display for SetupStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
