//! Onboarding for first-time users.
//!
//! A short setup wizard walks new users through theme, text size and audio
//! speed. Finishing or skipping it saves the chosen preferences and sets a
//! completion flag in storage, which decides the page shown at startup.

pub mod steps;

use std::sync::Arc;

use crate::preferences::PreferencesStore;
use crate::storage::{KeyValueStore, PersistenceFailure, WriteOutcome};

pub use steps::SetupStep;

/// Storage key for the completion flag.
pub const ONBOARDING_KEY: &str = "onboarding-completed";

/// Persisted "setup has been completed" marker.
#[derive(Clone)]
pub struct OnboardingFlag {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for OnboardingFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingFlag")
            .field("key", &ONBOARDING_KEY)
            .finish_non_exhaustive()
    }
}

impl OnboardingFlag {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Whether setup has been completed. Any non-empty stored value counts;
    /// an unreadable store counts as not completed.
    pub fn is_completed(&self) -> bool {
        match self.backend.get(ONBOARDING_KEY) {
            Ok(value) => value.is_some_and(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read onboarding flag: {}", e);
                false
            }
        }
    }

    /// Record that setup has been completed.
    pub fn mark_completed(&self) -> WriteOutcome {
        match self.backend.set(ONBOARDING_KEY, "true") {
            Ok(()) => WriteOutcome::Written,
            Err(e) => {
                tracing::error!("Failed to store onboarding flag: {}", e);
                WriteOutcome::Discarded(PersistenceFailure::Write(e))
            }
        }
    }

    /// Forget completion so the wizard shows again.
    pub fn reset(&self) -> WriteOutcome {
        match self.backend.remove(ONBOARDING_KEY) {
            Ok(()) => WriteOutcome::Written,
            Err(e) => {
                tracing::error!("Failed to clear onboarding flag: {}", e);
                WriteOutcome::Discarded(PersistenceFailure::Write(e))
            }
        }
    }
}

/// Top-level pages of the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// First-run setup wizard
    Onboarding,
    /// Profile with a summary of current preferences
    Profile,
    /// Full accessibility settings
    Settings,
}

impl Page {
    /// The page to show when the application starts.
    pub fn at_startup(flag: &OnboardingFlag) -> Page {
        if flag.is_completed() {
            Page::Profile
        } else {
            Page::Onboarding
        }
    }

    /// Whether the shell navigation bar is shown on this page.
    pub fn shows_navigation(&self) -> bool {
        !matches!(self, Page::Onboarding)
    }
}

/// Where the wizard stands after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStatus {
    /// Showing a step
    InProgress(SetupStep),
    /// Finished or skipped
    Completed,
}

/// First-run setup wizard.
#[derive(Debug, Clone)]
pub struct SetupWizard {
    current_step: SetupStep,
    completed: bool,
    skipped: bool,
    flag: OnboardingFlag,
}

impl SetupWizard {
    /// Create a wizard at the welcome step.
    pub fn new(flag: OnboardingFlag) -> Self {
        Self {
            current_step: SetupStep::Welcome,
            completed: false,
            skipped: false,
            flag,
        }
    }

    pub fn current_step(&self) -> SetupStep {
        self.current_step
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn was_skipped(&self) -> bool {
        self.skipped
    }

    pub fn status(&self) -> SetupStatus {
        if self.completed {
            SetupStatus::Completed
        } else {
            SetupStatus::InProgress(self.current_step)
        }
    }

    /// "Step N of M" text.
    pub fn step_indicator(&self) -> String {
        format!(
            "Step {} of {}",
            self.current_step.number(),
            SetupStep::all().len()
        )
    }

    /// Progress through the steps as a percentage, counting the current step.
    pub fn progress_percent(&self) -> u8 {
        let total = SetupStep::all().len();
        ((self.current_step.number() * 100) / total) as u8
    }

    /// Advance to the next step, or finish on the last one.
    pub fn next(&mut self, store: &PreferencesStore) -> SetupStatus {
        if self.completed {
            return SetupStatus::Completed;
        }

        match self.current_step.next() {
            Some(step) => {
                self.current_step = step;
                SetupStatus::InProgress(step)
            }
            None => self.complete(store),
        }
    }

    /// Go back one step. Does nothing on the first step.
    pub fn back(&mut self) -> SetupStatus {
        if !self.completed {
            if let Some(prev) = self.current_step.previous() {
                self.current_step = prev;
            }
        }
        self.status()
    }

    /// Finish immediately, keeping whatever has been chosen so far.
    pub fn skip(&mut self, store: &PreferencesStore) -> SetupStatus {
        if self.completed {
            return SetupStatus::Completed;
        }
        self.skipped = true;
        self.complete(store)
    }

    fn complete(&mut self, store: &PreferencesStore) -> SetupStatus {
        store.save_current_preferences();
        self.flag.mark_completed();
        self.completed = true;

        tracing::info!(
            "Accessibility setup {}",
            if self.skipped { "skipped" } else { "completed" }
        );
        SetupStatus::Completed
    }
}
