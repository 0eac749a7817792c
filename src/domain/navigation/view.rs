//! Top-level view state and its transitions.
//!
//! `Home -> Questionnaire -> Results`, with a reset back to `Home` from
//! either of the others. Results cannot exist without the analysis that
//! produced them.

use serde::Serialize;
use std::fmt;

use crate::domain::analysis::AnalysisResult;

/// Identifies one mount of the questionnaire.
///
/// Completions carry the epoch they were started under so a response that
/// arrives after the questionnaire was torn down can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct MountEpoch(u64);

impl MountEpoch {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for MountEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current screen with its payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum AppState {
    #[default]
    Home,
    Questionnaire { epoch: MountEpoch },
    Results { result: AnalysisResult },
}

impl AppState {
    pub fn screen(&self) -> Screen {
        match self {
            AppState::Home => Screen::Home,
            AppState::Questionnaire { .. } => Screen::Questionnaire,
            AppState::Results { .. } => Screen::Results,
        }
    }

    /// The reset affordance is offered everywhere except home.
    pub fn can_reset(&self) -> bool {
        !matches!(self, AppState::Home)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AppState::Results { result } => Some(result),
            _ => None,
        }
    }
}

/// Payload-free screen kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    Questionnaire,
    Results,
}

/// Inputs to [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Open the questionnaire under a fresh mount epoch.
    Start { epoch: MountEpoch },
    /// The questionnaire mounted under `epoch` finished an analysis.
    AnalysisCompleted {
        epoch: MountEpoch,
        result: AnalysisResult,
    },
    Reset,
}

impl AppEvent {
    fn name(&self) -> &'static str {
        match self {
            AppEvent::Start { .. } => "start",
            AppEvent::AnalysisCompleted { .. } => "analysis_completed",
            AppEvent::Reset => "reset",
        }
    }
}

/// Applies `event` to `state`. Events that are not valid from the current
/// state leave it unchanged.
pub fn reduce(state: AppState, event: AppEvent) -> AppState {
    match (state, event) {
        (AppState::Home, AppEvent::Start { epoch }) => {
            tracing::debug!(%epoch, "Opening questionnaire");
            AppState::Questionnaire { epoch }
        }
        (AppState::Questionnaire { epoch }, AppEvent::AnalysisCompleted { epoch: done, result }) => {
            if epoch == done {
                tracing::debug!(%epoch, "Showing analysis results");
                AppState::Results { result }
            } else {
                tracing::debug!(
                    current = %epoch,
                    completed = %done,
                    "Discarding completion from an earlier questionnaire"
                );
                AppState::Questionnaire { epoch }
            }
        }
        (AppState::Questionnaire { .. } | AppState::Results { .. }, AppEvent::Reset) => {
            tracing::debug!("Returning home");
            AppState::Home
        }
        (state, event) => {
            tracing::debug!(
                screen = ?state.screen(),
                event = event.name(),
                "Ignoring event not valid for current view"
            );
            state
        }
    }
}
