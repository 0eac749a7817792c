//! ViewRouter - owns the top-level view state and the controller mounted
//! for it.
//!
//! Exactly one screen is active. Home mounts a pattern overview,
//! the questionnaire mounts a [`QuestionnaireController`] under a fresh
//! epoch, and results mount a [`ResultPresenter`] over the completed
//! analysis. Leaving a screen drops its controller.

use std::sync::Arc;

use crate::application::pattern_overview::PatternOverviewController;
use crate::application::questionnaire::{
    Completion, PendingSubmission, QuestionnaireController, SubmitError,
};
use crate::application::stores::{HistoryStore, ProfileStore};
use crate::domain::analysis::{AnalysisResult, ResultPresenter};
use crate::domain::navigation::{reduce, AppEvent, AppState, MountEpoch, Screen};
use crate::ports::{AnalysisError, AnalysisService, KeyValueStore, PatternStatsProvider};

/// Ports the workflow runs against.
#[derive(Clone)]
pub struct AppContext {
    pub analysis: Arc<dyn AnalysisService>,
    pub stats: Arc<dyn PatternStatsProvider>,
    pub store: Arc<dyn KeyValueStore>,
}

impl AppContext {
    pub fn new(
        analysis: Arc<dyn AnalysisService>,
        stats: Arc<dyn PatternStatsProvider>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            analysis,
            stats,
            store,
        }
    }

    pub fn profiles(&self) -> ProfileStore {
        ProfileStore::new(self.store.clone())
    }

    pub fn history(&self) -> HistoryStore {
        HistoryStore::new(self.store.clone())
    }
}

/// Controller for whichever screen is active.
enum Mounted {
    Home(PatternOverviewController),
    Questionnaire(QuestionnaireController),
    Results(ResultPresenter),
}

pub struct ViewRouter {
    context: AppContext,
    state: AppState,
    last_epoch: MountEpoch,
    mounted: Mounted,
}

impl ViewRouter {
    /// Starts at home with a fresh pattern overview.
    pub fn new(context: AppContext) -> Self {
        let overview = PatternOverviewController::mount(context.stats.clone());
        Self {
            context,
            state: AppState::Home,
            last_epoch: MountEpoch::default(),
            mounted: Mounted::Home(overview),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn overview_mut(&mut self) -> Option<&mut PatternOverviewController> {
        match &mut self.mounted {
            Mounted::Home(overview) => Some(overview),
            _ => None,
        }
    }

    pub fn questionnaire(&self) -> Option<&QuestionnaireController> {
        match &self.mounted {
            Mounted::Questionnaire(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn questionnaire_mut(&mut self) -> Option<&mut QuestionnaireController> {
        match &mut self.mounted {
            Mounted::Questionnaire(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn presenter(&self) -> Option<&ResultPresenter> {
        match &self.mounted {
            Mounted::Results(presenter) => Some(presenter),
            _ => None,
        }
    }

    pub fn presenter_mut(&mut self) -> Option<&mut ResultPresenter> {
        match &mut self.mounted {
            Mounted::Results(presenter) => Some(presenter),
            _ => None,
        }
    }

    /// Home to questionnaire. Ignored from any other screen.
    pub async fn start(&mut self) {
        let epoch = self.last_epoch.next();
        self.dispatch(AppEvent::Start { epoch }).await;
    }

    /// Back to home from questionnaire or results.
    pub async fn reset(&mut self) {
        self.dispatch(AppEvent::Reset).await;
    }

    /// Delivers a questionnaire completion. Stale epochs are discarded.
    pub async fn complete(&mut self, completion: Completion) {
        self.dispatch(completion.into()).await;
    }

    /// Submits the mounted questionnaire and, on success, moves to results.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let Some(pending) = self.begin_submit()? else {
            return Ok(());
        };
        let outcome = self.context.analysis.analyze(&pending.request).await;
        self.finish_submit(pending, outcome).await
    }

    /// First half of [`submit`](Self::submit): validates the form and puts
    /// the questionnaire into its loading state. `None` outside the
    /// questionnaire.
    pub fn begin_submit(&mut self) -> Result<Option<PendingSubmission>, SubmitError> {
        match self.questionnaire_mut() {
            Some(controller) => controller.begin_submit().map(Some),
            None => {
                tracing::debug!("Submit ignored outside the questionnaire");
                Ok(None)
            }
        }
    }

    /// Second half of [`submit`](Self::submit): settles the pending
    /// submission and moves to results on success.
    pub async fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> Result<(), SubmitError> {
        let Some(controller) = self.questionnaire_mut() else {
            tracing::debug!(epoch = %pending.epoch, "Questionnaire gone, dropping analysis");
            return Ok(());
        };
        let completion = controller.finish_submit(pending, outcome).await?;
        self.complete(completion).await;
        Ok(())
    }

    async fn dispatch(&mut self, event: AppEvent) {
        let before = self.state.screen();
        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, event);

        if let AppState::Questionnaire { epoch } = self.state {
            self.last_epoch = self.last_epoch.max(epoch);
        }
        if self.state.screen() != before {
            self.remount().await;
        }
    }

    async fn remount(&mut self) {
        self.mounted = match &self.state {
            AppState::Home => Mounted::Home(PatternOverviewController::mount(
                self.context.stats.clone(),
            )),
            AppState::Questionnaire { epoch } => Mounted::Questionnaire(
                QuestionnaireController::mount(
                    *epoch,
                    self.context.analysis.clone(),
                    self.context.profiles(),
                    self.context.history(),
                )
                .await,
            ),
            AppState::Results { result } => Mounted::Results(ResultPresenter::new(result.clone())),
        };
    }
}
