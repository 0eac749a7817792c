//! QuestionnaireController - collects a decision and submits it for
//! analysis.
//!
//! One controller lives for one mount of the questionnaire screen. On mount
//! it seeds the form from the stored profile. A successful submission
//! overwrites the profile, records the decision in history, and only then
//! hands the result back as a [`Completion`].

use std::sync::Arc;

use crate::application::stores::{HistoryStore, ProfileStore};
use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::{goal_suggestion, DecisionRequest, FormField, QuestionnaireForm};
use crate::domain::foundation::ValidationError;
use crate::domain::navigation::{AppEvent, MountEpoch};
use crate::domain::user::{DecisionHistoryEntry, UserProfile};
use crate::ports::{AnalysisError, AnalysisService};

/// Why a submission did not complete.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("invalid form: {0}")]
    Invalid(#[from] ValidationError),

    #[error("a submission is already in flight")]
    AlreadyInFlight,

    /// The analysis failed; `message` is what the form shows.
    #[error("{message}")]
    Analysis { message: String },
}

/// A submission accepted by [`QuestionnaireController::begin_submit`] and
/// not yet finished.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub epoch: MountEpoch,
    pub request: DecisionRequest,
}

/// A finished analysis, tagged with the mount it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub epoch: MountEpoch,
    pub result: AnalysisResult,
}

impl From<Completion> for AppEvent {
    fn from(completion: Completion) -> Self {
        AppEvent::AnalysisCompleted {
            epoch: completion.epoch,
            result: completion.result,
        }
    }
}

pub struct QuestionnaireController {
    epoch: MountEpoch,
    form: QuestionnaireForm,
    loading: bool,
    error: Option<String>,
    analysis: Arc<dyn AnalysisService>,
    profiles: ProfileStore,
    history: HistoryStore,
}

impl QuestionnaireController {
    /// Mounts a fresh questionnaire and merges the stored profile into it.
    pub async fn mount(
        epoch: MountEpoch,
        analysis: Arc<dyn AnalysisService>,
        profiles: ProfileStore,
        history: HistoryStore,
    ) -> Self {
        let mut form = QuestionnaireForm::new();
        if let Some(profile) = profiles.load().await {
            tracing::debug!(%epoch, "Prefilling questionnaire from stored profile");
            form.merge_profile(&profile);
        }

        Self {
            epoch,
            form,
            loading: false,
            error: None,
            analysis,
            profiles,
            history,
        }
    }

    pub fn epoch(&self) -> MountEpoch {
        self.epoch
    }

    pub fn form(&self) -> &QuestionnaireForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), ValidationError> {
        self.form.set(field, value)
    }

    /// Appends the canned goal at `index`. Returns false for unknown indices.
    pub fn append_goal(&mut self, index: usize) -> bool {
        match goal_suggestion(index) {
            Some(goal) => {
                self.form.append_goal(goal);
                true
            }
            None => false,
        }
    }

    /// Validates the form and marks the controller loading.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.loading {
            return Err(SubmitError::AlreadyInFlight);
        }
        let request = self.form.to_request()?;

        self.loading = true;
        self.error = None;
        Ok(PendingSubmission {
            epoch: self.epoch,
            request,
        })
    }

    /// Settles a pending submission with the service's answer.
    ///
    /// On success the profile and history are written before the completion
    /// is returned; write failures are logged and do not block the result.
    /// On failure the form stays as it was and nothing is written.
    pub async fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> Result<Completion, SubmitError> {
        self.loading = false;

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                let message = e.user_message();
                tracing::warn!(error = %e, "Analysis failed");
                self.error = Some(message.clone());
                return Err(SubmitError::Analysis { message });
            }
        };

        self.persist(&pending.request, &result).await;

        Ok(Completion {
            epoch: pending.epoch,
            result,
        })
    }

    /// Runs a whole submission: validate, analyze, persist.
    pub async fn submit(&mut self) -> Result<Completion, SubmitError> {
        let pending = self.begin_submit()?;
        let outcome = self.analysis.analyze(&pending.request).await;
        self.finish_submit(pending, outcome).await
    }

    async fn persist(&self, request: &DecisionRequest, result: &AnalysisResult) {
        let profile = UserProfile::new(self.form.age.clone(), self.form.goals.clone());
        if let Err(e) = self.profiles.save(&profile).await {
            tracing::warn!(error = %e, "Failed to store profile");
        }

        let entry = DecisionHistoryEntry::record(
            request.category,
            request.decision_description.clone(),
            result.clone(),
        );
        let id = entry.id;
        match self.history.record(entry).await {
            Ok(history) => {
                tracing::info!(%id, entries = history.len(), "Recorded decision in history")
            }
            Err(e) => tracing::warn!(error = %e, "Failed to store decision history"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockAnalysisService;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::decision::{DecisionCategory, DecisionTimeline, GOAL_SUGGESTIONS};
    use crate::ports::GENERIC_ANALYSIS_ERROR;

    struct Harness {
        backing: InMemoryKeyValueStore,
        profiles: ProfileStore,
        history: HistoryStore,
    }

    impl Harness {
        fn new() -> Self {
            let backing = InMemoryKeyValueStore::new();
            let store: Arc<InMemoryKeyValueStore> = Arc::new(backing.clone());
            Self {
                backing,
                profiles: ProfileStore::new(store.clone()),
                history: HistoryStore::new(store),
            }
        }

        async fn mount(&self, service: MockAnalysisService) -> QuestionnaireController {
            QuestionnaireController::mount(
                MountEpoch::new(1),
                Arc::new(service),
                self.profiles.clone(),
                self.history.clone(),
            )
            .await
        }
    }

    fn fill(controller: &mut QuestionnaireController) {
        let values = [
            (FormField::Age, "34"),
            (FormField::Situation, "Ten years at the same firm"),
            (FormField::DecisionDescription, "Go back to school"),
            (FormField::Option1, "Enroll"),
            (FormField::Option2, "Stay"),
            (FormField::Goals, "Career growth"),
            (FormField::Category, "education"),
        ];
        for (field, value) in values {
            controller.set_field(field, value).unwrap();
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            patterns_analyzed: Some(9),
            options_analysis: Some(vec![]),
            ..AnalysisResult::default()
        }
    }

    #[tokio::test]
    async fn mount_uses_defaults_without_profile() {
        let harness = Harness::new();
        let controller = harness.mount(MockAnalysisService::new()).await;

        assert_eq!(controller.form().timeline, DecisionTimeline::OneToThreeMonths);
        assert_eq!(controller.form().category, DecisionCategory::Lifestyle);
        assert!(controller.form().age.is_empty());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn mount_prefills_from_profile() {
        let harness = Harness::new();
        harness
            .profiles
            .save(&UserProfile::new("52", "Family and relationships"))
            .await
            .unwrap();

        let controller = harness.mount(MockAnalysisService::new()).await;

        assert_eq!(controller.form().age, "52");
        assert_eq!(controller.form().goals, "Family and relationships");
        assert!(controller.form().situation.is_empty());
    }

    #[tokio::test]
    async fn successful_submit_persists_then_completes() {
        let harness = Harness::new();
        let service = MockAnalysisService::new().with_result(sample_result());
        let mut controller = harness.mount(service.clone()).await;
        fill(&mut controller);

        let completion = controller.submit().await.unwrap();

        assert_eq!(completion.epoch, MountEpoch::new(1));
        assert_eq!(completion.result, sample_result());
        assert_eq!(service.call_count(), 1);
        assert_eq!(service.get_calls()[0].options, vec!["Enroll", "Stay"]);

        assert_eq!(
            harness.profiles.load().await,
            Some(UserProfile::new("34", "Career growth"))
        );
        let history = harness.history.load().await;
        let latest = history.latest().unwrap();
        assert_eq!(latest.decision, "Go back to school");
        assert_eq!(latest.category, DecisionCategory::Education);
        assert_eq!(latest.result, sample_result());
    }

    #[tokio::test]
    async fn failed_submit_keeps_form_and_skips_persistence() {
        let harness = Harness::new();
        let service = MockAnalysisService::new().with_error(AnalysisError::rejected(500, None));
        let mut controller = harness.mount(service).await;
        fill(&mut controller);
        let before = controller.form().clone();

        let err = controller.submit().await.unwrap_err();

        assert_eq!(
            err,
            SubmitError::Analysis {
                message: GENERIC_ANALYSIS_ERROR.to_string()
            }
        );
        assert_eq!(controller.error(), Some(GENERIC_ANALYSIS_ERROR));
        assert_eq!(controller.form(), &before);
        assert!(!controller.is_loading());
        assert!(harness.backing.is_empty().await);
    }

    #[tokio::test]
    async fn server_message_is_shown() {
        let harness = Harness::new();
        let service = MockAnalysisService::new().with_error(AnalysisError::rejected(
            503,
            Some("Pattern matcher not initialized".to_string()),
        ));
        let mut controller = harness.mount(service).await;
        fill(&mut controller);

        controller.submit().await.unwrap_err();

        assert_eq!(controller.error(), Some("Pattern matcher not initialized"));
    }

    #[tokio::test]
    async fn error_clears_on_next_attempt() {
        let harness = Harness::new();
        let service = MockAnalysisService::new()
            .with_error(AnalysisError::network("down"))
            .with_result(sample_result());
        let mut controller = harness.mount(service).await;
        fill(&mut controller);

        controller.submit().await.unwrap_err();
        assert!(controller.error().is_some());

        controller.submit().await.unwrap();
        assert!(controller.error().is_none());
    }

    #[tokio::test]
    async fn second_submit_while_loading_is_rejected() {
        let harness = Harness::new();
        let mut controller = harness.mount(MockAnalysisService::new()).await;
        fill(&mut controller);

        let pending = controller.begin_submit().unwrap();
        assert!(controller.is_loading());
        assert_eq!(
            controller.begin_submit().unwrap_err(),
            SubmitError::AlreadyInFlight
        );

        controller
            .finish_submit(pending, Ok(sample_result()))
            .await
            .unwrap();
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn invalid_form_issues_no_request() {
        let harness = Harness::new();
        let service = MockAnalysisService::new();
        let mut controller = harness.mount(service.clone()).await;

        let err = controller.submit().await.unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(service.call_count(), 0);
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn storage_failure_does_not_block_result() {
        let harness = Harness::new();
        harness.backing.fail_writes(true);
        let mut controller = harness
            .mount(MockAnalysisService::new().with_result(sample_result()))
            .await;
        fill(&mut controller);

        let completion = controller.submit().await.unwrap();

        assert_eq!(completion.result, sample_result());
        assert!(harness.backing.is_empty().await);
    }

    #[tokio::test]
    async fn append_goal_by_index() {
        let harness = Harness::new();
        let mut controller = harness.mount(MockAnalysisService::new()).await;

        assert!(controller.append_goal(0));
        assert!(controller.append_goal(1));
        assert!(!controller.append_goal(GOAL_SUGGESTIONS.len()));

        assert_eq!(
            controller.form().goals,
            format!("{}, {}", GOAL_SUGGESTIONS[0], GOAL_SUGGESTIONS[1])
        );
    }

    #[tokio::test]
    async fn completion_converts_to_router_event() {
        let completion = Completion {
            epoch: MountEpoch::new(4),
            result: sample_result(),
        };
        assert_eq!(
            AppEvent::from(completion),
            AppEvent::AnalysisCompleted {
                epoch: MountEpoch::new(4),
                result: sample_result()
            }
        );
    }
}
