use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::failure::{classify_failure, FailureKind};
use crate::gemini::{placeholder_image, GeminiError, ImageGenerator};
use crate::models::{GenerationResult, ImageRef, InputSet, ProductParameters, StoredImageInfo, View};
use crate::prompt::build_prompt;
use crate::validation::{validate, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// The thirteen steps of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InputValidation,
    PromptConstruction,
    ModelSynthesis,
    Texturing,
    ComponentMasking,
    LogoApplication,
    SceneComposition,
    LightingSimulation,
    ImageGeneration,
    DetailEnhancement,
    QualityScan,
    ReceivingOutput,
    Finalizing,
}

impl Phase {
    pub const ALL: [Phase; 13] = [
        Phase::InputValidation,
        Phase::PromptConstruction,
        Phase::ModelSynthesis,
        Phase::Texturing,
        Phase::ComponentMasking,
        Phase::LogoApplication,
        Phase::SceneComposition,
        Phase::LightingSimulation,
        Phase::ImageGeneration,
        Phase::DetailEnhancement,
        Phase::QualityScan,
        Phase::ReceivingOutput,
        Phase::Finalizing,
    ];

    pub fn id(self) -> u8 {
        self as u8 + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Phase::InputValidation => "Input Validation",
            Phase::PromptConstruction => "Prompt Construction",
            Phase::ModelSynthesis => "System 1: 3D Model Synthesis",
            Phase::Texturing => "System 2: UV Mapping & Texturing",
            Phase::ComponentMasking => "System 3: Component Masking",
            Phase::LogoApplication => "System 4: Logo Application",
            Phase::SceneComposition => "System 5: Scene Composition",
            Phase::LightingSimulation => "System 6: Lighting Simulation",
            Phase::ImageGeneration => "System 7: AI Image Generation",
            Phase::DetailEnhancement => "System 8: AI Detail Enhancement",
            Phase::QualityScan => "System 9: Quality Assurance Scan",
            Phase::ReceivingOutput => "Receiving Output",
            Phase::Finalizing => "Finalizing",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Phase::InputValidation => "Checking for all required images and text.",
            Phase::PromptConstruction => "Building the detailed prompt for the AI model.",
            Phase::ModelSynthesis => "Constructing a 3D model from product dimensions.",
            Phase::Texturing => "Applying leather pattern and material properties.",
            Phase::ComponentMasking => "Applying masks for camera, buttons, and ports.",
            Phase::LogoApplication => "Applying the logo with the specified finish.",
            Phase::SceneComposition => "Placing product model into the virtual environment.",
            Phase::LightingSimulation => "Simulating light sources and calculating reflections.",
            Phase::ImageGeneration => "Generating the core image with the AI model.",
            Phase::DetailEnhancement => "Using AI to refine fine details and textures.",
            Phase::QualityScan => "Automatically scanning for common AI artifacts.",
            Phase::ReceivingOutput => "Processing the generated image from the AI.",
            Phase::Finalizing => "Preparing the final image for display.",
        }
    }

    /// Progress label shown while the phase runs.
    pub fn label(self, view: View) -> String {
        match self {
            Phase::InputValidation => "Validating inputs...".into(),
            Phase::PromptConstruction => "Constructing AI prompt...".into(),
            Phase::ModelSynthesis => "System 1: Synthesizing 3D model...".into(),
            Phase::Texturing => "System 2: Applying textures...".into(),
            Phase::ComponentMasking => "System 3: Applying component masks...".into(),
            Phase::LogoApplication => "System 4: Detailing logo...".into(),
            Phase::SceneComposition => "System 5: Composing scene...".into(),
            Phase::LightingSimulation => "System 6: Simulating lighting...".into(),
            Phase::ImageGeneration => format!("System 7: Generating {view} view..."),
            Phase::DetailEnhancement => "System 8: Enhancing details...".into(),
            Phase::QualityScan => "System 9: Performing QA scan...".into(),
            Phase::ReceivingOutput => "Processing AI output...".into(),
            Phase::Finalizing => "Finalizing image...".into(),
        }
    }

    /// Pacing delay in milliseconds. Image generation paces only in demo mode.
    fn delay_ms(self) -> u64 {
        match self {
            Phase::InputValidation | Phase::PromptConstruction => 300,
            Phase::ModelSynthesis => 800,
            Phase::Texturing => 1000,
            Phase::ComponentMasking => 600,
            Phase::LogoApplication => 800,
            Phase::SceneComposition => 700,
            Phase::LightingSimulation => 1200,
            Phase::ImageGeneration => DEMO_DELAY_MS,
            Phase::DetailEnhancement => 900,
            Phase::QualityScan => 500,
            Phase::ReceivingOutput | Phase::Finalizing => 300,
        }
    }
}

const DEMO_DELAY_MS: u64 = 1500;
const COMPLETED_LABEL: &str = "Process completed successfully!";
const FAILED_LABEL: &str = "Generation failed.";
const VALIDATION_FAILED_LABEL: &str = "Validation failed.";

#[derive(Debug, Clone, Serialize)]
pub struct PhaseState {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub status: PhaseStatus,
}

/// Ordered phase statuses plus the latest progress label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTracker {
    pub phases: Vec<PhaseState>,
    pub current_log: String,
}

impl Default for WorkflowTracker {
    fn default() -> Self {
        Self {
            phases: Phase::ALL
                .into_iter()
                .map(|p| PhaseState {
                    id: p.id(),
                    title: p.title(),
                    description: p.description(),
                    status: PhaseStatus::Pending,
                })
                .collect(),
            current_log: String::new(),
        }
    }
}

impl WorkflowTracker {
    fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn status(&self, phase: Phase) -> PhaseStatus {
        self.phases[phase as usize].status
    }

    fn running(&self) -> Option<Phase> {
        Phase::ALL
            .into_iter()
            .find(|p| self.status(*p) == PhaseStatus::Running)
    }

    /// Moves a phase forward. Backward or skipped transitions are ignored.
    fn transition(&mut self, phase: Phase, to: PhaseStatus, log: Option<String>) {
        let state = &mut self.phases[phase as usize];
        let allowed = matches!(
            (state.status, to),
            (PhaseStatus::Pending, PhaseStatus::Running)
                | (PhaseStatus::Pending, PhaseStatus::Failed)
                | (PhaseStatus::Running, PhaseStatus::Completed)
                | (PhaseStatus::Running, PhaseStatus::Failed)
        );
        if !allowed {
            warn!(phase = phase.id(), from = ?state.status, to = ?to, "ignoring invalid phase transition");
            return;
        }
        state.status = to;
        if let Some(log) = log {
            info!(phase = phase.id(), title = phase.title(), status = ?to, "{}", log);
            self.current_log = log;
        } else {
            info!(phase = phase.id(), title = phase.title(), status = ?to, "phase updated");
        }
    }
}

/// Demo mode switch. Set by the orchestrator on quota failures, cleared by the operator.
#[derive(Debug, Default)]
pub struct FallbackMode(AtomicBool);

impl FallbackMode {
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn engage(&self) {
        if !self.0.swap(true, Ordering::SeqCst) {
            warn!("demo mode engaged, runs will use placeholder images");
        }
    }

    pub fn clear(&self) {
        if self.0.swap(false, Ordering::SeqCst) {
            info!("demo mode cleared, runs will call the real API");
        }
    }
}

/// Scales every pacing delay. Zero disables pacing.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    scale: f64,
}

impl Pacing {
    pub fn new(scale: f64) -> Self {
        Self { scale: scale.max(0.0) }
    }

    pub fn none() -> Self {
        Self { scale: 0.0 }
    }

    /// Scaled delay for a nominal `ms`. Saturates instead of overflowing.
    fn delay(&self, ms: u64) -> Duration {
        if ms == 0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(ms as f64 * self.scale / 1000.0).unwrap_or(Duration::MAX)
    }

    async fn wait(&self, ms: u64) {
        let scaled = self.delay(ms);
        if !scaled.is_zero() {
            tokio::time::sleep(scaled).await;
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("a generation run is already in progress")]
    Busy,
    #[error("image quota exhausted, switched to demo mode")]
    QuotaExceeded,
    #[error("Generation failed: {0}")]
    Generation(String),
}

impl RunError {
    /// Text shown to the user, if any. Quota failures stay silent.
    pub fn user_notice(&self) -> Option<String> {
        match self {
            RunError::Generation(message) => Some(format!("Generation failed: {message}")),
            RunError::Busy => Some(self.to_string()),
            RunError::Validation(_) | RunError::QuotaExceeded => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub view: View,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSnapshot {
    #[serde(flatten)]
    pub tracker: WorkflowTracker,
    pub is_generating: bool,
    pub demo_mode: bool,
}

/// Drives generation runs, one at a time.
pub struct Workflow {
    generator: Arc<dyn ImageGenerator>,
    pacing: Pacing,
    tracker: RwLock<WorkflowTracker>,
    results: RwLock<GenerationResult>,
    fallback: FallbackMode,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Workflow {
    pub fn new(generator: Arc<dyn ImageGenerator>, pacing: Pacing) -> Self {
        Self {
            generator,
            pacing,
            tracker: RwLock::default(),
            results: RwLock::default(),
            fallback: FallbackMode::default(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn fallback(&self) -> &FallbackMode {
        &self.fallback
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        WorkflowSnapshot {
            tracker: self.tracker.read().clone(),
            is_generating: self.is_generating(),
            demo_mode: self.fallback.is_active(),
        }
    }

    #[cfg(test)]
    pub fn phase_status(&self, phase: Phase) -> PhaseStatus {
        self.tracker.read().status(phase)
    }

    pub fn image(&self, view: View) -> Option<ImageRef> {
        self.results.read().get(view).map(|stored| stored.image.clone())
    }

    pub fn stored_images(&self) -> Vec<StoredImageInfo> {
        self.results.read().summaries()
    }

    fn try_begin(&self) -> Result<InFlightGuard<'_>, RunError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| InFlightGuard(&self.in_flight))
            .map_err(|_| RunError::Busy)
    }

    fn start(&self, phase: Phase, view: View) {
        self.tracker.write().transition(phase, PhaseStatus::Running, Some(phase.label(view)));
    }

    fn complete(&self, phase: Phase) {
        self.tracker.write().transition(phase, PhaseStatus::Completed, None);
    }

    /// A cosmetic phase: start, wait, complete.
    async fn paced(&self, phase: Phase, view: View) {
        self.start(phase, view);
        self.pacing.wait(phase.delay_ms()).await;
        self.complete(phase);
    }

    /// Runs one generation attempt for `view`.
    ///
    /// Validation happens before any phase changes. Failures from the image
    /// service are classified: quota exhaustion engages demo mode silently,
    /// anything else is returned with its message.
    pub async fn run(
        &self,
        inputs: &InputSet,
        params: &ProductParameters,
        view: View,
    ) -> Result<RunReport, RunError> {
        let _guard = self.try_begin()?;

        if let Err(errors) = validate(inputs, params) {
            info!(%errors, "rejecting run, form is invalid");
            return Err(RunError::Validation(errors));
        }

        let run_id = Uuid::new_v4();
        let demo = self.fallback.is_active();
        info!(%run_id, %view, demo, "🚀 Starting generation run");
        self.tracker.write().reset();

        match self.execute(inputs, params, view, run_id, demo).await {
            Ok(image) => Ok(RunReport { run_id, view, image }),
            Err(e) => Err(self.fail(&e)),
        }
    }

    async fn execute(
        &self,
        inputs: &InputSet,
        params: &ProductParameters,
        view: View,
        run_id: Uuid,
        demo: bool,
    ) -> Result<ImageRef, GeminiError> {
        self.start(Phase::InputValidation, view);
        let missing = inputs.missing_slots();
        if !missing.is_empty() {
            let names: Vec<_> = missing.iter().map(|s| s.as_str()).collect();
            return Err(GeminiError::Other(format!("Missing required input files: {}", names.join(", "))));
        }
        self.pacing.wait(Phase::InputValidation.delay_ms()).await;
        self.complete(Phase::InputValidation);

        self.start(Phase::PromptConstruction, view);
        let prompt = build_prompt(params, view);
        info!("🎯 Built prompt for {} view ({} chars): {}", view, prompt.len(), prompt.trim_start().chars().take(120).collect::<String>());
        self.pacing.wait(Phase::PromptConstruction.delay_ms()).await;
        self.complete(Phase::PromptConstruction);

        for phase in [
            Phase::ModelSynthesis,
            Phase::Texturing,
            Phase::ComponentMasking,
            Phase::LogoApplication,
            Phase::SceneComposition,
            Phase::LightingSimulation,
        ] {
            self.paced(phase, view).await;
        }

        self.start(Phase::ImageGeneration, view);
        let image = if demo {
            info!("Using demo mode - no real images generated");
            self.pacing.wait(Phase::ImageGeneration.delay_ms()).await;
            placeholder_image()?
        } else {
            self.generator.generate_image(&prompt).await?
        };
        self.complete(Phase::ImageGeneration);

        self.paced(Phase::DetailEnhancement, view).await;
        self.paced(Phase::QualityScan, view).await;

        self.start(Phase::ReceivingOutput, view);
        self.results.write().insert(view, image.clone(), run_id);
        self.pacing.wait(Phase::ReceivingOutput.delay_ms()).await;
        self.complete(Phase::ReceivingOutput);

        self.start(Phase::Finalizing, view);
        self.pacing.wait(Phase::Finalizing.delay_ms()).await;
        self.tracker.write().transition(
            Phase::Finalizing,
            PhaseStatus::Completed,
            Some(COMPLETED_LABEL.to_string()),
        );

        info!(%run_id, %view, bytes = image.data.len(), "✅ Generation run completed");
        Ok(image)
    }

    fn fail(&self, err: &GeminiError) -> RunError {
        let outcome = match classify_failure(&err.to_string()) {
            FailureKind::QuotaExceeded => {
                warn!(error = %err, status = ?err.status(), "quota exhausted, switching to demo mode");
                self.fallback.engage();
                RunError::QuotaExceeded
            }
            FailureKind::Generation(message) => {
                error!(error = %err, status = ?err.status(), "generation run failed");
                RunError::Generation(message)
            }
        };

        let mut tracker = self.tracker.write();
        match tracker.running() {
            Some(phase) => tracker.transition(phase, PhaseStatus::Failed, Some(FAILED_LABEL.to_string())),
            None => tracker.transition(
                Phase::InputValidation,
                PhaseStatus::Failed,
                Some(VALIDATION_FAILED_LABEL.to_string()),
            ),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::placeholder_image;
    use crate::models::{ImageSource, InputSlot};
    use crate::validation::tests::full_inputs;
    use async_trait::async_trait;
    use bytes::Bytes;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;

    /// Replays a fixed outcome and counts calls.
    struct Scripted {
        outcome: Result<&'static [u8], &'static str>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn ok(bytes: &'static [u8]) -> Arc<Self> {
            Arc::new(Self { outcome: Ok(bytes), calls: AtomicUsize::new(0) })
        }

        fn err(message: &'static str) -> Arc<Self> {
            Arc::new(Self { outcome: Err(message), calls: AtomicUsize::new(0) })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageGenerator for Scripted {
        async fn generate_image(&self, _prompt: &str) -> Result<ImageRef, GeminiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Ok(bytes) => Ok(ImageRef {
                    mime_type: "image/jpeg".into(),
                    data: Bytes::from_static(bytes),
                    source: ImageSource::Generated,
                }),
                Err(message) => Err(GeminiError::Other(message.into())),
            }
        }
    }

    fn workflow(generator: Arc<Scripted>) -> Workflow {
        Workflow::new(generator, Pacing::none())
    }

    fn statuses(wf: &Workflow) -> Vec<PhaseStatus> {
        Phase::ALL.into_iter().map(|p| wf.phase_status(p)).collect()
    }

    #[tokio::test]
    async fn successful_run_stores_image_and_completes_all_phases() {
        let gen = Scripted::ok(&[0, 0, 0]);
        let wf = workflow(gen.clone());
        let params = ProductParameters::default();

        let report = wf.run(&full_inputs(), &params, View::Front).await.unwrap();

        assert_eq!(report.image.to_data_url(), "data:image/jpeg;base64,AAAA");
        assert_eq!(wf.image(View::Front), Some(report.image));
        assert_eq!(statuses(&wf), vec![PhaseStatus::Completed; 13]);
        assert_eq!(wf.snapshot().tracker.current_log, COMPLETED_LABEL);
        assert_eq!(gen.calls(), 1);
        assert!(!wf.is_generating());
    }

    #[tokio::test]
    async fn missing_slot_never_starts_the_pipeline() {
        let gen = Scripted::ok(&[1]);
        let wf = workflow(gen.clone());
        let mut inputs = full_inputs();
        inputs.clear(InputSlot::DepthMap);

        let err = wf.run(&inputs, &ProductParameters::default(), View::Front).await.unwrap_err();

        match err {
            RunError::Validation(errors) => assert_eq!(errors.get("depthMap"), Some("Image is required.")),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(statuses(&wf), vec![PhaseStatus::Pending; 13]);
        assert_eq!(gen.calls(), 0);
    }

    #[tokio::test]
    async fn validation_failure_leaves_previous_run_statuses_alone() {
        let wf = workflow(Scripted::ok(&[1]));
        wf.run(&full_inputs(), &ProductParameters::default(), View::Front).await.unwrap();

        let params = ProductParameters { product_height: "tall".into(), ..ProductParameters::default() };
        assert!(matches!(
            wf.run(&full_inputs(), &params, View::Back).await,
            Err(RunError::Validation(_))
        ));
        assert_eq!(statuses(&wf), vec![PhaseStatus::Completed; 13]);
    }

    #[tokio::test]
    async fn quota_failure_engages_demo_mode_silently() {
        let wf = workflow(Scripted::err("HTTP 429 Too Many Requests"));

        let err = wf.run(&full_inputs(), &ProductParameters::default(), View::Front).await.unwrap_err();

        assert!(matches!(err, RunError::QuotaExceeded));
        assert_eq!(err.user_notice(), None);
        assert!(wf.fallback().is_active());
        assert_eq!(wf.phase_status(Phase::LightingSimulation), PhaseStatus::Completed);
        assert_eq!(wf.phase_status(Phase::ImageGeneration), PhaseStatus::Failed);
        assert_eq!(wf.phase_status(Phase::DetailEnhancement), PhaseStatus::Pending);
        assert_eq!(wf.snapshot().tracker.current_log, FAILED_LABEL);
        assert_eq!(wf.image(View::Front), None);
    }

    #[tokio::test]
    async fn other_failures_surface_their_message() {
        let wf = workflow(Scripted::err("Internal Server Error"));

        let err = wf.run(&full_inputs(), &ProductParameters::default(), View::Front).await.unwrap_err();

        assert!(!wf.fallback().is_active());
        let notice = err.user_notice().unwrap();
        assert!(notice.contains("Internal Server Error"), "{notice}");
        assert_eq!(wf.phase_status(Phase::ImageGeneration), PhaseStatus::Failed);
    }

    #[tokio::test]
    async fn demo_mode_skips_the_network_and_stores_placeholder() {
        let gen = Scripted::err("quota exceeded for this project");
        let wf = workflow(gen.clone());
        let params = ProductParameters::default();

        let _ = wf.run(&full_inputs(), &params, View::Front).await;
        assert_eq!(gen.calls(), 1);
        assert!(wf.fallback().is_active());

        let report = wf.run(&full_inputs(), &params, View::Back).await.unwrap();
        assert_eq!(gen.calls(), 1);
        assert_eq!(report.image.source, ImageSource::Placeholder);
        assert_eq!(wf.image(View::Back), Some(placeholder_image().unwrap()));
        assert_eq!(statuses(&wf), vec![PhaseStatus::Completed; 13]);
    }

    #[tokio::test]
    async fn clearing_demo_mode_goes_back_to_the_generator() {
        let gen = Scripted::ok(&[7]);
        let wf = workflow(gen.clone());
        wf.fallback().engage();
        wf.run(&full_inputs(), &ProductParameters::default(), View::Top).await.unwrap();
        assert_eq!(gen.calls(), 0);

        wf.fallback().clear();
        wf.run(&full_inputs(), &ProductParameters::default(), View::Top).await.unwrap();
        assert_eq!(gen.calls(), 1);
        assert_eq!(wf.image(View::Top).unwrap().source, ImageSource::Generated);
    }

    #[tokio::test]
    async fn results_accumulate_across_runs() {
        let wf = workflow(Scripted::ok(&[9]));
        for view in [View::Front, View::Angled, View::Left] {
            wf.run(&full_inputs(), &ProductParameters::default(), view).await.unwrap();
        }
        let views: Vec<_> = wf.stored_images().into_iter().map(|i| i.view).collect();
        assert_eq!(views, vec![View::Front, View::Left, View::Angled]);
    }

    #[tokio::test]
    async fn second_trigger_while_running_is_rejected() {
        let wf = workflow(Scripted::ok(&[1]));
        let _guard = wf.try_begin().unwrap();

        let err = wf.run(&full_inputs(), &ProductParameters::default(), View::Front).await.unwrap_err();
        assert!(matches!(err, RunError::Busy));
    }

    #[test]
    fn failure_with_nothing_running_marks_first_phase() {
        let wf = workflow(Scripted::ok(&[1]));
        let err = wf.fail(&GeminiError::Other("boom".into()));
        assert!(matches!(err, RunError::Generation(ref m) if m == "boom"));
        assert_eq!(wf.phase_status(Phase::InputValidation), PhaseStatus::Failed);
        assert_eq!(wf.snapshot().tracker.current_log, VALIDATION_FAILED_LABEL);
    }

    #[test]
    fn transitions_only_move_forward() {
        let mut tracker = WorkflowTracker::default();
        tracker.transition(Phase::Texturing, PhaseStatus::Completed, None);
        assert_eq!(tracker.status(Phase::Texturing), PhaseStatus::Pending);
        tracker.transition(Phase::Texturing, PhaseStatus::Running, None);
        tracker.transition(Phase::Texturing, PhaseStatus::Completed, None);
        tracker.transition(Phase::Texturing, PhaseStatus::Running, None);
        assert_eq!(tracker.status(Phase::Texturing), PhaseStatus::Completed);
    }

    #[test]
    fn phase_ids_are_one_based_and_ordered() {
        let ids: Vec<_> = Phase::ALL.into_iter().map(Phase::id).collect();
        assert_eq!(ids, (1..=13).collect::<Vec<u8>>());
    }

    #[test]
    fn pacing_scales_and_saturates() {
        assert_eq!(Pacing::none().delay(1200), Duration::ZERO);
        assert_eq!(Pacing::new(0.5).delay(1000), Duration::from_millis(500));
        assert_eq!(Pacing::new(1e30).delay(1200), Duration::MAX);
        assert_eq!(Pacing::new(f64::INFINITY).delay(300), Duration::MAX);
        assert_eq!(Pacing::new(f64::INFINITY).delay(0), Duration::ZERO);
    }
}
