//! The publish workflow state machine.

use crate::{
    ContentDraft, PlatformSelection, SchedulingConfig, SchedulingPolicy, SizeSelectionPolicy,
    SuggestionPrompt, SuggestionTicket,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use herald_core::{
    CaptionSuggestion, Design, Platform, PlatformCatalog, PublishRequest, SizeChoice, SizePreset,
};
use herald_error::{HeraldResult, WorkflowError, WorkflowErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Stages of the publish workflow, in forward order.
///
/// Suggestion review is a detour from content editing, not a mandatory
/// stop; completion is terminal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// Choosing which platform(s) to publish to.
    SelectingPlatform,
    /// Platform-specific setup: size, auto-resize, audience.
    ConfiguringPlatform,
    /// Writing the caption and link.
    EditingContent,
    /// Reviewing generated caption suggestions.
    ReviewingSuggestions,
    /// Choosing between immediate and scheduled publishing.
    Scheduling,
    /// A publish request has been built; the workflow is closed.
    Completed,
}

impl WorkflowStage {
    /// Position in the stepper, starting at 1.
    pub fn position(&self) -> u8 {
        match self {
            WorkflowStage::SelectingPlatform => 1,
            WorkflowStage::ConfiguringPlatform => 2,
            WorkflowStage::EditingContent => 3,
            WorkflowStage::ReviewingSuggestions => 4,
            WorkflowStage::Scheduling => 5,
            WorkflowStage::Completed => 6,
        }
    }

    /// Human label for steppers and logs.
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStage::SelectingPlatform => "Select platform",
            WorkflowStage::ConfiguringPlatform => "Configure platform",
            WorkflowStage::EditingContent => "Edit content",
            WorkflowStage::ReviewingSuggestions => "Review suggestions",
            WorkflowStage::Scheduling => "Schedule",
            WorkflowStage::Completed => "Completed",
        }
    }

    /// Whether the workflow is closed at this stage.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowStage::Completed)
    }
}

/// Which selection flow the workflow runs.
///
/// Both flows run the same controller and the same gating; the mode only
/// shapes platform selection (radio vs checkboxes) and whether selecting a
/// platform advances the stage.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FlowMode {
    /// One platform, stepping through every stage.
    #[default]
    Single,
    /// Several platforms at once, driven from the share dialog.
    Multi,
}

/// Sequences one design through the publish stages and emits the final
/// [`PublishRequest`].
///
/// One controller per design per publish attempt. State is owned and
/// mutated only through these methods; the only declared outputs are the
/// returned request and the tracing events. Validation failures refuse the
/// attempted operation and leave every field as it was.
#[derive(Debug)]
pub struct PublishWorkflowController {
    design: Design,
    mode: FlowMode,
    stage: WorkflowStage,
    selection: PlatformSelection,
    size_policy: SizeSelectionPolicy,
    size: SizeChoice,
    auto_resize: bool,
    target_audience: Option<String>,
    draft: ContentDraft,
    schedule: SchedulingPolicy,
    suggestions: Vec<CaptionSuggestion>,
    ticket_counter: u64,
    current_ticket: Option<SuggestionTicket>,
    request: Option<PublishRequest>,
}

impl PublishWorkflowController {
    /// Open a fresh workflow for an approved design.
    ///
    /// # Errors
    ///
    /// Refuses designs whose category is not an approved label.
    #[instrument(skip(design, catalog, scheduling))]
    pub fn open(
        design: Design,
        mode: FlowMode,
        catalog: PlatformCatalog,
        scheduling: SchedulingConfig,
    ) -> HeraldResult<Self> {
        if !design.is_approved() {
            warn!(design_id = *design.id(), category = %design.category(), "refusing unapproved design");
            return Err(WorkflowError::new(WorkflowErrorKind::DesignNotApproved {
                category: design.category().clone(),
            })
            .into());
        }
        info!(design_id = *design.id(), %mode, "publish workflow opened");
        let selection = match mode {
            FlowMode::Single => PlatformSelection::single(),
            FlowMode::Multi => PlatformSelection::multi(),
        };
        Ok(Self {
            design,
            mode,
            stage: WorkflowStage::SelectingPlatform,
            selection,
            size_policy: SizeSelectionPolicy::new(catalog),
            size: SizeChoice::Default,
            auto_resize: true,
            target_audience: None,
            draft: ContentDraft::new(),
            schedule: SchedulingPolicy::new(scheduling),
            suggestions: Vec::new(),
            ticket_counter: 0,
            current_ticket: None,
            request: None,
        })
    }

    fn closed_guard(&self) -> Result<(), WorkflowError> {
        if self.stage.is_terminal() {
            return Err(WorkflowError::new(WorkflowErrorKind::WorkflowClosed));
        }
        Ok(())
    }

    fn stage_mismatch(&self, operation: &str) -> WorkflowError {
        WorkflowError::new(WorkflowErrorKind::StageMismatch {
            stage: self.stage.to_string(),
            operation: operation.to_string(),
        })
    }

    /// Select a platform.
    ///
    /// Single flows replace the previous pick, reset the size to the
    /// platform's default, and advance out of platform selection. Multi
    /// flows enable the platform and stay put.
    #[instrument(skip(self))]
    pub fn select_platform(&mut self, platform: Platform) -> HeraldResult<()> {
        self.closed_guard()?;
        let before = self.selection.primary();
        self.selection.select(platform);
        match self.mode {
            FlowMode::Single => {
                self.size = self.size_policy.default_size_for(platform);
                if self.stage == WorkflowStage::SelectingPlatform {
                    self.stage = WorkflowStage::ConfiguringPlatform;
                }
            }
            FlowMode::Multi => self.follow_primary(before),
        }
        debug!(platform = %platform, stage = %self.stage, size = %self.size, "platform selected");
        Ok(())
    }

    /// Flip one platform in a multi selection. Stays on the current stage.
    #[instrument(skip(self))]
    pub fn toggle_platform(&mut self, platform: Platform) -> HeraldResult<()> {
        self.closed_guard()?;
        let before = self.selection.primary();
        self.selection.toggle(platform);
        self.follow_primary(before);
        debug!(platform = %platform, selected = self.selection.selected().len(), "platform toggled");
        Ok(())
    }

    fn follow_primary(&mut self, before: Option<Platform>) {
        let after = self.selection.primary();
        if after != before {
            self.size = after
                .map(|p| self.size_policy.default_size_for(p))
                .unwrap_or(SizeChoice::Default);
        }
    }

    /// Move forward one stage, enforcing the gate for the current stage.
    ///
    /// # Errors
    ///
    /// Leaving platform selection requires a non-empty selection. The
    /// scheduling stage has no forward transition other than [`publish`].
    ///
    /// [`publish`]: PublishWorkflowController::publish
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> HeraldResult<WorkflowStage> {
        self.closed_guard()?;
        let next = match self.stage {
            WorkflowStage::SelectingPlatform => {
                if self.selection.is_empty() {
                    warn!("cannot advance without a platform");
                    return Err(
                        WorkflowError::new(WorkflowErrorKind::NoPlatformSelected).into()
                    );
                }
                WorkflowStage::ConfiguringPlatform
            }
            WorkflowStage::ConfiguringPlatform => {
                let primary = self.selection.primary().ok_or_else(|| {
                    WorkflowError::new(WorkflowErrorKind::NoPlatformSelected)
                })?;
                self.size_policy.validate(primary, &self.size)?;
                WorkflowStage::EditingContent
            }
            WorkflowStage::EditingContent => WorkflowStage::Scheduling,
            WorkflowStage::ReviewingSuggestions => WorkflowStage::EditingContent,
            WorkflowStage::Scheduling => return Err(self.stage_mismatch("advance").into()),
            WorkflowStage::Completed => {
                return Err(WorkflowError::new(WorkflowErrorKind::WorkflowClosed).into());
            }
        };
        debug!(from = %self.stage, to = %next, "stage advanced");
        self.stage = next;
        Ok(next)
    }

    /// Move back one stage. Selection, draft, and schedule state survive.
    #[instrument(skip(self))]
    pub fn back(&mut self) -> HeraldResult<WorkflowStage> {
        self.closed_guard()?;
        let previous = match self.stage {
            WorkflowStage::SelectingPlatform => return Err(self.stage_mismatch("back").into()),
            WorkflowStage::ConfiguringPlatform => WorkflowStage::SelectingPlatform,
            // The content editor's back button returns to the platform
            // picker, skipping configuration.
            WorkflowStage::EditingContent => WorkflowStage::SelectingPlatform,
            WorkflowStage::ReviewingSuggestions => WorkflowStage::EditingContent,
            WorkflowStage::Scheduling => WorkflowStage::EditingContent,
            WorkflowStage::Completed => {
                return Err(WorkflowError::new(WorkflowErrorKind::WorkflowClosed).into());
            }
        };
        debug!(from = %self.stage, to = %previous, "stage backed");
        self.stage = previous;
        Ok(previous)
    }

    /// Choose an output size for the primary platform.
    ///
    /// # Errors
    ///
    /// Presets must belong to the primary platform and exist in the
    /// catalog; the `default` sentinel always passes.
    pub fn set_size(&mut self, choice: SizeChoice) -> HeraldResult<()> {
        self.closed_guard()?;
        if !choice.is_default() {
            let primary = self
                .selection
                .primary()
                .ok_or_else(|| WorkflowError::new(WorkflowErrorKind::NoPlatformSelected))?;
            self.size_policy.validate(primary, &choice)?;
        }
        self.size = choice;
        Ok(())
    }

    /// Turn per-platform auto-resizing on or off.
    ///
    /// Disabling is always allowed; the returned warning, when present, is
    /// for the user, not a refusal.
    pub fn set_auto_resize(&mut self, enabled: bool) -> HeraldResult<Option<&'static str>> {
        self.closed_guard()?;
        self.auto_resize = enabled;
        let warning = self.size_policy.crop_warning(enabled);
        if let Some(text) = warning {
            warn!(warning = text, "auto-resize disabled");
        }
        Ok(warning)
    }

    /// Name the audience captions should address.
    pub fn set_target_audience(&mut self, audience: Option<String>) -> HeraldResult<()> {
        self.closed_guard()?;
        self.target_audience = audience;
        Ok(())
    }

    /// Replace the caption text, clamped to the caption limit.
    pub fn set_caption(&mut self, text: &str) -> HeraldResult<()> {
        self.closed_guard()?;
        self.draft.set_caption(text);
        Ok(())
    }

    /// Set or clear the call-to-action link.
    pub fn set_link_url(&mut self, url: Option<String>) -> HeraldResult<()> {
        self.closed_guard()?;
        self.draft.set_link_url(url);
        Ok(())
    }

    /// Toggle scheduled publishing.
    pub fn set_scheduled(&mut self, enabled: bool, now: DateTime<Utc>) -> HeraldResult<()> {
        self.closed_guard()?;
        self.schedule.set_scheduled(enabled, now);
        Ok(())
    }

    /// Install the optimal publish time; turns scheduling on as a side
    /// effect.
    pub fn suggest_optimal_time(
        &mut self,
        now: DateTime<Utc>,
    ) -> HeraldResult<(NaiveDate, NaiveTime)> {
        self.closed_guard()?;
        Ok(self.schedule.suggest_optimal_time(now))
    }

    /// Adopt a suggested slot's time.
    pub fn pick_slot(&mut self, index: usize) -> HeraldResult<()> {
        self.closed_guard()?;
        self.schedule.pick_slot(index)?;
        Ok(())
    }

    /// Pick a publish date.
    pub fn set_publish_date(&mut self, date: NaiveDate) -> HeraldResult<()> {
        self.closed_guard()?;
        self.schedule.set_date(date);
        Ok(())
    }

    /// Pick a publish time.
    pub fn set_publish_time(&mut self, time: NaiveTime) -> HeraldResult<()> {
        self.closed_guard()?;
        self.schedule.set_time(time);
        Ok(())
    }

    /// Open a suggestion round and get its ticket.
    ///
    /// Allowed while editing content or already reviewing: requesting again
    /// simply starts a newer round and the older ticket goes stale.
    #[instrument(skip(self))]
    pub fn review_suggestions(&mut self) -> HeraldResult<SuggestionTicket> {
        self.closed_guard()?;
        if !matches!(
            self.stage,
            WorkflowStage::EditingContent | WorkflowStage::ReviewingSuggestions
        ) {
            return Err(self.stage_mismatch("review_suggestions").into());
        }
        self.stage = WorkflowStage::ReviewingSuggestions;
        self.ticket_counter += 1;
        let ticket = SuggestionTicket(self.ticket_counter);
        self.current_ticket = Some(ticket);
        self.suggestions.clear();
        info!(%ticket, "suggestion round opened");
        Ok(ticket)
    }

    /// Deliver a finished suggestion round.
    ///
    /// Returns whether the results were accepted: only the newest ticket's
    /// results land, anything older is dropped. Late results after
    /// completion are dropped too.
    pub fn complete_suggestions(
        &mut self,
        ticket: SuggestionTicket,
        suggestions: Vec<CaptionSuggestion>,
    ) -> bool {
        if self.stage.is_terminal() {
            warn!(%ticket, "dropping suggestions delivered after completion");
            return false;
        }
        if self.current_ticket != Some(ticket) {
            warn!(%ticket, current = ?self.current_ticket, "dropping stale suggestion round");
            return false;
        }
        debug!(%ticket, count = suggestions.len(), "suggestion round delivered");
        self.suggestions = suggestions;
        true
    }

    /// Copy one suggestion's caption into the draft and return to editing.
    ///
    /// # Errors
    ///
    /// Only available while reviewing, and the index must name a delivered
    /// suggestion.
    #[instrument(skip(self))]
    pub fn apply_suggestion(&mut self, index: usize) -> HeraldResult<()> {
        self.closed_guard()?;
        if self.stage != WorkflowStage::ReviewingSuggestions {
            return Err(self.stage_mismatch("apply_suggestion").into());
        }
        let suggestion = self
            .suggestions
            .get(index)
            .ok_or_else(|| WorkflowError::new(WorkflowErrorKind::UnknownSuggestion(index)))?
            .clone();
        self.draft.apply_suggestion(&suggestion);
        self.stage = WorkflowStage::EditingContent;
        info!(index, "suggestion applied to caption");
        Ok(())
    }

    /// The prompt a suggestion source should answer for this workflow.
    pub fn suggestion_prompt(&self, trends: &[String]) -> SuggestionPrompt {
        SuggestionPrompt::new(
            self.design.title().clone(),
            self.design.author().clone(),
            trends.to_vec(),
            self.target_audience.clone(),
        )
    }

    /// Build the immutable publish request and close the workflow.
    ///
    /// Reachable from any stage once at least one platform is selected; the
    /// scheduling stage is not a mandatory stop for an immediate publish.
    /// Calling again after completion returns the same request, so a failed
    /// dispatch can be retried with an identical payload.
    ///
    /// # Errors
    ///
    /// Refuses an empty selection or a size that does not validate against
    /// the primary platform.
    #[instrument(skip(self, now))]
    pub fn publish(&mut self, now: DateTime<Utc>) -> HeraldResult<PublishRequest> {
        if let Some(request) = &self.request {
            debug!("returning previously built publish request");
            return Ok(request.clone());
        }
        let primary = match self.selection.primary() {
            Some(primary) => primary,
            None => {
                warn!("refusing publish without a platform");
                return Err(WorkflowError::new(WorkflowErrorKind::NoPlatformSelected).into());
            }
        };
        self.size_policy.validate(primary, &self.size)?;
        let (date, time) = self.schedule.resolved(now);
        let request = PublishRequest::new(
            *self.design.id(),
            self.design.title().clone(),
            self.selection.selected(),
            self.draft.caption().to_string(),
            self.schedule.scheduled(),
            date,
            time,
            self.draft.link_url().cloned(),
            self.size.clone(),
            self.auto_resize,
        );
        info!(
            design_id = *request.design_id(),
            platforms = request.platforms().len(),
            scheduled = *request.scheduled(),
            size = %request.size(),
            "publish request built"
        );
        self.request = Some(request.clone());
        self.stage = WorkflowStage::Completed;
        Ok(request)
    }

    /// The design this workflow publishes.
    pub fn design(&self) -> &Design {
        &self.design
    }

    /// The flow mode the workflow was opened with.
    pub fn mode(&self) -> FlowMode {
        self.mode
    }

    /// The current stage.
    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    /// The current platform selection.
    pub fn selection(&self) -> &PlatformSelection {
        &self.selection
    }

    /// The current size choice.
    pub fn size(&self) -> &SizeChoice {
        &self.size
    }

    /// The size menu for the primary platform, empty when none applies.
    pub fn size_menu(&self) -> &[SizePreset] {
        match self.selection.primary() {
            Some(primary) => self.size_policy.catalog().sizes_for(primary),
            None => &[],
        }
    }

    /// Whether per-platform auto-resizing is on.
    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    /// The audience captions should address, if named.
    pub fn target_audience(&self) -> Option<&String> {
        self.target_audience.as_ref()
    }

    /// The editable content draft.
    pub fn draft(&self) -> &ContentDraft {
        &self.draft
    }

    /// The scheduling state.
    pub fn schedule(&self) -> &SchedulingPolicy {
        &self.schedule
    }

    /// Suggestions delivered for the newest round.
    pub fn suggestions(&self) -> &[CaptionSuggestion] {
        &self.suggestions
    }

    /// The newest suggestion ticket, if a round was opened.
    pub fn current_ticket(&self) -> Option<SuggestionTicket> {
        self.current_ticket
    }

    /// The built request, once the workflow completed.
    pub fn request(&self) -> Option<&PublishRequest> {
        self.request.as_ref()
    }
}
