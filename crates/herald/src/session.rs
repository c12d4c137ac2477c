//! One design's publish session: controller plus collaborators.

use crate::HeraldConfig;
use chrono::{DateTime, Utc};
use herald_core::{Design, PlatformCatalog};
use herald_error::HeraldResult;
use herald_workflow::{
    DispatchReceipt, PublishDispatcher, PublishWorkflowController, SuggestionSource, TrendSource,
};
use tracing::{debug, info, instrument};

/// Wires a [`PublishWorkflowController`] to its collaborators.
///
/// The session owns one workflow from open to publish or cancel. Trends are
/// loaded once at open and feed every suggestion round; the dispatcher only
/// ever sees a request the controller's gating has passed.
#[derive(Debug)]
pub struct PublishSession<D, S, T>
where
    D: PublishDispatcher,
    S: SuggestionSource,
    T: TrendSource,
{
    controller: PublishWorkflowController,
    dispatcher: D,
    suggestion_source: S,
    trend_source: T,
    trends: Vec<String>,
    receipt: Option<DispatchReceipt>,
}

impl<D, S, T> PublishSession<D, S, T>
where
    D: PublishDispatcher,
    S: SuggestionSource,
    T: TrendSource,
{
    /// Open a session for an approved design.
    ///
    /// # Errors
    ///
    /// Refuses unapproved designs; fails when the trend feed cannot be
    /// read.
    #[instrument(skip_all, fields(design_id = *design.id()))]
    pub async fn open(
        design: Design,
        config: &HeraldConfig,
        dispatcher: D,
        suggestion_source: S,
        trend_source: T,
    ) -> HeraldResult<Self> {
        let controller = PublishWorkflowController::open(
            design,
            *config.flow_mode(),
            PlatformCatalog::default(),
            config.scheduling().clone(),
        )?;
        let trends = trend_source.current_trends().await?;
        info!(trend_count = trends.len(), "publish session opened");
        Ok(Self {
            controller,
            dispatcher,
            suggestion_source,
            trend_source,
            trends,
            receipt: None,
        })
    }

    /// The workflow controller, for stage transitions and field edits.
    pub fn controller(&self) -> &PublishWorkflowController {
        &self.controller
    }

    /// Mutable access to the workflow controller.
    pub fn controller_mut(&mut self) -> &mut PublishWorkflowController {
        &mut self.controller
    }

    /// The trends loaded when the session opened.
    pub fn trends(&self) -> &[String] {
        &self.trends
    }

    /// The dispatch receipt, once a publish went through.
    pub fn receipt(&self) -> Option<&DispatchReceipt> {
        self.receipt.as_ref()
    }

    /// Reload trends from the source, replacing the cached list.
    pub async fn refresh_trends(&mut self) -> HeraldResult<usize> {
        self.trends = self.trend_source.current_trends().await?;
        debug!(trend_count = self.trends.len(), "trends refreshed");
        Ok(self.trends.len())
    }

    /// Run one suggestion round through the source and deliver it.
    ///
    /// Returns the number of suggestions now available for review.
    #[instrument(skip(self))]
    pub async fn generate_suggestions(&mut self) -> HeraldResult<usize> {
        let ticket = self.controller.review_suggestions()?;
        let prompt = self.controller.suggestion_prompt(&self.trends);
        let generated = self.suggestion_source.generate(&prompt).await?;
        self.controller.complete_suggestions(ticket, generated);
        Ok(self.controller.suggestions().len())
    }

    /// Build the publish request and hand it to the dispatcher.
    ///
    /// The controller's gating runs first: with nothing selected the
    /// dispatcher is never called. A dispatch failure leaves the built
    /// request in place, so calling again retries with the identical
    /// payload.
    #[instrument(skip(self, now))]
    pub async fn publish(&mut self, now: DateTime<Utc>) -> HeraldResult<DispatchReceipt> {
        let request = self.controller.publish(now)?;
        let receipt = self.dispatcher.dispatch(&request).await?;
        info!(
            posts = receipt.post_ids().len(),
            scheduled = receipt.schedule_id().is_some(),
            "publish request dispatched"
        );
        self.receipt = Some(receipt.clone());
        Ok(receipt)
    }

    /// Abandon the workflow, notifying the dispatcher, and drop all state.
    #[instrument(skip(self))]
    pub async fn cancel(self) -> HeraldResult<()> {
        info!(design_id = *self.controller.design().id(), "publish session cancelled");
        self.dispatcher.cancelled(self.controller.design()).await
    }
}
