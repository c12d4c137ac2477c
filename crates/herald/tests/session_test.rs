//! End-to-end publish sessions against a recording dispatcher.

use async_trait::async_trait;
use herald::{
    Design, DesignBuilder, DispatchError, DispatchReceipt, FlowMode, HeraldConfig, HeraldResult,
    Platform, PostId, PublishDispatcher, PublishRequest, PublishSession, StaticTrendSource,
    TemplatedSuggestionSource, WorkflowStage,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Records every request and cancellation it sees; optionally rejects the
/// first dispatch to exercise the retry path.
#[derive(Debug, Clone, Default)]
struct RecordingDispatcher {
    requests: Arc<Mutex<Vec<PublishRequest>>>,
    cancels: Arc<Mutex<Vec<i64>>>,
    reject_next: Arc<AtomicBool>,
}

impl RecordingDispatcher {
    fn rejecting_first() -> Self {
        let dispatcher = Self::default();
        dispatcher.reject_next.store(true, Ordering::SeqCst);
        dispatcher
    }

    fn requests(&self) -> Vec<PublishRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn cancels(&self) -> Vec<i64> {
        self.cancels.lock().unwrap().clone()
    }
}

#[async_trait]
impl PublishDispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: &PublishRequest) -> HeraldResult<DispatchReceipt> {
        self.requests.lock().unwrap().push(request.clone());
        if self.reject_next.swap(false, Ordering::SeqCst) {
            return Err(DispatchError::new("downstream rejected the request").into());
        }
        Ok(DispatchReceipt::new(
            vec![PostId(format!("post-{}", request.design_id()))],
            None,
        ))
    }

    async fn cancelled(&self, design: &Design) -> HeraldResult<()> {
        self.cancels.lock().unwrap().push(*design.id());
        Ok(())
    }
}

fn approved_design() -> Design {
    DesignBuilder::default()
        .id(7)
        .title("Summer launch".to_string())
        .category("approved".to_string())
        .author("Rana".to_string())
        .build()
        .unwrap()
}

async fn open_session(
    mode: FlowMode,
    dispatcher: RecordingDispatcher,
) -> PublishSession<RecordingDispatcher, TemplatedSuggestionSource, StaticTrendSource> {
    let config = HeraldConfig::builder().flow_mode(mode).build();
    PublishSession::open(
        approved_design(),
        &config,
        dispatcher,
        TemplatedSuggestionSource::immediate(),
        StaticTrendSource::default(),
    )
    .await
    .unwrap()
}

// --- dispatcher seam ---

#[tokio::test]
async fn validation_failure_never_reaches_the_dispatcher() {
    let dispatcher = RecordingDispatcher::default();
    let mut session = open_session(FlowMode::Multi, dispatcher.clone()).await;

    let err = session.publish(chrono::Utc::now()).await.unwrap_err();
    assert!(err.to_string().contains("select at least one platform"));
    assert!(dispatcher.requests().is_empty());
    assert!(session.receipt().is_none());
}

#[tokio::test]
async fn immediate_publish_dispatches_exactly_once() {
    let dispatcher = RecordingDispatcher::default();
    let mut session = open_session(FlowMode::Single, dispatcher.clone()).await;
    session
        .controller_mut()
        .select_platform(Platform::Instagram)
        .unwrap();

    let receipt = session.publish(chrono::Utc::now()).await.unwrap();
    assert_eq!(receipt.post_ids(), &vec![PostId("post-7".into())]);
    assert_eq!(dispatcher.requests().len(), 1);
    assert_eq!(session.receipt(), Some(&receipt));
    assert_eq!(session.controller().stage(), WorkflowStage::Completed);
}

#[tokio::test]
async fn rejected_dispatch_retries_with_the_identical_request() {
    let dispatcher = RecordingDispatcher::rejecting_first();
    let mut session = open_session(FlowMode::Single, dispatcher.clone()).await;
    session
        .controller_mut()
        .select_platform(Platform::Facebook)
        .unwrap();
    session.controller_mut().set_caption("Launch day").unwrap();

    let err = session.publish(chrono::Utc::now()).await.unwrap_err();
    assert!(err.to_string().contains("downstream rejected the request"));
    assert!(session.receipt().is_none());

    // The snapshot survives the failure, so the retry carries the same
    // payload even though the workflow already completed.
    session.publish(chrono::Utc::now()).await.unwrap();
    let requests = dispatcher.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert!(session.receipt().is_some());
}

// --- approval gate ---

#[tokio::test]
async fn unapproved_design_never_opens_a_session() {
    let design = DesignBuilder::default()
        .id(9)
        .title("Rough cut".to_string())
        .category("pending".to_string())
        .build()
        .unwrap();
    let dispatcher = RecordingDispatcher::default();
    let config = HeraldConfig::default();

    let err = PublishSession::open(
        design,
        &config,
        dispatcher.clone(),
        TemplatedSuggestionSource::immediate(),
        StaticTrendSource::default(),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("is not approved for publishing"));
    assert!(dispatcher.requests().is_empty());
}

#[tokio::test]
async fn cancelling_a_session_notifies_the_dispatcher() {
    let dispatcher = RecordingDispatcher::default();
    let mut session = open_session(FlowMode::Single, dispatcher.clone()).await;
    session
        .controller_mut()
        .select_platform(Platform::Twitter)
        .unwrap();

    session.cancel().await.unwrap();
    assert_eq!(dispatcher.cancels(), vec![7]);
    assert!(dispatcher.requests().is_empty());
}

// --- suggestion round trip ---

#[tokio::test]
async fn suggestion_round_trip_lands_in_the_draft() {
    let dispatcher = RecordingDispatcher::default();
    let mut session = open_session(FlowMode::Single, dispatcher).await;
    assert!(!session.trends().is_empty());

    session
        .controller_mut()
        .select_platform(Platform::Instagram)
        .unwrap();
    session.controller_mut().advance().unwrap();
    assert_eq!(session.controller().stage(), WorkflowStage::EditingContent);

    let delivered = session.generate_suggestions().await.unwrap();
    assert!(delivered > 0);
    assert_eq!(session.controller().suggestions().len(), delivered);

    session.controller_mut().apply_suggestion(0).unwrap();
    assert!(!session.controller().draft().caption().is_empty());
    assert_eq!(session.controller().stage(), WorkflowStage::EditingContent);
}
