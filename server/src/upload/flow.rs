//! Async host for the upload controller
//!
//! `UploadFlow` runs submissions on the tokio runtime so the caller never
//! blocks while the endpoint works. It must be used from within a runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use super::client::ProcessingClient;
use super::controller::{FlowStatus, Submission, UploadController, UploadPhase};
use super::notice::Notice;
use super::types::{ImageFile, Ticket, UploadError};
use super::view::UploadView;

/// One mounted upload widget: controller state plus its in-flight request.
///
/// Dropping the flow (unmount) aborts the in-flight request.
pub struct UploadFlow {
    controller: Arc<Mutex<UploadController>>,
    client: Arc<dyn ProcessingClient>,
    timeout: Duration,
    in_flight: Option<JoinHandle<()>>,
}

impl UploadFlow {
    pub fn new(
        niche: impl Into<String>,
        client: Arc<dyn ProcessingClient>,
        timeout: Duration,
    ) -> Self {
        Self {
            controller: Arc::new(Mutex::new(UploadController::new(niche))),
            client,
            timeout,
            in_flight: None,
        }
    }

    fn controller(&self) -> MutexGuard<'_, UploadController> {
        self.controller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn drag_enter(&self) {
        self.controller().drag_enter();
    }

    pub fn drag_over(&self) {
        self.controller().drag_over();
    }

    pub fn drag_leave(&self) {
        self.controller().drag_leave();
    }

    /// Drop files on the target; a valid image starts processing immediately.
    pub fn drop_files(&mut self, files: Vec<ImageFile>) -> Result<Ticket, UploadError> {
        let submission = self.controller().drop_files(files)?;
        Ok(self.spawn(submission))
    }

    /// Choose files with the picker; a valid image starts processing immediately.
    pub fn select_files(&mut self, files: Vec<ImageFile>) -> Result<Ticket, UploadError> {
        let submission = self.controller().select_files(files)?;
        Ok(self.spawn(submission))
    }

    /// Re-submit after a failure
    pub fn retry(&mut self) -> Result<Ticket, UploadError> {
        let submission = self.controller().retry()?;
        Ok(self.spawn(submission))
    }

    /// Abort any in-flight request and return to `Idle`
    pub fn reset(&mut self) {
        self.abort_in_flight();
        self.controller().reset();
    }

    pub fn phase(&self) -> UploadPhase {
        self.controller().phase().clone()
    }

    pub fn is_processing(&self) -> bool {
        self.controller().is_processing()
    }

    pub fn status(&self) -> FlowStatus {
        self.controller().status()
    }

    pub fn take_notices(&self) -> Vec<Notice> {
        self.controller().take_notices()
    }

    pub fn view(&self) -> UploadView {
        self.controller().view()
    }

    /// Wait until the in-flight submission (if any) has settled.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            let _ = handle.await;
        }
    }

    fn spawn(&mut self, submission: Submission) -> Ticket {
        let ticket = submission.ticket;
        let controller = Arc::clone(&self.controller);
        let client = Arc::clone(&self.client);
        let timeout = self.timeout;

        // The controller rejects new input while processing, so anything
        // still held here has already settled.
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = submission.run(client.as_ref(), timeout).await;
            controller
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .settle(outcome);
        }));
        ticket
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!("Aborting in-flight upload");
            }
            handle.abort();
        }
    }
}

impl Drop for UploadFlow {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockProcessingClient, test_image, test_response};
    use crate::upload::Severity;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_drop_processes_then_settles() {
        let (client, gate) = MockProcessingClient::gated(Ok(test_response()));
        let calls = client.call_counter();
        let mut flow = UploadFlow::new("dog", Arc::new(client), Duration::from_secs(5));

        flow.drag_enter();
        assert_eq!(flow.status(), FlowStatus::DragHover);

        flow.drop_files(vec![test_image()]).unwrap();
        assert!(flow.is_processing());
        assert_eq!(flow.status(), FlowStatus::Processing);

        gate.send(true).unwrap();
        flow.settled().await;

        assert!(!flow.is_processing());
        assert!(matches!(flow.phase(), UploadPhase::Done { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let notices = flow.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_non_image_never_reaches_client() {
        let client = MockProcessingClient::immediate(Ok(test_response()));
        let calls = client.call_counter();
        let mut flow = UploadFlow::new("dog", Arc::new(client), Duration::from_secs(5));

        let err = flow
            .drop_files(vec![ImageFile::new("song.mp3", "audio/mpeg", vec![0; 4])])
            .unwrap_err();

        assert!(matches!(err, UploadError::NotAnImage { .. }));
        flow.settled().await;
        assert_eq!(flow.phase(), UploadPhase::Idle);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failing_endpoint_leaves_processing() {
        let client =
            MockProcessingClient::immediate(Err(UploadError::Transport("network down".into())));
        let mut flow = UploadFlow::new("dog", Arc::new(client), Duration::from_secs(5));

        flow.select_files(vec![test_image()]).unwrap();
        flow.settled().await;

        assert!(!flow.is_processing());
        assert!(matches!(flow.phase(), UploadPhase::Failed { .. }));
        assert!(flow.view().retry_available);
    }

    #[tokio::test]
    async fn test_hung_endpoint_times_out() {
        let (client, _gate) = MockProcessingClient::gated(Ok(test_response()));
        let mut flow = UploadFlow::new("dog", Arc::new(client), Duration::from_millis(30));

        flow.drop_files(vec![test_image()]).unwrap();
        flow.settled().await;

        match flow.phase() {
            UploadPhase::Failed { error, .. } => {
                assert_eq!(error, UploadError::TimedOut(Duration::from_millis(30)))
            }
            other => panic!("unexpected phase {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_retry_after_failure_succeeds() {
        let client = MockProcessingClient::sequence(vec![
            Err(UploadError::Status(502)),
            Ok(test_response()),
        ]);
        let mut flow = UploadFlow::new("dog", Arc::new(client), Duration::from_secs(5));

        flow.drop_files(vec![test_image()]).unwrap();
        flow.settled().await;
        assert!(matches!(flow.phase(), UploadPhase::Failed { .. }));

        flow.retry().unwrap();
        flow.settled().await;
        assert!(matches!(flow.phase(), UploadPhase::Done { .. }));
    }

    #[tokio::test]
    async fn test_reset_discards_in_flight_result() {
        let (client, gate) = MockProcessingClient::gated(Ok(test_response()));
        let mut flow = UploadFlow::new("dog", Arc::new(client), Duration::from_secs(5));

        flow.drop_files(vec![test_image()]).unwrap();
        flow.reset();
        let _ = gate.send(true);
        flow.settled().await;

        assert_eq!(flow.phase(), UploadPhase::Idle);
        assert!(flow.take_notices().is_empty());
    }

    #[tokio::test]
    async fn test_busy_while_processing() {
        let (client, _gate) = MockProcessingClient::gated(Ok(test_response()));
        let mut flow = UploadFlow::new("dog", Arc::new(client), Duration::from_secs(5));

        flow.drop_files(vec![test_image()]).unwrap();
        assert_eq!(
            flow.select_files(vec![test_image()]).unwrap_err(),
            UploadError::Busy
        );
    }
}
