//! Upload flow state machine
//!
//! The controller is synchronous: accepting a file moves the phase to
//! `Processing` and hands back a [`Submission`] for the host to run. The
//! host reports the result through [`UploadController::settle`]. Only one
//! submission is outstanding at a time; new input while processing is
//! rejected with [`UploadError::Busy`].

use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::client::ProcessingClient;
use super::notice::Notice;
use super::types::{EntryPoint, ImageFile, Ticket, UploadError};
use super::view::UploadView;
use crate::process::ProcessResponse;

/// Lifecycle of the upload flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPhase {
    /// Nothing submitted yet (or reset)
    Idle,
    /// A submission for `file` is in flight
    Processing { file: ImageFile, ticket: Ticket },
    /// The endpoint accepted `file` and answered with `response`
    Done {
        file: ImageFile,
        response: ProcessResponse,
    },
    /// The submission for `file` failed; it can be retried
    Failed { file: ImageFile, error: UploadError },
}

impl UploadPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Processing { .. } => "processing",
            Self::Done { .. } => "done",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Presentation state of the drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStatus {
    Idle,
    DragHover,
    Processing,
}

/// A submission ready to be sent to the processing endpoint
#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: Ticket,
    pub file: ImageFile,
}

/// Settled result of a submission
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub ticket: Ticket,
    pub result: Result<ProcessResponse, UploadError>,
}

impl Submission {
    /// Send the file and wait for the answer, failing after `timeout`.
    pub async fn run<C>(self, client: &C, timeout: Duration) -> SubmissionOutcome
    where
        C: ProcessingClient + ?Sized,
    {
        let result = match tokio::time::timeout(timeout, client.process(&self.file)).await {
            Ok(result) => result,
            Err(_) => Err(UploadError::TimedOut(timeout)),
        };
        SubmissionOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// Drag/drop and file-picker upload controller for one drop target
#[derive(Debug)]
pub struct UploadController {
    niche: String,
    phase: UploadPhase,
    drag_active: bool,
    next_ticket: u64,
    notices: VecDeque<Notice>,
}

impl UploadController {
    /// `niche` is display copy only ("dog", "photo", ...)
    pub fn new(niche: impl Into<String>) -> Self {
        Self {
            niche: niche.into(),
            phase: UploadPhase::Idle,
            drag_active: false,
            next_ticket: 0,
            notices: VecDeque::new(),
        }
    }

    pub fn niche(&self) -> &str {
        &self.niche
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.phase, UploadPhase::Processing { .. })
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// The file the current phase concerns, if any
    pub fn selected_file(&self) -> Option<&ImageFile> {
        match &self.phase {
            UploadPhase::Idle => None,
            UploadPhase::Processing { file, .. }
            | UploadPhase::Done { file, .. }
            | UploadPhase::Failed { file, .. } => Some(file),
        }
    }

    pub fn status(&self) -> FlowStatus {
        if self.is_processing() {
            FlowStatus::Processing
        } else if self.drag_active {
            FlowStatus::DragHover
        } else {
            FlowStatus::Idle
        }
    }

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Files dropped onto the target. Only the first file is considered.
    pub fn drop_files(&mut self, files: Vec<ImageFile>) -> Result<Submission, UploadError> {
        self.drag_active = false;
        let file = files.into_iter().next().ok_or(UploadError::NoFile)?;
        self.accept_file(file, EntryPoint::Drop)
    }

    /// Files chosen with the picker. Only the first file is considered.
    pub fn select_files(&mut self, files: Vec<ImageFile>) -> Result<Submission, UploadError> {
        let file = files.into_iter().next().ok_or(UploadError::NoFile)?;
        self.accept_file(file, EntryPoint::Picker)
    }

    /// Validate a file and start its submission.
    ///
    /// Both entry points apply the same `image/*` rule.
    pub fn accept_file(
        &mut self,
        file: ImageFile,
        entry: EntryPoint,
    ) -> Result<Submission, UploadError> {
        if !file.is_image() {
            debug!("Ignoring non-image {:?} from {:?} ({})", file.name, entry, file.mime);
            return Err(UploadError::NotAnImage { mime: file.mime });
        }
        if self.is_processing() {
            warn!("Rejecting {:?} from {:?}: submission in progress", file.name, entry);
            return Err(UploadError::Busy);
        }

        debug!("Accepted {:?} from {:?} ({} bytes)", file.name, entry, file.size());
        Ok(self.start(file))
    }

    /// Re-submit the file of a failed submission
    pub fn retry(&mut self) -> Result<Submission, UploadError> {
        match &self.phase {
            UploadPhase::Failed { file, .. } => {
                let file = file.clone();
                info!("Retrying {:?}", file.name);
                Ok(self.start(file))
            }
            UploadPhase::Processing { .. } => Err(UploadError::Busy),
            _ => Err(UploadError::NothingToRetry),
        }
    }

    /// Return to `Idle`. An outstanding submission becomes stale.
    pub fn reset(&mut self) {
        if let UploadPhase::Processing { ticket, .. } = &self.phase {
            debug!("Reset abandons submission {:?}", ticket);
        }
        self.phase = UploadPhase::Idle;
        self.drag_active = false;
    }

    fn start(&mut self, file: ImageFile) -> Submission {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = UploadPhase::Processing {
            file: file.clone(),
            ticket,
        };
        Submission { ticket, file }
    }

    /// Apply a settled submission. Returns `false` for stale outcomes.
    pub fn settle(&mut self, outcome: SubmissionOutcome) -> bool {
        let file = match &self.phase {
            UploadPhase::Processing { file, ticket } if *ticket == outcome.ticket => file.clone(),
            _ => {
                debug!("Discarding stale outcome for {:?}", outcome.ticket);
                return false;
            }
        };

        let result = outcome.result.and_then(|response| {
            if response.success {
                Ok(response)
            } else {
                Err(UploadError::Unsuccessful(response.message))
            }
        });

        match result {
            Ok(response) => {
                info!("Processing success for {:?}: {:?}", file.name, response);
                self.notices.push_back(Notice::success(response.message.clone()));
                self.phase = UploadPhase::Done { file, response };
            }
            Err(error) => {
                error!("Upload failed for {:?}: {}", file.name, error);
                self.notices
                    .push_back(Notice::error(format!("Upload failed: {}", error)));
                self.phase = UploadPhase::Failed { file, error };
            }
        }
        true
    }

    /// Drain queued notices for display
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn view(&self) -> UploadView {
        UploadView::from_controller(self)
    }
}
