#![warn(missing_docs)]
//! # photo-revive-ui
//!
//! ## Purpose
//! Defines the UI-facing application state machine for `photo-revive`.
//!
//! ## Responsibilities
//! - Hold the original/generated images, loading flag, and error banner.
//! - Enforce the upload/process/settle transition rules, including the
//!   one-in-flight guard and the stale-response generation guard.
//! - Project state into render-ready decisions (button labels, pane
//!   content, download availability) and own the display copy constants.
//!
//! ## Data flow
//! Shell intents (upload, process, download) mutate [`AppState`] through
//! guarded reducers; the shell renders purely from projections of the same
//! state.
//!
//! ## Ownership and lifetimes
//! `AppState` owns all image and message values so settle events arriving
//! from worker threads can be applied without borrow coupling. Fields are
//! private: invariants hold only when every mutation goes through the
//! reducers.
//!
//! ## Error model
//! This crate favors explicit state over recoverable errors. Illegal
//! transitions are no-ops enforced by guard methods.
//!
//! ## Security and privacy notes
//! UI state carries only encoded image values and user-facing copy, never
//! API keys or raw provider errors.

use photo_revive_core::EncodedImage;

/// Window and header title.
pub const APP_TITLE: &str = "AI Image Colorizer & 4K Enhancer";
/// Header tagline under the title.
pub const APP_TAGLINE: &str =
    "Transform your black and white photos into vibrant, high-resolution masterpieces.";
/// Original pane heading.
pub const ORIGINAL_PANE_TITLE: &str = "Original Image";
/// Result pane heading.
pub const RESULT_PANE_TITLE: &str = "Colorized & Enhanced 4K";
/// Upload affordance hint shown before any image is selected.
pub const UPLOAD_HINT: &str = "Upload a PNG, JPG, or WEBP image to get started.";
/// Result pane placeholder before any processing has completed.
pub const RESULT_PLACEHOLDER: &str = "Your enhanced image will appear here.";
/// Message shown next to the spinner while a request is in flight.
pub const LOADING_MESSAGE: &str = "AI is working its magic...";
/// Process trigger label when idle.
pub const PROCESS_LABEL_READY: &str = "Colorize & Enhance";
/// Process trigger label while a request is in flight.
pub const PROCESS_LABEL_BUSY: &str = "Processing...";
/// Download trigger label.
pub const DOWNLOAD_LABEL: &str = "Download Image";
/// Default file name offered for the downloaded result.
pub const DOWNLOAD_FILE_NAME: &str = "colorized-enhanced-image.jpg";
/// Normalized user-facing message for any processing-path failure.
pub const PROCESS_FAILURE_MESSAGE: &str = "Failed to process the image. Please try again.";
/// User-facing message when the selected file could not be read.
pub const UPLOAD_FAILURE_MESSAGE: &str = "Could not read the selected image file.";

/// Coarse lifecycle phase derived from state contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingPhase {
    /// No original image selected yet.
    Idle,
    /// Original selected, no result, not loading.
    Ready,
    /// Enhancement request in flight.
    Processing,
    /// Generated result available.
    Done,
    /// Last action failed; error banner visible.
    Failed,
}

/// Render decision for the result pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPane<'a> {
    /// Show the loading indicator.
    Loading,
    /// Show the placeholder text.
    Placeholder,
    /// Show the generated image.
    Image(&'a EncodedImage),
}

/// Opaque token tying an in-flight request to the upload generation it was
/// started for. Settles with a stale ticket must not overwrite newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingTicket(u64);

/// Aggregate application state, exclusively owned by the shell's controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    original: Option<EncodedImage>,
    generated: Option<EncodedImage>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl AppState {
    /// Creates the initial empty state.
    pub fn new() -> Self {
        Self {
            original: None,
            generated: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Returns the current original image.
    pub fn original(&self) -> Option<&EncodedImage> {
        self.original.as_ref()
    }

    /// Returns the current generated image.
    pub fn generated(&self) -> Option<&EncodedImage> {
        self.generated.as_ref()
    }

    /// Returns the current error banner message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` while an enhancement request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Derives the coarse lifecycle phase.
    pub fn phase(&self) -> ProcessingPhase {
        if self.loading {
            ProcessingPhase::Processing
        } else if self.error.is_some() {
            ProcessingPhase::Failed
        } else if self.generated.is_some() {
            ProcessingPhase::Done
        } else if self.original.is_some() {
            ProcessingPhase::Ready
        } else {
            ProcessingPhase::Idle
        }
    }

    /// Applies a successful upload: stores the new original, clears prior
    /// result and error, and advances the generation so any in-flight
    /// settle becomes stale.
    pub fn on_upload(&mut self, image: EncodedImage) {
        self.generation += 1;
        self.original = Some(image);
        self.generated = None;
        self.error = None;
    }

    /// Records an upload-time file read failure without touching the prior
    /// original image.
    pub fn fail_upload(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Starts processing when allowed.
    ///
    /// # Returns
    /// `None` (state unchanged) when no original image is present or a
    /// request is already in flight; otherwise sets the loading flag,
    /// clears prior result and error, and returns the settle ticket.
    pub fn begin_processing(&mut self) -> Option<ProcessingTicket> {
        if self.original.is_none() || self.loading {
            return None;
        }

        self.loading = true;
        self.generated = None;
        self.error = None;
        Some(ProcessingTicket(self.generation))
    }

    /// Applies a successful settle.
    ///
    /// Loading clears on every settle path. The result is stored only when
    /// the ticket still matches the current upload generation.
    pub fn complete_success(&mut self, ticket: ProcessingTicket, image: EncodedImage) {
        self.loading = false;
        if ticket.0 == self.generation {
            self.generated = Some(image);
            self.error = None;
        }
    }

    /// Applies a failed settle with an already user-facing message.
    ///
    /// Loading clears on every settle path; the original image stays
    /// intact. The message is stored only when the ticket is current.
    pub fn complete_failure(&mut self, ticket: ProcessingTicket, message: impl Into<String>) {
        self.loading = false;
        if ticket.0 == self.generation {
            self.generated = None;
            self.error = Some(message.into());
        }
    }

    /// Returns `true` when the process trigger should be enabled.
    pub fn can_process(&self) -> bool {
        self.original.is_some() && !self.loading
    }

    /// Returns `true` when the download trigger should be shown.
    pub fn can_download(&self) -> bool {
        self.generated.is_some() && !self.loading
    }

    /// Returns the process trigger label for the current state.
    pub fn process_button_label(&self) -> &'static str {
        if self.loading {
            PROCESS_LABEL_BUSY
        } else {
            PROCESS_LABEL_READY
        }
    }

    /// Decides what the result pane renders.
    pub fn result_pane(&self) -> ResultPane<'_> {
        if self.loading {
            ResultPane::Loading
        } else if let Some(generated) = &self.generated {
            ResultPane::Image(generated)
        } else {
            ResultPane::Placeholder
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
