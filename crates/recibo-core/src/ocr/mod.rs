//! Seam to the external text-recognition engine.
//!
//! The engine itself (an OCR service or library) is an external
//! collaborator: the pipeline only consumes the text blob it yields. The
//! trait here lets callers plug in any engine while keeping the extraction
//! core independent of image handling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RecognitionError;

/// Text produced by a recognition engine for one receipt image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedText {
    /// The recognized text, in the original script and case.
    pub text: String,

    /// Language hint the engine was run with (e.g. "spa").
    pub language: String,
}

impl RecognizedText {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }
}

/// Incremental progress reported during a recognition call.
#[derive(Debug, Clone)]
pub struct RecognitionProgress {
    /// Engine-defined status, e.g. "recognizing text".
    pub status: String,

    /// Completion fraction in `0.0..=1.0`.
    pub progress: f32,
}

/// Callback invoked with incremental recognition progress.
pub type ProgressSink<'a> = dyn Fn(RecognitionProgress) + 'a;

/// A text-recognition engine mapping a receipt image to text.
///
/// Recognition is the only long-running step of the pipeline and its only
/// hard failure mode: an engine error means there is no text to extract
/// from, and the caller should prompt for a retry.
pub trait RecognitionEngine {
    /// Recognize text in the image at `path`.
    fn recognize(
        &self,
        path: &Path,
        on_progress: Option<&ProgressSink>,
    ) -> Result<RecognizedText, RecognitionError>;
}
