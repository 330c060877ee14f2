use super::models::{
    HistoryEntry,
    Language,
    Model,
    TranslationRequest,
    TranslationResult,
};

pub const SAMPLE_TEXT: &str = "Hello, how are you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failed,
}

/// All state behind the translate view. The GUI edits the form fields
/// directly; phase, result, and error only change through `begin_submit`
/// and `settle`, so exactly one request can be in flight at a time.
#[derive(Debug)]
pub struct TranslateSession {
    pub text: String,
    pub language: Language,
    pub model: Model,
    phase: Phase,
    result: Option<TranslationResult>,
    error: Option<String>,
}

impl TranslateSession {
    pub fn new() -> Self {
        Self {
            text: SAMPLE_TEXT.to_string(),
            language: Language::Spanish,
            model: Model::Gpt5Nano,
            phase: Phase::Idle,
            result: None,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.text.trim().is_empty()
    }

    /// Snapshot the form into a request and enter `Loading`. Returns `None`
    /// without touching any state when a call is pending or the text is
    /// blank after trimming.
    pub fn begin_submit(&mut self) -> Option<TranslationRequest> {
        if !self.can_submit() {
            return None;
        }

        self.error = None;
        self.phase = Phase::Loading;

        Some(TranslationRequest {
            text: self.text.clone(),
            to_language: self.language,
            model: self.model,
        })
    }

    /// Apply a settled call. Success replaces the result wholesale and
    /// clears the error; failure stores the error and keeps the previous
    /// result so the view can show both.
    pub fn settle(&mut self, outcome: Result<TranslationResult, String>) {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.phase = Phase::Success;
            }
            Err(message) => {
                self.error = Some(message);
                self.phase = Phase::Failed;
            }
        }
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// History rows of the latest result, in server order. Empty until a
    /// call has succeeded.
    pub fn history(&self) -> &[HistoryEntry] {
        self.result.as_ref().map(|r| r.history.as_slice()).unwrap_or(&[])
    }
}

impl Default for TranslateSession {
    fn default() -> Self {
        Self::new()
    }
}
