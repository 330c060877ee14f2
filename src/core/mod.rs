pub mod errors;
pub mod models;
pub mod session;
pub mod tasks;

pub use errors::LingotError;
pub use models::{
    HistoryEntry,
    Language,
    Model,
    TranslationRequest,
    TranslationResult,
};
pub use session::TranslateSession;
