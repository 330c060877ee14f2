pub mod api;

use futures::future::BoxFuture;

use crate::core::{
    LingotError,
    TranslationRequest,
    TranslationResult,
};

pub use api::AgentApi;

/// The one seam between the UI and the wire. The task manager dispatches
/// through this trait, so tests can settle calls without a server.
pub trait TranslateCall: Send + Sync {
    /// Perform exactly one outbound call for the given request. No retries,
    /// no caching; exclusivity of in-flight calls is the session's job.
    fn invoke(
        &self,
        request: TranslationRequest,
    ) -> BoxFuture<'static, Result<TranslationResult, LingotError>>;

    /// Cheap reachability probe for the status indicator.
    fn health(&self) -> BoxFuture<'static, Result<(), LingotError>>;
}
