use crate::core::TranslationResult;

/// Settled background work, drained by the UI once per frame. Errors are
/// flattened to display strings before they cross the channel.
#[derive(Debug, Clone)]
pub enum TaskResult {
    Translation(Result<TranslationResult, String>),
    AgentConnection(bool),
}
