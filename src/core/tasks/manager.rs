use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    agent::TranslateCall,
    core::TranslationRequest,
};

/// Runs agent calls off the UI thread and hands the settled results back
/// over a channel. One runtime is shared by every spawned call.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Dispatch one translate call. The session has already entered
    /// `Loading`, so nothing here guards against overlap.
    pub fn translate(&self, client: Arc<dyn TranslateCall>, request: TranslationRequest) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { client.invoke(request).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::Translation(result));
        });
    }

    pub fn check_agent_connection(&self, client: Arc<dyn TranslateCall>) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let connected = runtime.block_on(async { client.health().await.is_ok() });

            let _ = sender.send(TaskResult::AgentConnection(connected));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use futures::future::BoxFuture;

    use super::*;
    use crate::core::{
        Language,
        LingotError,
        Model,
        TranslationResult,
    };

    struct StubCall {
        fail_with: Option<&'static str>,
    }

    impl TranslateCall for StubCall {
        fn invoke(
            &self,
            request: TranslationRequest,
        ) -> BoxFuture<'static, Result<TranslationResult, LingotError>> {
            let fail_with = self.fail_with;
            Box::pin(async move {
                match fail_with {
                    Some(message) => Err(LingotError::Agent(message.to_string())),
                    None => Ok(TranslationResult {
                        translation: format!("[{}] {}", request.to_language, request.text),
                        tokens: 12,
                        translation_count: 1,
                        history: Vec::new(),
                    }),
                }
            })
        }

        fn health(&self) -> BoxFuture<'static, Result<(), LingotError>> {
            let fail = self.fail_with.is_some();
            Box::pin(async move {
                if fail {
                    Err(LingotError::Agent("unreachable".to_string()))
                } else {
                    Ok(())
                }
            })
        }
    }

    fn sample_request() -> TranslationRequest {
        TranslationRequest {
            text: "Hello, how are you today?".to_string(),
            to_language: Language::Spanish,
            model: Model::Gpt5Nano,
        }
    }

    fn wait_for_result(manager: &mut TaskManager) -> TaskResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = manager.poll_results().pop() {
                return result;
            }
            if Instant::now() > deadline {
                panic!("task never settled");
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn translate_reports_success_over_the_channel() {
        let mut manager = TaskManager::new();
        manager.translate(Arc::new(StubCall { fail_with: None }), sample_request());

        match wait_for_result(&mut manager) {
            TaskResult::Translation(Ok(result)) => {
                assert_eq!(result.translation, "[Spanish] Hello, how are you today?");
            }
            other => panic!("expected successful translation, got {:?}", other),
        }
    }

    #[test]
    fn translate_flattens_errors_to_display_strings() {
        let mut manager = TaskManager::new();
        manager
            .translate(Arc::new(StubCall { fail_with: Some("Upstream timeout") }), sample_request());

        match wait_for_result(&mut manager) {
            TaskResult::Translation(Err(message)) => assert_eq!(message, "Upstream timeout"),
            other => panic!("expected failed translation, got {:?}", other),
        }
    }

    #[test]
    fn connection_check_reports_reachability() {
        let mut manager = TaskManager::new();
        manager.check_agent_connection(Arc::new(StubCall { fail_with: Some("down") }));

        match wait_for_result(&mut manager) {
            TaskResult::AgentConnection(connected) => assert!(!connected),
            other => panic!("expected connection status, got {:?}", other),
        }
    }
}
