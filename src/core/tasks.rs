use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use crate::{
    content,
    core::models::ProjectRecord,
    persistence::StoreConfig,
};

#[derive(Debug)]
pub enum TaskResult {
    ProjectsLoaded { generation: u64, result: Result<Vec<ProjectRecord>, String> },
}

/// Runs the content-store fetch off the GUI thread. Each fetch gets a
/// fresh generation number; results from superseded fetches are stale
/// and must be dropped by the receiver.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    generation: u64,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender, generation: 0 }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Issues the catalog query in the background and returns the
    /// generation number of this fetch.
    pub fn fetch_projects(&mut self, config: StoreConfig) -> u64 {
        self.generation += 1;
        let generation = self.generation;

        let sender = self.sender.clone();
        let runtime = self.runtime.clone();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                content::api::fetch_projects(&config).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::ProjectsLoaded { generation, result });
        });

        generation
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reissued_fetch_supersedes_the_previous_generation() {
        let mut manager = TaskManager::new();
        let config = StoreConfig::default();

        let first = manager.fetch_projects(config.clone());
        let second = manager.fetch_projects(config);

        assert_ne!(first, second);
        assert!(!manager.is_current(first));
        assert!(manager.is_current(second));
    }
}
