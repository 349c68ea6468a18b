//! Executes a registered suite
//!
//! Every case is an independent tokio task. A semaphore bounds how many
//! run at once; a failing case never affects its siblings.

mod plan;
mod report;

pub use plan::{plan_suite, ScenarioFailure, SuitePlan};
pub use report::{CaseOutcome, CaseStatus, SuiteReport};

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use crate::core::SuiteNode;

pub const DEFAULT_CONCURRENCY: usize = 4;

pub struct MatrixRunner {
    concurrency: usize,
}

impl MatrixRunner {
    pub fn new() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// At least one case runs at a time
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn run(&self, suite: &SuiteNode) -> SuiteReport {
        let started = Instant::now();
        let cases = suite.flatten();
        tracing::info!("Running {} cases ({} at a time)", cases.len(), self.concurrency);

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        // filled by index; a slot left empty means the task itself was lost
        let mut outcomes: Vec<Option<CaseOutcome>> = vec![None; cases.len()];
        let pending: Vec<(Vec<String>, String, String)> = cases
            .iter()
            .map(|(path, case)| (path.clone(), case.label.clone(), case.executor_name().to_string()))
            .collect();

        for (index, (path, case)) in cases.into_iter().enumerate() {
            let case = case.clone();
            let semaphore = semaphore.clone();

            tasks.spawn(async move {
                // the semaphore is never closed
                let _permit = semaphore.acquire_owned().await.ok();
                let case_started = Instant::now();
                let label = case.label.clone();
                let executor = case.executor_name().to_string();

                tracing::debug!("▶ {}", label);
                // separate task so an executor panic fails only this case
                let status = match tokio::spawn(async move { case.run().await }).await {
                    Ok(Ok(())) => {
                        tracing::info!("✅ {}", label);
                        CaseStatus::Passed
                    }
                    Ok(Err(e)) => {
                        tracing::warn!("❌ {}: {}", label, e);
                        CaseStatus::Failed(e.to_string())
                    }
                    Err(e) => {
                        let reason = join_failure(e);
                        tracing::warn!("❌ {}: {}", label, reason);
                        CaseStatus::Failed(reason)
                    }
                };

                (index, CaseOutcome {
                    path,
                    label,
                    executor,
                    status,
                    duration_ms: case_started.elapsed().as_millis() as u64,
                })
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => outcomes[index] = Some(outcome),
                Err(e) => tracing::error!("Case task aborted: {}", e),
            }
        }

        let outcomes = outcomes
            .into_iter()
            .zip(pending)
            .map(|(outcome, (path, label, executor))| {
                outcome.unwrap_or_else(|| CaseOutcome {
                    path,
                    label,
                    executor,
                    status: CaseStatus::Failed("aborted before reporting".to_string()),
                    duration_ms: 0,
                })
            })
            .collect();

        SuiteReport::new(
            suite.name.clone(),
            outcomes,
            started.elapsed().as_millis() as u64,
        )
    }
}

fn join_failure(error: JoinError) -> String {
    if !error.is_panic() {
        return format!("cancelled: {}", error);
    }
    let payload = error.into_panic();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    format!("panicked: {}", message)
}

impl Default for MatrixRunner {
    fn default() -> Self {
        Self::new()
    }
}
