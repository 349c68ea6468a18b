use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum CaseStatus {
    Passed,
    Failed(String),
}

impl CaseStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseStatus::Passed)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOutcome {
    pub path: Vec<String>,
    pub label: String,
    pub executor: String,
    #[serde(flatten)]
    pub status: CaseStatus,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteReport {
    pub suite: String,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn new(suite: String, outcomes: Vec<CaseOutcome>, duration_ms: u64) -> Self {
        let passed = outcomes.iter().filter(|o| o.status.is_passed()).count();
        Self {
            suite,
            passed,
            failed: outcomes.len() - passed,
            duration_ms,
            outcomes,
        }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.status.is_passed())
    }
}

impl std::fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "═══════════════════════════════════════════════════════════")?;
        writeln!(f, "              SWAP MATRIX REPORT: {}", self.suite)?;
        writeln!(f, "═══════════════════════════════════════════════════════════")?;
        writeln!(f)?;

        let mut group: Option<String> = None;
        for outcome in &self.outcomes {
            // network/side/method prefix is already in the label
            let prefix = outcome.path.iter().skip(1).take(2).cloned().collect::<Vec<_>>().join(" / ");
            if group.as_deref() != Some(prefix.as_str()) {
                writeln!(f, "{}", prefix)?;
                group = Some(prefix);
            }
            match &outcome.status {
                CaseStatus::Passed => writeln!(f, "  🟢 {} ({} ms)", outcome.label, outcome.duration_ms)?,
                CaseStatus::Failed(reason) => writeln!(f, "  🔴 {}\n       {}", outcome.label, reason)?,
            }
        }

        writeln!(f)?;
        writeln!(f, "═══ SUMMARY ═══")?;
        writeln!(f, "Passed: {}/{}", self.passed, self.total())?;
        writeln!(f, "Failed: {}", self.failed)?;
        writeln!(f, "Duration: {:.1}s", self.duration_ms as f64 / 1000.0)?;
        writeln!(f, "═══════════════════════════════════════════════════════════")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(label: &str, status: CaseStatus) -> CaseOutcome {
        CaseOutcome {
            path: vec!["Algebra".into(), "QuickSwapV3".into(), "Polygon".into()],
            label: label.into(),
            executor: "test".into(),
            status,
            duration_ms: 3,
        }
    }

    #[test]
    fn test_counts() {
        let report = SuiteReport::new(
            "Algebra".into(),
            vec![
                outcome("a", CaseStatus::Passed),
                outcome("b", CaseStatus::Failed("reverted".into())),
            ],
            10,
        );
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
        assert_eq!(report.failures().next().unwrap().label, "b");
        assert!(report.to_string().contains("Passed: 1/2"));
    }

    #[test]
    fn test_json_flattens_status() {
        let json = serde_json::to_value(outcome("a", CaseStatus::Failed("boom".into()))).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "boom");
        assert_eq!(json["durationMs"], 3);
    }
}
