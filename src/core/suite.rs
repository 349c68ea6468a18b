//! Registered case tree
//!
//! `Suite` implements `CaseRegistrar` by keeping a stack of open groups;
//! closing a group attaches it to its parent. `finish` hands back the root.

use std::sync::Arc;
use crate::core::{CaseRegistrar, ExecutionRequest, SwapExecutor};
use crate::models::TestCase;
use crate::utils::Result;

/// One leaf: a resolved case bound to the executor that will run it
#[derive(Clone)]
pub struct RegisteredCase {
    pub label: String,
    pub request: ExecutionRequest,
    executor: Arc<dyn SwapExecutor>,
}

impl RegisteredCase {
    pub fn new(request: ExecutionRequest, executor: Arc<dyn SwapExecutor>) -> Self {
        Self {
            label: request.case.label(),
            request,
            executor,
        }
    }

    pub fn case(&self) -> &TestCase {
        &self.request.case
    }

    pub fn executor_name(&self) -> &'static str {
        self.executor.name()
    }

    /// Runs the swap exactly once
    pub async fn run(&self) -> Result<()> {
        self.executor.execute(&self.request).await
    }
}

impl std::fmt::Debug for RegisteredCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredCase")
            .field("label", &self.label)
            .field("executor", &self.executor.name())
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SuiteNode {
    pub name: String,
    pub children: Vec<SuiteNode>,
    pub cases: Vec<RegisteredCase>,
}

impl SuiteNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            cases: Vec::new(),
        }
    }

    /// Number of cases in this subtree
    pub fn case_count(&self) -> usize {
        self.cases.len() + self.children.iter().map(SuiteNode::case_count).sum::<usize>()
    }

    pub fn child(&self, name: &str) -> Option<&SuiteNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Walk a chain of group names from this node
    pub fn find(&self, path: &[&str]) -> Option<&SuiteNode> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// All cases in registration order, each with its group path
    pub fn flatten(&self) -> Vec<(Vec<String>, &RegisteredCase)> {
        let mut out = Vec::new();
        self.collect(&mut Vec::new(), &mut out);
        out
    }

    fn collect<'a>(&'a self, path: &mut Vec<String>, out: &mut Vec<(Vec<String>, &'a RegisteredCase)>) {
        path.push(self.name.clone());
        for case in &self.cases {
            out.push((path.clone(), case));
        }
        for child in &self.children {
            child.collect(path, out);
        }
        path.pop();
    }

    /// Indented outline, one line per group and case
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(0, &mut out);
        out
    }

    fn write_outline(&self, depth: usize, out: &mut String) {
        out.push_str(&format!("{}{}\n", "  ".repeat(depth), self.name));
        for case in &self.cases {
            out.push_str(&format!(
                "{}- {} [{}]\n",
                "  ".repeat(depth + 1),
                case.case().pair_label(),
                case.case().amount
            ));
        }
        for child in &self.children {
            child.write_outline(depth + 1, out);
        }
    }
}

/// Registration target that builds a `SuiteNode` tree
#[derive(Debug)]
pub struct Suite {
    stack: Vec<SuiteNode>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            stack: vec![SuiteNode::new(name)],
        }
    }

    /// Close any groups left open and return the root
    pub fn finish(mut self) -> SuiteNode {
        while self.stack.len() > 1 {
            self.close_group();
        }
        self.stack.pop().unwrap_or_default()
    }

    fn close_group(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(node) = self.stack.pop() {
            if let Some(parent) = self.stack.last_mut() {
                parent.children.push(node);
            }
        }
    }
}

impl CaseRegistrar for Suite {
    fn describe<F>(&mut self, name: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.stack.push(SuiteNode::new(name));
        body(self);
        self.close_group();
    }

    fn it(&mut self, case: RegisteredCase) {
        if let Some(group) = self.stack.last_mut() {
            group.cases.push(case);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_nests_groups() {
        let mut suite = Suite::new("root");
        suite.describe("a", |s| {
            s.describe("b", |_| {});
            s.describe("c", |_| {});
        });
        suite.describe("d", |_| {});

        let root = suite.finish();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].name, "a");
        assert_eq!(root.children[0].children.len(), 2);
        assert!(root.find(&["a", "c"]).is_some());
        assert!(root.find(&["d", "a"]).is_none());
        assert_eq!(root.case_count(), 0);
    }

    #[test]
    fn test_outline_lists_groups() {
        let mut suite = Suite::new("Algebra");
        suite.describe("QuickSwapV3", |_| {});
        let outline = suite.finish().outline();
        assert_eq!(outline, "Algebra\n  QuickSwapV3\n");
    }
}
