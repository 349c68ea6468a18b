use serde::{Deserialize, Serialize};
use crate::models::{ContractMethod, SwapSide};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideEntry {
    pub side: SwapSide,
    pub methods: Vec<ContractMethod>,
}

/// Ordered mapping from swap side to the contract methods exercised on it.
///
/// Insertion order is kept. A side appears at most once and each method at
/// most once per side; repeated inserts merge into the first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SideEntry>", into = "Vec<SideEntry>")]
pub struct SideMethods {
    entries: Vec<SideEntry>,
}

impl SideMethods {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn sell(methods: impl IntoIterator<Item = ContractMethod>) -> Self {
        Self::new().with(SwapSide::Sell, methods)
    }

    pub fn with(mut self, side: SwapSide, methods: impl IntoIterator<Item = ContractMethod>) -> Self {
        self.insert(side, methods);
        self
    }

    pub fn insert(&mut self, side: SwapSide, methods: impl IntoIterator<Item = ContractMethod>) {
        let idx = match self.entries.iter().position(|e| e.side == side) {
            Some(idx) => idx,
            None => {
                self.entries.push(SideEntry { side, methods: Vec::new() });
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[idx];
        for method in methods {
            if !entry.methods.contains(&method) {
                entry.methods.push(method);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SwapSide, &[ContractMethod])> {
        self.entries.iter().map(|e| (e.side, e.methods.as_slice()))
    }

    pub fn methods_for(&self, side: SwapSide) -> &[ContractMethod] {
        self.entries
            .iter()
            .find(|e| e.side == side)
            .map(|e| e.methods.as_slice())
            .unwrap_or(&[])
    }

    /// Number of (side, method) pairs
    pub fn pair_count(&self) -> usize {
        self.entries.iter().map(|e| e.methods.len()).sum()
    }
}

/// Direct aggregator swap on the sell side only
impl Default for SideMethods {
    fn default() -> Self {
        Self::sell([ContractMethod::SwapExactAmountIn])
    }
}

impl From<Vec<SideEntry>> for SideMethods {
    fn from(entries: Vec<SideEntry>) -> Self {
        let mut out = Self::new();
        for entry in entries {
            out.insert(entry.side, entry.methods);
        }
        out
    }
}

impl From<SideMethods> for Vec<SideEntry> {
    fn from(value: SideMethods) -> Self {
        value.entries
    }
}
