//! Swap test-matrix expansion
//!
//! A `Scenario` names a token pair on one network. The builder expands it,
//! for every (side, contract method) pair, into four directed cases:
//! A -> B, B -> A, native -> A and A -> native.

mod side_methods;
mod scenario;
mod builder;

pub use side_methods::{SideEntry, SideMethods};
pub use scenario::{parse_amount, Scenario};
pub use builder::{is_untestable_combination, Leg, MatrixBuilder, MethodGroup, SideGroup};
