//! Transfer-tax parameters attached to every case

use serde::{Deserialize, Serialize};

/// Fee-on-transfer behaviour split by token leg and transfer context.
///
/// `src_fee`/`dest_fee` describe plain ERC20 transfers, `src_dex_fee`/`dest_dex_fee`
/// describe transfers routed through the DEX pool. Values are basis points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferFeeParams {
    pub src_fee: u64,
    pub dest_fee: u64,
    pub src_dex_fee: u64,
    pub dest_dex_fee: u64,
}

impl TransferFeeParams {
    pub fn new(src_fee: u64, dest_fee: u64, src_dex_fee: u64, dest_dex_fee: u64) -> Self {
        Self {
            src_fee,
            dest_fee,
            src_dex_fee,
            dest_dex_fee,
        }
    }

    /// Only a DEX-context fee on the source token
    pub fn src_dex(fee: u64) -> Self {
        Self {
            src_dex_fee: fee,
            ..Self::default()
        }
    }

    /// Orientation for a reversed leg: the DEX fees trade places, the plain
    /// transfer fees stay where the caller put them.
    pub fn with_dex_fees_swapped(&self) -> Self {
        Self {
            src_dex_fee: self.dest_dex_fee,
            dest_dex_fee: self.src_dex_fee,
            ..*self
        }
    }

    pub fn has_src_dex_fee(&self) -> bool {
        self.src_dex_fee != 0
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl std::fmt::Display for TransferFeeParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "srcFee={} destFee={} srcDexFee={} destDexFee={}",
            self.src_fee, self.dest_fee, self.src_dex_fee, self.dest_dex_fee
        )
    }
}
