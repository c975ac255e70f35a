//! Destination chain identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the bridge destination chain, as understood by the bridge pallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u8);

impl ChainId {
    /// Ethereum mainnet as registered with the bridge.
    pub const ETHEREUM: Self = Self(2);

    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Human-readable name for the chains the bridge knows about.
    pub fn name(&self) -> &'static str {
        match self.0 {
            2 => "ethereum",
            _ => "unknown",
        }
    }
}

impl Default for ChainId {
    fn default() -> Self {
        Self::ETHEREUM
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}
