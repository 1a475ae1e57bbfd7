use serde::Serialize;

use crate::blockchain::PowAlgo;

/// Solo target spacings of the algorithms, valid from `start_height` on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpacingEpoch {
    pub start_height: u32,
    pub sha256d: i64,
    pub neoscrypt: i64,
}

impl SpacingEpoch {
    pub fn spacing(&self, algo: PowAlgo) -> i64 {
        match algo {
            PowAlgo::Sha256d => self.sha256d,
            PowAlgo::Neoscrypt => self.neoscrypt,
        }
    }
}

const MAINNET_SPACING: &[SpacingEpoch] = &[SpacingEpoch { start_height: 0, sha256d: 150, neoscrypt: 150 }];
const TESTNET_SPACING: &[SpacingEpoch] = &[SpacingEpoch { start_height: 0, sha256d: 150, neoscrypt: 150 }];
const REGTEST_SPACING: &[SpacingEpoch] = &[SpacingEpoch { start_height: 0, sha256d: 150, neoscrypt: 150 }];

/// Height dependent consensus rules of a network
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ConsensusRules {
    MainNet,
    TestNet,
    RegTest,
}

impl ConsensusRules {
    pub fn spacing_schedule(&self) -> &'static [SpacingEpoch] {
        match self {
            ConsensusRules::MainNet => MAINNET_SPACING,
            ConsensusRules::TestNet => TESTNET_SPACING,
            ConsensusRules::RegTest => REGTEST_SPACING,
        }
    }

    /// Average block interval of `algo` alone at `height`
    pub fn target_spacing(&self, algo: PowAlgo, height: u32) -> i64 {
        epoch_at(self.spacing_schedule(), height).spacing(algo)
    }
}

/// Finds the epoch in effect at `height`. The schedule is sorted and must start at height 0.
pub fn epoch_at(schedule: &[SpacingEpoch], height: u32) -> &SpacingEpoch {
    schedule
        .iter()
        .rev()
        .find(|epoch| epoch.start_height <= height)
        .expect("Spacing schedule must start at height 0")
}
