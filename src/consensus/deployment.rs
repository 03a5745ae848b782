// SPDX-License-Identifier: CC0-1.0

//! Version-bits consensus rule deployments.
//!
//! Every network carries exactly one [`ConsensusDeployment`] per
//! [`DeploymentId`]. This module only describes the deployments; tracking
//! signalling and activation state is left to chain validation.
//!

use core::fmt;
use core::ops::Index;

use crate::consensus::params::Params;

/// Identifies a consensus rule change deployed through version bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeploymentId {
    /// Dummy deployment used for testing.
    TestDummy,
    /// Dummy deployment with a custom threshold and a minimum activation
    /// height, used for testing.
    TestDummyMinActivation,
    /// Relative lock-time rules: BIP 68, BIP 112 and BIP 113.
    Csv,
    /// Segregated witness: BIP 141, BIP 143 and BIP 147.
    Segwit,
    /// Taproot: BIP 340, BIP 341 and BIP 342.
    Taproot,
}

impl DeploymentId {
    /// Every deployment identifier, in table order.
    pub const ALL: [DeploymentId; 5] = [
        DeploymentId::TestDummy,
        DeploymentId::TestDummyMinActivation,
        DeploymentId::Csv,
        DeploymentId::Segwit,
        DeploymentId::Taproot,
    ];

    /// Returns the deployment's name as Bitcoin Core reports it.
    pub fn name(self) -> &'static str {
        match self {
            DeploymentId::TestDummy => "testdummy",
            DeploymentId::TestDummyMinActivation => "testdummy-min-activation",
            DeploymentId::Csv => "csv",
            DeploymentId::Segwit => "segwit",
            DeploymentId::Taproot => "taproot",
        }
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

/// Parameters of a single version-bits deployment.
///
/// The signalling window opens and closes according to the median time of
/// past blocks. A `None` start time means the deployment is always available
/// for signalling and a `None` expire time means it never times out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConsensusDeployment {
    /// Bit position in the block version used for signalling.
    pub bit_number: u8,
    /// Median time (unix seconds) at which signalling may begin.
    pub start_time: Option<u64>,
    /// Median time (unix seconds) after which the deployment fails.
    pub expire_time: Option<u64>,
    /// Number of signalling blocks per confirmation window required to lock
    /// in, overriding the network's
    /// [`rule_change_activation_threshold`](Params::rule_change_activation_threshold).
    pub custom_activation_threshold: Option<u32>,
    /// Lowest block height at which the rules may become active, regardless
    /// of when signalling locked in. Zero means any height.
    pub min_activation_height: u32,
}

impl ConsensusDeployment {
    /// A deployment signalled on `bit_number` between the two median times.
    pub const fn median_time(bit_number: u8, start_time: u64, expire_time: u64) -> Self {
        ConsensusDeployment {
            bit_number,
            start_time: Some(start_time),
            expire_time: Some(expire_time),
            custom_activation_threshold: None,
            min_activation_height: 0,
        }
    }

    /// A deployment signalled on `bit_number` that is always available and
    /// never expires.
    pub const fn always_available(bit_number: u8) -> Self {
        ConsensusDeployment {
            bit_number,
            start_time: None,
            expire_time: None,
            custom_activation_threshold: None,
            min_activation_height: 0,
        }
    }

    /// Overrides the network's activation threshold for this deployment.
    pub const fn with_custom_threshold(mut self, threshold: u32) -> Self {
        self.custom_activation_threshold = Some(threshold);
        self
    }

    /// Prevents activation below `height`.
    pub const fn with_min_activation_height(mut self, height: u32) -> Self {
        self.min_activation_height = height;
        self
    }

    /// Number of signalling blocks per confirmation window this deployment
    /// needs on the given network.
    pub fn activation_threshold(&self, params: &Params) -> u32 {
        self.custom_activation_threshold.unwrap_or(params.rule_change_activation_threshold)
    }

    /// The block version mask this deployment signals with.
    pub fn mask(&self) -> u32 { 1 << self.bit_number }
}

/// The deployment table of a network, keyed by [`DeploymentId`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Deployments {
    /// See [`DeploymentId::TestDummy`].
    pub test_dummy: ConsensusDeployment,
    /// See [`DeploymentId::TestDummyMinActivation`].
    pub test_dummy_min_activation: ConsensusDeployment,
    /// See [`DeploymentId::Csv`].
    pub csv: ConsensusDeployment,
    /// See [`DeploymentId::Segwit`].
    pub segwit: ConsensusDeployment,
    /// See [`DeploymentId::Taproot`].
    pub taproot: ConsensusDeployment,
}

impl Deployments {
    /// Returns the deployment registered under `id`.
    pub fn get(&self, id: DeploymentId) -> &ConsensusDeployment {
        match id {
            DeploymentId::TestDummy => &self.test_dummy,
            DeploymentId::TestDummyMinActivation => &self.test_dummy_min_activation,
            DeploymentId::Csv => &self.csv,
            DeploymentId::Segwit => &self.segwit,
            DeploymentId::Taproot => &self.taproot,
        }
    }

    /// Iterates over `(id, deployment)` pairs in [`DeploymentId::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (DeploymentId, &ConsensusDeployment)> + '_ {
        DeploymentId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

impl Index<DeploymentId> for Deployments {
    type Output = ConsensusDeployment;

    fn index(&self, id: DeploymentId) -> &ConsensusDeployment { self.get(id) }
}
