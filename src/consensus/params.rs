// SPDX-License-Identifier: CC0-1.0

//! Consensus parameters.
//!
//! This module provides the predefined set of parameters for every supported
//! Bitcoin chain and the registry resolving a network name to them.
//!
//! Each table is built once, on first use or through [`init`], and shared as a
//! `&'static` reference from then on.
//!

use std::time::Duration;

use num_bigint::BigUint;
use once_cell::sync::Lazy;
use tracing::{debug, info, warn};

use crate::blockdata::block::Block;
use crate::blockdata::constants::{
    mainnet_genesis_block, regtest_genesis_block, simnet_genesis_block, testnet_genesis_block,
    MAINNET_GENESIS_HASH, REGTEST_GENESIS_HASH, SIMNET_GENESIS_HASH, TESTNET_GENESIS_HASH,
};
use crate::consensus::deployment::{ConsensusDeployment, Deployments};
use crate::error::Error;
use crate::hash_types::{hash_from_literal, BlockHash};
use crate::network::constants::{Magic, Network};
use crate::util::pow;

/// A DNS seed used to discover peers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnsSeed {
    /// Host name of the seeder.
    pub host: &'static str,
    /// Whether the seeder supports filtering by service flags.
    pub has_filtering: bool,
}

/// A known good block, used to reject forks below it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Checkpoint {
    /// Height of the block.
    pub height: u32,
    /// Hash of the block.
    pub hash: BlockHash,
}

impl Checkpoint {
    fn new(height: u32, hash: &str) -> Self { Checkpoint { height, hash: hash_from_literal(hash) } }
}

/// Parameters that influence chain consensus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// Network for which parameters are valid.
    pub network: Network,
    /// Human-readable name of the chain.
    pub name: &'static str,
    /// Magic bytes identifying the peer-to-peer network.
    pub net: Magic,
    /// Default peer-to-peer port.
    pub default_port: u16,
    /// DNS seeds for peer discovery, empty for private test networks.
    pub dns_seeds: Vec<DnsSeed>,

    /// First block of the chain.
    pub genesis_block: Block,
    /// Hash of [`genesis_block`](Self::genesis_block).
    pub genesis_hash: BlockHash,
    /// Highest permitted proof-of-work target, i.e. the lowest difficulty.
    pub pow_limit: BigUint,
    /// [`pow_limit`](Self::pow_limit) in compact form.
    pub pow_limit_bits: u32,
    /// Block height at which BIP 34 becomes active.
    pub bip0034_height: u32,
    /// Block height at which BIP 65 becomes active.
    pub bip0065_height: u32,
    /// Block height at which BIP 66 becomes active.
    pub bip0066_height: u32,
    /// Number of confirmations before a coinbase output can be spent.
    pub coinbase_maturity: u16,
    /// Number of blocks between block subsidy halvings.
    pub subsidy_reduction_interval: u32,
    /// Desired amount of time between difficulty retargets.
    pub target_timespan: Duration,
    /// Desired amount of time to mine one block.
    pub target_time_per_block: Duration,
    /// Bounds a single retarget to between 1/factor and factor times the
    /// previous difficulty.
    pub retarget_adjustment_factor: i64,
    /// Whether a block may use the minimum difficulty once
    /// [`min_diff_reduction_time`](Self::min_diff_reduction_time) has passed
    /// without a block.
    pub reduce_min_difficulty: bool,
    /// Wait after which a minimum difficulty block is allowed.
    pub min_diff_reduction_time: Duration,
    /// Whether CPU mining is allowed.
    pub generate_supported: bool,

    /// Checkpoints ordered from oldest to newest.
    pub checkpoints: Vec<Checkpoint>,

    /// Minimum blocks including miner confirmation of the total of
    /// [`miner_confirmation_window`](Self::miner_confirmation_window) blocks
    /// in a retargeting period, used for BIP 9 deployments.
    /// Examples: 1916 for 95%, 1512 for testchains.
    pub rule_change_activation_threshold: u32,
    /// Number of blocks with the same set of rules.
    pub miner_confirmation_window: u32,
    /// Version-bits deployments.
    pub deployments: Deployments,

    /// Whether the mempool accepts and relays non-standard transactions.
    pub relay_non_std_txs: bool,

    /// Human-readable part for Bech32 encoded segwit addresses (BIP 173).
    pub bech32_hrp_segwit: &'static str,

    /// Version byte of base58 pay-to-pubkey-hash addresses.
    pub pub_key_hash_addr_id: u8,
    /// Version byte of base58 pay-to-script-hash addresses.
    pub script_hash_addr_id: u8,
    /// Version byte of WIF private keys.
    pub private_key_id: u8,
    /// Version byte of base58 pay-to-witness-pubkey-hash addresses.
    pub witness_pub_key_hash_addr_id: u8,
    /// Version byte of base58 pay-to-witness-script-hash addresses.
    pub witness_script_hash_addr_id: u8,

    /// BIP 32 version bytes of extended private keys.
    pub hd_private_key_id: [u8; 4],
    /// BIP 32 version bytes of extended public keys.
    pub hd_public_key_id: [u8; 4],
    /// BIP 44 coin type used in the hierarchical deterministic path.
    pub hd_coin_type: u32,
}

static MAINNET_PARAMS: Lazy<Params> = Lazy::new(mainnet_params);
static TESTNET_PARAMS: Lazy<Params> = Lazy::new(testnet_params);
static SIMNET_PARAMS: Lazy<Params> = Lazy::new(simnet_params);
static REGTEST_PARAMS: Lazy<Params> = Lazy::new(regtest_params);

impl Params {
    /// Returns the parameters of the given network.
    ///
    /// Fails with [`Error::UnsupportedNetwork`] for networks without a table.
    pub fn for_network(network: Network) -> Result<&'static Params, Error> {
        let params: &'static Params = match network {
            Network::Mainnet => &*MAINNET_PARAMS,
            // The stock testnet3 table is deliberately not served; `testnet`
            // selects the fractal test network.
            Network::Testnet => &*TESTNET_PARAMS,
            Network::Simnet => &*SIMNET_PARAMS,
            Network::Regtest => &*REGTEST_PARAMS,
            Network::Signet => {
                warn!(network = %network, "no chain parameters for network");
                return Err(Error::unsupported_network(network.name()));
            }
        };
        debug!(network = %network, chain = params.name, "resolved chain parameters");
        Ok(params)
    }

    /// Returns the checkpoint with the greatest height, if any.
    pub fn latest_checkpoint(&self) -> Option<&Checkpoint> { self.checkpoints.last() }

    /// Returns the checkpoint at exactly `height`, if any.
    pub fn checkpoint_at(&self, height: u32) -> Option<&Checkpoint> {
        self.checkpoints
            .binary_search_by_key(&height, |c| c.height)
            .ok()
            .map(|i| &self.checkpoints[i])
    }

    /// Number of blocks between difficulty retargets.
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        self.target_timespan.as_secs() / self.target_time_per_block.as_secs()
    }
}

/// Resolves a network name to its consensus parameters.
///
/// Unknown names, and names of networks without a parameter table, fail with
/// [`Error::UnsupportedNetwork`] listing every known name.
///
/// # Examples
///
/// ```rust
/// let params = netparams::resolve("mainnet").unwrap();
/// assert_eq!(params.default_port, 8333);
/// assert!(netparams::resolve("doesnotexist").is_err());
/// ```
pub fn resolve(name: &str) -> Result<&'static Params, Error> {
    match name.parse::<Network>() {
        Ok(network) => Params::for_network(network),
        Err(_) => {
            warn!(network = name, "unknown network name");
            Err(Error::unsupported_network(name))
        }
    }
}

/// Builds every parameter table and checks each genesis block against its
/// declared hash.
///
/// Meant to be called once at startup, before any other thread reads the
/// tables.
///
/// # Panics
///
/// Panics if a hard-coded literal is malformed or a genesis block does not
/// hash to its declared value. Either is a defect in this crate.
pub fn init() {
    for network in Network::ALL.into_iter().filter(|n| n.is_supported()) {
        let params = match Params::for_network(network) {
            Ok(params) => params,
            Err(e) => panic!("{}", e),
        };
        let computed = params.genesis_block.block_hash();
        if computed != params.genesis_hash {
            panic!(
                "{} genesis block hashes to {}, but {} is declared",
                params.name, computed, params.genesis_hash
            );
        }
    }
    info!("chain parameter tables initialized");
}

fn mainnet_params() -> Params {
    Params {
        network: Network::Mainnet,
        name: "mainnet",
        net: Magic::MAINNET,
        default_port: 8333,
        dns_seeds: vec![
            DnsSeed { host: "seed.bitcoin.sipa.be", has_filtering: true },
            DnsSeed { host: "dnsseed.bluematt.me", has_filtering: true },
            DnsSeed { host: "dnsseed.bitcoin.dashjr.org", has_filtering: false },
            DnsSeed { host: "seed.bitcoinstats.com", has_filtering: true },
            DnsSeed { host: "seed.bitnodes.io", has_filtering: false },
            DnsSeed { host: "seed.bitcoin.jonasschnelli.ch", has_filtering: true },
        ],

        genesis_block: mainnet_genesis_block(),
        genesis_hash: hash_from_literal(MAINNET_GENESIS_HASH),
        pow_limit: pow::mainnet_pow_limit(),
        pow_limit_bits: 0x1d00ffff,
        bip0034_height: 227931, // 000000000000024b89b42a942fe0d9fea3bb44ab7bd1b19115dd6a759c0808b8
        bip0065_height: 388381, // 000000000000000004c2b624ed5d7756c508d90fd0da2c7c679febfa6c4735f0
        bip0066_height: 363725, // 00000000000000000379eaa19dce8c9b722d46ae6a57c2f1a988119488b50931
        coinbase_maturity: 100,
        subsidy_reduction_interval: 210_000,
        target_timespan: Duration::from_secs(14 * 24 * 60 * 60), // 14 days
        target_time_per_block: Duration::from_secs(10 * 60),    // 10 minutes
        retarget_adjustment_factor: 4,                           // 25% less, 400% more
        reduce_min_difficulty: false,
        min_diff_reduction_time: Duration::ZERO,
        generate_supported: false,

        checkpoints: vec![
            Checkpoint::new(11111, "0000000069e244f73d78e8fd29ba2fd2ed618bd6fa2ee92559f542fdb26e7c1d"),
            Checkpoint::new(33333, "000000002dd5588a74784eaa7ab0507a18ad16a236e7b1ce69f00d7ddfb5d0a6"),
            Checkpoint::new(74000, "0000000000573993a3c9e41ce34471c079dcf5f52a0e824a81e7f953b8661a20"),
            Checkpoint::new(105000, "00000000000291ce28027faea320c8d2b054b2e0fe44a773f3eefb151d6bdc97"),
            Checkpoint::new(134444, "00000000000005b12ffd4cd315cd34ffd4a594f430ac814c91184a0d42d2b0fe"),
            Checkpoint::new(168000, "000000000000099e61ea72015e79632f216fe6cb33d7899acb35b75c8303b763"),
            Checkpoint::new(193000, "000000000000059f452a5f7340de6682a977387c17010ff6e6c3bd83ca8b1317"),
            Checkpoint::new(210000, "000000000000048b95347e83192f69cf0366076336c639f9b7228e9ba171342e"),
            Checkpoint::new(216116, "00000000000001b4f4b433e81ee46494af945cf96014816a4e2370f11b23df4e"),
            Checkpoint::new(225430, "00000000000001c108384350f74090433e7fcf79a606b8e797f065b130575932"),
            Checkpoint::new(250000, "000000000000003887df1f29024b06fc2200b55f8af8f35453d7be294df2d214"),
            Checkpoint::new(267300, "000000000000000a83fbd660e918f218bf37edd92b748ad940483c7c116179ac"),
            Checkpoint::new(279000, "0000000000000001ae8c72a0b0c301f67e3afca10e819efa9041e458e9bd7e40"),
            Checkpoint::new(300255, "0000000000000000162804527c6e9b9f0563a280525f9d08c12041def0a0f3b2"),
            Checkpoint::new(319400, "000000000000000021c6052e9becade189495d1c539aa37c58917305fd15f13b"),
            Checkpoint::new(343185, "0000000000000000072b8bf361d01a6ba7d445dd024203fafc78768ed4368554"),
            Checkpoint::new(352940, "000000000000000010755df42dba556bb72be6a32f3ce0b6941ce4430152c9ff"),
            Checkpoint::new(382320, "00000000000000000a8dc6ed5b133d0eb2fd6af56203e4159789b092defd8ab2"),
            Checkpoint::new(400000, "000000000000000004ec466ce4732fe6f1ed1cddc2ed4b328fff5224276e3f6f"),
            Checkpoint::new(430000, "000000000000000001868b2bb3a285f3cc6b33ea234eb70facf4dcdf22186b87"),
            Checkpoint::new(460000, "000000000000000000ef751bbce8e744ad303c47ece06c8d863e4d417efc258c"),
            Checkpoint::new(490000, "000000000000000000de069137b17b8d5a3dfbd5b145b2dcfb203f15d0c4de90"),
            Checkpoint::new(520000, "0000000000000000000d26984c0229c9f6962dc74db0a6d525f2f1640396f69c"),
            Checkpoint::new(550000, "000000000000000000223b7a2298fb1c6c75fb0efc28a4c56853ff4112ec6bc9"),
            Checkpoint::new(560000, "0000000000000000002c7b276daf6efb2b6aa68e2ce3be67ef925b3264ae7122"),
            Checkpoint::new(563378, "0000000000000000000f1c54590ee18d15ec70e68c8cd4cfbadb1b4f11697eee"),
            Checkpoint::new(597379, "00000000000000000005f8920febd3925f8272a6a71237563d78c2edfdd09ddf"),
            Checkpoint::new(623950, "0000000000000000000f2adce67e49b0b6bdeb9de8b7c3d7e93b21e7fc1e819d"),
            Checkpoint::new(654683, "0000000000000000000b9d2ec5a352ecba0592946514a92f14319dc2b367fc72"),
            Checkpoint::new(691719, "00000000000000000008a89e854d57e5667df88f1cdef6fde2fbca1de5b639ad"),
            Checkpoint::new(724466, "000000000000000000052d314a259755ca65944e68df6b12a067ea8f1f5a7091"),
            Checkpoint::new(751565, "00000000000000000009c97098b5295f7e5f183ac811fb5d1534040adb93cabd"),
            Checkpoint::new(781565, "00000000000000000002b8c04999434c33b8e033f11a977b288f8411766ee61c"),
            Checkpoint::new(800000, "00000000000000000002a7c4c1e48d76c5a37902165a270156b7a8d72728a054"),
            Checkpoint::new(810000, "000000000000000000028028ca82b6aa81ce789e4eb9e0321b74c3cbaf405dd1"),
        ],

        rule_change_activation_threshold: 1916, // 95% of miner_confirmation_window
        miner_confirmation_window: 2016,
        deployments: Deployments {
            test_dummy: ConsensusDeployment::median_time(
                28,
                1199145601, // January 1, 2008 UTC
                1230767999, // December 31, 2008 UTC
            ),
            test_dummy_min_activation: ConsensusDeployment::always_available(22)
                .with_custom_threshold(1815) // Only needs 90% hash rate.
                .with_min_activation_height(100_000), // Can only activate after height 10k.
            csv: ConsensusDeployment::median_time(
                0,
                1462060800, // May 1st, 2016
                1493596800, // May 1st, 2017
            ),
            segwit: ConsensusDeployment::median_time(
                1,
                1479168000, // November 15, 2016 UTC
                1510704000, // November 15, 2017 UTC
            ),
            taproot: ConsensusDeployment::median_time(
                2,
                1619222400, // April 24th, 2021 UTC
                1628640000, // August 11th, 2021 UTC
            )
            .with_custom_threshold(1815) // 90%
            .with_min_activation_height(709_632),
        },

        relay_non_std_txs: false,
        bech32_hrp_segwit: "bc", // always bc for main net

        pub_key_hash_addr_id: 0x00,         // starts with 1
        script_hash_addr_id: 0x05,          // starts with 3
        private_key_id: 0x80,               // starts with 5 (uncompressed) or K (compressed)
        witness_pub_key_hash_addr_id: 0x06, // starts with p2
        witness_script_hash_addr_id: 0x0A,  // starts with 7Xh

        hd_private_key_id: [0x04, 0x88, 0xad, 0xe4], // starts with xprv
        hd_public_key_id: [0x04, 0x88, 0xb2, 0x1e],  // starts with xpub
        hd_coin_type: 0,
    }
}

fn testnet_params() -> Params {
    Params {
        network: Network::Testnet,
        name: "fractaltest",
        net: Magic::from_u32(0xdab5bffa),
        default_port: 18333,
        dns_seeds: vec![DnsSeed { host: "dnsseed.fractalbitcoin.io", has_filtering: true }],

        genesis_block: testnet_genesis_block(),
        genesis_hash: hash_from_literal(TESTNET_GENESIS_HASH),
        pow_limit: pow::mainnet_pow_limit(),
        pow_limit_bits: 0x1d00ffff,
        bip0034_height: 1, // 0000000023b3a96d3484e5abb3755c413e7d41500f8e2a5c3f0dd01299cd8ef8
        bip0065_height: 1, // 00000000007f6655f22f98e72ed80d8b06dc761d5da09df0fa1dc4be4f861eb6
        bip0066_height: 1, // 000000002104c8c45e99a8853285a3b592602a3ccde2b832481da85e9e4ba182
        coinbase_maturity: 100,
        subsidy_reduction_interval: 210_000,
        target_timespan: Duration::from_secs(24 * 60 * 60), // 1 day
        target_time_per_block: Duration::from_secs(10 * 60), // 10 minutes
        retarget_adjustment_factor: 4,                       // 25% less, 400% more
        reduce_min_difficulty: false,
        min_diff_reduction_time: Duration::from_secs(20 * 60), // target_time_per_block * 2
        generate_supported: false,

        checkpoints: vec![],

        rule_change_activation_threshold: 1512, // 75% of miner_confirmation_window
        miner_confirmation_window: 2016,
        deployments: Deployments {
            test_dummy: ConsensusDeployment::median_time(
                28,
                1199145601, // January 1, 2008 UTC
                1230767999, // December 31, 2008 UTC
            ),
            test_dummy_min_activation: ConsensusDeployment::always_available(22)
                .with_custom_threshold(1815) // Only needs 90% hash rate.
                .with_min_activation_height(100_000), // Can only activate after height 10k.
            csv: ConsensusDeployment::median_time(
                0,
                1456790400, // March 1st, 2016
                1493596800, // May 1st, 2017
            ),
            segwit: ConsensusDeployment::median_time(
                1,
                1462060800, // May 1, 2016 UTC
                1493596800, // May 1, 2017 UTC
            ),
            taproot: ConsensusDeployment::median_time(
                2,
                1619222400, // April 24th, 2021 UTC
                1628640000, // August 11th, 2021 UTC
            )
            .with_custom_threshold(1512), // 75%
        },

        relay_non_std_txs: true,
        bech32_hrp_segwit: "tb", // always tb for test net

        pub_key_hash_addr_id: 0x6f,         // starts with m or n
        script_hash_addr_id: 0xc4,          // starts with 2
        private_key_id: 0xef,               // starts with 9 (uncompressed) or c (compressed)
        witness_pub_key_hash_addr_id: 0x03, // starts with QW
        witness_script_hash_addr_id: 0x28,  // starts with T7n

        hd_private_key_id: [0x04, 0x35, 0x83, 0x94], // starts with tprv
        hd_public_key_id: [0x04, 0x35, 0x87, 0xcf],  // starts with tpub
        hd_coin_type: 1,
    }
}

fn regtest_params() -> Params {
    Params {
        network: Network::Regtest,
        name: "regtest",
        net: Magic::REGTEST,
        default_port: 18444,
        dns_seeds: vec![],

        genesis_block: regtest_genesis_block(),
        genesis_hash: hash_from_literal(REGTEST_GENESIS_HASH),
        pow_limit: pow::regtest_pow_limit(),
        pow_limit_bits: 0x207fffff,
        bip0034_height: 100000000, // Not active - Permit ver 1 blocks
        bip0065_height: 1351,      // Used by regression tests
        bip0066_height: 1251,      // Used by regression tests
        coinbase_maturity: 100,
        subsidy_reduction_interval: 150,
        target_timespan: Duration::from_secs(14 * 24 * 60 * 60), // 14 days
        target_time_per_block: Duration::from_secs(10 * 60),    // 10 minutes
        retarget_adjustment_factor: 4,                           // 25% less, 400% more
        reduce_min_difficulty: true,
        min_diff_reduction_time: Duration::from_secs(20 * 60), // target_time_per_block * 2
        generate_supported: true,

        checkpoints: vec![],

        rule_change_activation_threshold: 108, // 75% of miner_confirmation_window
        miner_confirmation_window: 144,
        deployments: Deployments {
            test_dummy: ConsensusDeployment::always_available(28),
            test_dummy_min_activation: ConsensusDeployment::always_available(22)
                .with_custom_threshold(72) // Only needs 50% hash rate.
                .with_min_activation_height(600), // Can only activate after height 600.
            csv: ConsensusDeployment::always_available(0),
            segwit: ConsensusDeployment::always_available(1),
            taproot: ConsensusDeployment::always_available(2).with_custom_threshold(108), // 75%
        },

        relay_non_std_txs: true,
        bech32_hrp_segwit: "bcrt", // always bcrt for reg test net

        pub_key_hash_addr_id: 0x6f,         // starts with m or n
        script_hash_addr_id: 0xc4,          // starts with 2
        private_key_id: 0xef,               // starts with 9 (uncompressed) or c (compressed)
        // No base58 witness address versions are defined for regtest.
        witness_pub_key_hash_addr_id: 0x00,
        witness_script_hash_addr_id: 0x00,

        hd_private_key_id: [0x04, 0x35, 0x83, 0x94], // starts with tprv
        hd_public_key_id: [0x04, 0x35, 0x87, 0xcf],  // starts with tpub
        hd_coin_type: 1,
    }
}

fn simnet_params() -> Params {
    Params {
        network: Network::Simnet,
        name: "simnet",
        net: Magic::SIMNET,
        default_port: 18555,
        dns_seeds: vec![], // NOTE: There must NOT be any seeds.

        genesis_block: simnet_genesis_block(),
        genesis_hash: hash_from_literal(SIMNET_GENESIS_HASH),
        pow_limit: pow::regtest_pow_limit(),
        pow_limit_bits: 0x207fffff,
        bip0034_height: 0, // Always active on simnet
        bip0065_height: 0, // Always active on simnet
        bip0066_height: 0, // Always active on simnet
        coinbase_maturity: 100,
        subsidy_reduction_interval: 210_000,
        target_timespan: Duration::from_secs(14 * 24 * 60 * 60), // 14 days
        target_time_per_block: Duration::from_secs(10 * 60),    // 10 minutes
        retarget_adjustment_factor: 4,                           // 25% less, 400% more
        reduce_min_difficulty: true,
        min_diff_reduction_time: Duration::from_secs(20 * 60), // target_time_per_block * 2
        generate_supported: true,

        checkpoints: vec![],

        rule_change_activation_threshold: 75, // 75% of miner_confirmation_window
        miner_confirmation_window: 100,
        deployments: Deployments {
            test_dummy: ConsensusDeployment::always_available(28),
            test_dummy_min_activation: ConsensusDeployment::always_available(22)
                .with_custom_threshold(50) // Only needs 50% hash rate.
                .with_min_activation_height(600), // Can only activate after height 600.
            csv: ConsensusDeployment::always_available(0),
            segwit: ConsensusDeployment::always_available(1),
            taproot: ConsensusDeployment::always_available(2).with_custom_threshold(75), // 75%
        },

        relay_non_std_txs: true,
        bech32_hrp_segwit: "sb", // always sb for sim net

        pub_key_hash_addr_id: 0x3f,         // starts with S
        script_hash_addr_id: 0x7b,          // starts with s
        private_key_id: 0x64,               // starts with 4 (uncompressed) or F (compressed)
        witness_pub_key_hash_addr_id: 0x19, // starts with Gg
        witness_script_hash_addr_id: 0x28,  // starts with ?

        hd_private_key_id: [0x04, 0x20, 0xb9, 0x00], // starts with sprv
        hd_public_key_id: [0x04, 0x20, 0xbd, 0x3a],  // starts with spub
        hd_coin_type: 115, // ASCII for s
    }
}

#[cfg(test)]
mod tests {
    use num_traits::One;

    use super::*;
    use crate::consensus::deployment::DeploymentId;

    const SUPPORTED: [&str; 4] = ["mainnet", "testnet", "simnet", "regtest"];

    #[test]
    fn genesis_hash_matches_genesis_block() {
        for name in SUPPORTED.iter() {
            let params = resolve(name).unwrap();
            assert_eq!(params.genesis_block.block_hash(), params.genesis_hash, "{}", name);
            assert!(params.genesis_block.check_merkle_root(), "{}", name);
            assert_eq!(params.genesis_block.header.bits, params.pow_limit_bits, "{}", name);
        }
    }

    #[test]
    fn pow_limit_bits_match_pow_limit() {
        for name in SUPPORTED.iter() {
            let params = resolve(name).unwrap();
            assert_eq!(pow::target_to_compact(&params.pow_limit), params.pow_limit_bits, "{}", name);
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        for name in SUPPORTED.iter() {
            let first = resolve(name).unwrap();
            let second = resolve(name).unwrap();
            assert!(std::ptr::eq(first, second));
            assert_eq!(*first, *second);
            assert_eq!(first.network.name(), *name);
        }
    }

    #[test]
    fn fractal_testnet_genesis() {
        let params = resolve("testnet").unwrap();
        assert_eq!(params.name, "fractaltest");
        assert_eq!(
            params.genesis_block.block_hash().to_string(),
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );
        assert_eq!(params.genesis_hash.to_string(), TESTNET_GENESIS_HASH);
    }

    #[test]
    fn fractal_testnet_pow_limit() {
        let params = resolve("testnet").unwrap();
        let expected = BigUint::from(2u32).pow(224) - BigUint::one();
        assert_eq!(params.pow_limit, expected);
        assert_eq!(params.pow_limit_bits, 0x1d00ffff);
    }

    #[test]
    fn fractal_testnet_table() {
        let params = Params::for_network(Network::Testnet).unwrap();
        assert_eq!(params.net, Magic::REGTEST);
        assert_eq!(params.net.to_u32(), 0xdab5bffa);
        assert_eq!(params.default_port, 18333);
        assert_eq!(
            params.dns_seeds,
            vec![DnsSeed { host: "dnsseed.fractalbitcoin.io", has_filtering: true }]
        );
        assert_eq!(
            (params.bip0034_height, params.bip0065_height, params.bip0066_height),
            (1, 1, 1)
        );
        assert_eq!(params.coinbase_maturity, 100);
        assert_eq!(params.subsidy_reduction_interval, 210_000);
        assert_eq!(params.target_timespan, Duration::from_secs(86_400));
        assert_eq!(params.target_time_per_block, Duration::from_secs(600));
        assert_eq!(params.retarget_adjustment_factor, 4);
        assert!(!params.reduce_min_difficulty);
        assert_eq!(params.min_diff_reduction_time, Duration::from_secs(1200));
        assert!(!params.generate_supported);
        assert!(params.checkpoints.is_empty());
        assert_eq!(params.rule_change_activation_threshold, 1512);
        assert_eq!(params.miner_confirmation_window, 2016);
        assert!(params.relay_non_std_txs);
        assert_eq!(params.bech32_hrp_segwit, "tb");
        assert_eq!(params.pub_key_hash_addr_id, 0x6f);
        assert_eq!(params.script_hash_addr_id, 0xc4);
        assert_eq!(params.witness_pub_key_hash_addr_id, 0x03);
        assert_eq!(params.witness_script_hash_addr_id, 0x28);
        assert_eq!(params.private_key_id, 0xef);
        assert_eq!(params.hd_private_key_id, [0x04, 0x35, 0x83, 0x94]);
        assert_eq!(params.hd_public_key_id, [0x04, 0x35, 0x87, 0xcf]);
        assert_eq!(params.hd_coin_type, 1);
        assert_eq!(params.difficulty_adjustment_interval(), 144);
    }

    #[test]
    fn fractal_testnet_deployments() {
        let params = resolve("testnet").unwrap();
        let d = &params.deployments;

        let dummy = &d[DeploymentId::TestDummy];
        assert_eq!(dummy.bit_number, 28);
        assert_eq!(dummy.start_time, Some(1199145601));
        assert_eq!(dummy.expire_time, Some(1230767999));
        assert_eq!(dummy.activation_threshold(params), 1512);

        let min = &d[DeploymentId::TestDummyMinActivation];
        assert_eq!(min.bit_number, 22);
        assert_eq!(min.custom_activation_threshold, Some(1815));
        assert_eq!(min.min_activation_height, 100_000);
        assert_eq!((min.start_time, min.expire_time), (None, None));

        let csv = &d[DeploymentId::Csv];
        assert_eq!(csv.bit_number, 0);
        assert_eq!((csv.start_time, csv.expire_time), (Some(1456790400), Some(1493596800)));

        let segwit = &d[DeploymentId::Segwit];
        assert_eq!(segwit.bit_number, 1);
        assert_eq!((segwit.start_time, segwit.expire_time), (Some(1462060800), Some(1493596800)));

        let taproot = &d[DeploymentId::Taproot];
        assert_eq!(taproot.bit_number, 2);
        assert_eq!((taproot.start_time, taproot.expire_time), (Some(1619222400), Some(1628640000)));
        assert_eq!(taproot.activation_threshold(params), 1512);
        assert_eq!(taproot.min_activation_height, 0);
    }

    #[test]
    fn deployment_bits_are_distinct() {
        for name in SUPPORTED.iter() {
            let params = resolve(name).unwrap();
            let mut bits: Vec<u8> = params.deployments.iter().map(|(_, d)| d.bit_number).collect();
            bits.sort_unstable();
            bits.dedup();
            assert_eq!(bits.len(), DeploymentId::ALL.len(), "{}", name);
            for (_, deployment) in params.deployments.iter() {
                assert!(deployment.activation_threshold(params) <= params.miner_confirmation_window);
            }
        }
    }

    #[test]
    fn unsupported_network() {
        let err = resolve("doesnotexist").unwrap_err();
        let msg = err.to_string();
        for name in ["doesnotexist", "mainnet", "testnet", "simnet", "regtest", "signet"].iter() {
            assert!(msg.contains(name), "{} missing from {}", name, msg);
        }
        match err {
            Error::UnsupportedNetwork { name, supported } => {
                assert_eq!(name, "doesnotexist");
                assert_eq!(supported, vec!["mainnet", "testnet", "simnet", "regtest", "signet"]);
            }
            e => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn signet_is_known_but_unsupported() {
        assert!(matches!(resolve("signet"), Err(Error::UnsupportedNetwork { .. })));
        assert!(Network::Signet.params().is_err());
    }

    #[test]
    fn mainnet_checkpoints() {
        let params = resolve("mainnet").unwrap();
        assert_eq!(params.checkpoints.len(), 35);
        assert!(params.checkpoints.windows(2).all(|w| w[0].height < w[1].height));

        let first = &params.checkpoints[0];
        assert_eq!(first.height, 11111);
        assert_eq!(
            first.hash.to_string(),
            "0000000069e244f73d78e8fd29ba2fd2ed618bd6fa2ee92559f542fdb26e7c1d"
        );
        let latest = params.latest_checkpoint().unwrap();
        assert_eq!(latest.height, 810000);
        assert_eq!(
            latest.hash.to_string(),
            "000000000000000000028028ca82b6aa81ce789e4eb9e0321b74c3cbaf405dd1"
        );

        let cp = params.checkpoint_at(300255).unwrap();
        assert_eq!(
            cp.hash.to_string(),
            "0000000000000000162804527c6e9b9f0563a280525f9d08c12041def0a0f3b2"
        );
        assert!(params.checkpoint_at(267300).is_some());
        assert!(params.checkpoint_at(295000).is_none());
        assert!(params.checkpoint_at(210001).is_none());
        assert!(resolve("regtest").unwrap().latest_checkpoint().is_none());
        assert!(resolve("simnet").unwrap().checkpoints.is_empty());
    }

    #[test]
    fn mainnet_table() {
        let params = resolve("mainnet").unwrap();
        assert_eq!(params.name, "mainnet");
        assert_eq!(params.net, Magic::MAINNET);
        assert_eq!(params.default_port, 8333);
        assert_eq!(params.dns_seeds.len(), 6);
        assert_eq!(
            params.dns_seeds[0],
            DnsSeed { host: "seed.bitcoin.sipa.be", has_filtering: true }
        );
        assert_eq!(
            params.dns_seeds[2],
            DnsSeed { host: "dnsseed.bitcoin.dashjr.org", has_filtering: false }
        );
        assert_eq!(params.genesis_hash.to_string(), MAINNET_GENESIS_HASH);
        assert_eq!(params.pow_limit, pow::max_target(224));
        assert_eq!(params.pow_limit_bits, 0x1d00ffff);
        assert_eq!(
            (params.bip0034_height, params.bip0065_height, params.bip0066_height),
            (227931, 388381, 363725)
        );
        assert_eq!(params.coinbase_maturity, 100);
        assert_eq!(params.subsidy_reduction_interval, 210_000);
        assert_eq!(params.target_timespan, Duration::from_secs(1_209_600));
        assert_eq!(params.target_time_per_block, Duration::from_secs(600));
        assert_eq!(params.retarget_adjustment_factor, 4);
        assert!(!params.reduce_min_difficulty);
        assert_eq!(params.min_diff_reduction_time, Duration::ZERO);
        assert!(!params.generate_supported);
        assert_eq!(params.rule_change_activation_threshold, 1916);
        assert_eq!(params.miner_confirmation_window, 2016);
        assert_eq!(params.difficulty_adjustment_interval(), 2016);

        let d = &params.deployments;
        assert_eq!(d.test_dummy, ConsensusDeployment::median_time(28, 1199145601, 1230767999));
        assert_eq!(d.test_dummy_min_activation.bit_number, 22);
        assert_eq!(d.test_dummy_min_activation.custom_activation_threshold, Some(1815));
        assert_eq!(d.test_dummy_min_activation.min_activation_height, 100_000);
        assert_eq!(d.test_dummy_min_activation.start_time, None);
        assert_eq!(d.csv, ConsensusDeployment::median_time(0, 1462060800, 1493596800));
        assert_eq!(d.segwit, ConsensusDeployment::median_time(1, 1479168000, 1510704000));
        assert_eq!(d.taproot.bit_number, 2);
        assert_eq!((d.taproot.start_time, d.taproot.expire_time), (Some(1619222400), Some(1628640000)));
        assert_eq!(d.taproot.activation_threshold(params), 1815);
        assert_eq!(d.taproot.min_activation_height, 709_632);
        assert_eq!(d.csv.activation_threshold(params), 1916);

        assert!(!params.relay_non_std_txs);
        assert_eq!(params.bech32_hrp_segwit, "bc");
        assert_eq!(params.pub_key_hash_addr_id, 0x00);
        assert_eq!(params.script_hash_addr_id, 0x05);
        assert_eq!(params.private_key_id, 0x80);
        assert_eq!(params.witness_pub_key_hash_addr_id, 0x06);
        assert_eq!(params.witness_script_hash_addr_id, 0x0a);
        assert_eq!(params.hd_private_key_id, [0x04, 0x88, 0xad, 0xe4]);
        assert_eq!(params.hd_public_key_id, [0x04, 0x88, 0xb2, 0x1e]);
        assert_eq!(params.hd_coin_type, 0);
    }

    #[test]
    fn regtest_table() {
        let params = resolve("regtest").unwrap();
        assert_eq!(params.name, "regtest");
        assert_eq!(params.net, Magic::REGTEST);
        assert_eq!(params.default_port, 18444);
        assert!(params.dns_seeds.is_empty());
        assert_eq!(params.genesis_hash.to_string(), REGTEST_GENESIS_HASH);
        assert_eq!(params.pow_limit, pow::max_target(255));
        assert_eq!(params.pow_limit_bits, 0x207fffff);
        assert_eq!(
            (params.bip0034_height, params.bip0065_height, params.bip0066_height),
            (100_000_000, 1351, 1251)
        );
        assert_eq!(params.coinbase_maturity, 100);
        assert_eq!(params.subsidy_reduction_interval, 150);
        assert_eq!(params.target_timespan, Duration::from_secs(1_209_600));
        assert_eq!(params.target_time_per_block, Duration::from_secs(600));
        assert_eq!(params.retarget_adjustment_factor, 4);
        assert!(params.reduce_min_difficulty);
        assert_eq!(params.min_diff_reduction_time, Duration::from_secs(1200));
        assert!(params.generate_supported);
        assert_eq!(params.rule_change_activation_threshold, 108);
        assert_eq!(params.miner_confirmation_window, 144);

        let d = &params.deployments;
        assert_eq!(d.test_dummy, ConsensusDeployment::always_available(28));
        assert_eq!(
            d.test_dummy_min_activation,
            ConsensusDeployment::always_available(22)
                .with_custom_threshold(72)
                .with_min_activation_height(600)
        );
        assert_eq!(d.csv, ConsensusDeployment::always_available(0));
        assert_eq!(d.segwit, ConsensusDeployment::always_available(1));
        assert_eq!(d.taproot, ConsensusDeployment::always_available(2).with_custom_threshold(108));
        assert_eq!(d.segwit.activation_threshold(params), 108);

        assert!(params.relay_non_std_txs);
        assert_eq!(params.bech32_hrp_segwit, "bcrt");
        assert_eq!(params.pub_key_hash_addr_id, 0x6f);
        assert_eq!(params.script_hash_addr_id, 0xc4);
        assert_eq!(params.private_key_id, 0xef);
        // Regtest defines no base58 witness address versions.
        assert_eq!(params.witness_pub_key_hash_addr_id, 0x00);
        assert_eq!(params.witness_script_hash_addr_id, 0x00);
        assert_eq!(params.hd_private_key_id, [0x04, 0x35, 0x83, 0x94]);
        assert_eq!(params.hd_public_key_id, [0x04, 0x35, 0x87, 0xcf]);
        assert_eq!(params.hd_coin_type, 1);
    }

    #[test]
    fn simnet_table() {
        let params = resolve("simnet").unwrap();
        assert_eq!(params.name, "simnet");
        assert_eq!(params.net, Magic::SIMNET);
        assert_eq!(params.default_port, 18555);
        assert!(params.dns_seeds.is_empty());
        assert_eq!(params.genesis_hash.to_string(), SIMNET_GENESIS_HASH);
        assert_eq!(params.pow_limit, pow::max_target(255));
        assert_eq!(params.pow_limit_bits, 0x207fffff);
        assert_eq!(
            (params.bip0034_height, params.bip0065_height, params.bip0066_height),
            (0, 0, 0)
        );
        assert_eq!(params.coinbase_maturity, 100);
        assert_eq!(params.subsidy_reduction_interval, 210_000);
        assert_eq!(params.target_timespan, Duration::from_secs(1_209_600));
        assert_eq!(params.target_time_per_block, Duration::from_secs(600));
        assert_eq!(params.retarget_adjustment_factor, 4);
        assert!(params.reduce_min_difficulty);
        assert_eq!(params.min_diff_reduction_time, Duration::from_secs(1200));
        assert!(params.generate_supported);
        assert_eq!(params.rule_change_activation_threshold, 75);
        assert_eq!(params.miner_confirmation_window, 100);

        let d = &params.deployments;
        assert_eq!(d.test_dummy, ConsensusDeployment::always_available(28));
        assert_eq!(
            d.test_dummy_min_activation,
            ConsensusDeployment::always_available(22)
                .with_custom_threshold(50)
                .with_min_activation_height(600)
        );
        assert_eq!(d.csv, ConsensusDeployment::always_available(0));
        assert_eq!(d.segwit, ConsensusDeployment::always_available(1));
        assert_eq!(d.taproot, ConsensusDeployment::always_available(2).with_custom_threshold(75));

        assert!(params.relay_non_std_txs);
        assert_eq!(params.bech32_hrp_segwit, "sb");
        assert_eq!(params.pub_key_hash_addr_id, 0x3f);
        assert_eq!(params.script_hash_addr_id, 0x7b);
        assert_eq!(params.private_key_id, 0x64);
        assert_eq!(params.witness_pub_key_hash_addr_id, 0x19);
        assert_eq!(params.witness_script_hash_addr_id, 0x28);
        assert_eq!(params.hd_private_key_id, [0x04, 0x20, 0xb9, 0x00]);
        assert_eq!(params.hd_public_key_id, [0x04, 0x20, 0xbd, 0x3a]);
        assert_eq!(params.hd_coin_type, 115);
    }

    #[test]
    fn init_builds_every_table() { init(); }
}
