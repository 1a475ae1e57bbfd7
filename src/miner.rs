use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::thread;

use chrono::Utc;
use derive_more::Display;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::blockchain::hash_utils::hash_is_good;
use crate::blockchain::{build_genesis, Block, GenesisParams, Hash256, PowAlgo, PowHasher};
use crate::commons::{setup_miner_thread, LOG_TARGET_MINER, MINING_PROGRESS_INTERVAL};

/// Genesis block with a nonce that satisfies its proof-of-work
#[derive(Clone, Debug)]
pub struct MinedGenesis {
    pub block: Block,
    pub nonce: u32,
    pub time: u32,
    pub hash: Hash256,
    pub merkle_root: Hash256,
    pub pow_hash: Hash256,
    pub attempts: u64,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum MineError {
    #[display(fmt = "All nonces tried, no valid proof-of-work found")]
    NonceExhausted,
    #[display(fmt = "Mining was cancelled")]
    Cancelled,
    #[display(fmt = "Hasher for {} cannot mine {} proof-of-work", hasher, block)]
    AlgoMismatch { hasher: PowAlgo, block: PowAlgo },
}

impl std::error::Error for MineError {}

/// Searches genesis nonces on several threads
pub struct GenesisMiner {
    threads: usize,
    start_nonce: u32,
    running: Arc<AtomicBool>,
}

impl GenesisMiner {
    /// Zero threads means one thread per CPU
    pub fn new(threads: usize) -> Self {
        let threads = match threads {
            0 => num_cpus::get(),
            n => n
        };
        GenesisMiner { threads, start_nonce: 0, running: Arc::new(AtomicBool::new(false)) }
    }

    pub fn start_nonce(mut self, nonce: u32) -> Self {
        self.start_nonce = nonce;
        self
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_mining(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Mines the genesis block described by `params` with the current time.
    /// Blocks until a nonce is found, the nonce space runs out or [`GenesisMiner::stop`] is called.
    pub fn mine(&self, params: &GenesisParams, hasher: &dyn PowHasher, pow_limit: &Hash256) -> Result<MinedGenesis, MineError> {
        if hasher.algo() != params.core_algo {
            return Err(MineError::AlgoMismatch { hasher: hasher.algo(), block: params.core_algo });
        }

        let mut params = params.clone();
        params.time = Utc::now().timestamp() as u32;
        let mut block = build_genesis(&params);
        let template = block.pow.init_fake_header(&block.header).clone();

        // A stride over u32::MAX would skip the whole space anyway
        let threads = self.threads.clamp(1, u32::MAX as usize);
        let stride = threads as u32;
        let bits = params.bits;
        let attempts = AtomicU64::new(0);
        let exhausted = AtomicUsize::new(0);
        let found: Mutex<Option<(u32, Hash256)>> = Mutex::new(None);

        info!(target: LOG_TARGET_MINER, "Mining genesis block with time {} on {} threads", params.time, threads);
        self.running.store(true, Ordering::SeqCst);
        thread::scope(|s| {
            for index in 0..threads {
                let running = &self.running;
                let attempts = &attempts;
                let exhausted = &exhausted;
                let found = &found;
                let mut header = template.clone();
                let first = self.start_nonce.checked_add(index as u32);
                s.spawn(move || {
                    setup_miner_thread();
                    let mut next = first;
                    while let Some(nonce) = next {
                        if !running.load(Ordering::Relaxed) {
                            return;
                        }
                        header.nonce = nonce;
                        let hash = hasher.pow_hash(&header);
                        let count = attempts.fetch_add(1, Ordering::Relaxed) + 1;
                        if count % MINING_PROGRESS_INTERVAL == 0 {
                            info!(target: LOG_TARGET_MINER, "Tried {} nonces, currently at {}", count, nonce);
                        }
                        if hash_is_good(&hash, bits, pow_limit) {
                            let mut found = found.lock().unwrap();
                            if found.is_none() {
                                *found = Some((nonce, hash));
                            }
                            running.store(false, Ordering::SeqCst);
                            return;
                        }
                        next = nonce.checked_add(stride);
                    }
                    exhausted.fetch_add(1, Ordering::SeqCst);
                });
            }
        });
        self.running.store(false, Ordering::SeqCst);

        let attempts = attempts.load(Ordering::SeqCst);
        let result = found.into_inner().unwrap();
        match result {
            Some((nonce, pow_hash)) => {
                if let Some(fake_header) = block.pow.fake_header.as_mut() {
                    fake_header.nonce = nonce;
                }
                let mined = MinedGenesis {
                    nonce,
                    time: params.time,
                    hash: block.hash(),
                    merkle_root: block.merkle_root(),
                    pow_hash,
                    attempts,
                    block
                };
                info!(target: LOG_TARGET_MINER, "Found genesis nonce {} after {} attempts, hash {}", nonce, attempts, mined.hash);
                Ok(mined)
            }
            None if exhausted.load(Ordering::SeqCst) == threads => {
                warn!(target: LOG_TARGET_MINER, "Nonce space exhausted after {} attempts", attempts);
                Err(MineError::NonceExhausted)
            }
            None => {
                debug!(target: LOG_TARGET_MINER, "Mining was cancelled after {} attempts", attempts);
                Err(MineError::Cancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::blockchain::{PureHeader, Sha256dHasher};
    use crate::commons::{PREMINE_ADDRESS_REGTEST, TIMESTAMP_TESTNET};
    use crate::Hash160;

    const EASY_LIMIT: &str = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

    /// Stands in for Neoscrypt, the miner does not care what the function is
    struct FakeNeoscrypt;

    impl PowHasher for FakeNeoscrypt {
        fn algo(&self) -> PowAlgo {
            PowAlgo::Neoscrypt
        }

        fn pow_hash(&self, header: &PureHeader) -> Hash256 {
            header.hash()
        }
    }

    /// Never produces a hash below any target
    struct Hopeless;

    impl PowHasher for Hopeless {
        fn algo(&self) -> PowAlgo {
            PowAlgo::Neoscrypt
        }

        fn pow_hash(&self, _header: &PureHeader) -> Hash256 {
            Hash256::new([0xff; 32])
        }
    }

    fn regtest() -> GenesisParams {
        let premine = Hash160::from_hex(PREMINE_ADDRESS_REGTEST).unwrap();
        GenesisParams::new(1300000000, 0, 0x207fffff, TIMESTAMP_TESTNET, premine)
    }

    fn limit() -> Hash256 {
        Hash256::from_hex(EASY_LIMIT).unwrap()
    }

    #[test]
    fn mines_easy_target() {
        let miner = GenesisMiner::new(2);
        let mined = miner.mine(&regtest(), &FakeNeoscrypt, &limit()).unwrap();
        let block = &mined.block;
        assert!(block.pow.check(&block.header, &FakeNeoscrypt, &limit()));
        assert_eq!(block.hash(), mined.hash);
        assert_eq!(block.header.time, mined.time);
        assert_eq!(block.pow.fake_header.as_ref().unwrap().nonce, mined.nonce);
        assert_eq!(block.pow.fake_header.as_ref().unwrap().merkle_root, mined.hash);
        assert!(mined.attempts >= 1);
        assert!(!miner.is_mining());
    }

    #[test]
    fn mines_with_bundled_sha256d() {
        let mut params = regtest();
        params.core_algo = PowAlgo::Sha256d;
        let mined = GenesisMiner::new(1).mine(&params, &Sha256dHasher, &limit()).unwrap();
        assert_eq!(mined.block.pow.algo, PowAlgo::Sha256d);
        assert!(mined.block.pow.check(&mined.block.header, &Sha256dHasher, &limit()));
    }

    #[test]
    fn exhausts_nonce_space() {
        let miner = GenesisMiner::new(2).start_nonce(u32::MAX - 5);
        assert_eq!(miner.mine(&regtest(), &Hopeless, &limit()).unwrap_err(), MineError::NonceExhausted);
        let miner = GenesisMiner::new(1).start_nonce(u32::MAX);
        assert_eq!(miner.mine(&regtest(), &Hopeless, &limit()).unwrap_err(), MineError::NonceExhausted);
    }

    #[test]
    fn rejects_other_algorithm() {
        let result = GenesisMiner::new(1).mine(&regtest(), &Sha256dHasher, &limit());
        assert_eq!(result.unwrap_err(), MineError::AlgoMismatch { hasher: PowAlgo::Sha256d, block: PowAlgo::Neoscrypt });
    }

    #[test]
    fn stops_on_request() {
        let miner = GenesisMiner::new(1);
        let result = thread::scope(|s| {
            s.spawn(|| {
                while !miner.is_mining() {
                    thread::sleep(Duration::from_millis(1));
                }
                thread::sleep(Duration::from_millis(20));
                miner.stop();
            });
            miner.mine(&regtest(), &Hopeless, &limit())
        });
        assert_eq!(result.unwrap_err(), MineError::Cancelled);
    }

    #[test]
    fn zero_threads_means_all_cpus() {
        assert_eq!(GenesisMiner::new(0).threads(), num_cpus::get());
        assert_eq!(GenesisMiner::new(3).threads(), 3);
    }
}
