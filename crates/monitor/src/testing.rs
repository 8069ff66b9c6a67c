//! In-memory [`LiquiditySource`] for engine tests.

use async_trait::async_trait;
use clmm_depth_domain::U256;
use clmm_depth_domain::entities::{Address, PoolSnapshot, Position};
use clmm_depth_domain::fees::FeeTier;
use clmm_depth_protocols::{LiquiditySource, ProtocolError};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub(crate) const TOKEN_A: Address = Address::from_bytes([0x0a; 20]);
pub(crate) const TOKEN_B: Address = Address::from_bytes([0x0b; 20]);
pub(crate) const POOL: Address = Address::from_bytes([0xcc; 20]);

pub(crate) fn owner(n: u8) -> Address {
    Address::from_bytes([n; 20])
}

pub(crate) fn position(tick_lower: i32, tick_upper: i32, liquidity: u128) -> Position {
    Position {
        token0: TOKEN_A,
        token1: TOKEN_B,
        fee_tier: FeeTier::MEDIUM,
        tick_lower,
        tick_upper,
        liquidity,
    }
}

pub(crate) fn snapshot(current_tick: i32, total_liquidity: u128) -> PoolSnapshot {
    PoolSnapshot {
        current_tick,
        sqrt_price_x96: U256::one() << 96,
        total_liquidity,
        timestamp: 0,
    }
}

/// How `resolve_pool` answers.
pub(crate) enum Resolution {
    Found(Address),
    Missing,
    Fails,
}

pub(crate) struct MockSource {
    by_owner: HashMap<Address, Vec<U256>>,
    by_id: HashMap<U256, Position>,
    failing_owners: HashSet<Address>,
    resolution: Resolution,
    /// Queued pool reads; `None` makes that read fail.
    states: Mutex<VecDeque<Option<PoolSnapshot>>>,
    /// Answer once the queue is drained.
    steady_state: Option<PoolSnapshot>,
    /// Latency of every pool read.
    read_delay: Option<Duration>,
    pub(crate) resolve_calls: AtomicUsize,
    pub(crate) pool_state_calls: AtomicUsize,
    reads_in_flight: AtomicUsize,
    pub(crate) max_reads_in_flight: AtomicUsize,
}

impl MockSource {
    pub(crate) fn new(resolution: Resolution) -> Self {
        Self {
            by_owner: HashMap::new(),
            by_id: HashMap::new(),
            failing_owners: HashSet::new(),
            resolution,
            states: Mutex::new(VecDeque::new()),
            steady_state: None,
            read_delay: None,
            resolve_calls: AtomicUsize::new(0),
            pool_state_calls: AtomicUsize::new(0),
            reads_in_flight: AtomicUsize::new(0),
            max_reads_in_flight: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_positions(mut self, owner: Address, positions: Vec<Position>) -> Self {
        let ids = self.by_owner.entry(owner).or_default();
        for p in positions {
            let id = U256::from(self.by_id.len() as u64 + 1);
            ids.push(id);
            self.by_id.insert(id, p);
        }
        self
    }

    pub(crate) fn with_failing_owner(mut self, owner: Address) -> Self {
        self.failing_owners.insert(owner);
        self
    }

    pub(crate) fn with_states(self, states: Vec<Option<PoolSnapshot>>) -> Self {
        self.states
            .lock()
            .expect("mock lock")
            .extend(states);
        self
    }

    pub(crate) fn with_steady_state(mut self, state: PoolSnapshot) -> Self {
        self.steady_state = Some(state);
        self
    }

    pub(crate) fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = Some(delay);
        self
    }
}

fn rpc_failure() -> ProtocolError {
    ProtocolError::Call {
        method: "mock",
        message: "mock failure".to_string(),
    }
}

#[async_trait]
impl LiquiditySource for MockSource {
    async fn position_ids(&self, owner: Address) -> Result<Vec<U256>, ProtocolError> {
        if self.failing_owners.contains(&owner) {
            return Err(rpc_failure());
        }
        Ok(self.by_owner.get(&owner).cloned().unwrap_or_default())
    }

    async fn position(&self, token_id: U256) -> Result<Position, ProtocolError> {
        self.by_id.get(&token_id).copied().ok_or_else(rpc_failure)
    }

    async fn resolve_pool(
        &self,
        _token0: Address,
        _token1: Address,
        _fee_tier: FeeTier,
    ) -> Result<Address, ProtocolError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        match self.resolution {
            Resolution::Found(pool) => Ok(pool),
            Resolution::Missing => Ok(Address::ZERO),
            Resolution::Fails => Err(rpc_failure()),
        }
    }

    async fn pool_state(&self, _pool: Address) -> Result<PoolSnapshot, ProtocolError> {
        self.pool_state_calls.fetch_add(1, Ordering::SeqCst);
        let active = self.reads_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_reads_in_flight.fetch_max(active, Ordering::SeqCst);
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        self.reads_in_flight.fetch_sub(1, Ordering::SeqCst);

        let queued = self.states.lock().expect("mock lock").pop_front();
        match queued {
            Some(Some(state)) => Ok(state),
            Some(None) => Err(rpc_failure()),
            None => self.steady_state.ok_or_else(rpc_failure),
        }
    }
}
