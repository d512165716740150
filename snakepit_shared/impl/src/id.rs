use std::{
    fmt::Debug,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use snakepit_di::Build;
use snakepit_shared_contracts::id::IdService;
use snakepit_utils::trace_instrument;

/// Issues ids from a counter shared by all clones of the service.
#[derive(Debug, Clone, Build)]
pub struct IdServiceImpl {
    config: IdServiceConfig,
    #[state]
    issued: Arc<AtomicU64>,
}

#[derive(Debug, Clone, Copy)]
pub struct IdServiceConfig {
    /// The first id to be issued. The counter panics once it would pass
    /// `u64::MAX`, so callers keep this well below that.
    pub first_id: u64,
}

impl Default for IdServiceConfig {
    fn default() -> Self {
        Self { first_id: 1 }
    }
}

impl IdServiceImpl {
    pub fn new(config: IdServiceConfig) -> Self {
        Self {
            config,
            issued: Default::default(),
        }
    }
}

impl IdService for IdServiceImpl {
    #[trace_instrument(skip(self))]
    fn generate<I: From<u64> + Debug + 'static>(&self) -> I {
        let offset = self.issued.fetch_add(1, Ordering::Relaxed);
        self.config
            .first_id
            .checked_add(offset)
            .unwrap_or_else(|| panic!("Id space exhausted after {offset} ids"))
            .into()
    }
}
