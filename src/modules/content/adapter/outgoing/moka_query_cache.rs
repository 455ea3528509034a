//! Query cache backed by moka.
//!
//! Each key has its own staleness window. Concurrent loads of one key share a
//! single fetch, and a failed fetch leaves no entry behind.
//!
//! Entries are stored under `(key, generation)`. `invalidate` bumps the
//! generation, so a fetch still in flight when a write lands caches its result
//! under a generation no later read asks for.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use moka::future::Cache;
use moka::Expiry;
use serde_json::Value;
use tracing::debug;

use crate::config::{env_or, ConfigError};
use crate::modules::content::application::domain::kinds::CacheKey;
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::application::ports::outgoing::{CacheFetch, QueryCache};

pub const DEFAULT_STALE_SECONDS: u64 = 300;
pub const DEFAULT_PROJECTS_STALE_SECONDS: u64 = 120;
pub const DEFAULT_MAX_CAPACITY: u64 = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCacheConfig {
    pub stale_after: Duration,
    pub projects_stale_after: Duration,
    pub max_capacity: u64,
}

impl Default for QueryCacheConfig {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(DEFAULT_STALE_SECONDS),
            projects_stale_after: Duration::from_secs(DEFAULT_PROJECTS_STALE_SECONDS),
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl QueryCacheConfig {
    /// Reads `QUERY_CACHE_STALE_SECONDS`, `QUERY_CACHE_PROJECTS_STALE_SECONDS`
    /// and `QUERY_CACHE_MAX_CAPACITY`, defaulting each when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            stale_after: Duration::from_secs(env_or(
                "QUERY_CACHE_STALE_SECONDS",
                DEFAULT_STALE_SECONDS,
            )?),
            projects_stale_after: Duration::from_secs(env_or(
                "QUERY_CACHE_PROJECTS_STALE_SECONDS",
                DEFAULT_PROJECTS_STALE_SECONDS,
            )?),
            max_capacity: env_or("QUERY_CACHE_MAX_CAPACITY", DEFAULT_MAX_CAPACITY)?,
        })
    }

    fn window_for(&self, key: CacheKey) -> Duration {
        match key {
            CacheKey::Projects => self.projects_stale_after,
            _ => self.stale_after,
        }
    }
}

struct StalenessWindow(QueryCacheConfig);

type Slot = (CacheKey, u64);

impl Expiry<Slot, Value> for StalenessWindow {
    fn expire_after_create(
        &self,
        slot: &Slot,
        _value: &Value,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(self.0.window_for(slot.0))
    }
}

pub struct MokaQueryCache {
    entries: Cache<Slot, Value>,
    generations: DashMap<CacheKey, u64>,
}

impl MokaQueryCache {
    pub fn new(config: QueryCacheConfig) -> Self {
        tracing::info!(
            stale_seconds = config.stale_after.as_secs(),
            projects_stale_seconds = config.projects_stale_after.as_secs(),
            max_capacity = config.max_capacity,
            "query cache configured"
        );

        let entries = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(StalenessWindow(config))
            .build();

        Self {
            entries,
            generations: DashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(QueryCacheConfig::default())
    }

    fn generation(&self, key: CacheKey) -> u64 {
        self.generations.get(&key).map(|g| *g).unwrap_or(0)
    }
}

#[async_trait]
impl QueryCache for MokaQueryCache {
    async fn load<'a>(
        &'a self,
        key: CacheKey,
        fetch: CacheFetch<'a>,
    ) -> Result<Value, ContentError> {
        let generation = self.generation(key);
        let value = self
            .entries
            .try_get_with((key, generation), fetch)
            .await
            .map_err(|e| (*e).clone())?;

        if self.generation(key) != generation {
            debug!(%key, generation, "dropping entry fetched before invalidation");
            self.entries.invalidate(&(key, generation)).await;
        }

        Ok(value)
    }

    async fn invalidate(&self, key: CacheKey) {
        let previous = {
            let mut current = self.generations.entry(key).or_insert(0);
            let previous = *current;
            *current += 1;
            previous
        };
        debug!(%key, generation = previous + 1, "query cache invalidated");
        self.entries.invalidate(&(key, previous)).await;
    }
}
