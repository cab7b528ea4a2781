//! Result caches for upstream reads.

use std::fmt;
use std::hash::Hash;

use moka::future::Cache;

use crate::config::CacheConfig;

/// Logical cache namespaces, one per cached operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheNamespace {
    EmployeesAll,
    EmployeeById,
    SearchByName,
    HighestSalary,
    TopTenNamesBySalary,
}

impl CacheNamespace {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmployeesAll => "employees-all",
            Self::EmployeeById => "employee-by-id",
            Self::SearchByName => "search-by-name",
            Self::HighestSalary => "highest-salary",
            Self::TopTenNamesBySalary => "top-ten-names-by-salary",
        }
    }
}

impl fmt::Display for CacheNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bounded, TTL-expiring map for one namespace.
///
/// Entries expire `ttl` after they were written; when the namespace is full
/// the least useful entries are evicted first. Only successful results are
/// ever stored.
#[derive(Clone)]
pub struct ResultCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    namespace: CacheNamespace,
    inner: Cache<K, V>,
}

impl<K, V> ResultCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new(namespace: CacheNamespace, config: &CacheConfig) -> Self {
        let inner = Cache::builder()
            .name(namespace.as_str())
            .max_capacity(config.max_entries)
            .initial_capacity(config.initial_capacity)
            .time_to_live(config.ttl)
            .build();
        Self { namespace, inner }
    }

    #[must_use]
    pub fn namespace(&self) -> CacheNamespace {
        self.namespace
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let hit = self.inner.get(key).await;
        tracing::trace!(namespace = %self.namespace, hit = hit.is_some(), "cache lookup");
        hit
    }

    pub async fn put(&self, key: K, value: V) {
        self.inner.insert(key, value).await;
    }

    pub async fn invalidate(&self, key: &K) {
        self.inner.invalidate(key).await;
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
        tracing::debug!(namespace = %self.namespace, "cache cleared");
    }
}
