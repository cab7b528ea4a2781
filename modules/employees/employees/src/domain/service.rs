use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use employees_sdk::{Employee, NewEmployee};
use tracing::instrument;

use super::aggregate;
use super::error::DomainError;
use super::gateway::{EmployeeGateway, UpstreamError};
use super::validation;
use crate::config::EmployeesConfig;
use crate::infra::cache::{CacheNamespace, ResultCache};
use crate::infra::resilience::RetryPolicy;

// ============================================================================
// Caches
// ============================================================================

/// One cache per read operation. Singleton results are keyed by `()`.
///
/// `generation` advances on every mutation. A read records it before going
/// upstream and only keeps its result if no mutation happened meanwhile.
struct Caches {
    all: ResultCache<(), Arc<[Employee]>>,
    by_id: ResultCache<String, Employee>,
    search: ResultCache<String, Arc<[Employee]>>,
    highest_salary: ResultCache<(), i64>,
    top_ten: ResultCache<(), Arc<[String]>>,
    generation: AtomicU64,
}

impl Caches {
    fn new(config: &EmployeesConfig) -> Self {
        let cfg = &config.cache;
        Self {
            all: ResultCache::new(CacheNamespace::EmployeesAll, cfg),
            by_id: ResultCache::new(CacheNamespace::EmployeeById, cfg),
            search: ResultCache::new(CacheNamespace::SearchByName, cfg),
            highest_salary: ResultCache::new(CacheNamespace::HighestSalary, cfg),
            top_ten: ResultCache::new(CacheNamespace::TopTenNamesBySalary, cfg),
            generation: AtomicU64::new(0),
        }
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Drop the full listing and everything derived from it.
    fn invalidate_listings(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.all.invalidate_all();
        self.search.invalidate_all();
        self.highest_salary.invalidate_all();
        self.top_ten.invalidate_all();
    }

    /// Drop the listings and the cached entry of one employee.
    async fn invalidate_employee(&self, id: &str) {
        self.invalidate_listings();
        self.by_id.invalidate(&id.to_owned()).await;
    }

    /// Cache `value` unless a mutation happened after `seen` was read.
    ///
    /// The generation is checked again after the insert: an invalidation
    /// racing with it either clears the entry itself or is seen here.
    async fn store<K, V>(&self, cache: &ResultCache<K, V>, seen: u64, key: K, value: V)
    where
        K: Hash + Eq + Clone + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        if self.generation() != seen {
            tracing::debug!(namespace = %cache.namespace(), "Result predates a mutation, not cached");
            return;
        }
        cache.put(key.clone(), value).await;
        if self.generation() != seen {
            cache.invalidate(&key).await;
            tracing::debug!(namespace = %cache.namespace(), "Result predates a mutation, evicted");
        }
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

/// Employee operations over the remote service, with retries and caching.
pub struct Service {
    gateway: Arc<dyn EmployeeGateway>,
    retry: RetryPolicy,
    caches: Caches,
}

impl Service {
    #[must_use]
    pub fn new(gateway: Arc<dyn EmployeeGateway>, config: &EmployeesConfig) -> Self {
        Self {
            gateway,
            retry: RetryPolicy::from(&config.retry),
            caches: Caches::new(config),
        }
    }

    /// # Errors
    /// Upstream failures after retries, or rate limiting.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Employee>, DomainError> {
        let all = self.all_employees().await?;
        Ok(all.to_vec())
    }

    /// # Errors
    /// `NotFound` when the upstream has no such employee.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_by_id(&self, id: &str) -> Result<Employee, DomainError> {
        let key = id.to_owned();
        let seen = self.caches.generation();
        if let Some(hit) = self.caches.by_id.get(&key).await {
            return Ok(hit);
        }

        let gateway = &self.gateway;
        let result = self
            .retry
            .run("fetch_by_id", move || gateway.fetch_by_id(id))
            .await;

        match result {
            Ok(employee) => {
                self.caches
                    .store(&self.caches.by_id, seen, key, employee.clone())
                    .await;
                Ok(employee)
            }
            Err(err) if is_absent(&err) => {
                tracing::warn!(id, "Employee not found");
                Err(DomainError::not_found(id))
            }
            Err(err) => Err(fail("fetch_by_id", err)),
        }
    }

    /// # Errors
    /// Failures of the underlying full listing.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Employee>, DomainError> {
        let key = query.to_lowercase();
        let seen = self.caches.generation();
        if let Some(hit) = self.caches.search.get(&key).await {
            return Ok(hit.to_vec());
        }

        let all = self.all_employees().await?;
        let found = aggregate::search_by_name(&all, query);
        tracing::debug!(matches = found.len(), "Search completed");
        self.caches
            .store(&self.caches.search, seen, key, Arc::from(found.as_slice()))
            .await;
        Ok(found)
    }

    /// # Errors
    /// Failures of the underlying full listing.
    #[instrument(skip(self))]
    pub async fn highest_salary(&self) -> Result<i64, DomainError> {
        let seen = self.caches.generation();
        if let Some(hit) = self.caches.highest_salary.get(&()).await {
            return Ok(hit);
        }

        let all = self.all_employees().await?;
        let highest = aggregate::highest_salary(&all);
        self.caches
            .store(&self.caches.highest_salary, seen, (), highest)
            .await;
        Ok(highest)
    }

    /// # Errors
    /// Failures of the underlying full listing.
    #[instrument(skip(self))]
    pub async fn top_ten_names_by_salary(&self) -> Result<Vec<String>, DomainError> {
        let seen = self.caches.generation();
        if let Some(hit) = self.caches.top_ten.get(&()).await {
            return Ok(hit.to_vec());
        }

        let all = self.all_employees().await?;
        let names = aggregate::top_names_by_salary(&all);
        self.caches
            .store(&self.caches.top_ten, seen, (), Arc::from(names.as_slice()))
            .await;
        Ok(names)
    }

    /// Create an employee upstream. Never retried.
    ///
    /// # Errors
    /// `Validation` for a malformed request, otherwise upstream failures.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn create(&self, new: NewEmployee) -> Result<Employee, DomainError> {
        if let Some(v) = validation::violations(&new).into_iter().next() {
            return Err(DomainError::validation(v.field, v.message));
        }

        let payload = serde_json::json!({
            "name": new.name,
            "salary": new.salary,
            "age": new.age,
            "title": new.title,
        });

        let created = self
            .gateway
            .create(payload)
            .await
            .map_err(|e| fail("create", e))?;

        self.caches.invalidate_listings();
        tracing::info!(id = %created.id, "Employee created");
        Ok(created)
    }

    /// Delete an employee by id, returning its name.
    ///
    /// # Errors
    /// `NotFound` if the id is unknown or the upstream refuses the delete.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_by_id(&self, id: &str) -> Result<String, DomainError> {
        let employee = self.fetch_by_id(id).await?;
        let Some(name) = employee.name else {
            tracing::warn!(id, "Employee has no name, cannot delete by name");
            return Err(DomainError::not_found(id));
        };

        let gateway = &self.gateway;
        let target = name.as_str();
        let result = self
            .retry
            .run("delete_by_name", move || gateway.delete_by_name(target))
            .await;

        match result {
            Ok(true) => {
                self.caches.invalidate_employee(id).await;
                tracing::info!(id, name = %name, "Employee deleted");
                Ok(name)
            }
            Ok(false) => {
                tracing::warn!(id, name = %name, "Upstream did not delete employee");
                Err(DomainError::not_found(id))
            }
            Err(err) if is_absent(&err) => Err(DomainError::not_found(id)),
            Err(err) => Err(fail("delete_by_name", err)),
        }
    }

    async fn all_employees(&self) -> Result<Arc<[Employee]>, DomainError> {
        let seen = self.caches.generation();
        if let Some(hit) = self.caches.all.get(&()).await {
            return Ok(hit);
        }

        let gateway = &self.gateway;
        let all: Arc<[Employee]> = self
            .retry
            .run("fetch_all", move || gateway.fetch_all())
            .await
            .map(Arc::from)
            .map_err(|e| fail("fetch_all", e))?;

        tracing::debug!(count = all.len(), "Fetched employee listing");
        self.caches
            .store(&self.caches.all, seen, (), Arc::clone(&all))
            .await;
        Ok(all)
    }
}

fn is_absent(err: &UpstreamError) -> bool {
    matches!(err, UpstreamError::MissingPayload) || err.is_not_found()
}

/// Convert an upstream failure, logging it at a level matching its kind.
fn fail(operation: &'static str, err: UpstreamError) -> DomainError {
    let domain = DomainError::from(err);
    match &domain {
        DomainError::RateLimited { message } => {
            tracing::warn!(operation, %message, "Employee service rate limited the request");
        }
        other => tracing::error!(operation, error = %other, "Employee service call failed"),
    }
    domain
}
