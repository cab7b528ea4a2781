//! Module wiring for the employees module.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use employees_sdk::EmployeesClientV1;
use tracing::{debug, info};

use crate::api::rest::routes;
use crate::config::EmployeesConfig;
use crate::domain::gateway::EmployeeGateway;
use crate::domain::local_client::EmployeesLocalClient;
use crate::domain::service::Service;
use crate::infra::upstream::HttpEmployeeGateway;

/// Employees module.
///
/// Owns the domain service and hands out the in-process client and the REST
/// routes built on top of it.
#[derive(Clone)]
pub struct EmployeesModule {
    service: Arc<Service>,
}

impl EmployeesModule {
    /// Build the module against the configured upstream.
    ///
    /// # Errors
    /// Fails if the upstream settings cannot be turned into a client.
    pub fn init(cfg: &EmployeesConfig) -> anyhow::Result<Self> {
        info!("Initializing employees module");
        debug!(
            base_url = %cfg.upstream.base_url,
            cache_ttl = %humantime::format_duration(cfg.cache.ttl),
            max_attempts = cfg.retry.max_attempts,
            "Loaded employees config"
        );

        let gateway = HttpEmployeeGateway::new(&cfg.upstream)
            .context("failed to create employee service gateway")?;
        let module = Self::with_gateway(Arc::new(gateway), cfg);

        info!("Employees module initialized");
        Ok(module)
    }

    /// Build the module around an arbitrary gateway.
    #[must_use]
    pub fn with_gateway(gateway: Arc<dyn EmployeeGateway>, cfg: &EmployeesConfig) -> Self {
        Self {
            service: Arc::new(Service::new(gateway, cfg)),
        }
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn EmployeesClientV1> {
        Arc::new(EmployeesLocalClient::new(Arc::clone(&self.service)))
    }

    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        routes::register_routes(router, Arc::clone(&self.service))
    }
}
