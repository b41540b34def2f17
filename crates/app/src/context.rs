//! Application context - dependency injection container
//!
//! Everything is constructed once here and shared by reference: the
//! gateway, the per-entity collection clients, and the two stores whose
//! lifetime spans views (auth session, project cache). Views receive the
//! context and fetch their own per-view lists through the collections.

use std::sync::Arc;

use oneflow_core::auth::ports::TokenStore;
use oneflow_core::{AuthSession, ProjectStore};
use oneflow_domain::{Config, Result};
use oneflow_infra::{
    config, AnalyticsApi, AuthApi, ExpensesApi, FileTokenStore, HttpGateway, InvoicesApi,
    ProjectsApi, PurchaseOrdersApi, SalesOrdersApi, TasksApi, TimesheetsApi, UsersApi,
    VendorBillsApi,
};
use tracing::info;

/// Application context - holds all services and dependencies.
pub struct AppContext {
    pub config: Config,
    pub gateway: Arc<HttpGateway>,

    // Shared stores (lifetime beyond a single view)
    pub auth: Arc<AuthSession>,
    pub projects: Arc<ProjectStore>,

    // Per-view resource collections
    pub tasks: TasksApi,
    pub sales_orders: SalesOrdersApi,
    pub purchase_orders: PurchaseOrdersApi,
    pub invoices: InvoicesApi,
    pub vendor_bills: VendorBillsApi,
    pub expenses: ExpensesApi,
    pub timesheets: TimesheetsApi,
    pub analytics: AnalyticsApi,
    pub users: UsersApi,
}

impl AppContext {
    /// Initialize from the environment (`.env` honored, then env vars, then
    /// probed config files, then defaults). Restores a persisted session
    /// and primes the project cache before returning.
    pub async fn init() -> Result<Arc<Self>> {
        let _ = dotenvy::dotenv();
        let config = config::load()?;
        Self::with_config(config).await
    }

    /// Initialize with explicit configuration and a file-backed token store.
    pub async fn with_config(config: Config) -> Result<Arc<Self>> {
        let tokens: Arc<dyn TokenStore> =
            Arc::new(FileTokenStore::new(&config.auth.token_path));
        Self::with_token_store(config, tokens).await
    }

    /// Initialize with an injected token store (tests, ephemeral sessions).
    pub async fn with_token_store(
        config: Config,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Arc<Self>> {
        let gateway = Arc::new(
            HttpGateway::builder()
                .base_url(config.api.base_url.as_str())
                .user_agent(concat!("oneflow-client/", env!("CARGO_PKG_VERSION")))
                .token_store(tokens.clone())
                .build()?,
        );

        let auth = Arc::new(AuthSession::new(
            Arc::new(AuthApi::new(gateway.clone())),
            tokens,
        ));
        // Provider-mount semantics: restore the session, then prime the
        // project cache. Both swallow their own failures.
        auth.initialize().await;

        let projects = Arc::new(ProjectStore::new(Arc::new(ProjectsApi::new(gateway.clone()))));
        projects.refresh().await;

        info!(base_url = %config.api.base_url, "application context ready");

        Ok(Arc::new(Self {
            tasks: TasksApi::new(gateway.clone()),
            sales_orders: SalesOrdersApi::new(gateway.clone()),
            purchase_orders: PurchaseOrdersApi::new(gateway.clone()),
            invoices: InvoicesApi::new(gateway.clone()),
            vendor_bills: VendorBillsApi::new(gateway.clone()),
            expenses: ExpensesApi::new(gateway.clone()),
            timesheets: TimesheetsApi::new(gateway.clone()),
            analytics: AnalyticsApi::new(gateway.clone()),
            users: UsersApi::new(gateway.clone()),
            config,
            gateway,
            auth,
            projects,
        }))
    }

    /// End the session: clears the auth state and tears down the project
    /// cache. Synchronous - no network call.
    pub fn logout(&self) {
        self.auth.logout();
        self.projects.clear();
    }
}
