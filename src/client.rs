//! High-level client: `OrderDeskClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::client::Auth;
use crate::config::{ClientConfig, StorageConfig, TransportMode};
use crate::domain::account::client::Account;
use crate::domain::admin::client::Admin;
use crate::domain::backup::client::Backups;
use crate::domain::notification::client::Notifications;
use crate::domain::order::client::Orders;
use crate::domain::points::client::Points;
use crate::domain::referral::client::Referrals;
use crate::domain::reward::client::Rewards;
use crate::domain::settings::client::Settings;
use crate::domain::transaction::client::Transactions;
use crate::error::SdkError;
use crate::http::{ApiHttp, Transport};
use crate::mock::FixtureTransport;
use crate::network::{resolve_base_url, PageLocation, DEV_API_URL};
use crate::session::{FileStore, KeyValueStore, MemoryStore, SessionManager};
use crate::shared::Role;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::admin::client::Admin as AdminClient;
pub use crate::domain::backup::client::Backups as BackupsClient;
pub use crate::domain::notification::client::Notifications as NotificationsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::points::client::Points as PointsClient;
pub use crate::domain::referral::client::Referrals as ReferralsClient;
pub use crate::domain::reward::client::Rewards as RewardsClient;
pub use crate::domain::settings::client::Settings as SettingsClient;
pub use crate::domain::transaction::client::Transactions as TransactionsClient;

/// The primary entry point for the Order Desk SDK.
///
/// Admin endpoints hang off `client.admin()`, `client.settings()`,
/// `client.backups()` and `client.notifications()`; member endpoints off
/// `client.account()`, `client.referrals()`, `client.orders()`,
/// `client.points()`, `client.transactions()` and `client.rewards()`.
///
/// Cloning is cheap and clones share the session.
#[derive(Debug, Clone)]
pub struct OrderDeskClient {
    pub(crate) http: ApiHttp,
}

impl OrderDeskClient {
    pub fn builder() -> OrderDeskClientBuilder {
        OrderDeskClientBuilder::default()
    }

    /// Build straight from a [`ClientConfig`].
    pub fn from_config(config: ClientConfig) -> Result<Self, SdkError> {
        Self::builder().config(config).build()
    }

    /// API root every path is resolved against.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn session(&self) -> &SessionManager {
        self.http.session()
    }

    /// The underlying dispatcher, for endpoints the catalogue does not cover.
    pub fn http(&self) -> &ApiHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin { client: self }
    }

    pub fn settings(&self) -> Settings<'_> {
        Settings { client: self }
    }

    pub fn backups(&self) -> Backups<'_> {
        Backups { client: self }
    }

    pub fn notifications(&self) -> Notifications<'_> {
        Notifications { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn referrals(&self) -> Referrals<'_> {
        Referrals { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn points(&self) -> Points<'_> {
        Points { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    pub fn rewards(&self) -> Rewards<'_> {
        Rewards { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct OrderDeskClientBuilder {
    base_url: Option<String>,
    page_location: Option<PageLocation>,
    role: Role,
    transport_mode: TransportMode,
    transport: Option<Arc<dyn Transport>>,
    storage: StorageConfig,
    store: Option<Arc<dyn KeyValueStore>>,
    timeout: Option<Duration>,
    fixture_latency: Option<Duration>,
    clear_all_namespaces_on_logout: bool,
}

impl OrderDeskClientBuilder {
    /// Apply every setting from a [`ClientConfig`].
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.base_url = config.base_url.clone();
        self.role = config.role;
        self.transport_mode = config.transport;
        self.timeout = config.timeout();
        self.fixture_latency = config.fixture_latency();
        self.clear_all_namespaces_on_logout = config.clear_all_namespaces_on_logout;
        self.storage = config.storage;
        self
    }

    /// Explicit API root, bypassing page-location resolution.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Resolve the API root from this location instead of the current page.
    pub fn page_location(mut self, location: PageLocation) -> Self {
        self.page_location = Some(location);
        self
    }

    /// Namespace to restore the session from.
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Answer every request from canned data.
    pub fn fixtures(mut self) -> Self {
        self.transport_mode = TransportMode::Fixture;
        self
    }

    /// Simulated latency for the fixture transport.
    pub fn fixture_latency(mut self, latency: Duration) -> Self {
        self.fixture_latency = Some(latency);
        self
    }

    /// Use a custom transport. Overrides the transport mode.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom session store. Overrides the storage setting.
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Persist the session in a JSON file.
    pub fn session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage = StorageConfig::File { path: path.into() };
        self
    }

    /// Request timeout for the live transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Also clear the other role's keys on logout.
    pub fn clear_all_namespaces_on_logout(mut self, enabled: bool) -> Self {
        self.clear_all_namespaces_on_logout = enabled;
        self
    }

    pub fn build(self) -> Result<OrderDeskClient, SdkError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => self
                .page_location
                .or_else(current_location)
                .map(|location| resolve_base_url(&location))
                .unwrap_or_else(|| DEV_API_URL.to_string()),
        };

        let store = match self.store {
            Some(store) => store,
            None => build_store(self.storage)?,
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => build_transport(self.transport_mode, self.timeout, self.fixture_latency)?,
        };

        tracing::debug!(
            base_url = %base_url,
            role = self.role.as_str(),
            transport = ?self.transport_mode,
            "building client"
        );

        let session = SessionManager::restore(self.role, store, self.clear_all_namespaces_on_logout);
        Ok(OrderDeskClient {
            http: ApiHttp::new(&base_url, transport, session),
        })
    }
}

#[cfg(feature = "wasm")]
fn current_location() -> Option<PageLocation> {
    PageLocation::current()
}

#[cfg(not(feature = "wasm"))]
fn current_location() -> Option<PageLocation> {
    None
}

fn build_store(storage: StorageConfig) -> Result<Arc<dyn KeyValueStore>, SdkError> {
    match storage {
        StorageConfig::Memory => Ok(Arc::new(MemoryStore::new())),
        StorageConfig::File { path } => Ok(Arc::new(FileStore::new(path))),
        #[cfg(feature = "wasm")]
        StorageConfig::Web => Ok(Arc::new(crate::session::WebStorage)),
        #[cfg(not(feature = "wasm"))]
        StorageConfig::Web => Err(SdkError::Config(
            "web storage requires the `wasm` feature".to_string(),
        )),
    }
}

fn build_transport(
    mode: TransportMode,
    timeout: Option<Duration>,
    fixture_latency: Option<Duration>,
) -> Result<Arc<dyn Transport>, SdkError> {
    match mode {
        TransportMode::Fixture => {
            let mut fixture = FixtureTransport::new();
            if let Some(latency) = fixture_latency {
                fixture = fixture.with_latency(latency);
            }
            Ok(Arc::new(fixture))
        }
        #[cfg(feature = "http")]
        TransportMode::Live => Ok(Arc::new(crate::http::ReqwestTransport::new(timeout)?)),
        #[cfg(not(feature = "http"))]
        TransportMode::Live => {
            let _ = timeout;
            Err(SdkError::Config(
                "live transport requires the `http` feature".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dev_url_off_browser() {
        let client = OrderDeskClient::builder().fixtures().build().unwrap();
        assert_eq!(client.base_url(), DEV_API_URL);
    }

    #[test]
    fn page_location_drives_base_url() {
        let client = OrderDeskClient::builder()
            .fixtures()
            .page_location(PageLocation::new("https:", "desk.example.com", "8443"))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://desk.example.com:8443/api/v1");
    }

    #[test]
    fn explicit_base_url_wins() {
        let client = OrderDeskClient::builder()
            .fixtures()
            .base_url("http://10.0.0.2:5000/api/v1/")
            .page_location(PageLocation::new("https:", "desk.example.com", ""))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://10.0.0.2:5000/api/v1");
    }

    #[tokio::test]
    async fn restores_configured_role() {
        let store = MemoryStore::new();
        store.set("admin_token", "adm").unwrap();
        let client = OrderDeskClient::builder()
            .fixtures()
            .role(Role::Admin)
            .store(Arc::new(store))
            .build()
            .unwrap();
        assert_eq!(client.session().role().await, Role::Admin);
        assert!(client.auth().is_authenticated().await);
    }

    #[test]
    fn from_config_applies_settings() {
        let config = ClientConfig {
            role: Role::Admin,
            base_url: Some("http://api.local/api/v1".to_string()),
            transport: TransportMode::Fixture,
            ..ClientConfig::default()
        };
        let client = OrderDeskClient::from_config(config).unwrap();
        assert_eq!(client.base_url(), "http://api.local/api/v1");
    }

    #[cfg(not(feature = "wasm"))]
    #[test]
    fn web_storage_needs_wasm_feature() {
        let err = OrderDeskClient::builder()
            .fixtures()
            .config(ClientConfig {
                transport: TransportMode::Fixture,
                storage: StorageConfig::Web,
                ..ClientConfig::default()
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }
}
