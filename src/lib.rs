//! # Order Desk SDK
//!
//! A unified Rust SDK for the Order Desk points, orders and referrals API,
//! supporting both native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: shared types, the response envelope, domain wire types (always available, WASM-safe)
//! 2. **Session**: bearer token and user snapshot mirrored to a key/value store
//! 3. **HTTP API**: `ApiHttp` dispatcher over a pluggable `Transport`
//! 4. **Fixtures**: canned responses for offline development
//! 5. **High-Level Client**: `OrderDeskClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_desk_sdk::prelude::*;
//!
//! let client = OrderDeskClient::builder()
//!     .base_url("http://localhost:5000/api/v1")
//!     .role(Role::Admin)
//!     .build()?;
//!
//! let login = client.auth().admin_login("admin", "admin123").await;
//! let members = client.admin().members(QueryParams::page(1, 20)).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, query parameters and paging.
pub mod shared;

/// The `{success, data, message, timestamp}` envelope every call resolves to.
pub mod envelope;

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// API root resolution.
pub mod network;

/// Environment-driven client configuration.
pub mod config;

// ── Layer 2: Session ─────────────────────────────────────────────────────────

/// Session persistence: token and user snapshot per role.
pub mod session;

/// Authentication: admin login, member login and registration, logout.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Request types, the transport seam and the dispatcher.
pub mod http;

// ── Layer 4: Fixtures ────────────────────────────────────────────────────────

/// Offline transport answering from canned data.
pub mod mock;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `OrderDeskClient`, the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Page, PromoCode, QueryParams, QueryValue, Role};

    // Envelope
    pub use crate::envelope::{ApiResponse, Envelope, Failure, FailureKind, JsonResponse};

    // Auth + user types
    pub use crate::auth::{AdminUser, AuthData, MemberUser, RegisterRequest};

    // Domain types
    pub use crate::domain::account::MemberProfile;
    pub use crate::domain::admin::{
        AdminOrderFilter, AdminTransactionFilter, CreateAgentRequest, ExceptionFilter,
        RechargeRequest, StatisticsKind, UserFilter, UserOrderFilter,
    };
    pub use crate::domain::order::{ExceptionReport, OrderFilter, SubmitOrderRequest};
    pub use crate::domain::points::{TransferRequest, TransferResult};
    pub use crate::domain::referral::NonMember;
    pub use crate::domain::reward::{RewardFilter, RewardType};
    pub use crate::domain::settings::SystemSettings;
    pub use crate::domain::transaction::{Transaction, TransactionFilter};

    // Errors
    pub use crate::error::SdkError;

    // Configuration + network
    pub use crate::config::{ClientConfig, StorageConfig, TransportMode};
    pub use crate::network::{PageLocation, DEV_API_URL};

    // Session
    pub use crate::session::{FileStore, KeyValueStore, MemoryStore, SessionManager};

    // HTTP
    pub use crate::http::{FilePart, HttpRequest, HttpResponse, RequestSpec, Transport};
    pub use crate::mock::FixtureTransport;

    // Client + sub-clients
    pub use crate::client::{
        AccountClient, AdminClient, AuthClient, BackupsClient, NotificationsClient,
        OrderDeskClient, OrderDeskClientBuilder, OrdersClient, PointsClient, ReferralsClient,
        RewardsClient, SettingsClient, TransactionsClient,
    };
}
