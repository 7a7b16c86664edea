use restaurant_backend::{
    api::router::create_router,
    config::Config,
    domain::models::user::{CurrentUser, UserRole},
    domain::ports::IdentityProvider,
    error::AppError,
    infra::repositories::{
        sqlite_cart_repo::SqliteCartRepo,
        sqlite_contact_repo::SqliteContactRepo,
        sqlite_menu_repo::SqliteMenuRepo,
        sqlite_order_repo::SqliteOrderRepo,
        sqlite_reservation_repo::SqliteReservationRepo,
    },
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

/// Tokens the mock identity service recognizes.
pub const CUSTOMER_TOKEN: &str = "customer-token";
pub const CUSTOMER2_TOKEN: &str = "customer2-token";
pub const STAFF_TOKEN: &str = "staff-token";

pub struct MockIdentityService;

#[async_trait]
impl IdentityProvider for MockIdentityService {
    async fn resolve(&self, access_token: &str) -> Result<Option<CurrentUser>, AppError> {
        let user = match access_token {
            CUSTOMER_TOKEN => Some(CurrentUser {
                id: "user-1".to_string(),
                email: Some("customer@example.com".to_string()),
                role: UserRole::Customer,
            }),
            CUSTOMER2_TOKEN => Some(CurrentUser {
                id: "user-2".to_string(),
                email: Some("other@example.com".to_string()),
                role: UserRole::Customer,
            }),
            STAFF_TOKEN => Some(CurrentUser {
                id: "staff-1".to_string(),
                email: Some("staff@example.com".to_string()),
                role: UserRole::Admin,
            }),
            _ => None,
        };
        Ok(user)
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            identity_service_url: "http://localhost".to_string(),
            identity_service_key: "test-key".to_string(),
        };

        let state = Arc::new(AppState {
            config,
            menu_repo: Arc::new(SqliteMenuRepo::new(pool.clone())),
            cart_repo: Arc::new(SqliteCartRepo::new(pool.clone())),
            order_repo: Arc::new(SqliteOrderRepo::new(pool.clone())),
            reservation_repo: Arc::new(SqliteReservationRepo::new(pool.clone())),
            contact_repo: Arc::new(SqliteContactRepo::new(pool.clone())),
            identity: Arc::new(MockIdentityService),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
