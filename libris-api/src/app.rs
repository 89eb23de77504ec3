/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use libris_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = libris_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::security::SecurityHeadersLayer};
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use libris_shared::auth::middleware::bearer_auth_middleware;
use libris_shared::models::{book::Bookshelf, catalog::Catalog};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Uses Arc
/// internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// In-memory book catalog (title-keyed variant)
    pub catalog: Arc<RwLock<Catalog>>,

    /// In-memory bookshelf (id-keyed variant)
    pub bookshelf: Arc<RwLock<Bookshelf>>,
}

impl AppState {
    /// Creates new application state with seeded in-memory collections
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
            catalog: Arc::new(RwLock::new(Catalog::seeded())),
            bookshelf: Arc::new(RwLock::new(Bookshelf::seeded())),
        }
    }

    /// Gets the JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                        # Health check (public)
/// └── /v1/                           # API v1 (versioned)
///     ├── /auth/                     # Authentication (public)
///     │   ├── POST /                 # Register
///     │   └── POST /token            # Login (form-encoded)
///     ├── /users/                    # Current user (bearer auth)
///     │   ├── GET  /me
///     │   ├── PUT  /password
///     │   └── PUT  /phone-number
///     ├── /todos/                    # Per-user todos (bearer auth)
///     │   ├── GET    /
///     │   ├── POST   /
///     │   ├── GET    /:id
///     │   ├── PUT    /:id
///     │   └── DELETE /:id
///     ├── /catalog/books/            # Title-keyed catalog (public)
///     └── /books/                    # Id-keyed bookshelf (public)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Security headers
/// 4. Bearer authentication (per-route-group basis)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Auth routes (public, no auth required)
    let auth_routes = Router::new()
        .route("/", post(routes::auth::register))
        .route("/token", post(routes::auth::login));

    // Current-user routes (require bearer auth)
    let user_routes = Router::new()
        .route("/me", get(routes::users::get_me))
        .route("/password", put(routes::users::change_password))
        .route("/phone-number", put(routes::users::update_phone_number))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bearer_auth_layer,
        ));

    // Todo routes (require bearer auth; every handler is owner-scoped)
    let todo_routes = Router::new()
        .route("/", get(routes::todos::list_todos))
        .route("/", post(routes::todos::create_todo))
        .route("/:id", get(routes::todos::get_todo))
        .route("/:id", put(routes::todos::update_todo))
        .route("/:id", delete(routes::todos::delete_todo))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bearer_auth_layer,
        ));

    // Title-keyed catalog routes (public)
    let catalog_routes = Router::new()
        .route("/books", get(routes::catalog::list_books))
        .route("/books", post(routes::catalog::create_book))
        .route("/books", put(routes::catalog::update_book))
        .route("/books/search", get(routes::catalog::search_by_category))
        .route(
            "/books/by-author/:author",
            get(routes::catalog::search_by_author_and_category),
        )
        .route("/books/:title", get(routes::catalog::get_book_by_title))
        .route("/books/:title", delete(routes::catalog::delete_book));

    // Id-keyed bookshelf routes (public)
    let book_routes = Router::new()
        .route("/", get(routes::books::list_books))
        .route("/", post(routes::books::create_book))
        .route("/", put(routes::books::update_book))
        .route("/by-rating", get(routes::books::get_books_by_rating))
        .route(
            "/by-publish-year/:year",
            get(routes::books::get_books_by_publish_year),
        )
        .route("/:id", get(routes::books::get_book_by_id))
        .route("/:id", delete(routes::books::delete_book));

    // Build complete v1 API
    let v1_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/todos", todo_routes)
        .nest("/catalog", catalog_routes)
        .nest("/books", book_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    // Combine all routes with middleware stack
    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}

/// Bearer authentication middleware layer
///
/// Delegates to the shared middleware, which validates the JWT from the
/// Authorization header and injects an
/// [`libris_shared::auth::middleware::AuthContext`] into the request
/// extensions; auth failures are mapped onto [`crate::error::ApiError`] so
/// they share the common error body.
async fn bearer_auth_layer(
    state: axum::extract::State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, crate::error::ApiError> {
    bearer_auth_middleware(state.jwt_secret().to_string(), req, next)
        .await
        .map_err(crate::error::ApiError::from)
}
