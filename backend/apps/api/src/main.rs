//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; application-level errors use
//! `kernel::error::AppError`.

use auth::infra::oauth::HttpIdentityProvider;
use auth::{AuthConfig, PgAuthorRepository, config::OAuthProviderConfig};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use blog::PgBlogPostRepository;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,blog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = build_auth_config()?;

    // Federated login provider (optional)
    let provider = match &auth_config.oauth {
        Some(oauth) => Some(HttpIdentityProvider::new(oauth.clone()).map_err(|e| {
            anyhow::anyhow!("OAuth provider configuration invalid: {}", e)
        })?),
        None => {
            tracing::info!("OAuth provider not configured, federated login disabled");
            None
        }
    };

    let author_store = PgAuthorRepository::new(pool.clone());
    let blog_store = PgBlogPostRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/api/authors",
            auth::authors_router(author_store.clone(), provider, auth_config.clone()),
        )
        .nest(
            "/api/posts",
            blog::posts_router(blog_store, author_store, auth_config),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3001));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Assemble the auth configuration from the environment
///
/// Development builds fall back to a random token secret; production
/// requires TOKEN_SECRET (base64).
fn build_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        let token_secret = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        AuthConfig {
            token_secret,
            ..AuthConfig::default()
        }
    };

    if let Ok(pepper_b64) = env::var("PASSWORD_PEPPER") {
        config.password_pepper = Some(Engine::decode(&general_purpose::STANDARD, &pepper_b64)?);
    }

    // Federated login is enabled when provider credentials are present.
    // Endpoint URLs default to Google's; override for other providers.
    if let (Ok(client_id), Ok(client_secret)) =
        (env::var("OAUTH_CLIENT_ID"), env::var("OAUTH_CLIENT_SECRET"))
    {
        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        config.oauth = Some(OAuthProviderConfig {
            client_id,
            client_secret,
            auth_url: env::var("OAUTH_AUTH_URL")
                .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string()),
            token_url: env::var("OAUTH_TOKEN_URL")
                .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
            userinfo_url: env::var("OAUTH_USERINFO_URL").unwrap_or_else(|_| {
                "https://openidconnect.googleapis.com/v1/userinfo".to_string()
            }),
            redirect_url: format!("{}/api/authors/oauth/redirect", backend_url),
            frontend_redirect_url: frontend_url,
        });
    }

    Ok(config)
}
