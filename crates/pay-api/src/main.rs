//! # Institute Payments
//!
//! Payment gateway for the institute management backend.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export SUPABASE_URL=https://<project>.supabase.co
//! export SUPABASE_SERVICE_ROLE_KEY=...
//! export RAZORPAY_KEY_ID=rzp_test_...
//! export RAZORPAY_KEY_SECRET=...
//!
//! # Run the server
//! institute-payments
//! ```

use pay_api::{openapi, routes, AppState, Settings};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env()?;
    let addr = settings.socket_addr()?;
    let is_prod = settings.is_production();
    let openapi_json = openapi::openapi_json_path(&settings);

    info!("{} ({})", settings.project_name, env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", settings.environment);
    info!("Allowed origins: {:?}", settings.allowed_origins);

    if !settings.payments_configured() {
        warn!("RAZORPAY_KEY_ID / RAZORPAY_KEY_SECRET not set, payment endpoints will return 500");
    }

    let state = AppState::new(settings)?;
    let app = routes::create_router(state);

    info!("Listening on http://{}", addr);

    if !is_prod {
        info!("Health: GET http://{}/health", addr);
        info!("Create order: POST http://{}{}/create-order", addr, routes::PAYMENTS_PREFIX);
        info!("Verify: POST http://{}{}/verify", addr, routes::PAYMENTS_PREFIX);
        info!("OpenAPI: http://{}{}", addr, openapi_json);
        info!("Swagger UI: http://{}{}", addr, openapi::DOCS_PATH);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `RUST_LOG` filters (default `info`); `LOG_FORMAT=json` emits JSON lines.
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}
