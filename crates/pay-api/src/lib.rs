//! # pay-api
//!
//! HTTP API layer for the institute payments gateway.
//!
//! This crate provides:
//! - Settings loaded from the environment
//! - Factories for the Razorpay and Supabase clients
//! - Axum handlers for order creation and checkout verification
//! - OpenAPI document and Swagger UI
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Welcome message |
//! | GET | `/health` | Health check |
//! | POST | `/api/payments/create-order` | Create Razorpay order |
//! | POST | `/api/payments/verify` | Verify checkout signature |
//! | GET | `{API_V1_STR}/openapi.json` | OpenAPI document |
//! | GET | `/docs` | Swagger UI |

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use config::Settings;
pub use error::{ApiError, ApiJson};
pub use routes::create_router;
pub use state::AppState;
