//! # OpenAPI Documentation
//!
//! OpenAPI 3.0 document for the payment API, served as JSON under the
//! versioned prefix and rendered by Swagger UI at `/docs`.

use crate::config::Settings;
use crate::error::ErrorResponse;
use crate::handlers::{
    HealthResponse, OrderRequest, OrderResponse, VerifyPaymentRequest, VerifyPaymentResponse,
    WelcomeResponse,
};
use utoipa::OpenApi;

/// Path Swagger UI is served at
pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Institute Management API",
        description = "Razorpay order creation and checkout verification",
        license(name = "MIT")
    ),
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::create_order,
        crate::handlers::verify_payment,
    ),
    components(
        schemas(
            WelcomeResponse,
            HealthResponse,
            OrderRequest,
            OrderResponse,
            VerifyPaymentRequest,
            VerifyPaymentResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Payments", description = "Razorpay orders and checkout verification"),
        (name = "System", description = "Welcome and health checks")
    )
)]
pub struct ApiDoc;

/// URL the JSON document is served at, under `API_V1_STR`
pub fn openapi_json_path(settings: &Settings) -> String {
    format!("{}/openapi.json", settings.api_v1_str.trim_end_matches('/'))
}

/// Document titled with the configured project name
pub fn api_doc(settings: &Settings) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = settings.project_name.clone();
    doc
}
