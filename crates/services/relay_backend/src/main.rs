// File: services/relay_backend/src/main.rs
use axum::Router;
use http::Method;
use relay_config::load_config;
#[cfg(feature = "hubspot")]
use relay_hubspot::routes as hubspot_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    relay_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    #[cfg(feature = "hubspot")]
    let hubspot_router = hubspot_routes(config.clone());

    let api_router = Router::new().nest("/api", {
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut router = Router::new();
        #[cfg(feature = "hubspot")]
        {
            router = router.merge(hubspot_router);
        }
        router
    });

    // Liveness probe lives at the root, outside /api.
    let mut app = relay_common::routes().merge(api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        #[cfg(feature = "hubspot")]
        use relay_hubspot::doc::HubspotApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "HubSpot Relay API",
                version = "0.1.0",
                description = "Backend relay between the browser client and the HubSpot CRM API"
            ),
            components(),
            tags((name = "Relay", description = "Core relay endpoints")),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut openapi_doc = ApiDoc::openapi();
        #[cfg(feature = "hubspot")]
        openapi_doc.merge(HubspotApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Browser clients call from arbitrary origins; the relay exists so they
    // never hold the app secrets, so cross-origin access stays permissive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    info!("Server running on port {}", config.server.port);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
