//! Application factory
//!
//! Builds the actix-web `App` with all routes, middleware, and shared
//! state. Kept generic over the repository implementations so integration
//! tests can run the identical app against the in-memory mocks.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login, logout};
use crate::routes::projects::{
    add_project, delete_all_projects, delete_project, get_project, list_projects, update_project,
};
use crate::routes::users::{add_user, delete_user, get_user, list_users, update_user};
use crate::routes::AppState;

use pb_core::repositories::{ProjectRepository, TokenRepository, UserRepository};
use pb_shared::types::{ErrorBody, MessageResponse};

/// Create and configure the application with all dependencies
pub fn create_app<U, P, T>(
    app_state: web::Data<AppState<U, P, T>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    let token_service = app_state.token_service.clone();
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Status endpoints
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        // User routes; login and logout stay outside the JWT middleware
        .service(
            web::scope("/api/usrs")
                .route("/login", web::post().to(login::<U, P, T>))
                .route("/logout", web::post().to(logout::<U, P, T>))
                .service(
                    web::scope("")
                        .wrap(JwtAuth::new(token_service.clone()))
                        .route("", web::get().to(list_users::<U, P, T>))
                        .route("/add", web::post().to(add_user::<U, P, T>))
                        .route("/update/{id}", web::patch().to(update_user::<U, P, T>))
                        .route("/delete/{id}", web::delete().to(delete_user::<U, P, T>))
                        .route("/{id}", web::get().to(get_user::<U, P, T>)),
                ),
        )
        // Project routes, all protected
        .service(
            web::scope("/api/prj")
                .wrap(JwtAuth::new(token_service))
                .route("/getall", web::get().to(list_projects::<U, P, T>))
                .route("/add", web::post().to(add_project::<U, P, T>))
                .route("/update/{id}", web::patch().to(update_project::<U, P, T>))
                .route("/delete/{id}", web::delete().to(delete_project::<U, P, T>))
                .route("/deleteall", web::delete().to(delete_all_projects::<U, P, T>))
                .route("/{id}", web::get().to(get_project::<U, P, T>)),
        )
        .default_service(web::route().to(not_found))
}

/// Root endpoint, used by clients as a reachability probe
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Connection established"))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "projboard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("Route not found"))
}
