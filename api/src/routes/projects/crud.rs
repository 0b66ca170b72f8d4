//! Handlers for the /api/prj resource

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::project::{CreateProjectRequest, UpdateProjectRequest};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use pb_core::repositories::{ProjectRepository, TokenRepository, UserRepository};
use pb_shared::types::MessageResponse;

/// GET /api/prj/getall
pub async fn list_projects<U, P, T>(state: web::Data<AppState<U, P, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.project_service.list_projects().await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /api/prj/{id}
pub async fn get_project<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.project_service.get_project(path.into_inner()).await {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(error) => handle_domain_error(&error),
    }
}

/// POST /api/prj/add — answers 201; the manager and every contributor must
/// be existing users
pub async fn add_project<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    request: web::Json<CreateProjectRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state
        .project_service
        .create_project(request.into_inner().into())
        .await
    {
        Ok(project) => HttpResponse::Created().json(project),
        Err(error) => handle_domain_error(&error),
    }
}

/// PATCH /api/prj/update/{id} — partial update
pub async fn update_project<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateProjectRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state
        .project_service
        .update_project(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(error) => handle_domain_error(&error),
    }
}

/// DELETE /api/prj/delete/{id} — answers with the removed record
pub async fn delete_project<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.project_service.delete_project(path.into_inner()).await {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(error) => handle_domain_error(&error),
    }
}

/// DELETE /api/prj/deleteall — wipes every project
pub async fn delete_all_projects<U, P, T>(state: web::Data<AppState<U, P, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.project_service.delete_all_projects().await {
        Ok(count) => {
            HttpResponse::Ok().json(MessageResponse::new(format!("{} projects deleted", count)))
        }
        Err(error) => handle_domain_error(&error),
    }
}
