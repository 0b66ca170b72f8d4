//! Handlers for the /api/usrs resource

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::user::{CreateUserRequest, UpdateUserRequest};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use pb_core::repositories::{ProjectRepository, TokenRepository, UserRepository};

/// GET /api/usrs — list all users, newest first
pub async fn list_users<U, P, T>(state: web::Data<AppState<U, P, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.user_service.list_users().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /api/usrs/{id}
pub async fn get_user<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.user_service.get_user(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(error) => handle_domain_error(&error),
    }
}

/// POST /api/usrs/add — signup, answers 201 with the created record
pub async fn add_user<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.user_service.create_user(request.into_inner().into()).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(error) => handle_domain_error(&error),
    }
}

/// PATCH /api/usrs/update/{id} — partial update
pub async fn update_user<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state
        .user_service
        .update_user(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(error) => handle_domain_error(&error),
    }
}

/// DELETE /api/usrs/delete/{id} — answers with the removed record
pub async fn delete_user<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.user_service.delete_user(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(error) => handle_domain_error(&error),
    }
}
