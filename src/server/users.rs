use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json
};
use log::info;
use serde::Serialize;

use crate::core::{
    record::{self, next_id, parse_id},
    user::{NewUser, UserChanges},
    CoreError, User};
use crate::server::{error::ServerError, extract::JsonBody, Notice, SharedState};

#[derive(Serialize)]
pub(crate) struct UserList {
    usuarios: Vec<User>
}

pub(crate) async fn list_users(State(state): State<SharedState>) -> Result<Json<UserList>, ServerError> {
    let usuarios = state.users.all().await?;
    Ok(Json(UserList { usuarios }))
}

pub(crate) async fn create_user(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<NewUser>
) -> Result<(StatusCode, Json<User>), ServerError> {
    let mut usuarios = state.users.lock().await?;
    let usuario = payload.into_user(next_id(&usuarios));
    usuarios.push(usuario.clone());
    usuarios.commit().await?;

    info!("created user {}", usuario.id);
    Ok((StatusCode::CREATED, Json(usuario)))
}

pub(crate) async fn get_user(
    State(state): State<SharedState>,
    Path(id): Path<String>
) -> Result<Json<User>, ServerError> {
    let usuarios = state.users.all().await?;
    let id = parse_id(&id).ok_or(CoreError::UserNotFound)?;
    let usuario = record::find(&usuarios, id).ok_or(CoreError::UserNotFound)?;
    Ok(Json(usuario.clone()))
}

pub(crate) async fn update_user(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<UserChanges>
) -> Result<Json<User>, ServerError> {
    let mut usuarios = state.users.lock().await?;
    let id = parse_id(&id).ok_or(CoreError::UserNotFound)?;
    let usuario = record::find_mut(&mut usuarios, id).ok_or(CoreError::UserNotFound)?;
    changes.apply_to(usuario);
    let usuario = usuario.clone();
    usuarios.commit().await?;
    Ok(Json(usuario))
}

/// Succeeds whether or not the user existed. Messages of the user are left in place.
pub(crate) async fn delete_user(
    State(state): State<SharedState>,
    Path(id): Path<String>
) -> Result<Json<Notice>, ServerError> {
    let mut usuarios = state.users.lock().await?;
    if let Some(id) = parse_id(&id) {
        usuarios.retain(|usuario| usuario.id != id);
        info!("deleted user {}", id);
    }
    usuarios.commit().await?;
    Ok(Json(Notice::new("Usuario eliminado")))
}
