use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json
};
use chrono::Utc;
use log::{info, warn};

use crate::core::{
    message::{NewMessage, MessageChanges},
    record::{self, next_id, parse_id},
    CoreError, Message};
use crate::server::{error::ServerError, extract::JsonBody, Notice, SharedState};

/// Unlike users, messages are listed as a bare array.
pub(crate) async fn list_messages(State(state): State<SharedState>) -> Result<Json<Vec<Message>>, ServerError> {
    let mensajes = state.messages.all().await?;
    Ok(Json(mensajes))
}

pub(crate) async fn create_message(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<NewMessage>
) -> Result<(StatusCode, Json<Message>), ServerError> {
    let mut mensajes = state.messages.lock().await?;
    let usuarios = state.users.all().await?;

    let usuario_id = payload.usuario_id.clone();
    let mensaje = payload.into_message(next_id(&mensajes), &usuarios, Utc::now())
        .map_err(|err| {
            warn!("rejected message for user {}", usuario_id.unwrap_or_default());
            err
        })?;
    mensajes.push(mensaje.clone());
    mensajes.commit().await?;

    info!("created message {} for user {}", mensaje.id, mensaje.usuario_id);
    Ok((StatusCode::CREATED, Json(mensaje)))
}

pub(crate) async fn get_message(
    State(state): State<SharedState>,
    Path(id): Path<String>
) -> Result<Json<Message>, ServerError> {
    let mensajes = state.messages.all().await?;
    let id = parse_id(&id).ok_or(CoreError::MessageNotFound)?;
    let mensaje = record::find(&mensajes, id).ok_or(CoreError::MessageNotFound)?;
    Ok(Json(mensaje.clone()))
}

pub(crate) async fn update_message(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<MessageChanges>
) -> Result<Json<Message>, ServerError> {
    let mut mensajes = state.messages.lock().await?;
    let id = parse_id(&id).ok_or(CoreError::MessageNotFound)?;
    let mensaje = record::find_mut(&mut mensajes, id).ok_or(CoreError::MessageNotFound)?;
    changes.apply_to(mensaje);
    let mensaje = mensaje.clone();
    mensajes.commit().await?;
    Ok(Json(mensaje))
}

/// Succeeds whether or not the message existed.
pub(crate) async fn delete_message(
    State(state): State<SharedState>,
    Path(id): Path<String>
) -> Result<Json<Notice>, ServerError> {
    let mut mensajes = state.messages.lock().await?;
    if let Some(id) = parse_id(&id) {
        mensajes.retain(|mensaje| mensaje.id != id);
        info!("deleted message {}", id);
    }
    mensajes.commit().await?;
    Ok(Json(Notice::new("Mensaje eliminado")))
}
