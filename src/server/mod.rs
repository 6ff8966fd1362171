mod error;
mod extract;
mod users;
mod messages;
mod server_config;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::get,
    Json, Router
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::{Collection, CollectionStore};
use crate::core::{Message, User};

pub use server_config::AppConfig;

/// Collections shared by all request handlers.
pub struct AppState {
    pub users: Collection<User>,
    pub messages: Collection<Message>
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: Arc<dyn CollectionStore>) -> SharedState {
        Arc::new(AppState {
            users: Collection::new(Arc::clone(&store)),
            messages: Collection::new(store)
        })
    }
}

/// Body of confirmations and error responses.
#[derive(Debug, Serialize)]
pub(crate) struct Notice {
    pub mensaje: String
}

impl Notice {
    pub fn new(mensaje: &str) -> Notice {
        Notice { mensaje: mensaje.to_owned() }
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/usuarios", get(users::list_users).post(users::create_user))
        .route("/usuarios/:id",
            get(users::get_user).put(users::update_user).delete(users::delete_user))
        .route("/mensajes", get(messages::list_messages).post(messages::create_message))
        .route("/mensajes/:id",
            get(messages::get_message).put(messages::update_message).delete(messages::delete_message))
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn unknown_route() -> (StatusCode, Json<Notice>) {
    (StatusCode::NOT_FOUND, Json(Notice::new("Ruta no encontrada")))
}
