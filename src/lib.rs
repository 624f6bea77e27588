//src/lib.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};

pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod views;

use crate::config::AppState;
use crate::middleware::session::session_middleware;

/// Monta o router completo. Só `GET /` renderiza páginas; as demais rotas
/// são ações de formulário que redirecionam de volta para `/`.
pub fn app(app_state: AppState) -> Router {
    // Rotas de página e de ação (todas dependem da sessão)
    let page_routes = Router::new()
        .route("/", get(handlers::pages::show_page))
        .route("/navegar", post(handlers::pages::navigate))
        .route("/selecionar", post(handlers::pages::select))
        .route("/uniformes", post(handlers::uniforms::create_uniform))
        .route("/uniformes/editar", post(handlers::uniforms::update_uniform))
        .route("/uniformes/excluir", post(handlers::uniforms::delete_uniform))
        .route("/uniformes/movimentar", post(handlers::uniforms::move_stock))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/logo.png", get(handlers::pages::logo))
        .merge(page_routes)
        .with_state(app_state)
}
