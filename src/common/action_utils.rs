// src/common/action_utils.rs

use axum::response::Redirect;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        navigation::{transition, NavAction, Page, SessionState},
        notice::Notice,
    },
};

// ---
// Helpers compartilhados pelos handlers de ação
// ---

/// Aplica uma transição ao estado da sessão. Se for recusada, o estado fica
/// como estava e o erro vira aviso na próxima página.
pub(crate) async fn apply_transition(app_state: &AppState, session: Uuid, action: NavAction) {
    let current = app_state.sessions.state(session).await;

    match transition(current, action) {
        Ok(next) => {
            tracing::debug!(from = %current.page, to = %next.page, "Navegação");
            app_state.sessions.save(session, next).await;
        }
        Err(e) => {
            tracing::warn!(erro = %e, "Transição recusada");
            app_state.sessions.push_notice(session, e.to_notice()).await;
        }
    }
}

/// Confere que a sessão está na página do formulário enviado (envio = laço na própria página).
pub(crate) async fn require_page(
    app_state: &AppState,
    session: Uuid,
    expected: Page,
) -> Result<SessionState, AppError> {
    let current = app_state.sessions.state(session).await;
    let state = transition(current, NavAction::Submit)?;

    if state.page != expected {
        return Err(AppError::InvalidTransition {
            from: state.page,
            action: format!("enviar formulário de '{}'", expected),
        });
    }
    Ok(state)
}

/// Como `require_page`, mas exige também o item selecionado.
pub(crate) async fn require_selected(
    app_state: &AppState,
    session: Uuid,
    expected: Page,
) -> Result<i64, AppError> {
    require_page(app_state, session, expected)
        .await?
        .selected_id
        .ok_or(AppError::UniformNotFound)
}

/// Guarda o resultado da ação como aviso e volta para a página atual (re-render completo).
pub(crate) async fn finish_action(
    app_state: &AppState,
    session: Uuid,
    result: Result<Notice, AppError>,
) -> Redirect {
    let notice = match result {
        Ok(notice) => notice,
        Err(e) => {
            tracing::warn!(erro = %e, "Ação não realizada");
            e.to_notice()
        }
    };
    app_state.sessions.push_notice(session, notice).await;
    Redirect::to("/")
}
