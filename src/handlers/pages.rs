// src/handlers/pages.rs

use std::io::ErrorKind;

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    common::{
        action_utils::{apply_transition, finish_action},
        error::AppError,
    },
    config::AppState,
    middleware::session::SessionId,
    models::{
        navigation::{NavAction, Page, SessionState},
        notice::Notice,
    },
    views,
};

// ---
// Render: estado da sessão -> página
// ---
/// Carrega o que a página precisa e chama a view correspondente.
/// Nenhuma falha aqui derruba a requisição: vira aviso na própria página.
pub async fn render(app_state: &AppState, state: SessionState, notice: Option<Notice>) -> Markup {
    let notice = notice.as_ref();
    let service = &app_state.uniform_service;

    match state.page {
        Page::Home => {
            let show_logo = tokio::fs::try_exists(&app_state.config.logo_path)
                .await
                .unwrap_or(false);
            views::home::home(notice, show_logo)
        }
        Page::Add => views::uniforms::add_form(notice),
        Page::List => match service.list_all().await {
            Ok(uniforms) => views::uniforms::list(notice, &uniforms),
            Err(e) => views::layout::unavailable(&e.to_notice()),
        },
        Page::EditSelect | Page::DeleteSelect | Page::MoveStockSelect => {
            match service.list_all().await {
                Ok(uniforms) => views::select::select_for_action(state.page, notice, &uniforms),
                Err(e) => views::layout::unavailable(&e.to_notice()),
            }
        }
        Page::Edit | Page::Delete | Page::MoveStock => {
            let Some(id) = state.selected_id else {
                return views::layout::not_found(notice);
            };
            match service.find(id).await {
                Ok(Some(uniform)) => match state.page {
                    Page::Edit => views::uniforms::edit_form(notice, &uniform),
                    Page::Delete => views::stock::delete_confirm(notice, &uniform),
                    _ => views::stock::move_stock_form(notice, &uniform),
                },
                Ok(None) => views::layout::not_found(notice),
                Err(e) => views::layout::unavailable(&e.to_notice()),
            }
        }
    }
}

// GET /
pub async fn show_page(
    State(app_state): State<AppState>,
    SessionId(session): SessionId,
) -> Html<String> {
    let state = app_state.sessions.state(session).await;
    let notice = app_state.sessions.take_notice(session).await;

    Html(render(&app_state, state, notice).await.into_string())
}

// ---
// Payload: Navegar
// ---
#[derive(Debug, Deserialize)]
pub struct NavigatePayload {
    pub destino: Page,
}

// POST /navegar
pub async fn navigate(
    State(app_state): State<AppState>,
    SessionId(session): SessionId,
    payload: Result<Form<NavigatePayload>, FormRejection>,
) -> Redirect {
    match payload {
        Ok(Form(payload)) => {
            let action = match payload.destino {
                Page::Home => NavAction::Back,
                target => NavAction::GoTo(target),
            };
            apply_transition(&app_state, session, action).await;
            Redirect::to("/")
        }
        Err(rejection) => finish_action(&app_state, session, Err(rejection.into())).await,
    }
}

// ---
// Payload: Selecionar
// ---
#[derive(Debug, Deserialize)]
pub struct SelectPayload {
    pub id: i64,
}

// POST /selecionar
pub async fn select(
    State(app_state): State<AppState>,
    SessionId(session): SessionId,
    payload: Result<Form<SelectPayload>, FormRejection>,
) -> Redirect {
    match payload {
        Ok(Form(payload)) => {
            apply_transition(&app_state, session, NavAction::Choose(payload.id)).await;
            Redirect::to("/")
        }
        Err(rejection) => finish_action(&app_state, session, Err(rejection.into())).await,
    }
}

// GET /logo.png
pub async fn logo(State(app_state): State<AppState>) -> Result<Response, AppError> {
    match tokio::fs::read(&app_state.config.logo_path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(e) => Err(anyhow::Error::from(e).context("Falha ao ler o logo").into()),
    }
}
