// src/handlers/uniforms.rs

use axum::{
    extract::{rejection::FormRejection, State},
    response::Redirect,
    Form,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::{
        action_utils::{finish_action, require_page, require_selected},
        error::AppError,
    },
    config::AppState,
    middleware::session::SessionId,
    models::{
        navigation::Page,
        notice::Notice,
        options::OptionField,
        uniform::{StockDirection, UniformFields},
    },
};

// ---
// Validação Customizada (conjuntos fechados de opções)
// ---
fn check_option(field: OptionField, value: &str) -> Result<(), ValidationError> {
    if field.contains(value) {
        return Ok(());
    }
    let mut err = ValidationError::new("option");
    err.message = Some(format!("Selecione um valor válido para {}.", field.label()).into());
    Err(err)
}

fn validate_uniform_type(value: &str) -> Result<(), ValidationError> {
    check_option(OptionField::Type, value)
}

fn validate_size(value: &str) -> Result<(), ValidationError> {
    check_option(OptionField::Size, value)
}

fn validate_model(value: &str) -> Result<(), ValidationError> {
    check_option(OptionField::Model, value)
}

fn validate_color(value: &str) -> Result<(), ValidationError> {
    check_option(OptionField::Color, value)
}

// Texto opcional em branco é gravado como ausente.
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---
// Payload: Cadastrar
// ---
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUniformPayload {
    pub name: Option<String>,

    #[validate(custom(function = "validate_uniform_type"))]
    pub uniform_type: String,

    #[validate(custom(function = "validate_size"))]
    pub size: String,

    #[validate(custom(function = "validate_model"))]
    pub model: String,

    #[validate(custom(function = "validate_color"))]
    pub color: String,

    #[validate(range(min = 0, message = "A quantidade inicial em estoque não pode ser negativa."))]
    pub quantity: i64,

    pub description: Option<String>,
}

// ---
// Payload: Editar (sem quantidade: ela só muda via movimentação)
// ---
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUniformPayload {
    pub name: Option<String>,

    #[validate(custom(function = "validate_uniform_type"))]
    pub uniform_type: String,

    #[validate(custom(function = "validate_size"))]
    pub size: String,

    #[validate(custom(function = "validate_model"))]
    pub model: String,

    #[validate(custom(function = "validate_color"))]
    pub color: String,

    pub description: Option<String>,
}

impl From<UpdateUniformPayload> for UniformFields {
    fn from(p: UpdateUniformPayload) -> Self {
        UniformFields {
            name: blank_to_none(p.name),
            uniform_type: p.uniform_type,
            size: p.size,
            model: p.model,
            color: p.color,
            description: blank_to_none(p.description),
        }
    }
}

// ---
// Payload: Movimentar
// ---
#[derive(Debug, Deserialize, Validate)]
pub struct MoveStockPayload {
    pub direction: StockDirection,

    #[validate(range(min = 1, message = "A quantidade movimentada deve ser no mínimo 1."))]
    pub amount: i64,
}

// POST /uniformes
pub async fn create_uniform(
    State(app_state): State<AppState>,
    SessionId(session): SessionId,
    payload: Result<Form<CreateUniformPayload>, FormRejection>,
) -> Redirect {
    let result = create(&app_state, session, payload).await;
    finish_action(&app_state, session, result).await
}

async fn create(
    app_state: &AppState,
    session: Uuid,
    payload: Result<Form<CreateUniformPayload>, FormRejection>,
) -> Result<Notice, AppError> {
    require_page(app_state, session, Page::Add).await?;
    let Form(payload) = payload?;
    payload.validate()?;

    let quantity = payload.quantity;
    let fields = UniformFields {
        name: blank_to_none(payload.name),
        uniform_type: payload.uniform_type,
        size: payload.size,
        model: payload.model,
        color: payload.color,
        description: blank_to_none(payload.description),
    };

    // Continua na página de cadastro (sem redirecionar para a inicial)
    app_state.uniform_service.create(&fields, quantity).await?;
    Ok(Notice::success("Item cadastrado com sucesso!"))
}

// POST /uniformes/editar
pub async fn update_uniform(
    State(app_state): State<AppState>,
    SessionId(session): SessionId,
    payload: Result<Form<UpdateUniformPayload>, FormRejection>,
) -> Redirect {
    let result = update(&app_state, session, payload).await;
    finish_action(&app_state, session, result).await
}

async fn update(
    app_state: &AppState,
    session: Uuid,
    payload: Result<Form<UpdateUniformPayload>, FormRejection>,
) -> Result<Notice, AppError> {
    let id = require_selected(app_state, session, Page::Edit).await?;
    let Form(payload) = payload?;
    payload.validate()?;

    app_state.uniform_service.update(id, &payload.into()).await?;
    Ok(Notice::success("Item atualizado com sucesso!"))
}

// POST /uniformes/excluir
pub async fn delete_uniform(
    State(app_state): State<AppState>,
    SessionId(session): SessionId,
) -> Redirect {
    let result = delete(&app_state, session).await;
    finish_action(&app_state, session, result).await
}

async fn delete(app_state: &AppState, session: Uuid) -> Result<Notice, AppError> {
    let id = require_selected(app_state, session, Page::Delete).await?;

    app_state.uniform_service.delete(id).await?;
    Ok(Notice::success("Item excluído com sucesso!"))
}

// POST /uniformes/movimentar
pub async fn move_stock(
    State(app_state): State<AppState>,
    SessionId(session): SessionId,
    payload: Result<Form<MoveStockPayload>, FormRejection>,
) -> Redirect {
    let result = apply_move(&app_state, session, payload).await;
    finish_action(&app_state, session, result).await
}

async fn apply_move(
    app_state: &AppState,
    session: Uuid,
    payload: Result<Form<MoveStockPayload>, FormRejection>,
) -> Result<Notice, AppError> {
    let id = require_selected(app_state, session, Page::MoveStock).await?;
    let Form(payload) = payload?;
    payload.validate()?;

    app_state
        .uniform_service
        .move_stock(id, payload.direction, payload.amount)
        .await?;
    Ok(Notice::success("Estoque movimentado com sucesso!"))
}
