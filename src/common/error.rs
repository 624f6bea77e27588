use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::models::{navigation::Page, notice::Notice};
use crate::views;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As mensagens (Display) são as que o usuário vê na tela.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", validation_summary(.0))]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("A quantidade inicial em estoque não pode ser negativa.")]
    NegativeQuantity,

    #[error("Valor inválido para {field}: {value}")]
    InvalidOption { field: &'static str, value: String },

    #[error("Não há estoque suficiente para a saída. Quantidade disponível: {available}")]
    InsufficientStock { available: i64 },

    #[error("Item não encontrado ou ID inválido.")]
    UniformNotFound,

    #[error("Formulário inválido: {0}")]
    InvalidForm(#[from] FormRejection),

    #[error("Ação de navegação inválida ({action}) a partir da página '{from}'.")]
    InvalidTransition { from: Page, action: String },

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

// Junta as mensagens de todos os campos inválidos numa frase só.
fn validation_summary(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("Campo '{}' inválido.", field),
            })
        })
        .collect();
    messages.sort();
    if messages.is_empty() {
        "Um ou mais campos são inválidos.".to_string()
    } else {
        messages.join(" ")
    }
}

impl AppError {
    /// Converte o erro no aviso exibido na página (nenhum erro derruba o processo).
    pub fn to_notice(&self) -> Notice {
        match self {
            AppError::UniformNotFound => Notice::info(self.to_string()),
            AppError::DatabaseError(e) => {
                tracing::error!("Erro de banco de dados: {}", e);
                Notice::error(self.to_string())
            }
            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                Notice::error(self.to_string())
            }
            _ => Notice::error(self.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::NegativeQuantity
            | AppError::InvalidOption { .. }
            | AppError::InvalidForm(_)
            | AppError::InvalidTransition { .. } => StatusCode::BAD_REQUEST,
            AppError::InsufficientStock { .. } => StatusCode::CONFLICT,
            AppError::UniformNotFound => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Usado fora do fluxo de páginas (ex.: o logo), onde não há sessão para o aviso.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Erro Interno do Servidor: {}", self);
        }
        let body = views::layout::error_page(status, &self.to_string());
        (status, Html(body.into_string())).into_response()
    }
}
