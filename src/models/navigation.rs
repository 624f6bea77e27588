// src/models/navigation.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::error::AppError;

// ---
// Páginas (estados da navegação)
// ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Add,
    List,
    EditSelect,
    Edit,
    DeleteSelect,
    Delete,
    MoveStockSelect,
    MoveStock,
}

impl Page {
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Add => "add",
            Page::List => "list",
            Page::EditSelect => "edit_select",
            Page::Edit => "edit",
            Page::DeleteSelect => "delete_select",
            Page::Delete => "delete",
            Page::MoveStockSelect => "move_stock_select",
            Page::MoveStock => "move_stock",
        }
    }

    /// Página de ação alcançada a partir de uma página de seleção.
    pub fn chosen_target(self) -> Option<Page> {
        match self {
            Page::EditSelect => Some(Page::Edit),
            Page::DeleteSelect => Some(Page::Delete),
            Page::MoveStockSelect => Some(Page::MoveStock),
            _ => None,
        }
    }

    /// Páginas onde um envio de formulário mantém o usuário na mesma página.
    pub fn accepts_submit(self) -> bool {
        matches!(self, Page::Add | Page::Edit | Page::Delete | Page::MoveStock)
    }

    /// Atalhos disponíveis a partir desta página (além do "Voltar").
    pub fn shortcuts(self) -> &'static [Page] {
        match self {
            Page::Home => &[
                Page::Add,
                Page::List,
                Page::EditSelect,
                Page::DeleteSelect,
                Page::MoveStockSelect,
            ],
            Page::List => &[Page::Add, Page::EditSelect, Page::DeleteSelect],
            _ => &[],
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---
// Estado de sessão: página atual + item selecionado
// ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub page: Page,
    pub selected_id: Option<i64>,
}

impl SessionState {
    pub fn at(page: Page) -> Self {
        Self { page, selected_id: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Botão de menu (home ou atalhos da listagem).
    GoTo(Page),
    /// "Voltar à Página Inicial", disponível em todas as páginas.
    Back,
    /// Confirmação numa página de seleção, carregando o id escolhido.
    Choose(i64),
    /// Envio de formulário que mantém a página (cadastrar, salvar, excluir, movimentar).
    Submit,
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavAction::GoTo(page) => write!(f, "ir para {}", page),
            NavAction::Back => f.write_str("voltar"),
            NavAction::Choose(id) => write!(f, "selecionar {}", id),
            NavAction::Submit => f.write_str("enviar"),
        }
    }
}

/// Função de transição pura: (estado, ação) -> novo estado.
/// Pares não previstos são recusados e o chamador mantém o estado atual.
pub fn transition(state: SessionState, action: NavAction) -> Result<SessionState, AppError> {
    let invalid = || AppError::InvalidTransition {
        from: state.page,
        action: action.to_string(),
    };

    match action {
        NavAction::Back | NavAction::GoTo(Page::Home) => Ok(SessionState::at(Page::Home)),
        NavAction::GoTo(target) => {
            if state.page.shortcuts().contains(&target) {
                Ok(SessionState::at(target))
            } else {
                Err(invalid())
            }
        }
        NavAction::Choose(id) => state
            .page
            .chosen_target()
            .map(|page| SessionState { page, selected_id: Some(id) })
            .ok_or_else(invalid),
        NavAction::Submit => {
            if state.page.accepts_submit() {
                Ok(state)
            } else {
                Err(invalid())
            }
        }
    }
}
