// src/views/home.rs

use maud::{html, Markup};

use super::layout::{nav_button, page};
use crate::models::{navigation::Page, notice::Notice};

pub fn menu_label(target: Page) -> &'static str {
    match target {
        Page::Add => "➕ Cadastrar Novo Item",
        Page::EditSelect => "📝 Editar Item",
        Page::List => "📊 Listar Itens",
        Page::DeleteSelect => "🗑️ Excluir Item",
        Page::MoveStockSelect => "📦 Movimentar Estoque",
        _ => "⬅️ Voltar à Página Inicial",
    }
}

pub fn home(notice: Option<&Notice>, show_logo: bool) -> Markup {
    page(
        "👕 Controle de Estoque de Items",
        notice,
        html! {
            @if show_logo {
                img src="/logo.png" alt="Logo" width="200";
            }
            p { "Selecione uma opção abaixo para gerenciar seu estoque:" }
            div.menu {
                @for target in Page::Home.shortcuts() {
                    (nav_button(*target, menu_label(*target)))
                }
            }
        },
    )
}
