// src/views/select.rs

use maud::{html, Markup};

use super::layout::{back_button, notice_box, page};
use crate::models::{navigation::Page, notice::Notice, uniform::Uniform};

// Título e texto do botão de cada página de seleção.
fn texts(select_page: Page) -> (&'static str, &'static str) {
    match select_page {
        Page::EditSelect => ("📝 Selecionar Item para Editar", "Editar Item Selecionado"),
        Page::DeleteSelect => ("🗑️ Selecionar Item para Excluir", "Excluir Item Selecionado"),
        _ => (
            "📦 Selecionar Item para Movimentar Estoque",
            "Movimentar Estoque do Item Selecionado",
        ),
    }
}

/// Página genérica de seleção antes de editar, excluir ou movimentar.
pub fn select_for_action(select_page: Page, notice: Option<&Notice>, uniforms: &[Uniform]) -> Markup {
    let (title, button_label) = texts(select_page);

    page(
        title,
        notice,
        html! {
            @if uniforms.is_empty() {
                (notice_box(&Notice::warning("Nenhum Item cadastrado para esta ação.")))
            } @else {
                form.campos method="post" action="/selecionar" {
                    label for="id" { "Selecione um Item:" }
                    select #id name="id" required {
                        @for u in uniforms {
                            option value=(u.id) { (u.selection_label()) }
                        }
                    }
                    p { button.primario type="submit" { (button_label) } }
                }
            }
            (back_button("⬅️ Voltar à Página Inicial"))
        },
    )
}
