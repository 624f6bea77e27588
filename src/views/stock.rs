// src/views/stock.rs

use maud::{html, Markup};

use super::layout::{back_button, page};
use crate::models::{notice::Notice, uniform::{StockDirection, Uniform}};

// --- Excluir (confirmação explícita) ---
pub fn delete_confirm(notice: Option<&Notice>, uniform: &Uniform) -> Markup {
    page(
        "🗑️ Excluir Item",
        notice,
        html! {
            div.aviso.alerta {
                "Você está prestes a excluir o Item: "
                strong { (uniform.display_name()) }
                " (ID: " (uniform.id) ")"
            }
            p { "Esta ação é irreversível e removerá permanentemente o Item do sistema." }
            form.inline method="post" action="/uniformes/excluir" {
                button type="submit" { "CONFIRMAR EXCLUSÃO" }
            }
            (back_button("⬅️ Cancelar e Voltar"))
        },
    )
}

// --- Movimentar estoque ---
pub fn move_stock_form(notice: Option<&Notice>, uniform: &Uniform) -> Markup {
    let title = format!("📦 Movimentar Estoque: {} (ID: {})", uniform.display_name(), uniform.id);
    let color = if uniform.quantity > 0 { "green" } else { "red" };

    page(
        &title,
        notice,
        html! {
            p {
                "Quantidade Atual em Estoque: "
                strong style=(format!("font-size: 24px; color: {};", color)) { (uniform.quantity) }
            }
            form.campos method="post" action="/uniformes/movimentar" {
                fieldset {
                    legend { "Tipo de Movimentação" }
                    @for direction in [StockDirection::In, StockDirection::Out] {
                        label {
                            input type="radio" name="direction" value=(direction.as_str())
                                checked[direction == StockDirection::In];
                            " " (direction.label())
                        }
                    }
                }
                label for="amount" { "Quantidade" }
                input #amount type="number" name="amount" min="1" step="1" value="1" required;
                p { button.primario type="submit" { "Realizar Movimentação" } }
            }
            (back_button("⬅️ Voltar"))
        },
    )
}
