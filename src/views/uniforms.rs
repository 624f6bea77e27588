// src/views/uniforms.rs

use maud::{html, Markup};

use super::layout::{back_button, nav_button, notice_box, page};
use crate::models::{
    navigation::Page,
    notice::Notice,
    options::{position_or_first, OptionField},
    uniform::Uniform,
};

/// `<select>` de um conjunto fechado, com a opção na posição `chosen` marcada.
fn option_select(name: &str, field: OptionField, chosen: usize) -> Markup {
    html! {
        label for=(name) { (field.label()) }
        select id=(name) name=(name) required {
            @for (i, value) in field.options().iter().enumerate() {
                option value=(value) selected[i == chosen] { (value) }
            }
        }
    }
}

// --- Cadastrar ---
pub fn add_form(notice: Option<&Notice>) -> Markup {
    page(
        "➕ Cadastrar Novo Item",
        notice,
        html! {
            p { "Preencha os detalhes do novo Item." }
            form.campos method="post" action="/uniformes" {
                label for="name" { "Nome do Item (Opcional)" }
                input #name type="text" name="name" placeholder="Ex: Camiseta Polo Azul MASC P";
                (option_select("uniform_type", OptionField::Type, 0))
                (option_select("size", OptionField::Size, 0))
                (option_select("model", OptionField::Model, 0))
                (option_select("color", OptionField::Color, 0))
                label for="quantity" { "Quantidade Inicial em Estoque" }
                input #quantity type="number" name="quantity" min="0" step="1" value="0" required;
                label for="description" { "Descrição (Opcional)" }
                textarea #description name="description" rows="4"
                    placeholder="Detalhes adicionais sobre o Item" {}
                p { button.primario type="submit" { "Cadastrar Item" } }
            }
            (back_button("⬅️ Voltar à Página Inicial"))
        },
    )
}

// --- Listar ---
pub fn list(notice: Option<&Notice>, uniforms: &[Uniform]) -> Markup {
    page(
        "📊 Items Cadastrados",
        notice,
        html! {
            @if uniforms.is_empty() {
                (notice_box(&Notice::info(
                    "Nenhum Item cadastrado ainda. Utilize a opção 'Cadastrar Novo Item' na tela inicial.",
                )))
            } @else {
                table {
                    thead {
                        tr {
                            th { "ID" } th { "Nome" } th { "Tipo" } th { "Tamanho" }
                            th { "Modelo" } th { "Cor" } th { "Quantidade" } th { "Descrição" }
                        }
                    }
                    tbody {
                        @for u in uniforms {
                            tr {
                                td { (u.id) }
                                td { (u.display_name()) }
                                td { (u.uniform_type) }
                                td { (u.size) }
                                td { (u.model) }
                                td { (u.color) }
                                td { (u.quantity) }
                                td { (u.description.as_deref().unwrap_or_default()) }
                            }
                        }
                    }
                }
            }
            hr;
            (nav_button(Page::Add, "➕ Cadastrar Novo"))
            (nav_button(Page::EditSelect, "📝 Editar Item"))
            (nav_button(Page::DeleteSelect, "🗑️ Excluir Item"))
            (back_button("⬅️ Voltar à Página Inicial"))
        },
    )
}

// --- Editar ---
pub fn edit_form(notice: Option<&Notice>, uniform: &Uniform) -> Markup {
    let title = format!("📝 Editar Item: {} (ID: {})", uniform.display_name(), uniform.id);

    page(
        &title,
        notice,
        html! {
            p {
                "Altere os detalhes do Item abaixo. A quantidade em estoque só pode ser alterada via 'Movimentar Estoque'."
            }
            form.campos method="post" action="/uniformes/editar" {
                label for="name" { "Nome do Item (Opcional)" }
                input #name type="text" name="name" value=(uniform.display_name());
                (option_select("uniform_type", OptionField::Type,
                    position_or_first(OptionField::Type.options(), &uniform.uniform_type)))
                (option_select("size", OptionField::Size,
                    position_or_first(OptionField::Size.options(), &uniform.size)))
                (option_select("model", OptionField::Model,
                    position_or_first(OptionField::Model.options(), &uniform.model)))
                (option_select("color", OptionField::Color,
                    position_or_first(OptionField::Color.options(), &uniform.color)))
                label for="quantity" { "Quantidade Atual em Estoque" }
                input #quantity type="text" value=(uniform.quantity) disabled
                    title="Para alterar a quantidade, use a opção 'Movimentar Estoque' na tela inicial.";
                label for="description" { "Descrição (Opcional)" }
                textarea #description name="description" rows="4" {
                    (uniform.description.as_deref().unwrap_or_default())
                }
                p { button.primario type="submit" { "Salvar Alterações" } }
            }
            (back_button("⬅️ Voltar"))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64, color: &str) -> Uniform {
        Uniform {
            id,
            name: Some("Polo Azul".into()),
            uniform_type: "Feminino".into(),
            size: "GG".into(),
            model: "Polo".into(),
            color: color.into(),
            quantity: 12,
            description: Some("Linha 2024".into()),
        }
    }

    #[test]
    fn add_form_posts_every_field() {
        let html = add_form(None).into_string();
        assert!(html.contains(r#"action="/uniformes""#));
        for name in ["name", "uniform_type", "size", "model", "color", "quantity", "description"] {
            assert!(html.contains(&format!(r#"name="{}""#, name)), "faltou {}", name);
        }
        assert!(html.contains(r#"min="0""#));
    }

    #[test]
    fn empty_list_shows_info_message() {
        let html = list(None, &[]).into_string();
        assert!(html.contains("Nenhum Item cadastrado ainda."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn list_renders_one_row_per_uniform() {
        let html = list(None, &[sample(1, "Azul"), sample(2, "Preta")]).into_string();
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("<td>Linha 2024</td>"));
    }

    #[test]
    fn edit_form_preselects_stored_options() {
        let html = edit_form(None, &sample(4, "Preta")).into_string();
        assert!(html.contains(r#"<option value="Feminino" selected>"#));
        assert!(html.contains(r#"<option value="GG" selected>"#));
        assert!(html.contains(r#"<option value="Preta" selected>"#));
        assert!(html.contains("disabled"));
        // a quantidade não é enviada no formulário
        assert!(!html.contains(r#"name="quantity""#));
    }

    #[test]
    fn edit_form_falls_back_to_first_option() {
        let html = edit_form(None, &sample(4, "Dourada")).into_string();
        assert!(html.contains(r#"<option value="Branca" selected>"#));
    }
}
