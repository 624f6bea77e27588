// src/views/layout.rs

use axum::http::StatusCode;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::{navigation::Page, notice::Notice};

const APP_TITLE: &str = "Controle de Estoque de Items";

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #fafafa; color: #222; }
main { max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
form.inline { display: inline-block; margin: 0.25rem 0.25rem 0.25rem 0; }
form.campos label { display: block; margin-top: 0.8rem; font-weight: 600; }
form.campos input, form.campos select, form.campos textarea { width: 100%; padding: 0.4rem; box-sizing: border-box; }
button { padding: 0.5rem 1rem; cursor: pointer; }
button.primario { background: #ff4b4b; color: #fff; border: none; }
.menu { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.5rem; }
.menu form, .menu button { width: 100%; }
.aviso { padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
.sucesso { background: #e6f4ea; color: #1e7b34; }
.info { background: #e8f0fe; color: #1a4fa0; }
.alerta { background: #fff8e1; color: #8a6d00; }
.erro { background: #fdecea; color: #b3261e; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 0.4rem; text-align: left; }
hr { margin: 1.5rem 0; }
"#;

/// Esqueleto comum de todas as páginas: cabeçalho, aviso pendente e título.
pub fn page(title: &str, notice: Option<&Notice>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (APP_TITLE) }
                style { (PreEscaped(CSS)) }
            }
            body {
                main {
                    @if let Some(notice) = notice {
                        (notice_box(notice))
                    }
                    h1 { (title) }
                    (body)
                }
            }
        }
    }
}

// Caixa colorida conforme o nível do aviso.
pub fn notice_box(notice: &Notice) -> Markup {
    html! {
        div class=(notice.level.css_class()) { (notice.message) }
    }
}

/// Botão que pede uma transição de navegação.
pub fn nav_button(target: Page, label: &str) -> Markup {
    html! {
        form.inline method="post" action="/navegar" {
            input type="hidden" name="destino" value=(target.as_str());
            button type="submit" { (label) }
        }
    }
}

pub fn back_button(label: &str) -> Markup {
    nav_button(Page::Home, label)
}

/// Página de "não encontrado": só oferece a volta para a página inicial.
pub fn not_found(notice: Option<&Notice>) -> Markup {
    page(
        APP_TITLE,
        notice,
        html! {
            div.aviso.erro { "Item não encontrado ou ID inválido." }
            (back_button("⬅️ Voltar"))
        },
    )
}

/// Página quando o banco falhou ao carregar os dados da página.
pub fn unavailable(notice: &Notice) -> Markup {
    page(APP_TITLE, Some(notice), back_button("⬅️ Voltar"))
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    page(
        &format!("Erro {}", status.as_u16()),
        None,
        html! {
            div.aviso.erro { (message) }
            p { a href="/" { "Voltar à Página Inicial" } }
        },
    )
}
