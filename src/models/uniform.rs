// src/models/uniform.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// --- Uniforme (única tabela do sistema) ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Uniform {
    pub id: i64,
    pub name: Option<String>,
    // "type" é palavra reservada em Rust; no banco a coluna continua "type"
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub uniform_type: String,
    pub size: String,
    pub model: String,
    pub color: String,
    pub quantity: i64,
    pub description: Option<String>,
}

impl Uniform {
    /// Rótulo usado nas páginas de seleção:
    /// "{id} - {nome} ({tipo}, {tamanho}, {modelo}, {cor}) - Qtd: {quantidade}"
    pub fn selection_label(&self) -> String {
        format!(
            "{} - {} ({}, {}, {}, {}) - Qtd: {}",
            self.id,
            self.display_name(),
            self.uniform_type,
            self.size,
            self.model,
            self.color,
            self.quantity
        )
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Campos editáveis de um uniforme (tudo menos id e quantidade).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformFields {
    pub name: Option<String>,
    pub uniform_type: String,
    pub size: String,
    pub model: String,
    pub color: String,
    pub description: Option<String>,
}

// --- Movimentação de estoque ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockDirection {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    Out,
}

impl StockDirection {
    pub fn label(self) -> &'static str {
        match self {
            StockDirection::In => "Entrada",
            StockDirection::Out => "Saída",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockDirection::In => "in",
            StockDirection::Out => "out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polo() -> Uniform {
        Uniform {
            id: 7,
            name: Some("Polo Azul".into()),
            uniform_type: "Masculino".into(),
            size: "M".into(),
            model: "Polo".into(),
            color: "Azul".into(),
            quantity: 10,
            description: None,
        }
    }

    #[test]
    fn selection_label_lists_every_attribute() {
        assert_eq!(
            polo().selection_label(),
            "7 - Polo Azul (Masculino, M, Polo, Azul) - Qtd: 10"
        );
    }

    #[test]
    fn selection_label_with_missing_name() {
        let mut item = polo();
        item.name = None;
        assert_eq!(item.selection_label(), "7 -  (Masculino, M, Polo, Azul) - Qtd: 10");
    }
}
