// src/models/options.rs

// ---
// Conjuntos fechados de opções usados nos formulários
// ---
// A ordem importa: é a ordem exibida nos <select> e a base do
// mapeamento valor -> posição usado para pré-preencher a edição.

pub const UNIFORM_TYPES: &[&str] = &["Masculino", "Feminino"];

pub const SIZES: &[&str] = &[
    "PP", "P", "M", "G", "GG", "XG", "XXG",
    "37", "38", "39", "40", "41", "42", "43", "44", "45",
];

pub const MODELS: &[&str] = &["Polo", "Camiseta básica", "Calçado", "Luva Vaqueta", "Luva"];

pub const COLORS: &[&str] = &[
    "Branca", "Preta", "Azul", "Vermelha", "Amarela", "Cinza", "Verde", "Roxa", "Laranja",
];

/// Identifica qual conjunto de opções um campo usa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Type,
    Size,
    Model,
    Color,
}

impl OptionField {
    pub fn options(self) -> &'static [&'static str] {
        match self {
            OptionField::Type => UNIFORM_TYPES,
            OptionField::Size => SIZES,
            OptionField::Model => MODELS,
            OptionField::Color => COLORS,
        }
    }

    /// Rótulo exibido no formulário e nas mensagens de erro.
    pub fn label(self) -> &'static str {
        match self {
            OptionField::Type => "Tipo",
            OptionField::Size => "Tamanho",
            OptionField::Model => "Modelo",
            OptionField::Color => "Cor",
        }
    }

    pub fn contains(self, value: &str) -> bool {
        self.options().contains(&value)
    }
}

/// Posição de `value` em `options`, ou 0 quando o valor gravado
/// não faz (mais) parte do conjunto.
pub fn position_or_first(options: &[&str], value: &str) -> usize {
    options.iter().position(|opt| *opt == value).unwrap_or(0)
}
