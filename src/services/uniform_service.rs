// src/services/uniform_service.rs

use crate::{
    common::error::AppError,
    db::UniformRepository,
    models::{
        options::OptionField,
        uniform::{StockDirection, Uniform, UniformFields},
    },
};

#[derive(Clone)]
pub struct UniformService {
    repo: UniformRepository,
}

impl UniformService {
    pub fn new(repo: UniformRepository) -> Self {
        Self { repo }
    }

    pub async fn initialize(&self) -> Result<(), AppError> {
        self.repo.initialize().await
    }

    pub async fn list_all(&self) -> Result<Vec<Uniform>, AppError> {
        self.repo.list_all().await
    }

    pub async fn find(&self, id: i64) -> Result<Option<Uniform>, AppError> {
        self.repo.get_by_id(id).await
    }

    /// Igual a `find`, mas trata "não existe" como `UniformNotFound`.
    pub async fn get(&self, id: i64) -> Result<Uniform, AppError> {
        self.repo.get_by_id(id).await?.ok_or(AppError::UniformNotFound)
    }

    // --- CADASTRAR ---
    pub async fn create(&self, fields: &UniformFields, quantity: i64) -> Result<i64, AppError> {
        // Regras checadas antes de qualquer acesso ao banco
        if quantity < 0 {
            return Err(AppError::NegativeQuantity);
        }
        validate_options(fields)?;

        let id = self.repo.insert(fields, quantity).await?;
        tracing::info!(id, quantity, "Item cadastrado");
        Ok(id)
    }

    // --- EDITAR (nunca altera a quantidade) ---
    pub async fn update(&self, id: i64, fields: &UniformFields) -> Result<(), AppError> {
        validate_options(fields)?;

        let rows = self.repo.update_fields(id, fields).await?;
        if rows == 0 {
            return Err(AppError::UniformNotFound);
        }
        tracing::info!(id, "Item atualizado");
        Ok(())
    }

    // --- MOVIMENTAR ESTOQUE (só altera a quantidade) ---
    // Ler-calcular-gravar sem trava: duas movimentações simultâneas no mesmo item podem
    // perder uma atualização.
    pub async fn move_stock(
        &self,
        id: i64,
        direction: StockDirection,
        amount: i64,
    ) -> Result<Uniform, AppError> {
        let mut uniform = self.get(id).await?;
        let new_quantity = apply_movement(uniform.quantity, direction, amount)?;

        let rows = self.repo.update_quantity(id, new_quantity).await?;
        if rows == 0 {
            return Err(AppError::UniformNotFound);
        }

        tracing::info!(
            id,
            direction = direction.as_str(),
            amount,
            from = uniform.quantity,
            to = new_quantity,
            "Estoque movimentado"
        );
        uniform.quantity = new_quantity;
        Ok(uniform)
    }

    // --- EXCLUIR ---
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let rows = self.repo.delete(id).await?;
        if rows == 0 {
            tracing::warn!(id, "Exclusão de item inexistente ignorada");
        } else {
            tracing::info!(id, "Item excluído");
        }
        Ok(())
    }
}

/// Confere se tipo, tamanho, modelo e cor fazem parte dos conjuntos fechados.
pub fn validate_options(fields: &UniformFields) -> Result<(), AppError> {
    let checks = [
        (OptionField::Type, &fields.uniform_type),
        (OptionField::Size, &fields.size),
        (OptionField::Model, &fields.model),
        (OptionField::Color, &fields.color),
    ];
    for (field, value) in checks {
        if !field.contains(value) {
            return Err(AppError::InvalidOption {
                field: field.label(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Calcula a nova quantidade de uma movimentação.
/// Entrada soma sem limite; saída não pode passar do saldo atual.
pub fn apply_movement(
    current: i64,
    direction: StockDirection,
    amount: i64,
) -> Result<i64, AppError> {
    if amount < 1 {
        let mut err = validator::ValidationError::new("range");
        err.message = Some("A quantidade movimentada deve ser no mínimo 1.".into());
        let mut errors = validator::ValidationErrors::new();
        errors.add("amount", err);
        return Err(AppError::ValidationError(errors));
    }

    match direction {
        StockDirection::In => current
            .checked_add(amount)
            .ok_or_else(|| anyhow::anyhow!("Quantidade em estoque excede o limite suportado").into()),
        StockDirection::Out => {
            if amount > current {
                return Err(AppError::InsufficientStock { available: current });
            }
            Ok(current - amount)
        }
    }
}
