// src/db/uniform_repo.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    models::uniform::{Uniform, UniformFields},
};

// O repositório de uniformes, responsável por todas as interações com a tabela 'uniforms'.
// Cada função pega uma conexão da pool só durante o seu único comando SQL.
#[derive(Clone)]
pub struct UniformRepository {
    pool: SqlitePool,
}

impl UniformRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Cria a tabela se ela não existir. Pode ser chamada quantas vezes quiser.
    /// AUTOINCREMENT garante que um id excluído nunca é reaproveitado.
    pub async fn initialize(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS uniforms (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                type TEXT NOT NULL,
                size TEXT NOT NULL,
                model TEXT NOT NULL,
                color TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                description TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("✅ Tabela 'uniforms' pronta.");
        Ok(())
    }

    // ---
    // Funções de "Leitura"
    // ---

    pub async fn list_all(&self) -> Result<Vec<Uniform>, AppError> {
        let uniforms = sqlx::query_as::<_, Uniform>("SELECT * FROM uniforms ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(uniforms)
    }

    // `None` é um resultado válido (id inexistente ou já excluído), não um erro.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Uniform>, AppError> {
        let uniform = sqlx::query_as::<_, Uniform>("SELECT * FROM uniforms WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(uniform)
    }

    // ---
    // Funções de "Escrita"
    // ---

    /// Insere um uniforme e devolve o id gerado.
    /// A quantidade já deve ter sido validada (>= 0) pelo chamador.
    pub async fn insert(&self, fields: &UniformFields, quantity: i64) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO uniforms (name, type, size, model, color, quantity, description)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(fields.name.as_deref())
        .bind(&fields.uniform_type)
        .bind(&fields.size)
        .bind(&fields.model)
        .bind(&fields.color)
        .bind(quantity)
        .bind(fields.description.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Atualiza os atributos de um uniforme. Nunca toca na quantidade.
    /// Devolve quantas linhas foram alteradas (0 quando o id não existe).
    pub async fn update_fields(&self, id: i64, fields: &UniformFields) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE uniforms
            SET name = ?, type = ?, size = ?, model = ?, color = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(fields.name.as_deref())
        .bind(&fields.uniform_type)
        .bind(&fields.size)
        .bind(&fields.model)
        .bind(&fields.color)
        .bind(fields.description.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Grava a nova quantidade. O cálculo e a regra de não-negativo ficam com o chamador.
    pub async fn update_quantity(&self, id: i64, new_quantity: i64) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE uniforms SET quantity = ? WHERE id = ?")
            .bind(new_quantity)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Exclui definitivamente. Excluir um id inexistente não é erro.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM uniforms WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
