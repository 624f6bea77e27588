// src/config.rs

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::{
    db::UniformRepository,
    middleware::session::{SessionStore, DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS},
    services::uniform_service::UniformService,
};

const DEFAULT_DATABASE_URL: &str = "sqlite://uniforms.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
const DEFAULT_LOGO_PATH: &str = "logoNslog.png";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// Configuração lida do ambiente (ou do .env), com valores padrão para rodar
// a partir da pasta onde ficam o banco e o logo.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub logo_path: PathBuf,
    pub max_connections: u32,
    pub session_idle_timeout: Duration,
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: {}", raw))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let session_idle_timeout = match env::var("SESSION_IDLE_MINUTES") {
            Ok(raw) => {
                let minutes: u64 = raw
                    .parse()
                    .with_context(|| format!("SESSION_IDLE_MINUTES inválido: {}", raw))?;
                Duration::from_secs(minutes * 60)
            }
            Err(_) => DEFAULT_IDLE_TIMEOUT,
        };

        let max_sessions = match env::var("MAX_SESSIONS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("MAX_SESSIONS inválido: {}", raw))?,
            Err(_) => DEFAULT_MAX_SESSIONS,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            logo_path: env::var("LOGO_PATH")
                .unwrap_or_else(|_| DEFAULT_LOGO_PATH.into())
                .into(),
            max_connections,
            session_idle_timeout,
            max_sessions,
        })
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub uniform_service: UniformService,
    pub sessions: SessionStore,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let db_pool = connect(&config.database_url, config.max_connections).await?;
        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let uniform_repo = UniformRepository::new(db_pool);
        let uniform_service = UniformService::new(uniform_repo);

        // Garante a tabela antes de atender a primeira requisição
        uniform_service
            .initialize()
            .await
            .context("Falha ao inicializar a tabela de uniformes")?;

        Ok(Self {
            uniform_service,
            sessions: SessionStore::with_limits(config.session_idle_timeout, config.max_sessions),
            config,
        })
    }
}

/// Abre a pool do SQLite, criando o arquivo do banco se ele ainda não existir.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("DATABASE_URL inválida: {}", database_url))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
        .with_context(|| format!("Falha ao conectar ao banco de dados em {}", database_url))?;

    Ok(pool)
}
