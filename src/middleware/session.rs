// src/middleware/session.rs

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{navigation::SessionState, notice::Notice},
};

// O nome do cookie que identifica a sessão do navegador
pub const SESSION_COOKIE: &str = "estoque_sessao";

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct SessionEntry {
    state: SessionState,
    notice: Option<Notice>,
    last_seen: Instant,
}

impl Default for SessionEntry {
    fn default() -> Self {
        Self {
            state: SessionState::default(),
            notice: None,
            last_seen: Instant::now(),
        }
    }
}

// Estado de navegação de cada sessão, guardado no servidor.
// O lock só é segurado para ler/escrever no mapa, nunca durante acesso ao banco.
// Sessões ociosas expiram e o total é limitado: clientes que ignoram o cookie
// (curl, robôs) criam uma sessão por requisição.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, SessionEntry>>>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn with_limits(idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            inner: Arc::default(),
            idle_timeout,
            max_sessions: max_sessions.max(1),
        }
    }

    fn is_expired(&self, entry: &SessionEntry, now: Instant) -> bool {
        now.duration_since(entry.last_seen) >= self.idle_timeout
    }

    // Remove as sessões ociosas e, se ainda faltar espaço, as mais antigas.
    fn prune(&self, sessions: &mut HashMap<Uuid, SessionEntry>, now: Instant) {
        sessions.retain(|_, entry| !self.is_expired(entry, now));

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.inner.lock().await;
        self.prune(&mut sessions, Instant::now());
        sessions.insert(id, SessionEntry::default());
        id
    }

    // Sessão expirada conta como desconhecida.
    pub async fn contains(&self, id: Uuid) -> bool {
        let now = Instant::now();
        let mut sessions = self.inner.lock().await;
        let expired = match sessions.get_mut(&id) {
            None => return false,
            Some(entry) if self.is_expired(entry, now) => true,
            Some(entry) => {
                entry.last_seen = now;
                false
            }
        };
        if expired {
            sessions.remove(&id);
        }
        !expired
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    // Sessão desconhecida começa na página inicial.
    pub async fn state(&self, id: Uuid) -> SessionState {
        self.inner
            .lock()
            .await
            .get(&id)
            .map(|entry| entry.state)
            .unwrap_or_default()
    }

    pub async fn save(&self, id: Uuid, state: SessionState) {
        let mut sessions = self.inner.lock().await;
        let entry = sessions.entry(id).or_default();
        entry.state = state;
        entry.last_seen = Instant::now();
    }

    pub async fn push_notice(&self, id: Uuid, notice: Notice) {
        let mut sessions = self.inner.lock().await;
        let entry = sessions.entry(id).or_default();
        entry.notice = Some(notice);
        entry.last_seen = Instant::now();
    }

    /// Retira o aviso pendente: ele aparece em um único render.
    pub async fn take_notice(&self, id: Uuid) -> Option<Notice> {
        self.inner
            .lock()
            .await
            .get_mut(&id)
            .and_then(|entry| entry.notice.take())
    }
}

// Id da sessão da requisição atual, colocado nos "extensions" pelo middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

// O middleware em si: garante que toda requisição tenha uma sessão conhecida
// e emite o cookie quando precisou criar uma nova.
pub async fn session_middleware(
    State(app_state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    // Cookie de uma sessão que o servidor não conhece mais (ex.: reinício) vale como ausente
    let known = match existing {
        Some(id) => app_state.sessions.contains(id).await.then_some(id),
        None => None,
    };
    let (id, is_new) = match known {
        Some(id) => (id, false),
        None => (app_state.sessions.create().await, true),
    };

    request.extensions_mut().insert(SessionId(id));
    let response = next.run(request).await;

    if is_new {
        tracing::debug!(session = %id, "Nova sessão criada");
        let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        (jar.add(cookie), response).into_response()
    } else {
        response
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionId>()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Requisição sem sessão (middleware ausente)").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::navigation::Page;

    #[tokio::test]
    async fn new_session_starts_at_home() {
        let store = SessionStore::default();
        let id = store.create().await;
        assert!(store.contains(id).await);
        assert_eq!(store.state(id).await, SessionState::default());
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::default();
        let a = store.create().await;
        let b = store.create().await;

        store.save(a, SessionState { page: Page::Edit, selected_id: Some(9) }).await;

        assert_eq!(store.state(a).await.page, Page::Edit);
        assert_eq!(store.state(b).await, SessionState::default());
    }

    #[tokio::test]
    async fn notice_is_shown_only_once() {
        let store = SessionStore::default();
        let id = store.create().await;

        store.push_notice(id, Notice::success("Item cadastrado com sucesso!")).await;

        assert_eq!(
            store.take_notice(id).await,
            Some(Notice::success("Item cadastrado com sucesso!"))
        );
        assert_eq!(store.take_notice(id).await, None);
    }

    #[tokio::test]
    async fn store_never_exceeds_its_capacity() {
        let store = SessionStore::with_limits(Duration::from_secs(3600), 3);
        let mut last = Uuid::nil();
        for _ in 0..50 {
            last = store.create().await;
        }

        assert_eq!(store.len().await, 3);
        assert!(store.contains(last).await);
    }

    #[tokio::test]
    async fn oldest_session_is_evicted_first() {
        let store = SessionStore::with_limits(Duration::from_secs(3600), 2);
        let first = store.create().await;
        let second = store.create().await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        // usar a primeira a torna mais recente que a segunda
        store.save(first, SessionState { page: Page::List, selected_id: None }).await;

        let third = store.create().await;

        assert!(store.contains(first).await);
        assert!(!store.contains(second).await);
        assert!(store.contains(third).await);
    }

    #[tokio::test]
    async fn idle_sessions_expire() {
        let store = SessionStore::with_limits(Duration::ZERO, 100);
        let stale = store.create().await;

        assert!(!store.contains(stale).await);
        store.create().await;
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn unknown_session_reads_as_default() {
        let store = SessionStore::default();
        assert_eq!(store.state(Uuid::new_v4()).await, SessionState::default());
        assert_eq!(store.take_notice(Uuid::new_v4()).await, None);
    }
}
