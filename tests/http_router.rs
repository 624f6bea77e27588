//! Testes pelo router completo (`app()`): rotas, middleware de sessão,
//! cookie e decodificação real dos formulários.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use estoque_uniformes::{
    app,
    config::{AppState, Config},
    middleware::session::SESSION_COOKIE,
};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

async fn test_app(max_sessions: usize) -> (Router, AppState, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = Config {
        database_url: format!("sqlite://{}", dir.path().join("uniforms.db").display()),
        bind_addr: "127.0.0.1:0".to_string(),
        logo_path: dir.path().join("logo.png"),
        max_connections: 1,
        session_idle_timeout: Duration::from_secs(3600),
        max_sessions,
    };
    let state = AppState::new(config).await.expect("build app state");
    (app(state.clone()), state, dir)
}

fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

// "estoque_sessao=<uuid>; HttpOnly; ..." -> "estoque_sessao=<uuid>"
fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().trim().to_string()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

async fn get_page(router: &Router, cookie: &str) -> String {
    let response = router
        .clone()
        .oneshot(
            Request::get("/")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_text(response).await
}

async fn post_form(router: &Router, cookie: &str, path: &str, form: &str) -> Response {
    router
        .clone()
        .oneshot(
            Request::post(path)
                .header(header::COOKIE, cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn post_ok(router: &Router, cookie: &str, path: &str, form: &str) {
    let response = post_form(router, cookie, path, form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "POST {}", path);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}

async fn open_session(router: &Router) -> String {
    let response = router
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    cookie_pair(&set_cookie(&response).expect("session cookie"))
}

#[tokio::test]
async fn first_visit_issues_session_cookie() {
    let (router, _state, _dir) = test_app(100).await;

    let response = router
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response).expect("set-cookie header");
    assert!(cookie.starts_with(&format!("{}=", SESSION_COOKIE)));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn known_cookie_is_not_reissued() {
    let (router, _state, _dir) = test_app(100).await;
    let cookie = open_session(&router).await;

    let response = router
        .clone()
        .oneshot(
            Request::get("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn stale_cookie_gets_a_fresh_session_on_home() {
    let (router, _state, _dir) = test_app(100).await;
    let stale = format!("{}={}", SESSION_COOKIE, Uuid::new_v4());

    let response = router
        .clone()
        .oneshot(
            Request::get("/")
                .header(header::COOKIE, &stale)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let fresh = cookie_pair(&set_cookie(&response).expect("new cookie"));
    assert_ne!(fresh, stale);
    assert!(body_text(response).await.contains("Controle de Estoque de Items"));
}

#[tokio::test]
async fn cookieless_clients_do_not_grow_the_store_without_bound() {
    let (router, state, _dir) = test_app(10).await;

    for _ in 0..200 {
        let response = router
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert!(state.sessions.len().await <= 10);
}

#[tokio::test]
async fn stock_scenario_over_http() {
    let (router, state, _dir) = test_app(100).await;
    let cookie = open_session(&router).await;

    post_ok(&router, &cookie, "/navegar", "destino=add").await;
    post_ok(
        &router,
        &cookie,
        "/uniformes",
        "name=Polo+Azul&uniform_type=Masculino&size=M&model=Polo&color=Azul&quantity=10&description=",
    )
    .await;
    assert!(get_page(&router, &cookie).await.contains("Item cadastrado com sucesso!"));

    let created = state.uniform_service.list_all().await.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name.as_deref(), Some("Polo Azul"));
    assert_eq!(created[0].description, None);
    let id = created[0].id;

    post_ok(&router, &cookie, "/navegar", "destino=home").await;
    post_ok(&router, &cookie, "/navegar", "destino=list").await;
    assert!(get_page(&router, &cookie).await.contains("<td>10</td>"));

    post_ok(&router, &cookie, "/navegar", "destino=home").await;
    post_ok(&router, &cookie, "/navegar", "destino=move_stock_select").await;
    assert!(get_page(&router, &cookie).await.contains("Qtd: 10"));
    post_ok(&router, &cookie, "/selecionar", &format!("id={}", id)).await;

    post_ok(&router, &cookie, "/uniformes/movimentar", "direction=out&amount=15").await;
    assert!(get_page(&router, &cookie)
        .await
        .contains("Não há estoque suficiente para a saída. Quantidade disponível: 10"));
    assert_eq!(state.uniform_service.get(id).await.unwrap().quantity, 10);

    post_ok(&router, &cookie, "/uniformes/movimentar", "direction=out&amount=5").await;
    assert!(get_page(&router, &cookie).await.contains("Estoque movimentado com sucesso!"));
    assert_eq!(state.uniform_service.get(id).await.unwrap().quantity, 5);

    post_ok(&router, &cookie, "/navegar", "destino=home").await;
    post_ok(&router, &cookie, "/navegar", "destino=delete_select").await;
    post_ok(&router, &cookie, "/selecionar", &format!("id={}", id)).await;
    post_ok(&router, &cookie, "/uniformes/excluir", "").await;

    assert!(get_page(&router, &cookie).await.contains("Item excluído com sucesso!"));
    assert!(state.uniform_service.find(id).await.unwrap().is_none());
}

#[tokio::test]
async fn malformed_form_becomes_a_notice_not_a_rejection() {
    let (router, _state, _dir) = test_app(100).await;
    let cookie = open_session(&router).await;

    post_ok(&router, &cookie, "/navegar", "destino=nao_existe").await;

    assert!(get_page(&router, &cookie).await.contains("Formulário inválido"));
}

#[tokio::test]
async fn health_and_missing_logo() {
    let (router, _state, _dir) = test_app(100).await;

    let health = router
        .clone()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(body_text(health).await, "OK");

    let logo = router
        .clone()
        .oneshot(Request::get("/logo.png").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(logo.status(), StatusCode::NOT_FOUND);
}
