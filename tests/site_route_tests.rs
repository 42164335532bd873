use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use ecomoving::config::Config;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;

const ADMIN_KEY: &str = "admin-pwd";
const LIVE_ID: &str = "0f8a2f64-3c55-4d1e-9d6a-5b0d3c2e7a11";
const STAGED_ID: &str = "6d1b9a0e-12f4-4c8b-a3e7-9f2c4d5e6b70";
const SECOND_STAGED_ID: &str = "a4c2e8f1-5b3d-4e7a-8c9f-2d1e0b3a4c5d";

fn config_for(server: &ServerGuard) -> Config {
    let mut cfg = Config::default();
    cfg.basic.admin_key = ADMIN_KEY.to_string();
    cfg.supabase.url = Some(Url::parse(&server.url()).expect("mock url"));
    cfg.supabase.anon_key = "anon-key".to_string();
    cfg.content.poll_interval_secs = 0;
    cfg
}

async fn mock_content(server: &mut ServerGuard) {
    server
        .mock("GET", "/rest/v1/web_contenido")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                { "section": "hero", "content": { "title1": "Regalos que no se botan" } },
                { "section": "sections", "content": [
                    { "id": "s1", "title1": "Botellas reutilizables", "gallery": ["a.jpg"] }
                ] }
            ])
            .to_string(),
        )
        .create_async()
        .await;
}

async fn start_app(server: &ServerGuard) -> Router {
    let site = ecomoving::Site::start(&config_for(server))
        .await
        .expect("site should start");
    ecomoving::server::router::site_router(site.state)
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

#[tokio::test]
async fn pages_render_live_content_and_catalog() {
    let mut server = Server::new_async().await;
    mock_content(&mut server).await;
    let _live = server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::UrlEncoded("select".into(), "*".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "id": LIVE_ID,
                "nombre": "Botella de bambú",
                "categoria": "Botellas",
                "imagen_principal": "https://cdn.example.com/botella.jpg",
                "features": ["500 ml"]
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let app = start_app(&server).await;

    let resp = app.clone().oneshot(get("/")).await.expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Regalos que no se botan"));
    assert!(html.contains("Botellas reutilizables"));

    let resp = app
        .clone()
        .oneshot(get("/catalogo?categoria=BOTELLAS"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Botella de bambú"));

    let resp = app
        .clone()
        .oneshot(get(&format!("/catalogo/{LIVE_ID}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("500 ml"));

    let resp = app
        .clone()
        .oneshot(get("/catalogo/no-such-product"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(get("/nada-por-aqui"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().contains_key("x-request-id"));

    let resp = app
        .oneshot(get("/api/products?q=bamb"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Value = serde_json::from_str(&body_string(resp).await).expect("json body");
    assert_eq!(products[0]["id"], LIVE_ID);
    assert_eq!(products[0]["wholesaler"], "Ecomoving");
}

#[tokio::test]
async fn admin_routes_require_the_key() {
    let mut server = Server::new_async().await;
    mock_content(&mut server).await;
    let _live = server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    let _buffer = server
        .mock("GET", "/rest/v1/agent_buffer")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let app = start_app(&server).await;

    for (method, uri) in [
        ("POST", "/hooks/content"),
        ("POST", "/hooks/catalog"),
        ("POST", "/api/products/eco-001/save"),
        ("DELETE", "/api/products/eco-001"),
    ] {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("x-admin-key", "wrong")
                    .body(Body::empty())
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
    }

    // Reads stay public on the same path.
    let resp = app
        .clone()
        .oneshot(get("/api/products/eco-001"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/hooks/catalog")
                .header(header::AUTHORIZATION, format!("Bearer {ADMIN_KEY}"))
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let report: Value = serde_json::from_str(&body_string(resp).await).expect("json body");
    assert_eq!(report["source"], "bundled");

    // Static entries cannot be soft-deleted.
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/products/eco-001")
                .header("x-admin-key", ADMIN_KEY)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn save_writes_to_the_table_that_owns_the_product() {
    let mut server = Server::new_async().await;
    mock_content(&mut server).await;
    let _live = server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::UrlEncoded("select".into(), "*".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    let _buffer = server
        .mock("GET", "/rest/v1/agent_buffer")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "id": STAGED_ID,
                "name": "Mochila de yute",
                "status": "approved",
                "images": ["m1.jpg", "m2.jpg"],
                "technical_specs": { "category": "Mochilas", "specs": ["Yute natural"] }
            }])
            .to_string(),
        )
        .create_async()
        .await;
    let _exists = server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::UrlEncoded("select".into(), "id".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/rest/v1/agent_buffer")
        .match_query(Matcher::UrlEncoded("id".into(), format!("eq.{STAGED_ID}")))
        .match_body(Matcher::PartialJson(json!({ "images": ["m2.jpg", "m1.jpg"] })))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let app = start_app(&server).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/products/{STAGED_ID}/save"))
                .header("x-admin-key", ADMIN_KEY)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"activeImage":"m2.jpg"}"#))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let saved: Value = serde_json::from_str(&body_string(resp).await).expect("json body");
    assert_eq!(saved["table"], "buffer");
    patch.assert_async().await;
}

#[tokio::test]
async fn lead_form_redirects_or_explains() {
    let mut server = Server::new_async().await;
    mock_content(&mut server).await;
    let _live = server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;
    let _buffer = server
        .mock("GET", "/rest/v1/agent_buffer")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let app = start_app(&server).await;

    let form = |body: &'static str| {
        Request::builder()
            .method("POST")
            .uri("/lead")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("failed to build request")
    };

    let resp = app
        .clone()
        .oneshot(form("name=Ana+Rojas&email=ana%40empresa.cl&company=Empresa"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/catalogo?lead=ok")
    );

    let resp = app
        .clone()
        .oneshot(form("name=Ana&email=sin-arroba"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(resp).await.contains("correo"));

    let resp = app
        .clone()
        .oneshot(get("/catalogo?lead=ok"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    // `lead` under /catalogo/ is an ordinary product id.
    let resp = app
        .oneshot(get("/catalogo/lead"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_string(resp).await.contains("ya no está en el catálogo"));
}

/// Empty curated table, so the catalog comes from approved staging rows.
async fn mock_staged_catalog(server: &mut ServerGuard) {
    server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::UrlEncoded("select".into(), "*".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("GET", "/rest/v1/agent_buffer")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                { "id": STAGED_ID, "name": "Mochila de yute", "status": "approved",
                  "images": ["m1.jpg", "m2.jpg"],
                  "technical_specs": { "category": "Mochilas", "specs": ["Yute natural"] } },
                { "id": SECOND_STAGED_ID, "name": "Bolso de lona", "status": "approved",
                  "technical_specs": { "category": "Mochilas" } }
            ])
            .to_string(),
        )
        .create_async()
        .await;
}

fn admin_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-admin-key", ADMIN_KEY);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request")
}

#[tokio::test]
async fn local_edit_is_served_and_then_saved() {
    let mut server = Server::new_async().await;
    mock_content(&mut server).await;
    mock_staged_catalog(&mut server).await;
    let _exists = server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::UrlEncoded("select".into(), "id".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/rest/v1/agent_buffer")
        .match_query(Matcher::UrlEncoded("id".into(), format!("eq.{STAGED_ID}")))
        .match_body(Matcher::PartialJson(json!({
            "name": "Mochila editada",
            "original_description": "Yute y cuero",
            "technical_specs": { "specs": ["Yute"], "category": "Mochilas" },
            "images": ["m1.jpg", "m3.jpg"]
        })))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let app = start_app(&server).await;

    let edited = json!({
        "id": "ignored-body-id",
        "name": "Mochila editada",
        "description": "Yute y cuero",
        "category": "Mochilas",
        "image": "m1.jpg",
        "images": ["m1.jpg", "m3.jpg"],
        "features": ["Yute"]
    });
    let resp = app
        .clone()
        .oneshot(admin_request(
            "PATCH",
            &format!("/api/products/{STAGED_ID}"),
            Some(edited.clone()),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = serde_json::from_str(&body_string(resp).await).expect("json body");
    assert_eq!(updated["id"], STAGED_ID);

    let resp = app
        .clone()
        .oneshot(get(&format!("/api/products/{STAGED_ID}")))
        .await
        .expect("request failed");
    let served: Value = serde_json::from_str(&body_string(resp).await).expect("json body");
    assert_eq!(served["name"], "Mochila editada");
    assert_eq!(served["images"], json!(["m1.jpg", "m3.jpg"]));

    let resp = app
        .clone()
        .oneshot(admin_request(
            "POST",
            &format!("/api/products/{STAGED_ID}/save"),
            None,
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    patch.assert_async().await;

    let resp = app
        .clone()
        .oneshot(get(&format!("/catalogo/{SECOND_STAGED_ID}")))
        .await
        .expect("request failed");
    let html = body_string(resp).await;
    assert!(html.contains("Productos Relacionados"));
    assert!(html.contains("Mochila editada"));

    let resp = app
        .oneshot(admin_request(
            "PATCH",
            "/api/products/00000000-0000-4000-8000-000000000000",
            Some(edited),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn soft_delete_rejects_remotely_before_dropping_locally() {
    let mut server = Server::new_async().await;
    mock_content(&mut server).await;
    mock_staged_catalog(&mut server).await;
    let rejected = server
        .mock("PATCH", "/rest/v1/agent_buffer")
        .match_query(Matcher::UrlEncoded("id".into(), format!("eq.{STAGED_ID}")))
        .match_body(Matcher::Json(json!({ "status": "rejected" })))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;
    let _failing = server
        .mock("PATCH", "/rest/v1/agent_buffer")
        .match_query(Matcher::UrlEncoded(
            "id".into(),
            format!("eq.{SECOND_STAGED_ID}"),
        ))
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"permission denied for table agent_buffer"}"#)
        .create_async()
        .await;

    let app = start_app(&server).await;

    let resp = app
        .clone()
        .oneshot(admin_request(
            "DELETE",
            &format!("/api/products/{STAGED_ID}"),
            None,
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    rejected.assert_async().await;

    let resp = app
        .clone()
        .oneshot(get(&format!("/api/products/{STAGED_ID}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(admin_request(
            "DELETE",
            &format!("/api/products/{SECOND_STAGED_ID}"),
            None,
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(body_string(resp).await.contains("permission denied"));

    let resp = app
        .oneshot(get(&format!("/api/products/{SECOND_STAGED_ID}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
}
