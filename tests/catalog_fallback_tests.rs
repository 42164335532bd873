use ecomoving::catalog::{CatalogEditor, CatalogLoader, CatalogSource, ProductSource};
use ecomoving::catalog::fallback::bundled_products;
use ecomoving::config::SupabaseConfig;
use ecomoving::supabase::SupabaseClient;
use ecomoving::SiteError;
use ecomoving_schema::Product;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

const STAGED_ID: &str = "3e7c1d2a-8b4f-4a6e-9c0d-1f2e3a4b5c6d";

fn client_for(server: &ServerGuard) -> SupabaseClient {
    let cfg = SupabaseConfig {
        url: Some(Url::parse(&server.url()).expect("mock url")),
        anon_key: "anon-key".to_string(),
        ..Default::default()
    };
    SupabaseClient::from_config(&cfg).expect("client should build")
}

fn loader_for(server: &ServerGuard, fallback: Option<std::path::PathBuf>) -> CatalogLoader {
    CatalogLoader::new(client_for(server), "productos", "agent_buffer", fallback)
}

#[tokio::test]
async fn failing_live_table_falls_back_to_approved_buffer() {
    let mut server = Server::new_async().await;
    let _live = server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code":"42P01","message":"relation \"productos\" does not exist"}"#)
        .create_async()
        .await;
    let buffer = server
        .mock("GET", "/rest/v1/agent_buffer")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "eq.approved".into()),
            Matcher::UrlEncoded("order".into(), "found_at.desc".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                { "id": STAGED_ID, "name": "Libreta de piedra", "status": "approved",
                  "technical_specs": { "category": "Cuadernos" } },
                { "id": 7, "name": "Lápiz de semillas", "status": "approved" }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let load = loader_for(&server, None).load().await;
    buffer.assert_async().await;
    assert_eq!(load.source, CatalogSource::Buffer);
    let ids: Vec<&str> = load.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![STAGED_ID, "7"]);
    assert_eq!(load.products[0].category, "Cuadernos");
    assert_eq!(load.products[1].category, "Otros");
    assert_eq!(load.products[1].wholesaler, "Premium");
}

#[tokio::test]
async fn staged_rows_with_malformed_specs_still_count() {
    let mut server = Server::new_async().await;
    let _live = server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::Any)
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
            json!([
                { "id": STAGED_ID, "name": "Mochila de yute", "status": "approved",
                  "technical_specs": "{\"specs\":[\"Yute\"]}",
                  "features": ["Yute natural"] },
                { "id": 8, "name": "Botella de vidrio", "status": "approved",
                  "technical_specs": { "category": ["Botellas"] } }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let load = loader_for(&server, None).load().await;
    assert_eq!(load.source, CatalogSource::Buffer);
    assert_eq!(load.products.len(), 2);
    assert_eq!(load.products[0].name, "Mochila de yute");
    assert_eq!(load.products[0].features, vec!["Yute natural".to_string()]);
    assert_eq!(load.products[1].category, "Otros");
}

#[tokio::test]
async fn empty_tables_fall_back_to_static_data() {
    let mut server = Server::new_async().await;
    for table in ["/rest/v1/productos", "/rest/v1/agent_buffer"] {
        server
            .mock("GET", table)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;
    }

    let load = loader_for(&server, None).load().await;
    assert_eq!(load.source, CatalogSource::Bundled);
    assert_eq!(load.products, bundled_products());

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("ecomoving-catalog-{}-{}.json", std::process::id(), nanos));
    std::fs::write(
        &path,
        json!([{ "id": "local-1", "name": "Bolsa de algodón", "category": "Bolsas" }]).to_string(),
    )
    .expect("write fallback file");

    let load = loader_for(&server, Some(path.clone())).load().await;
    let _ = std::fs::remove_file(&path);
    assert_eq!(load.source, CatalogSource::File);
    assert_eq!(load.products.len(), 1);
    assert_eq!(load.products[0].name, "Bolsa de algodón");
}

#[tokio::test]
async fn save_patches_live_row_when_it_exists() {
    let mut server = Server::new_async().await;
    let _exists = server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("select".into(), "id".into()),
            Matcher::UrlEncoded("id".into(), format!("eq.{STAGED_ID}")),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{ "id": STAGED_ID }]).to_string())
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/rest/v1/productos")
        .match_query(Matcher::UrlEncoded("id".into(), format!("eq.{STAGED_ID}")))
        .match_body(Matcher::Json(json!({
            "nombre": "Termo de acero",
            "descripcion": "Doble pared",
            "categoria": "Botellas",
            "imagen_principal": "b.jpg",
            "imagenes_galeria": ["b.jpg", "a.jpg"],
            "features": ["750 ml"],
            "wholesaler": "Ecomoving"
        })))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let product = Product {
        id: STAGED_ID.to_string(),
        name: "Termo de acero".to_string(),
        description: "Doble pared".to_string(),
        features: vec!["750 ml".to_string()],
        image: "a.jpg".to_string(),
        images: vec!["a.jpg".to_string(), "b.jpg".to_string(), String::new()],
        category: "Botellas".to_string(),
        wholesaler: "Ecomoving".to_string(),
        is_premium: false,
    };

    let editor = CatalogEditor::new(client_for(&server), "productos", "agent_buffer");
    let table = editor
        .save(&product, Some("b.jpg"))
        .await
        .expect("save should succeed");
    assert_eq!(table, ProductSource::Live);
    patch.assert_async().await;
}

#[tokio::test]
async fn failed_existence_check_aborts_the_save() {
    let mut server = Server::new_async().await;
    let _exists = server
        .mock("GET", "/rest/v1/productos")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Invalid API key","hint":"Double check your key"}"#)
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let editor = CatalogEditor::new(client_for(&server), "productos", "agent_buffer");
    let product = Product {
        id: STAGED_ID.to_string(),
        name: "Termo".to_string(),
        ..Default::default()
    };
    let err = editor
        .save(&product, None)
        .await
        .expect_err("save must fail");
    assert!(matches!(err, SiteError::Postgrest { .. }));
    assert!(err.user_message().contains("Invalid API key"));
    patch.assert_async().await;
}
