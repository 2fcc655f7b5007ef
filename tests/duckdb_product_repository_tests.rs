use std::sync::Arc;

use shopsmith::{DuckdbProductRepository, Product, ProductRepository};
use tempfile::tempdir;

fn product_created_at(name: &str, created_at: i64) -> Product {
    Product::reconstitute(
        format!("id-{name}"),
        name.to_string(),
        format!("{name} title"),
        format!("{name} description"),
        None,
        4.0,
        created_at,
    )
}

#[tokio::test]
async fn duckdb_product_adapter_roundtrip_insert_and_list() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("shopsmith.duckdb");

    let store = Arc::new(DuckdbProductRepository::new(&db_path).expect("duckdb init"));

    let product = Product::new(
        "Trail Bottle".to_string(),
        "Leakproof Trail Bottle".to_string(),
        "Keeps drinks cold for 24 hours.".to_string(),
        Some("https://img.example/bottle.png".to_string()),
    )
    .expect("valid product");
    store.insert(&product).await.expect("insert");

    let products = store.list().await.expect("list");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id(), product.id());
    assert_eq!(products[0].name(), "Trail Bottle");
    assert_eq!(products[0].title(), "Leakproof Trail Bottle");
    assert_eq!(products[0].description(), "Keeps drinks cold for 24 hours.");
    assert_eq!(
        products[0].image_url(),
        Some("https://img.example/bottle.png")
    );
    assert_eq!(products[0].rating(), product.rating());
    assert_eq!(products[0].created_at(), product.created_at());
}

#[tokio::test]
async fn duckdb_product_adapter_lists_newest_first() {
    let store = DuckdbProductRepository::in_memory().expect("duckdb init");

    // Insert out of creation order on purpose.
    for product in [
        product_created_at("oldest", 1_000),
        product_created_at("newest", 3_000),
        product_created_at("middle", 2_000),
    ] {
        store.insert(&product).await.expect("insert");
    }

    let products = store.list().await.expect("list");
    let names: Vec<_> = products.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn duckdb_product_adapter_absent_image_url_survives_roundtrip() {
    let store = DuckdbProductRepository::in_memory().expect("duckdb init");

    let product = Product::new(
        "Bare".to_string(),
        "Bare title".to_string(),
        "Bare description".to_string(),
        None,
    )
    .expect("valid product");
    store.insert(&product).await.expect("insert");

    let products = store.list().await.expect("list");
    assert_eq!(products[0].image_url(), None);
}

#[tokio::test]
async fn duckdb_product_adapter_persists_across_reopen() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("shopsmith.duckdb");

    {
        let store = DuckdbProductRepository::new(&db_path).expect("duckdb init");
        store
            .insert(&product_created_at("durable", 42))
            .await
            .expect("insert");
        // Drop releases the write connection before reopening.
    }

    let reopened = DuckdbProductRepository::new(&db_path).expect("duckdb reopen");
    let products = reopened.list().await.expect("list");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name(), "durable");
}
