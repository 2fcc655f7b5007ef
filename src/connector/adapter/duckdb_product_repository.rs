use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use duckdb::{params, Connection};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::ProductRepository;
use crate::domain::{DomainError, Product};

pub struct DuckdbProductRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbProductRepository {
    pub fn new(db_path: &Path) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::storage(format!("Failed to open DuckDB database: {}", e)))?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// In-memory database. Used by tests and the `--memory-storage` mode.
    pub fn in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DomainError::storage(format!("Failed to open DuckDB in-memory DB: {}", e))
        })?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                image_url TEXT,
                rating DOUBLE NOT NULL,
                created_at BIGINT NOT NULL
            );
            "#,
        )
        .map_err(|e| DomainError::storage(format!("Failed to initialize schema: {}", e)))?;

        debug!("DuckDB products schema initialized");
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for DuckdbProductRepository {
    async fn insert(&self, product: &Product) -> Result<(), DomainError> {
        let conn = self.conn.lock().await;

        conn.execute(
            r#"
            INSERT INTO products (id, name, title, description, image_url, rating, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                product.id(),
                product.name(),
                product.title(),
                product.description(),
                product.image_url(),
                product.rating(),
                product.created_at(),
            ],
        )
        .map_err(|e| DomainError::storage(format!("Failed to insert product: {}", e)))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(
                "SELECT id, name, title, description, image_url, rating, created_at \
                 FROM products ORDER BY created_at DESC",
            )
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map(params![], |row| {
                Ok(Product::reconstitute(
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get::<_, Option<String>>(4)?,
                    row.get(5)?,
                    row.get(6)?,
                ))
            })
            .map_err(|e| DomainError::storage(format!("Failed to query products: {}", e)))?;

        let mut products = Vec::new();
        for row in rows {
            products
                .push(row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?);
        }

        Ok(products)
    }
}
