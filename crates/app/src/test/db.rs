//! Per-test Postgres databases inside one shared container.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, query};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

use crate::database;

const DB_USER: &str = "pantry_test";
const DB_PASSWORD: &str = "pantry_test_password";

static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases to drop, fed by `TestDb::drop`.
static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Database names are interpolated into DDL, so only plain identifiers are accepted.
fn is_safe_database_name(name: &str) -> bool {
    let mut chars = name.chars();

    (1..=63).contains(&name.len())
        && chars
            .next()
            .is_some_and(|first| first.is_ascii_lowercase() || first == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(DB_USER)
        .with_password(DB_PASSWORD)
        .with_db_name(DB_USER)
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn start_drop_queue() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(error) = drop_database(&name).await {
                eprintln!("Failed to drop test database '{name}': {error}");
            }
        }
    });

    sender
}

async fn admin_url() -> String {
    let container = POSTGRES_CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{DB_USER}:{DB_PASSWORD}@{host}:{port}")
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    if !is_safe_database_name(name) || POSTGRES_CONTAINER.get().is_none() {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&format!("{}/postgres", admin_url().await)).await?;

    query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database, dropped in the background when this value is dropped.
///
/// Every test gets its own database, so service methods can commit normally and tests never
/// observe each other's rows.
#[derive(Debug)]
pub(crate) struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_QUEUE.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        DROP_QUEUE.get_or_init(start_drop_queue).await;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Clock is before the unix epoch")
            .as_nanos();

        let name = format!(
            "pantry_test_{nanos}_{}",
            DB_COUNTER.fetch_add(1, Ordering::Relaxed)
        );

        assert!(is_safe_database_name(&name), "unsafe database name {name}");

        let admin_url = admin_url().await;

        let mut conn = PgConnection::connect(&format!("{admin_url}/postgres"))
            .await
            .expect("Failed to connect to maintenance database");

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&format!("{admin_url}/{name}"))
            .await
            .expect("Failed to connect to test database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self { pool, name }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_database_names() {
        assert!(is_safe_database_name("pantry_test_1"));
        assert!(is_safe_database_name("_leading_underscore"));
    }

    #[test]
    fn unsafe_database_names() {
        assert!(!is_safe_database_name(""));
        assert!(!is_safe_database_name(&"a".repeat(64)));
        assert!(!is_safe_database_name("1starts_with_digit"));
        assert!(!is_safe_database_name("has-hyphen"));
        assert!(!is_safe_database_name("has\"quote"));
        assert!(!is_safe_database_name("Upper"));
    }

    #[tokio::test]
    async fn migrations_create_schema() {
        let test_db = TestDb::new().await;

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT table_name::text FROM information_schema.tables \
             WHERE table_schema = 'public' AND table_name <> '_sqlx_migrations' \
             ORDER BY table_name",
        )
        .fetch_all(test_db.pool())
        .await
        .expect("Failed to list tables");

        assert_eq!(
            tables,
            [
                "brand",
                "current_cart",
                "product_shop_prices",
                "products",
                "shops",
                "volume_unit",
            ]
        );
    }
}
