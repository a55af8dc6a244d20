//! Database bootstrap: create the database, the schema and the `customer` table when missing.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const CUSTOMER_TABLE: &str = "customer";

/// Schema-qualified, quoted table name (e.g. `"public"."customer"`).
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(table))
}

/// Create schema and `customer` table if they do not exist. Primary key on `id`, nothing else.
pub async fn ensure_customer_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY,
            first_name TEXT,
            last_name TEXT,
            date_of_birth DATE,
            active BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
        qualified_table(schema, CUSTOMER_TABLE)
    );
    sqlx::query(&ddl).execute(pool).await?;
    let relax_names = format!(
        "ALTER TABLE {} ALTER COLUMN first_name DROP NOT NULL, ALTER COLUMN last_name DROP NOT NULL",
        qualified_table(schema, CUSTOMER_TABLE)
    );
    sqlx::query(&relax_names).execute(pool).await?;
    tracing::info!(schema, table = CUSTOMER_TABLE, "customer table ready");
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database if absent.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let invalid = || sqlx::Error::Configuration(format!("DATABASE_URL has no database path: {}", url).into());
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..].find('/').ok_or_else(invalid)? + scheme_end + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim().to_string();
    let query = parts.next().map(|q| format!("?{}", q)).unwrap_or_default();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres{}", base, query), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
