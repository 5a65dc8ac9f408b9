use super::entities::LocationRow;
#[cfg(feature = "ssr")]
use sqlx::Row;

#[cfg(feature = "ssr")]
type DbResult<T> = Result<T, sqlx::Error>;

#[cfg(feature = "ssr")]
fn row_from(row: sqlx::postgres::PgRow) -> LocationRow {
    LocationRow {
        username: row.get("username"),
        koordinat: row.get("koordinat"),
        pesan: row.get("pesan"),
    }
}

/// Select-all over the "Location" table.
#[cfg(feature = "ssr")]
pub async fn list_locations() -> DbResult<Vec<LocationRow>> {
    let pool = crate::db::pool::get_pool();

    let rows = sqlx::query(r#"SELECT username, koordinat, pesan FROM "Location" ORDER BY username"#)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(row_from).collect())
}

/// Select-by-username, expecting 0 or 1 row.
#[cfg(feature = "ssr")]
pub async fn find_location(username: &str) -> DbResult<Option<LocationRow>> {
    let pool = crate::db::pool::get_pool();

    let row = sqlx::query(
        r#"SELECT username, koordinat, pesan FROM "Location" WHERE username = $1"#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(row_from))
}

#[cfg(feature = "ssr")]
pub async fn insert_location(username: &str, koordinat: &str, pesan: &str) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query(r#"INSERT INTO "Location" (username, koordinat, pesan) VALUES ($1, $2, $3)"#)
        .bind(username)
        .bind(koordinat)
        .bind(pesan)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(feature = "ssr")]
pub async fn update_location(username: &str, koordinat: &str, pesan: &str) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query(r#"UPDATE "Location" SET koordinat = $2, pesan = $3 WHERE username = $1"#)
        .bind(username)
        .bind(koordinat)
        .bind(pesan)
        .execute(pool)
        .await?;

    Ok(())
}

/// Marker drags rewrite only the koordinat column.
#[cfg(feature = "ssr")]
pub async fn update_koordinat(username: &str, koordinat: &str) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query(r#"UPDATE "Location" SET koordinat = $2 WHERE username = $1"#)
        .bind(username)
        .bind(koordinat)
        .execute(pool)
        .await?;

    Ok(())
}
