use leptos::prelude::*;
use leptos::server;
use shared_types::ProoferEntry;

#[cfg(feature = "ssr")]
use shared_types::{cities, format_koordinat, resolve_city, KoordinatError};

#[cfg(feature = "ssr")]
use crate::db::repository::{
    find_location, insert_location, list_locations, update_koordinat, update_location,
};

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
enum SubmitError {
    #[error("\"{0}\" is not a city we know. Pick one from the suggestions.")]
    UnknownCity(String),
    #[error("city dataset error: {0}")]
    Dataset(#[from] KoordinatError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Select-all resync of the local cache. Rows whose koordinat does not parse
/// are dropped rather than failing the whole fetch.
#[server]
pub async fn fetch_entries() -> Result<Vec<ProoferEntry>, ServerFnError> {
    let rows = list_locations()
        .await
        .map_err(|e| ServerFnError::new(format!("Database error: {e}")))?;
    Ok(rows.into_iter().filter_map(|row| row.into_entry()).collect())
}

/// Resolves the typed city against the static dataset and upserts the
/// proofer's row. An unknown city aborts before any mutation.
#[server]
pub async fn submit_entry(
    username: String,
    city: String,
    message: String,
) -> Result<(), ServerFnError> {
    upsert(username, city, message)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Drag-end update: rewrites only the koordinat column for one username.
#[server]
pub async fn move_entry(username: String, lat: f64, long: f64) -> Result<(), ServerFnError> {
    update_koordinat(&username, &format_koordinat(lat, long))
        .await
        .map_err(|e| ServerFnError::new(format!("Database error: {e}")))
}

#[cfg(feature = "ssr")]
async fn upsert(username: String, city: String, message: String) -> Result<(), SubmitError> {
    let found = resolve_city(&city, cities()).ok_or(SubmitError::UnknownCity(city))?;
    let at = found.coords()?;
    let koordinat = format_koordinat(at.lat, at.long);

    if find_location(&username).await?.is_some() {
        update_location(&username, &koordinat, &message).await?;
    } else {
        insert_location(&username, &koordinat, &message).await?;
    }
    Ok(())
}
