//! Archive store - saving and reading archive entries.
//!
//! Entries are append-only: nothing here updates or deletes a row, and
//! `(date, name)` is not unique, so saving the same entry twice keeps both.
//! Callers validate tokens and check the role gate before calling [`insert`].

use crate::{
    config::database::ensure_archive_table,
    entities::{Archive, archive},
    errors::Result,
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*, sea_query::Expr};

/// A `(date, name)` pair as shown in the full listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    /// Date token
    pub date: String,
    /// Name token
    pub name: String,
}

/// A `(name, message)` pair filed under one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetail {
    /// Name token
    pub name: String,
    /// Archived text, possibly empty
    pub message: String,
}

/// Appends an entry, creating the table first if it is missing.
pub async fn insert(db: &DatabaseConnection, date: &str, name: &str, message: &str) -> Result<()> {
    ensure_archive_table(db).await?;

    let entry = archive::ActiveModel {
        date: Set(date.to_string()),
        name: Set(name.to_string()),
        message: Set(message.to_string()),
        ..Default::default()
    };
    Archive::insert(entry).exec_without_returning(db).await?;

    tracing::debug!("Inserted archive entry {date} / {name}");
    Ok(())
}

/// Lists every entry, newest date first.
///
/// Dates are compared as plain strings, so `2024-10-1` sorts before
/// `2024-1-1` and non-padded dates interleave oddly.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<EntrySummary>> {
    let rows: Vec<(String, String)> = Archive::find()
        .select_only()
        .column(archive::Column::Date)
        .column(archive::Column::Name)
        .order_by_desc(archive::Column::Date)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(date, name)| EntrySummary { date, name })
        .collect())
}

/// Returns the entries filed under `date`, in storage order.
pub async fn find_by_date(db: &DatabaseConnection, date: &str) -> Result<Vec<EntryDetail>> {
    let rows: Vec<(String, Option<String>)> = Archive::find()
        .select_only()
        .column(archive::Column::Name)
        .column(archive::Column::Message)
        .filter(archive::Column::Date.eq(date))
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(name, message)| EntryDetail {
            name,
            message: message.unwrap_or_default(),
        })
        .collect())
}

/// Total number of stored entries.
pub async fn count(db: &DatabaseConnection) -> Result<u64> {
    let total: Option<i64> = Archive::find()
        .select_only()
        .column_as(Expr::cust("COUNT(*)"), "count")
        .into_tuple()
        .one(db)
        .await?;

    Ok(total.and_then(|n| u64::try_from(n).ok()).unwrap_or_default())
}
