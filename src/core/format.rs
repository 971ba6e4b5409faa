//! Reply texts and listing layout.
//!
//! Everything the archive says to users is built here so the command layer
//! stays free of string assembly.

use crate::core::archive::EntrySummary;
use std::{fmt::Write, path::Path};

/// Maximum length of a single chat message.
pub const MESSAGE_LIMIT: usize = 2000;

/// Maximum length of an embed description.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Maximum length of an embed title.
pub const EMBED_TITLE_LIMIT: usize = 256;

/// Longest date or name echoed back in a reply.
pub const TOKEN_ECHO_LIMIT: usize = 100;

/// Header of the full listing.
pub const LISTING_HEADER: &str = "**All Archive Entries:**";

/// Reply to a date that fails the token check.
pub const INVALID_DATE: &str =
    "Invalid date format. Use only letters, numbers, dashes, or underscores.";
/// Reply to a name that fails the token check.
pub const INVALID_NAME: &str =
    "Invalid name format. Use only letters, numbers, dashes, or underscores.";
/// Reply when the insert fails.
pub const SAVE_FAILED: &str = "Failed to save the archive.";
/// Reply when a listing or date lookup fails.
pub const READ_FAILED: &str = "Failed to read the archive.";
/// Reply to a listing of an empty archive.
pub const NO_ENTRIES: &str = "No archive entries found.";
/// Reply to a date without entries.
pub const NO_ENTRIES_FOR_DATE: &str = "No entries found for that date.";
/// Reply to a pick on a timed-out dropdown.
pub const SELECTION_EXPIRED: &str =
    "This selection has expired. Open the archive again to pick another entry.";
/// Reply to a pick whose index matches no candidate.
pub const ENTRY_UNAVAILABLE: &str = "That entry is no longer available.";

/// Cuts `text` to at most `limit` characters.
#[must_use]
pub fn clip(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Formats role ids as chat mentions joined with "or".
#[must_use]
pub fn role_mentions(role_ids: &[u64]) -> String {
    role_ids
        .iter()
        .map(|id| format!("<@&{id}>"))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Permission-denied reply naming the roles that may write.
#[must_use]
pub fn permission_denied(role_ids: &[u64]) -> String {
    format!(
        "You do not have permission to use this command. Only users with {} can save to the archive.",
        role_mentions(role_ids)
    )
}

/// Confirmation of a saved entry.
#[must_use]
pub fn saved(date: &str, name: &str) -> String {
    format!(
        "Archive saved for `{}` and `{}`.",
        clip(date, TOKEN_ECHO_LIMIT),
        clip(name, TOKEN_ECHO_LIMIT)
    )
}

/// Prompt above the name dropdown; mentions when only part of the rows fit.
#[must_use]
pub fn select_prompt(date: &str, shown: usize, total: usize) -> String {
    let date = clip(date, TOKEN_ECHO_LIMIT);
    if shown < total {
        format!("Select a name for `{date}` (showing the first {shown} of {total}):")
    } else {
        format!("Select a name for `{date}`:")
    }
}

/// Title of the embed showing one entry.
#[must_use]
pub fn entry_title(date: &str, name: &str) -> String {
    let title = format!("Archive for {date} - {name}");
    clip(&title, EMBED_TITLE_LIMIT).to_string()
}

/// Entry message as an embed description.
#[must_use]
pub fn entry_description(message: &str) -> &str {
    clip(message, EMBED_DESCRIPTION_LIMIT)
}

/// One line of the full listing.
#[must_use]
pub fn listing_line(entry: &EntrySummary) -> String {
    format!("**Date:** `{}` | **Name:** `{}`", entry.date, entry.name)
}

/// Splits the full listing into messages of at most `limit` characters.
///
/// The header leads the first message and lines are never split between
/// messages; a single line longer than `limit` is cut short.
#[must_use]
pub fn listing_chunks(entries: &[EntrySummary], limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = LISTING_HEADER.to_string();

    for entry in entries {
        let line = listing_line(entry);
        let line = clip(&line, limit);

        if current.chars().count() + 1 + line.chars().count() > limit {
            chunks.push(std::mem::take(&mut current));
            current = line.to_string();
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Body of the documentation embed posted at startup.
pub fn documentation(prefix: &str, role_ids: &[u64], log_path: &Path) -> Result<String, std::fmt::Error> {
    let roles = role_ids
        .iter()
        .map(|id| format!("<@&{id}>"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut text = String::new();
    writeln!(text, "**Commands:**")?;
    writeln!(text, "> `{prefix}archive` or `/archive` — Open the archive interface")?;
    writeln!(
        text,
        "> `{prefix}sendtoarchive <YEAR>-<MONTH>-<DAY> <NAME> <TEXT TO ARCHIVE>` — Save to the archive (roles: {roles})"
    )?;
    writeln!(
        text,
        "> `{prefix}viewallarchives` or `/archive-viewall` — View all archive entries"
    )?;
    writeln!(text)?;
    writeln!(text, "**Who can save to the archive:**")?;
    writeln!(text, "> Only users with {}", role_mentions(role_ids))?;
    writeln!(text)?;
    write!(text, "**All actions are logged in `{}`**", log_path.display())?;
    Ok(text)
}
