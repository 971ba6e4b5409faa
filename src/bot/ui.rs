//! Message components and embeds of the archive interface.
//!
//! Custom ids are fixed strings so the global interaction handler can route
//! clicks even for messages posted before a restart. The name dropdown
//! carries its session id as a suffix.

use crate::{
    core::{archive::EntryDetail, format},
    errors::Result,
};
use poise::serenity_prelude as serenity;
use std::path::Path;

/// Button that opens the date form.
pub const VIEW_ARCHIVE_ID: &str = "view_archive";
/// Date entry form.
pub const DATE_MODAL_ID: &str = "archive_date_modal";
/// Text input inside the date form.
pub const DATE_INPUT_ID: &str = "archive_date";
/// Prefix of name dropdown ids, followed by the session id.
pub const NAME_SELECT_PREFIX: &str = "archive_pick:";

/// Most options a dropdown can hold.
pub const SELECT_OPTION_LIMIT: usize = 25;
const OPTION_LABEL_LIMIT: usize = 100;

/// Longest date the form accepts.
pub const DATE_INPUT_MAX_LENGTH: u16 = 100;

const GREEN: u32 = 0x002E_CC71;

/// Welcome embed of the archive entry point.
#[must_use]
pub fn archive_embed() -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("HRM ARCHIVE")
        .description("Welcome to the HRM archives.")
}

/// Row holding the "View a Archive" button.
#[must_use]
pub fn archive_buttons() -> serenity::CreateActionRow {
    serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(VIEW_ARCHIVE_ID)
            .label("View a Archive")
            .style(serenity::ButtonStyle::Success),
    ])
}

/// Single-field form asking for a date.
#[must_use]
pub fn date_modal() -> serenity::CreateModal {
    serenity::CreateModal::new(DATE_MODAL_ID, "Enter Date").components(vec![
        serenity::CreateActionRow::InputText(
            serenity::CreateInputText::new(serenity::InputTextStyle::Short, "Date", DATE_INPUT_ID)
                .placeholder("YYYY-MM-DD")
                .max_length(DATE_INPUT_MAX_LENGTH)
                .required(true),
        ),
    ])
}

/// `(label, value)` pairs of the name dropdown; the value is the entry's index.
fn name_options(entries: &[EntryDetail]) -> Vec<(String, String)> {
    entries
        .iter()
        .take(SELECT_OPTION_LIMIT)
        .enumerate()
        .map(|(i, entry)| {
            (
                format::clip(&entry.name, OPTION_LABEL_LIMIT).to_string(),
                i.to_string(),
            )
        })
        .collect()
}

/// Dropdown with one option per entry, valued by the entry's index.
#[must_use]
pub fn name_select(session_id: u64, entries: &[EntryDetail]) -> serenity::CreateActionRow {
    let options = name_options(entries)
        .into_iter()
        .map(|(label, value)| serenity::CreateSelectMenuOption::new(label, value))
        .collect();

    let menu = serenity::CreateSelectMenu::new(
        format!("{NAME_SELECT_PREFIX}{session_id}"),
        serenity::CreateSelectMenuKind::String { options },
    )
    .placeholder("Select a name...")
    .min_values(1)
    .max_values(1);

    serenity::CreateActionRow::SelectMenu(menu)
}

/// Session id encoded in a name dropdown id.
#[must_use]
pub fn parse_name_select_id(custom_id: &str) -> Option<u64> {
    custom_id.strip_prefix(NAME_SELECT_PREFIX)?.parse().ok()
}

/// Embed showing one archived entry.
#[must_use]
pub fn entry_embed(date: &str, entry: &EntryDetail) -> serenity::CreateEmbed {
    let embed = serenity::CreateEmbed::new().title(format::entry_title(date, &entry.name));
    if entry.message.is_empty() {
        embed
    } else {
        embed.description(format::entry_description(&entry.message))
    }
}

/// Documentation embed posted on startup.
pub fn documentation_embed(
    prefix: &str,
    role_ids: &[u64],
    log_path: &Path,
) -> Result<serenity::CreateEmbed> {
    Ok(serenity::CreateEmbed::new()
        .title("🟩 Archive Management Documentation 🟩")
        .colour(GREEN)
        .description(format::documentation(prefix, role_ids, log_path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_select_id() {
        assert_eq!(parse_name_select_id("archive_pick:12345"), Some(12345));
        assert_eq!(parse_name_select_id("archive_pick:"), None);
        assert_eq!(parse_name_select_id("archive_pick:abc"), None);
        assert_eq!(parse_name_select_id(VIEW_ARCHIVE_ID), None);
    }

    fn entry(name: &str) -> EntryDetail {
        EntryDetail {
            name: name.to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_name_options_capped_at_dropdown_limit() {
        let entries: Vec<EntryDetail> = (0..30).map(|i| entry(&format!("Name{i}"))).collect();

        let options = name_options(&entries);

        assert_eq!(options.len(), SELECT_OPTION_LIMIT);
        assert_eq!(options[0], ("Name0".to_string(), "0".to_string()));
        assert_eq!(options[24], ("Name24".to_string(), "24".to_string()));
    }

    #[test]
    fn test_long_name_label_is_cut() {
        let options = name_options(&[entry(&"n".repeat(150))]);
        assert_eq!(options[0].0.chars().count(), OPTION_LABEL_LIMIT);
        assert_eq!(options[0].1, "0");
    }

    #[test]
    fn test_select_id_round_trip() {
        let id = format!("{NAME_SELECT_PREFIX}{}", u64::MAX);
        assert_eq!(parse_name_select_id(&id), Some(u64::MAX));
    }
}
