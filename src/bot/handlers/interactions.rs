//! Routing of archive button, form and dropdown interactions.
//!
//! The picker runs in two steps: the "View a Archive" button opens a date
//! form, the submitted form opens a selection session and answers with a
//! name dropdown, and each dropdown choice shows one entry. All replies are
//! private to the clicking user.

use crate::{
    bot::{BotData, ui},
    core::{
        commands::{self, Actor, BrowseOutcome},
        format,
        session::Selection,
    },
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::debug;

/// Framework event hook; only interaction events are of interest here.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<()> {
    if let serenity::FullEvent::InteractionCreate { interaction } = event {
        match interaction {
            serenity::Interaction::Component(component) => {
                handle_component(ctx, component, data).await?;
            }
            serenity::Interaction::Modal(modal) => handle_modal(ctx, modal, data).await?,
            _ => {}
        }
    }
    Ok(())
}

fn private_message(content: impl Into<String>) -> serenity::CreateInteractionResponseMessage {
    serenity::CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true)
}

fn member_role_ids(member: Option<&serenity::Member>) -> Vec<u64> {
    member
        .map(|m| m.roles.iter().map(|r| r.get()).collect())
        .unwrap_or_default()
}

async fn handle_component(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    data: &BotData,
) -> Result<()> {
    let custom_id = component.data.custom_id.as_str();

    if custom_id == ui::VIEW_ARCHIVE_ID {
        debug!("{} opened the archive date form", component.user.name);
        component
            .create_response(ctx, serenity::CreateInteractionResponse::Modal(ui::date_modal()))
            .await?;
        return Ok(());
    }

    let Some(session_id) = ui::parse_name_select_id(custom_id) else {
        return Ok(());
    };

    let index = match &component.data.kind {
        serenity::ComponentInteractionDataKind::StringSelect { values } => {
            values.first().and_then(|v| v.parse::<usize>().ok())
        }
        _ => None,
    };

    let tag = component.user.tag();
    let role_ids = member_role_ids(component.member.as_ref());
    let actor = Actor {
        tag: &tag,
        role_ids: &role_ids,
    };

    let selection = match index {
        Some(index) => commands::pick_entry(&data.archive(), &data.sessions, &actor, session_id, index),
        None => Selection::OutOfRange,
    };

    let response = match selection {
        Selection::Found { date, entry } => serenity::CreateInteractionResponseMessage::new()
            .embed(ui::entry_embed(&date, &entry))
            .ephemeral(true),
        Selection::Expired => private_message(format::SELECTION_EXPIRED),
        Selection::OutOfRange => private_message(format::ENTRY_UNAVAILABLE),
    };

    component
        .create_response(ctx, serenity::CreateInteractionResponse::Message(response))
        .await?;
    Ok(())
}

/// Value of the date input among the rows of a submitted form.
fn submitted_date(rows: &[serenity::ActionRow]) -> String {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            serenity::ActionRowComponent::InputText(input) if input.custom_id == ui::DATE_INPUT_ID => {
                input.value.clone()
            }
            _ => None,
        })
        .unwrap_or_default()
}

async fn handle_modal(
    ctx: &serenity::Context,
    modal: &serenity::ModalInteraction,
    data: &BotData,
) -> Result<()> {
    if modal.data.custom_id != ui::DATE_MODAL_ID {
        return Ok(());
    }

    let date = submitted_date(&modal.data.components);
    let tag = modal.user.tag();
    let role_ids = member_role_ids(modal.member.as_ref());
    let actor = Actor {
        tag: &tag,
        role_ids: &role_ids,
    };

    // The form's interaction id doubles as the selection session id
    let session_id = modal.id.get();
    let outcome = commands::browse_date(&data.archive(), &data.sessions, &actor, session_id, &date).await;

    let response = match outcome {
        BrowseOutcome::InvalidDate => private_message(format::INVALID_DATE),
        BrowseOutcome::Empty => private_message(format::NO_ENTRIES_FOR_DATE),
        BrowseOutcome::Failed => private_message(format::READ_FAILED),
        BrowseOutcome::Candidates(entries) => {
            let shown = entries.len().min(ui::SELECT_OPTION_LIMIT);
            private_message(format::select_prompt(&date, shown, entries.len()))
                .components(vec![ui::name_select(session_id, &entries)])
        }
    };

    modal
        .create_response(ctx, serenity::CreateInteractionResponse::Message(response))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn rows(json: serde_json::Value) -> Vec<serenity::ActionRow> {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_submitted_date_reads_date_input() {
        let rows = rows(serde_json::json!([
            {
                "type": 1,
                "components": [
                    { "type": 4, "custom_id": "other", "style": 1, "label": "Other", "value": "x" }
                ]
            },
            {
                "type": 1,
                "components": [
                    { "type": 4, "custom_id": ui::DATE_INPUT_ID, "style": 1, "label": "Date", "value": "2025-01-01" }
                ]
            }
        ]));

        assert_eq!(submitted_date(&rows), "2025-01-01");
    }

    #[test]
    fn test_submitted_date_defaults_to_empty() {
        let rows = rows(serde_json::json!([
            {
                "type": 1,
                "components": [
                    { "type": 4, "custom_id": "other", "style": 1, "label": "Other", "value": "x" }
                ]
            }
        ]));

        assert_eq!(submitted_date(&rows), "");
        assert_eq!(submitted_date(&[]), "");
    }
}
