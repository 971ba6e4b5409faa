//! Archive Discord commands - entry point, saving and the full listing.
//!
//! Every command exists both as a text command and as a slash command.
//! Slash replies are private to the invoker.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, ui},
        core::{
            commands::{self, Actor, ListOutcome, SaveOutcome, Surface},
            format,
        },
        errors::Result,
    };

    fn surface(ctx: &Context<'_>) -> Surface {
        match ctx {
            poise::Context::Prefix(_) => Surface::Text,
            poise::Context::Application(_) => Surface::Slash,
        }
    }

    async fn author_role_ids(ctx: &Context<'_>) -> Vec<u64> {
        ctx.author_member()
            .await
            .map(|member| member.roles.iter().map(|r| r.get()).collect())
            .unwrap_or_default()
    }

    async fn reply_private(ctx: &Context<'_>, content: impl Into<String>) -> Result<()> {
        ctx.send(
            poise::CreateReply::default()
                .content(content)
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    /// Open the HRM archive interface (interactive).
    #[poise::command(slash_command, prefix_command)]
    pub async fn archive(ctx: Context<'_>) -> Result<()> {
        ctx.send(
            poise::CreateReply::default()
                .embed(ui::archive_embed())
                .components(vec![ui::archive_buttons()])
                .ephemeral(true),
        )
        .await?;

        let tag = ctx.author().tag();
        let actor = Actor {
            tag: &tag,
            role_ids: &[],
        };
        let invocation = format!("{}{}", ctx.prefix(), ctx.invoked_command_name());
        commands::open_archive(
            &ctx.data().archive(),
            &actor,
            &invocation,
            &ctx.channel_id().to_string(),
        );
        Ok(())
    }

    /// Save a new archive entry. Only allowed roles can use this.
    #[poise::command(slash_command, prefix_command)]
    pub async fn sendtoarchive(
        ctx: Context<'_>,
        #[description = "Date for the archive entry (YYYY-MM-DD)"]
        #[max_length = 100]
        date: String,
        #[description = "Name for the archive entry"]
        #[max_length = 100]
        name: String,
        #[description = "Text to archive"]
        #[rest]
        message: String,
    ) -> Result<()> {
        let tag = ctx.author().tag();
        let role_ids = author_role_ids(&ctx).await;
        let actor = Actor {
            tag: &tag,
            role_ids: &role_ids,
        };

        let archive_ctx = ctx.data().archive();
        let outcome =
            commands::save_entry(&archive_ctx, &actor, surface(&ctx), &date, &name, &message).await;

        let reply = match outcome {
            SaveOutcome::Denied => {
                format::permission_denied(&ctx.data().role_gate.allowed_roles())
            }
            SaveOutcome::InvalidDate => format::INVALID_DATE.to_string(),
            SaveOutcome::InvalidName => format::INVALID_NAME.to_string(),
            SaveOutcome::Saved => format::saved(&date, &name),
            SaveOutcome::Failed => format::SAVE_FAILED.to_string(),
        };
        reply_private(&ctx, reply).await?;

        if outcome == SaveOutcome::Saved {
            commands::record_saved(&archive_ctx, &actor, surface(&ctx), &date, &name);
        }
        Ok(())
    }

    /// View all archive entries (date and name).
    #[poise::command(
        slash_command,
        prefix_command,
        rename = "archive-viewall",
        aliases("viewallarchives")
    )]
    pub async fn archive_viewall(ctx: Context<'_>) -> Result<()> {
        let tag = ctx.author().tag();
        let actor = Actor {
            tag: &tag,
            role_ids: &[],
        };

        match commands::list_entries(&ctx.data().archive(), &actor, surface(&ctx)).await {
            ListOutcome::Empty => reply_private(&ctx, format::NO_ENTRIES).await?,
            ListOutcome::Failed => reply_private(&ctx, format::READ_FAILED).await?,
            ListOutcome::Entries(entries) => {
                for chunk in format::listing_chunks(&entries, format::MESSAGE_LIMIT) {
                    reply_private(&ctx, chunk).await?;
                }
            }
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
