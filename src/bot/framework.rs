use crate::{
    bot::{BotData, commands, handlers, ui},
    config::AppConfig,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            let reply = poise::CreateReply::default()
                .content("An error occurred while running this command.")
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error message: {}", e);
            }
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!("Error handling event {}: {:?}", event.snake_case_name(), error);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Posts the documentation embed to the configured channel.
async fn broadcast_documentation(ctx: &serenity::Context, config: &AppConfig) {
    let Some(channel_id) = config.archive.doc_channel_id.filter(|id| *id != 0) else {
        return;
    };

    let embed = match ui::documentation_embed(
        &config.prefix,
        &config.archive.allowed_role_ids,
        &config.archive.action_log_path,
    ) {
        Ok(embed) => embed,
        Err(e) => {
            warn!("Failed to build documentation embed: {e}");
            return;
        }
    };

    let message = serenity::CreateMessage::new().embed(embed);
    match serenity::ChannelId::new(channel_id).send_message(ctx, message).await {
        Ok(_) => info!("Posted archive documentation to channel {channel_id}"),
        Err(e) => warn!("Could not post documentation to channel {channel_id}: {e}"),
    }
}

/// Builds the poise framework and runs the client until it stops.
#[instrument(skip(token, app_config, database))]
pub async fn run_bot(
    token: String,
    app_config: Arc<AppConfig>,
    database: DatabaseConnection,
) -> Result<()> {
    let setup_config = Arc::clone(&app_config);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::archive(),
                commands::sendtoarchive(),
                commands::archive_viewall(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(app_config.prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::interactions::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                let config = setup_config;
                info!("Logged in as {} (ID: {})", ready.user.name, ready.user.id);

                ctx.set_activity(Some(serenity::ActivityData::watching(config.activity.clone())));

                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                if let Some(guild_id) = config.guild_id.filter(|id| *id != 0) {
                    let guild_id = serenity::GuildId::new(guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                        .await?;
                    info!("Registered commands in guild {}", guild_id);
                }

                broadcast_documentation(ctx, &config).await;

                Ok(BotData::new(database, config))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
