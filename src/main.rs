use std::sync::Arc;

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{error, info};

mod api;
mod commands;
mod config;
mod logging;
mod models;
mod services;

use api::exchangerate::ExchangeRateClient;
use commands::Dispatcher;
use config::Config;

struct Handler {
    dispatcher: Arc<Dispatcher>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&self.dispatcher, &ctx, &msg).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return;
        }
    };

    if let Err(e) = logging::init_logging(&config.log_file) {
        eprintln!("Failed to open log file {}: {}", config.log_file.display(), e);
        return;
    }
    config.warn_missing();

    let lookup = Arc::new(ExchangeRateClient::with_base_url(
        config.api_key.clone(),
        config.api_base_url.clone(),
    ));
    let handler = Handler {
        dispatcher: Arc::new(Dispatcher::new(&config, lookup)),
    };

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = match Client::builder(&config.bot_token, intents)
        .event_handler(handler)
        .await
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return;
        }
    };

    info!("Bot started polling");
    if let Err(e) = client.start().await {
        error!("Bot encountered an error: {}", e);
    }
    info!("Bot stopped polling");
}
