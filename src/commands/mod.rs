pub mod currency;
pub mod log;
pub mod start;

use std::path::PathBuf;
use std::sync::Arc;

use serenity::builder::{CreateAttachment, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use thiserror::Error;
use tracing::{debug, error};

use crate::api::exchangerate::RateLookup;
use crate::config::Config;
use crate::models::{Command, Invocation, Reply};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to attach {path}: {source}")]
    Attachment {
        path: PathBuf,
        source: serenity::Error,
    },
    #[error("Failed to send reply: {0}")]
    Send(#[from] serenity::Error),
}

/// Routes invocations to their handlers.
///
/// Holds only read-only state, so one instance is shared by every message task.
pub struct Dispatcher {
    lookup: Arc<dyn RateLookup>,
    log_secret: Option<String>,
    log_file: PathBuf,
}

impl Dispatcher {
    pub fn new(config: &Config, lookup: Arc<dyn RateLookup>) -> Self {
        Self {
            lookup,
            log_secret: config.log_secret.clone(),
            log_file: config.log_file.clone(),
        }
    }

    /// Run the handler for `inv`. `None` means nothing should be sent.
    pub async fn dispatch(&self, inv: &Invocation) -> Option<Reply> {
        match inv.command {
            Command::Start => Some(start::execute(inv)),
            Command::Currency => Some(currency::execute(self.lookup.as_ref(), inv).await),
            Command::Log => log::execute(self.log_secret.as_deref(), &self.log_file, inv),
        }
    }
}

pub async fn handle_message(dispatcher: &Dispatcher, ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let Some(inv) = Invocation::parse(msg.author.id.get(), &msg.content) else {
        return;
    };
    debug!("Dispatching /{} from user {}", inv.command.name(), inv.sender_id);

    let Some(reply) = dispatcher.dispatch(&inv).await else {
        return;
    };

    if let Err(e) = send_reply(ctx, msg, reply).await {
        error!("Error executing command /{}: {}", inv.command.name(), e);
    }
}

async fn send_reply(ctx: &Context, msg: &Message, reply: Reply) -> Result<(), CommandError> {
    let message = match reply {
        Reply::Text(text) => CreateMessage::default().content(text),
        Reply::Document(path) => {
            let attachment = CreateAttachment::path(&path)
                .await
                .map_err(|source| CommandError::Attachment { path, source })?;
            CreateMessage::default().add_file(attachment)
        }
    };

    msg.channel_id.send_message(ctx, message).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExchangeRate;
    use crate::services::currency_service::USAGE_HINT;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every lookup and answers with a fixed result
    struct RecordingLookup {
        calls: Mutex<Vec<(String, String)>>,
        result: ExchangeRate,
    }

    impl RecordingLookup {
        fn returning(result: ExchangeRate) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                result,
            })
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RateLookup for RecordingLookup {
        async fn lookup(&self, base: &str, target: &str) -> ExchangeRate {
            self.calls
                .lock()
                .unwrap()
                .push((base.to_string(), target.to_string()));
            self.result.clone()
        }
    }

    const SECRET: &str = "s3cret";
    const TIMESTAMP: &str = "Fri, 27 Mar 2020 00:00:00 +0000";

    fn dispatcher(lookup: Arc<RecordingLookup>) -> Dispatcher {
        let config = Config {
            bot_token: "token".to_string(),
            api_key: "key".to_string(),
            log_secret: Some(SECRET.to_string()),
            log_file: PathBuf::from("bot.log"),
            api_base_url: "http://localhost".to_string(),
        };
        Dispatcher::new(&config, lookup)
    }

    async fn run(dispatcher: &Dispatcher, content: &str) -> Option<Reply> {
        let inv = Invocation::parse(42, content).expect("known command");
        dispatcher.dispatch(&inv).await
    }

    fn text(reply: Option<Reply>) -> String {
        match reply {
            Some(Reply::Text(text)) => text,
            other => panic!("expected text reply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_start_greets_without_lookup() {
        let lookup = RecordingLookup::returning(ExchangeRate::found(1.0, TIMESTAMP));
        let dispatcher = dispatcher(lookup.clone());

        assert_eq!(text(run(&dispatcher, "/start").await), start::GREETING);
        assert_eq!(text(run(&dispatcher, "/start usd eur").await), start::GREETING);
        assert!(lookup.calls().is_empty());
    }

    #[tokio::test]
    async fn test_currency_single_defaults_to_rub() {
        let lookup = RecordingLookup::returning(ExchangeRate::found(92.5, TIMESTAMP));
        let dispatcher = dispatcher(lookup.clone());

        let reply = text(run(&dispatcher, "/currency usd").await);

        assert_eq!(lookup.calls(), vec![("USD".to_string(), "RUB".to_string())]);
        assert_eq!(reply, "You've entered currency: 92.5\nLast update: Fri, 27 Mar 2020");
    }

    #[tokio::test]
    async fn test_currency_pair_is_case_folded() {
        let lookup = RecordingLookup::returning(ExchangeRate::found(0.91, TIMESTAMP));
        let dispatcher = dispatcher(lookup.clone());

        let reply = text(run(&dispatcher, "/currency usd eur").await);

        assert_eq!(lookup.calls(), vec![("USD".to_string(), "EUR".to_string())]);
        assert!(reply.starts_with("You've entered currency: 0.91"));
    }

    #[tokio::test]
    async fn test_currency_missing_and_failed_lookup_share_reply() {
        let lookup = RecordingLookup::returning(ExchangeRate::absent());
        let dispatcher = dispatcher(lookup.clone());

        let missing = text(run(&dispatcher, "/currency").await);
        assert!(lookup.calls().is_empty());

        let failed_single = text(run(&dispatcher, "/currency xyz").await);
        let failed_pair = text(run(&dispatcher, "/currency xyz abc").await);

        assert_eq!(missing, USAGE_HINT);
        assert_eq!(failed_single, missing);
        assert_eq!(failed_pair, missing);
        assert_eq!(lookup.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_currency_too_many_codes_skips_lookup() {
        let lookup = RecordingLookup::returning(ExchangeRate::found(1.0, TIMESTAMP));
        let dispatcher = dispatcher(lookup.clone());

        assert_eq!(text(run(&dispatcher, "/currency usd eur gbp").await), USAGE_HINT);
        assert!(lookup.calls().is_empty());
    }

    #[tokio::test]
    async fn test_log_with_correct_secret_sends_file() {
        let dispatcher = dispatcher(RecordingLookup::returning(ExchangeRate::absent()));

        assert_eq!(
            run(&dispatcher, "/log s3cret").await,
            Some(Reply::Document(PathBuf::from("bot.log")))
        );
    }

    #[tokio::test]
    async fn test_log_rejections_are_silent() {
        let dispatcher = dispatcher(RecordingLookup::returning(ExchangeRate::absent()));

        assert_eq!(run(&dispatcher, "/log wrong").await, None);
        assert_eq!(run(&dispatcher, "/log").await, None);
    }

    #[tokio::test]
    async fn test_log_disabled_without_secret() {
        let config = Config {
            bot_token: String::new(),
            api_key: String::new(),
            log_secret: None,
            log_file: PathBuf::from("bot.log"),
            api_base_url: String::new(),
        };
        let dispatcher = Dispatcher::new(&config, RecordingLookup::returning(ExchangeRate::absent()));

        assert_eq!(run(&dispatcher, "/log").await, None);
        assert_eq!(run(&dispatcher, "/log None").await, None);
    }
}
