//! Inbound command models

/// Commands the bot responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Currency,
    Log,
}

impl Command {
    /// Resolve a command token such as `/currency`. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "/start" => Some(Command::Start),
            "/currency" => Some(Command::Currency),
            "/log" => Some(Command::Log),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Currency => "currency",
            Command::Log => "log",
        }
    }
}

/// One user-issued command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub sender_id: u64,
    pub command: Command,
    /// Text after the command token, trimmed. `None` when nothing follows.
    pub raw_argument: Option<String>,
}

impl Invocation {
    /// Split message text into command and argument.
    ///
    /// Returns `None` for anything that is not one of the known commands.
    pub fn parse(sender_id: u64, content: &str) -> Option<Self> {
        let content = content.trim_start();
        let (token, rest) = match content.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest),
            None => (content, ""),
        };

        let command = Command::from_token(token)?;
        let rest = rest.trim();

        Some(Self {
            sender_id,
            command,
            raw_argument: (!rest.is_empty()).then(|| rest.to_string()),
        })
    }
}
