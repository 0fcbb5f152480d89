//! # Handlers for the translation bot
//!
//! Chain order is [`LoggingHandler`] → [`CommandHandler`] → [`TranslateHandler`]: anything starting
//! with `/` stops at the command handler, so commands are never translated.

mod command;
mod logging;
mod translate;

#[cfg(test)]
mod test;

pub use command::{Command, CommandHandler};
pub use logging::LoggingHandler;
pub use translate::TranslateHandler;
