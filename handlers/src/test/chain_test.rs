//! The full handler chain as the bot wires it.

use std::sync::Arc;

use dbot_core::HandlerResponse;
use handler_chain::HandlerChain;

use super::common::{bot_username, sample_message, service, MockBot, ScriptedClient};
use crate::{CommandHandler, LoggingHandler, TranslateHandler};

fn chain(client: Arc<ScriptedClient>, bot: Arc<MockBot>) -> HandlerChain {
    let svc = service(client);
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            svc.clone(),
            bot.clone(),
            bot_username("polyglot_bot"),
        )))
        .add_handler(Arc::new(TranslateHandler::new(svc, bot)))
}

/// **Test: Commands are never translated**
#[tokio::test]
async fn test_commands_are_not_translated() {
    let client = Arc::new(ScriptedClient::default());
    let bot = Arc::new(MockBot::default());
    let chain = chain(client.clone(), bot.clone());

    chain.handle(&sample_message(1, "/lang")).await.unwrap();
    chain.handle(&sample_message(1, "/whatever text")).await.unwrap();

    assert_eq!(client.calls(), 0);
    assert_eq!(bot.sent().len(), 1);
}

/// **Test: setlang changes the targets used for the next message in that chat only**
#[tokio::test]
async fn test_setlang_scopes_to_chat() {
    let client = Arc::new(ScriptedClient::default());
    let bot = Arc::new(MockBot::default());
    let chain = chain(client, bot.clone());

    chain.handle(&sample_message(1, "/setlang ko")).await.unwrap();
    let in_chat = chain.handle(&sample_message(1, "Hello")).await.unwrap();
    let other_chat = chain.handle(&sample_message(2, "Hello")).await.unwrap();

    let HandlerResponse::Reply(in_chat) = in_chat else {
        panic!("expected reply");
    };
    let HandlerResponse::Reply(other_chat) = other_chat else {
        panic!("expected reply");
    };
    assert!(in_chat.contains("[ko] Hello"));
    assert!(!in_chat.contains("[ru]"));
    assert!(other_chat.contains("[ru] Hello"));
    assert!(!other_chat.contains("[ko]"));
}
