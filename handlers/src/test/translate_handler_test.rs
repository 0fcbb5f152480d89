//! Unit tests for TranslateHandler.

use std::sync::Arc;

use dbot_core::{Handler, HandlerResponse, ReplyFormat};
use language::Language;
use translator::format::FAILURE_MESSAGE;

use super::common::{sample_message, service, MockBot, ScriptedClient};
use crate::TranslateHandler;

fn handler(client: Arc<ScriptedClient>) -> (TranslateHandler, Arc<MockBot>) {
    let bot = Arc::new(MockBot::default());
    (TranslateHandler::new(service(client), bot.clone()), bot)
}

/// **Test: Automatic mode replies once with every default target except the source**
#[tokio::test]
async fn test_auto_translation_reply() {
    let client = Arc::new(ScriptedClient::default());
    let (h, bot) = handler(client.clone());

    let result = h.handle(&sample_message(3, "Привет всем")).await.unwrap();

    assert!(matches!(result, HandlerResponse::Reply(_)));
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].format, ReplyFormat::Html);
    let text = &sent[0].text;
    assert!(text.contains("(russian)"));
    assert!(text.contains("[en] Привет всем"));
    assert!(text.contains("[es] Привет всем"));
    assert!(text.contains("[fr] Привет всем"));
    assert!(!text.contains("[ru]"));
    assert_eq!(client.calls(), 3);
}

/// **Test: `text /code` translates into exactly one language**
#[tokio::test]
async fn test_single_target_reply() {
    let client = Arc::new(ScriptedClient::default());
    let (h, bot) = handler(client.clone());

    h.handle(&sample_message(3, "Bonjour /ja")).await.unwrap();

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.contains("Translation (japanese)"));
    assert!(sent[0].text.contains("[ja] Bonjour"));
    assert_eq!(client.calls(), 1);
}

/// **Test: One failing target is left out of an otherwise complete reply**
#[tokio::test]
async fn test_partial_failure_omits_target() {
    let client = Arc::new(ScriptedClient::failing(&[Language::Spanish]));
    let (h, bot) = handler(client);

    h.handle(&sample_message(3, "Hello everyone")).await.unwrap();

    let text = &bot.sent()[0].text;
    assert!(text.contains("[ru] Hello everyone"));
    assert!(text.contains("[fr] Hello everyone"));
    assert!(!text.contains("spanish"));
}

/// **Test: All targets failing produces exactly one generic failure reply**
#[tokio::test]
async fn test_total_failure_single_reply() {
    let client = Arc::new(ScriptedClient::failing(&Language::ALL[..]));
    let (h, bot) = handler(client);

    let result = h.handle(&sample_message(3, "Hello everyone")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply(FAILURE_MESSAGE.to_string()));
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_empty_text_is_ignored() {
    let client = Arc::new(ScriptedClient::default());
    let (h, bot) = handler(client.clone());
    let result = h.handle(&sample_message(3, "   ")).await.unwrap();
    assert_eq!(result, HandlerResponse::Ignore);
    assert!(bot.sent().is_empty());
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_user_text_is_escaped() {
    let client = Arc::new(ScriptedClient::default());
    let (h, bot) = handler(client);
    h.handle(&sample_message(3, "use <b> & </b> tags")).await.unwrap();
    let text = &bot.sent()[0].text;
    assert!(text.contains("use &lt;b&gt; &amp; &lt;/b&gt; tags"));
    assert!(!text.contains("use <b>"));
}

/// **Test: A reply Telegram refuses is followed by one plain failure notice**
#[tokio::test]
async fn test_refused_reply_falls_back_to_failure_notice() {
    let client = Arc::new(ScriptedClient::default());
    let bot = Arc::new(MockBot::refusing_first(1));
    let h = TranslateHandler::new(service(client), bot.clone());

    let result = h.handle(&sample_message(3, "Hello everyone")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply(FAILURE_MESSAGE.to_string()));
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, FAILURE_MESSAGE);
    assert_eq!(sent[0].format, ReplyFormat::Plain);
}

/// **Test: When every send is refused the handler stops without retrying forever**
#[tokio::test]
async fn test_refused_failure_notice_stops() {
    let client = Arc::new(ScriptedClient::default());
    let bot = Arc::new(MockBot::refusing_first(2));
    let h = TranslateHandler::new(service(client), bot.clone());

    let result = h.handle(&sample_message(3, "Hello everyone")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert!(bot.sent().is_empty());
}
