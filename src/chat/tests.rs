use super::*;

#[test]
fn test_message_rejects_blank_content() {
    assert_eq!(
        ChatMessage::user("   ").unwrap_err(),
        ChatError::EmptyContent
    );
    assert_eq!(ChatMessage::system("").unwrap_err(), ChatError::EmptyContent);
}

#[test]
fn test_exchange_requires_messages() {
    assert_eq!(
        ChatExchange::new(vec![]).unwrap_err(),
        ChatError::EmptyMessages
    );
}

#[test]
fn test_exchange_defaults() {
    let exchange = ChatExchange::new(vec![ChatMessage::user("hello").unwrap()]).unwrap();

    assert_eq!(exchange.temperature(), DEFAULT_TEMPERATURE);
    assert_eq!(exchange.max_tokens(), None);
    assert_eq!(exchange.messages().len(), 1);
}

#[test]
fn test_temperature_bounds() {
    let messages = vec![ChatMessage::user("hello").unwrap()];

    assert!(ChatExchange::with_params(messages.clone(), 0.0, None).is_ok());
    assert!(ChatExchange::with_params(messages.clone(), 2.0, None).is_ok());
    assert!(matches!(
        ChatExchange::with_params(messages.clone(), 2.1, None),
        Err(ChatError::InvalidTemperature { .. })
    ));
    assert!(matches!(
        ChatExchange::with_params(messages, -0.1, None),
        Err(ChatError::InvalidTemperature { .. })
    ));
}

#[test]
fn test_max_tokens_must_be_positive() {
    let messages = vec![ChatMessage::user("hello").unwrap()];

    assert!(ChatExchange::with_params(messages.clone(), 0.2, Some(128)).is_ok());
    assert_eq!(
        ChatExchange::with_params(messages, 0.2, Some(0)).unwrap_err(),
        ChatError::InvalidMaxTokens { value: 0 }
    );
}

#[test]
fn test_role_wire_names() {
    assert_eq!(ChatRole::System.as_str(), "system");
    assert_eq!(ChatRole::User.as_str(), "user");
    assert_eq!(ChatRole::Assistant.as_str(), "assistant");

    let json = serde_json::to_string(&ChatRole::Assistant).unwrap();
    assert_eq!(json, "\"assistant\"");
}
