use super::*;

#[test]
fn decodes_full_payload() {
    let payload = decode_push_message(r#"{"id":12,"title":"Order #12","message":"Ready","url":"/order/cards/12/"}"#)
        .expect("payload");
    assert_eq!(payload.id.as_str(), "12");
    assert_eq!(payload.title, "Order #12");
    assert_eq!(payload.message, "Ready");
    assert_eq!(payload.url.as_deref(), Some("/order/cards/12/"));
}

#[test]
fn ignores_server_timestamp_fields() {
    let payload = decode_push_message(r#"{"title":"t","message":"m","created_at":"2020-01-01T00:00:00Z"}"#)
        .expect("payload");
    assert!(payload.id.is_empty());
}

#[test]
fn rejects_non_json() {
    assert!(matches!(decode_push_message("ping"), Err(WidgetError::Decode(_))));
}

#[test]
fn rejects_json_scalars() {
    assert!(decode_push_message("true").is_err());
    assert!(decode_push_message(r#""hello""#).is_err());
}
