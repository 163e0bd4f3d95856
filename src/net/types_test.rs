use super::*;

// =============================================================
// NotificationId
// =============================================================

#[test]
fn id_accepts_numbers_and_strings() {
    let n: NotificationId = serde_json::from_value(serde_json::json!(17)).expect("number id");
    let s: NotificationId = serde_json::from_value(serde_json::json!("abc")).expect("string id");
    assert_eq!(n.as_str(), "17");
    assert_eq!(s.as_str(), "abc");
}

#[test]
fn id_null_is_empty() {
    let id: NotificationId = serde_json::from_value(serde_json::Value::Null).expect("null id");
    assert!(id.is_empty());
}

#[test]
fn id_rejects_objects() {
    assert!(serde_json::from_value::<NotificationId>(serde_json::json!({ "id": 1 })).is_err());
}

// =============================================================
// NotificationList
// =============================================================

#[test]
fn list_parses_full_rows() {
    let body = serde_json::json!({
        "notifications": [
            {
                "id": 3,
                "title": "Order ready",
                "message": "Table 4",
                "created_at": "2024-01-15T15:04:05+00:00",
                "is_read": false,
                "url": "/order/live/"
            },
            { "id": 2, "title": "Welcome", "message": "", "created_at": "2024-01-14T09:00:00+00:00", "is_read": true }
        ]
    });
    let items = serde_json::from_value::<NotificationList>(body).expect("list").into_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.as_str(), "3");
    assert_eq!(items[0].url.as_deref(), Some("/order/live/"));
    assert!(!items[0].is_read);
    assert!(items[1].is_read);
    assert_eq!(items[1].url, None);
}

#[test]
fn list_missing_or_null_field_is_empty() {
    let missing: NotificationList = serde_json::from_str("{}").expect("empty object");
    let null: NotificationList = serde_json::from_str(r#"{"notifications":null}"#).expect("null list");
    assert!(missing.into_items().is_empty());
    assert!(null.into_items().is_empty());
}

#[test]
fn missing_is_read_counts_as_unread() {
    let row: Notification = serde_json::from_value(serde_json::json!({ "id": 1, "title": "t" })).expect("row");
    assert!(!row.is_read);
    assert_eq!(row.created_at, None);
}

#[test]
fn truthy_is_read_values() {
    let row: Notification = serde_json::from_value(serde_json::json!({ "id": 1, "is_read": 1 })).expect("row");
    assert!(row.is_read);
    let row: Notification = serde_json::from_value(serde_json::json!({ "id": 1, "is_read": 0 })).expect("row");
    assert!(!row.is_read);
}

#[test]
fn null_display_text_keeps_the_row() {
    let body = serde_json::json!({
        "notifications": [
            { "id": 1, "title": null, "message": null, "is_read": false },
            { "id": 2, "title": "ok", "message": "fine", "is_read": true }
        ]
    });
    let items = serde_json::from_value::<NotificationList>(body).expect("list").into_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "null");
    assert_eq!(items[0].message, "null");
    assert_eq!(items[1].title, "ok");
}

#[test]
fn scalar_display_text_is_printed() {
    let row: Notification =
        serde_json::from_value(serde_json::json!({ "id": 1, "title": 42, "message": true })).expect("row");
    assert_eq!(row.title, "42");
    assert_eq!(row.message, "true");
}

// =============================================================
// PushPayload
// =============================================================

#[test]
fn push_payload_without_id_or_url() {
    let payload: PushPayload =
        serde_json::from_str(r##"{"title":"New order","message":"#12"}"##).expect("payload");
    assert!(payload.id.is_empty());
    assert_eq!(payload.title, "New order");
    assert_eq!(payload.url, None);
}

#[test]
fn push_payload_with_null_text() {
    let payload: PushPayload = serde_json::from_str(r#"{"id":3,"title":null,"message":null}"#).expect("payload");
    assert_eq!(payload.title, "null");
    assert_eq!(payload.message, "null");
}

#[test]
fn push_payload_rejects_non_objects() {
    assert!(serde_json::from_str::<PushPayload>("42").is_err());
    assert!(serde_json::from_str::<PushPayload>("null").is_err());
}

// =============================================================
// MarkReadResponse
// =============================================================

#[test]
fn mark_read_reads_unread_count() {
    let resp = MarkReadResponse::from_value(&serde_json::json!({ "unread": 2 }));
    assert_eq!(resp.unread, Some(2));
    let resp = MarkReadResponse::from_value(&serde_json::json!({ "unread": 0 }));
    assert_eq!(resp.unread, Some(0));
}

#[test]
fn mark_read_accepts_numeric_strings_and_integral_floats() {
    assert_eq!(MarkReadResponse::from_value(&serde_json::json!({ "unread": "2" })).unread, Some(2));
    assert_eq!(MarkReadResponse::from_value(&serde_json::json!({ "unread": 3.0 })).unread, Some(3));
    assert_eq!(MarkReadResponse::from_value(&serde_json::json!({ "unread": 2.5 })).unread, None);
    assert_eq!(MarkReadResponse::from_value(&serde_json::json!({ "unread": "lots" })).unread, None);
}

#[test]
fn mark_read_without_usable_count() {
    assert_eq!(MarkReadResponse::from_value(&serde_json::json!({})).unread, None);
    assert_eq!(MarkReadResponse::from_value(&serde_json::json!({ "unread": -1 })).unread, None);
    assert_eq!(MarkReadResponse::from_value(&serde_json::json!([1, 2])).unread, None);
}
