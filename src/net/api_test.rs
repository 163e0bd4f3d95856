use super::*;

// =============================================================
// cookie_value
// =============================================================

#[test]
fn cookie_value_finds_exact_name() {
    let jar = "sessionid=abc; csrftoken=tok123; theme=dark";
    assert_eq!(cookie_value(jar, "csrftoken"), "tok123");
    assert_eq!(cookie_value(jar, "sessionid"), "abc");
}

#[test]
fn cookie_value_missing_is_empty() {
    assert_eq!(cookie_value("sessionid=abc", "csrftoken"), "");
    assert_eq!(cookie_value("", "csrftoken"), "");
}

#[test]
fn cookie_value_ignores_longer_names() {
    assert_eq!(cookie_value("xcsrftoken=nope; csrftokenx=nope", "csrftoken"), "");
}

#[test]
fn cookie_value_tolerates_spaces_around_equals() {
    assert_eq!(cookie_value("a=1;csrftoken = t0k", "csrftoken"), "t0k");
}

#[test]
fn cookie_value_skips_empty_value() {
    assert_eq!(cookie_value("csrftoken=; csrftoken=second", "csrftoken"), "second");
}

// =============================================================
// Request shape
// =============================================================

#[test]
fn mark_read_headers_carry_ajax_marker_and_token() {
    let headers = mark_read_headers("tok");
    assert_eq!(headers[0], ("X-Requested-With", "XMLHttpRequest".to_owned()));
    assert_eq!(headers[1], ("X-CSRFToken", "tok".to_owned()));
}

#[test]
fn mark_read_headers_send_empty_token_when_cookie_absent() {
    let headers = mark_read_headers(&cookie_value("", "csrftoken"));
    assert_eq!(headers[1].1, "");
}

// =============================================================
// Body decoding
// =============================================================

#[test]
fn decode_list_body_reads_items_in_order() {
    let items = decode_list_body(r#"{"notifications":[{"id":2},{"id":1}]}"#).expect("list");
    let ids: Vec<&str> = items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["2", "1"]);
}

#[test]
fn decode_list_body_rejects_html() {
    assert!(matches!(decode_list_body("<html>500</html>"), Err(WidgetError::Decode(_))));
}

#[test]
fn decode_mark_read_body_accepts_any_json() {
    assert_eq!(decode_mark_read_body(r#"{"unread":4}"#).expect("json").unread, Some(4));
    assert_eq!(decode_mark_read_body(r#"{"ok":true}"#).expect("json").unread, None);
}

#[test]
fn decode_mark_read_body_rejects_non_json() {
    assert!(decode_mark_read_body("Forbidden").is_err());
}

// =============================================================
// Status handling
// =============================================================

#[test]
fn error_status_with_json_body_still_applies() {
    let resp = decode_response(403, r#"{"unread":3}"#, decode_mark_read_body).expect("json body");
    assert_eq!(resp.unread, Some(3));
}

#[test]
fn error_status_with_list_body_renders_it() {
    let items = decode_response(404, r#"{"detail":"not found"}"#, decode_list_body).expect("json body");
    assert!(items.is_empty());
}

#[test]
fn error_status_with_html_body_reports_status() {
    let result = decode_response(500, "<h1>Server Error</h1>", decode_list_body);
    assert_eq!(result, Err(WidgetError::Status(500)));
}

#[test]
fn ok_status_with_html_body_reports_decode() {
    let result = decode_response(200, "<html></html>", decode_mark_read_body);
    assert!(matches!(result, Err(WidgetError::Decode(_))));
}

#[test]
fn native_fetch_is_unavailable() {
    let result = block_on_ready(fetch_notifications(&WidgetConfig::default()));
    assert!(matches!(result, Err(WidgetError::Network(_))));
}

// Native stubs never suspend, so a single poll resolves them.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("native stub should resolve immediately"),
    }
}
