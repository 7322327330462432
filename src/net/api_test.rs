use super::*;

fn authed_identity(token: &str) -> Identity {
    Identity {
        token: Some(token.to_owned()),
        display_name: None,
    }
}

// =============================================================
// Identity header
// =============================================================

#[test]
fn auth_header_absent_without_token() {
    assert_eq!(auth_header(&Identity::default()), None);
}

#[test]
fn auth_header_carries_exact_token_value() {
    let identity = authed_identity("query_id=abc&user=%7B%7D&hash=def");
    assert_eq!(
        auth_header(&identity),
        Some((INIT_DATA_HEADER, "query_id=abc&user=%7B%7D&hash=def"))
    );
}

#[test]
fn init_data_header_name_matches_backend() {
    assert_eq!(INIT_DATA_HEADER, "X-Telegram-Init-Data");
}

// =============================================================
// Error display
// =============================================================

#[test]
fn status_error_displays_raw_body_text() {
    let err = RequestError::Status {
        status: 403,
        body: "forbidden".to_owned(),
    };
    assert_eq!(err.to_string(), "forbidden");
}

#[test]
fn status_error_display_ignores_the_code() {
    let err = RequestError::Status {
        status: 500,
        body: "{\"detail\":\"boom\"}".to_owned(),
    };
    assert_eq!(err.to_string(), "{\"detail\":\"boom\"}");
}

#[test]
fn decode_error_is_distinguishable() {
    let err = RequestError::Decode("missing field `question`".to_owned());
    assert!(err.to_string().starts_with("malformed response:"));
}

// =============================================================
// Native stubs
// =============================================================

#[test]
#[cfg(not(feature = "csr"))]
fn native_build_fails_every_call() {
    let identity = Identity::default();
    let err = futures_executor_block(fetch_faq());
    assert!(matches!(err, Err(RequestError::Network(_))));

    let err = futures_executor_block(fetch_admin_leads(&identity));
    assert!(matches!(err, Err(RequestError::Network(_))));
}

/// Poll a future that is known to resolve immediately (the native stubs
/// never await anything).
#[cfg(not(feature = "csr"))]
fn futures_executor_block<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn noop_raw_waker() -> RawWaker {
        const VTABLE: RawWakerVTable =
            RawWakerVTable::new(|_| noop_raw_waker(), |_| {}, |_| {}, |_| {});
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
    let mut context = Context::from_waker(&waker);
    match pin!(future).poll(&mut context) {
        Poll::Ready(output) => output,
        Poll::Pending => unreachable!("stub futures resolve without awaiting"),
    }
}
