use std::time::Duration;

use anyhow::Result;
use http::{HeaderValue, Method, Uri};
use websig_core::{Body, ErrorKind};
use websig_hmac::RequestSigner;

use crate::{build_request, init_logger};

const SIGNED: [&str; 2] = ["Content-Type", "X-Request-Id"];

fn signed_request(signer: &RequestSigner) -> Result<http::Request<Body>> {
    let mut req = build_request(
        "POST",
        "https://api.example.com/v1/orders?currency=EUR",
        &[
            ("Content-Type", "application/json"),
            ("X-Request-Id", "order-1"),
            ("X-Trace", "unsigned"),
        ],
        Body::from(r#"{"amount":10}"#),
    );
    signer.sign_with_ttl(&mut req, Duration::from_secs(300), &SIGNED)?;
    Ok(req)
}

fn assert_invalid(signer: &RequestSigner, req: &mut http::Request<Body>, signed: &[&str]) {
    let err = signer.verify(req, signed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature, "{err}");
}

#[test]
fn test_tampered_url() -> Result<()> {
    init_logger();
    let signer = RequestSigner::new("tamper-key");

    let mut req = signed_request(&signer)?;
    *req.uri_mut() = Uri::from_static("https://api.example.com/v1/orders?currency=USD");
    assert_invalid(&signer, &mut req, &SIGNED);
    Ok(())
}

#[test]
fn test_tampered_method() -> Result<()> {
    let signer = RequestSigner::new("tamper-key");

    let mut req = signed_request(&signer)?;
    *req.method_mut() = Method::PUT;
    assert_invalid(&signer, &mut req, &SIGNED);
    Ok(())
}

#[test]
fn test_tampered_signed_header() -> Result<()> {
    let signer = RequestSigner::new("tamper-key");

    let mut req = signed_request(&signer)?;
    req.headers_mut()
        .insert("X-Request-Id", HeaderValue::from_static("order-2"));
    assert_invalid(&signer, &mut req, &SIGNED);

    // Removing a signed header is a change as well.
    let mut req = signed_request(&signer)?;
    req.headers_mut().remove("Content-Type");
    assert_invalid(&signer, &mut req, &SIGNED);
    Ok(())
}

#[test]
fn test_unsigned_header_is_free() -> Result<()> {
    let signer = RequestSigner::new("tamper-key");

    let mut req = signed_request(&signer)?;
    req.headers_mut()
        .insert("X-Trace", HeaderValue::from_static("changed"));
    signer.verify(&mut req, &SIGNED)?;
    Ok(())
}

#[test]
fn test_tampered_body() -> Result<()> {
    let signer = RequestSigner::new("tamper-key");

    let mut req = signed_request(&signer)?;
    *req.body_mut() = Body::from(r#"{"amount":1000}"#);
    assert_invalid(&signer, &mut req, &SIGNED);
    Ok(())
}

#[test]
fn test_tampered_expiry() -> Result<()> {
    let signer = RequestSigner::new("tamper-key");

    let mut req = signed_request(&signer)?;
    req.headers_mut()
        .insert("X-Sig-Expired", HeaderValue::from_static("2999-01-01T00:00:00Z"));
    assert_invalid(&signer, &mut req, &SIGNED);
    Ok(())
}

#[test]
fn test_selection_list_must_match() -> Result<()> {
    let signer = RequestSigner::new("tamper-key");

    let mut req = build_request(
        "GET",
        "http://example.com/",
        &[("A", "value-a"), ("B", "value-b")],
        Body::Empty,
    );
    signer.sign_with_ttl(&mut req, Duration::from_secs(60), &["A"])?;
    assert_invalid(&signer, &mut req, &["B"]);

    // Order matters as well.
    let mut req = build_request(
        "GET",
        "http://example.com/",
        &[("A", "value-a"), ("B", "value-b")],
        Body::Empty,
    );
    signer.sign_with_ttl(&mut req, Duration::from_secs(60), &["A", "B"])?;
    assert_invalid(&signer, &mut req, &["B", "A"]);
    signer.verify(&mut req, &["A", "B"])?;
    Ok(())
}

#[test]
fn test_wrong_key() -> Result<()> {
    let mut req = signed_request(&RequestSigner::new("tamper-key"))?;
    assert_invalid(&RequestSigner::new("other-key"), &mut req, &SIGNED);
    Ok(())
}
