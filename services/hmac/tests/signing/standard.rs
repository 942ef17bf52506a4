use std::io::{Cursor, Read};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use pretty_assertions::assert_eq;
use websig_core::time::{now, parse_rfc3339};
use websig_core::{Body, SignRequest};
use websig_hmac::RequestSigner;

use crate::{build_request, init_logger};

#[test]
fn test_round_trip() -> Result<()> {
    init_logger();

    let signer = RequestSigner::new("round-trip-key");
    let signed = ["Content-Type", "X-Request-Id"];
    let mut req = build_request(
        "PUT",
        "https://api.example.com/v1/items/42?dry_run=true",
        &[("Content-Type", "application/json"), ("X-Request-Id", "r-1")],
        Body::from(r#"{"name":"item"}"#),
    );

    signer.sign_with_ttl(&mut req, Duration::from_secs(300), &signed)?;
    signer.verify(&mut req, &signed)?;
    // Verification leaves the request as it was, so it can run again.
    signer.verify(&mut req, &signed)?;
    Ok(())
}

#[test]
fn test_round_trip_through_trait_object() -> Result<()> {
    init_logger();

    let signer: Arc<dyn SignRequest> = Arc::new(RequestSigner::new("trait-key"));
    let mut req = build_request("GET", "http://example.com/health", &[], Body::Empty);

    signer.sign_request(&mut req, now() + chrono::Duration::minutes(5), &[])?;
    signer.verify_request(&mut req, &[])?;
    Ok(())
}

#[test]
fn test_golden_signature() -> Result<()> {
    let signer = RequestSigner::new("test");
    let mut req = build_request(
        "GET",
        "http://example.com/",
        &[("X-Sig-Expired", "2017-01-01T00:00:00Z")],
        Body::Empty,
    );

    assert_eq!(
        signer.calculate_signature(&mut req, &[])?,
        "aRbroOfQIJfllsVNou4+8WN1TF9t3J8B48MtHa5mpJ8="
    );

    signer.sign(&mut req, parse_rfc3339("2017-01-01T00:00:00Z")?, &[])?;
    assert_eq!(
        req.headers()["X-Signature"],
        "aRbroOfQIJfllsVNou4+8WN1TF9t3J8B48MtHa5mpJ8="
    );
    Ok(())
}

#[test]
fn test_signing_key_changes_digest() -> Result<()> {
    let headers = [("X-Sig-Expired", "2017-01-01T00:00:00Z")];
    let mut req = build_request("GET", "http://example.com/", &headers, Body::Empty);

    let a = RequestSigner::new("key-a").calculate_signature(&mut req, &[])?;
    let b = RequestSigner::new("key-b").calculate_signature(&mut req, &[])?;
    assert_ne!(a, b);
    Ok(())
}

#[test]
fn test_body_is_signed_and_kept() -> Result<()> {
    init_logger();

    let signer = RequestSigner::new("body-key");
    let headers = [("X-Sig-Expired", "2017-01-01T00:00:00Z")];

    let mut a = build_request(
        "POST",
        "http://example.com/",
        &headers,
        Body::from_reader(Cursor::new(b"first body".to_vec())),
    );
    let mut b = build_request(
        "POST",
        "http://example.com/",
        &headers,
        Body::from_reader(Cursor::new(b"second body".to_vec())),
    );
    assert_ne!(
        signer.calculate_signature(&mut a, &[])?,
        signer.calculate_signature(&mut b, &[])?
    );

    let mut req = build_request(
        "POST",
        "http://example.com/",
        &[],
        Body::from_reader(Cursor::new(b"streamed body".to_vec())),
    );
    signer.sign_with_ttl(&mut req, Duration::from_secs(60), &[])?;
    signer.verify(&mut req, &[])?;

    let mut body = Vec::new();
    req.body_mut().read_to_end(&mut body)?;
    assert_eq!(body, b"streamed body");
    Ok(())
}

#[test]
fn test_concurrent_signing() -> Result<()> {
    let signer = Arc::new(RequestSigner::new("shared-key"));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let signer = signer.clone();
            thread::spawn(move || -> websig_core::Result<()> {
                let id = i.to_string();
                let mut req = build_request(
                    "POST",
                    &format!("http://example.com/jobs/{i}"),
                    &[("X-Request-Id", id.as_str())],
                    Body::from(format!("job {i}")),
                );
                signer.sign_with_ttl(&mut req, Duration::from_secs(60), &["X-Request-Id"])?;
                signer.verify(&mut req, &["X-Request-Id"])
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread must not panic")?;
    }
    Ok(())
}
