use std::thread::sleep;
use std::time::Duration;

use anyhow::Result;
use websig_core::time::{now, parse_rfc3339};
use websig_core::{Body, ErrorKind};
use websig_hmac::RequestSigner;

use crate::{build_request, init_logger};

#[test]
fn test_signature_expires() -> Result<()> {
    init_logger();

    let signer = RequestSigner::new("test");
    let mut req = build_request("GET", "http://example.com", &[], Body::Empty);

    signer.sign(&mut req, now() + chrono::Duration::seconds(1), &[])?;
    signer.verify(&mut req, &[])?;

    sleep(Duration::from_millis(1100));
    let err = signer.verify(&mut req, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SignatureExpired);
    assert!(err.is_rejection());
    Ok(())
}

#[test]
fn test_sign_in_the_past() -> Result<()> {
    let signer = RequestSigner::new("test");
    let mut req = build_request("GET", "http://example.com", &[], Body::Empty);

    // Signing doesn't check the expiry, verification does.
    signer.sign(&mut req, parse_rfc3339("2017-01-01T00:00:00Z")?, &[])?;
    let err = signer.verify(&mut req, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SignatureExpired);
    Ok(())
}

#[test]
fn test_missing_headers() {
    let signer = RequestSigner::new("test");

    let mut req = build_request("GET", "http://example.com", &[], Body::Empty);
    let err = signer.verify(&mut req, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoSignature);

    let mut req = build_request(
        "GET",
        "http://example.com",
        &[("X-Signature", "aRbroOfQIJfllsVNou4+8WN1TF9t3J8B48MtHa5mpJ8=")],
        Body::Empty,
    );
    let err = signer.verify(&mut req, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoExpiry);
}
