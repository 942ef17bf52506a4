use std::time::Duration;

use anyhow::Result;
use websig_core::{Body, Context, ErrorKind, OsEnv};
use websig_hmac::{
    Config, RequestSigner, WEBSIG_EXPIRY_HEADER, WEBSIG_MAX_BODY_SIZE, WEBSIG_SIGNATURE_HEADER,
    WEBSIG_SIGNING_KEY,
};

use crate::build_request;

#[test]
fn test_signer_from_os_env() {
    temp_env::with_vars(
        vec![
            (WEBSIG_SIGNING_KEY, Some("os-env-key")),
            (WEBSIG_SIGNATURE_HEADER, Some("X-Hook-Signature")),
            (WEBSIG_EXPIRY_HEADER, Some("X-Hook-Expires")),
            (WEBSIG_MAX_BODY_SIZE, Some("8")),
        ],
        || -> Result<()> {
            let ctx = Context::new().with_env(OsEnv);
            let config = Config::new().from_env(&ctx);
            let signer = RequestSigner::from_config(&ctx, &config)?;

            let mut req = build_request("POST", "http://example.com", &[], Body::from("12345678"));
            signer.sign_with_ttl(&mut req, Duration::from_secs(60), &[])?;
            assert!(req.headers().contains_key("X-Hook-Signature"));
            assert!(req.headers().contains_key("X-Hook-Expires"));

            // Same key from a plain signer, but it looks at other headers.
            let err = RequestSigner::new("os-env-key")
                .verify(&mut req, &[])
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NoSignature);

            signer.verify(&mut req, &[])?;

            let mut req = build_request("POST", "http://example.com", &[], Body::from("123456789"));
            let err = signer
                .sign_with_ttl(&mut req, Duration::from_secs(60), &[])
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BodyTooLarge);
            Ok(())
        },
    )
    .unwrap();
}

#[test]
fn test_config_key_wins_over_env() {
    temp_env::with_var(WEBSIG_SIGNING_KEY, Some("os-env-key"), || -> Result<()> {
        let ctx = Context::new().with_env(OsEnv);
        let config = Config::new().with_signing_key("config-key").from_env(&ctx);
        let signer = RequestSigner::from_config(&ctx, &config)?;

        let mut req = build_request("GET", "http://example.com", &[], Body::Empty);
        signer.sign_with_ttl(&mut req, Duration::from_secs(60), &[])?;
        RequestSigner::new("config-key").verify(&mut req, &[])?;
        Ok(())
    })
    .unwrap();
}

#[test]
fn test_signer_without_key() {
    temp_env::with_var_unset(WEBSIG_SIGNING_KEY, || {
        let ctx = Context::new().with_env(OsEnv);
        let config = Config::new().from_env(&ctx);

        let err = RequestSigner::from_config(&ctx, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(!err.is_rejection());
    });
}
