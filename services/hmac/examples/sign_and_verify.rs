use std::io::Read;
use std::time::Duration;

use anyhow::Result;
use log::info;
use websig_core::{Body, Context, ErrorKind, StaticEnv};
use websig_hmac::{Config, RequestSigner, WEBSIG_SIGNING_KEY};

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    // In production use `OsEnv` so the key comes from the process environment.
    let ctx = Context::new().with_env(StaticEnv::from_iter([(
        WEBSIG_SIGNING_KEY,
        "example-signing-key",
    )]));
    let config = Config::new().from_env(&ctx);
    let signer = RequestSigner::from_config(&ctx, &config)?;
    info!("loaded config: {config:?}");

    let signed_headers = ["Content-Type", "X-Request-Id"];
    let mut req = http::Request::builder()
        .method("POST")
        .uri("https://example.com/hooks/orders")
        .header("Content-Type", "application/json")
        .header("X-Request-Id", "7f3c")
        .body(Body::from(r#"{"order":42}"#))?;

    signer.sign_with_ttl(&mut req, Duration::from_secs(60), &signed_headers)?;
    println!("X-Sig-Expired: {}", req.headers()["X-Sig-Expired"].to_str()?);
    println!("X-Signature: {}", req.headers()["X-Signature"].to_str()?);

    // The receiving side checks the same header list.
    signer.verify(&mut req, &signed_headers)?;
    println!("signature verified");

    // The body can still be consumed after signing and verifying.
    let mut body = String::new();
    req.body_mut().read_to_string(&mut body)?;
    println!("body: {body}");

    // Any change to the signed content is rejected.
    req.headers_mut()
        .insert("X-Request-Id", http::HeaderValue::from_static("forged"));
    *req.body_mut() = Body::from(body);
    match signer.verify(&mut req, &signed_headers) {
        Err(err) if err.kind() == ErrorKind::InvalidSignature => println!("forged request rejected"),
        other => anyhow::bail!("forged request not rejected: {other:?}"),
    }

    Ok(())
}
