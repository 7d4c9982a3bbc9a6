//! Decode and validate a compact JWT given on the command line
//!
//! ```not_rust
//! RUST_LOG=jwtlite=debug cargo run --example inspect -- <token> [audience]
//! ```

use jwtlite::{Token, TokenValidator, ValidationOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwtlite=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(raw) = args.next() else {
        eprintln!("usage: inspect <token> [audience]");
        std::process::exit(2);
    };

    let token = match Token::decode(&raw) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("{} ({e})", e.kind());
            std::process::exit(1);
        }
    };
    print_token(&token);

    let options = match args.next() {
        Some(audience) => ValidationOptions::default().require_audience(audience),
        None => ValidationOptions::default().no_aud_validation(),
    };
    let validator = TokenValidator::new().options(options).build();

    match validator.check(&token) {
        Ok(()) => println!("valid"),
        Err(e) => {
            println!("invalid: {} ({e})", e.kind());
            std::process::exit(1);
        }
    }
}

fn print_token(token: &Token) {
    println!("alg: {:?}", token.algorithm());
    println!("typ: {:?}", token.header().token_type);
    println!("iss: {:?}", token.issuer());
    println!("sub: {:?}", token.subject());
    println!("aud: {:?}", token.audience());
    println!("exp: {:?}", token.expiration());
    println!("nbf: {:?}", token.not_before());
    println!("iat: {:?}", token.issued_at());
    println!("jti: {:?}", token.jwt_id());
    for (name, value) in &token.claims().extra {
        println!("{name}: {}", miniserde::json::to_string(value));
    }
    println!("signed: {}", !token.is_unsecured());
}
