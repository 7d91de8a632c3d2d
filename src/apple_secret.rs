// src/apple_secret.rs
//! Sign in with Apple client secret: an ES256 JWT over fixed team/service
//! identifiers, valid 180 days, signed with the downloaded `.p8` key.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Apple Developer team ID (token issuer).
pub const TEAM_ID: &str = "4V55KN5U7M";
/// Service ID the secret is generated for (token subject).
pub const CLIENT_ID: &str = "carmenwong.PiggyBong";
/// Key ID of the `.p8` signing key, echoed in the JWT header.
pub const KEY_ID: &str = "YZ46W47739";
/// Where the downloaded signing key lives.
pub const PRIVATE_KEY_FILE: &str = "/Users/momow1127/Downloads/AuthKey_YZ46W47739.p8";
/// Audience Apple expects on identity-provider tokens.
pub const AUDIENCE: &str = "https://appleid.apple.com";
/// Apple caps client secrets at six months.
pub const VALIDITY_DAYS: i64 = 180;

/// Claim set of the client secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub aud: String,
    pub sub: String,
}

/// Claims for a secret issued at `issued_at`; expiry is exactly 180 days out.
pub fn client_secret_claims(issued_at: DateTime<Utc>) -> Claims {
    Claims {
        iss: TEAM_ID.to_string(),
        iat: issued_at.timestamp(),
        exp: (issued_at + Duration::days(VALIDITY_DAYS)).timestamp(),
        aud: AUDIENCE.to_string(),
        sub: CLIENT_ID.to_string(),
    }
}

/// Read the PEM key from disk; a missing file fails with the path in the
/// error chain and is left to the caller to surface.
pub fn load_private_key(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("reading private key from {}", path.display()))
}

/// ES256-sign the claim set with `kid` in the header. Returns the compact
/// `header.payload.signature` token.
pub fn sign_client_secret(private_key_pem: &str, issued_at: DateTime<Utc>) -> Result<String> {
    let mut header = Header::new(Algorithm::ES256);
    header.kid = Some(KEY_ID.to_string());

    let key = EncodingKey::from_ec_pem(private_key_pem.as_bytes())
        .context("parsing ES256 private key")?;

    encode(&header, &client_secret_claims(issued_at), &key).context("signing client secret")
}

/// The console block the operator pastes into the Supabase auth settings.
pub fn setup_instructions(client_secret: &str) -> String {
    let rule = "=".repeat(50);
    format!(
        "🍎 Apple Sign-In Configuration for Supabase:\n\
         {rule}\n\
         Client IDs: {CLIENT_ID}\n\
         Secret Key: {client_secret}\n\
         {rule}\n\
         \n\
         📋 Instructions:\n\
         1. Copy the Client IDs value into the 'Client IDs' field in Supabase\n\
         2. Copy the Secret Key value into the 'Secret Key (for OAuth)' field in Supabase\n\
         3. Save the configuration\n\
         \n\
         ⚠️  Note: This secret expires in 6 months and will need to be regenerated"
    )
}
