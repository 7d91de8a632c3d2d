// tests/apple_secret_token.rs
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use kpop_stagehand::apple_secret::{
    load_private_key, sign_client_secret, Claims, AUDIENCE, CLIENT_ID, KEY_ID, TEAM_ID,
};

const TEST_KEY_PEM: &str = include_str!("fixtures/es256_test_key.p8");
const TEST_PUB_PEM: &str = include_str!("fixtures/es256_test_pub.pem");

#[test]
fn secret_verifies_against_the_public_key() {
    let issued_at = Utc::now();
    let token = sign_client_secret(TEST_KEY_PEM, issued_at).unwrap();

    let mut validation = Validation::new(Algorithm::ES256);
    validation.set_audience(&[AUDIENCE]);

    let key = DecodingKey::from_ec_pem(TEST_PUB_PEM.as_bytes()).unwrap();
    let decoded = decode::<Claims>(&token, &key, &validation).unwrap();

    assert_eq!(decoded.claims.iss, TEAM_ID);
    assert_eq!(decoded.claims.sub, CLIENT_ID);
    assert_eq!(decoded.claims.iat, issued_at.timestamp());
    assert_eq!(
        decoded.claims.exp,
        (issued_at + Duration::days(180)).timestamp()
    );
}

#[test]
fn header_names_es256_and_the_key_id() {
    let token = sign_client_secret(TEST_KEY_PEM, Utc::now()).unwrap();
    let header = decode_header(&token).unwrap();
    assert_eq!(header.alg, Algorithm::ES256);
    assert_eq!(header.kid.as_deref(), Some(KEY_ID));
}

#[test]
fn tampered_token_fails_verification() {
    let token = sign_client_secret(TEST_KEY_PEM, Utc::now()).unwrap();
    // Flip a character inside the payload segment.
    let mut tampered: Vec<char> = token.chars().collect();
    let dot = token.find('.').unwrap();
    tampered[dot + 1] = if tampered[dot + 1] == 'A' { 'B' } else { 'A' };
    let tampered: String = tampered.into_iter().collect();

    let mut validation = Validation::new(Algorithm::ES256);
    validation.set_audience(&[AUDIENCE]);
    let key = DecodingKey::from_ec_pem(TEST_PUB_PEM.as_bytes()).unwrap();
    assert!(decode::<Claims>(&tampered, &key, &validation).is_err());
}

#[test]
fn missing_key_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("AuthKey_missing.p8");
    let err = load_private_key(&path).unwrap_err();
    assert!(format!("{err:#}").contains("AuthKey_missing.p8"));
}

#[test]
fn garbage_pem_fails_to_sign() {
    assert!(sign_client_secret("not a pem key", Utc::now()).is_err());
}
