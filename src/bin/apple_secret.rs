//! Generates the Apple Sign-In client secret from the downloaded `.p8` key
//! and prints the values to paste into the Supabase auth settings.

use chrono::Utc;
use kpop_stagehand::apple_secret::{
    load_private_key, setup_instructions, sign_client_secret, PRIVATE_KEY_FILE,
};
use kpop_stagehand::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let pem = load_private_key(PRIVATE_KEY_FILE)?;
    let secret = sign_client_secret(&pem, Utc::now())?;
    println!("{}", setup_instructions(&secret));
    Ok(())
}
