// src/config.rs
//! Remote-store credentials from the environment, with the literal fallbacks
//! the deploy docs use as placeholders.

use std::env;

pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_KEY: &str = "SUPABASE_ANON_KEY";

pub const DEFAULT_SUPABASE_URL: &str = "https://your-project.supabase.co";
pub const DEFAULT_SUPABASE_KEY: &str = "your_anon_key_here";

/// Base URL + anon key for the hosted Supabase project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
}

impl StoreConfig {
    /// Read `SUPABASE_URL` / `SUPABASE_ANON_KEY`, falling back to the
    /// placeholder literals when unset. Never fails; a placeholder key just
    /// earns 401s from the store.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(ENV_SUPABASE_URL).unwrap_or_else(|_| DEFAULT_SUPABASE_URL.into()),
            api_key: env::var(ENV_SUPABASE_KEY).unwrap_or_else(|_| DEFAULT_SUPABASE_KEY.into()),
        }
    }
}
