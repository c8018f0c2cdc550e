//! Checks on hosted store credentials.

/// URL shipped in sample configuration.
pub const PLACEHOLDER_URL: &str = "https://your-supabase-project-url.supabase.co";

/// Key shipped in sample configuration.
pub const PLACEHOLDER_ANON_KEY: &str = "your-supabase-anon-key";

/// Whether `url` and `anon_key` are worth trying: both set and neither left
/// at its placeholder.
pub fn has_valid_credentials(url: &str, anon_key: &str) -> bool {
    let url = url.trim();
    let anon_key = anon_key.trim();
    !url.is_empty() && !anon_key.is_empty() && url != PLACEHOLDER_URL && anon_key != PLACEHOLDER_ANON_KEY
}
