//! Backend Address Configuration
//!
//! The backend base address is a configuration value, not a constant baked
//! into call sites. Resolution order: a `TIERBOARD_API_BASE` global set by
//! the hosting page, then the compile-time `TIERBOARD_API_BASE` env var,
//! then same-origin relative paths.

/// Compile-time default, e.g. `TIERBOARD_API_BASE=http://localhost:13371`.
const COMPILED_API_BASE: Option<&str> = option_env!("TIERBOARD_API_BASE");

/// Name of the window global the hosting page may set.
const API_BASE_GLOBAL: &str = "TIERBOARD_API_BASE";

fn runtime_api_base() -> Option<String> {
    let win = web_sys::window()?;
    let value = js_sys::Reflect::get(win.as_ref(), &API_BASE_GLOBAL.into()).ok()?;
    let base = value.as_string()?;
    if base.trim().is_empty() { None } else { Some(base) }
}

/// Backend base address with no trailing slash. Empty means same-origin.
pub fn api_base() -> String {
    runtime_api_base()
        .or_else(|| COMPILED_API_BASE.map(str::to_string))
        .map(|base| base.trim().trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// Join a server path against the configured base.
pub fn api_url(path: &str) -> String {
    join(&api_base(), path)
}

/// Images come back as server-relative paths; resolve them the same way.
pub fn image_url(path: &str) -> String {
    api_url(path)
}

/// Server-hosted login flow for unauthenticated sessions.
pub fn login_url() -> String {
    api_url("/auth/login")
}

fn join(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::join;

    #[test]
    fn join_handles_leading_slash_and_same_origin() {
        assert_eq!(join("http://api:13371", "/tierlists"), "http://api:13371/tierlists");
        assert_eq!(join("http://api:13371", "tierlists"), "http://api:13371/tierlists");
        assert_eq!(join("", "/auth/me"), "/auth/me");
    }
}
