//! Static asset URLs.
//!
//! Routes live in the URL fragment, so the document path stays at the
//! deployment root and only asset URLs carry the `PUBLIC_URL` prefix.

const LOGO: &str = "static/img/logo.png";

/// Logo shown on the HelloWorld view.
#[must_use]
pub fn logo_src() -> String {
    under_base(public_url(), LOGO)
}

/// Build-time deployment prefix, empty for a root deployment.
#[must_use]
pub fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn under_base(base: &str, asset: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    format!("{base}/{}", asset.trim_start_matches('/'))
}
