pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Name and version, as logged at startup.
pub fn app_banner() -> String {
    format!("al {} (AntiLang playground)", app_version())
}
