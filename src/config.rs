use log::Level;

pub const REDIRECT_AFTER_LOGIN_KEY: &str = "redirectAfterLogin";
pub const DEFAULT_LANDING_PATH: &str = "/budgets";
pub const UNCATEGORIZED: &str = "uncategorized";

pub fn api_base_url() -> &'static str {
    option_env!("BUDGET_API_BASE_URL").unwrap_or("")
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base_url().trim_end_matches('/'), path)
}

pub fn log_level() -> Level {
    parse_log_level(option_env!("BUDGET_LOG_LEVEL").unwrap_or("info"))
}

fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Level::Error,
        "warn" => Level::Warn,
        "debug" => Level::Debug,
        "trace" => Level::Trace,
        _ => Level::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parsing_is_lenient() {
        assert_eq!(parse_log_level("DEBUG"), Level::Debug);
        assert_eq!(parse_log_level(" warn "), Level::Warn);
        assert_eq!(parse_log_level("verbose"), Level::Info);
    }

    #[test]
    fn api_url_joins_relative_paths() {
        let url = api_url("/api/budgets");
        assert!(url.ends_with("/api/budgets"));
        assert!(!url.contains("//api"));
    }
}
