use chrono::{DateTime, Utc};
use std::sync::LazyLock;
use uuid::Uuid;

const CORE_VERSION: &str = "0.01";

/// Process-wide user-agent prefix, built once on first use.
pub static DEFAULT_USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "AlibabaCloud ({}; {}) Rust/{} Core/{} TeaDSL/1",
        std::env::consts::OS,
        std::env::consts::ARCH,
        env!("CARGO_PKG_RUST_VERSION"),
        CORE_VERSION
    )
});

/// 將自訂 UA 附加在預設 UA 之後
pub fn get_user_agent(user_agent: Option<&str>) -> String {
    match user_agent {
        Some(ua) if !ua.is_empty() => format!("{} {}", DEFAULT_USER_AGENT.as_str(), ua),
        _ => DEFAULT_USER_AGENT.clone(),
    }
}

/// IMF-fixdate, e.g. `Mon, 02 Jan 2006 15:04:05 GMT`.
pub fn format_http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

pub fn get_date_utc_string() -> String {
    format_http_date(Utc::now())
}

pub fn get_nonce() -> String {
    Uuid::new_v4().to_string()
}
