use crate::utils::error::{Result, UtilError};
use crate::utils::validation::{
    validate_min, validate_non_empty_string, validate_one_of, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

pub const BACKOFF_POLICIES: [&str; 5] =
    ["no", "fixed", "random", "exponential", "exponential_random"];
pub const SOCKS5_NETWORKS: [&str; 2] = ["tcp", "udp"];

// ${VAR_NAME}
static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Per-request runtime settings passed alongside an SDK call.
///
/// 所有欄位皆為選填；未設定代表沿用 client 的預設值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoretry: Option<bool>,
    #[serde(rename = "ignoreSSL", skip_serializing_if = "Option::is_none")]
    pub ignore_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backoff_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backoff_period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_idle_conns: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socks5_proxy: Option<String>,
    #[serde(rename = "socks5NetWork", skip_serializing_if = "Option::is_none")]
    pub socks5_network: Option<String>,
}

impl RuntimeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| UtilError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HTTPS_PROXY})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn set_autoretry(&mut self, v: bool) -> &mut Self {
        self.autoretry = Some(v);
        self
    }

    pub fn set_ignore_ssl(&mut self, v: bool) -> &mut Self {
        self.ignore_ssl = Some(v);
        self
    }

    pub fn set_max_attempts(&mut self, v: i64) -> &mut Self {
        self.max_attempts = Some(v);
        self
    }

    pub fn set_backoff_policy(&mut self, v: impl Into<String>) -> &mut Self {
        self.backoff_policy = Some(v.into());
        self
    }

    pub fn set_backoff_period(&mut self, v: i64) -> &mut Self {
        self.backoff_period = Some(v);
        self
    }

    pub fn set_read_timeout(&mut self, v: i64) -> &mut Self {
        self.read_timeout = Some(v);
        self
    }

    pub fn set_connect_timeout(&mut self, v: i64) -> &mut Self {
        self.connect_timeout = Some(v);
        self
    }

    pub fn set_local_addr(&mut self, v: impl Into<String>) -> &mut Self {
        self.local_addr = Some(v.into());
        self
    }

    pub fn set_http_proxy(&mut self, v: impl Into<String>) -> &mut Self {
        self.http_proxy = Some(v.into());
        self
    }

    pub fn set_https_proxy(&mut self, v: impl Into<String>) -> &mut Self {
        self.https_proxy = Some(v.into());
        self
    }

    pub fn set_no_proxy(&mut self, v: impl Into<String>) -> &mut Self {
        self.no_proxy = Some(v.into());
        self
    }

    pub fn set_max_idle_conns(&mut self, v: i64) -> &mut Self {
        self.max_idle_conns = Some(v);
        self
    }

    pub fn set_socks5_proxy(&mut self, v: impl Into<String>) -> &mut Self {
        self.socks5_proxy = Some(v.into());
        self
    }

    pub fn set_socks5_network(&mut self, v: impl Into<String>) -> &mut Self {
        self.socks5_network = Some(v.into());
        self
    }
}

impl fmt::Display for RuntimeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&pretty)
    }
}

impl Validate for RuntimeOptions {
    fn validate(&self) -> Result<()> {
        if let Some(attempts) = self.max_attempts {
            validate_min("maxAttempts", attempts, 1)?;
        }

        let non_negative = [
            ("backoffPeriod", self.backoff_period),
            ("readTimeout", self.read_timeout),
            ("connectTimeout", self.connect_timeout),
            ("maxIdleConns", self.max_idle_conns),
        ];
        for (field, value) in non_negative {
            if let Some(value) = value {
                validate_min(field, value, 0)?;
            }
        }

        if let Some(policy) = &self.backoff_policy {
            validate_one_of("backoffPolicy", policy, &BACKOFF_POLICIES)?;
        }

        if let Some(addr) = &self.local_addr {
            validate_non_empty_string("localAddr", addr)?;
        }

        if let Some(proxy) = &self.http_proxy {
            validate_url("httpProxy", proxy, &["http", "https"])?;
        }
        if let Some(proxy) = &self.https_proxy {
            validate_url("httpsProxy", proxy, &["http", "https"])?;
        }
        if let Some(proxy) = &self.socks5_proxy {
            validate_url("socks5Proxy", proxy, &["socks5", "socks5h"])?;
        }

        if let Some(network) = &self.socks5_network {
            validate_one_of("socks5NetWork", network, &SOCKS5_NETWORKS)?;
        }

        Ok(())
    }
}
