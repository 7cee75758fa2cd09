// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api: ApiOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Compare,
    Deals,
}

impl PageKind {
    /// Parse the `section` launch parameter (`home`, `compare`, `deals`).
    pub fn from_section(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Some(PageKind::Home),
            "compare" => Some(PageKind::Compare),
            "deals" => Some(PageKind::Deals),
            _ => None,
        }
    }
}

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub base_url: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self::for_host(DEFAULT_HOST)
    }
}

impl ApiOptions {
    /// Local hosts get the explicit dev port; anything else is served
    /// behind the same host under `/api`.
    pub fn for_host(host: &str) -> Self {
        let host = host.trim();
        let base_url = if host == "localhost" || host == "127.0.0.1" {
            format!("http://{}:{}{}", host, LOCAL_API_PORT, API_PREFIX)
        } else {
            format!("http://{}{}", host, API_PREFIX)
        };
        Self { base_url }
    }

    /// Explicit base URL; a trailing slash is dropped.
    pub fn with_base(url: &str) -> Self {
        Self { base_url: s!(url.trim().trim_end_matches('/')) }
    }

    /// `--api` wins over `--host`; neither means localhost.
    pub fn resolve(api: Option<&str>, host: Option<&str>) -> Self {
        match (api, host) {
            (Some(url), _) => Self::with_base(url),
            (None, Some(host)) => Self::for_host(host),
            (None, None) => Self::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Table,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Some(ExportFormat::Table),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }

    /// Field separator; `None` for the aligned text table.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Table => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Tsv,
            include_headers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_get_dev_port() {
        assert_eq!(ApiOptions::for_host("localhost").base_url, "http://localhost:5000/api");
        assert_eq!(ApiOptions::for_host("127.0.0.1").base_url, "http://127.0.0.1:5000/api");
        assert_eq!(ApiOptions::for_host("shop.example").base_url, "http://shop.example/api");
    }

    #[test]
    fn explicit_api_wins() {
        let o = ApiOptions::resolve(Some("https://x.example/api/"), Some("localhost"));
        assert_eq!(o.base_url, "https://x.example/api");
        assert_eq!(ApiOptions::resolve(None, None), ApiOptions::default());
    }

    #[test]
    fn sections_parse_case_insensitively() {
        assert_eq!(PageKind::from_section(" Deals "), Some(PageKind::Deals));
        assert_eq!(PageKind::from_section("cart"), None);
    }
}
