use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORPUS: &str = "/corpora/laret4ry9in5/locations";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

const CONCEPT_INSIGHTS_ENDPOINT: &str = "https://gateway.watsonplatform.net/concept-insights/api";
const TRADEOFF_ANALYTICS_ENDPOINT: &str =
    "https://gateway.watsonplatform.net/tradeoff-analytics/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub concept_insights: ConceptInsightsConfig,
    #[serde(default = "ServiceConfig::tradeoff_analytics")]
    pub tradeoff_analytics: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_views_dir")]
    pub views_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: String,
    #[serde(default = "default_places_file")]
    pub places: String,
    #[serde(default = "default_problem_file")]
    pub problem: String,
}

/// 外部分析服務的連線設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptInsightsConfig {
    #[serde(flatten)]
    pub service: ServiceConfig,
    #[serde(default = "default_corpus")]
    pub corpus: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_views_dir() -> String {
    "views".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_places_file() -> String {
    "places.json".to_string()
}

fn default_problem_file() -> String {
    "problem.json".to_string()
}

fn default_corpus() -> String {
    DEFAULT_CORPUS.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            views_dir: default_views_dir(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            places: default_places_file(),
            problem: default_problem_file(),
        }
    }
}

impl ServiceConfig {
    fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            username: None,
            password: None,
            timeout_seconds: None,
        }
    }

    pub fn tradeoff_analytics() -> Self {
        Self::with_endpoint(TRADEOFF_ANALYTICS_ENDPOINT)
    }

    /// 取得逾時秒數，未設定時使用預設值
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    /// 帳號密碼需同時提供或同時省略
    pub fn credentials(&self) -> Result<Option<(&str, &str)>> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Ok(Some((user.as_str(), pass.as_str()))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(AdvisorError::MissingConfigError {
                field: "password".to_string(),
            }),
            (None, Some(_)) => Err(AdvisorError::MissingConfigError {
                field: "username".to_string(),
            }),
        }
    }

    fn validate_as(&self, section: &str) -> Result<()> {
        validation::validate_url(&format!("{}.endpoint", section), &self.endpoint)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range(&format!("{}.timeout_seconds", section), timeout, 1, 600)?;
        }
        self.credentials().map_err(|e| match e {
            AdvisorError::MissingConfigError { field } => AdvisorError::MissingConfigError {
                field: format!("{}.{}", section, field),
            },
            other => other,
        })?;
        if let Some(user) = &self.username {
            validation::validate_non_empty_string(&format!("{}.username", section), user)?;
        }
        Ok(())
    }
}

impl Default for ConceptInsightsConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::with_endpoint(CONCEPT_INSIGHTS_ENDPOINT),
            corpus: default_corpus(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            concept_insights: ConceptInsightsConfig::default(),
            tradeoff_analytics: ServiceConfig::tradeoff_analytics(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdvisorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| AdvisorError::config(format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${CI_USERNAME})；找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<regex::Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            regex::Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn places_path(&self) -> PathBuf {
        Path::new(&self.data.dir).join(&self.data.places)
    }

    pub fn problem_path(&self) -> PathBuf {
        Path::new(&self.data.dir).join(&self.data.problem)
    }

    pub fn corpus(&self) -> &str {
        &self.concept_insights.corpus
    }

    /// 監聽埠優先順序：命令列 / PORT > VCAP_APP_PORT > 設定檔
    pub fn resolve_port(&self, cli_port: Option<u16>) -> u16 {
        if let Some(port) = cli_port {
            return port;
        }
        std::env::var("VCAP_APP_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(self.server.port)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("server.port", self.server.port, 1, u16::MAX)?;
        validation::validate_path("server.views_dir", &self.server.views_dir)?;
        validation::validate_path("data.dir", &self.data.dir)?;
        validation::validate_path("data.places", &self.data.places)?;
        validation::validate_path("data.problem", &self.data.problem)?;

        self.concept_insights.service.validate_as("concept_insights")?;
        validation::validate_corpus("concept_insights.corpus", &self.concept_insights.corpus)?;
        self.tradeoff_analytics.validate_as("tradeoff_analytics")?;

        Ok(())
    }
}
