use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{service} responded with status {status}: {body}")]
    UpstreamStatus {
        service: String,
        status: u16,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("View rendering error: {message}")]
    ViewError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，決定 HTTP 回應狀態與日誌等級
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端送來的資料有問題
    Client,
    /// 外部分析服務失敗或逾時
    Upstream,
    /// 設定或啟動階段的錯誤
    Configuration,
    /// 其他伺服器內部錯誤
    Internal,
}

impl AdvisorError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedInput { .. } => ErrorCategory::Client,
            Self::ApiError(_) | Self::UpstreamStatus { .. } => ErrorCategory::Upstream,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::ViewError { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    /// 對應的 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedInput { .. } => 400,
            Self::ApiError(e) if e.is_timeout() => 504,
            Self::ApiError(_) | Self::UpstreamStatus { .. } => 502,
            _ => 500,
        }
    }

    /// 機器可讀的錯誤代碼，放在錯誤回應的 `code` 欄位
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => "malformed_input",
            Self::ApiError(e) if e.is_timeout() => "upstream_timeout",
            Self::ApiError(_) => "upstream_unreachable",
            Self::UpstreamStatus { .. } => "upstream_error",
            Self::ViewError { .. } => "view_error",
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => "configuration_error",
            Self::IoError(_) | Self::SerializationError(_) => "internal_error",
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Client => "Check the request parameters and body encoding",
            ErrorCategory::Upstream => {
                "Verify the analytics service endpoints and credentials, then try again"
            }
            ErrorCategory::Configuration => {
                "Check the configuration file and the environment variables it references"
            }
            ErrorCategory::Internal => "Check the server logs for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
