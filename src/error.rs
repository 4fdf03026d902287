//! 错误类型定义
//!
//! 这个模块定义了库中使用的所有错误类型，使用 thiserror 提供丰富的错误信息。

/// 微博归档库的结果类型
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// 微博归档错误类型
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// MySQL 驱动错误（连接、执行、事务）
    #[error("MySQL错误: {0}")]
    Mysql(#[from] mysql::Error),

    /// JSON解析错误（采集结果文件）
    #[error("JSON解析错误: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML解析错误（配置文件）
    #[error("TOML解析错误: {0}")]
    Toml(#[from] toml::de::Error),

    /// SQL构造错误（批次列数不一致等违反调用约定的情况）
    #[error("SQL构造错误: {message}")]
    Sql { message: String },

    /// 记录校验错误（自然主键为空等）
    #[error("记录校验错误: {message}")]
    InvalidRecord { message: String },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 日志错误（仅在启用 logging feature 时可用）
    #[cfg(feature = "logging")]
    #[error("日志错误: {0}")]
    Log(#[from] crate::logging::LogError),

    /// 其他错误
    #[error("未知错误: {0}")]
    Other(String),
}

impl ArchiveError {
    /// 创建一个SQL构造错误
    pub fn sql_error<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        {
            crate::logging::ensure_logger_initialized();
            tracing::error!("SQL构造错误: {}", message);
        }
        Self::Sql { message }
    }

    /// 创建一个记录校验错误
    pub fn invalid_record<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        {
            crate::logging::ensure_logger_initialized();
            tracing::error!("记录校验错误: {}", message);
        }
        Self::InvalidRecord { message }
    }

    /// 创建一个配置错误
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        {
            crate::logging::ensure_logger_initialized();
            tracing::error!("配置错误: {}", message);
        }
        Self::Config(message)
    }

    /// 创建一个其他类型错误
    pub fn other<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        {
            crate::logging::ensure_logger_initialized();
            tracing::error!("未知错误: {}", message);
        }
        Self::Other(message)
    }

    /// 检查是否为 IO 错误
    pub fn is_io_error(&self) -> bool {
        matches!(self, ArchiveError::Io(_))
    }

    /// 检查是否为 MySQL 驱动错误
    pub fn is_mysql_error(&self) -> bool {
        matches!(self, ArchiveError::Mysql(_))
    }

    /// 检查是否为SQL构造错误
    pub fn is_sql_error(&self) -> bool {
        matches!(self, ArchiveError::Sql { .. })
    }

    /// 检查是否为记录校验错误
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, ArchiveError::InvalidRecord { .. })
    }

    /// 检查是否为配置错误
    pub fn is_config_error(&self) -> bool {
        matches!(self, ArchiveError::Config(_))
    }

    /// 检查是否为其他错误
    pub fn is_other_error(&self) -> bool {
        matches!(self, ArchiveError::Other(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let sql_err = ArchiveError::sql_error("column count mismatch");
        assert!(sql_err.is_sql_error());

        let record_err = ArchiveError::invalid_record("empty id");
        assert!(record_err.is_invalid_record());

        let config_err = ArchiveError::config_error("config missing");
        assert!(!config_err.is_io_error());
        assert!(config_err.is_config_error());
    }

    #[test]
    fn test_error_from() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let archive_err: ArchiveError = io_err.into();
        assert!(archive_err.is_io_error());
    }

    #[test]
    fn test_error_display() {
        let err = ArchiveError::Sql {
            message: "row 3 has 13 values, expected 14".to_string(),
        };

        let display = format!("{}", err);
        assert!(display.contains("SQL构造错误"));
        assert!(display.contains("row 3"));
    }
}
