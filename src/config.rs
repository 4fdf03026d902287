//! 配置管理模块
//!
//! 提供统一的配置文件读取和管理功能

use crate::error::{ArchiveError, Result};
use mysql::{Opts, OptsBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 主配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 日志配置
    pub log: LogConfig,
    /// MySQL 连接配置
    pub mysql: MysqlConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// 是否启用控制台输出
    pub enable_stdout: bool,
    /// 日志输出目录
    pub log_dir: String,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// MySQL 连接配置
///
/// 连接参数在构造写入器时提供一次，之后每次写入都用它新建连接。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MysqlConfig {
    /// 主机地址
    pub host: String,
    /// 端口号
    pub port: u16,
    /// 用户名
    pub username: String,
    /// 密码
    pub password: String,
    /// 数据库名
    pub database: String,
    /// 字符集（微博内容含 emoji，需要 4 字节编码）
    pub charset: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enable_stdout: true,
            log_dir: "logs".to_string(),
            level: "info".to_string(),
        }
    }
}

impl Default for MysqlConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            username: "root".to_string(),
            password: String::new(),
            database: "weibo".to_string(),
            charset: "utf8mb4".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { log: LogConfig::default(), mysql: MysqlConfig::default() }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// 从字符串加载配置
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArchiveError::other(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        // 验证日志级别
        match self.log.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ArchiveError::config_error(format!(
                    "无效的日志级别: {}",
                    self.log.level
                )));
            }
        }

        if self.mysql.host.is_empty() {
            return Err(ArchiveError::config_error("MySQL 主机地址不能为空"));
        }
        if self.mysql.port == 0 {
            return Err(ArchiveError::config_error("MySQL 端口号不能为0"));
        }
        if self.mysql.database.is_empty() {
            return Err(ArchiveError::config_error("MySQL 数据库名不能为空"));
        }
        if self.mysql.charset.is_empty() {
            return Err(ArchiveError::config_error("MySQL 字符集不能为空"));
        }

        Ok(())
    }
}

impl MysqlConfig {
    /// 构造指向目标数据库的连接参数
    pub fn opts(&self) -> Opts {
        Opts::from(self.builder().db_name(Some(self.database.clone())))
    }

    /// 构造未选择数据库的连接参数（用于 CREATE DATABASE）
    pub fn server_opts(&self) -> Opts {
        Opts::from(self.builder())
    }

    /// 服务器地址，用于日志展示
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn builder(&self) -> OptsBuilder {
        OptsBuilder::new()
            .ip_or_hostname(Some(self.host.clone()))
            .tcp_port(self.port)
            .user(Some(self.username.clone()))
            .pass(Some(self.password.clone()))
            .init(vec![format!("SET NAMES {}", self.charset)])
    }
}
