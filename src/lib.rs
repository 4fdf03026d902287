//! 微博数据 MySQL 持久化库
//!
//! 把抓取得到的微博用户资料与微博记录写入 MySQL：
//! 启动时以幂等 DDL 保障数据库与数据表存在，写入按批次在单事务内
//! 执行 upsert，主键冲突时用新数据覆盖旧列。
//!
//! # 快速开始
//!
//! ```no_run
//! use weibo_archive::{Config, MysqlWriter, RecordWriter, UserRecord};
//!
//! fn main() -> weibo_archive::Result<()> {
//!     let config = Config::default();
//!
//!     let mut writer = MysqlWriter::new(&config.mysql);
//!     writer.bootstrap()?;
//!
//!     let user = UserRecord {
//!         id: "2295905497".to_string(),
//!         nickname: "测试用户".to_string(),
//!         ..UserRecord::default()
//!     };
//!     writer.write_user(&user)?;
//!     writer.finalize()?;
//!     Ok(())
//! }
//! ```

// 核心模块
pub mod config;
pub mod error;
pub mod printer;
pub mod record;
pub mod schema;
pub mod writer;

// 日志模块 - logging 功能，默认开启
#[cfg(feature = "logging")]
pub mod logging;

// 常用类型重导出
pub use config::{Config, LogConfig, MysqlConfig};
pub use error::{ArchiveError, Result};
pub use record::{ArchiveDump, PostRecord, UserRecord};
pub use schema::{SCHEMA_VERSION, SchemaManager, TableSchema};
pub use writer::{MysqlWriter, RecordWriter, UpsertStatement, WriteStats};
