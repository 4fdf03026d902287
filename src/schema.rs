//! 表结构管理模块
//!
//! 以声明式 DDL 维护目标数据库与两张数据表。全部语句幂等（IF NOT EXISTS），
//! 在启动阶段一次性检查，写入路径不再涉及任何 DDL。

use crate::config::MysqlConfig;
use crate::error::Result;
use mysql::Conn;
use mysql::prelude::Queryable;

/// 当前声明的表结构版本
pub const SCHEMA_VERSION: u32 = 1;

/// 单张表的声明式结构
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    /// 表名
    pub name: &'static str,
    /// 建表语句，列宽与类型约束是存储契约的一部分
    pub ddl: &'static str,
}

/// user 表：13 列，主键为用户 id
pub const USER_TABLE: TableSchema = TableSchema {
    name: "user",
    ddl: r#"CREATE TABLE IF NOT EXISTS user (
        id varchar(20) NOT NULL,
        nickname varchar(30),
        gender varchar(10),
        location varchar(200),
        birthday varchar(40),
        description varchar(140),
        verified_reason varchar(140),
        talent varchar(200),
        education varchar(200),
        work varchar(200),
        weibo_num INT,
        following INT,
        followers INT,
        PRIMARY KEY (id)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"#,
};

/// weibo 表：14 列，主键为微博 id，归属用户 id 为普通列（不加外键约束）
pub const WEIBO_TABLE: TableSchema = TableSchema {
    name: "weibo",
    ddl: r#"CREATE TABLE IF NOT EXISTS weibo (
        id varchar(10) NOT NULL,
        user_id varchar(12),
        content varchar(2000),
        article_url varchar(200),
        original_pictures varchar(3000),
        retweet_pictures varchar(3000),
        original BOOLEAN NOT NULL DEFAULT 1,
        video_url varchar(300),
        publish_place varchar(100),
        publish_time DATETIME NOT NULL,
        publish_tool varchar(30),
        up_num INT NOT NULL,
        retweet_num INT NOT NULL,
        comment_num INT NOT NULL,
        PRIMARY KEY (id)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"#,
};

/// 全部数据表，bootstrap 按此顺序创建
pub const TABLES: [TableSchema; 2] = [USER_TABLE, WEIBO_TABLE];

/// 表结构管理器
///
/// 负责在任何写入发生之前保障物理存储目标存在，且不破坏已有数据。
pub struct SchemaManager {
    config: MysqlConfig,
}

impl SchemaManager {
    /// 创建表结构管理器
    pub fn new(config: &MysqlConfig) -> Self {
        Self { config: config.clone() }
    }

    /// 创建目标数据库
    ///
    /// 使用未选择数据库的连接执行 CREATE DATABASE IF NOT EXISTS。
    /// 数据库不可达或配置错误属于环境级错误，错误会一路传播到进程边界。
    pub fn ensure_database(&self) -> Result<()> {
        #[cfg(feature = "logging")]
        tracing::info!(
            "检查数据库 {} ({})",
            self.config.database,
            self.config.addr()
        );

        let ddl = format!(
            "CREATE DATABASE IF NOT EXISTS `{}` DEFAULT CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci",
            self.config.database
        );

        let mut conn = Conn::new(self.config.server_opts())?;
        conn.query_drop(ddl)?;
        Ok(())
    }

    /// 创建单张数据表
    ///
    /// DDL 连接只存活于本次调用，语句执行后随作用域释放。
    pub fn ensure_table(&self, table: &TableSchema) -> Result<()> {
        #[cfg(feature = "logging")]
        tracing::debug!("检查数据表 {}", table.name);

        let mut conn = Conn::new(self.config.opts())?;
        conn.query_drop(table.ddl)?;
        Ok(())
    }

    /// 启动时一次性保障数据库与全部数据表存在
    ///
    /// 重复调用无副作用，不会清空或覆盖已有数据。
    pub fn bootstrap(&self) -> Result<()> {
        self.ensure_database()?;
        for table in &TABLES {
            self.ensure_table(table)?;
        }

        #[cfg(feature = "logging")]
        tracing::info!("表结构检查完成 (版本 {})", SCHEMA_VERSION);

        Ok(())
    }
}
