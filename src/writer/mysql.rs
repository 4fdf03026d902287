//! MySQL 写入器实现
//!
//! 每次写入使用独立连接与显式事务：执行成功提交，失败回滚整批，
//! 连接随作用域释放。构造阶段不触碰网络，表结构检查由 bootstrap 单独完成。

use mysql::prelude::Queryable;
use mysql::{Conn, TxOpts, Value};

use crate::config::MysqlConfig;
use crate::error::{ArchiveError, Result};
use crate::record::{PostRecord, UserRecord};
use crate::schema::SchemaManager;
use crate::writer::RecordWriter;
use crate::writer::stats::WriteStats;
use crate::writer::upsert::UpsertStatement;

/// MySQL 写入器
pub struct MysqlWriter {
    config: MysqlConfig,
    stats: WriteStats,
}

impl MysqlWriter {
    /// 创建 MySQL 写入器
    ///
    /// 只保存连接配置，不建立连接。
    pub fn new(config: &MysqlConfig) -> Self {
        Self {
            config: config.clone(),
            stats: WriteStats::new(),
        }
    }

    /// 保障数据库与数据表存在
    ///
    /// 必须在首次写入前调用一次。失败属于环境级错误，
    /// 调用方应终止流程而不是继续写入。
    pub fn bootstrap(&self) -> Result<()> {
        SchemaManager::new(&self.config).bootstrap()
    }

    /// 在单个事务中批量 upsert 一组行
    ///
    /// 空批次直接返回 Ok(0)，不建立连接。任何一行失败都会回滚整批，
    /// 返回的计数是本批提交的记录数。
    fn upsert_batch(
        &mut self,
        table: &str,
        key: &str,
        columns: &[&str],
        rows: Vec<Vec<Value>>,
    ) -> Result<u64> {
        if rows.is_empty() {
            return Ok(0);
        }

        let submitted = rows.len() as u64;
        let statement = UpsertStatement::build(table, key, columns, &rows)?;

        match self.execute_statement(statement) {
            Ok(()) => {
                self.stats.written_records += submitted;

                #[cfg(feature = "logging")]
                tracing::debug!("表 {} 提交 {} 条记录", table, submitted);

                Ok(submitted)
            }
            Err(e) => {
                self.stats.failed_records += submitted;

                #[cfg(feature = "logging")]
                {
                    crate::logging::ensure_logger_initialized();
                    tracing::error!("表 {} 批量写入失败, 整批回滚: {}", table, e);
                }

                Err(e)
            }
        }
    }

    /// 建立连接并在事务中执行语句
    fn execute_statement(&self, statement: UpsertStatement) -> Result<()> {
        let mut conn = Conn::new(self.config.opts())?;
        let mut tx = conn.start_transaction(TxOpts::default())?;

        let (sql, params) = statement.into_parts();
        match tx.exec_drop(&sql, params) {
            Ok(()) => {
                tx.commit()?;
                Ok(())
            }
            Err(e) => {
                // 回滚失败不掩盖原始写入错误
                if let Err(_rollback_err) = tx.rollback() {
                    #[cfg(feature = "logging")]
                    tracing::warn!("事务回滚失败: {}", _rollback_err);
                }
                Err(ArchiveError::Mysql(e))
            }
        }
    }
}

impl RecordWriter for MysqlWriter {
    fn name(&self) -> &str {
        "mysql"
    }

    /// 写入或更新单个用户记录
    fn write_user(&mut self, user: &UserRecord) -> Result<u64> {
        if user.id.is_empty() {
            return Err(ArchiveError::invalid_record("用户 id 不能为空"));
        }

        let rows = vec![user.to_row()];
        self.upsert_batch(UserRecord::TABLE, UserRecord::KEY, &UserRecord::COLUMNS, rows)
    }

    /// 写入一批微博记录，归属用户由调用方显式指定
    fn write_posts(&mut self, user_id: &str, posts: &[PostRecord]) -> Result<u64> {
        if user_id.is_empty() {
            return Err(ArchiveError::invalid_record("归属用户 id 不能为空"));
        }
        for post in posts {
            if post.id.is_empty() {
                return Err(ArchiveError::invalid_record("微博 id 不能为空"));
            }
        }

        let rows: Vec<Vec<Value>> = posts.iter().map(|post| post.to_row(user_id)).collect();
        self.upsert_batch(PostRecord::TABLE, PostRecord::KEY, &PostRecord::COLUMNS, rows)
    }

    fn finalize(&mut self) -> Result<()> {
        self.stats.finish();

        #[cfg(feature = "logging")]
        tracing::info!("MySQL 写入完成: {}", self.stats);

        Ok(())
    }

    fn stats(&self) -> WriteStats {
        self.stats.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_config() -> MysqlConfig {
        MysqlConfig {
            host: "unreachable.invalid".to_string(),
            ..MysqlConfig::default()
        }
    }

    #[test]
    fn test_new_writer_does_not_connect() {
        let writer = MysqlWriter::new(&offline_config());
        assert_eq!(writer.name(), "mysql");
        assert_eq!(writer.stats().total_records(), 0);
    }

    #[test]
    fn test_empty_post_batch_is_noop() {
        let mut writer = MysqlWriter::new(&offline_config());
        let written = writer.write_posts("2295905497", &[]).unwrap();

        // 不触发任何连接尝试
        assert_eq!(written, 0);
        assert_eq!(writer.stats().total_records(), 0);
    }

    #[test]
    fn test_empty_user_id_is_rejected() {
        let mut writer = MysqlWriter::new(&offline_config());
        let user = UserRecord::default();
        let result = writer.write_user(&user);

        assert!(result.unwrap_err().is_invalid_record());
        assert_eq!(writer.stats().total_records(), 0);
    }

    #[test]
    fn test_empty_owner_is_rejected() {
        let mut writer = MysqlWriter::new(&offline_config());
        let post = PostRecord {
            id: "IqjC0BHu3".to_string(),
            ..PostRecord::default()
        };
        let result = writer.write_posts("", &[post]);

        assert!(result.unwrap_err().is_invalid_record());
    }

    #[test]
    fn test_post_without_id_is_rejected() {
        let mut writer = MysqlWriter::new(&offline_config());
        let result = writer.write_posts("2295905497", &[PostRecord::default()]);

        assert!(result.unwrap_err().is_invalid_record());
        assert_eq!(writer.stats().total_records(), 0);
    }
}
