//! 写入器模块
//!
//! 定义记录写入的统一接口与写入统计，并提供 MySQL 实现。
//! 写入接口按记录类型拆分，归属关系由调用方显式传入。

pub mod mysql;
pub mod stats;
pub mod upsert;

pub use mysql::MysqlWriter;
pub use stats::WriteStats;
pub use upsert::UpsertStatement;

use crate::error::Result;
use crate::record::{PostRecord, UserRecord};

/// 记录写入器统一接口
///
/// 写入方法返回本次提交的记录数；失败以 Err 返回，
/// 是否继续后续批次由调用方决定。
pub trait RecordWriter {
    /// 写入器名称，用于日志与统计输出
    fn name(&self) -> &str;

    /// 写入或更新单个用户记录
    fn write_user(&mut self, user: &UserRecord) -> Result<u64>;

    /// 写入一批微博记录
    ///
    /// user_id 是这批微博的归属用户，必须显式给出；
    /// 空批次返回 Ok(0)。
    fn write_posts(&mut self, user_id: &str, posts: &[PostRecord]) -> Result<u64>;

    /// 收尾，汇总统计并释放资源
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }

    /// 当前写入统计快照
    fn stats(&self) -> WriteStats {
        WriteStats::new()
    }
}
