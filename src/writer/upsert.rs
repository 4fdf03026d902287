//! 批量 upsert 语句构造模块
//!
//! 生成多行 INSERT ... ON DUPLICATE KEY UPDATE 语句与按位参数。
//! 列数与每行参数个数在构造期校验，执行期不会出现参数错位。

use crate::error::{ArchiveError, Result};
use mysql::Value;

/// 批量 upsert 语句
///
/// 主键冲突时更新全部非主键列，主键本身不出现在更新子句中。
#[derive(Debug)]
pub struct UpsertStatement {
    sql: String,
    params: Vec<Value>,
}

impl UpsertStatement {
    /// 构造批量 upsert 语句
    ///
    /// columns 必须包含 key 且存在至少一个非主键列；
    /// 每行参数个数必须与列数一致，任何不一致都返回 SQL 构造错误。
    pub fn build(table: &str, key: &str, columns: &[&str], rows: &[Vec<Value>]) -> Result<Self> {
        if columns.is_empty() {
            return Err(ArchiveError::sql_error(format!("表 {table} 的列清单为空")));
        }
        if !columns.contains(&key) {
            return Err(ArchiveError::sql_error(format!(
                "表 {table} 的主键列 {key} 不在列清单中"
            )));
        }
        if columns.len() < 2 {
            return Err(ArchiveError::sql_error(format!(
                "表 {table} 没有可更新的非主键列"
            )));
        }
        if rows.is_empty() {
            return Err(ArchiveError::sql_error(format!("表 {table} 的写入批次为空")));
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ArchiveError::sql_error(format!(
                    "表 {table} 第 {index} 行参数个数 {} 与列数 {} 不一致",
                    row.len(),
                    columns.len()
                )));
            }
        }

        let column_list = columns.join(", ");
        let row_placeholder = format!("({})", vec!["?"; columns.len()].join(", "));
        let values_clause = vec![row_placeholder.as_str(); rows.len()].join(", ");
        let update_clause = columns
            .iter()
            .filter(|column| **column != key)
            .map(|column| format!("{column} = VALUES({column})"))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "INSERT INTO {table} ({column_list}) VALUES {values_clause} \
             ON DUPLICATE KEY UPDATE {update_clause}"
        );
        let params = rows.iter().flatten().cloned().collect();

        Ok(Self { sql, params })
    }

    /// 最终 SQL 文本
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// 按行展开后的全部参数
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// 消费语句，返回 SQL 与参数
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}
