//! 写入统计模块
//!
//! 记录一次写入会话中成功与失败的记录数，供收尾阶段汇总输出。

use std::fmt;
use std::time::{Duration, Instant};

/// 写入统计信息
#[derive(Debug, Clone)]
pub struct WriteStats {
    /// 成功提交的记录数
    pub written_records: u64,
    /// 写入失败的记录数
    pub failed_records: u64,
    /// 统计开始时间
    start_time: Instant,
    /// 统计结束时间，finish 之前为 None
    end_time: Option<Instant>,
}

impl WriteStats {
    /// 创建新的统计实例，计时从创建时刻开始
    pub fn new() -> Self {
        Self {
            written_records: 0,
            failed_records: 0,
            start_time: Instant::now(),
            end_time: None,
        }
    }

    /// 结束统计计时
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// 统计区间时长，未结束时按当前时刻计算
    pub fn duration(&self) -> Duration {
        self.end_time.unwrap_or_else(Instant::now) - self.start_time
    }

    /// 提交与失败记录数之和
    pub fn total_records(&self) -> u64 {
        self.written_records + self.failed_records
    }

    /// 每秒成功写入的记录数
    pub fn records_per_second(&self) -> f64 {
        let secs = self.duration().as_secs_f64();
        if secs > 0.0 {
            self.written_records as f64 / secs
        } else {
            0.0
        }
    }

    /// 写入成功率，范围 0.0 到 1.0，无记录时视为全部成功
    pub fn success_rate(&self) -> f64 {
        let total = self.total_records();
        if total == 0 {
            1.0
        } else {
            self.written_records as f64 / total as f64
        }
    }
}

impl Default for WriteStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WriteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "成功: {} 条, 失败: {} 条, 耗时: {:.2}s, 速度: {:.2} 记录/秒",
            self.written_records,
            self.failed_records,
            self.duration().as_secs_f64(),
            self.records_per_second()
        )
    }
}
