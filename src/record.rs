//! 记录类型定义
//!
//! 采集端移交的用户与微博记录。两种记录都是不可变的值快照，
//! 列清单是编译期常量，保证同一批次中每一行的字段集合与顺序完全一致。

use crate::error::{ArchiveError, Result};
use chrono::NaiveDateTime;
use mysql::Value;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 微博用户记录，对应 user 表的 13 列
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    /// 用户 id（平台自然主键，非空）
    pub id: String,
    /// 用户昵称
    pub nickname: String,
    /// 性别
    pub gender: String,
    /// 所在地
    pub location: String,
    /// 生日
    pub birthday: String,
    /// 简介
    pub description: String,
    /// 认证原因
    pub verified_reason: String,
    /// 标签
    pub talent: String,
    /// 学习经历
    pub education: String,
    /// 工作经历
    pub work: String,
    /// 微博数
    pub weibo_num: i64,
    /// 关注数
    pub following: i64,
    /// 粉丝数
    pub followers: i64,
}

/// 单条微博记录
///
/// 归属用户 id 不是记录字段，写入时由调用方显式提供并填入 user_id 列，
/// 与其余字段一起构成 weibo 表的 14 列。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    /// 微博 id（平台自然主键，非空）
    pub id: String,
    /// 正文
    #[serde(default)]
    pub content: String,
    /// 头条文章链接
    #[serde(default)]
    pub article_url: Option<String>,
    /// 原创微博图片链接列表
    #[serde(default)]
    pub original_pictures: Vec<String>,
    /// 被转发微博图片链接列表
    #[serde(default)]
    pub retweet_pictures: Vec<String>,
    /// 是否原创（false 表示转发）
    #[serde(default = "default_original")]
    pub original: bool,
    /// 视频链接
    #[serde(default)]
    pub video_url: Option<String>,
    /// 发布位置
    #[serde(default)]
    pub publish_place: Option<String>,
    /// 发布时间（必填，写入 DATETIME 列）
    #[serde(with = "publish_time_format")]
    pub publish_time: NaiveDateTime,
    /// 发布工具
    #[serde(default)]
    pub publish_tool: Option<String>,
    /// 点赞数
    #[serde(default)]
    pub up_num: i64,
    /// 转发数
    #[serde(default)]
    pub retweet_num: i64,
    /// 评论数
    #[serde(default)]
    pub comment_num: i64,
}

fn default_original() -> bool {
    true
}

impl Default for PostRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            content: String::new(),
            article_url: None,
            original_pictures: Vec::new(),
            retweet_pictures: Vec::new(),
            original: true,
            video_url: None,
            publish_place: None,
            publish_time: NaiveDateTime::default(),
            publish_tool: None,
            up_num: 0,
            retweet_num: 0,
            comment_num: 0,
        }
    }
}

impl UserRecord {
    /// user 表表名
    pub const TABLE: &'static str = "user";
    /// 自然主键列
    pub const KEY: &'static str = "id";
    /// user 表全部列，顺序与 [`UserRecord::to_row`] 的取值顺序一致
    pub const COLUMNS: [&'static str; 13] = [
        "id",
        "nickname",
        "gender",
        "location",
        "birthday",
        "description",
        "verified_reason",
        "talent",
        "education",
        "work",
        "weibo_num",
        "following",
        "followers",
    ];

    /// 按 [`UserRecord::COLUMNS`] 的顺序取出一行参数值
    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::from(self.id.as_str()),
            Value::from(self.nickname.as_str()),
            Value::from(self.gender.as_str()),
            Value::from(self.location.as_str()),
            Value::from(self.birthday.as_str()),
            Value::from(self.description.as_str()),
            Value::from(self.verified_reason.as_str()),
            Value::from(self.talent.as_str()),
            Value::from(self.education.as_str()),
            Value::from(self.work.as_str()),
            Value::from(self.weibo_num),
            Value::from(self.following),
            Value::from(self.followers),
        ]
    }
}

impl PostRecord {
    /// weibo 表表名
    pub const TABLE: &'static str = "weibo";
    /// 自然主键列
    pub const KEY: &'static str = "id";
    /// weibo 表全部列，顺序与 [`PostRecord::to_row`] 的取值顺序一致
    pub const COLUMNS: [&'static str; 14] = [
        "id",
        "user_id",
        "content",
        "article_url",
        "original_pictures",
        "retweet_pictures",
        "original",
        "video_url",
        "publish_place",
        "publish_time",
        "publish_tool",
        "up_num",
        "retweet_num",
        "comment_num",
    ];

    /// 按 [`PostRecord::COLUMNS`] 的顺序取出一行参数值
    ///
    /// `user_id` 是归属用户的 id，由调用方在写入时显式提供。
    pub fn to_row(&self, user_id: &str) -> Vec<Value> {
        vec![
            Value::from(self.id.as_str()),
            Value::from(user_id),
            Value::from(self.content.as_str()),
            Value::from(self.article_url.clone()),
            Value::from(self.original_pictures.join(",")),
            Value::from(self.retweet_pictures.join(",")),
            Value::from(self.original),
            Value::from(self.video_url.clone()),
            Value::from(self.publish_place.clone()),
            Value::from(
                self.publish_time
                    .format(publish_time_format::FORMAT)
                    .to_string(),
            ),
            Value::from(self.publish_tool.clone()),
            Value::from(self.up_num),
            Value::from(self.retweet_num),
            Value::from(self.comment_num),
        ]
    }
}

/// 解析发布时间字符串
///
/// 采集端给出的时间戳通常只有分钟精度（如 `2011-10-24 23:52`），
/// 也可能带秒；其余格式一律视为记录校验错误。
pub fn parse_publish_time(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, publish_time_format::FORMAT)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(s, publish_time_format::MINUTE_FORMAT)
        })
        .map_err(|_| {
            ArchiveError::invalid_record(format!("发布时间格式无效: {s}"))
        })
}

/// 发布时间的 serde 序列化格式
pub mod publish_time_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// 写入 DATETIME 列与序列化输出使用的格式
    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    /// 采集端常见的分钟精度格式
    pub(crate) const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S>(
        dt: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_publish_time(&s).map_err(serde::de::Error::custom)
    }
}

/// 采集端移交的一次完整归档：一个用户与该用户的微博列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveDump {
    /// 用户记录
    pub user: UserRecord,
    /// 该用户的微博记录，按采集顺序排列
    #[serde(default)]
    pub weibos: Vec<PostRecord>,
}

impl ArchiveDump {
    /// 从 JSON 文件加载归档数据
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// 从 JSON 字符串加载归档数据
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
