//! 集成测试公共模块

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use weibo_archive::config::MysqlConfig;
use weibo_archive::record::{PostRecord, UserRecord, parse_publish_time};

/// 标准测试转储内容：一个用户加两条微博
#[allow(dead_code)]
pub const SAMPLE_DUMP_JSON: &str = r#"{
  "user": {
    "id": "2295905497",
    "nickname": "测试用户",
    "gender": "男",
    "location": "北京 海淀区",
    "birthday": "1990-01-01",
    "description": "这是一个测试账号",
    "education": "北京大学",
    "weibo_num": 2,
    "following": 42,
    "followers": 1024
  },
  "weibos": [
    {
      "id": "IqjC0BHu3",
      "content": "今天天气不错",
      "original_pictures": [
        "https://wx1.sinaimg.cn/large/a.jpg",
        "https://wx1.sinaimg.cn/large/b.jpg"
      ],
      "publish_place": "北京",
      "publish_time": "2020-01-18 20:25",
      "publish_tool": "iPhone客户端",
      "up_num": 12,
      "retweet_num": 3,
      "comment_num": 5
    },
    {
      "id": "IqjC0BHu4",
      "content": "转发微博",
      "original": false,
      "publish_time": "2020-01-19 08:00:00",
      "retweet_num": 1
    }
  ]
}"#;

/// 创建测试用的转储文件
#[allow(dead_code)]
pub fn create_test_dump(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

/// 构造一个字段齐全的用户记录
#[allow(dead_code)]
pub fn sample_user(id: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        nickname: "测试用户".to_string(),
        gender: "男".to_string(),
        location: "北京 海淀区".to_string(),
        birthday: "1990-01-01".to_string(),
        description: "这是一个测试账号".to_string(),
        verified_reason: String::new(),
        talent: String::new(),
        education: "北京大学".to_string(),
        work: String::new(),
        weibo_num: 2,
        following: 42,
        followers: 1024,
    }
}

/// 构造一条发布时间固定的微博记录
#[allow(dead_code)]
pub fn sample_post(id: &str, publish_time: &str) -> PostRecord {
    PostRecord {
        id: id.to_string(),
        content: format!("测试微博 {id}"),
        publish_place: Some("北京".to_string()),
        publish_time: parse_publish_time(publish_time).expect("Invalid test publish time"),
        publish_tool: Some("iPhone客户端".to_string()),
        up_num: 12,
        retweet_num: 3,
        comment_num: 5,
        ..PostRecord::default()
    }
}

/// 不可达主机的连接配置，离线测试用
#[allow(dead_code)]
pub fn offline_config() -> MysqlConfig {
    MysqlConfig {
        host: "unreachable.invalid".to_string(),
        ..MysqlConfig::default()
    }
}

/// 从环境变量读取真实测试库的连接配置
///
/// 未设置 WEIBO_ARCHIVE_TEST_HOST 时返回 None，调用方应跳过测试。
/// database 参数由各测试自行指定，避免并行测试相互干扰。
#[allow(dead_code)]
pub fn live_config_from_env(database: &str) -> Option<MysqlConfig> {
    let host = std::env::var("WEIBO_ARCHIVE_TEST_HOST").ok()?;

    let mut config = MysqlConfig {
        host,
        database: database.to_string(),
        ..MysqlConfig::default()
    };
    if let Ok(port) = std::env::var("WEIBO_ARCHIVE_TEST_PORT") {
        config.port = port.parse().expect("Invalid WEIBO_ARCHIVE_TEST_PORT");
    }
    if let Ok(username) = std::env::var("WEIBO_ARCHIVE_TEST_USER") {
        config.username = username;
    }
    if let Ok(password) = std::env::var("WEIBO_ARCHIVE_TEST_PASSWORD") {
        config.password = password;
    }

    Some(config)
}
