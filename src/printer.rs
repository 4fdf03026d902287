//! 控制台输出模块
//!
//! 把用户与微博记录格式化为固定版式的控制台文本，便于在写入前后人工核对内容。

use crate::record::{PostRecord, UserRecord, publish_time_format};

/// 每条微博之后的分隔线宽度
const SEPARATOR_WIDTH: usize = 100;

/// 可选字段为空时的占位文案
const EMPTY_PLACEHOLDER: &str = "无";

/// 格式化用户概要
///
/// 五行固定版式：昵称、id、微博数、关注数、粉丝数。
pub fn format_user(user: &UserRecord) -> String {
    format!(
        "用户昵称: {}\n用户id: {}\n微博数: {}\n关注数: {}\n粉丝数: {}",
        user.nickname, user.id, user.weibo_num, user.following, user.followers
    )
}

/// 格式化单条微博
///
/// 首行为正文，其后依次为发布位置、发布时间、发布工具与三项计数，
/// 末尾附评论页 url 和一条分隔线。
pub fn format_post(post: &PostRecord) -> String {
    let publish_place = post.publish_place.as_deref().unwrap_or(EMPTY_PLACEHOLDER);
    let publish_tool = post.publish_tool.as_deref().unwrap_or(EMPTY_PLACEHOLDER);
    let publish_time = post.publish_time.format(publish_time_format::FORMAT);

    format!(
        "{}\n微博发布位置：{}\n发布时间：{}\n发布工具：{}\n点赞数：{}\n转发数：{}\n评论数：{}\nurl：https://weibo.cn/comment/{}\n{}",
        post.content,
        publish_place,
        publish_time,
        publish_tool,
        post.up_num,
        post.retweet_num,
        post.comment_num,
        post.id,
        "-".repeat(SEPARATOR_WIDTH)
    )
}

/// 打印用户概要到标准输出
pub fn print_user(user: &UserRecord) {
    println!("{}", format_user(user));
}

/// 打印单条微博到标准输出
pub fn print_post(post: &PostRecord) {
    println!("{}", format_post(post));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_publish_time;

    fn sample_user() -> UserRecord {
        UserRecord {
            id: "1669879400".to_string(),
            nickname: "测试昵称".to_string(),
            weibo_num: 1900,
            following: 300,
            followers: 1000,
            ..UserRecord::default()
        }
    }

    fn sample_post() -> PostRecord {
        PostRecord {
            id: "IqjC0BHu3".to_string(),
            content: "今天天气不错".to_string(),
            publish_place: Some("北京".to_string()),
            publish_time: parse_publish_time("2020-01-18 20:25").unwrap(),
            publish_tool: Some("iPhone客户端".to_string()),
            up_num: 12,
            retweet_num: 3,
            comment_num: 5,
            ..PostRecord::default()
        }
    }

    #[test]
    fn test_format_user_layout() {
        let text = format_user(&sample_user());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "用户昵称: 测试昵称");
        assert_eq!(lines[1], "用户id: 1669879400");
        assert_eq!(lines[2], "微博数: 1900");
        assert_eq!(lines[3], "关注数: 300");
        assert_eq!(lines[4], "粉丝数: 1000");
    }

    #[test]
    fn test_format_post_layout() {
        let text = format_post(&sample_post());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "今天天气不错");
        assert_eq!(lines[1], "微博发布位置：北京");
        assert_eq!(lines[2], "发布时间：2020-01-18 20:25:00");
        assert_eq!(lines[3], "发布工具：iPhone客户端");
        assert_eq!(lines[4], "点赞数：12");
        assert_eq!(lines[5], "转发数：3");
        assert_eq!(lines[6], "评论数：5");
        assert_eq!(lines[7], "url：https://weibo.cn/comment/IqjC0BHu3");
        assert_eq!(lines[8], "-".repeat(SEPARATOR_WIDTH));
    }

    #[test]
    fn test_format_post_missing_optional_fields() {
        let mut post = sample_post();
        post.publish_place = None;
        post.publish_tool = None;

        let text = format_post(&post);
        assert!(text.contains("微博发布位置：无"));
        assert!(text.contains("发布工具：无"));
    }
}
