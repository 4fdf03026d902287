//! 命令行工作流
//!
//! 读取转储文件，打印用户概要，把用户与微博写入 MySQL，
//! 最后输出写入统计。表结构检查失败视为致命错误，
//! 单批写入失败只记录并继续。

use std::path::PathBuf;

use anyhow::{Result, bail};

use weibo_archive::record::ArchiveDump;
use weibo_archive::writer::{MysqlWriter, RecordWriter};
use weibo_archive::{Config, printer};

/// 默认配置文件路径，不存在时使用内置默认配置
const DEFAULT_CONFIG_PATH: &str = "weibo-archive.toml";

struct Args {
    dump_path: PathBuf,
    config_path: PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);

    let Some(dump_path) = args.next() else {
        bail!("用法: weibo-archive-cli <转储文件.json> [配置文件.toml]");
    };
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    Ok(Args {
        dump_path: PathBuf::from(dump_path),
        config_path: PathBuf::from(config_path),
    })
}

pub fn run() -> Result<()> {
    let args = parse_args()?;

    let config = if args.config_path.exists() {
        Config::from_file(&args.config_path)?
    } else {
        Config::default()
    };

    #[cfg(feature = "logging")]
    weibo_archive::logging::init_logging(&config.log)?;

    let dump = ArchiveDump::from_file(&args.dump_path)?;
    printer::print_user(&dump.user);

    let mut writer = MysqlWriter::new(&config.mysql);
    writer.bootstrap()?;

    if let Err(e) = writer.write_user(&dump.user) {
        eprintln!("用户记录写入失败: {e}");
    }
    if let Err(e) = writer.write_posts(&dump.user.id, &dump.weibos) {
        eprintln!("微博记录写入失败: {e}");
    }

    for post in &dump.weibos {
        printer::print_post(post);
    }

    writer.finalize()?;
    println!("\n写入完成，{}", writer.stats());

    Ok(())
}
