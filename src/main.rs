use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sunbae_quiz::config::DEFAULT_CONFIG_PATH;
use sunbae_quiz::{logger, parse_days, App, Config};

/// 自动完成并提交单词测试
#[derive(Parser, Debug)]
#[command(name = "sunbae-quiz", version)]
struct Cli {
    /// 测试 Day，例如 `3a`（总测试）`12w`（周测试）；省略时从标准输入读取
    days: Vec<String>,

    /// 配置文件路径
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 只推导答案，不提交
    #[arg(long)]
    dry_run: bool,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::load(&cli.config)
        .with_context(|| format!("无法加载配置: {}", cli.config.display()))?;
    config.dry_run |= cli.dry_run;
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logger::init(config.verbose_logging);

    let input = if cli.days.is_empty() {
        read_days_line()?
    } else {
        cli.days.join(" ")
    };
    let days = parse_days(&input).context("无法解析测试 Day")?;

    // 初始化并运行应用
    App::initialize(config)?.run(&days).await?;

    Ok(())
}

/// 提示并从标准输入读取一行 Day 标记
fn read_days_line() -> Result<String> {
    print!(">>> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("无法读取标准输入")?;
    Ok(line)
}
