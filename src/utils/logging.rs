//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::info;

use crate::models::{Book, Day};
use crate::workflow::QuizReport;

/// 记录程序启动信息
///
/// # 参数
/// - `book`: 单词书
/// - `days`: 所选 Day
/// - `dry_run`: 是否只推导不提交
pub fn log_startup(book: Book, days: &[Day], dry_run: bool) {
    let days = days
        .iter()
        .map(Day::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📚 单词书: {}", book);
    info!("📅 测试 Day: {}", days);
    if dry_run {
        info!("🧪 dry run: 不会提交结果");
    }
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(report: &QuizReport) {
    info!("\n{}", "=".repeat(60));
    info!("📊 测试完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    for word in &report.words {
        info!(
            "  #{:<5} {:<20} {} → {}",
            word.id,
            word.word,
            truncate_text(&word.meaning, 30),
            word.answer
        );
    }
    info!("{}", "─".repeat(60));
    info!("👤 用户: {}", report.user_name);
    info!("📝 单词数: {}", report.words.len());
    if report.submitted {
        info!("✅ 已提交");
    } else {
        info!("⏸ 未提交 (dry run)");
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("버리다, 포기하다", 3), "버리다...");
    }
}
