//! 单词测试流程 - 流程层
//!
//! 核心职责：定义"一次测试"的完整处理流程
//!
//! 流程顺序：
//! 1. 认证 → 获取用户
//! 2. 按所选 Day 出题
//! 3. 为每个单词推导答案
//! 4. 提交结果（dry run 时跳过）

use tracing::{debug, info, warn};

use crate::clients::SunbaeClient;
use crate::error::Result;
use crate::models::{Book, Day, Word, WordResult};
use crate::services::derive_answer;

/// 一次测试的结果
#[derive(Debug, Clone)]
pub struct QuizReport {
    pub user_name: String,
    pub book: Book,
    pub days: Vec<Day>,
    pub words: Vec<Word>,
    /// 是否已提交到服务端
    pub submitted: bool,
}

/// 单词测试流程
///
/// - 严格按 认证 → 出题 → 推导 → 提交 顺序执行
/// - 任一步失败立即返回，不重试
pub struct QuizFlow<'a> {
    client: &'a SunbaeClient,
    book: Book,
    result: WordResult,
    dry_run: bool,
}

impl<'a> QuizFlow<'a> {
    pub fn new(client: &'a SunbaeClient, book: Book, result: WordResult) -> Self {
        Self {
            client,
            book,
            result,
            dry_run: false,
        }
    }

    /// 只推导答案，不提交
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self, access_token: &str, days: &[Day]) -> Result<QuizReport> {
        info!("🔑 正在认证...");
        let user = self.client.start(access_token).await?;
        info!("✓ 认证成功: {}", user);

        info!("📋 正在请求测试单词: 单词书 {}", self.book);
        let mut words = self
            .client
            .start_word_test(&user, self.book, days, self.result)
            .await?;

        if words.is_empty() {
            warn!("⚠️ 服务端没有返回任何单词");
        }

        for word in &mut words {
            word.answer = derive_answer(&word.meaning);
            debug!("{} → {}", word.word, word.answer);
        }

        let submitted = if self.dry_run {
            info!("🧪 dry run 模式，跳过提交");
            false
        } else {
            info!("📤 正在提交测试结果...");
            self.client
                .save_word_test(&user, self.book, days, &words)
                .await?;
            true
        };

        Ok(QuizReport {
            user_name: user.name,
            book: self.book,
            days: days.to_vec(),
            words,
            submitted,
        })
    }
}
