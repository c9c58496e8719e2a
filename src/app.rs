use anyhow::{Context, Result};

use crate::clients::SunbaeClient;
use crate::config::Config;
use crate::models::Day;
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::{QuizFlow, QuizReport};

/// 应用主结构
pub struct App {
    config: Config,
    client: SunbaeClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let client = SunbaeClient::new(&config).context("无法创建API客户端")?;
        Ok(Self { config, client })
    }

    /// 运行应用主逻辑：认证 → 出题 → 推导答案 → 提交
    pub async fn run(&self, days: &[Day]) -> Result<QuizReport> {
        log_startup(self.config.book, days, self.config.dry_run);

        let report = QuizFlow::new(&self.client, self.config.book, self.config.result)
            .dry_run(self.config.dry_run)
            .run(&self.config.token, days)
            .await
            .context("单词测试失败")?;

        print_final_stats(&report);

        Ok(report)
    }
}
