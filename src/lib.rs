//! # Sunbae Quiz
//!
//! 自动完成并提交单词测试的命令行工具
//!
//! ## 架构设计
//!
//! 本系统采用分层结构：
//!
//! ### ① 数据层（Models / API types）
//! - `models/` - Day、Book、User、Word 等值对象
//! - `api/` - 三个接口的请求 / 响应结构
//!
//! ### ② 业务能力层（Services / Clients）
//! - `services/` - 答案推导、check 列表构建，纯函数
//! - `clients/` - `SunbaeClient`，认证 / 出题 / 保存
//!
//! ### ③ 流程层（Workflow）
//! - `QuizFlow` - 认证 → 出题 → 推导 → 提交
//!
//! ### ④ 应用层
//! - `App` - 持有配置和客户端，输出启动 / 统计日志
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::SunbaeClient;
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{parse_days, Book, Day, User, Word, WordResult};
pub use services::{build_check_list, derive_answer};
pub use workflow::{QuizFlow, QuizReport};
