use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, ConfigError, Result};
use crate::models::{Book, WordResult};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 访问令牌（cookie `access_token`）
    pub token: String,
    /// 单词书
    pub book: Book,
    /// 服务端地址
    pub base_url: String,
    /// 提交时每个单词的作答结果
    pub result: WordResult,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 只推导答案，不提交
    pub dry_run: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            book: Book::default(),
            base_url: "https://peetsunbae.com".to_string(),
            result: WordResult::Correct,
            request_timeout_secs: 30,
            dry_run: false,
            verbose_logging: false,
        }
    }
}

/// 配置文件内容，除 token 外均可省略
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    token: Option<String>,
    book: Option<String>,
    base_url: Option<String>,
    result: Option<String>,
    request_timeout_secs: Option<u64>,
    dry_run: Option<bool>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 从 TOML 文件加载配置，再用环境变量覆盖
    ///
    /// 文件不存在时只使用环境变量
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_env(path, |name| std::env::var(name).ok())
    }

    fn load_with_env(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file = match std::fs::read_to_string(path) {
            Ok(content) => parse_file(&content, path)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("配置文件不存在，只使用环境变量: {}", path.display());
                FileConfig::default()
            }
            Err(e) => return Err(AppError::config_read_failed(path.display().to_string(), e)),
        };
        Self::resolve(file, env)
    }

    /// 从 TOML 字符串加载配置（不读取环境变量）
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file = parse_file(content, Path::new("<inline>"))?;
        Self::resolve(file, |_| None)
    }

    /// 合并文件配置和环境变量，环境变量优先
    fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default = Self::default();

        let token = env("SUNBAE_TOKEN")
            .or(file.token)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let book = match env("SUNBAE_BOOK").or(file.book) {
            Some(name) => Book::find(&name)?,
            None => default.book,
        };

        let result = match (env("SUNBAE_RESULT"), file.result) {
            (Some(value), _) => parse_result("SUNBAE_RESULT", &value)?,
            (None, Some(value)) => parse_result("result", &value)?,
            (None, None) => default.result,
        };

        let request_timeout_secs = match env("SUNBAE_REQUEST_TIMEOUT_SECS") {
            Some(value) => parse_timeout("SUNBAE_REQUEST_TIMEOUT_SECS", &value)?,
            None => match file.request_timeout_secs {
                Some(0) => return Err(invalid_value("request_timeout_secs", "0", "正整数")),
                Some(secs) => secs,
                None => default.request_timeout_secs,
            },
        };

        let dry_run = match env("SUNBAE_DRY_RUN") {
            Some(value) => parse_bool("SUNBAE_DRY_RUN", &value)?,
            None => file.dry_run.unwrap_or(default.dry_run),
        };

        let verbose_logging = match env("VERBOSE_LOGGING") {
            Some(value) => parse_bool("VERBOSE_LOGGING", &value)?,
            None => file.verbose_logging.unwrap_or(default.verbose_logging),
        };

        Ok(Self {
            token,
            book,
            base_url: env("SUNBAE_BASE_URL")
                .or(file.base_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(default.base_url),
            result,
            request_timeout_secs,
            dry_run,
            verbose_logging,
        })
    }
}

fn parse_file(content: &str, path: &Path) -> Result<FileConfig> {
    toml::from_str(content).map_err(|source| {
        AppError::Config(ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    })
}

fn invalid_value(key: &str, value: &str, expected: &str) -> AppError {
    AppError::Config(ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    })
}

/// `key` 为环境变量名或配置文件键名
fn parse_result(key: &str, value: &str) -> Result<WordResult> {
    value
        .parse()
        .map_err(|_| invalid_value(key, value, "correct | incorrect"))
}

fn parse_timeout(key: &str, value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(invalid_value(key, value, "正整数")),
    }
}

fn parse_bool(var_name: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        AppError::Config(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: "bool".to_string(),
        })
    })
}
