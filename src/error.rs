use thiserror::Error;

/// 库内统一的 Result 类型
pub type Result<T> = std::result::Result<T, AppError>;

/// 应用程序错误类型
///
/// 所有错误对本次运行都是致命的，不做本地恢复
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入格式错误（Day 标记等）
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 单词书选择错误
    #[error("单词书错误: {0}")]
    Catalog(#[from] CatalogError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
}

/// 输入格式错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// 空的 Day 标记
    #[error("Day 标记不能为空")]
    EmptyToken,
    /// 无法识别的后缀（只接受 a / w）
    #[error("无法识别的 Day 后缀 '{suffix}' (标记: {token})，只接受 a 或 w")]
    UnknownSuffix { token: String, suffix: String },
    /// 数字部分无法解析
    #[error("无法解析 Day 编号: {token}")]
    InvalidNumber { token: String },
    /// Day 编号必须从 1 开始
    #[error("Day 编号必须 >= 1 (标记: {token})")]
    ZeroDay { token: String },
    /// 没有选择任何 Day
    #[error("至少需要指定一个 Day")]
    NoDays,
}

/// 单词书错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// 已知但尚未支持的单词书
    #[error("暂不支持的单词书: {0}")]
    UnsupportedBook(String),
    /// 未知的单词书名称
    #[error("未知的单词书: {0}")]
    UnknownBook(String),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 缺少访问令牌
    #[error("配置中缺少 token")]
    MissingToken,
    /// 配置值无效，`key` 为配置文件键名或环境变量名
    #[error("配置项 {key} 的值 '{value}' 无效，应为 {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回非成功状态码
    #[error("API返回错误状态 ({endpoint}): HTTP {status}, body={body}")]
    BadStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 响应无法解析或缺少字段
    #[error("API响应格式错误 ({endpoint}): {source}")]
    MalformedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    /// 请求体编码失败
    #[error("请求体编码失败: {0}")]
    Encode(#[from] serde_json::Error),
    /// 构建 HTTP 客户端失败
    #[error("无法构建HTTP客户端: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建响应解析失败错误
    pub fn malformed_response(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::Api(ApiError::MalformedResponse {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建配置文件读取错误
    pub fn config_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Config(ConfigError::ReadFailed {
            path: path.into(),
            source,
        })
    }
}
