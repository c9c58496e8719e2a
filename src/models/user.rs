use crate::api::types::StartResponse;

/// 用户会话信息
///
/// 认证后创建一次，整个运行期间只读
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    access_token: String,
    pub id: i64,
    pub name: String,
    pub value: String,
    pub academy: String,
    pub location: String,
    pub job: Option<String>,
    pub email: String,
    pub todoist_api_key: Option<String>,
    pub todoist_email: Option<String>,
    pub avatar: i64,
    pub filtered_location: Option<String>,
}

impl User {
    /// 由认证接口的响应和令牌构建
    pub fn from_start(access_token: impl Into<String>, profile: StartResponse) -> Self {
        Self {
            access_token: access_token.into(),
            id: profile.id,
            name: profile.name,
            value: profile.value,
            academy: profile.academy,
            location: profile.location,
            job: profile.job,
            email: profile.email,
            todoist_api_key: profile.todoist_api_key,
            todoist_email: profile.todoist_email,
            avatar: profile.avatar,
            filtered_location: profile.filtered_location,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{}, {} {})", self.name, self.id, self.academy, self.location)
    }
}
