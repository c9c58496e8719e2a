//! 单词测试 API 客户端
//!
//! 封装认证、出题、保存三个接口，均以 cookie `access_token` 认证

use std::time::Duration;

use reqwest::header::COOKIE;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::api::types::{SaveRequest, StartResponse, StartTestRequest, StartTestResponse};
use crate::config::Config;
use crate::error::{ApiError, AppError, Result};
use crate::models::{Book, Day, User, Word, WordRecord, WordResult};
use crate::services::build_check_list;

const START_ENDPOINT: &str = "dashboard/home/start";
const START_TEST_ENDPOINT: &str = "dashboard/words/starttest";
const SAVE_ENDPOINT: &str = "dashboard/words/save";

/// 单词测试 API 客户端
pub struct SunbaeClient {
    base_url: String,
    client: reqwest::Client,
}

impl SunbaeClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(&config.base_url, config.request_timeout_secs)
    }

    /// 使用自定义服务端地址创建
    pub fn with_base_url(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Api(ApiError::ClientBuild(e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// 认证并获取用户信息
    ///
    /// 必须先调用，其余接口都需要返回的 `User`。
    /// 不检查状态码，只要响应体能解析为用户信息即视为成功。
    pub async fn start(&self, access_token: &str) -> Result<User> {
        let request = self.client.get(self.url(START_ENDPOINT));
        let response = send(request, access_token, START_ENDPOINT).await?;
        let status = response.status();

        let profile: StartResponse = decode(response, START_ENDPOINT).await?;
        debug!("认证响应状态: {}, 用户ID: {}", status, profile.id);

        Ok(User::from_start(access_token, profile))
    }

    /// 请求所选 Day 的测试单词
    ///
    /// # 参数
    /// - `user`: 认证得到的用户
    /// - `book`: 单词书
    /// - `days`: 所选 Day（保存时需传入同一组）
    /// - `result`: 写入每个单词的作答结果
    pub async fn start_word_test(
        &self,
        user: &User,
        book: Book,
        days: &[Day],
        result: WordResult,
    ) -> Result<Vec<Word>> {
        let body = StartTestRequest {
            check: build_check_list(book.list_length(), days),
            book_kind: book.kind_code(),
            user_name: &user.name,
        };

        debug!(
            "出题请求: 单词书 {} | 选中 {} 项",
            body.book_kind,
            body.check.iter().filter(|c| **c).count()
        );

        let request = self.client.post(self.url(START_TEST_ENDPOINT)).json(&body);
        let response = send(request, user.access_token(), START_TEST_ENDPOINT).await?;
        let response = ensure_success(response, START_TEST_ENDPOINT).await?;

        let test: StartTestResponse = decode(response, START_TEST_ENDPOINT).await?;
        let words = test
            .data
            .into_iter()
            .map(|w| Word::new(w.id, w.day, w.word, w.meaning, result))
            .collect::<Vec<_>>();

        info!("✓ 获取到 {} 个单词", words.len());
        Ok(words)
    }

    /// 保存测试结果
    pub async fn save_word_test(
        &self,
        user: &User,
        book: Book,
        days: &[Day],
        words: &[Word],
    ) -> Result<()> {
        let records: Vec<WordRecord<'_>> = words.iter().map(Word::to_record).collect();
        let body = SaveRequest {
            data: serde_json::to_string(&records).map_err(ApiError::Encode)?,
            day_info: days.iter().map(Day::info).collect(),
            kind: book.kind_number(),
        };

        debug!("保存 Payload: {}", body.data);

        let request = self.client.post(self.url(SAVE_ENDPOINT)).json(&body);
        let response = send(request, user.access_token(), SAVE_ENDPOINT).await?;
        ensure_success(response, SAVE_ENDPOINT).await?;

        info!("✓ 测试结果保存成功 ({} 个单词)", words.len());
        Ok(())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

// ========== 辅助函数 ==========

/// 附加 cookie 并发送请求
async fn send(request: RequestBuilder, access_token: &str, endpoint: &str) -> Result<Response> {
    request
        .header(COOKIE, format!("access_token={}", access_token))
        .send()
        .await
        .map_err(|e| AppError::api_request_failed(endpoint, e))
}

/// 非 2xx / 3xx 状态码视为失败
async fn ensure_success(response: Response, endpoint: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() || status.is_redirection() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AppError::Api(ApiError::BadStatus {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        body,
    }))
}

/// 读取响应体并解析 JSON
async fn decode<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::api_request_failed(endpoint, e))?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::malformed_response(endpoint, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn profile_json() -> Value {
        json!({
            "id": 42,
            "name": "kim",
            "value": "student",
            "academy": "sunbae",
            "location": "daechi",
            "job": null,
            "email": "kim@example.com",
            "todoistApiKey": null,
            "todoistEmail": null,
            "avatar": 1,
            "filteredLocation": null
        })
    }

    async fn authenticated(server: &MockServer) -> (SunbaeClient, User) {
        Mock::given(method("GET"))
            .and(path("/dashboard/home/start"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
            .mount(server)
            .await;

        let client = SunbaeClient::with_base_url(server.uri(), 5).unwrap();
        let user = client.start("tok").await.unwrap();
        (client, user)
    }

    #[tokio::test]
    async fn test_start_sends_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dashboard/home/start"))
            .and(header("cookie", "access_token=secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = SunbaeClient::with_base_url(server.uri(), 5).unwrap();
        let user = client.start("secret").await.unwrap();

        assert_eq!(user.access_token(), "secret");
        assert_eq!(user.id, 42);
        assert_eq!(user.name, "kim");
    }

    #[tokio::test]
    async fn test_start_ignores_status_when_body_is_valid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dashboard/home/start"))
            .respond_with(ResponseTemplate::new(401).set_body_json(profile_json()))
            .mount(&server)
            .await;

        let client = SunbaeClient::with_base_url(server.uri(), 5).unwrap();
        assert!(client.start("tok").await.is_ok());
    }

    #[tokio::test]
    async fn test_start_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dashboard/home/start"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .mount(&server)
            .await;

        let client = SunbaeClient::with_base_url(server.uri(), 5).unwrap();
        let err = client.start("tok").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Api(ApiError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_start_word_test_maps_words() {
        let server = MockServer::start().await;
        let (client, user) = authenticated(&server).await;

        Mock::given(method("POST"))
            .and(path("/dashboard/words/starttest"))
            .and(header("cookie", "access_token=tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": 1, "day": 1, "word": "happy", "meaning": "happy (adj.), glad"},
                    {"id": 2, "day": 1, "word": "go", "meaning": "go [archaic], proceed"}
                ]
            })))
            .mount(&server)
            .await;

        let days = vec![Day::new(1, true).unwrap()];
        let words = client
            .start_word_test(&user, Book::WordmasterV2018, &days, WordResult::Correct)
            .await
            .unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].word, "go");
        assert!(words.iter().all(|w| w.answer.is_empty() && w.how_long == 0));
    }

    #[tokio::test]
    async fn test_start_word_test_error_status() {
        let server = MockServer::start().await;
        let (client, user) = authenticated(&server).await;

        Mock::given(method("POST"))
            .and(path("/dashboard/words/starttest"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let days = vec![Day::new(2, false).unwrap()];
        let err = client
            .start_word_test(&user, Book::WordmasterV2018, &days, WordResult::Correct)
            .await
            .unwrap_err();

        match err {
            AppError::Api(ApiError::BadStatus { status, body, .. }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_start_word_test_missing_data() {
        let server = MockServer::start().await;
        let (client, user) = authenticated(&server).await;

        Mock::given(method("POST"))
            .and(path("/dashboard/words/starttest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"words": []})))
            .mount(&server)
            .await;

        let days = vec![Day::new(1, true).unwrap()];
        let err = client
            .start_word_test(&user, Book::WordmasterV2018, &days, WordResult::Correct)
            .await
            .unwrap_err();

        match err {
            AppError::Api(ApiError::MalformedResponse { endpoint, .. }) => {
                assert_eq!(endpoint, START_TEST_ENDPOINT);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_save_word_test_error_status() {
        let server = MockServer::start().await;
        let (client, user) = authenticated(&server).await;

        Mock::given(method("POST"))
            .and(path("/dashboard/words/save"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let days = vec![Day::new(1, true).unwrap()];
        let words = vec![Word::new(1, 1, "a", "b", WordResult::Correct)];
        let err = client
            .save_word_test(&user, Book::WordmasterV2018, &days, &words)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Api(ApiError::BadStatus { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let client = SunbaeClient::with_base_url("http://127.0.0.1:1", 2).unwrap();
        let err = client.start("tok").await.unwrap_err();
        assert!(matches!(err, AppError::Api(ApiError::RequestFailed { .. })));
    }
}
