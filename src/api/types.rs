//! 接口请求 / 响应数据结构

use serde::{Deserialize, Serialize};

use crate::models::DayInfo;

/// `/dashboard/home/start` 的响应
#[derive(Debug, Clone, Deserialize)]
pub struct StartResponse {
    pub id: i64,
    pub name: String,
    pub value: String,
    pub academy: String,
    pub location: String,
    pub job: Option<String>,
    pub email: String,
    #[serde(rename = "todoistApiKey")]
    pub todoist_api_key: Option<String>,
    #[serde(rename = "todoistEmail")]
    pub todoist_email: Option<String>,
    pub avatar: i64,
    #[serde(rename = "filteredLocation")]
    pub filtered_location: Option<String>,
}

/// `/dashboard/words/starttest` 的请求体
#[derive(Debug, Serialize)]
pub struct StartTestRequest<'a> {
    pub check: Vec<bool>,
    #[serde(rename = "bookKind")]
    pub book_kind: &'a str,
    #[serde(rename = "userName")]
    pub user_name: &'a str,
}

/// `/dashboard/words/starttest` 的响应
#[derive(Debug, Deserialize)]
pub struct StartTestResponse {
    pub data: Vec<WordData>,
}

/// 出题响应中的单词
#[derive(Debug, Deserialize)]
pub struct WordData {
    pub id: i64,
    pub day: i64,
    pub word: String,
    pub meaning: String,
}

/// `/dashboard/words/save` 的请求体
///
/// `data` 是单词数组序列化后的 JSON 字符串
#[derive(Debug, Serialize)]
pub struct SaveRequest {
    pub data: String,
    #[serde(rename = "dayInfo")]
    pub day_info: Vec<DayInfo>,
    pub kind: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_start_response_with_nulls() {
        let body = json!({
            "id": 42,
            "name": "홍길동",
            "value": "student",
            "academy": "sunbae",
            "location": "gangnam",
            "job": null,
            "email": "hong@example.com",
            "todoistApiKey": null,
            "todoistEmail": null,
            "avatar": 3,
            "filteredLocation": "강남"
        });
        let profile: StartResponse = serde_json::from_value(body).unwrap();
        assert_eq!(profile.id, 42);
        assert!(profile.job.is_none());
        assert_eq!(profile.filtered_location.as_deref(), Some("강남"));
    }

    #[test]
    fn test_start_response_missing_field() {
        let body = json!({"id": 1, "name": "x"});
        assert!(serde_json::from_value::<StartResponse>(body).is_err());
    }

    #[test]
    fn test_start_test_request_shape() {
        let req = StartTestRequest {
            check: vec![true, false],
            book_kind: "book1",
            user_name: "kim",
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"check": [true, false], "bookKind": "book1", "userName": "kim"})
        );
    }
}
