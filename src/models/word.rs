use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 单词作答结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordResult {
    #[default]
    Correct,
    Incorrect,
}

impl WordResult {
    pub fn as_str(self) -> &'static str {
        match self {
            WordResult::Correct => "correct",
            WordResult::Incorrect => "incorrect",
        }
    }
}

impl FromStr for WordResult {
    type Err = String;

    /// 精确匹配，不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "correct" => Ok(WordResult::Correct),
            "incorrect" => Ok(WordResult::Incorrect),
            other => Err(format!("未知的作答结果: {}", other)),
        }
    }
}

impl std::fmt::Display for WordResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 一道测试题（一个单词）
///
/// 出题接口只填充身份和题面，`answer` 由调用方在提交前写入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: i64,
    pub day: i64,
    pub word: String,
    pub meaning: String,
    pub answer: String,
    /// 作答耗时占位，默认 0
    pub how_long: u64,
    pub result: WordResult,
}

impl Word {
    /// 创建新的单词，作答结果必须显式给出
    pub fn new(
        id: i64,
        day: i64,
        word: impl Into<String>,
        meaning: impl Into<String>,
        result: WordResult,
    ) -> Self {
        Self {
            id,
            day,
            word: word.into(),
            meaning: meaning.into(),
            answer: String::new(),
            how_long: 0,
            result,
        }
    }

    pub fn with_how_long(mut self, how_long: u64) -> Self {
        self.how_long = how_long;
        self
    }

    /// 转换为保存接口的数据项
    pub fn to_record(&self) -> WordRecord<'_> {
        WordRecord {
            id: self.id,
            day: self.day,
            word: &self.word,
            meaning: &self.meaning,
            answer: &self.answer,
            howlong: self.how_long,
            result: self.result,
        }
    }
}

/// 保存接口中单个单词的序列化形式
#[derive(Debug, Serialize)]
pub struct WordRecord<'a> {
    pub id: i64,
    pub day: i64,
    pub word: &'a str,
    pub meaning: &'a str,
    pub answer: &'a str,
    pub howlong: u64,
    pub result: WordResult,
}
