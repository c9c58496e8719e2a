//! 答案推导 - 业务能力层
//!
//! 只负责"由释义得到答案"，不涉及网络

use regex::Regex;
use std::sync::LazyLock;

/// 释义中各义项的分隔符
const SENSE_SEPARATOR: &str = ", ";

/// 圆括号 / 方括号注释（不嵌套，最短匹配）
static ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)|\[[^\]]*\]").expect("注释正则无效"));

/// 由单词释义推导提交的答案
///
/// 取第一个义项，删除其中所有 `(...)` 和 `[...]`，其余文本和空白保持原样。
/// 不成对的括号不会被删除。
pub fn derive_answer(meaning: &str) -> String {
    let first_sense = meaning.split(SENSE_SEPARATOR).next().unwrap_or(meaning);
    ANNOTATION_RE.replace_all(first_sense, "").into_owned()
}
