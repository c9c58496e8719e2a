//! Day 描述
//!
//! 用户输入的 Day 编号 + 是否为总测试，映射到服务端的考试索引

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InputError;

/// 一个测试单元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Day {
    number: u32,
    is_total: bool,
}

impl Day {
    /// 创建新的 Day，编号必须 >= 1
    pub fn new(number: u32, is_total: bool) -> Result<Self, InputError> {
        if number == 0 {
            return Err(InputError::ZeroDay {
                token: format!("{}{}", number, if is_total { 'a' } else { 'w' }),
            });
        }
        Ok(Self { number, is_total })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn is_total(&self) -> bool {
        self.is_total
    }

    /// 服务端考试索引：总测试为偶数 `2n-2`，周测试为奇数 `2n-1`
    pub fn exam_id(&self) -> usize {
        let doubled = self.number as usize * 2;
        if self.is_total {
            doubled - 2
        } else {
            doubled - 1
        }
    }

    /// 保存接口使用的 dayInfo 项
    pub fn info(&self) -> DayInfo {
        DayInfo {
            day_number: self.number,
            is_total: self.is_total,
        }
    }
}

impl FromStr for Day {
    type Err = InputError;

    /// 解析 `<数字><a|w>` 形式的标记，例如 `3a`、`12w`
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let suffix = chars.next_back().ok_or(InputError::EmptyToken)?;
        let digits = chars.as_str();

        let is_total = match suffix {
            'a' => true,
            'w' => false,
            other => {
                return Err(InputError::UnknownSuffix {
                    token: token.to_string(),
                    suffix: other.to_string(),
                })
            }
        };

        let number: u32 = digits.parse().map_err(|_| InputError::InvalidNumber {
            token: token.to_string(),
        })?;

        if number == 0 {
            return Err(InputError::ZeroDay {
                token: token.to_string(),
            });
        }

        Ok(Self { number, is_total })
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, if self.is_total { 'a' } else { 'w' })
    }
}

/// 按空白分隔解析一组 Day 标记，遇到第一个错误即中止
pub fn parse_days(input: &str) -> Result<Vec<Day>, InputError> {
    let days = input
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Day>, _>>()?;

    if days.is_empty() {
        return Err(InputError::NoDays);
    }

    Ok(days)
}

/// 提交时回传的 Day 信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayInfo {
    #[serde(rename = "dayNumber")]
    pub day_number: u32,
    #[serde(rename = "isTotal")]
    pub is_total: bool,
}
