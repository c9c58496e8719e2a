use crate::error::CatalogError;
use phf::phf_map;

/// 单词书枚举
///
/// 只列出已支持的单词书，其余已知名称会走 `UnsupportedBook` 错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Book {
    /// Word Master 2018
    #[default]
    WordmasterV2018,
}

/// 单词书名称 → 单词书；`None` 表示已知但尚未支持
static BOOK_NAMES: phf::Map<&'static str, Option<Book>> = phf_map! {
    "wordmaster_v2018" => Some(Book::WordmasterV2018),
    "wordmaster_v2022" => None,
    "wordmaster_hyper_v2021" => None,
    "wordmaster_final_v2020" => None,
};

impl Book {
    /// 单词列表长度（出题 check 列表的长度）
    pub fn list_length(self) -> usize {
        match self {
            Book::WordmasterV2018 => 116,
        }
    }

    /// 出题接口使用的字符串代码
    pub fn kind_code(self) -> &'static str {
        match self {
            Book::WordmasterV2018 => "book1",
        }
    }

    /// 保存接口使用的数字代码
    pub fn kind_number(self) -> u32 {
        match self {
            Book::WordmasterV2018 => 1,
        }
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Book::WordmasterV2018 => "wordmaster_v2018",
        }
    }

    /// 按名称查找单词书（不区分大小写，`-` 视为 `_`）
    pub fn find(name: &str) -> Result<Self, CatalogError> {
        let key = name.trim().to_lowercase().replace('-', "_");
        match BOOK_NAMES.get(key.as_str()) {
            Some(Some(book)) => Ok(*book),
            Some(None) => Err(CatalogError::UnsupportedBook(name.to_string())),
            None => Err(CatalogError::UnknownBook(name.to_string())),
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
