//! API 模块
//!
//! 与服务端交互时使用的数据结构

pub mod types;

pub use types::{SaveRequest, StartResponse, StartTestRequest, StartTestResponse, WordData};
