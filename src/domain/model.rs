use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 一筆記錄：輸入文件的一個頂層元素
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub html: String,
    pub fragments: Vec<String>,
    pub record_count: usize,
}
