use crate::core::template::{self, Template};
use crate::core::{ConfigProvider, Io, Pipeline, Record, RenderResult};
use crate::utils::error::Result;
use std::collections::HashMap;

pub struct ListPipeline<S: Io, C: ConfigProvider> {
    io: S,
    config: C,
    template: Template,
}

impl<S: Io, C: ConfigProvider> ListPipeline<S, C> {
    pub fn new(io: S, config: C) -> Self {
        Self {
            io,
            config,
            template: template::list_item(),
        }
    }
}

/// 頂層元素轉成記錄：物件取其欄位，其他值視為沒有欄位的記錄
fn into_record(item: serde_json::Value) -> Record {
    let mut data = HashMap::new();
    if let serde_json::Value::Object(obj) = item {
        for (key, value) in obj {
            data.insert(key, value);
        }
    }
    Record { data }
}

impl<S: Io, C: ConfigProvider> Pipeline for ListPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading input from: {}", self.config.input_path());
        let bytes = self.io.read_input(self.config.input_path())?;

        // 輸入必須是 UTF-8 的單一 JSON 文件，解析失敗即中止
        let text = std::str::from_utf8(&bytes)?;
        let json_data: serde_json::Value = serde_json::from_str(text)?;

        let mut records = Vec::new();
        match json_data {
            serde_json::Value::Array(items) => {
                for item in items {
                    records.push(into_record(item));
                }
            }
            serde_json::Value::Object(_) => {
                // 單一物件包裝成一筆記錄
                records.push(into_record(json_data));
            }
            _ => {
                tracing::warn!("Top-level value is not an array or object, nothing to render");
            }
        }

        Ok(records)
    }

    fn transform(&self, data: Vec<Record>) -> Result<RenderResult> {
        let mut fragments = Vec::with_capacity(data.len());

        for record in &data {
            fragments.push(self.template.render(record));
        }

        Ok(RenderResult {
            html: fragments.concat(),
            record_count: fragments.len(),
            fragments,
        })
    }

    fn load(&self, result: RenderResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        tracing::debug!(
            "Writing fragment ({} bytes) to: {}",
            result.html.len(),
            output_path
        );

        // 一次寫出完整片段
        self.io
            .write_output(&output_path, result.html.as_bytes())?;

        if output_path == "-" {
            Ok("stdout".to_string())
        } else {
            Ok(output_path)
        }
    }
}
