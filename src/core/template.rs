use crate::domain::model::Record;
use regex::Regex;
use serde_json::Value;

/// 固定的元素樣板：一個標籤加上內容模式，
/// 內容中的 ${field} 佔位符由記錄欄位代入
#[derive(Debug, Clone)]
pub struct Template {
    tag: &'static str,
    body: &'static str,
    placeholder: Regex,
}

/// 清單項目樣板：每個記錄轉成 <li>${name}</li>
pub fn list_item() -> Template {
    Template::new("li", "${name}")
}

impl Template {
    pub fn new(tag: &'static str, body: &'static str) -> Self {
        // 使用正規表達式匹配 ${field} 格式
        let placeholder = Regex::new(r"\$\{([^}]+)\}").unwrap();
        Self {
            tag,
            body,
            placeholder,
        }
    }

    pub fn render(&self, record: &Record) -> String {
        let body = self.substitute_fields(record);
        format!("<{}>{}</{}>", self.tag, body, self.tag)
    }

    fn substitute_fields(&self, record: &Record) -> String {
        self.placeholder
            .replace_all(self.body, |caps: &regex::Captures| {
                let field = &caps[1];
                record
                    .data
                    .get(field)
                    .map(render_value)
                    .unwrap_or_default()
            })
            .to_string()
    }
}

/// 欄位值的文字呈現：字串不帶引號，也不做 HTML 轉義
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // 巢狀結構以緊湊 JSON 呈現
        other => other.to_string(),
    }
}
