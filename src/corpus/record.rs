use serde::{Deserialize, Serialize};

/// Extracted text of a single PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "File Name")]
    file_name: String,
    #[serde(rename = "Text")]
    text: String,
}

impl Record {
    pub fn new(file_name: String, text: String) -> Self {
        Self { file_name, text }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn field_names() {
        let r = Record::new("a_cs.AI.pdf".to_string(), "First End".to_string());
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"File Name":"a_cs.AI.pdf","Text":"First End"}"#
        );
    }
}
