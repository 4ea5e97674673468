//! Output formatting

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.render(data));
    }

    pub fn render<T: Serialize>(&self, data: &T) -> String {
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(data).unwrap_or_default(),
            OutputFormat::Yaml => serde_yaml::to_string(data).unwrap_or_default(),
            OutputFormat::Table => match serde_json::to_value(data) {
                Ok(serde_json::Value::Object(map)) => {
                    let width = map.keys().map(String::len).max().unwrap_or(0);
                    map.iter()
                        .map(|(key, value)| format!("{:width$}  {}", key, plain(value), width = width))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
                Ok(other) => plain(&other),
                Err(_) => String::new(),
            },
        }
    }
}

fn plain(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_core::FeedbackCreated;

    fn receipt() -> FeedbackCreated {
        FeedbackCreated {
            message: "Feedback saved".into(),
            id: "6f1c".into(),
        }
    }

    #[test]
    fn test_table_aligns_keys() {
        let table = OutputFormat::Table.render(&receipt());
        let mut lines: Vec<&str> = table.lines().collect();
        lines.sort();
        assert_eq!(lines, vec!["id       6f1c", "message  Feedback saved"]);
    }

    #[test]
    fn test_json_and_yaml() {
        let json: serde_json::Value =
            serde_json::from_str(&OutputFormat::Json.render(&receipt())).unwrap();
        assert_eq!(json["id"], "6f1c");

        assert!(OutputFormat::Yaml.render(&receipt()).contains("id: 6f1c"));
    }
}
