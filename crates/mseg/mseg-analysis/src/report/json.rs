//! JSON reporter: structured JSON output.

use serde_json::json;

use mseg_core::errors::{ErrorSet, LintErrorCode};

use super::Reporter;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, errors: &ErrorSet) -> Result<String, String> {
        let items: Vec<serde_json::Value> = errors
            .iter()
            .map(|e| {
                json!({
                    "code": e.error_code(),
                    "kind": e.kind(),
                    "message": e.to_string(),
                })
            })
            .collect();

        let output = json!({
            "count": items.len(),
            "errors": items,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mseg_core::errors::LabelMismatchError;

    use super::*;

    #[test]
    fn test_json_fields() {
        let mut errors = ErrorSet::new();
        errors.push(LabelMismatchError {
            file: PathBuf::from("root/T1/p.yaml"),
            found: "config1".into(),
            expected: "T1:p.yaml".into(),
        });
        let out = JsonReporter.generate(&errors).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["errors"][0]["code"], "LABEL_MISMATCH");
        assert_eq!(value["errors"][0]["kind"], "label");
        assert!(value["errors"][0]["message"]
            .as_str()
            .unwrap()
            .contains("T1:p.yaml"));
    }
}
