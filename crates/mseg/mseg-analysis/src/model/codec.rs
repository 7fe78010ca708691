//! YAML encode/decode of policy documents.

use std::path::Path;

use mseg_core::errors::{DocumentError, FsError, LintError};

use super::PolicyDocument;

pub fn decode(path: &Path, text: &str) -> Result<PolicyDocument, DocumentError> {
    serde_yaml::from_str(text).map_err(|e| DocumentError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn encode(path: &Path, document: &PolicyDocument) -> Result<String, DocumentError> {
    serde_yaml::to_string(document).map_err(|e| DocumentError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read and decode the document at `path`.
pub fn read(path: &Path) -> Result<PolicyDocument, LintError> {
    let text = std::fs::read_to_string(path).map_err(|source| FsError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(path, &text)?)
}

/// Encode and write `document` to `path`, replacing any existing file.
pub fn write(path: &Path, document: &PolicyDocument) -> Result<(), LintError> {
    let text = encode(path, document)?;
    std::fs::write(path, text).map_err(|source| FsError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::model::TrafficAction;

    const SAMPLE: &str = r#"
label: T1:C1:G1:K1:policy.yaml
APIVersion: 0
data:
  apiauthorizationpolicies: []
  networkrulesetpolicies:
    - name: ruleset1
      propagate: false
      protected: false
      subject:
        - - app=database
          - "@org:tenant=bogus"
      outgoingRules:
        - action: Allow
          logsDisabled: false
          observationEnabled: false
          object:
            - - "@org:tenant=T1"
              - "@org:cloudaccount=ghost"
          protocolPorts:
            - tcp/5432
      incomingRules: null
"#;

    #[test]
    fn test_decode_sample() {
        let doc = decode(&PathBuf::from("policy.yaml"), SAMPLE).unwrap();
        assert_eq!(doc.label, "T1:C1:G1:K1:policy.yaml");
        let rulesets = doc.rulesets();
        assert_eq!(rulesets.len(), 1);
        assert!(rulesets[0].incoming_rules.is_empty());
        let rule = &rulesets[0].outgoing_rules[0];
        assert_eq!(rule.action, Some(TrafficAction::Allow));
        assert_eq!(rule.protocol_ports, vec!["tcp/5432"]);
        assert_eq!(
            rule.object[0].tags(),
            &["@org:tenant=T1".to_string(), "@org:cloudaccount=ghost".to_string()]
        );
    }

    #[test]
    fn test_encode_then_decode_preserves_document() {
        let path = PathBuf::from("policy.yaml");
        let doc = decode(&path, SAMPLE).unwrap();
        let text = encode(&path, &doc).unwrap();
        assert!(text.contains("apiVersion: 0"));
        assert!(text.contains("outgoingRules:"));
        assert_eq!(decode(&path, &text).unwrap(), doc);
    }

    #[test]
    fn test_decode_error_names_file() {
        let err = decode(&PathBuf::from("broken.yaml"), "data: [unclosed").unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }
}
