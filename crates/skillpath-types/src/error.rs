use thiserror::Error;

/// Data-integrity failures detected while loading a knowledge base.
///
/// These are the only hard failures in the engine: a malformed static
/// knowledge document is a configuration defect caught at load time, never
/// at resolution time.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("skill table key '{key}' declares mismatched id '{id}'")]
    IdMismatch { key: String, id: String },

    #[error("skill '{skill}' has difficulty {value}, expected 1-5")]
    DifficultyOutOfRange { skill: String, value: u8 },

    #[error("skill '{skill}' has market value {value}, expected 0-100")]
    MarketValueOutOfRange { skill: String, value: u8 },

    #[error("skill '{of}' lists unknown prerequisite '{skill}'")]
    DanglingPrerequisite { skill: String, of: String },

    #[error("prerequisite cycle detected involving skill '{0}'")]
    PrerequisiteCycle(String),

    #[error("default role template '{0}' is missing")]
    MissingDefaultRole(String),

    #[error("fallback domain '{0}' has no default skill set")]
    MissingFallbackDomain(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_prerequisite_display() {
        let err = KnowledgeError::DanglingPrerequisite {
            skill: "quantum-css".to_string(),
            of: "react".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "skill 'react' lists unknown prerequisite 'quantum-css'"
        );
    }

    #[test]
    fn test_cycle_display() {
        let err = KnowledgeError::PrerequisiteCycle("html".to_string());
        assert!(err.to_string().contains("html"));
    }

    #[test]
    fn test_difficulty_display() {
        let err = KnowledgeError::DifficultyOutOfRange {
            skill: "css".to_string(),
            value: 9,
        };
        assert_eq!(err.to_string(), "skill 'css' has difficulty 9, expected 1-5");
    }
}
