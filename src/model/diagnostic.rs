use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, NumberValidation, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::basic::{Location, Range};
use super::error::ValidationError;

/// Diagnostic severity - LSP standard codes, serialized as integers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum DiagnosticSeverity {
    Error = 1,
    Warning = 2,
    Information = 3,
    Hint = 4,
}

impl TryFrom<u8> for DiagnosticSeverity {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, ValidationError> {
        match code {
            1 => Ok(Self::Error),
            2 => Ok(Self::Warning),
            3 => Ok(Self::Information),
            4 => Ok(Self::Hint),
            other => Err(ValidationError::OutOfRange {
                field: "severity",
                constraint: "expected an integer in [1, 4]",
                actual: other as i64,
            }),
        }
    }
}

impl From<DiagnosticSeverity> for u8 {
    fn from(severity: DiagnosticSeverity) -> u8 {
        severity as u8
    }
}

impl JsonSchema for DiagnosticSeverity {
    fn schema_name() -> String {
        "DiagnosticSeverity".to_owned()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::Integer.into()),
            number: Some(Box::new(NumberValidation {
                minimum: Some(1.0),
                maximum: Some(4.0),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}

/// Diagnostic tag - LSP standard codes, serialized as integers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum DiagnosticTag {
    Unnecessary = 1,
    Deprecated = 2,
}

impl TryFrom<u8> for DiagnosticTag {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, ValidationError> {
        match code {
            1 => Ok(Self::Unnecessary),
            2 => Ok(Self::Deprecated),
            other => Err(ValidationError::OutOfRange {
                field: "tags",
                constraint: "expected an integer in [1, 2]",
                actual: other as i64,
            }),
        }
    }
}

impl From<DiagnosticTag> for u8 {
    fn from(tag: DiagnosticTag) -> u8 {
        tag as u8
    }
}

impl JsonSchema for DiagnosticTag {
    fn schema_name() -> String {
        "DiagnosticTag".to_owned()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::Integer.into()),
            number: Some(Box::new(NumberValidation {
                minimum: Some(1.0),
                maximum: Some(2.0),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}

/// Diagnostic code, integer or string
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum DiagnosticCode {
    Number(i64),
    String(String),
}

/// Description of the diagnostic code with a link to more information
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CodeDescription {
    pub href: String,
}

/// Related message and source code location for a diagnostic
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiagnosticRelatedInformation {
    pub location: Location,
    pub message: String,
}

/// A diagnostic such as a compiler error or warning - LSP standard
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Diagnostic {
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<DiagnosticSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<DiagnosticCode>,
    #[serde(rename = "codeDescription", skip_serializing_if = "Option::is_none")]
    pub code_description: Option<CodeDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<DiagnosticTag>>,
    #[serde(
        rename = "relatedInformation",
        skip_serializing_if = "Option::is_none"
    )]
    pub related_information: Option<Vec<DiagnosticRelatedInformation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Diagnostic {
    /// Create a diagnostic with only the required fields set
    pub fn new(range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: None,
            code: None,
            code_description: None,
            source: None,
            message: message.into(),
            tags: None,
            related_information: None,
            data: None,
        }
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
