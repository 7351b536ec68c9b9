use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ValidationError;

/// Reserved JSON-RPC error codes
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
}

/// The fixed `jsonrpc` discriminant shared by every message.
///
/// Serializes to the literal "2.0"; any other value fails to parse. Missing
/// on input defaults to "2.0".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct JsonRpcVersion;

impl TryFrom<String> for JsonRpcVersion {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, ValidationError> {
        if value == "2.0" {
            Ok(Self)
        } else {
            Err(ValidationError::TypeMismatch {
                field: "jsonrpc",
                expected: "the literal \"2.0\"",
                actual: value,
            })
        }
    }
}

impl From<JsonRpcVersion> for String {
    fn from(_: JsonRpcVersion) -> String {
        "2.0".to_string()
    }
}

impl JsonSchema for JsonRpcVersion {
    fn schema_name() -> String {
        "JsonRpcVersion".to_owned()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            const_value: Some(Value::String("2.0".to_string())),
            ..Default::default()
        }
        .into()
    }
}

/// Message id, integer or string
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageId {
    Number(i64),
    String(String),
}

impl From<i64> for MessageId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        Self::String(id.to_string())
    }
}

/// Request/notification parameters, positional list or named map
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum Params {
    List(Vec<Value>),
    Map(Map<String, Value>),
}

impl TryFrom<Value> for Params {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Array(items) => Ok(Self::List(items)),
            Value::Object(map) => Ok(Self::Map(map)),
            other => Err(ValidationError::TypeMismatch {
                field: "params",
                expected: "an array or an object",
                actual: other.to_string(),
            }),
        }
    }
}

/// JSON-RPC request message
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RequestMessage {
    #[serde(default)]
    pub jsonrpc: JsonRpcVersion,
    pub id: MessageId,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl RequestMessage {
    pub fn new(id: impl Into<MessageId>, method: impl Into<String>, params: Option<Params>) -> Self {
        Self {
            jsonrpc: JsonRpcVersion,
            id: id.into(),
            method: method.into(),
            params,
        }
    }
}

/// Error object returned in response messages
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ResponseError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ResponseError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// JSON-RPC response message.
///
/// Exactly one of `result`/`error` should be set; the protocol leaves this a
/// convention and so does the struct. Use `success`/`failure` to build one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ResponseMessage {
    #[serde(default)]
    pub jsonrpc: JsonRpcVersion,
    pub id: MessageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

impl ResponseMessage {
    pub fn success(id: impl Into<MessageId>, result: Value) -> Self {
        Self {
            jsonrpc: JsonRpcVersion,
            id: id.into(),
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: impl Into<MessageId>, error: ResponseError) -> Self {
        Self {
            jsonrpc: JsonRpcVersion,
            id: id.into(),
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC notification message; carries no id
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NotificationMessage {
    #[serde(default)]
    pub jsonrpc: JsonRpcVersion,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl NotificationMessage {
    pub fn new(method: impl Into<String>, params: Option<Params>) -> Self {
        Self {
            jsonrpc: JsonRpcVersion,
            method: method.into(),
            params,
        }
    }
}
