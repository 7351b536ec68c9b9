use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::basic::{OptionalVersionedTextDocumentIdentifier, Range};

/// Textual edit applicable to a text document - LSP standard
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    #[serde(rename = "newText")]
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

/// Text edit carrying a change annotation identifier
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnnotatedTextEdit {
    pub range: Range,
    #[serde(rename = "newText")]
    pub new_text: String,
    #[serde(rename = "annotationId")]
    pub annotation_id: String,
}

/// Edit entry of a `TextDocumentEdit`.
///
/// Presence of `annotationId` selects the annotated variant, so the annotated
/// arm must stay listed first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum Edit {
    Annotated(AnnotatedTextEdit),
    Plain(TextEdit),
}

/// Textual changes on a single text document
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TextDocumentEdit {
    #[serde(rename = "textDocument")]
    pub text_document: OptionalVersionedTextDocumentIdentifier,
    pub edits: Vec<Edit>,
}

/// Options for a create file operation
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateFileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    #[serde(rename = "ignoreIfExists", skip_serializing_if = "Option::is_none")]
    pub ignore_if_exists: Option<bool>,
}

/// Create file operation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateFile {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<CreateFileOptions>,
    #[serde(rename = "annotationId", skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<String>,
}

/// Options for a rename file operation
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RenameFileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    #[serde(rename = "ignoreIfExists", skip_serializing_if = "Option::is_none")]
    pub ignore_if_exists: Option<bool>,
}

/// Rename file operation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RenameFile {
    #[serde(rename = "oldUri")]
    pub old_uri: String,
    #[serde(rename = "newUri")]
    pub new_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RenameFileOptions>,
    #[serde(rename = "annotationId", skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<String>,
}

/// Options for a delete file operation
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteFileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    #[serde(
        rename = "ignoreIfNotExists",
        skip_serializing_if = "Option::is_none"
    )]
    pub ignore_if_not_exists: Option<bool>,
}

/// Delete file operation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteFile {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<DeleteFileOptions>,
    #[serde(rename = "annotationId", skip_serializing_if = "Option::is_none")]
    pub annotation_id: Option<String>,
}

/// File operation discriminated by its `kind` literal
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResourceOperation {
    Create(CreateFile),
    Rename(RenameFile),
    Delete(DeleteFile),
}

/// Entry of `WorkspaceEdit.documentChanges`.
///
/// A `kind` field selects a file operation; entries without one are text
/// document edits, so the operation arm must stay listed first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum DocumentChange {
    Operation(ResourceOperation),
    Edit(TextDocumentEdit),
}

/// Additional information that describes document changes
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChangeAnnotation {
    pub label: String,
    #[serde(
        rename = "needsConfirmation",
        skip_serializing_if = "Option::is_none"
    )]
    pub needs_confirmation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Changes to many resources managed in the workspace - LSP standard
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkspaceEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<IndexMap<String, Vec<TextEdit>>>,
    #[serde(rename = "documentChanges", skip_serializing_if = "Option::is_none")]
    pub document_changes: Option<Vec<DocumentChange>>,
    #[serde(
        rename = "changeAnnotations",
        skip_serializing_if = "Option::is_none"
    )]
    pub change_annotations: Option<IndexMap<String, ChangeAnnotation>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::basic::Position;
    use serde_json::json;

    fn sample_range() -> Range {
        Range::new(Position::new(0, 0), Position::new(0, 4))
    }

    #[test]
    fn edit_union_resolves_on_annotation_id() {
        let plain: Edit = serde_json::from_value(json!({
            "range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 4}},
            "newText": "foo"
        }))
        .unwrap();
        assert!(matches!(plain, Edit::Plain(_)));

        let annotated: Edit = serde_json::from_value(json!({
            "range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 4}},
            "newText": "foo",
            "annotationId": "a1"
        }))
        .unwrap();
        assert!(matches!(annotated, Edit::Annotated(_)));
    }

    #[test]
    fn document_change_resolves_on_kind() {
        let create: DocumentChange = serde_json::from_value(json!({
            "kind": "create",
            "uri": "file:///new.rb"
        }))
        .unwrap();
        assert!(matches!(
            create,
            DocumentChange::Operation(ResourceOperation::Create(_))
        ));

        let edit: DocumentChange = serde_json::from_value(json!({
            "textDocument": {"uri": "file:///old.rb", "version": 3},
            "edits": []
        }))
        .unwrap();
        assert!(matches!(edit, DocumentChange::Edit(_)));
    }

    #[test]
    fn resource_operation_serializes_its_kind_tag() {
        let rename = ResourceOperation::Rename(RenameFile {
            old_uri: "file:///a.rb".to_string(),
            new_uri: "file:///b.rb".to_string(),
            options: None,
            annotation_id: None,
        });

        let value = serde_json::to_value(&rename).unwrap();
        assert_eq!(value["kind"], "rename");
        assert_eq!(value["oldUri"], "file:///a.rb");
        assert_eq!(value["newUri"], "file:///b.rb");
    }

    #[test]
    fn workspace_edit_omits_unset_sections() {
        let mut changes = IndexMap::new();
        changes.insert(
            "file:///a.rb".to_string(),
            vec![TextEdit::new(sample_range(), "bar")],
        );

        let edit = WorkspaceEdit {
            changes: Some(changes),
            ..Default::default()
        };

        let value = serde_json::to_value(&edit).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("changes"));
    }
}
