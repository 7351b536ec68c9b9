use rstest::rstest;
use serde_json::json;

use lsp_structures::model::{
    AnnotatedTextEdit, ChangeAnnotation, CreateFile, Diagnostic, DiagnosticCode,
    DiagnosticRelatedInformation, DiagnosticSeverity, DocumentChange, Edit, Location,
    NotificationMessage, OptionalVersionedTextDocumentIdentifier, Params, Position, Range,
    RequestMessage, ResourceOperation, ResponseMessage, TextDocumentEdit, TextEdit,
    ValidationError, WorkspaceEdit,
};

fn sample_range() -> Range {
    Range::new(Position::new(10, 5), Position::new(10, 15))
}

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::new(sample_range(), "Undefined method 'foo' for nil:NilClass")
        .with_severity(DiagnosticSeverity::Error)
        .with_code(DiagnosticCode::String("E001".to_string()))
        .with_source("ruby-lsp")
}

#[test]
fn position_serializes_to_the_wire_shape() {
    let position = Position::new(10, 5);
    assert_eq!(
        serde_json::to_string(&position).unwrap(),
        r#"{"line":10,"character":5}"#
    );
}

#[rstest]
#[case(0, 0)]
#[case(10, 5)]
#[case(u32::MAX, 1)]
fn position_round_trips(#[case] line: u32, #[case] character: u32) {
    let position = Position::new(line, character);
    let text = serde_json::to_string(&position).unwrap();
    let back: Position = serde_json::from_str(&text).unwrap();
    assert_eq!(back, position);
}

#[test]
fn range_round_trips() {
    let range = sample_range();
    let text = serde_json::to_string(&range).unwrap();
    let back: Range = serde_json::from_str(&text).unwrap();
    assert_eq!(back, range);
}

#[test]
fn diagnostic_serializes_set_fields_and_omits_unset_ones() {
    let value = serde_json::to_value(sample_diagnostic()).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object["severity"], json!(1));
    assert_eq!(object["code"], json!("E001"));
    assert_eq!(object["source"], json!("ruby-lsp"));
    assert_eq!(
        object["message"],
        json!("Undefined method 'foo' for nil:NilClass")
    );

    for absent in ["tags", "relatedInformation", "data", "codeDescription"] {
        assert!(!object.contains_key(absent), "{absent} should be omitted");
    }
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(200)]
fn severity_outside_protocol_range_is_rejected(#[case] code: u8) {
    let err = DiagnosticSeverity::try_from(code).unwrap_err();
    assert!(matches!(err, ValidationError::OutOfRange { field: "severity", .. }));
}

#[test]
fn diagnostic_with_invalid_severity_fails_to_parse() {
    let raw = json!({
        "range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 1}},
        "severity": 5,
        "message": "boom"
    });
    assert!(serde_json::from_value::<Diagnostic>(raw).is_err());
}

#[test]
fn diagnostic_with_related_information_round_trips() {
    let mut diagnostic = sample_diagnostic();
    diagnostic.related_information = Some(vec![DiagnosticRelatedInformation {
        location: Location::new("file:///path/to/mal_minimal.rb", sample_range()),
        message: "first assignment of nil".to_string(),
    }]);

    let text = serde_json::to_string(&diagnostic).unwrap();
    let back: Diagnostic = serde_json::from_str(&text).unwrap();
    assert_eq!(back, diagnostic);
}

#[test]
fn request_message_injects_the_jsonrpc_discriminant() {
    let request = RequestMessage::new(
        1,
        "textDocument/completion",
        Some(
            Params::try_from(json!({
                "textDocument": {"uri": "file:///path/to/mal_minimal.rb"},
                "position": {"line": 10, "character": 5}
            }))
            .unwrap(),
        ),
    );

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["jsonrpc"], json!("2.0"));
    assert_eq!(value["id"], json!(1));
    assert_eq!(value["method"], json!("textDocument/completion"));

    let back: RequestMessage = serde_json::from_value(value).unwrap();
    assert_eq!(back, request);
}

#[test]
fn notification_message_has_no_id_field() {
    let notification = NotificationMessage::new("textDocument/publishDiagnostics", None);

    let value = serde_json::to_value(&notification).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("id"));
    assert_eq!(object["jsonrpc"], json!("2.0"));
}

#[test]
fn response_message_round_trips_with_string_id() {
    let response = ResponseMessage::success("req-7", json!({"items": []}));

    let text = serde_json::to_string(&response).unwrap();
    let back: ResponseMessage = serde_json::from_str(&text).unwrap();
    assert_eq!(back, response);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["id"], json!("req-7"));
    assert!(!value.as_object().unwrap().contains_key("error"));
}

#[test]
fn document_changes_resolve_their_variants() {
    let raw = json!([
        {"kind": "create", "uri": "file:///new.rb"},
        {
            "textDocument": {"uri": "file:///old.rb", "version": 2},
            "edits": [
                {
                    "range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 3}},
                    "newText": "def"
                },
                {
                    "range": {"start": {"line": 1, "character": 0}, "end": {"line": 1, "character": 3}},
                    "newText": "end",
                    "annotationId": "a1"
                }
            ]
        }
    ]);

    let changes: Vec<DocumentChange> = serde_json::from_value(raw).unwrap();
    assert!(matches!(
        changes[0],
        DocumentChange::Operation(ResourceOperation::Create(_))
    ));

    let DocumentChange::Edit(ref edit) = changes[1] else {
        panic!("expected a text document edit");
    };
    assert!(matches!(edit.edits[0], Edit::Plain(_)));
    assert!(matches!(edit.edits[1], Edit::Annotated(_)));
}

#[test]
fn workspace_edit_round_trips_and_is_deterministic() {
    let mut annotations = indexmap::IndexMap::new();
    annotations.insert(
        "a1".to_string(),
        ChangeAnnotation {
            label: "Rename method".to_string(),
            needs_confirmation: Some(true),
            description: None,
        },
    );

    let edit = WorkspaceEdit {
        changes: None,
        document_changes: Some(vec![
            DocumentChange::Operation(ResourceOperation::Create(CreateFile {
                uri: "file:///new.rb".to_string(),
                options: None,
                annotation_id: Some("a1".to_string()),
            })),
            DocumentChange::Edit(TextDocumentEdit {
                text_document: OptionalVersionedTextDocumentIdentifier {
                    uri: "file:///old.rb".to_string(),
                    version: Some(4),
                },
                edits: vec![
                    Edit::Plain(TextEdit::new(sample_range(), "bar")),
                    Edit::Annotated(AnnotatedTextEdit {
                        range: sample_range(),
                        new_text: "baz".to_string(),
                        annotation_id: "a1".to_string(),
                    }),
                ],
            }),
        ]),
        change_annotations: Some(annotations),
    };

    let first = serde_json::to_string(&edit).unwrap();
    let second = serde_json::to_string(&edit).unwrap();
    assert_eq!(first, second);

    let back: WorkspaceEdit = serde_json::from_str(&first).unwrap();
    assert_eq!(back, edit);
}
