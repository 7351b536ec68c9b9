pub mod basic;
pub mod diagnostic;
pub mod edit;
pub mod error;
pub mod message;

pub use basic::{
    Command, DocumentFilter, DocumentSelector, Location, LocationLink, MarkupContent, MarkupKind,
    OptionalVersionedTextDocumentIdentifier, PartialResultParams, Position, ProgressToken, Range,
    TextDocumentIdentifier, TextDocumentItem, TextDocumentPositionParams,
    VersionedTextDocumentIdentifier, WorkDoneProgressParams,
};
pub use diagnostic::{
    CodeDescription, Diagnostic, DiagnosticCode, DiagnosticRelatedInformation, DiagnosticSeverity,
    DiagnosticTag,
};
pub use edit::{
    AnnotatedTextEdit, ChangeAnnotation, CreateFile, CreateFileOptions, DeleteFile,
    DeleteFileOptions, DocumentChange, Edit, RenameFile, RenameFileOptions, ResourceOperation,
    TextDocumentEdit, TextEdit, WorkspaceEdit,
};
pub use error::ValidationError;
pub use message::{
    JsonRpcVersion, MessageId, NotificationMessage, Params, RequestMessage, ResponseError,
    ResponseMessage,
};
