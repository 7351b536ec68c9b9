pub mod error;
pub mod model;
pub mod schema;

pub use error::{Error, Result};
pub use model::{
    AnnotatedTextEdit, ChangeAnnotation, CreateFile, DeleteFile, Diagnostic,
    DiagnosticRelatedInformation, DiagnosticSeverity, DiagnosticTag, DocumentChange, Edit,
    Location, NotificationMessage, Position, Range, RenameFile, RequestMessage, ResourceOperation,
    ResponseError, ResponseMessage, TextDocumentEdit, TextEdit, ValidationError, WorkspaceEdit,
};
