// Resume Editor
// Form-state transformer: scalar edits, array add/remove/update, skills parsing.
// Purely in-memory; persistence happens only through the submit callback.

pub mod fields;
pub mod session;
pub mod validation;

pub use fields::EditError;
pub use session::{EditOp, EditorSession, EditorView};
pub use validation::validate_record;
