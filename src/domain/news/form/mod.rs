mod batch;
mod session;
mod state;

pub use batch::{FieldChange, FormBatch, FormField};
pub use session::FormSession;
pub use state::{FormState, ValidatedNews};
