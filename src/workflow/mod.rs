pub mod conversion;
pub mod definition;
pub mod document;
pub mod ids;
pub mod value;

pub use conversion::*;
pub use definition::*;
pub use document::WorkflowDocument;
pub use ids::*;
pub use value::*;
