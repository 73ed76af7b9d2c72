pub mod errors;
pub mod protocol;
pub mod translatable;

pub use errors::{ArchiveError, ExtractError};
pub use protocol::{Command, ConsentTable, Page, PageBody, Question, RadioItem, Response};
pub use translatable::Translatable;
