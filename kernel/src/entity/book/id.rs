use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Store assigned identifier. The kernel never looks inside it; a value that
/// the backing store cannot parse simply resolves to no book.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
