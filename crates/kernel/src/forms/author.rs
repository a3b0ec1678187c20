use serde::{Deserialize, Serialize};

use crate::validator::{Validator, Verify};

/// New author, posted from the author list page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorNameRequest {
    pub author_name: String,
}

impl Verify for AuthorNameRequest {
    fn verify(&self, v: &mut Validator) {
        v.check(!self.author_name.is_empty(), "authorName", "作者名称称必填");
    }
}
