use crate::shared::list::{ListRecord, RowId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: RowId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ListRecord for Tag {
    fn row_id(&self) -> RowId {
        self.id.clone()
    }
}
