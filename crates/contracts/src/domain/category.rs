use super::attachment::Attachment;
use crate::shared::list::{ListRecord, RowId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RowId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Vec<Attachment>,
    #[serde(default)]
    pub banner_image: Vec<Attachment>,
}

impl ListRecord for Category {
    fn row_id(&self) -> RowId {
        self.id.clone()
    }
}
