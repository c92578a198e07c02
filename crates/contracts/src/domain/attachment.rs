use crate::shared::list::RowId;
use serde::{Deserialize, Serialize};

/// Загруженный файл (изображение, логотип)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub id: Option<RowId>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

impl Attachment {
    /// Лучший доступный URL для превью
    pub fn preview_url(&self) -> Option<&str> {
        self.thumbnail.as_deref().or(self.original.as_deref())
    }
}
