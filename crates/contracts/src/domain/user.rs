use crate::shared::list::{ListRecord, RowId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub available_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RowId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub wallet: Option<Wallet>,
    #[serde(default)]
    pub is_active: bool,
}

impl ListRecord for User {
    fn row_id(&self) -> RowId {
        self.id.clone()
    }
}
