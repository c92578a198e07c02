use super::attachment::Attachment;
use crate::shared::list::{ListRecord, RowId};
use serde::{Deserialize, Serialize};

/// Статусы товара, доступные для массовой смены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Publish,
    Approved,
    Rejected,
    SoftDisabled,
}

impl ProductStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProductStatus::Publish => "publish",
            ProductStatus::Approved => "approved",
            ProductStatus::Rejected => "rejected",
            ProductStatus::SoftDisabled => "soft_disabled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductStatus::Publish => "Published",
            ProductStatus::Approved => "Approved",
            ProductStatus::Rejected => "Rejected",
            ProductStatus::SoftDisabled => "Soft Disabled",
        }
    }

    pub fn all() -> Vec<ProductStatus> {
        vec![
            ProductStatus::Publish,
            ProductStatus::Approved,
            ProductStatus::Rejected,
            ProductStatus::SoftDisabled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "publish" => Some(ProductStatus::Publish),
            "approved" => Some(ProductStatus::Approved),
            "rejected" => Some(ProductStatus::Rejected),
            "soft_disabled" => Some(ProductStatus::SoftDisabled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Simple,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductGroup {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShopRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo: Option<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RowId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub product_type: Option<ProductType>,
    #[serde(default, rename = "type")]
    pub group: Option<ProductGroup>,
    #[serde(default)]
    pub shop: Option<ShopRef>,
    #[serde(default)]
    pub image: Option<Attachment>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub status: String,
}

impl Product {
    /// Остаток меньше 10, но товар ещё в наличии
    pub fn is_low_quantity(&self) -> bool {
        self.quantity > 0 && self.quantity < 10
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity < 1
    }
}

impl ListRecord for Product {
    fn row_id(&self) -> RowId {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_status_codes() {
        let codes: Vec<&str> = ProductStatus::all().iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec!["publish", "approved", "rejected", "soft_disabled"]);
        assert_eq!(
            serde_json::to_value(ProductStatus::SoftDisabled).unwrap(),
            serde_json::Value::from("soft_disabled")
        );
        assert_eq!(ProductStatus::from_code("draft"), None);
    }

    #[test]
    fn test_product_stock_flags() {
        let json = r#"{"id": 1, "name": "Soap", "quantity": 4, "type": {"name": "Grocery"},
            "product_type": "variable", "min_price": 1.0, "max_price": 3.5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.is_low_quantity());
        assert!(!product.is_out_of_stock());
        assert_eq!(product.product_type, Some(ProductType::Variable));
        assert_eq!(product.group.map(|g| g.name), Some("Grocery".to_string()));
    }
}
