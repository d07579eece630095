use crate::models::{InventoryStatus, Product};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub code: Option<String>,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub internal_reference: Option<String>,
    pub shell_id: Option<i64>,
    pub inventory_status: Option<InventoryStatus>,
    pub rating: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Columns rewritten when an upsert hits an existing id
pub(crate) const MUTABLE_COLUMNS: [Column; 11] = [
    Column::Code,
    Column::Name,
    Column::Description,
    Column::Image,
    Column::Category,
    Column::Price,
    Column::Quantity,
    Column::InternalReference,
    Column::ShellId,
    Column::InventoryStatus,
    Column::Rating,
];

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            code: model.code,
            name: model.name,
            description: model.description,
            image: model.image,
            category: model.category,
            price: model.price,
            quantity: model.quantity,
            internal_reference: model.internal_reference,
            shell_id: model.shell_id,
            inventory_status: model.inventory_status,
            rating: model.rating,
        }
    }
}

// A missing id is left for BIGSERIAL to fill in
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: product.id.map_or(NotSet, Set),
            code: Set(product.code),
            name: Set(product.name),
            description: Set(product.description),
            image: Set(product.image),
            category: Set(product.category),
            price: Set(product.price),
            quantity: Set(product.quantity),
            internal_reference: Set(product.internal_reference),
            shell_id: Set(product.shell_id),
            inventory_status: Set(product.inventory_status),
            rating: Set(product.rating),
        }
    }
}
