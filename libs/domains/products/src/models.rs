use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest page a client may request; bigger sizes are clamped
pub const MAX_PAGE_SIZE: u64 = 2000;

/// Stock level of a product
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryStatus {
    #[sea_orm(string_value = "IN_STOCK")]
    InStock,
    #[sea_orm(string_value = "LOW_STOCK")]
    LowStock,
    #[sea_orm(string_value = "OUT_OF_STOCK")]
    OutOfStock,
}

/// A catalog product.
///
/// `id` is `None` until the store persists the record. Every other field is
/// optional and carries no constraint beyond the column limits enforced on
/// [`ProductUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "f230fh0g3")]
    pub code: Option<String>,
    #[schema(example = "Bamboo Watch")]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[schema(example = "Accessories")]
    pub category: Option<String>,
    #[schema(example = 65.0)]
    pub price: Option<f64>,
    #[schema(example = 24)]
    pub quantity: Option<i32>,
    pub internal_reference: Option<String>,
    /// Weak reference to an external grouping, never checked
    pub shell_id: Option<i64>,
    pub inventory_status: Option<InventoryStatus>,
    #[schema(example = 5.0)]
    pub rating: Option<f64>,
}

/// Sparse product input used for both create and update.
///
/// A missing key and `null` both mean "absent". On update an absent field
/// leaves the stored value untouched, so fields can never be cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[validate(length(max = 255))]
    pub code: Option<String>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub image: Option<String>,
    #[validate(length(max = 255))]
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    #[validate(length(max = 255))]
    pub internal_reference: Option<String>,
    pub shell_id: Option<i64>,
    pub inventory_status: Option<InventoryStatus>,
    pub rating: Option<f64>,
}

impl From<ProductUpdate> for Product {
    /// Copy every supplied field into a fresh, not yet persisted product
    fn from(input: ProductUpdate) -> Self {
        Self {
            id: None,
            code: input.code,
            name: input.name,
            description: input.description,
            image: input.image,
            category: input.category,
            price: input.price,
            quantity: input.quantity,
            internal_reference: input.internal_reference,
            shell_id: input.shell_id,
            inventory_status: input.inventory_status,
            rating: input.rating,
        }
    }
}

impl Product {
    /// Field-by-field merge: present patch values win, absent ones keep `self`.
    pub fn merge(self, patch: ProductUpdate) -> Product {
        Product {
            id: self.id,
            code: patch.code.or(self.code),
            name: patch.name.or(self.name),
            description: patch.description.or(self.description),
            image: patch.image.or(self.image),
            category: patch.category.or(self.category),
            price: patch.price.or(self.price),
            quantity: patch.quantity.or(self.quantity),
            internal_reference: patch.internal_reference.or(self.internal_reference),
            shell_id: patch.shell_id.or(self.shell_id),
            inventory_status: patch.inventory_status.or(self.inventory_status),
            rating: patch.rating.or(self.rating),
        }
    }
}

/// Window into the ordered collection, as seen by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }
}

/// `?page=&size=` query parameters. Out-of-range sizes are normalized, not rejected.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index
    #[serde(default)]
    #[param(default = 0, minimum = 0)]
    pub page: u64,
    /// Items per page. 0 falls back to 10, values above 2000 are clamped
    #[serde(default = "default_page_size")]
    #[param(default = 10, maximum = 2000)]
    pub size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Largest offset a store is asked for; PostgreSQL `OFFSET` is a signed bigint
pub const MAX_OFFSET: u64 = i64::MAX as u64;

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        let size = match params.size {
            0 => DEFAULT_PAGE_SIZE,
            size => size.min(MAX_PAGE_SIZE),
        };
        let page = params.page.min(MAX_OFFSET / size);
        PageRequest::new(page * size, size)
    }
}

/// One page of results plus Spring-style page metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based index of this page
    pub number: u64,
    pub size: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let (number, total_pages) = match request.limit {
            0 => (0, u64::from(total_elements > 0)),
            limit => (request.offset / limit, total_elements.div_ceil(limit)),
        };

        Self {
            number_of_elements: content.len() as u64,
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number,
            size: request.limit,
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
        }
    }
}
