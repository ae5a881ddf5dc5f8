//! Transaction entity - One product sale record from the seed dataset.
//!
//! Each transaction has a title, description, price, category, optional image URL,
//! a `sold` flag and the `date_of_sale` timestamp. Records are only ever created in
//! bulk by the seed operation. Serialized field names are camelCase (`dateOfSale`)
//! to match the seed payload and the HTTP responses.
//!
//! `title_folded` and `description_folded` hold lowercase copies of the text fields
//! for case-insensitive search. They are store-only and never serialized.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier assigned by the store on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product title
    pub title: String,
    /// Product description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Lowercase `title`, matched by search
    #[serde(skip)]
    pub title_folded: String,
    /// Lowercase `description`, matched by search
    #[sea_orm(column_type = "Text")]
    #[serde(skip)]
    pub description_folded: String,
    /// Sale price
    pub price: f64,
    /// Product category, used as the pie chart grouping key
    pub category: String,
    /// Product image URL, if the source provided one
    pub image: Option<String>,
    /// Whether the item was sold
    pub sold: bool,
    /// When the sale happened (UTC)
    pub date_of_sale: DateTimeUtc,
}

/// `Transaction` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
