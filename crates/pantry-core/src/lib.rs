//! # Pantry Core
//!
//! 核心資料模型與聚合不變量

pub mod batch;
pub mod cookbook;
pub mod food_item;
pub mod grocery;
pub mod ingredient;
pub mod recipe;
pub mod storage;

// Re-export 主要類型
pub use batch::GroceryBatch;
pub use cookbook::Cookbook;
pub use food_item::FoodItem;
pub use grocery::Grocery;
pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use storage::{ExpiredRemoval, FoodStorage};

/// 庫存引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PantryError {
    #[error("無效的參數: {0}")]
    InvalidArgument(String),

    #[error("找不到項目: {0}")]
    NotFound(String),

    #[error("項目已存在: {0}")]
    AlreadyExists(String),
}

pub type Result<T> = std::result::Result<T, PantryError>;

/// 驗證字串欄位非空白
pub(crate) fn require_non_blank(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PantryError::InvalidArgument(format!("{field}不可為空白")));
    }
    Ok(())
}
