//! # Pantry
//!
//! 批次化食材庫存與食譜配對引擎

// Re-export 主要類型
pub use pantry_core::{
    Cookbook, ExpiredRemoval, FoodItem, FoodStorage, Grocery, GroceryBatch, Ingredient,
    PantryError, Recipe, Result,
};
pub use pantry_match::{MealSuggester, RecipeMatch, RecipeMatcher};
