//! # Pantry Match Engine
//!
//! 食譜配對與餐點建議引擎

pub mod matcher;
pub mod suggestion;

// Re-export 主要類型
pub use matcher::{RecipeMatch, RecipeMatcher};
pub use suggestion::MealSuggester;
