//! 餐點建議服務

use chrono::NaiveDate;
use pantry_core::{Cookbook, FoodStorage};
use rand::Rng;

use crate::matcher::{RecipeMatch, RecipeMatcher};

/// 餐點建議服務
///
/// 將庫存查詢與食譜配對組合成三種建議操作。除了
/// [`MealSuggester::random_suggestion`] 的隨機挑選，相同輸入下
/// 輸出完全確定。
pub struct MealSuggester;

impl MealSuggester {
    /// 依庫存全部食材建議餐點
    pub fn suggest_from_storage<'a>(
        storage: &'a FoodStorage,
        cookbook: &'a Cookbook,
    ) -> Vec<RecipeMatch<'a>> {
        let candidates = storage.all_groceries_alphabetical();
        tracing::info!("依庫存建議餐點：候選食材 {} 項", candidates.len());
        RecipeMatcher::find_possible_recipes(cookbook, &candidates)
    }

    /// 依指定日期前到期的食材建議餐點
    ///
    /// 僅以最早批次在 `date` 之前（嚴格小於）到期的食材為候選，
    /// 優先把即將到期的食材用掉。
    pub fn suggest_from_expiring<'a>(
        storage: &'a FoodStorage,
        cookbook: &'a Cookbook,
        date: NaiveDate,
    ) -> Vec<RecipeMatch<'a>> {
        let candidates = storage.groceries_expiring_before(date);
        tracing::info!(
            "依到期日建議餐點：{} 前到期食材 {} 項",
            date,
            candidates.len()
        );
        RecipeMatcher::find_possible_recipes(cookbook, &candidates)
    }

    /// 從可行食譜中均勻隨機挑選一道
    ///
    /// 亂數來源由呼叫端提供，挑選本身為刻意的非確定性行為；
    /// 可行集合的計算仍是確定的。沒有可行食譜時回傳 `None`。
    pub fn random_suggestion<'a, R: Rng>(
        storage: &'a FoodStorage,
        cookbook: &'a Cookbook,
        rng: &mut R,
    ) -> Option<RecipeMatch<'a>> {
        let mut matches = Self::suggest_from_storage(storage, cookbook);
        if matches.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..matches.len());
        Some(matches.swap_remove(index))
    }
}
