//! 食譜配對計算

use pantry_core::{Cookbook, Grocery, Recipe};

/// 單一食譜的配對結果
#[derive(Debug, Clone)]
pub struct RecipeMatch<'a> {
    /// 可行的食譜
    pub recipe: &'a Recipe,

    /// 支援該食譜的候選食材，依（最早到期日, 名稱）升冪排列
    pub supporters: Vec<&'a Grocery>,
}

/// 食譜配對計算器
///
/// 判斷候選食材能完成食譜書中的哪些食譜。食譜可行的條件：
/// 每項配料都有同名候選食材，且其總量不低於配料需求量。
/// 相同輸入下輸出完全確定（結果依食譜名稱排序）。
pub struct RecipeMatcher;

impl RecipeMatcher {
    /// 找出候選食材可完成的所有食譜
    ///
    /// 候選清單為空時回傳空結果。支援清單為空的食譜會被剔除，
    /// 沒有任何配料的食譜因此不列入結果。
    pub fn find_possible_recipes<'a>(
        cookbook: &'a Cookbook,
        candidates: &[&'a Grocery],
    ) -> Vec<RecipeMatch<'a>> {
        if candidates.is_empty() {
            return Vec::new();
        }

        tracing::debug!(
            "開始食譜配對：候選食材 {} 項，食譜 {} 道",
            candidates.len(),
            cookbook.len()
        );

        let mut matches = Vec::new();
        for recipe in cookbook.recipes() {
            if !Self::is_feasible(recipe, candidates) {
                continue;
            }

            let supporters = Self::collect_supporters(recipe, candidates);
            if supporters.is_empty() {
                continue;
            }

            matches.push(RecipeMatch { recipe, supporters });
        }

        tracing::debug!("配對完成：可行食譜 {} 道", matches.len());
        matches
    }

    /// 檢查食譜的每項配料是否都有足量的同名候選食材
    fn is_feasible(recipe: &Recipe, candidates: &[&Grocery]) -> bool {
        recipe.ingredients().iter().all(|ingredient| {
            candidates
                .iter()
                .find(|g| g.name() == ingredient.name())
                .is_some_and(|g| g.total_amount() >= ingredient.amount())
        })
    }

    /// 收集食譜配料引用且足量的候選食材，依（最早到期日, 名稱）排序
    fn collect_supporters<'a>(
        recipe: &Recipe,
        candidates: &[&'a Grocery],
    ) -> Vec<&'a Grocery> {
        let mut supporters: Vec<&'a Grocery> = candidates
            .iter()
            .copied()
            .filter(|g| {
                recipe.ingredients().iter().any(|ingredient| {
                    ingredient.name() == g.name() && g.total_amount() >= ingredient.amount()
                })
            })
            .collect();

        supporters.sort_by(|a, b| {
            a.earliest_expiration()
                .cmp(&b.earliest_expiration())
                .then_with(|| a.name().cmp(b.name()))
        });
        supporters
    }
}
