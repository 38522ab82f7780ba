//! 食譜書模型

use serde::{Deserialize, Serialize};

use crate::{require_non_blank, PantryError, Recipe, Result};

/// 食譜書
///
/// 以名稱為唯一鍵的食譜集合，清單在每次加入後依名稱重新排序，
/// [`Cookbook::recipes`] 因此永遠是依名稱升冪的視圖。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cookbook {
    /// 食譜清單（依名稱升冪）
    recipes: Vec<Recipe>,
}

impl Cookbook {
    /// 創建新的空食譜書
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    /// 所有食譜，依名稱升冪排列
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// 食譜數
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// 是否沒有任何食譜
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// 取得指定名稱的食譜
    pub fn recipe(&self, name: &str) -> Result<&Recipe> {
        require_non_blank(name, "名稱")?;
        self.recipes
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| PantryError::NotFound(format!("找不到食譜: {name}")))
    }

    /// 加入食譜
    ///
    /// 食譜身分以名稱為準，同名食譜已存在時失敗。
    /// 加入後清單依名稱重新排序。
    pub fn add_recipe(&mut self, recipe: Recipe) -> Result<()> {
        if self.recipes.iter().any(|r| r.name() == recipe.name()) {
            return Err(PantryError::AlreadyExists(format!(
                "食譜已存在: {}",
                recipe.name()
            )));
        }
        self.recipes.push(recipe);
        self.sort_recipes();
        Ok(())
    }

    /// 移除指定名稱的食譜
    pub fn remove_recipe(&mut self, name: &str) -> Result<()> {
        require_non_blank(name, "名稱")?;
        let index = self
            .recipes
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| PantryError::NotFound(format!("找不到食譜: {name}")))?;
        self.recipes.remove(index);
        Ok(())
    }

    /// 依關鍵字搜尋食譜（名稱不分大小寫的子字串比對）
    pub fn search(&self, keyword: &str) -> Result<Vec<&Recipe>> {
        require_non_blank(keyword, "關鍵字")?;
        let keyword = keyword.to_lowercase();
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.name().to_lowercase().contains(&keyword))
            .collect())
    }

    /// 依名稱升冪重排食譜清單
    pub fn sort_recipes(&mut self) {
        self.recipes.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// 移除所有食譜
    pub fn remove_all_recipes(&mut self) {
        self.recipes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str) -> Recipe {
        Recipe::new(name, "desc", "steps", 2).unwrap()
    }

    #[test]
    fn test_add_recipe_keeps_alphabetical_order() {
        let mut cookbook = Cookbook::new();
        cookbook.add_recipe(recipe("Waffles")).unwrap();
        cookbook.add_recipe(recipe("Apple Pie")).unwrap();
        cookbook.add_recipe(recipe("Pancakes")).unwrap();

        let names: Vec<&str> = cookbook.recipes().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Apple Pie", "Pancakes", "Waffles"]);
    }

    #[test]
    fn test_add_duplicate_recipe() {
        let mut cookbook = Cookbook::new();
        cookbook.add_recipe(recipe("Pancakes")).unwrap();

        let result = cookbook.add_recipe(recipe("Pancakes"));
        assert!(matches!(result, Err(PantryError::AlreadyExists(_))));
        assert_eq!(cookbook.len(), 1);
    }

    #[test]
    fn test_recipe_lookup() {
        let mut cookbook = Cookbook::new();
        cookbook.add_recipe(recipe("Pancakes")).unwrap();

        assert_eq!(cookbook.recipe("Pancakes").unwrap().name(), "Pancakes");
        assert!(matches!(
            cookbook.recipe("Waffles"),
            Err(PantryError::NotFound(_))
        ));
        assert!(matches!(
            cookbook.recipe("  "),
            Err(PantryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_search_case_insensitive() {
        let mut cookbook = Cookbook::new();
        cookbook.add_recipe(recipe("Apple Pie")).unwrap();
        cookbook.add_recipe(recipe("Pineapple Cake")).unwrap();
        cookbook.add_recipe(recipe("Waffles")).unwrap();

        let hits = cookbook.search("APPLE").unwrap();
        let names: Vec<&str> = hits.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Apple Pie", "Pineapple Cake"]);

        assert!(cookbook.search("burger").unwrap().is_empty());
        assert!(matches!(
            cookbook.search(" "),
            Err(PantryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_remove_recipe() {
        let mut cookbook = Cookbook::new();
        cookbook.add_recipe(recipe("Pancakes")).unwrap();

        cookbook.remove_recipe("Pancakes").unwrap();
        assert!(cookbook.is_empty());

        let result = cookbook.remove_recipe("Pancakes");
        assert!(matches!(result, Err(PantryError::NotFound(_))));
    }

    #[test]
    fn test_remove_all_recipes() {
        let mut cookbook = Cookbook::new();
        cookbook.add_recipe(recipe("Pancakes")).unwrap();
        cookbook.add_recipe(recipe("Waffles")).unwrap();

        cookbook.remove_all_recipes();
        assert!(cookbook.is_empty());
    }
}
