//! 食譜模型

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{require_non_blank, Ingredient, PantryError, Result};

/// 食譜
///
/// 一道食譜帶有名稱、描述、作法、份數，以及以名稱為鍵的配料表。
///
/// 不變量：加入同名配料時累加需求量，不產生重複項目。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// 名稱（食譜書中的唯一鍵）
    name: String,

    /// 描述
    description: String,

    /// 作法
    instructions: String,

    /// 份數（恆為正）
    servings: u32,

    /// 配料表（名稱 → 配料）
    ingredients: HashMap<String, Ingredient>,
}

impl Recipe {
    /// 創建新的食譜（配料表為空）
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        instructions: impl Into<String>,
        servings: u32,
    ) -> Result<Self> {
        let name = name.into();
        let description = description.into();
        let instructions = instructions.into();
        require_non_blank(&name, "名稱")?;
        require_non_blank(&description, "描述")?;
        require_non_blank(&instructions, "作法")?;
        if servings == 0 {
            return Err(PantryError::InvalidArgument(
                "份數必須為正數".to_string(),
            ));
        }

        Ok(Self {
            name,
            description,
            instructions,
            servings,
            ingredients: HashMap::new(),
        })
    }

    /// 名稱
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 描述
    pub fn description(&self) -> &str {
        &self.description
    }

    /// 作法
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// 份數
    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// 所有配料，依名稱升冪排列
    pub fn ingredients(&self) -> Vec<&Ingredient> {
        let mut ingredients: Vec<&Ingredient> = self.ingredients.values().collect();
        ingredients.sort_by(|a, b| a.name().cmp(b.name()));
        ingredients
    }

    /// 配料數
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// 取得指定名稱的配料
    pub fn ingredient(&self, name: &str) -> Result<&Ingredient> {
        require_non_blank(name, "名稱")?;
        self.ingredients
            .get(name)
            .ok_or_else(|| PantryError::NotFound(format!("找不到配料: {name}")))
    }

    /// 加入配料
    ///
    /// 同名配料已存在時採「累加後取代」：新配料帶著兩者需求量之和
    /// 取代原有項目，配料表不產生重複鍵。
    pub fn add_ingredient(&mut self, mut ingredient: Ingredient) -> Result<()> {
        if let Some(existing) = self.ingredients.get(ingredient.name()) {
            ingredient.set_amount(existing.amount() + ingredient.amount())?;
        }
        self.ingredients
            .insert(ingredient.name().to_string(), ingredient);
        Ok(())
    }

    /// 移除指定名稱的配料
    pub fn remove_ingredient(&mut self, name: &str) -> Result<()> {
        require_non_blank(name, "名稱")?;
        self.ingredients
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| PantryError::NotFound(format!("找不到配料: {name}")))
    }

    /// 更新名稱
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        require_non_blank(&name, "名稱")?;
        self.name = name;
        Ok(())
    }

    /// 更新描述
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        let description = description.into();
        require_non_blank(&description, "描述")?;
        self.description = description;
        Ok(())
    }

    /// 更新作法
    pub fn set_instructions(&mut self, instructions: impl Into<String>) -> Result<()> {
        let instructions = instructions.into();
        require_non_blank(&instructions, "作法")?;
        self.instructions = instructions;
        Ok(())
    }

    /// 更新份數
    pub fn set_servings(&mut self, servings: u32) -> Result<()> {
        if servings == 0 {
            return Err(PantryError::InvalidArgument(
                "份數必須為正數".to_string(),
            ));
        }
        self.servings = servings;
        Ok(())
    }
}
