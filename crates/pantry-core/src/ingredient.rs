//! 配料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{require_non_blank, FoodItem, PantryError, Result};

/// 食譜配料
///
/// 描述食譜需要多少某項食材。與庫存食材分屬不同型別，
/// 僅以名稱在配對時關聯。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// 名稱
    name: String,

    /// 分類
    category: String,

    /// 單位
    unit: String,

    /// 需求量（恆為正）
    amount: Decimal,
}

impl Ingredient {
    /// 創建新的配料
    ///
    /// 字串欄位皆不可空白，需求量必須為正數。
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self> {
        let name = name.into();
        let category = category.into();
        let unit = unit.into();
        require_non_blank(&name, "名稱")?;
        require_non_blank(&category, "分類")?;
        require_non_blank(&unit, "單位")?;
        if amount <= Decimal::ZERO {
            return Err(PantryError::InvalidArgument(
                "需求量必須為正數".to_string(),
            ));
        }

        Ok(Self {
            name,
            category,
            unit,
            amount,
        })
    }

    /// 名稱
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 分類
    pub fn category(&self) -> &str {
        &self.category
    }

    /// 單位
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// 需求量
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// 更新需求量（同名配料累加時使用）
    pub fn set_amount(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(PantryError::InvalidArgument(
                "需求量必須為正數".to_string(),
            ));
        }
        self.amount = amount;
        Ok(())
    }
}

impl FoodItem for Ingredient {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn unit(&self) -> &str {
        &self.unit
    }
}
