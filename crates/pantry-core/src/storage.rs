//! 庫存模型

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{require_non_blank, Grocery, GroceryBatch, PantryError, Result};

/// 到期移除紀錄
///
/// [`FoodStorage::remove_expired_before`] 每移除一個批次產生一筆。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpiredRemoval {
    /// 食材名稱
    pub name: String,

    /// 批次到期日
    pub expiration_date: NaiveDate,

    /// 移除數量
    pub amount: Decimal,

    /// 移除價值（數量 × 單價）
    pub value: Decimal,
}

/// 食材庫存
///
/// 以名稱為唯一鍵的食材集合。除非明確排序，走訪順序不保證。
///
/// 不變量：庫存中每項食材至少有一個批次；消耗至零的食材立即剔除。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodStorage {
    /// 食材映射（名稱 → 食材）
    groceries: HashMap<String, Grocery>,
}

impl FoodStorage {
    /// 創建新的空庫存
    pub fn new() -> Self {
        Self {
            groceries: HashMap::new(),
        }
    }

    /// 食材項數
    pub fn len(&self) -> usize {
        self.groceries.len()
    }

    /// 是否沒有任何食材
    pub fn is_empty(&self) -> bool {
        self.groceries.is_empty()
    }

    /// 所有食材（無排序保證）
    pub fn all_groceries(&self) -> Vec<&Grocery> {
        self.groceries.values().collect()
    }

    /// 所有食材，依名稱升冪排列
    pub fn all_groceries_alphabetical(&self) -> Vec<&Grocery> {
        let mut groceries = self.all_groceries();
        groceries.sort_by(|a, b| a.name().cmp(b.name()));
        groceries
    }

    /// 所有食材，依最早批次到期日升冪排列
    pub fn all_groceries_by_expiration(&self) -> Vec<&Grocery> {
        let mut groceries = self.all_groceries();
        groceries.sort_by_key(|g| g.earliest_expiration());
        groceries
    }

    /// 取得指定名稱的食材
    pub fn grocery_by_name(&self, name: &str) -> Result<&Grocery> {
        require_non_blank(name, "名稱")?;
        self.groceries
            .get(name)
            .ok_or_else(|| PantryError::NotFound(format!("找不到食材: {name}")))
    }

    /// 取得指定分類的所有食材（分類不分大小寫，結果可為空）
    pub fn groceries_by_category(&self, category: &str) -> Result<Vec<&Grocery>> {
        require_non_blank(category, "分類")?;
        Ok(self
            .groceries
            .values()
            .filter(|g| g.category().eq_ignore_ascii_case(category))
            .collect())
    }

    /// 最早批次在指定日期之前（嚴格小於）到期的食材（結果可為空）
    pub fn groceries_expiring_before(&self, date: NaiveDate) -> Vec<&Grocery> {
        self.groceries
            .values()
            .filter(|g| g.earliest_expiration().is_some_and(|d| d < date))
            .collect()
    }

    /// 最早批次恰於指定日期到期的食材（結果可為空）
    pub fn groceries_expiring_on(&self, date: NaiveDate) -> Vec<&Grocery> {
        self.groceries
            .values()
            .filter(|g| g.earliest_expiration().is_some_and(|d| d == date))
            .collect()
    }

    /// 加入食材
    pub fn add_grocery(&mut self, grocery: Grocery) -> Result<()> {
        if self.groceries.contains_key(grocery.name()) {
            return Err(PantryError::AlreadyExists(format!(
                "食材已存在: {}",
                grocery.name()
            )));
        }
        self.groceries.insert(grocery.name().to_string(), grocery);
        Ok(())
    }

    /// 為既有食材加入新批次
    pub fn add_batch_to(&mut self, name: &str, batch: GroceryBatch) -> Result<()> {
        require_non_blank(name, "名稱")?;
        let grocery = self
            .groceries
            .get_mut(name)
            .ok_or_else(|| PantryError::NotFound(format!("找不到食材: {name}")))?;
        grocery.add_batch(batch);
        Ok(())
    }

    /// 消耗指定食材的數量（FEFO）
    ///
    /// 委派給食材本身的 [`Grocery::consume`]；食材被完全消耗時
    /// 立即自庫存剔除，維持「每項食材至少一個批次」的不變量。
    pub fn consume_grocery(&mut self, name: &str, amount: Decimal) -> Result<()> {
        require_non_blank(name, "名稱")?;
        let grocery = self
            .groceries
            .get_mut(name)
            .ok_or_else(|| PantryError::NotFound(format!("找不到食材: {name}")))?;
        grocery.consume(amount)?;
        if grocery.is_empty() {
            self.groceries.remove(name);
        }
        Ok(())
    }

    /// 移除指定名稱的食材
    pub fn remove_grocery(&mut self, name: &str) -> Result<()> {
        require_non_blank(name, "名稱")?;
        self.groceries
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| PantryError::NotFound(format!("找不到食材: {name}")))
    }

    /// 移除所有食材
    pub fn remove_all_groceries(&mut self) {
        self.groceries.clear();
    }

    /// 移除所有在指定日期前到期的批次
    ///
    /// 對每項含到期批次的食材：僅剩一個批次時整項移除，否則透過
    /// FEFO 消耗路徑恰好扣掉該批次的數量（到期批次必為最早批次，
    /// 批次清單保持排序）。回傳移除紀錄。
    pub fn remove_expired_before(&mut self, date: NaiveDate) -> Result<Vec<ExpiredRemoval>> {
        let expired_names: Vec<String> = self
            .groceries_expiring_before(date)
            .into_iter()
            .map(|g| g.name().to_string())
            .collect();

        let mut removals = Vec::new();
        for name in expired_names {
            while let Some(grocery) = self.groceries.get_mut(&name) {
                let first = match grocery.batches().first() {
                    Some(batch) if batch.expires_before(date) => batch,
                    _ => break,
                };
                let record = ExpiredRemoval {
                    name: name.clone(),
                    expiration_date: first.expiration_date(),
                    amount: first.amount(),
                    value: first.value(),
                };

                if grocery.batch_count() == 1 {
                    self.groceries.remove(&name);
                } else {
                    grocery.consume(record.amount)?;
                }
                removals.push(record);
            }
        }
        Ok(removals)
    }

    /// 庫存總價值（所有食材的批次價值之和）
    pub fn total_value(&self) -> Decimal {
        self.groceries.values().map(|g| g.value()).sum()
    }

    /// 指定日期前到期批次的總價值
    pub fn expired_value(&self, date: NaiveDate) -> Decimal {
        self.groceries
            .values()
            .flat_map(|g| g.batches())
            .filter(|b| b.expires_before(date))
            .map(|b| b.value())
            .sum()
    }
}
