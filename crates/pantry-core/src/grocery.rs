//! 食材模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{require_non_blank, FoodItem, GroceryBatch, PantryError, Result};

/// 食材
///
/// 一項食材由一個以上的批次組成。批次清單依（到期日, 插入序號）升冪
/// 排列，只能透過 [`Grocery::add_batch`] 與 [`Grocery::consume`] 變動，
/// 不對外暴露可變批次集合。
///
/// 不變量：`total_amount` 恆等於所有批次數量之和，且不為負。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grocery {
    /// 名稱（庫存中的唯一鍵）
    name: String,

    /// 分類
    category: String,

    /// 單位
    unit: String,

    /// 總量（批次數量之和的快取）
    total_amount: Decimal,

    /// 批次清單（依到期日升冪）
    batches: Vec<GroceryBatch>,

    /// 下一個批次插入序號
    next_sequence: u64,
}

impl Grocery {
    /// 創建新的食材
    ///
    /// 字串欄位皆不可空白；食材建立時必須帶有一個初始批次，
    /// 不存在沒有批次的食材。
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit: impl Into<String>,
        initial_batch: GroceryBatch,
    ) -> Result<Self> {
        let name = name.into();
        let category = category.into();
        let unit = unit.into();
        require_non_blank(&name, "名稱")?;
        require_non_blank(&category, "分類")?;
        require_non_blank(&unit, "單位")?;

        let mut grocery = Self {
            name,
            category,
            unit,
            total_amount: Decimal::ZERO,
            batches: Vec::new(),
            next_sequence: 0,
        };
        grocery.add_batch(initial_batch);
        Ok(grocery)
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

    /// 總量
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// 批次唯讀視圖（依到期日升冪）
    pub fn batches(&self) -> &[GroceryBatch] {
        &self.batches
    }

    /// 批次數
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// 是否已無批次（完全消耗後的終止狀態）
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// 最早批次的到期日
    ///
    /// 批次清單保持排序，故為第一個批次的到期日。
    pub fn earliest_expiration(&self) -> Option<NaiveDate> {
        self.batches.first().map(|b| b.expiration_date())
    }

    /// 食材總價值（各批次價值之和）
    pub fn value(&self) -> Decimal {
        self.batches.iter().map(|b| b.value()).sum()
    }

    /// 加入新批次
    ///
    /// 配發插入序號、重新排序批次，並累加總量。
    pub fn add_batch(&mut self, mut batch: GroceryBatch) {
        batch.assign_sequence(self.next_sequence);
        self.next_sequence += 1;
        self.total_amount += batch.amount();
        self.batches.push(batch);
        self.sort_batches();
    }

    /// 消耗指定數量（FEFO：最早到期批次優先）
    ///
    /// 依到期日升冪走訪批次：批次數量不大於剩餘消耗量時整批移除，
    /// 否則就地減少該批次並結束。消耗量必須落在 `(0, total_amount]`，
    /// 驗證失敗時狀態完全不變。
    ///
    /// 消耗恰為總量時批次清單清空；是否移除整項食材由持有者
    /// （[`FoodStorage`](crate::FoodStorage)）決定。
    pub fn consume(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(PantryError::InvalidArgument(
                "消耗量必須為正數".to_string(),
            ));
        }
        if amount > self.total_amount {
            return Err(PantryError::InvalidArgument(format!(
                "消耗量超過總量：需要 {}, 現有 {} {}",
                amount, self.total_amount, self.unit
            )));
        }

        let mut remaining = amount;
        while remaining > Decimal::ZERO {
            // 總量檢查保證剩餘消耗量一定有批次可扣
            match self.batches.first_mut() {
                Some(first) if first.amount() <= remaining => {
                    remaining -= first.amount();
                    self.batches.remove(0);
                }
                Some(first) => {
                    first.reduce(remaining)?;
                    remaining = Decimal::ZERO;
                }
                None => break,
            }
        }

        self.total_amount -= amount;
        Ok(())
    }

    /// 依（到期日, 插入序號）升冪重排批次
    fn sort_batches(&mut self) {
        self.batches
            .sort_by_key(|b| (b.expiration_date(), b.sequence()));
    }
}

impl FoodItem for Grocery {
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
