//! 批次模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PantryError, Result};

/// 食材批次
///
/// 單一食材的一個進貨批次，帶有數量、單價與到期日。
/// 數量只能透過 [`GroceryBatch::reduce`] 減少；歸零的批次由所屬食材移除，
/// 不會以零數量狀態保留。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryBatch {
    /// 批次ID
    id: Uuid,

    /// 批次數量（恆為正）
    amount: Decimal,

    /// 單價
    price_per_unit: Decimal,

    /// 到期日
    expiration_date: NaiveDate,

    /// 插入序號（由所屬食材配發，同到期日批次的排序依據）
    sequence: u64,
}

impl GroceryBatch {
    /// 創建新的批次
    ///
    /// 數量必須為正數，單價不可為負數。
    pub fn new(
        amount: Decimal,
        price_per_unit: Decimal,
        expiration_date: NaiveDate,
    ) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(PantryError::InvalidArgument(
                "批次數量必須為正數".to_string(),
            ));
        }
        if price_per_unit < Decimal::ZERO {
            return Err(PantryError::InvalidArgument(
                "單價不可為負數".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            price_per_unit,
            expiration_date,
            sequence: 0,
        })
    }

    /// 批次ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 批次數量
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// 單價
    pub fn price_per_unit(&self) -> Decimal {
        self.price_per_unit
    }

    /// 到期日
    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    /// 插入序號
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// 批次價值（數量 × 單價）
    pub fn value(&self) -> Decimal {
        self.amount * self.price_per_unit
    }

    /// 減少批次數量
    ///
    /// `delta` 必須落在 `(0, amount]`。`delta` 等於現有數量時批次歸零，
    /// 屬於合法的終止狀態，由所屬食材負責移除。回傳減少後的數量。
    pub fn reduce(&mut self, delta: Decimal) -> Result<Decimal> {
        if delta <= Decimal::ZERO {
            return Err(PantryError::InvalidArgument(
                "減少量必須為正數".to_string(),
            ));
        }
        if delta > self.amount {
            return Err(PantryError::InvalidArgument(format!(
                "減少量超過批次數量：減少 {}, 現有 {}",
                delta, self.amount
            )));
        }

        self.amount -= delta;
        Ok(self.amount)
    }

    /// 是否在指定日期前到期（嚴格小於）
    pub fn expires_before(&self, date: NaiveDate) -> bool {
        self.expiration_date < date
    }

    pub(crate) fn assign_sequence(&mut self, sequence: u64) {
        self.sequence = sequence;
    }
}
