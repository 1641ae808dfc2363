// ==========================================
// 零售智能补货系统 - 领域类型定义
// ==========================================
// 职责: 库存质量分类 / 库存天数哨兵 / 周度坏货明细
// ==========================================

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ==========================================
// 库存质量分类 (Quality Class)
// ==========================================
// 历史库存快照按整数编码上报: NA=0, 正品=1, 临期=2, 过期=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityClass {
    NoData,     // 无数据
    Fresh,      // 正品
    NearExpiry, // 临期
    Expired,    // 过期
}

impl QualityClass {
    /// 整数编码（与上报口径一致）
    pub fn code(&self) -> i64 {
        match self {
            QualityClass::NoData => 0,
            QualityClass::Fresh => 1,
            QualityClass::NearExpiry => 2,
            QualityClass::Expired => 3,
        }
    }

    /// 从整数编码转换，未知编码返回 None
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(QualityClass::NoData),
            1 => Some(QualityClass::Fresh),
            2 => Some(QualityClass::NearExpiry),
            3 => Some(QualityClass::Expired),
            _ => None,
        }
    }
}

impl fmt::Display for QualityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityClass::NoData => write!(f, "NA"),
            QualityClass::Fresh => write!(f, "正品"),
            QualityClass::NearExpiry => write!(f, "临期"),
            QualityClass::Expired => write!(f, "过期"),
        }
    }
}

// ==========================================
// 库存天数 (Storage Days)
// ==========================================
// 哨兵约定是业务规则,不是待修复的魔数:
// - 无预测数据: 序列化为 -1 (无法计算)
// - 日均预测 <= 0: 序列化为 300 (视为"卖不完",保持有限值便于展示)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageDays {
    /// SKU 不在预测结果中
    NoForecast,
    /// 日均预测为 0 或负数，库存不构成约束
    Unbounded,
    /// 正常计算得到的库存天数
    Days(i64),
}

impl StorageDays {
    /// "卖不完"哨兵对应的天数
    pub const UNBOUNDED_DAYS: i64 = 300;

    /// 序列化边界的字面数值: -1 / 300 / N
    pub fn as_days(&self) -> i64 {
        match self {
            StorageDays::NoForecast => -1,
            StorageDays::Unbounded => Self::UNBOUNDED_DAYS,
            StorageDays::Days(d) => *d,
        }
    }
}

impl Serialize for StorageDays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.as_days())
    }
}

impl fmt::Display for StorageDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_days())
    }
}

// ==========================================
// 周度坏货明细 (Expired Week Info)
// ==========================================

/// 单个 week 的坏货统计
///
/// ratio = expired_amount / total_amount，分母为 0 时取 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiredWeekInfo {
    /// 过期数量（箱）
    pub expired_qty: f64,
    /// 过期金额
    pub expired_amount: f64,
    /// 库存总金额
    pub total_amount: f64,
    /// 坏货率
    pub ratio: f64,
}

impl ExpiredWeekInfo {
    /// 全零明细（该 week 缺失数据时使用）
    pub fn zero() -> Self {
        Self {
            expired_qty: 0.0,
            expired_amount: 0.0,
            total_amount: 0.0,
            ratio: 0.0,
        }
    }

    /// 按当前金额字段重算坏货率（分母为 0 时取 0）
    pub fn recompute_ratio(&mut self) {
        self.ratio = if self.total_amount != 0.0 {
            self.expired_amount / self.total_amount
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_class_code_round_trip() {
        for code in 0..=3 {
            let quality = QualityClass::from_code(code).unwrap();
            assert_eq!(quality.code(), code);
        }
        assert_eq!(QualityClass::from_code(4), None);
        assert_eq!(QualityClass::from_code(-1), None);
    }

    #[test]
    fn test_storage_days_sentinels() {
        assert_eq!(StorageDays::NoForecast.as_days(), -1);
        assert_eq!(StorageDays::Unbounded.as_days(), 300);
        assert_eq!(StorageDays::Days(12).as_days(), 12);
    }

    #[test]
    fn test_storage_days_serializes_to_literal_number() {
        let json = serde_json::to_string(&StorageDays::NoForecast).unwrap();
        assert_eq!(json, "-1");
        let json = serde_json::to_string(&StorageDays::Unbounded).unwrap();
        assert_eq!(json, "300");
    }

    #[test]
    fn test_recompute_ratio_zero_denominator() {
        let mut info = ExpiredWeekInfo::zero();
        info.expired_amount = 50.0;
        info.recompute_ratio();
        assert!((info.ratio - 0.0).abs() < f64::EPSILON);

        info.total_amount = 100.0;
        info.recompute_ratio();
        assert!((info.ratio - 0.5).abs() < 1e-12);
    }
}
