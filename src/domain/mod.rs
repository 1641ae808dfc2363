// ==========================================
// 零售智能补货系统 - 领域层
// ==========================================
// 职责: 领域类型与表格记录定义
// ==========================================

pub mod rows;
pub mod types;

// 重导出核心类型
pub use rows::{ForecastRow, HistoryRow, HubInventoryRow, OrderRow};
pub use types::{ExpiredWeekInfo, QualityClass, StorageDays};
