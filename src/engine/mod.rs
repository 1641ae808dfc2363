// ==========================================
// 零售智能补货系统 - 引擎层
// ==========================================
// 职责: 补货量化计算 (安全库存模型 / 坏货预测 / 统计工具)
// 约束: 纯内存数值计算,无 I/O,无内部并发
// ==========================================

pub mod expired;
pub mod safety_stock;
pub mod stat;

// 重导出核心引擎
pub use expired::ExpiredProjectionEngine;
pub use safety_stock::SafetyStockModel;
