// ==========================================
// 零售智能补货系统 - API 层
// ==========================================
// 职责: 补货服务门面,供上层任务调度 (外部) 调用
// ==========================================

pub mod dto;
pub mod formatter;
pub mod replenish_api;

// 重导出核心类型
pub use dto::{ExpiredChart, ExpiredSeries, StorageLevel};
pub use formatter::parse_expired_info;
pub use replenish_api::ReplenishApi;
