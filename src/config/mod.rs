// ==========================================
// 零售智能补货系统 - 配置层
// ==========================================
// 职责: 安全库存模型参数管理与快速失败校验
// ==========================================

pub mod model_params;

// 重导出核心配置类型
pub use model_params::{ModelParams, DEFAULT_SAFETY_DAYS};
