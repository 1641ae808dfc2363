// ==========================================
// 零售智能补货系统 - 补货量化引擎核心库
// ==========================================
// 系统定位: 补货决策支持 (量化计算核心)
// 输入: 订货模板 / 需求预测 / 仓库库存 / 历史库存快照 (表格行)
// 输出: 建议补货量 / 库存天数 / 库存水平 / 坏货信息
// ==========================================
// 范围约束: HTTP 路由 / 持久化 / 用户会话 / 文件解析
//           均由外部协作方承担,引擎只做同步数值计算
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与类型
pub mod domain;

// 数据持有层 - 表格校验与后处理
pub mod holder;

// 引擎层 - 量化计算
pub mod engine;

// 配置层 - 模型参数
pub mod config;

// API 层 - 补货服务门面
pub mod api;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ExpiredWeekInfo, QualityClass, StorageDays};

// 领域记录
pub use domain::rows::{ForecastRow, HistoryRow, HubInventoryRow, OrderRow};

// 数据持有器
pub use holder::{
    ForecastHolder, HistoryInventoryHolder, HubInventoryHolder, OrderTemplateHolder,
};

// 引擎
pub use engine::{ExpiredProjectionEngine, SafetyStockModel};

// 配置
pub use config::{ModelParams, DEFAULT_SAFETY_DAYS};

// API
pub use api::{parse_expired_info, ExpiredChart, ExpiredSeries, ReplenishApi, StorageLevel};

// 错误
pub use error::{CellViolation, ReplenishError, ReplenishResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "零售智能补货系统";
