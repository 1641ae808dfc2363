// ==========================================
// 零售智能补货系统 - 数据持有层 (Data Holders)
// ==========================================
// 职责: 把原始表格行 (JSON 对象) 按列类型映射转换为类型化记录集,
//       并执行各持有器特有的后处理 (填充/聚合/排序/派生视图)
// ==========================================
// 约束: 持有器是按调用构造的值对象,构造后只读;
//       每次请求构造新实例,不存在跨请求共享的可变状态
// ==========================================

pub mod coerce;
pub mod forecast;
pub mod history_inventory;
pub mod hub_inventory;
pub mod order_template;

// 重导出核心类型
pub use forecast::ForecastHolder;
pub use history_inventory::HistoryInventoryHolder;
pub use hub_inventory::HubInventoryHolder;
pub use order_template::OrderTemplateHolder;
