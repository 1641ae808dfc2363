// ==========================================
// 零售智能补货系统 - 补货服务门面
// ==========================================
// 职责: 组合数据持有器与安全库存模型,暴露四个独立操作:
//       建议补货量 / 库存天数 / 库存水平 / 坏货信息
// 并发: 持有器按调用构造,方法只读 &self,无跨调用共享可变状态,
//       可从任意工作线程安全调用
// ==========================================

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::instrument;

use crate::api::dto::{ExpiredChart, StorageLevel};
use crate::api::formatter::parse_expired_info;
use crate::config::ModelParams;
use crate::domain::types::{ExpiredWeekInfo, StorageDays};
use crate::engine::{ExpiredProjectionEngine, SafetyStockModel};
use crate::error::{ReplenishError, ReplenishResult};
use crate::holder::{
    ForecastHolder, HistoryInventoryHolder, HubInventoryHolder, OrderTemplateHolder,
};

// ==========================================
// ReplenishApi - 补货服务门面
// ==========================================

/// 补货服务
///
/// 四个操作相互独立,可单独调用,无调用顺序要求;
/// 每个操作从原始表格行构造新的持有器实例
pub struct ReplenishApi {
    params: ModelParams,
}

impl ReplenishApi {
    /// 按给定模型参数创建补货服务
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }

    /// 按默认参数创建 (repl_days=7, service_level=0.98, 提前期 (2, 0))
    pub fn with_defaults() -> Self {
        Self::new(ModelParams::default())
    }

    // ==========================================
    // 操作 1: 建议补货量
    // ==========================================

    /// 获取各 SKU 的建议补货数量 {sku_id: quantity}
    ///
    /// 结果只覆盖订货模板与预测的交集; 数值 ≥ 0 且不超过仓库可用量
    #[instrument(skip_all, fields(
        order_rows = order_template.len(),
        forecast_rows = forecast.len(),
        hub_rows = hub_inventory.len(),
        safety_days = safety_days,
    ))]
    pub fn get_predict_quantity(
        &self,
        order_template: &[Value],
        forecast: &[Value],
        hub_inventory: &[Value],
        safety_days: u32,
    ) -> ReplenishResult<BTreeMap<String, f64>> {
        let model = SafetyStockModel::new(self.params.clone().with_safety_days(safety_days))?;

        let order = OrderTemplateHolder::from_rows(order_template)?;
        let forecast = ForecastHolder::from_rows(forecast)?;
        let hub = HubInventoryHolder::from_rows(hub_inventory)?;

        Ok(model.run(&order, &forecast, &hub))
    }

    // ==========================================
    // 操作 2: 库存天数
    // ==========================================

    /// 获取各 SKU 的库存天数 {sku_id: days}
    ///
    /// 库存天数 = (门店库存 + 在途补货量) / 日均预测, 向下取整;
    /// 哨兵约定: SKU 不在预测中 → NoForecast (-1);
    ///          日均预测 ≤ 0 → Unbounded (300)
    #[instrument(skip_all, fields(
        order_rows = order_info.len(),
        forecast_rows = forecast.len(),
        safety_days = safety_days,
    ))]
    pub fn get_storage_days(
        &self,
        order_info: &[Value],
        forecast: &[Value],
        safety_days: u32,
    ) -> ReplenishResult<BTreeMap<String, StorageDays>> {
        let params = self.params.clone().with_safety_days(safety_days);
        params.validate()?;

        let order = OrderTemplateHolder::from_rows(order_info)?;
        let forecast = ForecastHolder::from_rows(forecast)?;
        // 日均口径: 缩放后的均值 / safety_days (等价于 qty_mean / repl_days, 不截负)
        let scaled = forecast.scaled_mean_std(params.repl_days, params.safety_days);

        let mut result = BTreeMap::new();
        for row in order.rows() {
            let total_inventory = row.store_inventory + row.replenishment;
            let days = match scaled.get(&row.sku_id) {
                None => StorageDays::NoForecast,
                Some((mean, _)) => {
                    let daily_forecast = mean / params.safety_days as f64;
                    if daily_forecast > 0.0 {
                        StorageDays::Days((total_inventory / daily_forecast) as i64)
                    } else {
                        StorageDays::Unbounded
                    }
                }
            };
            result.insert(row.sku_id.clone(), days);
        }
        Ok(result)
    }

    // ==========================================
    // 操作 3: 库存水平
    // ==========================================

    /// 库存水平天数 (门店聚合口径): sku 总库存 / sku 总需求
    ///
    /// after 在每行库存上加在途补货量后再汇总;
    /// 分母初始为 1.0 (沿用的防除零近似,见 StorageLevel 文档)
    #[instrument(skip_all, fields(
        order_rows = order_info.len(),
        forecast_rows = forecast.len(),
    ))]
    pub fn get_storage_level(
        &self,
        order_info: &[Value],
        forecast: &[Value],
    ) -> ReplenishResult<StorageLevel> {
        self.params.validate()?;

        let order = OrderTemplateHolder::from_rows(order_info)?;
        let forecast = ForecastHolder::from_rows(forecast)?;
        let daily_forecast = forecast.daily_forecast(self.params.repl_days);

        let mut inventory_before = 0.0;
        let mut inventory_after = 0.0;
        let mut forecast_total = 1.0; // 避免除以 0
        for row in order.rows() {
            inventory_before += row.store_inventory;
            inventory_after += row.store_inventory + row.replenishment;
            forecast_total += daily_forecast.get(&row.sku_id).copied().unwrap_or(0.0);
        }

        Ok(StorageLevel {
            before: inventory_before / forecast_total,
            after: inventory_after / forecast_total,
        })
    }

    // ==========================================
    // 操作 4: 坏货信息
    // ==========================================

    /// 坏货率计算: 历史各周坏货率 + 补货之后的坏货率
    ///
    /// 历史周的实测值原样保留; 当前周的实测值被补货后预测值
    /// **替换** (同一 week 键,沿用口径: 补货决策生效后,当前周
    /// 实测被当前周预测取代)
    #[instrument(skip_all, fields(
        order_rows = order_info.len(),
        forecast_rows = forecast.len(),
        history_rows = hist_inventory.len(),
    ))]
    pub fn get_expired_goods_info(
        &self,
        order_info: &[Value],
        forecast: &[Value],
        hist_inventory: &[Value],
    ) -> ReplenishResult<BTreeMap<String, ExpiredWeekInfo>> {
        self.params.validate()?;

        let order = OrderTemplateHolder::from_rows(order_info)?;
        let forecast = ForecastHolder::from_rows(forecast)?;
        let history = HistoryInventoryHolder::from_rows(hist_inventory)?;

        let current_week = match history.current_week() {
            Some(week) => week.to_string(),
            None => return Err(ReplenishError::EmptyHistory),
        };

        let daily_forecast = forecast.daily_forecast(self.params.repl_days);

        // 历史 week 坏货
        let mut expired_info = history.hist_expired_info();

        // 当前 week 坏货 → 叠加补货后预测,并替换当前周条目
        let projected = ExpiredProjectionEngine::new().project(
            order.rows(),
            &daily_forecast,
            history.current_expired_info(),
        );
        expired_info.insert(current_week, projected);

        Ok(expired_info)
    }

    /// 坏货信息的图表形式 (get_expired_goods_info + 格式化)
    pub fn get_expired_goods_chart(
        &self,
        order_info: &[Value],
        forecast: &[Value],
        hist_inventory: &[Value],
    ) -> ReplenishResult<ExpiredChart> {
        let expired_info = self.get_expired_goods_info(order_info, forecast, hist_inventory)?;
        Ok(parse_expired_info(&expired_info))
    }
}

impl Default for ReplenishApi {
    fn default() -> Self {
        Self::with_defaults()
    }
}
