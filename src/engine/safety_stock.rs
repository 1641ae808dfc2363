// ==========================================
// 零售智能补货系统 - 安全库存模型
// ==========================================
// 职责: 从需求预测统计量 + 提前期分布 + 门店/仓库库存
//       计算各 SKU 的建议补货数量
// 公式: ss = round(z * sqrt(lt_mean*(std/sd)^2 + lt_std^2*(mean/sd)^2))
//       target = ss + mean + mean*lt_mean/sd
//       建议补货 = min(max(target - 门店库存, 0), 仓库可用量)
// ==========================================

use std::collections::BTreeMap;

use tracing::instrument;

use crate::config::ModelParams;
use crate::engine::stat::quantile_normal;
use crate::error::ReplenishResult;
use crate::holder::{ForecastHolder, HubInventoryHolder, OrderTemplateHolder};

// ==========================================
// SafetyStockModel - 安全库存模型
// ==========================================
pub struct SafetyStockModel {
    params: ModelParams,
}

impl SafetyStockModel {
    /// 创建安全库存模型
    ///
    /// 参数在此处快速失败校验: safety_days 为 0 必须报配置错误,
    /// 不允许进入公式后产生除零
    pub fn new(params: ModelParams) -> ReplenishResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算各 SKU 的建议补货数量
    ///
    /// SKU 范围 = 订货模板 ∩ 预测结果 (缺失预测的 SKU 不纳入,不默认);
    /// 结果 ≥ 0 且不超过仓库可用量,仓库无记录按 0 处理 (补货被压为 0)。
    /// 纯函数,无副作用
    #[instrument(skip_all, fields(
        order_skus = order.rows().len(),
        forecast_skus = forecast.rows().len(),
        safety_days = self.params.safety_days,
    ))]
    pub fn run(
        &self,
        order: &OrderTemplateHolder,
        forecast: &ForecastHolder,
        hub: &HubInventoryHolder,
    ) -> BTreeMap<String, f64> {
        let order_skus = order.sku_ids();
        let store_inv = order.store_inventory_by_sku();
        let hub_inv = hub.quantity_by_sku();

        let scaled = forecast.scaled_mean_std(self.params.repl_days, self.params.safety_days);
        let z = quantile_normal(self.params.service_level);
        let safety_days = self.params.safety_days as f64;
        let lt_mean = self.params.leadtime_mean;
        let lt_std = self.params.leadtime_std;

        let mut result = BTreeMap::new();
        for (sku, (mean, std)) in scaled {
            // 只处理订货模板与预测的交集
            if !order_skus.contains(&sku) {
                continue;
            }

            // 安全库存
            let ss = (z
                * (lt_mean * (std / safety_days).powi(2)
                    + lt_std.powi(2) * (mean / safety_days).powi(2))
                .sqrt())
            .round();

            // 目标库存水平
            let target = ss + mean + mean * lt_mean / safety_days;

            let sku_store_inv = store_inv.get(&sku).copied().unwrap_or(0.0);
            let sku_hub_inv = hub_inv.get(&sku).copied().unwrap_or(0.0);
            result.insert(sku, Self::replenish_quantity(target, sku_store_inv, sku_hub_inv));
        }
        result
    }

    /// 实际补货量 = max(目标库存 - 门店库存, 0), 再按仓库可用量封顶;
    /// 仓库数量上报为负时补货量仍为 0 (补货量恒非负)
    fn replenish_quantity(target: f64, store_inv: f64, hub_inv: f64) -> f64 {
        (target - store_inv).max(0.0).min(hub_inv).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model(safety_days: u32) -> SafetyStockModel {
        SafetyStockModel::new(ModelParams::default().with_safety_days(safety_days)).unwrap()
    }

    #[test]
    fn test_hand_computed_example() {
        // safety_days=7, lt=(2,0), mean=70, std=14, service_level=0.98 (z≈2.0537)
        // ss = round(2.0537 * sqrt(2 * (14/7)^2)) = round(5.81) = 6
        // target = 6 + 70 + 70*2/7 = 96
        let order = OrderTemplateHolder::from_rows(&[
            json!({"sku_id": "A", "store_inventory": 0.0}),
        ])
        .unwrap();
        let forecast = ForecastHolder::from_rows(&[
            json!({"sku_id": "A", "qty_mean": 70.0, "qty_std": 14.0}),
        ])
        .unwrap();
        let hub = HubInventoryHolder::from_rows(&[
            json!({"sku_id": "A", "location_id": "L1", "qty": 1000.0}),
        ])
        .unwrap();

        let result = model(7).run(&order, &forecast, &hub);
        assert!((result["A"] - 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_recommendation_capped_by_hub() {
        let order = OrderTemplateHolder::from_rows(&[
            json!({"sku_id": "A", "store_inventory": 0.0}),
        ])
        .unwrap();
        let forecast = ForecastHolder::from_rows(&[
            json!({"sku_id": "A", "qty_mean": 70.0, "qty_std": 14.0}),
        ])
        .unwrap();
        let hub = HubInventoryHolder::from_rows(&[
            json!({"sku_id": "A", "location_id": "L1", "qty": 30.0}),
        ])
        .unwrap();

        let result = model(7).run(&order, &forecast, &hub);
        assert!((result["A"] - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_sku_missing_from_hub_forced_to_zero() {
        let order = OrderTemplateHolder::from_rows(&[
            json!({"sku_id": "A", "store_inventory": 0.0}),
        ])
        .unwrap();
        let forecast = ForecastHolder::from_rows(&[
            json!({"sku_id": "A", "qty_mean": 70.0, "qty_std": 14.0}),
        ])
        .unwrap();
        let hub = HubInventoryHolder::from_rows(&[]).unwrap();

        let result = model(7).run(&order, &forecast, &hub);
        assert!((result["A"] - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sku_missing_from_forecast_excluded() {
        let order = OrderTemplateHolder::from_rows(&[
            json!({"sku_id": "A", "store_inventory": 0.0}),
            json!({"sku_id": "B", "store_inventory": 0.0}),
        ])
        .unwrap();
        let forecast = ForecastHolder::from_rows(&[
            json!({"sku_id": "A", "qty_mean": 70.0, "qty_std": 14.0}),
        ])
        .unwrap();
        let hub = HubInventoryHolder::from_rows(&[
            json!({"sku_id": "A", "location_id": "L1", "qty": 1000.0}),
            json!({"sku_id": "B", "location_id": "L1", "qty": 1000.0}),
        ])
        .unwrap();

        let result = model(7).run(&order, &forecast, &hub);
        assert!(result.contains_key("A"));
        assert!(!result.contains_key("B"));
    }

    #[test]
    fn test_negative_hub_quantity_clamped_to_zero() {
        // 仓库数量上报为负 (退货/冲账口径) 时补货量不得为负
        let order = OrderTemplateHolder::from_rows(&[
            json!({"sku_id": "A", "store_inventory": 0.0}),
        ])
        .unwrap();
        let forecast = ForecastHolder::from_rows(&[
            json!({"sku_id": "A", "qty_mean": 70.0, "qty_std": 14.0}),
        ])
        .unwrap();
        let hub = HubInventoryHolder::from_rows(&[
            json!({"sku_id": "A", "location_id": "L1", "qty": -5.0}),
        ])
        .unwrap();

        let result = model(7).run(&order, &forecast, &hub);
        assert!((result["A"] - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_store_inventory_reduces_recommendation() {
        // target=96, 门店已有 100 → 建议补货 0
        let order = OrderTemplateHolder::from_rows(&[
            json!({"sku_id": "A", "store_inventory": 100.0}),
        ])
        .unwrap();
        let forecast = ForecastHolder::from_rows(&[
            json!({"sku_id": "A", "qty_mean": 70.0, "qty_std": 14.0}),
        ])
        .unwrap();
        let hub = HubInventoryHolder::from_rows(&[
            json!({"sku_id": "A", "location_id": "L1", "qty": 1000.0}),
        ])
        .unwrap();

        let result = model(7).run(&order, &forecast, &hub);
        assert!((result["A"] - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_safety_days_is_config_error() {
        let err = SafetyStockModel::new(ModelParams::default().with_safety_days(0));
        assert!(err.is_err());
    }
}
