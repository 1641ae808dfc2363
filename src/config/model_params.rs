// ==========================================
// 零售智能补货系统 - 安全库存模型参数
// ==========================================
// 职责: 补货周期/安全库存天数/服务水平/提前期参数
// 默认值与第一版预测口径一致 (预测覆盖周期 7 天)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::error::{ReplenishError, ReplenishResult};

/// 安全库存天数默认值（天）
pub const DEFAULT_SAFETY_DAYS: u32 = 7;

/// 安全库存模型参数
///
/// - `repl_days`: 预测覆盖周期（天），外部预测的 mean/std 基于该周期
/// - `safety_days`: 安全库存天数，mean/std 按 safety_days / repl_days 缩放
/// - `service_level`: 目标服务水平，换算为标准正态分位数 z
/// - `leadtime_mean` / `leadtime_std`: 补货提前期分布（周期数）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParams {
    pub repl_days: u32,
    pub safety_days: u32,
    pub service_level: f64,
    pub leadtime_mean: f64,
    pub leadtime_std: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            repl_days: 7,
            safety_days: DEFAULT_SAFETY_DAYS,
            service_level: 0.98,
            // 提前期默认确定为 2 个周期
            leadtime_mean: 2.0,
            leadtime_std: 0.0,
        }
    }
}

impl ModelParams {
    /// 替换安全库存天数（调用方按请求覆写）
    pub fn with_safety_days(mut self, safety_days: u32) -> Self {
        self.safety_days = safety_days;
        self
    }

    /// 参数快速失败校验
    ///
    /// safety_days / repl_days 作为除数出现在缩放与日均换算中,
    /// 为 0 时必须在进入计算前报配置错误,不允许除零传播
    pub fn validate(&self) -> ReplenishResult<()> {
        if self.safety_days == 0 {
            return Err(ReplenishError::InvalidConfig {
                key: "safety_days",
                message: "安全库存天数必须大于 0".to_string(),
            });
        }
        if self.repl_days == 0 {
            return Err(ReplenishError::InvalidConfig {
                key: "repl_days",
                message: "预测覆盖周期必须大于 0".to_string(),
            });
        }
        if !(self.service_level > 0.0 && self.service_level < 1.0) {
            return Err(ReplenishError::InvalidConfig {
                key: "service_level",
                message: format!("服务水平必须在 (0, 1) 区间内: {}", self.service_level),
            });
        }
        if self.leadtime_mean < 0.0 || self.leadtime_std < 0.0 {
            return Err(ReplenishError::InvalidConfig {
                key: "leadtime",
                message: format!(
                    "提前期参数不能为负: mean={}, std={}",
                    self.leadtime_mean, self.leadtime_std
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_valid() {
        let params = ModelParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.safety_days, 7);
        assert_eq!(params.repl_days, 7);
        assert!((params.service_level - 0.98).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_safety_days_rejected() {
        let params = ModelParams::default().with_safety_days(0);
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("safety_days"));
    }

    #[test]
    fn test_service_level_out_of_range_rejected() {
        let params = ModelParams {
            service_level: 1.0,
            ..ModelParams::default()
        };
        assert!(params.validate().is_err());
    }
}
