//! 切割策略参数
//!
//! 所有策略常量集中在 [`SlashConfig`]，可以整体嵌入场景 JSON，缺省字段取默认值。

use serde::{Deserialize, Serialize};

/// 切割策略参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlashConfig {
    /// 切割线段长度必须严格大于该值
    pub min_slash_length: f64,
    /// 切痕初始存活帧数
    pub cut_mark_ticks: u32,
    /// 场地宽度，用于切痕延伸
    pub field_width: f64,
    /// 场地高度，用于切痕延伸
    pub field_height: f64,
    /// 远离切口方向的冲量系数
    pub separation_strength: f64,
    /// 沿切割方向的冲量系数
    pub along_cut_strength: f64,
    /// 冲量整体系数，最终再除以碎片质量
    pub impulse_scale: f64,
    /// 计算冲量时质量的下限
    pub min_impulse_mass: f64,
    /// `MassThreshold` 策略的质量阈值
    pub mass_threshold: f64,
    /// `GenerationCount` 策略的存活下限
    pub generation_floor: f64,
    /// 新建刚体的默认密度
    pub density: f64,
}

impl Default for SlashConfig {
    fn default() -> Self {
        Self {
            min_slash_length: 5.0,
            cut_mark_ticks: 60,
            field_width: 400.0,
            field_height: 400.0,
            separation_strength: 1.0 / 60.0,
            along_cut_strength: 1.0 / 100.0,
            impulse_scale: 1.0,
            min_impulse_mass: 1e-3,
            mass_threshold: 3.0,
            generation_floor: 1.0,
            density: 0.001,
        }
    }
}

impl SlashConfig {
    /// 切痕两端各自延伸的距离（场地对角线长度的平方）
    pub fn cut_mark_reach(&self) -> f64 {
        self.field_width * self.field_width + self.field_height * self.field_height
    }
}
