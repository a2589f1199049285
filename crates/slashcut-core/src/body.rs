//! 刚体快照与存活策略
//!
//! 刚体由外部物理协作者持有，引擎只读取快照，不在原地修改。

use crate::math::Point2;
use crate::polygon::Polygon;
use crate::properties::{Material, Motion, RenderStyle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 刚体标识，由刚体持有方分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 碎片存活策略
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value")]
pub enum SurvivalPolicy {
    /// 剩余可切割代数，每次分割减半，小于 1 时消失
    GenerationCount(f64),
    /// 质量换算的计数，质量低于阈值时消失
    MassThreshold(f64),
    /// 永不消失
    #[default]
    Immortal,
}

impl SurvivalPolicy {
    /// 策略携带的数值，`Immortal` 没有数值
    pub fn value(&self) -> Option<f64> {
        match self {
            SurvivalPolicy::GenerationCount(v) | SurvivalPolicy::MassThreshold(v) => Some(*v),
            SurvivalPolicy::Immortal => None,
        }
    }
}

/// 刚体快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    #[serde(default)]
    pub label: String,
    pub vertices: Polygon,
    pub position: Point2,
    #[serde(default)]
    pub angle: f64,
    pub mass: f64,
    #[serde(default)]
    pub survival: SurvivalPolicy,
    #[serde(default)]
    pub style: RenderStyle,
    #[serde(default)]
    pub material: Material,
    #[serde(default)]
    pub motion: Motion,
}

impl BodySnapshot {
    /// 以多边形形心为位置、按密度计算质量的刚体
    pub fn from_polygon(id: BodyId, vertices: Polygon, density: f64) -> Self {
        Self {
            id,
            label: String::new(),
            position: vertices.centroid(),
            mass: vertices.area() * density,
            vertices,
            angle: 0.0,
            survival: SurvivalPolicy::default(),
            style: RenderStyle::default(),
            material: Material::default(),
            motion: Motion::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_survival(mut self, survival: SurvivalPolicy) -> Self {
        self.survival = survival;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }
}
