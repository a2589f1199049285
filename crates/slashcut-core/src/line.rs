//! 切割线
//!
//! 同一对点既作为无限长直线参与求交，也作为有限线段用于长度检查和切痕显示。

use crate::math::{Point2, Vector2, EPSILON};
use crate::vector;
use serde::{Deserialize, Serialize};

/// 由两点 `p`、`q` 确定的切割线
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutLine {
    pub p: Point2,
    pub q: Point2,
}

impl CutLine {
    pub fn new(p: Point2, q: Point2) -> Self {
        Self { p, q }
    }

    /// 方向向量 `q - p`（未归一化）
    pub fn vector(&self) -> Vector2 {
        self.q - self.p
    }

    /// 单位方向，两点重合时为 `None`
    pub fn direction(&self) -> Option<Vector2> {
        vector::try_unit(&self.vector())
    }

    /// 作为线段的长度
    pub fn length(&self) -> f64 {
        vector::length(&self.q, Some(&self.p))
    }

    /// 两点是否（近似）重合
    pub fn is_degenerate(&self) -> bool {
        self.length() < EPSILON
    }

    /// 点到直线的垂足
    pub fn nearest_point(&self, point: &Point2) -> Point2 {
        vector::nearest_point_on_line(point, &self.p, &self.q)
    }

    /// 点位于直线哪一侧：正为左侧，负为右侧，0 为线上
    pub fn side_of(&self, point: &Point2) -> f64 {
        vector::cross(&self.vector(), &(point - self.p))
    }
}
