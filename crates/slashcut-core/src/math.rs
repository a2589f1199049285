//! 数学基础类型
//!
//! 基于 nalgebra 提供的向量和点类型的别名，以及轴对齐外接矩形。

use nalgebra as na;
use serde::{Deserialize, Serialize};

/// 2D点类型
pub type Point2 = na::Point2<f64>;

/// 2D向量类型
pub type Vector2 = na::Vector2<f64>;

/// 2D齐次变换矩阵
pub type Matrix3 = na::Matrix3<f64>;

/// 数值容差，用于几何比较
pub const EPSILON: f64 = 1e-10;

/// 平行判定使用的角度阈值（弧度）
pub const PARALLEL_EPSILON: f64 = 1e-6;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 判断两个2D点是否近似相等
#[inline]
pub fn points_approx_eq(a: &Point2, b: &Point2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

/// 轴对齐外接矩形
///
/// 以左上角 `(x, y)` 加宽高表示，退化输入时宽高可以为 0。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 从点集创建外接矩形，空点集返回零矩形
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };

        let (mut min, mut max) = (*first, *first);
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// 右边界 x 坐标
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// 下边界 y 坐标
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// 获取中心点
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// 检查是否包含指定点（含边界）
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// 平移矩形
    pub fn translated(&self, offset: &Vector2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_points() {
        let rect = Rect::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(-5.0, 8.0),
        ]);

        assert!(approx_eq(rect.x, -5.0));
        assert!(approx_eq(rect.y, 0.0));
        assert!(approx_eq(rect.width, 15.0));
        assert!(approx_eq(rect.height, 8.0));
        assert!(approx_eq(rect.right(), 10.0));
        assert!(rect.contains(&Point2::new(0.0, 4.0)));
        assert!(!rect.contains(&Point2::new(20.0, 4.0)));
    }

    #[test]
    fn test_rect_degenerate() {
        let single = Rect::from_points(&[Point2::new(3.0, 4.0)]);
        assert!(approx_eq(single.width, 0.0));
        assert!(approx_eq(single.height, 0.0));
        assert!(points_approx_eq(&single.center(), &Point2::new(3.0, 4.0)));

        let empty = Rect::from_points(std::iter::empty::<&Point2>());
        assert_eq!(empty, Rect::default());
    }
}
