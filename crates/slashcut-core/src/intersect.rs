//! 求交计算
//!
//! 线段与线段、直线与线段、二次贝塞尔曲线与直线的交点，以及二次方程求根。
//!
//! 所有判定均为严格判定：端点接触、共线重叠都不算相交，
//! 这样切割时不会在顶点处产生零长度的碎片边。

use crate::line::CutLine;
use crate::math::{Point2, Vector2, EPSILON, PARALLEL_EPSILON};
use crate::vector;
use std::f64::consts::PI;

/// 二次方程 `a·x² + b·x + c = 0` 的实根
///
/// 退化判定相对于系数量级：`a` 相对 `b`、`c` 可忽略时按一次方程求解，
/// 判别式相对 `b²` 可忽略时视为重根；判别式为负时无解（不处理虚根）。
/// 两根用 `q = -(b + sign(b)·√d) / 2` 分别取 `q / a` 与 `c / q`，避免相近数相减。
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() <= EPSILON * b.abs().max(c.abs()).max(1.0) {
        return if b.abs() <= EPSILON * c.abs().max(1.0) {
            Vec::new()
        } else {
            vec![-c / b]
        };
    }

    let d = b * b - 4.0 * a * c;
    if d.abs() <= EPSILON * (b * b).max((4.0 * a * c).abs()) {
        return vec![-0.5 * b / a];
    }
    if d < 0.0 {
        return Vec::new();
    }

    let sd = d.sqrt();
    let q = -0.5 * (b + b.signum() * sd);
    vec![q / a, c / q]
}

/// 两方向是否平行（夹角对 π 取模后小于阈值）
///
/// 零向量视为与任何方向平行。
pub fn are_parallel(ab: &Vector2, cd: &Vector2) -> bool {
    let rad = vector::angle_between(ab, cd).abs() % PI;
    rad < PARALLEL_EPSILON || PI - rad < PARALLEL_EPSILON
}

/// 线段 `ab` 与线段 `cd` 是否严格交叉
///
/// 重叠或仅端点接触视为不相交。
pub fn segments_cross(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    let ta = (c.x - d.x) * (a.y - c.y) + (c.y - d.y) * (c.x - a.x);
    let tb = (c.x - d.x) * (b.y - c.y) + (c.y - d.y) * (c.x - b.x);
    let tc = (a.x - b.x) * (c.y - a.y) + (a.y - b.y) * (a.x - c.x);
    let td = (a.x - b.x) * (d.y - a.y) + (a.y - b.y) * (a.x - d.x);

    tc * td < 0.0 && ta * tb < 0.0
}

/// 无限长直线是否把线段 `ab` 的两个端点严格分在两侧
pub fn line_intersects_segment_strict(line: &CutLine, a: &Point2, b: &Point2) -> bool {
    line.side_of(a) * line.side_of(b) < 0.0
}

/// 线段 `ab` 与无限长直线的交点
///
/// 只返回线段内部（参数严格位于 `(0, 1)`）的交点；平行或交于端点时返回 `None`。
pub fn segment_line_intersection(a: &Point2, b: &Point2, line: &CutLine) -> Option<Point2> {
    let ab = b - a;
    if are_parallel(&ab, &line.vector()) {
        return None;
    }

    let sa = line.side_of(a);
    let sb = line.side_of(b);
    let denom = sa - sb;
    if denom.abs() < EPSILON {
        return None;
    }

    let rate = sa / denom;
    (0.0 < rate && rate < 1.0).then(|| a + ab * rate)
}

/// 二次贝塞尔曲线 `(p0, p1, p2)` 与直线 `(ray_start, ray_end)` 交点对应的曲线参数
///
/// 返回的参数未做范围过滤，可能落在 `[0, 1]` 之外。
pub fn quadratic_bezier_line_params(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    ray_start: &Point2,
    ray_end: &Point2,
) -> Vec<f64> {
    let vx = ray_end.x - ray_start.x;
    let vy = ray_end.y - ray_start.y;

    // B(t) = (a, d)·t² + (b, e)·t + (c, f)
    let a = p0.x - 2.0 * p1.x + p2.x;
    let b = 2.0 * (p1.x - p0.x);
    let c = p0.x;
    let d = p0.y - 2.0 * p1.y + p2.y;
    let e = 2.0 * (p1.y - p0.y);
    let f = p0.y;

    solve_quadratic(
        a * vy - vx * d,
        b * vy - vx * e,
        vy * c - vy * ray_start.x - vx * f + vx * ray_start.y,
    )
}

/// 二次贝塞尔曲线上参数 `t` 处的点
pub fn quadratic_bezier_point(p0: &Point2, p1: &Point2, p2: &Point2, t: f64) -> Point2 {
    Point2::new(
        (p2.x - 2.0 * p1.x + p0.x) * t * t + 2.0 * (p1.x - p0.x) * t + p0.x,
        (p2.y - 2.0 * p1.y + p0.y) * t * t + 2.0 * (p1.y - p0.y) * t + p0.y,
    )
}

/// 二次贝塞尔曲线段（`t ∈ [0, 1]`，含端点）与无限长直线的交点
pub fn bezier_segment_line_intersections(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    ray_start: &Point2,
    ray_end: &Point2,
) -> Vec<Point2> {
    quadratic_bezier_line_params(p0, p1, p2, ray_start, ray_end)
        .into_iter()
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| quadratic_bezier_point(p0, p1, p2, t))
        .collect()
}
