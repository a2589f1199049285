//! 多边形及其查询
//!
//! 多边形为至少 3 个顶点的闭合环（末点隐式连接首点）。
//! 环绕方向沿用来源刚体的方向，任何操作都不会对其归一化。

use crate::error::SlashError;
use crate::intersect::{bezier_segment_line_intersections, segments_cross};
use crate::math::{Point2, Rect, Vector2, EPSILON};
use serde::{Deserialize, Serialize};

pub use crate::intersect::are_parallel;

/// 多边形最少顶点数
pub const MIN_POLYGON_VERTICES: usize = 3;

/// 环绕方向（以 y 轴向上的坐标系命名）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// 面积为零
    Degenerate,
}

/// 简单多边形
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2>", into = "Vec<Point2>")]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// 创建多边形，顶点不足 3 个时失败
    pub fn new(vertices: Vec<Point2>) -> Result<Self, SlashError> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(SlashError::MalformedPolygon {
                vertices: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// 由分割缝合出的顶点环，调用方保证至少 3 个顶点
    pub(crate) fn from_ring(vertices: Vec<Point2>) -> Self {
        debug_assert!(vertices.len() >= MIN_POLYGON_VERTICES);
        Self { vertices }
    }

    /// 以 `(x, y)` 为左上角的轴对齐矩形，顶点顺序与屏幕坐标下的刚体一致
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            vertices: vec![
                Point2::new(x, y),
                Point2::new(x + width, y),
                Point2::new(x + width, y + height),
                Point2::new(x, y + height),
            ],
        }
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    /// 顶点数量
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// 多边形总有顶点，恒为 false
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 按顺序遍历所有边 `(v[i], v[i+1])`，包括闭合边
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// 有符号面积（鞋带公式）
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// 面积
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// 环绕方向
    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area.abs() < EPSILON {
            Winding::Degenerate
        } else if area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// 面积形心，面积为零时退化为顶点平均值
    pub fn centroid(&self) -> Point2 {
        let n = self.vertices.len();
        let mut cx = 0.0;
        let mut cy = 0.0;
        let mut twice_area = 0.0;

        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            let f = a.x * b.y - b.x * a.y;
            cx += (a.x + b.x) * f;
            cy += (a.y + b.y) * f;
            twice_area += f;
        }

        if twice_area.abs() < EPSILON {
            let sum = self
                .vertices
                .iter()
                .fold(Vector2::zeros(), |acc, p| acc + p.coords);
            return Point2::from(sum / n as f64);
        }

        let k = 1.0 / (3.0 * twice_area);
        Point2::new(cx * k, cy * k)
    }

    /// 外接矩形
    pub fn bounding_rect(&self) -> Rect {
        bounding_rectangle(&self.vertices)
    }

    /// 点是否在多边形内（射线奇偶法，边界上的点结果不确定）
    pub fn contains_point(&self, point: &Point2) -> bool {
        point_in_polygon(&self.vertices, point)
    }

    /// 部分边为二次贝塞尔曲线时的点包含判定，参见 [`point_in_polygon_with_bezier_edges`]
    pub fn contains_point_with_bezier_edges(
        &self,
        controls: &[Option<Point2>],
        point: &Point2,
    ) -> bool {
        point_in_polygon_with_bezier_edges(&self.vertices, controls, point)
    }

    /// 平移后的多边形
    pub fn translated(&self, offset: &Vector2) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| p + offset).collect(),
        }
    }
}

impl TryFrom<Vec<Point2>> for Polygon {
    type Error = SlashError;

    fn try_from(vertices: Vec<Point2>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point2> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

/// 点集的有符号面积
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// 点集的外接矩形
pub fn bounding_rectangle(points: &[Point2]) -> Rect {
    Rect::from_points(points)
}

/// 点集外接矩形的中心
pub fn center_of_bounding_rectangle(points: &[Point2]) -> Point2 {
    bounding_rectangle(points).center()
}

/// 射线远端的 x 坐标：位于外接矩形与查询点的右侧之外
fn ray_far_x(rect: &Rect, point: &Point2) -> f64 {
    rect.right().max(point.x) + rect.width + 1.0
}

/// 点是否在多边形内
///
/// 从 `point` 沿 +x 方向引射线，统计与各边的严格交叉次数，奇数为内部。
/// 射线恰好经过顶点或点落在边界上时结果不作保证。
pub fn point_in_polygon(polygon: &[Point2], point: &Point2) -> bool {
    let n = polygon.len();
    if n < MIN_POLYGON_VERTICES {
        return false;
    }

    let rect = bounding_rectangle(polygon);
    let far = Point2::new(ray_far_x(&rect, point), point.y);

    let crossings = (0..n)
        .filter(|&i| segments_cross(point, &far, &polygon[i], &polygon[(i + 1) % n]))
        .count();

    crossings % 2 == 1
}

/// 含二次贝塞尔边的点包含判定
///
/// `controls[(i + 1) % n]` 为边 `polygon[i] → polygon[i+1]` 的控制点，
/// 即 `controls[0]` 属于首尾相接的闭合边；`None` 表示直线边，
/// `controls` 比顶点数短时缺少的部分视为直线边。
/// 曲线边的每个交点只要 `x >= point.x` 就计数一次。
pub fn point_in_polygon_with_bezier_edges(
    polygon: &[Point2],
    controls: &[Option<Point2>],
    point: &Point2,
) -> bool {
    let n = polygon.len();
    if n < MIN_POLYGON_VERTICES {
        return false;
    }

    // 曲线可能向外凸出，射线延伸到右边界的 10 倍
    let rect = bounding_rectangle(polygon);
    let mut far_x = rect.right() * 10.0;
    if far_x <= rect.right().max(point.x) {
        far_x = ray_far_x(&rect, point);
    }
    let far = Point2::new(far_x, point.y);

    let mut count = 0;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];

        match controls.get((i + 1) % n).copied().flatten() {
            Some(control) => {
                count += bezier_segment_line_intersections(a, &control, b, point, &far)
                    .iter()
                    .filter(|hit| hit.x >= point.x)
                    .count();
            }
            None => {
                if segments_cross(point, &far, a, b) {
                    count += 1;
                }
            }
        }
    }

    count % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, points_approx_eq};
    use crate::vector::midpoint;
    use proptest::prelude::*;

    fn square() -> Polygon {
        Polygon::rectangle(0.0, 0.0, 10.0, 10.0)
    }

    fn rotate_start(polygon: &Polygon, k: usize) -> Polygon {
        let mut vertices = polygon.vertices().to_vec();
        let n = vertices.len();
        vertices.rotate_left(k % n);
        Polygon::new(vertices).unwrap()
    }

    #[test]
    fn test_malformed_polygon_rejected() {
        let err = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]).unwrap_err();
        assert_eq!(err, SlashError::MalformedPolygon { vertices: 2 });
    }

    #[test]
    fn test_area_and_winding() {
        let sq = square();
        assert!(approx_eq(sq.area(), 100.0));
        assert_eq!(sq.winding(), Winding::CounterClockwise);

        let mut reversed = sq.vertices().to_vec();
        reversed.reverse();
        let reversed = Polygon::new(reversed).unwrap();
        assert!(approx_eq(reversed.signed_area(), -100.0));
        assert_eq!(reversed.winding(), Winding::Clockwise);

        let flat = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ])
        .unwrap();
        assert_eq!(flat.winding(), Winding::Degenerate);
    }

    #[test]
    fn test_centroid() {
        assert!(points_approx_eq(&square().centroid(), &Point2::new(5.0, 5.0)));

        let tri = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(0.0, 3.0),
        ])
        .unwrap();
        assert!(points_approx_eq(&tri.centroid(), &Point2::new(2.0, 1.0)));

        let flat = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ])
        .unwrap();
        assert!(points_approx_eq(&flat.centroid(), &Point2::new(1.0, 0.0)));
    }

    #[test]
    fn test_bounding_rectangle() {
        let rect = square().bounding_rect();
        assert_eq!(rect, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(points_approx_eq(
            &center_of_bounding_rectangle(square().vertices()),
            &Point2::new(5.0, 5.0)
        ));
    }

    #[test]
    fn test_point_in_square() {
        let sq = square();
        assert!(sq.contains_point(&Point2::new(5.0, 5.0)));
        assert!(!sq.contains_point(&Point2::new(15.0, 5.0)));
        assert!(!sq.contains_point(&Point2::new(-5.0, 5.0)));
        assert!(!sq.contains_point(&Point2::new(5.0, 15.0)));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // U 字形
        let u = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(9.0, 0.0),
            Point2::new(9.0, 9.0),
            Point2::new(6.0, 9.0),
            Point2::new(6.0, 3.0),
            Point2::new(3.0, 3.0),
            Point2::new(3.0, 9.0),
            Point2::new(0.0, 9.0),
        ])
        .unwrap();

        assert!(u.contains_point(&Point2::new(1.5, 6.5)));
        assert!(u.contains_point(&Point2::new(7.5, 6.5)));
        assert!(!u.contains_point(&Point2::new(4.5, 6.5)));
        assert!(u.contains_point(&Point2::new(4.5, 1.5)));
    }

    #[test]
    fn test_point_in_polygon_negative_coordinates() {
        let sq = Polygon::rectangle(-30.0, -30.0, 10.0, 10.0);
        assert!(sq.contains_point(&Point2::new(-25.0, -25.0)));
        assert!(!sq.contains_point(&Point2::new(-15.0, -25.0)));
        assert!(!sq.contains_point(&Point2::new(100.0, -25.0)));
    }

    #[test]
    fn test_bezier_edge_bulges_outward() {
        // 右边是一条向右凸出的曲线，最远到 x = 15
        let sq = square();
        let mut controls = vec![None; 4];
        controls[2] = Some(Point2::new(20.0, 5.0));

        let inside_bulge = Point2::new(13.0, 5.0);
        assert!(!sq.contains_point(&inside_bulge));
        assert!(sq.contains_point_with_bezier_edges(&controls, &inside_bulge));
        assert!(!sq.contains_point_with_bezier_edges(&controls, &Point2::new(16.0, 5.0)));
        assert!(sq.contains_point_with_bezier_edges(&controls, &Point2::new(5.0, 5.0)));
    }

    #[test]
    fn test_bezier_edge_bulges_inward() {
        let sq = square();
        let mut controls = vec![None; 4];
        controls[2] = Some(Point2::new(0.0, 5.0));

        // 曲线最深处 x = 5
        assert!(!sq.contains_point_with_bezier_edges(&controls, &Point2::new(8.0, 5.0)));
        assert!(sq.contains_point_with_bezier_edges(&controls, &Point2::new(2.0, 5.0)));
    }

    #[test]
    fn test_short_controls_are_straight_edges() {
        let sq = square();
        assert!(sq.contains_point_with_bezier_edges(&[], &Point2::new(5.0, 5.0)));
        assert!(!sq.contains_point_with_bezier_edges(&[None], &Point2::new(15.0, 5.0)));
    }

    fn regular_polygon(center: Point2, n: usize, r: f64, phase: f64) -> Polygon {
        let vertices = (0..n)
            .map(|i| {
                let th = phase + std::f64::consts::TAU * i as f64 / n as f64;
                center + Vector2::new(r * th.cos(), r * th.sin())
            })
            .collect();
        Polygon::new(vertices).unwrap()
    }

    fn midpoint_controls(polygon: &Polygon) -> Vec<Option<Point2>> {
        let vertices = polygon.vertices();
        let n = vertices.len();
        // 边 i 的控制点放在 (i + 1) % n
        (0..n)
            .map(|j| {
                let i = (j + n - 1) % n;
                Some(midpoint(&vertices[i], &vertices[j]))
            })
            .collect()
    }

    fn convex_polygon() -> impl Strategy<Value = (Polygon, Point2, f64)> {
        // 场地尺度的正多边形，返回多边形、中心和半径
        (
            3usize..12,
            5.0f64..300.0,
            0.0f64..std::f64::consts::TAU,
            -400.0f64..400.0,
            -400.0f64..400.0,
        )
            .prop_map(|(n, r, phase, cx, cy)| {
                let center = Point2::new(cx, cy);
                (regular_polygon(center, n, r, phase), center, r)
            })
    }

    #[test]
    fn test_bezier_controls_follow_closing_edge_convention() {
        let sq = square();
        // controls[0] 属于闭合边 (0,10) → (0,0)，向左凸出到 x = -5
        let mut controls = vec![None; 4];
        controls[0] = Some(Point2::new(-10.0, 5.0));
        assert!(sq.contains_point_with_bezier_edges(&controls, &Point2::new(-3.0, 5.0)));
        assert!(!sq.contains_point_with_bezier_edges(&controls, &Point2::new(13.0, 5.0)));

        // 同一个控制点放在 controls[1] 时弯曲的是底边 (0,0) → (10,0)
        let mut controls = vec![None; 4];
        controls[1] = Some(Point2::new(5.0, -10.0));
        assert!(sq.contains_point_with_bezier_edges(&controls, &Point2::new(5.0, -3.0)));
        assert!(!sq.contains_point_with_bezier_edges(&controls, &Point2::new(-3.0, 5.0)));
    }

    #[test]
    fn test_bezier_midpoint_controls_match_straight_at_field_scale() {
        for n in 3..12 {
            let polygon = regular_polygon(Point2::new(250.0, 230.0), n, 150.0, 0.3);
            let controls = midpoint_controls(&polygon);

            for ix in 0..60 {
                for iy in 0..60 {
                    let point = Point2::new(60.0 + ix as f64 * 6.37, 40.0 + iy as f64 * 6.41);
                    if polygon.vertices().iter().any(|v| (v.y - point.y).abs() < 1e-6) {
                        continue;
                    }
                    assert_eq!(
                        polygon.contains_point(&point),
                        polygon.contains_point_with_bezier_edges(&controls, &point),
                        "n = {n}, point = {point}"
                    );
                }
            }
        }
    }

    proptest! {
        #[test]
        fn proptest_containment_rotation_invariant(
            (polygon, center, r) in convex_polygon(),
            x in -1.2f64..1.2,
            y in -1.2f64..1.2,
            k in 0usize..12,
        ) {
            let point = center + Vector2::new(x * r, y * r);
            let rotated = rotate_start(&polygon, k);
            prop_assert_eq!(polygon.contains_point(&point), rotated.contains_point(&point));
        }

        #[test]
        fn proptest_bezier_midpoint_controls_match_straight(
            (polygon, center, r) in convex_polygon(),
            x in -1.2f64..1.2,
            y in -1.2f64..1.2,
        ) {
            let point = center + Vector2::new(x * r, y * r);
            // 射线经过顶点时两种判定都不作保证
            prop_assume!(polygon
                .vertices()
                .iter()
                .all(|v| (v.y - point.y).abs() > 1e-6));

            let controls = midpoint_controls(&polygon);
            prop_assert_eq!(
                polygon.contains_point(&point),
                polygon.contains_point_with_bezier_edges(&controls, &point)
            );
        }
    }
}
