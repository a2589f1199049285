//! 多边形直线分割
//!
//! 切割线与多边形边界恰好有两个内部交点时，把顶点环重新缝合为两个闭合环。
//! 其他交点数（包括擦过顶点、非凸多边形的多次穿越）一律视为不分割。

use crate::intersect::segment_line_intersection;
use crate::line::CutLine;
use crate::math::Point2;
use crate::polygon::Polygon;

/// 分割结果
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    /// 成功分割为两块
    Split([Polygon; 2]),
    /// 切割线没有穿过多边形
    NoCrossing,
    /// 交点数既不是 0 也不是 2
    UnsupportedTopology { crossings: usize },
}

impl SplitOutcome {
    pub fn is_split(&self) -> bool {
        matches!(self, SplitOutcome::Split(_))
    }

    /// 取出两块碎片，未分割时为 `None`
    pub fn into_fragments(self) -> Option<[Polygon; 2]> {
        match self {
            SplitOutcome::Split(pieces) => Some(pieces),
            _ => None,
        }
    }
}

/// 交点插入后的顶点序列
struct ExpandedRing {
    points: Vec<Point2>,
    /// 交点在 `points` 中的下标
    crossings: Vec<usize>,
}

fn expand_ring(polygon: &Polygon, line: &CutLine) -> ExpandedRing {
    let mut points = Vec::with_capacity(polygon.len() + 2);
    let mut crossings = Vec::new();

    for (a, b) in polygon.edges() {
        points.push(*a);
        if let Some(hit) = segment_line_intersection(a, b, line) {
            crossings.push(points.len());
            points.push(hit);
        }
    }

    ExpandedRing { points, crossings }
}

/// 用直线分割多边形
pub fn split_by_line(polygon: &Polygon, line: &CutLine) -> SplitOutcome {
    let ring = expand_ring(polygon, line);

    let (first, second) = match ring.crossings.as_slice() {
        [] => return SplitOutcome::NoCrossing,
        &[first, second] => (first, second),
        other => {
            return SplitOutcome::UnsupportedTopology {
                crossings: other.len(),
            }
        }
    };

    // 每个交点之前至少有一个原顶点，两块都不少于 3 个顶点
    // 第一块：起点到第一个交点，再从第二个交点到末尾
    let mut outer = ring.points[..=first].to_vec();
    outer.extend_from_slice(&ring.points[second..]);

    // 第二块：两个交点之间
    let inner = ring.points[first..=second].to_vec();

    SplitOutcome::Split([Polygon::from_ring(outer), Polygon::from_ring(inner)])
}

impl Polygon {
    /// 用直线分割，参见 [`split_by_line`]
    pub fn split_by_line(&self, line: &CutLine) -> SplitOutcome {
        split_by_line(self, line)
    }
}
