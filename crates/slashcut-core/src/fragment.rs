//! 碎片生成
//!
//! 对分割出的每一块：复制父刚体属性、计算反冲冲量、按存活策略决定去留。
//! 被淘汰的碎片直接丢弃，不单独上报。

use crate::body::{BodyId, BodySnapshot, SurvivalPolicy};
use crate::config::SlashConfig;
use crate::line::CutLine;
use crate::math::{Point2, Vector2, EPSILON};
use crate::polygon::Polygon;
use crate::properties::{Material, Motion, RenderStyle};
use crate::transform::Transform2D;
use crate::vector;
use serde::{Deserialize, Serialize};

/// 新刚体的生成请求，交给外部物理协作者实例化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentSpawnRequest {
    /// 来源刚体
    pub parent: BodyId,
    pub label: String,
    /// 世界坐标下的顶点
    pub vertices: Polygon,
    /// 形状锚点（首顶点）
    pub anchor: Point2,
    /// 面积形心
    pub position: Point2,
    pub mass: f64,
    pub style: RenderStyle,
    pub material: Material,
    /// 继承自父刚体的运动状态
    pub motion: Motion,
    pub survival: SurvivalPolicy,
    pub impulse: Vector2,
    pub impulse_origin: Point2,
}

impl FragmentSpawnRequest {
    /// 以锚点为原点的局部顶点
    pub fn local_vertices(&self) -> Vec<Point2> {
        let to_local = Transform2D::translation_by(&-self.anchor.coords);
        self.vertices
            .vertices()
            .iter()
            .map(|p| to_local.transform_point(p))
            .collect()
    }
}

/// 父刚体策略传给子碎片，返回 `None` 表示碎片消失
pub fn inherit_survival(
    parent: &SurvivalPolicy,
    child_mass: f64,
    config: &SlashConfig,
) -> Option<SurvivalPolicy> {
    match parent {
        SurvivalPolicy::GenerationCount(value) => {
            let child = value / 2.0;
            (child >= config.generation_floor).then_some(SurvivalPolicy::GenerationCount(child))
        }
        SurvivalPolicy::MassThreshold(_) => (child_mass >= config.mass_threshold).then(|| {
            SurvivalPolicy::MassThreshold((child_mass - config.mass_threshold).ceil())
        }),
        SurvivalPolicy::Immortal => Some(SurvivalPolicy::Immortal),
    }
}

/// 反冲冲量及其作用点
///
/// 方向为切割线上最近点指向形心的单位向量，加上两块碎片共用的沿切割方向分量；
/// 再乘整体系数并除以质量，越重的碎片得到的冲量越小。
pub fn recoil_impulse(
    centroid: &Point2,
    mass: f64,
    line: &CutLine,
    along: &Vector2,
    config: &SlashConfig,
) -> (Vector2, Point2) {
    let origin = line.nearest_point(centroid);
    // 形心落在切割线上时没有远离方向
    let away = vector::try_unit(&(centroid - origin)).unwrap_or_else(Vector2::zeros);

    let direction = vector::add(
        &vector::scale(&away, config.separation_strength),
        &vector::scale(along, config.along_cut_strength),
    );
    let impulse = vector::scale(
        &direction,
        config.impulse_scale / mass.max(config.min_impulse_mass),
    );

    (impulse, origin)
}

/// 按面积比例分配父刚体质量
fn fragment_mass(parent: &BodySnapshot, piece: &Polygon, config: &SlashConfig) -> f64 {
    let parent_area = parent.vertices.area();
    if parent_area < EPSILON {
        return piece.area() * config.density;
    }
    parent.mass * piece.area() / parent_area
}

/// 由分割块生成碎片请求，碎片不满足存活条件时返回 `None`
///
/// `along` 为切割方向的单位向量，同一次分割的两块共用。
pub fn spawn_fragment(
    parent: &BodySnapshot,
    piece: Polygon,
    line: &CutLine,
    along: &Vector2,
    config: &SlashConfig,
) -> Option<FragmentSpawnRequest> {
    let mass = fragment_mass(parent, &piece, config);
    let survival = inherit_survival(&parent.survival, mass, config)?;

    let position = piece.centroid();
    let (impulse, impulse_origin) = recoil_impulse(&position, mass, line, along, config);

    let mut style = parent.style.clone();
    style.texture = parent
        .style
        .texture
        .as_ref()
        .map(|frame| frame.inherit(parent.angle, &parent.position, &position));

    Some(FragmentSpawnRequest {
        parent: parent.id,
        label: parent.label.clone(),
        anchor: piece.vertices()[0],
        vertices: piece,
        position,
        mass,
        style,
        material: parent.material,
        motion: parent.motion,
        survival,
        impulse,
        impulse_origin,
    })
}
