//! 刚体集合
//!
//! 外部物理协作者的参考实现：持有刚体、分配标识，在生成碎片的同一帧施加冲量。
//! 不做物理步进。

use slashcut_core::body::{BodyId, BodySnapshot};
use slashcut_core::collaborator::{BodyConsumer, BodyProvider};
use slashcut_core::fragment::FragmentSpawnRequest;
use slashcut_core::math::{Point2, Rect};
use slashcut_core::polygon::center_of_bounding_rectangle;
use std::collections::BTreeMap;
use tracing::debug;

/// 刚体集合
#[derive(Debug, Clone)]
pub struct World {
    bodies: BTreeMap<BodyId, BodySnapshot>,
    next_id: u64,
}

impl World {
    pub fn new() -> Self {
        Self {
            bodies: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// 分配新的刚体标识
    pub fn allocate_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// 添加刚体，快照中的标识会被替换为新分配的标识
    pub fn add_body(&mut self, mut body: BodySnapshot) -> BodyId {
        let id = self.allocate_id();
        body.id = id;
        self.bodies.insert(id, body);
        id
    }

    /// 删除刚体
    pub fn remove_body(&mut self, id: &BodyId) -> Option<BodySnapshot> {
        self.bodies.remove(id)
    }

    /// 获取刚体
    pub fn get(&self, id: &BodyId) -> Option<&BodySnapshot> {
        self.bodies.get(id)
    }

    /// 按标识顺序遍历所有刚体
    pub fn iter(&self) -> impl Iterator<Item = &BodySnapshot> {
        self.bodies.values()
    }

    /// 刚体数量
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// 所有刚体面积之和
    pub fn total_area(&self) -> f64 {
        self.iter().map(|b| b.vertices.area()).sum()
    }

    /// 所有刚体质量之和
    pub fn total_mass(&self) -> f64 {
        self.iter().map(|b| b.mass).sum()
    }

    /// 所有刚体顶点的外接矩形
    pub fn bounds(&self) -> Option<Rect> {
        if self.bodies.is_empty() {
            return None;
        }
        Some(Rect::from_points(
            self.iter().flat_map(|b| b.vertices.vertices().iter()),
        ))
    }

    /// 整体平移，使各刚体位置的外接矩形中心落在 `target`
    pub fn center_at(&mut self, target: Point2) {
        let positions: Vec<Point2> = self.iter().map(|b| b.position).collect();
        if positions.is_empty() {
            return;
        }

        let offset = target - center_of_bounding_rectangle(&positions);
        for body in self.bodies.values_mut() {
            body.vertices = body.vertices.translated(&offset);
            body.position += offset;
        }
    }

    /// 由生成请求实例化刚体并施加冲量
    ///
    /// 请求中的冲量已按质量缩放，直接叠加到继承的速度上。
    fn instantiate(&mut self, fragment: FragmentSpawnRequest) -> BodyId {
        let id = self.allocate_id();

        let mut motion = fragment.motion;
        motion.velocity += fragment.impulse;

        let body = BodySnapshot {
            id,
            label: fragment.label,
            vertices: fragment.vertices,
            position: fragment.position,
            angle: 0.0,
            mass: fragment.mass,
            survival: fragment.survival,
            style: fragment.style,
            material: fragment.material,
            motion,
        };

        debug!(id = %id, parent = %fragment.parent, mass = body.mass, "fragment spawned");
        self.bodies.insert(id, body);
        id
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyProvider for World {
    fn bodies(&self) -> Vec<BodySnapshot> {
        self.bodies.values().cloned().collect()
    }
}

impl BodyConsumer for World {
    fn remove_bodies(&mut self, ids: &[BodyId]) {
        for id in ids {
            self.bodies.remove(id);
        }
    }

    fn spawn_fragments(&mut self, fragments: Vec<FragmentSpawnRequest>) {
        for fragment in fragments {
            self.instantiate(fragment);
        }
    }
}
