//! JSON场景文件
//!
//! 格式：
//! ```json
//! {
//!   "config": { "min_slash_length": 5.0 },
//!   "center": [200.0, 200.0],
//!   "bodies": [{ "vertices": [[0, 0], [10, 0], [10, 10], [0, 10]] }],
//!   "slashes": [[[5, -5], [5, 15]]]
//! }
//! ```
//!
//! `config` 缺省字段取默认值；`center` 给出时整组刚体平移到该点。

use crate::error::SceneError;
use crate::scene::Scene;
use serde::{Deserialize, Serialize};
use slashcut_core::body::{BodyId, BodySnapshot, SurvivalPolicy};
use slashcut_core::config::SlashConfig;
use slashcut_core::math::{Point2, EPSILON};
use slashcut_core::polygon::Polygon;
use slashcut_core::properties::{Color, Material, Motion, RenderStyle, TextureFrame};
use std::path::Path;
use tracing::{info, warn};

/// 场景中的一个刚体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    #[serde(default)]
    pub label: String,
    pub vertices: Vec<Point2>,
    /// 缺省时按面积乘密度计算
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub survival: SurvivalPolicy,
    #[serde(default)]
    pub style: RenderStyle,
    #[serde(default)]
    pub material: Material,
    #[serde(default)]
    pub motion: Motion,
    /// 纹理标识，给出时按顶点外接矩形建立纹理参考系
    #[serde(default)]
    pub texture: Option<String>,
}

impl BodySpec {
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self {
            label: String::new(),
            vertices,
            mass: None,
            angle: 0.0,
            survival: SurvivalPolicy::default(),
            style: RenderStyle::default(),
            material: Material::default(),
            motion: Motion::default(),
            texture: None,
        }
    }

    /// 转换为刚体快照，标识由世界重新分配
    fn into_snapshot(self, index: usize, density: f64) -> Result<BodySnapshot, SceneError> {
        let polygon =
            Polygon::new(self.vertices).map_err(|source| SceneError::InvalidBody { index, source })?;

        let mut body = BodySnapshot::from_polygon(BodyId(0), polygon, density)
            .with_label(self.label)
            .with_survival(self.survival)
            .with_material(self.material)
            .with_motion(self.motion);
        if let Some(mass) = self.mass {
            body = body.with_mass(mass);
        }
        body.angle = self.angle;

        let mut style = self.style;
        if let Some(texture) = self.texture {
            style.texture = Some(TextureFrame::fit(
                texture,
                body.vertices.vertices(),
                &body.position,
            ));
        }
        Ok(body.with_style(style))
    }
}

/// 场景文件
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub config: SlashConfig,
    #[serde(default)]
    pub center: Option<Point2>,
    pub bodies: Vec<BodySpec>,
    /// 按顺序回放的切割
    #[serde(default)]
    pub slashes: Vec<[Point2; 2]>,
}

impl SceneFile {
    /// 从文件读取
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let file = Self::from_json(&json)?;
        info!(path = %path.display(), bodies = file.bodies.len(), "scene loaded");
        Ok(file)
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 默认场景：场地中央一个边长为场地短边一半的方块
    pub fn demo() -> Self {
        let config = SlashConfig::default();
        let size = config.field_width.min(config.field_height) * 0.5;
        let center = Point2::new(config.field_width / 2.0, config.field_height / 2.0);

        let block = Polygon::rectangle(0.0, 0.0, size, size);
        let mut spec = BodySpec::new(block.into_vertices());
        spec.label = "block".to_string();
        spec.style = RenderStyle {
            fill: Color::GREEN,
            stroke: Color::RED,
            line_width: 3.0,
            texture: None,
        };
        spec.material = Material {
            friction: 0.1,
            friction_air: 0.0,
            restitution: 0.6,
        };

        Self {
            config,
            center: Some(center),
            bodies: vec![spec],
            slashes: vec![
                [Point2::new(200.0, 50.0), Point2::new(200.0, 350.0)],
                [Point2::new(50.0, 200.0), Point2::new(350.0, 200.0)],
                [Point2::new(60.0, 60.0), Point2::new(340.0, 340.0)],
                // 过短，被拒绝
                [Point2::new(10.0, 10.0), Point2::new(12.0, 12.0)],
            ],
        }
    }

    /// 构建场景，面积为零的刚体被跳过
    pub fn build(self) -> Result<Scene, SceneError> {
        let mut scene = Scene::new(self.config);
        let density = scene.engine().config().density;

        for (index, spec) in self.bodies.into_iter().enumerate() {
            let body = spec.into_snapshot(index, density)?;
            if body.vertices.area() < EPSILON {
                warn!(index, "body has zero area, skipped");
                continue;
            }
            scene.world_mut().add_body(body);
        }

        if let Some(center) = self.center {
            scene.world_mut().center_at(center);
        }

        Ok(scene)
    }
}
