//! 刚体透传属性
//!
//! 渲染样式、材质和运动状态都由外部协作者解释，引擎只在分割时原样复制给碎片。

use crate::math::{Point2, Rect, Vector2};
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};

/// RGBA颜色
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 从十六进制值创建（如 0xFF0000 表示红色）
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    pub const RED: Color = Color::new(255, 0, 0);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const GREEN: Color = Color::new(0, 128, 0);
    pub const SLATE: Color = Color::from_hex(0x223344);
    pub const TRANSPARENT: Color = Color::with_alpha(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::SLATE
    }
}

/// 纹理参考系
///
/// `rect` 的 `(x, y)` 为刚体位置相对纹理矩形中心的偏移（在参考角度下），
/// 宽高为纹理绘制尺寸；`angle` 为纹理相对刚体的参考角度。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureFrame {
    /// 纹理标识，由渲染协作者解释
    pub texture: String,
    pub rect: Rect,
    pub angle: f64,
}

impl TextureFrame {
    /// 以顶点外接矩形作为纹理范围
    pub fn fit(texture: impl Into<String>, vertices: &[Point2], position: &Point2) -> Self {
        let bounds = Rect::from_points(vertices);
        let offset = position - bounds.center();
        Self {
            texture: texture.into(),
            rect: Rect::new(offset.x, offset.y, bounds.width, bounds.height),
            angle: 0.0,
        }
    }

    /// 碎片继承父刚体的纹理参考系
    ///
    /// 参考角度累加父刚体当前角度，位置差按新的参考角度反向旋转后计入偏移。
    pub fn inherit(
        &self,
        parent_angle: f64,
        parent_position: &Point2,
        child_position: &Point2,
    ) -> Self {
        let angle = self.angle + parent_angle;
        let delta = Transform2D::rotation(angle)
            .inverse()
            .transform_vector(&(child_position - parent_position));
        Self {
            texture: self.texture.clone(),
            rect: self.rect.translated(&delta),
            angle,
        }
    }
}

/// 渲染样式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
    pub texture: Option<TextureFrame>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fill: Color::default(),
            stroke: Color::TRANSPARENT,
            line_width: 1.0,
            texture: None,
        }
    }
}

/// 材质（摩擦与弹性）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub friction: f64,
    pub friction_air: f64,
    pub restitution: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            friction: 0.1,
            friction_air: 0.0,
            restitution: 0.0,
        }
    }
}

/// 瞬时运动状态，碎片原样继承
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Motion {
    pub velocity: Vector2,
    pub angular_velocity: f64,
    /// 上一步到当前位置的位移
    pub position_delta: Vector2,
}

impl Motion {
    /// 速率
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}
