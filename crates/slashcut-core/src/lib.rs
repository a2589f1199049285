//! SlashCut 核心几何引擎
//!
//! 用一条直线切开任意简单多边形，计算碎片形状、存活与反冲冲量。
//!
//! # 架构设计
//!
//! 自底向上：
//! - `vector` / `intersect`: 向量运算与求交
//! - `polygon` / `split`: 多边形查询与直线分割
//! - `fragment`: 碎片的属性继承、存活判定和冲量
//! - `slash`: 编排一次切割，输出 `{add, remove, stay}` 与切痕
//!
//! 引擎不模拟运动，物理世界与渲染通过 `collaborator` 中的 trait 注入。
//!
//! # 示例
//!
//! ```rust
//! use slashcut_core::prelude::*;
//!
//! let square = Polygon::rectangle(0.0, 0.0, 10.0, 10.0);
//! let body = BodySnapshot::from_polygon(BodyId(1), square, 0.1);
//!
//! let engine = SlashEngine::default();
//! let outcome = engine.apply_slash(&[body], Point2::new(5.0, -5.0), Point2::new(5.0, 15.0));
//! assert_eq!(outcome.result.add.len(), 2);
//! ```

pub mod body;
pub mod collaborator;
pub mod config;
pub mod error;
pub mod fragment;
pub mod intersect;
pub mod line;
pub mod math;
pub mod polygon;
pub mod properties;
pub mod slash;
pub mod split;
pub mod transform;
pub mod vector;

pub use error::SlashError;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::body::{BodyId, BodySnapshot, SurvivalPolicy};
    pub use crate::collaborator::{BodyConsumer, BodyProvider, CutMarkSink};
    pub use crate::config::SlashConfig;
    pub use crate::error::SlashError;
    pub use crate::fragment::FragmentSpawnRequest;
    pub use crate::line::CutLine;
    pub use crate::math::{Point2, Rect, Vector2};
    pub use crate::polygon::{Polygon, Winding};
    pub use crate::properties::{Color, Material, Motion, RenderStyle, TextureFrame};
    pub use crate::slash::{DecayingCutMark, SlashEngine, SlashOutcome, SlashSummary, SplitResult};
    pub use crate::split::SplitOutcome;
}
