//! SlashCut 场景
//!
//! 切割引擎外部协作者的内存实现：
//! - `World`: 刚体集合，移除被切开的刚体并生成带冲量的碎片
//! - `CutMarkList`: 逐帧衰减的切痕
//! - `SceneFile`: JSON 场景加载

pub mod error;
pub mod file;
pub mod marks;
pub mod scene;
pub mod world;

pub use error::SceneError;
pub use file::{BodySpec, SceneFile};
pub use marks::CutMarkList;
pub use scene::Scene;
pub use world::World;
