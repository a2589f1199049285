//! 场景
//!
//! 把切割引擎、刚体集合和切痕列表组合在一起，由驱动程序逐帧推进。

use crate::error::SceneError;
use crate::file::SceneFile;
use crate::marks::CutMarkList;
use crate::world::World;
use slashcut_core::config::SlashConfig;
use slashcut_core::math::Point2;
use slashcut_core::slash::{SlashEngine, SlashSummary};
use std::path::Path;

/// 可切割的场景
#[derive(Debug, Clone, Default)]
pub struct Scene {
    engine: SlashEngine,
    world: World,
    marks: CutMarkList,
    /// 已推进的帧数
    ticks: u64,
}

impl Scene {
    pub fn new(config: SlashConfig) -> Self {
        Self {
            engine: SlashEngine::new(config),
            world: World::new(),
            marks: CutMarkList::new(),
            ticks: 0,
        }
    }

    /// 从场景文件构建，不回放其中的切割
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        SceneFile::load(path)?.build()
    }

    pub fn engine(&self) -> &SlashEngine {
        &self.engine
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn marks(&self) -> &CutMarkList {
        &self.marks
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// 执行一次切割
    pub fn slash(&mut self, p1: Point2, p2: Point2) -> Result<SlashSummary, SceneError> {
        Ok(self
            .engine
            .slash_world(&mut self.world, &mut self.marks, p1, p2)?)
    }

    /// 推进一帧
    pub fn tick(&mut self) {
        self.marks.tick();
        self.ticks += 1;
    }
}
