//! 切痕列表

use slashcut_core::collaborator::CutMarkSink;
use slashcut_core::slash::DecayingCutMark;

/// 逐帧衰减的切痕集合
#[derive(Debug, Clone, Default)]
pub struct CutMarkList {
    marks: Vec<DecayingCutMark>,
}

impl CutMarkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前需要绘制的切痕
    pub fn visible(&self) -> &[DecayingCutMark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// 推进一帧，剩余帧数归零的切痕被移除
    pub fn tick(&mut self) {
        self.marks.retain_mut(|mark| mark.tick());
    }
}

impl CutMarkSink for CutMarkList {
    fn push_cut_mark(&mut self, mark: DecayingCutMark) {
        self.marks.push(mark);
    }
}
