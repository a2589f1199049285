//! 外部协作者接口
//!
//! 物理世界和渲染层通过这些 trait 在每次调用时注入切割引擎，引擎自身不持有任何状态。

use crate::body::{BodyId, BodySnapshot};
use crate::fragment::FragmentSpawnRequest;
use crate::slash::DecayingCutMark;

/// 提供当前刚体快照
pub trait BodyProvider {
    fn bodies(&self) -> Vec<BodySnapshot>;
}

/// 接收切割结果
///
/// 实现方必须在加入碎片的同一帧施加请求中的冲量，并沿用继承的运动状态。
pub trait BodyConsumer {
    fn remove_bodies(&mut self, ids: &[BodyId]);
    fn spawn_fragments(&mut self, fragments: Vec<FragmentSpawnRequest>);
}

/// 接收需要绘制的切痕
pub trait CutMarkSink {
    fn push_cut_mark(&mut self, mark: DecayingCutMark);
}
