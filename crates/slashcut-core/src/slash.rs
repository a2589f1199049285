//! 切割编排
//!
//! 对一组刚体快照执行一次切割，输出 `{add, remove, stay}` 划分和一条衰减切痕。
//! 单线程同步执行，返回之前调用方看不到任何中间状态。

use crate::body::{BodyId, BodySnapshot};
use crate::collaborator::{BodyConsumer, BodyProvider, CutMarkSink};
use crate::config::SlashConfig;
use crate::error::SlashError;
use crate::fragment::{spawn_fragment, FragmentSpawnRequest};
use crate::line::CutLine;
use crate::math::Point2;
use crate::split::SplitOutcome;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 一次切割后的刚体划分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    /// 需要新建的碎片
    pub add: Vec<FragmentSpawnRequest>,
    /// 被切开、需要移除的刚体
    pub remove: Vec<BodySnapshot>,
    /// 未受影响的刚体
    pub stay: Vec<BodySnapshot>,
}

impl SplitResult {
    pub fn removed_ids(&self) -> Vec<BodyId> {
        self.remove.iter().map(|body| body.id).collect()
    }

    /// 因存活策略被淘汰的碎片数
    pub fn discarded(&self) -> usize {
        (self.remove.len() * 2).saturating_sub(self.add.len())
    }
}

/// 逐帧衰减的切痕
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayingCutMark {
    pub start: Point2,
    pub end: Point2,
    pub remaining_ticks: u32,
}

impl DecayingCutMark {
    /// 沿切割方向向两端各延伸 `reach`，切割线退化时返回 `None`
    pub fn extended(line: &CutLine, reach: f64, ticks: u32) -> Option<Self> {
        let dir = line.direction()?;
        Some(Self {
            start: line.p - dir * reach,
            end: line.q + dir * reach,
            remaining_ticks: ticks,
        })
    }

    pub fn is_alive(&self) -> bool {
        self.remaining_ticks > 0
    }

    /// 消耗一帧，返回是否仍需保留
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.is_alive()
    }
}

/// 切割结果
#[derive(Debug, Clone, PartialEq)]
pub struct SlashOutcome {
    pub result: SplitResult,
    pub mark: Option<DecayingCutMark>,
}

/// 作用到协作者之后的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlashSummary {
    pub removed: usize,
    pub spawned: usize,
    pub discarded: usize,
    pub stayed: usize,
}

/// 切割引擎
///
/// 只持有策略参数，调用之间不保留任何几何状态。
#[derive(Debug, Clone, Default)]
pub struct SlashEngine {
    config: SlashConfig,
}

impl SlashEngine {
    pub fn new(config: SlashConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SlashConfig {
        &self.config
    }

    /// 检查手势给出的切割线是否可用
    pub fn validate_cut(&self, p1: Point2, p2: Point2) -> Result<CutLine, SlashError> {
        let line = CutLine::new(p1, p2);
        if line.is_degenerate() {
            return Err(SlashError::DegenerateInput);
        }

        let length = line.length();
        if length <= self.config.min_slash_length {
            return Err(SlashError::SlashTooShort {
                length,
                min: self.config.min_slash_length,
            });
        }

        Ok(line)
    }

    /// 用 `p1 → p2` 切割所有刚体
    ///
    /// 切割线退化时所有刚体保持不变且不产生切痕。
    pub fn apply_slash(&self, bodies: &[BodySnapshot], p1: Point2, p2: Point2) -> SlashOutcome {
        let line = CutLine::new(p1, p2);
        let Some(along) = line.direction() else {
            debug!("degenerate cut line, nothing to split");
            return SlashOutcome {
                result: SplitResult {
                    stay: bodies.to_vec(),
                    ..Default::default()
                },
                mark: None,
            };
        };

        let mut result = SplitResult::default();
        for body in bodies {
            match body.vertices.split_by_line(&line) {
                SplitOutcome::Split(pieces) => {
                    result.remove.push(body.clone());
                    for piece in pieces {
                        match spawn_fragment(body, piece, &line, &along, &self.config) {
                            Some(fragment) => result.add.push(fragment),
                            None => debug!(body = %body.id, "fragment discarded by survival policy"),
                        }
                    }
                }
                SplitOutcome::NoCrossing => result.stay.push(body.clone()),
                other => {
                    debug!(body = %body.id, outcome = ?other, "cut not applied");
                    result.stay.push(body.clone());
                }
            }
        }

        let mark = DecayingCutMark::extended(
            &line,
            self.config.cut_mark_reach(),
            self.config.cut_mark_ticks,
        );

        SlashOutcome { result, mark }
    }

    /// 对注入的协作者执行一次完整切割
    ///
    /// 先校验切割线，再读取快照、计算划分，最后依次移除、生成并推送切痕。
    pub fn slash_world<W, M>(
        &self,
        world: &mut W,
        marks: &mut M,
        p1: Point2,
        p2: Point2,
    ) -> Result<SlashSummary, SlashError>
    where
        W: BodyProvider + BodyConsumer,
        M: CutMarkSink,
    {
        self.validate_cut(p1, p2)?;

        let bodies = world.bodies();
        let SlashOutcome { result, mark } = self.apply_slash(&bodies, p1, p2);

        let summary = SlashSummary {
            removed: result.remove.len(),
            spawned: result.add.len(),
            discarded: result.discarded(),
            stayed: result.stay.len(),
        };

        world.remove_bodies(&result.removed_ids());
        world.spawn_fragments(result.add);
        if let Some(mark) = mark {
            marks.push_cut_mark(mark);
        }

        info!(
            removed = summary.removed,
            spawned = summary.spawned,
            discarded = summary.discarded,
            stayed = summary.stayed,
            "slash applied"
        );

        Ok(summary)
    }
}
