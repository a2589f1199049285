//! SlashCut 无界面驱动程序
//!
//! 加载场景（缺省为内置示例），按顺序回放其中的切割，推进切痕直到全部消失。
//!
//! 用法：`slashcut [scene.json]`

use anyhow::{Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use slashcut_core::slash::SlashSummary;
use slashcut_scene::{Scene, SceneFile};

/// 两次切割之间推进的帧数
const FRAMES_BETWEEN_SLASHES: u32 = 20;

fn load_scene_file() -> Result<SceneFile> {
    match std::env::args().nth(1) {
        Some(path) => SceneFile::load(&path).with_context(|| format!("failed to load scene {path}")),
        None => {
            info!("no scene given, using demo");
            Ok(SceneFile::demo())
        }
    }
}

fn log_summary(index: usize, summary: &SlashSummary) {
    info!(
        slash = index,
        removed = summary.removed,
        spawned = summary.spawned,
        discarded = summary.discarded,
        stayed = summary.stayed,
        "slash replayed"
    );
}

fn log_world(scene: &Scene) {
    let world = scene.world();
    info!(
        bodies = world.len(),
        area = world.total_area(),
        mass = world.total_mass(),
        ticks = scene.ticks(),
        "world state"
    );
    for body in world.iter() {
        info!(
            id = %body.id,
            label = %body.label,
            vertices = body.vertices.len(),
            area = body.vertices.area(),
            x = body.position.x,
            y = body.position.y,
            vx = body.motion.velocity.x,
            vy = body.motion.velocity.y,
            "body"
        );
    }
}

fn main() -> Result<()> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    info!("Starting SlashCut...");

    let file = load_scene_file()?;
    let slashes = file.slashes.clone();
    let mut scene = file.build().context("failed to build scene")?;
    log_world(&scene);

    for (index, [p1, p2]) in slashes.into_iter().enumerate() {
        match scene.slash(p1, p2) {
            Ok(summary) => log_summary(index, &summary),
            Err(e) => warn!(slash = index, error = %e, "slash rejected"),
        }
        for _ in 0..FRAMES_BETWEEN_SLASHES {
            scene.tick();
        }
    }

    while !scene.marks().is_empty() {
        scene.tick();
    }

    log_world(&scene);
    Ok(())
}
