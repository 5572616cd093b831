//! Simulates a render loop and prints the overlay readout a few times per
//! second, the way a game would draw it in a corner of the screen.

#![allow(
    unused_crate_dependencies,
    reason = "Examples don't use all dev-dependencies"
)]

use frametrack::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

fn main() {
    let mut monitor =
        FrameMonitor::new(MonitorConfig::default()).expect("The default config is valid");
    let mut trigger = RefreshTrigger::new(4).expect("The refresh rate is positive");

    let fps_text = IntTextCache::new(0, 2000).expect("The range is not empty");
    let ms_text = TenthsTextCache::new(0.0, 100.0).expect("The range is not empty");

    let mut rng = SmallRng::seed_from_u64(0);

    // Twelve simulated seconds of a mostly-60-fps game with periodic hitches.
    for frame in 1..=720_u32 {
        let delta = if frame % 97 == 0 {
            rng.random_range(0.050..0.120)
        } else {
            rng.random_range(0.015..0.019)
        };
        let cpu_ms = delta * 1_000.0 * rng.random_range(0.6..0.75);
        let gpu_ms = delta * 1_000.0 * rng.random_range(0.5..0.65);
        monitor.sample(FrameSample::from_frame_delta(delta, cpu_ms, gpu_ms));

        if let Some(stats) = trigger.register_frame(delta) {
            let fps = monitor.fps();
            let cpu = monitor.cpu_time();
            let gpu = monitor.gpu_time();
            println!(
                "[{}] {} fps (avg {}, 1% low {}) | cpu {} ms | gpu {} ms",
                monitor.overall_severity(),
                fps_text.get(stats.fps().round() as i32),
                fps_text.get(fps.average().round() as i32),
                fps_text.get(fps.one_percent_low().round() as i32),
                ms_text.get(cpu.average_ms()),
                ms_text.get(gpu.average_ms()),
            );
        }
    }

    let fps = monitor.fps();
    println!(
        "\nsession: avg {:.1} fps, 1% low {:.1} fps, 0.1% low {:.1} fps over the last {} frames",
        fps.average(),
        fps.one_percent_low(),
        fps.zero_point_one_percent_low(),
        monitor.sampled_frames(),
    );
}
