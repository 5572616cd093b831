//! Replays the bundled frame trace through a monitor and prints the summary
//! an overlay would show at the end of the run.

#![allow(
    unused_crate_dependencies,
    reason = "Examples don't use all dev-dependencies"
)]

use frametrack::prelude::*;

fn main() {
    let samples = load_frame_trace_from_csv("./data/frame_trace_60fps.csv");
    println!("replaying {} recorded frames", samples.len());

    let mut monitor =
        FrameMonitor::new(MonitorConfig::default()).expect("The default config is valid");
    for sample in samples {
        monitor.sample(sample);
    }

    let fps = monitor.fps();
    let cpu = monitor.cpu_time();
    let gpu = monitor.gpu_time();

    println!(
        "fps: avg {:.1}, 1% low {:.1}, 0.1% low {:.1} [{}]",
        fps.average(),
        fps.one_percent_low(),
        fps.zero_point_one_percent_low(),
        monitor.fps_severity(),
    );
    println!(
        "cpu: avg {:.1} ms, 1% high {:.1} ms, 0.1% high {:.1} ms [{}]",
        cpu.average_ms(),
        cpu.one_percent_high_ms(),
        cpu.zero_point_one_percent_high_ms(),
        monitor.cpu_severity(),
    );
    println!(
        "gpu: avg {:.1} ms, 1% high {:.1} ms, 0.1% high {:.1} ms [{}]",
        gpu.average_ms(),
        gpu.one_percent_high_ms(),
        gpu.zero_point_one_percent_high_ms(),
        monitor.gpu_severity(),
    );
    println!("overall: {}", monitor.overall_severity());
}
