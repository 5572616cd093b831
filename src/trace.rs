use tracing::debug;

use crate::types::FrameSample;

const FPS_COL: usize = 0;
const CPU_MS_COL: usize = 1;
const GPU_MS_COL: usize = 2;

/// Load a recorded frame trace from a csv file. Used for replays, testing and
/// benchmarking.
///
/// # Panics
/// Panics when the file is missing or malformed; traces ship with the
/// repository and are trusted input.
pub fn load_frame_trace_from_csv(filename: &str) -> Vec<FrameSample> {
    let f = std::fs::File::open(filename).expect("Can open file");

    let mut r = csv::Reader::from_reader(f);

    // Make sure that the header matches what we are trying to parse.
    let head = r.headers().expect("CSV file has a header.");
    assert_eq!(&head[FPS_COL], "fps");
    assert_eq!(&head[CPU_MS_COL], "cpu_ms");
    assert_eq!(&head[GPU_MS_COL], "gpu_ms");

    let mut out = Vec::new();
    for record in r.records() {
        let row = record.expect("Can read record.");

        let fps: f32 = row[FPS_COL].parse().expect("Can parse fps");
        let cpu_time_ms: f32 = row[CPU_MS_COL].parse().expect("Can parse cpu_ms");
        let gpu_time_ms: f32 = row[GPU_MS_COL].parse().expect("Can parse gpu_ms");

        out.push(
            FrameSample::builder()
                .fps(fps)
                .cpu_time_ms(cpu_time_ms)
                .gpu_time_ms(gpu_time_ms)
                .build(),
        );
    }
    debug!("loaded {} frame samples from {filename}", out.len());

    out
}
