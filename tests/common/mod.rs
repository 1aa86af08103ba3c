// Recording fakes for the drawing and audio capabilities.

#![allow(dead_code)]

use glam::DVec2;
use plasma_web::core::{
    AudioCue, DrawingSurface, ManualClock, MemoryStore, PlasmaApp, Rgba, Stroke,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Fill { origin: DVec2, size: DVec2, color: Rgba },
    Line { from: DVec2, to: DVec2, stroke: Stroke },
}

#[derive(Debug)]
pub struct RecordingSurface {
    pub extent: DVec2,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(w: f64, h: f64) -> Self {
        Self {
            extent: DVec2::new(w, h),
            ops: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<&Stroke> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { stroke, .. } => Some(stroke),
                _ => None,
            })
            .collect()
    }

    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Clear)).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> DVec2 {
        self.extent
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgba) {
        self.ops.push(Op::Fill {
            origin,
            size,
            color,
        });
    }
    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: &Stroke) {
        self.ops.push(Op::Line {
            from,
            to,
            stroke: *stroke,
        });
    }
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub zaps: usize,
    pub hum_plays: usize,
    pub hum_pauses: usize,
    pub volume: Option<f64>,
}

impl AudioCue for RecordingAudio {
    fn play_zap(&mut self) {
        self.zaps += 1;
    }
    fn play_hum(&mut self) {
        self.hum_plays += 1;
    }
    fn pause_hum(&mut self) {
        self.hum_pauses += 1;
    }
    fn set_hum_volume(&mut self, volume: f64) {
        self.volume = Some(volume);
    }
}

pub type TestApp = PlasmaApp<RecordingSurface, RecordingAudio, MemoryStore, ManualClock>;

/// 1000x1000 surface (center 500,500), clock at t=0.
pub fn make_app(prefs: MemoryStore, clock: &ManualClock) -> TestApp {
    PlasmaApp::start(
        RecordingSurface::new(1000.0, 1000.0),
        RecordingAudio::default(),
        prefs,
        clock.clone(),
        42,
    )
}
