use crate::dataset::{Dataset, DatasetError};
use crate::domain::constants::MAX_SIMULATION_FRAMES;
use crate::domain::models::SimulationFrame;
use crate::domain::records::FloodScenario;

/// Cursor over the precomputed breach scenario sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    index: usize,
    len: usize,
}

impl Playback {
    pub fn new(len: usize) -> Result<Self, DatasetError> {
        if len == 0 {
            return Err(DatasetError::EmptySimulation);
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves to the next step, wrapping back to the first after the last.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Jumps to `step`, clamped to the last step.
    pub fn seek(&mut self, step: usize) -> usize {
        self.index = step.min(self.len - 1);
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Position along the timeline in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.len <= 1 {
            return 0.0;
        }
        self.index as f64 / (self.len - 1) as f64
    }
}

fn frame(playback: &Playback, scenario: &FloodScenario) -> SimulationFrame {
    SimulationFrame {
        index: playback.index(),
        total: playback.len,
        label: scenario.label.clone(),
        minutes: scenario.minutes,
        progress: (playback.progress() * 1000.0).round() / 1000.0,
        breach_progress: scenario.breach_progress,
        affected_area_km2: scenario.affected_area_km2,
        flood_depth_m: scenario.flood_depth_m,
        affected_settlements: scenario.affected_settlements.clone(),
        affected_population: scenario.affected_population,
    }
}

/// `count` consecutive frames starting at `start`, wrapping like the
/// dashboard's play button.
pub fn frames(dataset: &Dataset, start: usize, count: usize) -> anyhow::Result<Vec<SimulationFrame>> {
    let scenarios = &dataset.simulation.scenarios;
    let mut playback = Playback::new(scenarios.len())?;
    if start >= scenarios.len() {
        return Err(DatasetError::StepOutOfRange {
            step: start,
            len: scenarios.len(),
        }
        .into());
    }
    if count > MAX_SIMULATION_FRAMES {
        anyhow::bail!(
            "frame count {} exceeds the limit of {}",
            count,
            MAX_SIMULATION_FRAMES
        );
    }
    playback.seek(start);

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        if i > 0 {
            playback.advance();
        }
        out.push(frame(&playback, &scenarios[playback.index()]));
    }
    Ok(out)
}
