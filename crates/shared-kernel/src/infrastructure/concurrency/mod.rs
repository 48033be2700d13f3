mod wave_plan;

pub use wave_plan::WavePlan;
