// Pacing, pointer and particle tuning shared by the core modules.

// Simulation clock increment per accepted frame (not wall time)
pub const SIM_STEP: f64 = 0.016;

// Observed-fps diagnostic is recomputed every N accepted frames
pub const FPS_SAMPLE_FRAMES: u64 = 60;

// Auto-rotate path: center + amplitude * (sin(fx * t), cos(fy * t))
pub const AUTO_ROTATE_CENTER: f32 = 0.5;
pub const AUTO_ROTATE_AMPLITUDE: f32 = 0.3;
pub const AUTO_ROTATE_FREQ_X: f64 = 0.3;
pub const AUTO_ROTATE_FREQ_Y: f64 = 0.2;
pub const AUTO_ROTATE_IDLE_MS: f64 = 3000.0; // wall time without input before auto-rotate re-arms

// Aggressive variant scene cycling
pub const AUTO_CYCLE_SIM_SECS: f64 = 8.0; // sim time between automatic advances
pub const IDLE_REVERT_MS: f64 = 5000.0; // wall time without pointer movement before cycling resumes

// Conservative fallbacks for absent device signals
pub const DEFAULT_CORES: u32 = 2;
pub const DEFAULT_MEMORY_GB: f64 = 4.0;
pub const DEFAULT_PIXEL_RATIO: f64 = 1.0;

// Particles
pub const PARTICLE_STEER: f32 = 0.05; // radians per frame at full horizontal deflection
pub const PARTICLE_SPEED_MIN: f32 = 0.6;
pub const PARTICLE_SPEED_MAX: f32 = 2.4;
pub const PARTICLE_DECAY_MIN: f32 = 0.002;
pub const PARTICLE_DECAY_MAX: f32 = 0.012;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 4.0;
pub const PARTICLE_LINK_DISTANCE: f32 = 80.0; // px
