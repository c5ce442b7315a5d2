//! Default tuning values for the animation core.
//!
//! These constants express intended behavior (baseline frame rate, spring
//! response, falloff shape) and keep magic numbers out of the simulation.

// Frame timing
pub const TARGET_FRAME_MS: f64 = 1000.0 / 30.0; // 30fps baseline frame
pub const MAX_DT_MULTIPLIER: f32 = 3.0; // cap after tab suspension

// Pointer
pub const OFFSCREEN_SENTINEL: f32 = -1000.0; // raw target when the pointer leaves
pub const OFFSCREEN_THRESHOLD: f32 = -500.0; // below this the cursor counts as gone

// Cursor spring
pub const SPRING_STIFFNESS: f32 = 0.03;
pub const SPRING_DAMPING: f32 = 0.65; // per baseline frame

// Grid illumination
pub const CELL_SIZE: f32 = 20.0;
pub const GAUSSIAN_SIGMA: f32 = 120.0;
pub const GAUSSIAN_RADIUS_SIGMAS: f32 = 3.0; // influence radius = sigma * 3
pub const QUADRATIC_RADIUS: f32 = 360.0;
pub const GRID_MAX_OPACITY: f32 = 0.1;
pub const GRID_MIN_OPACITY: f32 = 0.001;
pub const GRID_OPACITY_STEPS: u32 = 400;

// Particle generation ranges
pub const PARTICLE_BASE_RADIUS: (f32, f32) = (40.0, 100.0);
pub const PARTICLE_ANGULAR_SPEED: (f32, f32) = (0.005, 0.02); // sign chosen at random
pub const PARTICLE_SIZE: (f32, f32) = (1.0, 3.0);
pub const PARTICLE_OPACITY: (f32, f32) = (0.3, 0.8);
pub const PARTICLE_WOBBLE_SPEED: (f32, f32) = (0.02, 0.05);
pub const PARTICLE_WOBBLE_AMOUNT: (f32, f32) = (5.0, 20.0);

// Particle dynamics
pub const PARTICLE_INFLUENCE_RADIUS: f32 = 150.0;
pub const PARTICLE_REPULSION_STRENGTH: f32 = 2.0;
pub const PARTICLE_VELOCITY_DAMPING: f32 = 0.92; // per baseline frame
pub const PARTICLE_OFFSET_DAMPING: f32 = 0.95; // per baseline frame
pub const PARTICLE_OPACITY_STEPS: u32 = 10; // one decimal

// Pool sizes
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_COUNT_CONSTRAINED: usize = 15;

// Device classification
pub const CONSTRAINED_VIEWPORT_WIDTH: f32 = 768.0;
pub const MOBILE_UA_TOKENS: [&str; 5] = ["Mobi", "Android", "iPhone", "iPad", "iPod"];

// Diagnostics
pub const STATS_SAMPLE_CAPACITY: usize = 10;
