// Tuning constants for the choice interaction, the celebration, and the
// background grid. Params structs in the sibling modules default from these.

// Dismissive-control evasion
pub const RUN_AWAY_DISTANCE: f32 = 120.0; // pointer distance that triggers repulsion
pub const PUSH_OVERSHOOT: f32 = 80.0; // extra push past the trigger radius, avoids edge-hugging
pub const EDGE_PADDING: f32 = 20.0; // gap kept between the control and the viewport edges
pub const NO_LERP: f32 = 0.18; // per-frame interpolation toward the target, 0..1 (higher = snappier)

// Affirmative-control growth
pub const NEAR_NO_DISTANCE: f32 = 180.0; // distance at which growth starts
pub const YES_GROW_MIN: f32 = 1.0; // resting scale
pub const YES_GROW_MAX: f32 = 2.2; // scale when the pointer reaches the dismissive control

// Celebration bursts
pub const FIREWORKS_PALETTE: [&str; 6] =
    ["#e74c3c", "#f39c12", "#e91e63", "#ff5722", "#CFA26F", "#fff"];
pub const BURST_COUNT_MIN: usize = 80;
pub const BURST_COUNT_SPAN: usize = 40; // 80..=119 particles per burst
pub const BURST_SPEED_MIN: f32 = 2.0; // units per frame
pub const BURST_SPEED_SPAN: f32 = 4.0;
pub const PARTICLE_RADIUS_MIN: f32 = 2.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 3.0;
pub const PARTICLE_DECAY_MIN: f32 = 0.008; // life units per frame
pub const PARTICLE_DECAY_SPAN: f32 = 0.010;
pub const PARTICLE_GRAVITY: f32 = 0.08; // added to vy each frame

// Burst origins stay inside the central region of the viewport
pub const BURST_REGION_X_MIN: f32 = 0.2;
pub const BURST_REGION_X_SPAN: f32 = 0.6;
pub const BURST_REGION_Y_MIN: f32 = 0.2;
pub const BURST_REGION_Y_SPAN: f32 = 0.5;

// Celebration schedule (milliseconds)
pub const BURST_INTERVAL_MS: u32 = 600;
pub const BURST_WINDOW_MS: u32 = 5_000; // no bursts at or after this
pub const DRAIN_GRACE_MS: u32 = 4_000; // forced clear this long after the window closes

// Background grid
pub const GRID_MOBILE_BREAKPOINT: f32 = 768.0; // widths at or below this get the mobile column count
pub const GRID_COLUMNS_MOBILE: usize = 3;
pub const GRID_COLUMNS_DESKTOP: usize = 5;
pub const FIRST_BATCH_ROWS: usize = 4; // reveal waits on columns * this many media elements
pub const REVEAL_TIMEOUT_MS: u32 = 6_000; // reveal regardless after this
