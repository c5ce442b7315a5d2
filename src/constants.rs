// DOM hooks and front-end tuning shared by the web modules.

// Element ids
pub const CANVAS_ID: &str = "interactiveCanvas";
pub const ANCHOR_ID: &str = "logoWrapper";
pub const STATS_OVERLAY_ID: &str = "stats-overlay";

// Interval between ticks; matches the 30fps baseline frame
pub const TICK_INTERVAL_MS: i32 = 33;

// Keys that toggle the stats overlay
pub const STATS_TOGGLE_KEYS: [&str; 2] = ["`", "~"];

// Stats overlay placement and look
pub const STATS_OVERLAY_STYLE: &str = "position:fixed;left:8px;bottom:8px;z-index:9999;\
padding:6px 10px;border-radius:6px;background:rgba(10,14,24,0.8);color:#cfe7ff;\
font:12px ui-monospace,monospace;pointer-events:none";
