//! Process exit codes

/// Create and destroy both ran on the success path
pub const SUCCESS: u8 = 0;

/// Create returned non-success; `-1` as the platform reports it
pub const INIT_FAILED: u8 = 255;

/// Configuration could not be loaded (`EX_CONFIG`)
pub const CONFIG_ERROR: u8 = 78;
