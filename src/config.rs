//! Application-level UI constants.

// Headings and labels
pub const APP_TITLE: &str = "Digital Timer";
pub const LIMIT_LABEL: &str = "Set Timer Limit";
pub const START_LABEL: &str = "Start";
pub const PAUSE_LABEL: &str = "Pause";
pub const RESET_LABEL: &str = "Reset";

// Control icons
pub const PLAY_ICON_URL: &str = "https://assets.ccbp.in/frontend/react-js/play-icon-img.png";
pub const PAUSE_ICON_URL: &str = "https://assets.ccbp.in/frontend/react-js/pause-icon-img.png";
pub const RESET_ICON_URL: &str = "https://assets.ccbp.in/frontend/react-js/reset-icon-img.png";
pub const PLAY_ICON_ALT: &str = "play icon";
pub const PAUSE_ICON_ALT: &str = "pause icon";
pub const RESET_ICON_ALT: &str = "reset icon";
