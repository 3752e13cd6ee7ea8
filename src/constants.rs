/// DOM and boot constants for the web front-end.
///
/// Simulation tuning lives in `spiderweb_core::constants`; only values that
/// describe the host page belong here.
// Canvas the animation draws into
pub const CANVAS_ID: &str = "spiderWebCanvas";

// Smallest backing-store dimension we ever set on the canvas
pub const MIN_BACKING_PX: u32 = 1;

// Console log level installed at boot
pub const LOG_LEVEL: log::Level = log::Level::Info;

// `document.readyState` while the HTML is still being parsed
pub const DOCUMENT_LOADING: &str = "loading";
