// DOM contract: the ids, classes, and selectors the page markup provides.

// Overlay and control ids
pub const ID_CHOICE_OVERLAY: &str = "choiceOverlay";
pub const ID_SUCCESS_OVERLAY: &str = "successOverlay";
pub const ID_BTN_YES: &str = "btnYes";
pub const ID_BTN_NO: &str = "btnNo";
pub const ID_FIREWORKS_CANVAS: &str = "fireworksCanvas";

// Class names
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_GROW: &str = "grow"; // on the affirmative control while scaled up
pub const CLASS_LOADING: &str = "loading"; // on <body> until the grid reveal
pub const CLASS_TILE: &str = "tile tile--media";

// CSS custom property carrying the affirmative control's scale
pub const VAR_YES_SCALE: &str = "--yes-scale";

// Background grid structure
pub const SEL_GRID_COLUMNS: &str = ".bg-grid .column";
pub const SEL_COLUMN_INNER: &str = ".column-inner";
pub const SEL_GRID_MEDIA: &str = ".bg-grid img, .bg-grid video";

// Page-supplied global holding the media descriptor array
pub const MEDIA_DATA_GLOBAL: &str = "mediaData";
