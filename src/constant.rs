use egui::Color32;

/// Application name and metadata constants
pub const APP_NAME: &str = "lockstep-diff";

// Preview inset, applied on both sides of each axis
pub const DEFAULT_X_MARGIN: f32 = 4.0;
pub const DEFAULT_Y_MARGIN: f32 = 4.0;

// Preview colours
pub const UNCHANGED_COLOR: Color32 = Color32::from_rgb(160, 160, 160);
pub const INSERTED_COLOR: Color32 = Color32::from_rgb(0, 150, 0);
pub const DELETED_COLOR: Color32 = Color32::from_rgb(190, 0, 0);
pub const LHS_PADDING_COLOR: Color32 = Color32::from_rgb(230, 230, 230);
pub const RHS_PADDING_COLOR: Color32 = Color32::from_rgb(200, 220, 255);
