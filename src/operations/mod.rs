pub mod clip;
pub mod line_clip;
