// Export main modules
mod field;
mod render;
pub mod wave;

// Re-export everything for public use
pub use field::{generate_wave_field, FieldParams, HeightField, WaveFieldError};
pub use render::{frame_path, render_height_field, save_frame, Colormap, RenderOptions};
pub use wave::{WaveComponent, WaveParameterSet};

pub mod prelude {
    pub use crate::field::{generate_wave_field, FieldParams, HeightField, WaveFieldError};
    pub use crate::render::{frame_path, render_height_field, save_frame, Colormap, RenderOptions};
    pub use crate::wave::{WaveComponent, WaveParameterSet};
}
