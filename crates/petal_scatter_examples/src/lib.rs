#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_field_to_png, render_flower_to_png, RenderConfig};
