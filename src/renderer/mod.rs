//! Per-frame rendering
//!
//! One entry point, [`render_frame`], paints a whole frame from a
//! [`Snapshot`](crate::state::Snapshot) onto anything implementing
//! [`Surface`]. Two backends ship with the crate: a software framebuffer
//! ([`PixelSurface`]) and a command recorder ([`RecordingSurface`]) for
//! headless inspection.

pub mod bullet;
pub mod camera;
pub mod frame;
pub mod platform;
pub mod raster;
pub mod record;
pub mod status;
pub mod surface;

pub use camera::camera_transform;
pub use frame::render_frame;
pub use raster::PixelSurface;
pub use record::{Command, RecordingSurface};
pub use surface::{Color, Surface, colors, with_alpha};
