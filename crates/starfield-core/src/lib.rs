//! Platform-free starfield engine.
//!
//! Everything here runs on the host: the web front-end supplies a drawing
//! surface ([`StrokeSurface`]) and a frame scheduler ([`FrameScheduler`]) and
//! forwards resize and pointer events into a [`Starfield`].

pub mod config;
pub mod constants;
pub mod error;
pub mod frame_loop;
pub mod input;
pub mod recycle;
pub mod render;
pub mod sim;
pub mod star;
pub mod surface;
pub mod velocity;

pub use config::*;
pub use error::*;
pub use frame_loop::*;
pub use input::*;
pub use recycle::*;
pub use render::*;
pub use sim::*;
pub use star::*;
pub use surface::*;
pub use velocity::*;
