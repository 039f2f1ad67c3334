//! Pointer-reactive element animation, independent of any presentation API.
//!
//! The web front-end plugs a canvas or DOM surface and a browser frame host
//! into [`Animator`]; everything here also runs natively for tests.

pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod influence;
pub mod sampler;
pub mod surface;

pub use config::*;
pub use constants::*;
pub use driver::*;
pub use error::*;
pub use glyph::*;
pub use grid::*;
pub use influence::*;
pub use sampler::*;
pub use surface::*;
