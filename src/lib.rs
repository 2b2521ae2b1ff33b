// #![deny(missing_docs)]

//! Content-aware image shrinking by seam carving, using the
//! dual-gradient energy with wrap-around edges.

pub mod energy;
pub mod error;
pub mod flipper;
pub mod pixelgrid;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamengine;
pub mod seamfinder;
mod twodmap;

pub use error::CarveError;
pub use flipper::Axis;
pub use pixelgrid::{Pixel, PixelGrid};
pub use seamcarver::seamcarve;
pub use seamengine::{Seam, SeamEngine};
pub use seamfinder::SeamFinder;
