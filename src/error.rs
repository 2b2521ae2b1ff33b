use failure::Fail;

/// What can go wrong when asking for a carve.  Anything else (a seam
/// that does not fit its image, a coordinate off the edge) is a bug in
/// the caller and panics instead.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum CarveError {
    /// Seam carving only ever removes pixels.
    #[fail(
        display = "seamcarve cannot upscale an image: {}x{} requested from {}x{}",
        requested_width, requested_height, width, height
    )]
    Upscale {
        requested_width: u32,
        requested_height: u32,
        width: u32,
        height: u32,
    },
}
