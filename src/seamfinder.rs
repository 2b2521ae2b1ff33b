/// Something that can pick the next seam to carve out of the image it
/// holds.  Seams come back as one coordinate per layer, ready to hand
/// to the matching removal.
pub trait SeamFinder {
    /// The cheapest left-to-right seam: a row index for every column.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// The cheapest top-to-bottom seam: a column index for every row.
    fn find_vertical_seam(&self) -> Vec<u32>;
}
