use image::{Rgb, RgbImage};
use itertools::iproduct;
use torusseam::{seamcarve, Axis, PixelGrid, SeamEngine, SeamFinder};

// A bright vertical bar on a flat background, two pixels wide at
// columns 4 and 5.
fn barred(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x == 4 || x == 5 {
            Rgb([250, 250, 250])
        } else {
            Rgb([10, 20, 30])
        }
    })
}

#[test]
fn vertical_carving_keeps_the_bar() {
    let image = barred(10, 6);
    let carved = seamcarve(&image, 6, 6).unwrap();
    assert_eq!(carved.dimensions(), (6, 6));
    for y in 0..6 {
        let bright = (0..6)
            .filter(|&x| carved.get_pixel(x, y) == &Rgb([250, 250, 250]))
            .count();
        assert_eq!(bright, 2, "row {} lost part of the bar", y);
    }
}

#[test]
fn carve_loop_driven_by_hand() {
    let image = barred(9, 5);
    let mut engine = SeamEngine::new(PixelGrid::from(&image));
    for step in 0..3 {
        let before = engine.grid().clone();
        let seam = engine.find_vertical_seam();
        assert_eq!(seam.len(), 5);
        engine.remove_seam(&seam, Axis::Vertical);
        assert_eq!((engine.width(), engine.height()), (8 - step, 5));
        for (x, y) in iproduct!(0..engine.width(), 0..engine.height()) {
            let source = if x < seam[y as usize] { x } else { x + 1 };
            assert_eq!(engine.grid().pixel_at(x, y), before.pixel_at(source, y));
        }
    }

    let seam = engine.find_horizontal_seam();
    assert_eq!(seam.len(), 6);
    engine.remove_seam(&seam, Axis::Horizontal);
    assert_eq!((engine.width(), engine.height()), (6, 4));
}

#[test]
fn carving_to_nothing() {
    let image = barred(6, 3);
    let mut engine = SeamEngine::new(PixelGrid::from(&image));
    engine.carve(0, 3).unwrap();
    assert_eq!((engine.width(), engine.height()), (0, 3));
    assert!(engine.find_seam(Axis::Horizontal).is_empty());
    assert!(engine.energy_image().is_empty());
    assert_eq!(engine.grid().to_rgb_image().dimensions(), (0, 3));
}

#[test]
fn carving_to_zero_by_zero() {
    // Dimensions alternate down from 7x5 until the height hits 0 at 2x0.
    let carved = seamcarve(&barred(7, 5), 0, 0).unwrap();
    assert_eq!(carved.dimensions(), (2, 0));

    let mut engine = SeamEngine::new(PixelGrid::from(&barred(2, 2)));
    engine.carve(0, 0).unwrap();
    assert!(engine.grid().is_empty());
    assert!(engine.find_seam(Axis::Vertical).is_empty());
}
