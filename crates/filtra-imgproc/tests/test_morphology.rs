use filtra_image::{pixel, GridError, GridSize, PixelGrid};
use filtra_imgproc::border::BorderPolicy;
use filtra_imgproc::morphology::{close, dilate, erode};
use rand::Rng;

fn random_binary_grid(size: GridSize, white_ratio: f64) -> Result<PixelGrid, GridError> {
    let mut rng = rand::rng();
    let data = (0..size.width * size.height)
        .map(|_| {
            if rng.random_bool(white_ratio) {
                pixel::WHITE
            } else {
                pixel::BLACK
            }
        })
        .collect();
    PixelGrid::new(size, data)
}

#[test]
fn test_close_binary_invariant() -> Result<(), GridError> {
    let size = GridSize {
        width: 32,
        height: 24,
    };
    let src = random_binary_grid(size, 0.4)?;
    let mut dst = PixelGrid::from_size_val(size, 0)?;

    close(&src, &mut dst, BorderPolicy::Source)?;

    assert!(dst
        .as_slice()
        .iter()
        .all(|&p| p == pixel::BLACK || p == pixel::WHITE));
    Ok(())
}

#[test]
fn test_dilate_white_superset_of_interior() -> Result<(), GridError> {
    let size = GridSize {
        width: 32,
        height: 24,
    };
    let src = random_binary_grid(size, 0.2)?;
    let mut dst = PixelGrid::from_size_val(size, 0)?;

    dilate(&src, &mut dst, BorderPolicy::Source)?;

    for y in 3..size.height - 3 {
        for x in 3..size.width - 3 {
            if src.get_pixel(x, y)? == pixel::WHITE {
                assert_eq!(dst.get_pixel(x, y)?, pixel::WHITE, "pixel ({x}, {y})");
            }
        }
    }
    Ok(())
}

#[test]
fn test_erode_white_subset_of_interior() -> Result<(), GridError> {
    let size = GridSize {
        width: 32,
        height: 24,
    };
    let src = random_binary_grid(size, 0.8)?;
    let mut dst = PixelGrid::from_size_val(size, 0)?;

    erode(&src, &mut dst, BorderPolicy::Black)?;

    for y in 3..size.height - 3 {
        for x in 3..size.width - 3 {
            if dst.get_pixel(x, y)? == pixel::WHITE {
                assert_eq!(src.get_pixel(x, y)?, pixel::WHITE, "pixel ({x}, {y})");
            }
        }
    }
    Ok(())
}

#[test]
fn test_close_matches_manual_composition() -> Result<(), GridError> {
    let size = GridSize {
        width: 20,
        height: 20,
    };
    let src = random_binary_grid(size, 0.5)?;

    let mut composed = PixelGrid::from_size_val(size, 0)?;
    close(&src, &mut composed, BorderPolicy::Source)?;

    let mut dilated = PixelGrid::from_size_val(size, 0)?;
    dilate(&src, &mut dilated, BorderPolicy::Source)?;
    let mut manual = PixelGrid::from_size_val(size, 0)?;
    erode(&dilated, &mut manual, BorderPolicy::Source)?;

    assert_eq!(composed.as_slice(), manual.as_slice());
    Ok(())
}
