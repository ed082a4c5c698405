mod common;

use common::synthetic_image::{checkerboard_rgb, solid_rgb, step_gray};
use sobel_edges::filter::{combine_magnitude, sobel_gradients, sobel_x, SOBEL_X_3X3};
use sobel_edges::image::ImageView;
use sobel_edges::{convolve, smooth, sobel, to_gray, to_rgb, ChannelRange, Grid};

#[test]
fn vertical_edge_responds_only_at_boundary() {
    let _ = env_logger::builder().is_test(true).try_init();
    let img = step_gray(9, 7, 4);
    let gx = convolve(&img, &SOBEL_X_3X3).unwrap();
    assert_eq!(gx.dims(), img.dims());

    for (y, row) in gx.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if x == 3 || x == 4 {
                assert!(v > 3.9, "expected strong response at ({x},{y}), got {v}");
            } else {
                assert!(v.abs() < 1e-9, "expected no response at ({x},{y}), got {v}");
            }
        }
    }
}

#[test]
fn sobel_of_solid_color_is_black() {
    let rgb = solid_rgb(12, 10, 90, 140, 200);
    let gray = to_gray(&rgb);
    let edges = sobel(&gray).unwrap();
    assert!(edges.data.iter().all(|&v| v == 0.0));
    let packed = to_rgb(&edges, ChannelRange::Clamp);
    assert!(packed.data.iter().all(|&px| px == 0));
}

#[test]
fn smoothing_preserves_constant_gray() {
    let gray = to_gray(&solid_rgb(5, 5, 100, 100, 100));
    let smoothed = smooth(&gray).unwrap();
    let expected = 100.0 / 255.0;
    assert!(smoothed.data.iter().all(|&v| (v - expected).abs() < 1e-12));
}

#[test]
fn checkerboard_edges_follow_cell_borders() {
    let rgb = checkerboard_rgb(32, 32, 8);
    let gray = to_gray(&rgb);
    let grads = sobel_gradients(&gray).unwrap();

    assert!(grads.mag.data.iter().all(|&v| v >= 0.0));
    // Interior of a cell is flat.
    assert_eq!(grads.mag.get(3, 3), 0.0);
    // Pixels straddling a vertical cell border respond, horizontal derivative dominates.
    let border = grads.mag.get(7, 3);
    assert!(border > 1.0, "border magnitude {border}");
    assert!(grads.gx.get(7, 3).abs() > grads.gy.get(7, 3).abs());
    assert_eq!(combine_magnitude(&grads.gx, &grads.gy).unwrap(), grads.mag);
}

#[test]
fn gradient_sign_follows_intensity_direction() {
    let rising = step_gray(6, 6, 3);
    let falling = Grid::from_fn(6, 6, |x, _| if x < 3 { 1.0 } else { 0.0 });
    assert!(sobel_x(&rising).unwrap().get(3, 3) > 0.0);
    assert!(sobel_x(&falling).unwrap().get(3, 3) < 0.0);
    assert_eq!(
        sobel(&rising).unwrap(),
        sobel(&falling).unwrap(),
        "magnitude ignores edge polarity"
    );
}
