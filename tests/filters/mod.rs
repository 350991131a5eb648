use ppmedit::{emboss, grayscale, invert, motion_blur, ppm_parse, Color, Filter, Image, PpmError};

use crate::rand_image;

#[test]
fn test_invert_twice_is_identity() {
  for (w, h) in [(1, 1), (7, 3), (20, 20)] {
    let image = rand_image(w, h);
    assert_eq!(invert(&invert(&image)), image);
  }
}

#[test]
fn test_grayscale_is_idempotent() {
  for (w, h) in [(1, 1), (7, 3), (20, 20)] {
    let once = grayscale(&rand_image(w, h));
    assert_eq!(grayscale(&once), once);
    assert!(once.pixels().iter().all(|c| c.red == c.green && c.green == c.blue));
  }
}

#[test]
fn test_motion_blur_one_is_identity() {
  let image = rand_image(9, 4);
  assert_eq!(motion_blur(&image, 1), image);
  assert_eq!(motion_blur(&image, 0), image);
}

#[test]
fn test_motion_blur_stays_in_row_range() {
  let image = rand_image(12, 5);
  let out = motion_blur(&image, 4);
  for y in 0..5 {
    let row = &image.pixels()[(y * 12) as usize..][..12];
    let max_red = row.iter().map(|c| c.red).max().unwrap();
    let min_red = row.iter().map(|c| c.red).min().unwrap();
    for x in 0..12 {
      let red = out.get(x, y).unwrap().red;
      assert!(min_red <= red && red <= max_red);
    }
    // the last pixel only averages itself
    assert_eq!(out.get(11, y), image.get(11, y));
  }
}

#[test]
fn test_emboss_uniform_random_color() {
  let c = rand_image(1, 1).get(0, 0).unwrap();
  let image = Image::from_pixels(6, 4, vec![c; 24]).unwrap();
  assert!(emboss(&image).pixels().iter().all(|&p| p == Color::gray(128)));
}

#[test]
fn test_emboss_output_is_gray() {
  let out = emboss(&rand_image(10, 10));
  assert!(out.pixels().iter().all(|c| c.red == c.green && c.green == c.blue));
}

#[test]
fn test_filter_names_dispatch() {
  let image = ppm_parse("P3 2 1 255 255 0 128 10 20 30").unwrap();
  let by_name =
    |name: &str, len: Option<u32>| Filter::from_name(name, len).map(|f| f.apply(&image));
  assert_eq!(by_name("invert", None).unwrap().get(0, 0), Ok(Color::new(0, 255, 127)));
  assert_eq!(by_name("greyscale", None).unwrap().get(1, 0), Ok(Color::gray(20)));
  assert_eq!(by_name("grayscale", None), by_name("greyscale", None));
  let mid_gray = Image::from_pixels(2, 1, vec![Color::gray(128); 2]).unwrap();
  assert_eq!(by_name("emboss", None).unwrap(), mid_gray);
  assert_eq!(by_name("motionblur", Some(2)).unwrap().get(0, 0), Ok(Color::new(132, 10, 79)));
  assert_eq!(by_name("sharpen", None), Err(PpmError::UnsupportedFilter));
  assert_eq!(by_name("motionblur", None), Err(PpmError::MissingLength));
}
