use std::ffi::OsStr;

use ppmedit::{ppm_parse, ppm_parse_bytes, ppm_write, Color, PpmError};
use walkdir::WalkDir;

use crate::{rand_bytes, rand_image};

#[test]
fn test_fixtures_round_trip() {
  let mut seen = 0;
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() || entry.path().extension() != Some(OsStr::new("ppm")) {
      continue;
    }
    println!("{}", entry.path().display());
    let bytes = std::fs::read(entry.path()).unwrap();
    let image = ppm_parse_bytes(&bytes).unwrap();
    let text = ppm_write(&image);
    let again = ppm_parse(&text).unwrap();
    assert_eq!(image, again, "{}", entry.path().display());
    // the written form is canonical, so it's a fixed point
    assert_eq!(ppm_write(&again), text);
    seen += 1;
  }
  assert!(seen >= 4, "only found {seen} fixtures");
}

#[test]
fn test_ragged_fixture_layout() {
  let image = ppm_parse_bytes(&std::fs::read("tests/ppm/ragged_whitespace.ppm").unwrap()).unwrap();
  assert_eq!((image.width(), image.height()), (4, 1));
  assert_eq!(image.get(3, 0), Ok(Color::gray(255)));
  assert_eq!(ppm_write(&image), "P3\n4 1\n255\n0 0 0 64 64 64 128 128 128 255 255 255\n");
}

#[test]
fn test_random_images_round_trip() {
  for (w, h) in [(1, 1), (5, 3), (16, 16), (1, 40)] {
    let image = rand_image(w, h);
    assert_eq!(ppm_parse(&ppm_write(&image)), Ok(image));
  }
}

/// A header field that's usually small, but sometimes zero or far too big.
fn rand_dimension(b: u8) -> String {
  match b % 8 {
    0 => String::from("0"),
    1 => String::from("100000"),
    2 => String::from("99999999999"),
    3 => u32::MAX.to_string(),
    _ => (1 + b % 6).to_string(),
  }
}

#[test]
fn test_hostile_headers() {
  assert_eq!(ppm_parse("P3 0 3 255 1 2 3"), Err(PpmError::IndexOutOfRange));
  assert_eq!(ppm_parse("P3 99999999999 1 255"), Err(PpmError::Parse));
  assert_eq!(
    ppm_parse("P3 4294967295 4294967295 255 1 2 3"),
    Err(PpmError::DimensionsTooLarge)
  );
  assert_eq!(ppm_parse("P3 100000 100000 255 "), Err(PpmError::DimensionsTooLarge));
}

#[test]
fn test_hostile_input_does_not_panic() {
  for _ in 0..200 {
    let _ = ppm_parse_bytes(&rand_bytes(256));

    let head = rand_bytes(3);
    let max_color = match head[2] % 4 {
      0 => String::from("65535"),
      _ => head[2].to_string(),
    };
    let (width, height) = (rand_dimension(head[0]), rand_dimension(head[1]));
    let mut text = format!("P3 {width} {height} {max_color} ");
    // mostly plausible data, so the pixel parser has work to do
    for b in rand_bytes(200) {
      text.push(match b % 4 {
        0 => ' ',
        1 => '\n',
        _ => char::from(b'0' + b % 10),
      });
    }
    match ppm_parse(&text) {
      Ok(image) => {
        let expected = (width.parse::<usize>().unwrap()) * (height.parse::<usize>().unwrap());
        assert_eq!(image.pixels().len(), expected, "{width}x{height}");
      }
      Err(e) => assert!(
        matches!(
          e,
          PpmError::Parse
            | PpmError::IndexOutOfRange
            | PpmError::DimensionsTooLarge
            | PpmError::Alloc
        ),
        "{e:?} from {width}x{height}"
      ),
    }
  }
}
