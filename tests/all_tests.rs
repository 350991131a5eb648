#![allow(bad_style)]

mod filters;
mod ppm;

fn rand_bytes(count: usize) -> Vec<u8> {
  let mut buffer = vec![0; count];
  getrandom::getrandom(&mut buffer).unwrap();
  buffer
}

/// A random image with every channel in `0..=255`.
fn rand_image(width: u32, height: u32) -> ppmedit::Image {
  let pixels = rand_bytes((width * height * 3) as usize)
    .chunks_exact(3)
    .map(|c| ppmedit::Color::new(c[0].into(), c[1].into(), c[2].into()))
    .collect();
  ppmedit::Image::from_pixels(width, height, pixels).unwrap()
}
