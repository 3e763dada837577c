pub mod http_server;

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Cursor, Write};

/// A small solid PNG of the given size.
#[allow(dead_code)]
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([0, 128, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// `bytes` gzip-compressed, for serving with `Content-Encoding: gzip`.
#[allow(dead_code)]
pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(bytes).unwrap();
    enc.finish().unwrap()
}
