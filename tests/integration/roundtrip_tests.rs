//! Encode/decode round trips through the public API.

use image::ColorType;

use mpo_rs::{decode, decode_all, decode_config, Container, MpoError};

use super::test_utils::{assert_close, green, red, solid};

#[test]
fn test_round_trip_stereo_pair() {
    let container = Container::new(vec![red(10, 10), green(10, 10)]);
    let bytes = container.encode(90).unwrap();

    let decoded = decode_all(&bytes).unwrap();
    assert_eq!(decoded.len(), 2);
    for image in decoded.images() {
        assert_eq!((image.width(), image.height()), (10, 10));
    }
}

#[test]
fn test_round_trip_preserves_order_and_color() {
    let bytes = Container::new(vec![red(10, 10), green(10, 10)])
        .encode(90)
        .unwrap();
    let decoded = decode_all(&bytes).unwrap();

    let left = decoded.images()[0].to_rgb8();
    let right = decoded.images()[1].to_rgb8();

    let [r, g, b] = left.get_pixel(5, 5).0;
    assert_close(r, 255, 12);
    assert_close(g, 0, 12);
    assert_close(b, 0, 12);

    let [r, g, b] = right.get_pixel(5, 5).0;
    assert_close(r, 0, 12);
    assert_close(g, 255, 12);
    assert_close(b, 0, 12);
}

#[test]
fn test_round_trip_attaches_mpf_index() {
    let bytes = Container::new(vec![red(10, 10), green(10, 10)])
        .encode(90)
        .unwrap();
    let decoded = decode_all(&bytes).unwrap();

    let index = decoded.mpf_index().expect("written files carry an MPF index");
    assert_eq!(index.len(), 2);
    assert!(index.entries[0].is_representative());
    assert!(!index.entries[1].is_representative());
    assert!(!decoded.has_vendor_metadata());
}

#[test]
fn test_round_trip_many_sizes() {
    let images = vec![
        solid(3, 7, [10, 20, 30, 255]),
        solid(16, 16, [200, 100, 50, 255]),
        solid(1, 1, [0, 0, 0, 255]),
        solid(33, 5, [255, 255, 255, 255]),
    ];
    let bytes = Container::new(images.clone()).encode(75).unwrap();

    let decoded = decode_all(&bytes).unwrap();
    assert_eq!(decoded.len(), images.len());
    for (original, decoded) in images.iter().zip(decoded.images()) {
        assert_eq!(original.width(), decoded.width());
        assert_eq!(original.height(), decoded.height());
    }
}

#[test]
fn test_single_image_round_trip() {
    let bytes = Container::new(vec![red(4, 4)]).encode(90).unwrap();
    let decoded = decode_all(&bytes).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded.mpf_index().unwrap().len(), 1);
}

#[test]
fn test_decode_first_image_only() {
    let bytes = Container::new(vec![red(12, 6), green(6, 12)])
        .encode(90)
        .unwrap();

    let first = decode(&bytes).unwrap();
    assert_eq!((first.width(), first.height()), (12, 6));
}

#[test]
fn test_decode_config_reads_first_frame() {
    let bytes = Container::new(vec![red(10, 10), green(20, 20)])
        .encode(90)
        .unwrap();

    let info = decode_config(&bytes).unwrap();
    assert_eq!((info.width, info.height), (10, 10));
    assert_eq!(info.color_type, ColorType::Rgb8);
}

#[test]
fn test_encode_empty_container() {
    assert_eq!(Container::default().encode(90), Err(MpoError::NoImages));
}

#[test]
fn test_decode_garbage() {
    assert_eq!(
        decode_all(b"not an mpo file").unwrap_err(),
        MpoError::NoImages
    );
}

#[test]
fn test_decode_truncated_file() {
    let bytes = Container::new(vec![red(10, 10), green(10, 10)])
        .encode(90)
        .unwrap();

    // Cut into the second frame; only the first survives
    let truncated = &bytes[..bytes.len() - 4];
    let decoded = decode_all(truncated).unwrap();
    assert_eq!(decoded.len(), 1);
}

#[test]
fn test_quality_affects_size() {
    let noisy = image::DynamicImage::ImageRgb8(image::RgbImage::from_fn(32, 32, |x, y| {
        image::Rgb([(x * 7 + y * 13) as u8, (x * y) as u8, (x ^ y) as u8 * 8])
    }));

    let low = Container::new(vec![noisy.clone()]).encode(10).unwrap();
    let high = Container::new(vec![noisy]).encode(100).unwrap();
    assert!(low.len() < high.len());
}
