//! Stereo and anaglyph composition over decoded containers.

use mpo_rs::{decode_all, ColorScheme, ComposeError, Container};

use super::test_utils::{assert_close, green, red, solid};

fn decoded_pair() -> Container {
    let bytes = Container::new(vec![red(10, 10), green(10, 10)])
        .encode(95)
        .unwrap();
    decode_all(&bytes).unwrap()
}

#[test]
fn test_stereo_from_decoded_file() {
    let stereo = decoded_pair().to_stereo().unwrap();
    assert_eq!(stereo.dimensions(), (20, 10));

    let [r, g, _, a] = stereo.get_pixel(2, 2).0;
    assert_close(r, 255, 12);
    assert_close(g, 0, 12);
    assert_eq!(a, 255);

    let [r, g, _, _] = stereo.get_pixel(15, 2).0;
    assert_close(r, 0, 12);
    assert_close(g, 255, 12);
}

#[test]
fn test_anaglyph_from_decoded_file() {
    let anaglyph = decoded_pair().to_anaglyph(ColorScheme::RedCyan).unwrap();
    assert_eq!(anaglyph.dimensions(), (10, 10));

    // Red channel is the gray of the left (red) image: 255 * 0.229 ~ 58
    let [r, g, b, a] = anaglyph.get_pixel(5, 5).0;
    assert_close(r, 58, 6);
    assert_close(g, 255, 12);
    assert_close(b, 0, 12);
    assert_eq!(a, 255);
}

#[test]
fn test_every_scheme_renders() {
    let container = decoded_pair();
    for scheme in ColorScheme::ALL {
        let image = container.to_anaglyph(scheme).unwrap();
        assert_eq!(image.dimensions(), (10, 10), "scheme {}", scheme.name());
    }
}

#[test]
fn test_anaglyph_requires_pair() {
    let single = Container::new(vec![red(4, 4)]);
    assert_eq!(
        single.to_anaglyph(ColorScheme::RedCyan),
        Err(ComposeError::InvalidImageCount {
            expected: 2,
            actual: 1
        })
    );

    let triple = Container::new(vec![red(4, 4), red(4, 4), red(4, 4)]);
    assert!(matches!(
        triple.to_anaglyph(ColorScheme::GreenRed),
        Err(ComposeError::InvalidImageCount { actual: 3, .. })
    ));
}

#[test]
fn test_anaglyph_rejects_mismatched_sizes() {
    let container = Container::new(vec![red(4, 4), solid(5, 4, [0, 0, 0, 255])]);
    assert_eq!(
        container.to_anaglyph(ColorScheme::CyanRed),
        Err(ComposeError::InconsistentBounds {
            left: (4, 4),
            right: (5, 4)
        })
    );
}

#[test]
fn test_stereo_empty() {
    assert_eq!(Container::default().to_stereo(), Err(ComposeError::NoImages));
}
