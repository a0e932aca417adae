use std::fs;
use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use tempfile::TempDir;

use pixelveil_core::{commands, PixelveilError, Result};

fn write_carrier_png(path: &Path, width: u32, height: u32) {
    let image: RgbaImage = ImageBuffer::from_fn(width, height, |x, y| {
        let i = (3 * x + 7 * y) as u8;
        Rgba([i, i.wrapping_add(1), i.wrapping_add(2), 255])
    });
    image.save(path).expect("carrier png was not writable");
}

#[test]
fn should_embed_and_extract_a_text_message_through_png_files() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = out_dir.path().join("carrier.png");
    let embedded = out_dir.path().join("embedded.png");
    let recovered = out_dir.path().join("recovered.bin");
    write_carrier_png(&carrier, 40, 30);

    commands::embed(&carrier, &embedded, None, Some("Hello, World!".into()))?;
    commands::extract(&embedded, &recovered)?;

    assert_eq!(fs::read(&recovered)?, b"Hello, World!");
    Ok(())
}

#[test]
fn should_embed_and_extract_a_binary_file_through_png_files() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = out_dir.path().join("carrier.png");
    let embedded = out_dir.path().join("embedded.png");
    let secret_file = out_dir.path().join("secret.bin");
    let recovered = out_dir.path().join("recovered.bin");
    write_carrier_png(&carrier, 64, 64);

    let secret: Vec<u8> = (0u16..500).map(|i| (i % 251) as u8).collect();
    fs::write(&secret_file, &secret)?;

    commands::embed(&carrier, &embedded, Some(secret_file), None)?;
    commands::extract(&embedded, &recovered)?;

    assert_eq!(fs::read(&recovered)?, secret);
    Ok(())
}

#[test]
fn should_prefer_the_data_file_over_an_inline_message() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = out_dir.path().join("carrier.png");
    let embedded = out_dir.path().join("embedded.png");
    let secret_file = out_dir.path().join("secret.bin");
    let recovered = out_dir.path().join("recovered.bin");
    write_carrier_png(&carrier, 40, 30);

    fs::write(&secret_file, b"from the file")?;

    commands::embed(
        &carrier,
        &embedded,
        Some(secret_file),
        Some("from the message".into()),
    )?;
    commands::extract(&embedded, &recovered)?;

    assert_eq!(fs::read(&recovered)?, b"from the file");
    Ok(())
}

#[test]
fn should_report_a_capacity_error_for_an_oversized_secret() {
    let out_dir = TempDir::new().unwrap();
    let carrier = out_dir.path().join("carrier.png");
    let embedded = out_dir.path().join("embedded.png");
    write_carrier_png(&carrier, 10, 10);

    let big_message = "x".repeat(10_000);
    let result = commands::embed(&carrier, &embedded, None, Some(big_message));

    assert!(matches!(
        result,
        Err(PixelveilError::SecretTooLarge {
            secret_bits: 80_000,
            pixel_count: 100,
        })
    ));
    assert!(!embedded.exists(), "no output may be written on failure");
}

#[test]
fn should_fail_extraction_on_an_image_without_terminator() {
    let out_dir = TempDir::new().unwrap();
    let plain = out_dir.path().join("plain.png");
    let recovered = out_dir.path().join("recovered.bin");

    // every red channel even, so no pixel ever reads as a terminator
    let image: RgbaImage = ImageBuffer::from_pixel(16, 16, Rgba([2u8, 9, 4, 255]));
    image.save(&plain).expect("plain png was not writable");

    let result = commands::extract(&plain, &recovered);

    assert!(matches!(result, Err(PixelveilError::MissingTerminator)));
    assert!(!recovered.exists(), "no output may be written on failure");
}

#[test]
fn should_reject_a_non_png_carrier() {
    let out_dir = TempDir::new().unwrap();
    let embedded = out_dir.path().join("embedded.png");

    let result = commands::embed(
        Path::new("Cargo.toml"),
        &embedded,
        None,
        Some("hi".into()),
    );

    assert!(matches!(result, Err(PixelveilError::UnsupportedMedia)));
}
