use assert_cmd::prelude::*;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn stripe_image(path: &Path) -> RgbImage {
    // A grey column at x=2 through a black and white checkerboard.
    let image = RgbImage::from_fn(5, 4, |x, y| match (x, (x + y) % 2) {
        (2, _) => Rgb([128, 128, 128]),
        (_, 0) => Rgb([0, 0, 0]),
        _ => Rgb([255, 255, 255]),
    });
    image.save(path).unwrap();
    image
}

fn pngseam() -> Command {
    Command::cargo_bin("pngseam").unwrap()
}

#[test]
fn shrinks_both_dimensions() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    stripe_image(&input);

    pngseam()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .args(&["--width", "2", "--height", "1"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (3, 3));
}

#[test]
fn cuts_out_the_stripe() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let original = stripe_image(&input);

    pngseam()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(&["-W", "1"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb8();
    let expected = RgbImage::from_fn(4, 4, |x, y| {
        *original.get_pixel(if x < 2 { x } else { x + 1 }, y)
    });
    assert_eq!(carved, expected);
}

#[test]
fn carving_to_nothing_is_a_usage_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    stripe_image(&input);

    pngseam()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .args(&["--width", "5"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot reduce width 5 by 5"));

    assert!(!output.exists());
}

#[test]
fn unreadable_input_fails_cleanly() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.png");
    let output = dir.path().join("out.png");

    pngseam()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not read image"));

    assert!(!output.exists());
}

#[test]
fn missing_arguments_are_reported() {
    pngseam()
        .args(&["--in", "whatever.png"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--out"));
}

#[test]
fn non_numeric_counts_are_usage_errors() {
    pngseam()
        .args(&["--in", "a.png", "--out", "b.png", "--width", "lots"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("lots"));
}

#[test]
fn help_exits_cleanly() {
    pngseam()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--energy"));
}

#[test]
fn writes_an_energy_map() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let energy = dir.path().join("energy.png");
    stripe_image(&input);

    pngseam()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .arg("--energy")
        .arg(&energy)
        .assert()
        .success();

    let map = image::open(&energy).unwrap().to_luma8();
    assert_eq!(map.dimensions(), (5, 4));
    assert!((0..4).all(|y| map.get_pixel(2, y)[0] == 0));
    assert_eq!(map.pixels().map(|p| p[0]).max(), Some(255));
}

#[test]
fn unwritable_energy_map_leaves_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    stripe_image(&input);

    pngseam()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .arg("--energy")
        .arg(dir.path().join("no-such-dir").join("energy.png"))
        .args(&["--width", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not write image"));

    assert!(!output.exists());
}

#[test]
fn rejected_reductions_write_no_energy_map() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let energy = dir.path().join("energy.png");
    stripe_image(&input);

    pngseam()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .arg("--energy")
        .arg(&energy)
        .args(&["--height", "4"])
        .assert()
        .failure()
        .code(2);

    assert!(!output.exists());
    assert!(!energy.exists());
}
