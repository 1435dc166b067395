/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end runs of several filters chained on one image.

use nanorand::Rng;
use rasterfx_core::geom::Rect;
use rasterfx_core::layout::{PixelLayout, Rgb};
use rasterfx_image::image::RasterImage;
use rasterfx_image::traits::OperationsTrait;
use rasterfx_procs::balance::Balance;
use rasterfx_procs::box_blur::BoxBlur;
use rasterfx_procs::brighten::Brighten;
use rasterfx_procs::crop_background::CropBackground;
use rasterfx_procs::difference::Difference;
use rasterfx_procs::isolate::Isolate;
use rasterfx_procs::overlay::Overlay;
use rasterfx_procs::sobel::Sobel;

fn random_image(width: usize, height: usize, layout: PixelLayout) -> RasterImage {
    let mut data = vec![0_u8; width * height * layout.bytes_per_pixel()];
    nanorand::WyRand::new().fill(&mut data);

    RasterImage::from_vec(data, layout, width, height, width * layout.bytes_per_pixel()).unwrap()
}

#[test]
fn difference_against_a_copy_goes_black() {
    let image = random_image(40, 30, PixelLayout::Rgb24);
    let mut target = image.clone();

    Difference::new(&image).execute(&mut target).unwrap();

    assert!(target.data().iter().all(|x| *x == 0));
}

#[test]
fn full_weight_overlay_keeps_the_image() {
    let other = random_image(40, 30, PixelLayout::Rgb24);
    let mut image = random_image(40, 30, PixelLayout::Rgb24);
    let before = image.data().to_vec();

    Overlay::new(&other, 1.0).execute(&mut image).unwrap();

    assert_eq!(image.data(), &before[..]);
}

#[test]
fn zero_weight_overlay_keeps_the_other_image() {
    let other = random_image(40, 30, PixelLayout::Rgb24);
    let mut image = random_image(40, 30, PixelLayout::Rgb24);

    Overlay::new(&other, 0.0).execute(&mut image).unwrap();

    assert_eq!(image.data(), other.data());
}

#[test]
fn isolate_equals_balance_with_extreme_shifts() {
    let image = random_image(25, 25, PixelLayout::Rgba32);

    let mut isolated = image.clone();
    Isolate::new(Rgb::Green).execute(&mut isolated).unwrap();

    let mut balanced = image.clone();
    Balance::new(-255, 0, -255).execute(&mut balanced).unwrap();

    assert_eq!(isolated.data(), balanced.data());
}

#[test]
fn chained_filters_run_on_one_image() {
    // a bright object on a white canvas survives the whole pipeline
    let mut image = RasterImage::from_fn(64, 64, PixelLayout::Rgb24, |x, y| {
        if (20..44).contains(&x) && (16..40).contains(&y) {
            [40, 90, 160, 0]
        } else {
            [255, 255, 255, 0]
        }
    });

    CropBackground::new().execute(&mut image).unwrap();
    assert_eq!(image.dimensions(), (24, 24));

    Brighten::new(15).execute(&mut image).unwrap();
    assert_eq!(&image.data()[..3], &[55, 105, 175]);

    BoxBlur::new(Rect::from_size(24, 24), 3)
        .execute(&mut image)
        .unwrap();

    Sobel::new().execute(&mut image).unwrap();

    // the blurred object is flat, its interior comes out white
    let center = 12 * image.stride() + 12 * 3;
    assert_eq!(&image.data()[center..center + 3], &[255, 255, 255]);
}
