//! Integration tests for icon stack composition and rasterization.

use std::io::{Cursor, Write};
use std::sync::Arc;

use glyphstack::{
    AssetStore, IconDefaults, IconError, IconLibrary, IconSpec, IconStack, IconVariant,
    PlacementCode, ShapeRole, compute_layout,
};
use glyphstack_render::{
    Color, DrawingContext, InterpolationMode, PixmapContext, RecordingContext, Rect, Transform2D,
};
use zip::write::SimpleFileOptions;

const SQUARE: &str = "512|512|M0 0H512V512H0Z";
const WIDE: &str = "200|100|M0 0H200V100H0Z";
const EMPTY: &str = "512|512|";
const BROKEN_XML: &str = "512|512|\"<";

const TARGET: Rect = Rect::new(0.0, 0.0, 64.0, 64.0);

fn library() -> Arc<IconLibrary> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, body) in [
        ("solid/square.txt", SQUARE),
        ("solid/badge.txt", SQUARE),
        ("solid/wide.txt", WIDE),
        ("solid/empty.txt", EMPTY),
        ("solid/broken.txt", BROKEN_XML),
    ] {
        writer.start_file(name, options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    let data = writer.finish().unwrap().into_inner();
    Arc::new(IconLibrary::new(AssetStore::from_bytes(data).unwrap()))
}

fn stack(spec: IconSpec) -> IconStack {
    let mut icon = IconStack::new(library(), &spec);
    icon.create_svg(true).unwrap();
    icon
}

fn red_blue(placement: PlacementCode) -> IconSpec {
    IconSpec::new("square")
        .with_minor("badge")
        .with_placement(placement)
        .with_primary(Color::RED)
        .with_secondary(Color::BLUE)
}

fn rgba(ctx: &PixmapContext, x: u32, y: u32) -> (u8, u8, u8, u8) {
    let pixel = ctx.pixel(x, y).unwrap();
    (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha())
}

#[test]
fn test_badge_in_bottom_right() {
    let icon = stack(red_blue(PlacementCode::X2 | PlacementCode::HALF));
    let mut ctx = PixmapContext::new(64, 64).unwrap();

    assert_eq!(icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Low), 2);

    // Primary spans 0..51.2, the badge 32..64.
    assert_eq!(rgba(&ctx, 5, 5), (255, 0, 0, 255));
    assert_eq!(rgba(&ctx, 60, 60), (0, 0, 255, 255));
    assert_eq!(rgba(&ctx, 40, 40), (0, 0, 255, 255));
    assert_eq!(rgba(&ctx, 60, 5).3, 0);
    assert_eq!(rgba(&ctx, 5, 60).3, 0);
}

#[test]
fn test_under_draws_badge_first() {
    let icon = stack(red_blue(PlacementCode::X2 | PlacementCode::HALF | PlacementCode::UNDER));
    let mut ctx = PixmapContext::new(64, 64).unwrap();

    assert_eq!(icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Low), 2);

    // Overlap now shows the primary.
    assert_eq!(rgba(&ctx, 40, 40), (255, 0, 0, 255));
    assert_eq!(rgba(&ctx, 60, 60), (0, 0, 255, 255));
}

#[test]
fn test_recorded_transforms_follow_layout() {
    let icon = stack(red_blue(PlacementCode::LEFT | PlacementCode::QUARTER));
    let mut ctx = RecordingContext::new();
    icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Default);

    let bounds = icon.primary().unwrap().bounds();
    let layout = compute_layout(
        (PlacementCode::LEFT | PlacementCode::QUARTER).decode(),
        bounds,
        Some(bounds),
        TARGET,
        0.0,
    )
    .unwrap();

    let commands = ctx.commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(layout.first.role, ShapeRole::Primary);
    assert_eq!(commands[0].transform, layout.first.transform.combined());
    assert_eq!(commands[1].transform, layout.second.unwrap().transform.combined());
    assert!(commands.iter().all(|c| c.clip == Some(TARGET)));
    assert_eq!(ctx.depth(), 0);
    assert!(ctx.transform().is_identity());
}

#[test]
fn test_host_transform_is_preserved() {
    let icon = stack(IconSpec::new("square"));
    let mut ctx = RecordingContext::new();

    ctx.concat_transform(&Transform2D::translate(100.0, 0.0));
    assert_eq!(icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Default), 1);

    let command = &ctx.commands()[0];
    assert_eq!(command.clip, Some(Rect::new(100.0, 0.0, 64.0, 64.0)));
    assert_eq!(command.transform.translation().0, 100.0);
    assert_eq!(ctx.transform().translation(), (100.0, 0.0));
}

#[test]
fn test_single_shape_is_centered() {
    let icon = stack(IconSpec::new("wide").with_primary(Color::GREEN));
    let mut ctx = PixmapContext::new(64, 64).unwrap();

    assert_eq!(icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Default), 1);

    // 200x100 fits as 64x32, centred vertically.
    assert_eq!(rgba(&ctx, 32, 8).3, 0);
    assert_eq!(rgba(&ctx, 32, 32).3, 255);
    assert_eq!(rgba(&ctx, 32, 56).3, 0);
}

#[test]
fn test_degenerate_primary_draws_nothing() {
    let icon = stack(IconSpec::new("empty").with_minor("badge"));
    assert!(icon.is_ready());
    assert!(icon.primary().unwrap().bounds().is_empty());

    let mut ctx = RecordingContext::new();
    assert_eq!(icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Default), 0);
    assert!(ctx.commands().is_empty());
}

#[test]
fn test_degenerate_secondary_draws_nothing() {
    let icon = stack(IconSpec::new("square").with_minor("empty"));
    let mut ctx = RecordingContext::new();
    assert_eq!(icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Default), 0);
}

#[test]
fn test_unparsable_secondary_blocks_drawing() {
    let mut icon = IconStack::new(library(), &IconSpec::new("square").with_minor("broken"));

    assert!(matches!(icon.create_svg(true), Err(IconError::Render(_))));
    assert!(icon.primary().is_some());
    assert!(!icon.is_ready());

    let mut ctx = RecordingContext::new();
    assert_eq!(icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Default), 0);
}

#[test]
fn test_missing_secondary_draws_primary_alone() {
    let icon = stack(IconSpec::new("square").with_minor("nothing-here"));
    assert!(icon.is_ready());
    assert!(icon.secondary().is_none());

    let mut ctx = RecordingContext::new();
    assert_eq!(icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Default), 1);
}

#[test]
fn test_disabled_icon_is_translucent() {
    let mut icon = stack(IconSpec::new("square").with_primary(Color::BLACK));

    icon.set_enabled(false).unwrap();
    let mut ctx = PixmapContext::new(64, 64).unwrap();
    icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Default);
    let alpha = rgba(&ctx, 32, 32).3;
    assert!((60..=68).contains(&alpha), "alpha {alpha}");

    icon.set_enabled(true).unwrap();
    let mut ctx = PixmapContext::new(64, 64).unwrap();
    icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Default);
    assert_eq!(rgba(&ctx, 32, 32).3, 255);
}

#[test]
fn test_shared_library_across_icons() {
    let library = library();
    let spec = red_blue(PlacementCode::NONE);

    let mut first = IconStack::new(Arc::clone(&library), &spec);
    let mut second = IconStack::new(Arc::clone(&library), &spec);
    first.create_svg(true).unwrap();
    second.create_svg(true).unwrap();

    // Two shapes resolved once each, then served from the cache.
    assert_eq!(library.store().lookups(), 2);
    assert_eq!(library.cache().len(), 2);
    assert_eq!(library.cache().hits(), 2);
}

#[test]
fn test_defaults_fill_unset_properties() {
    let defaults = IconDefaults::new()
        .with_variant(IconVariant::Solid)
        .with_minor("badge")
        .with_placement(PlacementCode::UNDER);
    let mut icon = IconStack::with_defaults(library(), &IconSpec::new("square"), &defaults);
    icon.create_svg(true).unwrap();

    assert_eq!(icon.icon().placement, PlacementCode::UNDER);

    let mut ctx = RecordingContext::new();
    assert_eq!(icon.draw(&mut ctx, TARGET, TARGET, InterpolationMode::Default), 2);
}
