//! Render an icon stack and print its coverage as text.
//!
//! Without arguments a small built-in archive is used. Pass an archive path,
//! a primary name and optionally a badge name to preview real assets:
//!
//! Run with: cargo run -p glyphstack --example terminal_preview -- icons.zip user ban

use std::io::{Cursor, Write};
use std::sync::Arc;

use glyphstack::{AssetStore, IconLibrary, IconSpec, IconStack, PlacementCode};
use glyphstack_render::{InterpolationMode, PixmapContext, Rect};

const SIZE: u32 = 32;

fn demo_archive() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, body) in [
        ("solid/frame.txt", "512|512|M0 0H512V512H0ZM64 64V448H448V64Z"),
        ("solid/dot.txt", "512|512|M256 0A256 256 0 1 0 256 512A256 256 0 1 0 256 0Z"),
    ] {
        writer.start_file(name, options).expect("Failed to start entry");
        writer.write_all(body.as_bytes()).expect("Failed to write entry");
    }
    writer.finish().expect("Failed to finish archive").into_inner()
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (store, spec) = match args.as_slice() {
        [path, major, rest @ ..] => {
            let store = AssetStore::open(path).expect("Failed to open archive");
            let mut spec = IconSpec::new(major.as_str());
            if let Some(minor) = rest.first() {
                spec = spec.with_minor(minor.as_str());
            }
            (store, spec)
        }
        _ => {
            let store = AssetStore::from_bytes(demo_archive()).expect("Failed to open demo archive");
            (store, IconSpec::new("frame").with_minor("dot"))
        }
    };

    let library = Arc::new(IconLibrary::new(store));
    let target = Rect::new(0.0, 0.0, SIZE as f32, SIZE as f32);

    for placement in [
        PlacementCode::X2 | PlacementCode::HALF,
        PlacementCode::X3 | PlacementCode::QUARTER | PlacementCode::TOP | PlacementCode::LEFT,
        PlacementCode::X1 | PlacementCode::FULL | PlacementCode::UNDER,
    ] {
        let mut icon = IconStack::new(Arc::clone(&library), &spec.clone().with_placement(placement));
        icon.create_svg(true).expect("Failed to build icon");

        let mut ctx = PixmapContext::new(SIZE, SIZE).expect("Failed to create pixmap");
        let drawn = icon.draw(&mut ctx, target, target, InterpolationMode::High);

        println!("placement {:#05x}: {drawn} shape(s)", placement.bits());
        for y in 0..SIZE {
            let row: String = (0..SIZE)
                .map(|x| match ctx.pixel(x, y).map(|p| p.alpha()).unwrap_or(0) {
                    0..=63 => ' ',
                    64..=191 => '+',
                    _ => '#',
                })
                .collect();
            println!("|{row}|");
        }
        println!();
    }

    println!("{:?}", library.cache().stats());
}
