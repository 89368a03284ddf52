use anyhow::{bail, Context, Result};
use book_icon_gen::icon_gen::{icon_file_name, ICON_SIZES};
use image::ColorType;
use std::path::PathBuf;

fn main() -> Result<()> {
    let dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".to_string()));

    println!("Checking icons in: {}", dir.display());

    let mut failures = 0;
    for size in ICON_SIZES {
        let path = dir.join(icon_file_name(size));
        let img = image::open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let dims_ok = img.width() == size && img.height() == size;
        let color_ok = img.color() == ColorType::Rgb8;
        println!(
            "  {} {}: {}x{} {:?}",
            if dims_ok && color_ok { "✓" } else { "✗" },
            path.display(),
            img.width(),
            img.height(),
            img.color()
        );

        if !dims_ok || !color_ok {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} icon(s) failed verification");
    }

    println!("✓ All icons verified!");
    Ok(())
}
