use crate::manifest_json::IconManifest;
use crate::render::render_icon;
use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, RgbImage};
use std::{
    io::{Cursor, Write},
    path::{Path, PathBuf},
};

/// Icon sizes shipped with the extension.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Options for [`generate_icons`], filled in from the command line.
#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub manifest: bool,
    pub manifest_prefix: String,
}

/// Whether this build can encode PNG files.
#[derive(Debug)]
pub enum Capability {
    Available(IconWriter),
    Unavailable(String),
}

/// Encodes rendered icons as PNG.
///
/// Only obtainable through [`probe`], so holding one means PNG encoding works.
#[derive(Debug)]
pub struct IconWriter {
    _probed: (),
}

impl IconWriter {
    /// Encode an icon as an in-memory RGB PNG.
    pub fn encode(&self, image: &RgbImage) -> Result<Vec<u8>> {
        encode_png(image)
    }

    /// Encode an icon and write it to `path`.
    ///
    /// The file is only created once encoding has succeeded.
    pub fn write_icon(&self, image: &RgbImage, path: &Path) -> Result<()> {
        let bytes = self.encode(image)?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Check once whether PNG encoding is compiled in, by encoding a 1x1 image.
pub fn probe() -> Capability {
    match encode_png(&RgbImage::new(1, 1)) {
        Ok(_) => Capability::Available(IconWriter { _probed: () }),
        Err(err) => Capability::Unavailable(format!("{:#}", err)),
    }
}

fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut buf, ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buf.into_inner())
}

/// File name of the icon for `size`, e.g. `icon48.png`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Render, encode and write one icon per size into `out_dir`, reporting to `out`.
///
/// Returns the paths written. When the capability is missing, a short
/// diagnostic is reported instead and nothing is written.
pub fn run_batch<W: Write>(
    capability: &Capability,
    sizes: &[u32],
    out_dir: &Path,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    let writer = match capability {
        Capability::Available(writer) => writer,
        Capability::Unavailable(reason) => {
            writeln!(out, "✗ PNG rendering support is unavailable: {reason}")?;
            writeln!(
                out,
                "💡 Rebuild with the default `png` feature, or open generate-icons.html in a browser to generate the icons instead."
            )?;
            return Ok(Vec::new());
        }
    };

    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let icon = render_icon(size);
        let filename = icon_file_name(size);
        let path = out_dir.join(&filename);
        writer.write_icon(&icon, &path)?;
        writeln!(out, "✓ Generated {filename} ({size}x{size})")?;
        written.push(path);
    }

    writeln!(out, "All icons generated!")?;
    Ok(written)
}

pub fn generate_icons(args: Args) -> Result<()> {
    let capability = probe();

    // Ensure the output directory exists
    if matches!(capability, Capability::Available(_)) {
        std::fs::create_dir_all(&args.output).context("Can't create output directory")?;
    }

    let stdout = std::io::stdout();
    let written = run_batch(&capability, &ICON_SIZES, &args.output, &mut stdout.lock())?;

    if args.manifest && !written.is_empty() {
        let manifest = IconManifest::for_sizes(&ICON_SIZES, &args.manifest_prefix);
        println!("{}", manifest.to_json_pretty()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(feature = "png")]
    fn available() -> Capability {
        Capability::Available(IconWriter { _probed: () })
    }

    #[test]
    fn test_icon_file_name() {
        assert_eq!(icon_file_name(16), "icon16.png");
        assert_eq!(icon_file_name(128), "icon128.png");
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_probe_reports_available_with_png_feature() {
        assert!(matches!(probe(), Capability::Available(_)));
    }

    #[cfg(not(feature = "png"))]
    #[test]
    fn test_probe_reports_unavailable_without_png_feature() {
        assert!(matches!(probe(), Capability::Unavailable(_)));
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_run_batch_writes_every_size() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut out = Vec::new();

        let written = run_batch(&available(), &ICON_SIZES, temp_dir.path(), &mut out)
            .expect("batch should succeed");

        assert_eq!(written.len(), 3);
        for size in ICON_SIZES {
            let path = temp_dir.path().join(icon_file_name(size));
            assert!(written.contains(&path));
            let img = image::open(&path).expect("Failed to open generated icon");
            assert_eq!(img.width(), size);
            assert_eq!(img.height(), size);
            assert_eq!(img.color(), image::ColorType::Rgb8);
        }

        let console = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(
            lines,
            vec![
                "✓ Generated icon16.png (16x16)",
                "✓ Generated icon48.png (48x48)",
                "✓ Generated icon128.png (128x128)",
                "All icons generated!",
            ]
        );
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_written_icon_decodes_to_rendered_pixels() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("icon48.png");
        let writer = IconWriter { _probed: () };

        writer.write_icon(&render_icon(48), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded, render_icon(48));
    }

    #[test]
    fn test_run_batch_unavailable_writes_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let capability = Capability::Unavailable("PNG support not compiled in".to_string());
        let mut out = Vec::new();

        let written = run_batch(&capability, &ICON_SIZES, temp_dir.path(), &mut out).unwrap();

        assert!(written.is_empty());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);

        let console = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("PNG support not compiled in"));
        assert!(lines[1].contains("generate-icons.html"));
    }
}
