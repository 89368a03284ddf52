use anyhow::Result;
use book_icon_gen::icon_gen;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "book-icon-gen",
    about = "Draw the 16, 48 and 128 px book icons for the browser extension"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Print the manifest.json icon entries for the generated files
    #[clap(long)]
    manifest: bool,

    /// Path prefix used for icon entries in the printed manifest
    #[clap(long, value_name = "PREFIX", default_value = "icons/")]
    manifest_prefix: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        manifest: args.manifest,
        manifest_prefix: args.manifest_prefix,
    })
}
