use anyhow::{Context as _, Result};
use clap::Parser;
use sign_gen::template;
use sign_gen::{Colour, Font, Sign};
use std::io::BufRead;

/// Families tried before falling back to any bold sans-serif face
const FONT_FAMILIES: &[&str] = &["Arial", "Helvetica"];

/// Render stdin text as an auto-fitted sign image and print it as a data URI
#[derive(Parser, Debug)]
#[command(name = "sign-gen", version, about)]
struct Args {
    /// Background colour as rrggbb hex
    #[arg(long, default_value = "0000ff", value_name = "HEX")]
    bg: String,

    /// Text colour as rrggbb hex
    #[arg(long, default_value = "ffffff", value_name = "HEX")]
    fg: String,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 256)]
    height: u32,

    /// Copy the image data URI to the system clipboard
    #[arg(long)]
    copy: bool,

    /// Path to a TTF/OTF font, instead of discovering an installed one
    #[arg(long, value_name = "PATH")]
    font: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut sign = Sign::new(args.width, args.height);
    sign.background = Colour::from_hex(&args.bg).context("parsing --bg")?;
    sign.foreground = Colour::from_hex(&args.fg).context("parsing --fg")?;

    let font = match &args.font {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("reading font file {}", path.display()))?;
            Font::load(bytes)?
        }
        None => Font::discover(FONT_FAMILIES)?,
    };
    let font = sign.add_font(font);

    let vars = sign.template_vars();
    let mut text = String::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        text.push_str(&template::expand_now(&line, &vars));
        text.push('\n');
    }
    let text = text.trim();

    let data_uri = sign.data_uri(font, text)?;
    println!("{data_uri}");
    println!("{text}");

    if args.copy {
        let mut clipboard = arboard::Clipboard::new().context("opening clipboard")?;
        clipboard
            .set_text(data_uri)
            .context("copying image data")?;
        println!("Image data copied to clipboard.");
    }

    Ok(())
}
