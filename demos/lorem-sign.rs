use sign_gen::{colours, Font, Sign};

fn main() {
    let font = Font::discover(&["Arial", "Helvetica"]).expect("can find a font");

    // a wall of text exercises the wrap-and-shrink search much harder than a
    // short slogan does
    let mut sign = Sign::new(512, 512);
    sign.background = colours::BLACK;
    sign.foreground = colours::GREEN;
    let font = sign.add_font(font);

    let mut out = std::fs::File::create("lorem-sign.png").unwrap();
    sign.write(font, &lipsum::lipsum(40), &mut out).unwrap();
}
