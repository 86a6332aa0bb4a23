use sign_gen::{Font, Sign};

fn main() {
    // use whichever bold sans-serif the system has to offer
    let font = Font::discover(&["Arial", "Helvetica"]).expect("can find a font");

    let mut sign = Sign::new(256, 256);
    let font = sign.add_font(font);

    let mut out = std::fs::File::create("hello-sign.png").unwrap();
    sign.write(font, "Hello World!", &mut out).unwrap();
}
