mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// The auto-fit layout engine: word wrapping plus the decreasing font-size search
pub mod layout;

mod render;
pub use render::*;

mod sign;
pub use sign::*;

/// `{{VAR}}` substitution applied to sign text before layout
pub mod template;

mod units;
pub use units::*;
