//! `{{VAR}}` substitution applied to sign text before layout.
//!
//! The layout engine never sees template syntax; callers expand the text
//! first and hand the finished string to [`fit`](crate::layout::fit).

use crate::colour::Colour;
use chrono::{DateTime, Datelike, Local};

/// Values available to `{{VAR}}` substitution, derived from the sign being
/// rendered
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars {
    pub width: u32,
    pub height: u32,
    pub foreground: Colour,
    pub background: Colour,
}

/// Replace every supported `{{VAR}}` token in `text` against the given
/// timestamp.
///
/// Supported tokens: `{{TIME}}`, `{{DATE}}`, `{{YEAR}}`, `{{MONTH}}` (full
/// month name), `{{DAY}}`, `{{SIGN_WIDTH}}`, `{{SIGN_HEIGHT}}`,
/// `{{SIGN_PIXELS}}`, `{{BGCOLOR}}`, and `{{COLOR}}` (both as `#rrggbb`)
pub fn expand(text: &str, vars: &TemplateVars, now: &DateTime<Local>) -> String {
    text.replace("{{TIME}}", &now.format("%-I:%M:%S %p").to_string())
        .replace("{{DATE}}", &now.format("%-m/%-d/%Y").to_string())
        .replace("{{YEAR}}", &now.year().to_string())
        .replace("{{MONTH}}", &now.format("%B").to_string())
        .replace("{{DAY}}", &now.day().to_string())
        .replace("{{SIGN_WIDTH}}", &vars.width.to_string())
        .replace("{{SIGN_HEIGHT}}", &vars.height.to_string())
        .replace(
            "{{SIGN_PIXELS}}",
            &(vars.width as u64 * vars.height as u64).to_string(),
        )
        .replace("{{BGCOLOR}}", &vars.background.to_hex())
        .replace("{{COLOR}}", &vars.foreground.to_hex())
}

/// [expand] stamped with the current local time
pub fn expand_now(text: &str, vars: &TemplateVars) -> String {
    expand(text, vars, &Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use chrono::TimeZone;

    fn vars() -> TemplateVars {
        TemplateVars {
            width: 256,
            height: 128,
            foreground: colours::WHITE,
            background: colours::BLUE,
        }
    }

    fn pinned() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 5).unwrap()
    }

    #[test]
    fn date_and_time_tokens() {
        assert_eq!(expand("{{TIME}}", &vars(), &pinned()), "2:30:05 PM");
        assert_eq!(expand("{{DATE}}", &vars(), &pinned()), "3/5/2024");
        assert_eq!(expand("{{YEAR}}", &vars(), &pinned()), "2024");
        assert_eq!(expand("{{MONTH}}", &vars(), &pinned()), "March");
        assert_eq!(expand("{{DAY}}", &vars(), &pinned()), "5");
    }

    #[test]
    fn geometry_and_colour_tokens() {
        assert_eq!(
            expand("{{SIGN_WIDTH}}x{{SIGN_HEIGHT}} = {{SIGN_PIXELS}}", &vars(), &pinned()),
            "256x128 = 32768"
        );
        assert_eq!(expand("{{BGCOLOR}}", &vars(), &pinned()), "#0000ff");
        assert_eq!(expand("{{COLOR}}", &vars(), &pinned()), "#ffffff");
    }

    #[test]
    fn repeated_and_unknown_tokens() {
        assert_eq!(
            expand("{{DAY}} and {{DAY}} again", &vars(), &pinned()),
            "5 and 5 again"
        );
        // unknown tokens pass through untouched
        assert_eq!(expand("{{NOPE}}", &vars(), &pinned()), "{{NOPE}}");
    }
}
