use console::Style;
use once_cell::sync::Lazy;

pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static SLUG: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());
