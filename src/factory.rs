//! Abstract factory: string keys in, product variants out.
//!
//! Lookups never fail loudly. An unknown or missing key simply yields `None`.

use std::fmt;
use tracing::debug;

/* ============================================================
 * Products
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// The canonical key this variant is registered under.
    pub fn key(&self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Return type of [`AbstractFactory::get_shape`]. No factory in this crate
/// produces one yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Square,
    Rectangle,
}

/* ============================================================
 * Factories
 * ============================================================
 */

pub trait AbstractFactory {
    fn get_color(&self, key: Option<&str>) -> Option<Color>;
    fn get_shape(&self, key: Option<&str>) -> Option<Shape>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ColorFactory;

impl ColorFactory {
    pub fn new() -> Self {
        ColorFactory
    }
}

impl AbstractFactory for ColorFactory {
    fn get_color(&self, key: Option<&str>) -> Option<Color> {
        let key = key?;
        let color = Color::ALL
            .into_iter()
            .find(|color| color.key().eq_ignore_ascii_case(key));
        debug!(key, ?color, "color lookup");
        color
    }

    // A color factory has no shapes to hand out.
    fn get_shape(&self, _key: Option<&str>) -> Option<Shape> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_keys_any_case() {
        let factory = ColorFactory::new();
        let cases = [
            ("red", Color::Red),
            ("RED", Color::Red),
            ("Red", Color::Red),
            ("rEd", Color::Red),
            ("green", Color::Green),
            ("GREEN", Color::Green),
            ("blue", Color::Blue),
            ("Blue", Color::Blue),
        ];

        for (key, expected) in cases {
            assert_eq!(factory.get_color(Some(key)), Some(expected), "key {key:?}");
        }
    }

    #[test]
    fn test_unrecognized_keys_are_absent() {
        let factory = ColorFactory::new();
        for key in ["", "purple", "reds", " red", "blue ", "CIRCLE", "grEEn!"] {
            assert_eq!(factory.get_color(Some(key)), None, "key {key:?}");
        }
    }

    #[test]
    fn test_absent_key_is_absent() {
        assert_eq!(ColorFactory::new().get_color(None), None);
    }

    #[test]
    fn test_get_shape_always_absent() {
        let factory = ColorFactory::new();
        for key in [Some("circle"), Some("SQUARE"), Some("rectangle"), Some("hexagon"), Some(""), None] {
            assert_eq!(factory.get_shape(key), None, "key {key:?}");
        }
    }

    #[test]
    fn test_display_uses_canonical_key() {
        assert_eq!(Color::Red.to_string(), "RED");
        assert_eq!(Color::Green.to_string(), "GREEN");
        assert_eq!(Color::Blue.to_string(), "BLUE");
    }

    #[test]
    fn test_factory_behind_trait_object() {
        let factory: Box<dyn AbstractFactory> = Box::new(ColorFactory);
        assert_eq!(factory.get_color(Some("GrEeN")), Some(Color::Green));
        assert_eq!(factory.get_shape(Some("circle")), None);
    }
}
