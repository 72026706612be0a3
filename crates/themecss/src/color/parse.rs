//! CSS color value parsing.
//!
//! Built on the `cssparser` tokenizer, so comments, escapes and whitespace are
//! handled the way a browser would. Recognized syntax:
//!
//! | Syntax | Example |
//! |--------|---------|
//! | Hex | `#fff`, `#ffff`, `#ffffff`, `#ffffff80` |
//! | `rgb()` / `rgba()` | `rgb(64, 128, 192)`, `rgb(25% 50% 75% / 0.5)` |
//! | `hsl()` / `hsla()` | `hsl(210 50% 50%)`, `hsl(0.5turn, 50%, 50%)` |
//! | `oklch()` | `oklch(0.628 0.258 29.23)`, `oklch(100% 0 0 / 10%)` |
//! | `oklab()` | `oklab(0.628 0.225 0.126)` |
//! | Keywords | `rebeccapurple`, `transparent` |
//!
//! Both the legacy comma-separated and the modern space-separated forms are
//! accepted, with alpha either as a fourth comma argument or after `/`.

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::named;
use super::space::{Hsl, Oklab, Oklch, Srgb};

/// Percentages on OKLCH/OKLab chroma and a/b axes are relative to 0.4.
const OK_PERCENT_SCALE: f64 = 0.4;

/// Parses a CSS color string into sRGB.
///
/// Returns `None` for anything that isn't a single, complete color value.
pub fn parse_color(value: &str) -> Option<Srgb> {
    let mut input = ParserInput::new(value.trim());
    let mut parser = Parser::new(&mut input);
    parser.parse_entirely(parse_color_value).ok()
}

fn invalid<'i>(input: &Parser<'i, '_>) -> ParseError<'i, ()> {
    input.new_custom_error::<(), ()>(())
}

fn parse_color_value<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Srgb, ParseError<'i, ()>> {
    let token = input.next()?.clone();
    match token {
        Token::Hash(ref hex) | Token::IDHash(ref hex) => {
            parse_hex(hex).ok_or_else(|| invalid(input))
        }
        Token::Ident(ref name) => named::lookup(name).ok_or_else(|| invalid(input)),
        Token::Function(ref name) => {
            let function = name.to_ascii_lowercase();
            input.parse_nested_block(|args| {
                let components = parse_components(args)?;
                let color = match function.as_str() {
                    "rgb" | "rgba" => components.to_rgb(),
                    "hsl" | "hsla" => components.to_hsl(),
                    "oklch" => components.to_oklch(),
                    "oklab" => components.to_oklab(),
                    _ => None,
                };
                color.ok_or_else(|| invalid(args))
            })
        }
        _ => Err(invalid(input)),
    }
}

/// Parses hex digits (without `#`) in 3, 4, 6 or 8 digit form.
fn parse_hex(hex: &str) -> Option<Srgb> {
    if !hex.is_ascii() {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let (r, g, b, a) = match hex.len() {
        3 => (digit(0)?, digit(1)?, digit(2)?, 255),
        4 => (digit(0)?, digit(1)?, digit(2)?, digit(3)?),
        6 => (pair(0)?, pair(2)?, pair(4)?, 255),
        8 => (pair(0)?, pair(2)?, pair(4)?, pair(6)?),
        _ => return None,
    };
    Some(Srgb::from_u8(r, g, b).with_alpha(a as f64 / 255.0))
}

// ─── Function arguments ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Number(f64),
    /// Percentage as a unit value (`50%` → `0.5`).
    Percentage(f64),
    /// An angle dimension, converted to degrees.
    Degrees(f64),
    /// The `none` keyword.
    Missing,
}

impl Component {
    /// Numeric value, with percentages scaled by `percent_scale`.
    fn value(self, percent_scale: f64) -> Option<f64> {
        match self {
            Component::Number(n) => Some(n),
            Component::Percentage(p) => Some(p * percent_scale),
            Component::Missing => Some(0.0),
            Component::Degrees(_) => None,
        }
    }

    /// Hue in degrees; `Some(None)` for `none`.
    fn hue(self) -> Option<Option<f64>> {
        match self {
            Component::Number(deg) | Component::Degrees(deg) => Some(Some(deg)),
            Component::Missing => Some(None),
            Component::Percentage(_) => None,
        }
    }
}

struct Components {
    channels: [Component; 3],
    alpha: Option<Component>,
}

impl Components {
    fn alpha(&self) -> Option<f64> {
        match self.alpha {
            Some(a) => a.value(1.0),
            None => Some(1.0),
        }
    }

    fn to_rgb(&self) -> Option<Srgb> {
        let [r, g, b] = self.channels;
        let channel = |c: Component| c.value(255.0).map(|v| v / 255.0);
        Some(
            Srgb::new(channel(r)?, channel(g)?, channel(b)?)
                .clamped()
                .with_alpha(self.alpha()?),
        )
    }

    fn to_hsl(&self) -> Option<Srgb> {
        let [h, s, l] = self.channels;
        let hsl = Hsl {
            h: h.hue()?,
            s: s.value(100.0)? / 100.0,
            l: l.value(100.0)? / 100.0,
            alpha: 1.0,
        };
        Some(hsl.to_srgb().with_alpha(self.alpha()?))
    }

    fn to_oklch(&self) -> Option<Srgb> {
        let [l, c, h] = self.channels;
        let oklch = Oklch {
            l: l.value(1.0)?,
            c: c.value(OK_PERCENT_SCALE)?.max(0.0),
            h: h.hue()?,
            alpha: 1.0,
        };
        Some(oklch.to_srgb().with_alpha(self.alpha()?))
    }

    fn to_oklab(&self) -> Option<Srgb> {
        let [l, a, b] = self.channels;
        let oklab = Oklab {
            l: l.value(1.0)?,
            a: a.value(OK_PERCENT_SCALE)?,
            b: b.value(OK_PERCENT_SCALE)?,
            alpha: 1.0,
        };
        Some(oklab.to_srgb().with_alpha(self.alpha()?))
    }
}

fn angle_to_degrees(value: f64, unit: &str) -> Option<f64> {
    match unit.to_ascii_lowercase().as_str() {
        "deg" => Some(value),
        "grad" => Some(value * 0.9),
        "rad" => Some(value.to_degrees()),
        "turn" => Some(value * 360.0),
        _ => None,
    }
}

fn parse_components<'i, 't>(
    input: &mut Parser<'i, 't>,
) -> Result<Components, ParseError<'i, ()>> {
    let mut channels = Vec::with_capacity(4);
    let mut alpha = None;
    let mut after_slash = false;

    while !input.is_exhausted() {
        let token = input.next()?.clone();
        let component = match token {
            Token::Comma => continue,
            Token::Delim('/') if !after_slash => {
                after_slash = true;
                continue;
            }
            Token::Number { value, .. } => Component::Number(value as f64),
            Token::Percentage { unit_value, .. } => Component::Percentage(unit_value as f64),
            Token::Dimension {
                value, ref unit, ..
            } => {
                let degrees = angle_to_degrees(value as f64, unit).ok_or_else(|| invalid(input))?;
                Component::Degrees(degrees)
            }
            Token::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => Component::Missing,
            _ => return Err(invalid(input)),
        };

        if after_slash {
            if alpha.is_some() {
                return Err(invalid(input));
            }
            alpha = Some(component);
        } else {
            channels.push(component);
        }
    }

    // Legacy comma syntax: rgba(r, g, b, a)
    if alpha.is_none() && channels.len() == 4 {
        alpha = channels.pop();
    }
    if channels.len() != 3 {
        return Err(invalid(input));
    }

    Ok(Components {
        channels: [channels[0], channels[1], channels[2]],
        alpha,
    })
}
