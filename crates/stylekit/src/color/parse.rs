//! Color value parsing.

use cssparser::color::parse_named_color;
use cssparser::{ParseError, Parser, ParserInput, Token};

use super::convert::{Hsla, Rgba};
use crate::{Error, Result};

type ParseResult<'i, T> = std::result::Result<T, ParseError<'i, ()>>;

/// Parse a CSS color value.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()`,
/// `hsl()`/`hsla()` in comma or space syntax (with an optional `/ alpha`),
/// named colors and `transparent`.
pub fn parse_color(input: &str) -> Result<Rgba> {
    let mut parser_input = ParserInput::new(input.trim());
    let mut parser = Parser::new(&mut parser_input);
    parser
        .parse_entirely(parse_color_value)
        .map_err(|_| Error::invalid_color(input))
}

fn parse_color_value<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Rgba> {
    let location = parser.current_source_location();

    match parser.next()?.clone() {
        Token::Hash(hash) | Token::IDHash(hash) => {
            parse_hex(&hash).ok_or_else(|| location.new_custom_error(()))
        }
        Token::Ident(name) if name.eq_ignore_ascii_case("transparent") => {
            Ok(Rgba::new(0.0, 0.0, 0.0, 0.0))
        }
        Token::Ident(name) => parse_named_color(&name)
            .map(|(r, g, b)| Rgba::from([r, g, b]))
            .map_err(|()| location.new_custom_error(())),
        Token::Function(name) => match name.to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => parser.parse_nested_block(parse_rgb_arguments),
            "hsl" | "hsla" => parser.parse_nested_block(parse_hsl_arguments),
            _ => Err(location.new_custom_error(())),
        },
        _ => Err(location.new_custom_error(())),
    }
}

/// Parse hex digits without the leading `#`.
pub(crate) fn parse_hex(digits: &str) -> Option<Rgba> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    let [r, g, b, a] = match digits.len() {
        3 => [nibble(0)?, nibble(1)?, nibble(2)?, 255],
        4 => [nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?],
        6 => [byte(0)?, byte(2)?, byte(4)?, 255],
        8 => [byte(0)?, byte(2)?, byte(4)?, byte(6)?],
        _ => return None,
    };

    Some(Rgba::new(
        f64::from(r),
        f64::from(g),
        f64::from(b),
        f64::from(a) / 255.0,
    ))
}

fn parse_rgb_arguments<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Rgba> {
    let r = parse_channel(parser)?;
    let commas = parser.try_parse(|p| p.expect_comma()).is_ok();
    let g = parse_channel(parser)?;
    expect_separator(parser, commas)?;
    let b = parse_channel(parser)?;
    let a = parse_optional_alpha(parser, commas)?;
    Ok(Rgba::new(r, g, b, a))
}

fn parse_hsl_arguments<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Rgba> {
    let h = parse_hue(parser)?;
    let commas = parser.try_parse(|p| p.expect_comma()).is_ok();
    let s = parse_percentage(parser)?;
    expect_separator(parser, commas)?;
    let l = parse_percentage(parser)?;
    let a = parse_optional_alpha(parser, commas)?;
    Ok(Hsla::new(h, s, l, a).to_rgba())
}

fn expect_separator<'i>(parser: &mut Parser<'i, '_>, commas: bool) -> ParseResult<'i, ()> {
    if commas {
        parser.expect_comma()?;
    }
    Ok(())
}

fn parse_optional_alpha<'i>(parser: &mut Parser<'i, '_>, commas: bool) -> ParseResult<'i, f64> {
    if parser.is_exhausted() {
        return Ok(1.0);
    }
    if commas {
        parser.expect_comma()?;
    } else {
        parser.expect_delim('/')?;
    }

    let location = parser.current_source_location();
    match *parser.next()? {
        Token::Number { value, .. } => Ok(f64::from(value).clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(f64::from(unit_value).clamp(0.0, 1.0)),
        _ => Err(location.new_custom_error(())),
    }
}

/// A channel as a number in `0..=255` or a percentage.
fn parse_channel<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f64> {
    let location = parser.current_source_location();
    match *parser.next()? {
        Token::Number { value, .. } => Ok(f64::from(value)),
        Token::Percentage { unit_value, .. } => Ok(f64::from(unit_value) * 255.0),
        _ => Err(location.new_custom_error(())),
    }
}

/// A hue in degrees, either bare or with an angle unit.
fn parse_hue<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f64> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok(f64::from(value)),
        Token::Dimension { value, unit, .. } => {
            let value = f64::from(value);
            match unit.to_ascii_lowercase().as_str() {
                "deg" => Ok(value),
                "grad" => Ok(value * 0.9),
                "rad" => Ok(value.to_degrees()),
                "turn" => Ok(value * 360.0),
                _ => Err(location.new_custom_error(())),
            }
        }
        _ => Err(location.new_custom_error(())),
    }
}

fn parse_percentage<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f64> {
    let location = parser.current_source_location();
    match *parser.next()? {
        Token::Percentage { unit_value, .. } => Ok(f64::from(unit_value) * 100.0),
        _ => Err(location.new_custom_error(())),
    }
}
