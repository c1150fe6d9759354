//! Color Resolution
//!
//! Accepts a CSS color string only if it canonicalizes to an opaque
//! `#rrggbb` value. Anything else (unknown names, malformed syntax,
//! translucent colors) falls back to the configured default.

/// CSS named colors
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff), ("antiquewhite", 0xfaebd7), ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4), ("azure", 0xf0ffff), ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4), ("black", 0x000000), ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff), ("blueviolet", 0x8a2be2), ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887), ("cadetblue", 0x5f9ea0), ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e), ("coral", 0xff7f50), ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc), ("crimson", 0xdc143c), ("cyan", 0x00ffff),
    ("darkblue", 0x00008b), ("darkcyan", 0x008b8b), ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9), ("darkgreen", 0x006400), ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b), ("darkmagenta", 0x8b008b), ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00), ("darkorchid", 0x9932cc), ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a), ("darkseagreen", 0x8fbc8f), ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f), ("darkslategrey", 0x2f4f4f), ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3), ("deeppink", 0xff1493), ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969), ("dimgrey", 0x696969), ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222), ("floralwhite", 0xfffaf0), ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff), ("gainsboro", 0xdcdcdc), ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700), ("goldenrod", 0xdaa520), ("gray", 0x808080),
    ("green", 0x008000), ("greenyellow", 0xadff2f), ("grey", 0x808080),
    ("honeydew", 0xf0fff0), ("hotpink", 0xff69b4), ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082), ("ivory", 0xfffff0), ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa), ("lavenderblush", 0xfff0f5), ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd), ("lightblue", 0xadd8e6), ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff), ("lightgoldenrodyellow", 0xfafad2), ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90), ("lightgrey", 0xd3d3d3), ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a), ("lightseagreen", 0x20b2aa), ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899), ("lightslategrey", 0x778899), ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0), ("lime", 0x00ff00), ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6), ("magenta", 0xff00ff), ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa), ("mediumblue", 0x0000cd), ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db), ("mediumseagreen", 0x3cb371), ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a), ("mediumturquoise", 0x48d1cc), ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970), ("mintcream", 0xf5fffa), ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5), ("navajowhite", 0xffdead), ("navy", 0x000080),
    ("oldlace", 0xfdf5e6), ("olive", 0x808000), ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500), ("orangered", 0xff4500), ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa), ("palegreen", 0x98fb98), ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093), ("papayawhip", 0xffefd5), ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f), ("pink", 0xffc0cb), ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6), ("purple", 0x800080), ("rebeccapurple", 0x663399),
    ("red", 0xff0000), ("rosybrown", 0xbc8f8f), ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513), ("salmon", 0xfa8072), ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57), ("seashell", 0xfff5ee), ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0), ("skyblue", 0x87ceeb), ("slateblue", 0x6a5acd),
    ("slategray", 0x708090), ("slategrey", 0x708090), ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f), ("steelblue", 0x4682b4), ("tan", 0xd2b48c),
    ("teal", 0x008080), ("thistle", 0xd8bfd8), ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0), ("violet", 0xee82ee), ("wheat", 0xf5deb3),
    ("white", 0xffffff), ("whitesmoke", 0xf5f5f5), ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

/// Resolve the color to display: canonical `#rrggbb` of `candidate`, or
/// `default` when the candidate is missing, empty or not an opaque color.
pub fn resolve_color(candidate: Option<&str>, default: &str) -> String {
    match candidate.filter(|c| !c.is_empty()).and_then(canonical_hex) {
        Some(hex) => hex,
        None => default.to_string(),
    }
}

/// Canonical lowercase `#rrggbb` form of an opaque CSS color
pub fn canonical_hex(input: &str) -> Option<String> {
    let color = input.trim().to_ascii_lowercase();

    let rgb = if let Some(hex) = color.strip_prefix('#') {
        parse_hex(hex)?
    } else if color.ends_with(')') {
        parse_function(&color)?
    } else {
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == color)
            .map(|(_, value)| [(value >> 16) as u8, (value >> 8) as u8, *value as u8])?
    };

    Some(format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]))
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 | 4 => {
            if hex.len() == 4 && digit(3)? != 0xf {
                return None;
            }
            Some([digit(0)? * 17, digit(1)? * 17, digit(2)? * 17])
        }
        6 | 8 => {
            if hex.len() == 8 && pair(6)? != 0xff {
                return None;
            }
            Some([pair(0)?, pair(2)?, pair(4)?])
        }
        _ => None,
    }
}

/// `rgb()`, `rgba()`, `hsl()`, `hsla()` in comma or space syntax
fn parse_function(color: &str) -> Option<[u8; 3]> {
    let open = color.find('(')?;
    let name = color[..open].trim();
    let body = &color[open + 1..color.len() - 1];
    let (channels, alpha) = split_arguments(body)?;

    if let Some(alpha) = alpha {
        if parse_alpha(alpha)? < 1.0 {
            return None;
        }
    }

    match name {
        "rgb" | "rgba" => {
            // comma syntax takes all numbers or all percentages
            let percents = channels.iter().filter(|c| c.ends_with('%')).count();
            if body.contains(',') && percents != 0 && percents != channels.len() {
                return None;
            }
            Some([
                parse_rgb_channel(channels[0])?,
                parse_rgb_channel(channels[1])?,
                parse_rgb_channel(channels[2])?,
            ])
        }
        "hsl" | "hsla" => {
            let hue = parse_hue(channels[0])?;
            let saturation = parse_percentage(channels[1])?;
            let lightness = parse_percentage(channels[2])?;
            Some(hsl_to_rgb(hue, saturation, lightness))
        }
        _ => None,
    }
}

fn split_arguments(body: &str) -> Option<([&str; 3], Option<&str>)> {
    let (channels, alpha): (Vec<&str>, Option<&str>) = if body.contains(',') {
        let mut parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let alpha = if parts.len() == 4 { parts.pop() } else { None };
        (parts, alpha)
    } else {
        let mut halves = body.splitn(2, '/');
        let channels = halves.next()?.split_whitespace().collect();
        let alpha = halves.next().map(str::trim);
        (channels, alpha)
    };

    match channels.as_slice() {
        [a, b, c] => Some(([*a, *b, *c], alpha)),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_alpha(s: &str) -> Option<f64> {
    match s.strip_suffix('%') {
        Some(percent) => parse_number(percent).map(|v| v / 100.0),
        None => parse_number(s),
    }
}

fn parse_rgb_channel(s: &str) -> Option<u8> {
    let value = match s.strip_suffix('%') {
        Some(percent) => parse_number(percent)? * 2.55,
        None => parse_number(s)?,
    };
    Some(value.clamp(0.0, 255.0).round() as u8)
}

fn parse_percentage(s: &str) -> Option<f64> {
    let value = parse_number(s.strip_suffix('%').unwrap_or(s))?;
    Some((value / 100.0).clamp(0.0, 1.0))
}

fn parse_hue(s: &str) -> Option<f64> {
    let degrees = if let Some(v) = s.strip_suffix("deg") {
        parse_number(v)?
    } else if let Some(v) = s.strip_suffix("grad") {
        parse_number(v)? * 0.9
    } else if let Some(v) = s.strip_suffix("rad") {
        parse_number(v)?.to_degrees()
    } else if let Some(v) = s.strip_suffix("turn") {
        parse_number(v)? * 360.0
    } else {
        parse_number(s)?
    };
    Some(degrees.rem_euclid(360.0))
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).clamp(0.0, 255.0).round() as u8;
    [channel(r), channel(g), channel(b)]
}
