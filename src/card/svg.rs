//! Card template - CardModel → SVG markup
//!
//! The template is laid out at a fixed logical width so export geometry is
//! deterministic no matter where a card was previously displayed. Height
//! grows with the wrapped feedback text.

use crate::card::renderer::CardModel;

/// Fixed export width in logical units.
pub const CARD_WIDTH: f64 = 400.0;

const PADDING_TOP: f64 = 24.0;
const PADDING_BOTTOM: f64 = 28.0;
const AVATAR_SIZE: f64 = 120.0;
const FEEDBACK_WRAP_CHARS: usize = 44;
const FEEDBACK_LINE_HEIGHT: f64 = 22.0;
const STAR_OUTER_RADIUS: f64 = 12.0;
const STAR_INNER_RADIUS: f64 = 4.8;
const STAR_SPACING: f64 = 30.0;
const FONT_FAMILY: &str = "sans-serif";

/// Build the SVG document for one card.
///
/// `image_href` is the resolved image reference (a data URI); `None` draws
/// the neutral gray placeholder.
pub fn card_markup(card: &CardModel, image_href: Option<&str>) -> String {
    let center_x = CARD_WIDTH / 2.0;
    let avatar_top = PADDING_TOP;
    let avatar_cy = avatar_top + AVATAR_SIZE / 2.0;

    let mut body = String::new();

    // Profile image, clipped to a circle
    match image_href {
        Some(href) => {
            body.push_str(&format!(
                r##"<image x="{x}" y="{avatar_top}" width="{AVATAR_SIZE}" height="{AVATAR_SIZE}" preserveAspectRatio="xMidYMid slice" clip-path="url(#avatarClip)" href="{href}"/>"##,
                x = center_x - AVATAR_SIZE / 2.0,
                href = escape_xml(href),
            ));
        }
        None => {
            body.push_str(&format!(
                r##"<circle cx="{center_x}" cy="{avatar_cy}" r="{r}" fill="#E0E0E0"/>"##,
                r = AVATAR_SIZE / 2.0,
            ));
            body.push_str(&format!(
                r##"<text x="{center_x}" y="{y}" font-family="{FONT_FAMILY}" font-size="18" fill="#808080" text-anchor="middle">No Pic</text>"##,
                y = avatar_cy + 6.0,
            ));
        }
    }
    body.push('\n');

    // Feedback, wrapped and centered; `y` walks the baselines from here on
    let mut y = avatar_top + AVATAR_SIZE + 38.0;
    for line in wrap_text(&card.feedback, FEEDBACK_WRAP_CHARS) {
        body.push_str(&format!(
            r##"<text x="{center_x}" y="{y}" font-family="{FONT_FAMILY}" font-size="16" font-style="italic" fill="#444444" text-anchor="middle">{}</text>"##,
            escape_xml(&line),
        ));
        body.push('\n');
        y += FEEDBACK_LINE_HEIGHT;
    }

    // Star row: always exactly five units, filled then empty
    let star_cy = y + STAR_OUTER_RADIUS;
    let row_width = STAR_SPACING * card.stars.len() as f64;
    let mut star_cx = center_x - row_width / 2.0 + STAR_SPACING / 2.0;
    for filled in card.stars {
        let d = star_path(star_cx, star_cy);
        if filled {
            body.push_str(&format!(r##"<path d="{d}" fill="#FFC107"/>"##));
        } else {
            body.push_str(&format!(
                r##"<path d="{d}" fill="none" stroke="#C0C0C0" stroke-width="1.5"/>"##
            ));
        }
        star_cx += STAR_SPACING;
    }
    body.push('\n');
    y = star_cy + STAR_OUTER_RADIUS + 34.0;

    // Name, school, class
    body.push_str(&format!(
        r##"<text x="{center_x}" y="{y}" font-family="{FONT_FAMILY}" font-size="20" font-weight="bold" fill="#333333" text-anchor="middle">{}</text>"##,
        escape_xml(&card.name),
    ));
    body.push('\n');
    y += 24.0;
    body.push_str(&format!(
        r##"<text x="{center_x}" y="{y}" font-family="{FONT_FAMILY}" font-size="14" fill="#777777" text-anchor="middle">{}</text>"##,
        escape_xml(&card.school),
    ));
    body.push('\n');
    y += 20.0;
    body.push_str(&format!(
        r##"<text x="{center_x}" y="{y}" font-family="{FONT_FAMILY}" font-size="14" fill="#777777" text-anchor="middle">{}</text>"##,
        escape_xml(&card.class),
    ));
    body.push('\n');

    let height = y + PADDING_BOTTOM;

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_WIDTH}" height="{height}" viewBox="0 0 {CARD_WIDTH} {height}">
<defs><clipPath id="avatarClip"><circle cx="{center_x}" cy="{avatar_cy}" r="{r}"/></clipPath></defs>
<rect x="0.5" y="0.5" width="{w}" height="{h}" rx="16" fill="#FFFFFF" stroke="#E0E0E0"/>
{body}</svg>
"##,
        r = AVATAR_SIZE / 2.0,
        w = CARD_WIDTH - 1.0,
        h = height - 1.0,
    )
}

/// Five-pointed star outline centered on (cx, cy), starting at the top tip.
fn star_path(cx: f64, cy: f64) -> String {
    let mut d = String::new();
    for k in 0..10 {
        let angle = (k as f64 * 36.0 - 90.0).to_radians();
        let radius = if k % 2 == 0 {
            STAR_OUTER_RADIUS
        } else {
            STAR_INNER_RADIUS
        };
        let x = cx + radius * angle.cos();
        let y = cy + radius * angle.sin();
        let command = if k == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{command}{x:.2} {y:.2} "));
    }
    d.push('Z');
    d
}

/// Greedy word wrap; words longer than a full line are hard-split.
pub(crate) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            let head: String = word.chars().take(max_chars).collect();
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            word = &word[head.len()..];
            lines.push(head);
        }
        if line.is_empty() {
            line.push_str(word);
        } else if line.chars().count() + 1 + word.chars().count() <= max_chars {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Minimal XML escaping for text nodes and attribute values.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
