//! Night-sky ASCII banner (BetterRest).
//! Figlet standard font, shaded left to right from dusk to moonlight.

use crossterm::QueueableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "BetterRest";

/// Dusk (#3a3f9e) at the left edge.
const DUSK: [u8; 3] = [0x3a, 0x3f, 0x9e];
/// Moonlight (#e8e4c9) at the right edge.
const MOONLIGHT: [u8; 3] = [0xe8, 0xe4, 0xc9];

/// Colour for column `col` of a banner `width` columns wide.
fn column_color(col: usize, width: usize) -> [u8; 3] {
    let t = if width <= 1 {
        0.0
    } else {
        col as f64 / (width - 1) as f64
    };
    let mut rgb = [0u8; 3];
    for (out, (from, to)) in rgb.iter_mut().zip(DUSK.iter().zip(MOONLIGHT.iter())) {
        *out = (f64::from(*from) + (f64::from(*to) - f64::from(*from)) * t).round() as u8;
    }
    rgb
}

/// Banner rows; falls back to the plain title if the font cannot render it.
fn banner_lines(title: &str) -> Vec<String> {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(title).map(|figure| figure.to_string()))
        .map(|art| {
            art.lines()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_else(|| vec![title.to_string()])
}

/// Prints the welcome banner followed by the version line.
pub fn print_welcome() {
    let lines = banner_lines(TITLE);
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = stdout();

    for line in &lines {
        for (col, ch) in line.chars().enumerate() {
            let [r, g, b] = column_color(col, width);
            let _ = out.queue(SetForegroundColor(Color::Rgb { r, g, b }));
            let _ = out.queue(Print(ch));
        }
        let _ = out.queue(ResetColor);
        let _ = out.queue(Print("\r\n"));
    }

    let [r, g, b] = MOONLIGHT;
    let _ = out.queue(SetForegroundColor(Color::Rgb { r, g, b }));
    let _ = out.queue(Print(format!(
        "v{}  find your ideal bedtime\r\n\r\n",
        env!("CARGO_PKG_VERSION")
    )));
    let _ = out.queue(ResetColor);
    let _ = out.flush();
}
