// ABOUTME: BDF (Bitmap Distribution Format) font parser.
// ABOUTME: Loads bitmap glyphs for drawing node labels into raster images.

use std::collections::HashMap;

/// A parsed BDF font
#[derive(Debug, Clone)]
pub struct BdfFont {
    /// Font ascent (from FONT_ASCENT, or derived from the bounding box)
    pub ascent: i32,
    /// Font descent (from FONT_DESCENT, or derived from the bounding box)
    pub descent: i32,
    /// Glyphs indexed by Unicode codepoint
    pub glyphs: HashMap<u32, BdfGlyph>,
}

/// A single glyph in a BDF font
#[derive(Debug, Clone)]
pub struct BdfGlyph {
    pub encoding: u32,
    /// Horizontal advance in pixels
    pub dwidth_x: i32,
    pub width: u32,
    pub height: u32,
    pub offset_x: i32,
    /// Y offset of the glyph's bottom row from the baseline
    pub offset_y: i32,
    /// One entry per row, bits left-aligned
    pub bitmap: Vec<Vec<u8>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BdfError {
    #[error("Invalid BDF format: {0}")]
    InvalidFormat(String),
    #[error("Failed to parse number: {0}")]
    ParseNumber(String),
}

fn numbers<const N: usize>(rest: &str, what: &str) -> Result<[i32; N], BdfError> {
    let mut out = [0i32; N];
    let mut parts = rest.split_whitespace();
    for slot in out.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| BdfError::ParseNumber(format!("{}: {:?}", what, rest)))?;
        *slot = part
            .parse()
            .map_err(|_| BdfError::ParseNumber(format!("{}: {:?}", what, rest)))?;
    }
    Ok(out)
}

fn hex_row(line: &str) -> Result<Vec<u8>, BdfError> {
    let line = line.trim();
    if line.len() % 2 != 0 || !line.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BdfError::InvalidFormat(format!("Invalid bitmap row: {:?}", line)));
    }
    (0..line.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&line[i..i + 2], 16)
                .map_err(|_| BdfError::InvalidFormat(format!("Invalid hex: {:?}", line)))
        })
        .collect()
}

impl BdfFont {
    /// Parse a BDF font from its text form
    pub fn parse_str(content: &str) -> Result<Self, BdfError> {
        let mut lines = content.lines().map(str::trim);

        match lines.next() {
            Some(first) if first.starts_with("STARTFONT") => {}
            _ => return Err(BdfError::InvalidFormat("Missing STARTFONT".into())),
        }

        let mut ascent = None;
        let mut descent = None;
        let mut bbox = [0i32; 4];
        let mut glyphs = HashMap::new();
        let mut current: Option<BdfGlyph> = None;
        let mut in_bitmap = false;

        for line in lines {
            if let Some(glyph) = current.as_mut() {
                if line == "ENDCHAR" {
                    if let Some(done) = current.take() {
                        glyphs.insert(done.encoding, done);
                    }
                    in_bitmap = false;
                } else if in_bitmap {
                    glyph.bitmap.push(hex_row(line)?);
                } else if let Some(rest) = line.strip_prefix("ENCODING ") {
                    let [enc] = numbers::<1>(rest, "ENCODING")?;
                    glyph.encoding = u32::try_from(enc)
                        .map_err(|_| BdfError::InvalidFormat(format!("Negative encoding {}", enc)))?;
                } else if let Some(rest) = line.strip_prefix("DWIDTH ") {
                    glyph.dwidth_x = numbers::<2>(rest, "DWIDTH")?[0];
                } else if let Some(rest) = line.strip_prefix("BBX ") {
                    let [w, h, x, y] = numbers::<4>(rest, "BBX")?;
                    glyph.width = w.max(0) as u32;
                    glyph.height = h.max(0) as u32;
                    glyph.offset_x = x;
                    glyph.offset_y = y;
                } else if line == "BITMAP" {
                    in_bitmap = true;
                }
                continue;
            }

            if line.starts_with("STARTCHAR") {
                current = Some(BdfGlyph {
                    encoding: 0,
                    dwidth_x: bbox[0],
                    width: bbox[0].max(0) as u32,
                    height: bbox[1].max(0) as u32,
                    offset_x: bbox[2],
                    offset_y: bbox[3],
                    bitmap: Vec::new(),
                });
            } else if let Some(rest) = line.strip_prefix("FONTBOUNDINGBOX ") {
                bbox = numbers::<4>(rest, "FONTBOUNDINGBOX")?;
            } else if let Some(rest) = line.strip_prefix("FONT_ASCENT ") {
                ascent = Some(numbers::<1>(rest, "FONT_ASCENT")?[0]);
            } else if let Some(rest) = line.strip_prefix("FONT_DESCENT ") {
                descent = Some(numbers::<1>(rest, "FONT_DESCENT")?[0]);
            } else if line == "ENDFONT" {
                break;
            }
        }

        if current.is_some() {
            return Err(BdfError::InvalidFormat("Unterminated STARTCHAR".into()));
        }

        // bbox[3] is the (usually negative) distance from baseline to bottom
        let descent = descent.unwrap_or(-bbox[3]);
        let ascent = ascent.unwrap_or(bbox[1] - descent);

        Ok(Self {
            ascent,
            descent,
            glyphs,
        })
    }

    pub fn get_char(&self, c: char) -> Option<&BdfGlyph> {
        self.glyphs.get(&(c as u32))
    }

    /// Cell height (ascent + descent)
    pub fn cell_height(&self) -> u32 {
        (self.ascent + self.descent).max(0) as u32
    }

    /// Width of `text` in unscaled pixels; unknown characters advance nothing
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars()
            .filter_map(|c| self.get_char(c))
            .map(|g| g.dwidth_x.max(0) as u32)
            .sum()
    }
}

impl BdfGlyph {
    /// Whether the pixel at `(col, row)` of the glyph box is set
    pub fn pixel(&self, col: u32, row: u32) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let Some(bytes) = self.bitmap.get(row as usize) else {
            return false;
        };
        let byte = bytes.get((col / 8) as usize).copied().unwrap_or(0);
        (byte >> (7 - col % 8)) & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_BDF: &str = r#"STARTFONT 2.1
FONT -Test-Fixed-Medium-R-Normal--13-120-75-75-C-60-ISO10646-1
SIZE 13 75 75
FONTBOUNDINGBOX 6 13 0 -2
STARTPROPERTIES 2
FONT_ASCENT 11
FONT_DESCENT 2
ENDPROPERTIES
CHARS 1
STARTCHAR A
ENCODING 65
SWIDTH 480 0
DWIDTH 6 0
BBX 6 13 0 -2
BITMAP
00
00
20
50
88
88
88
F8
88
88
88
00
00
ENDCHAR
ENDFONT
"#;

    #[test]
    fn parses_header_and_glyph() {
        let font = BdfFont::parse_str(TEST_BDF).unwrap();
        assert_eq!(font.ascent, 11);
        assert_eq!(font.descent, 2);
        assert_eq!(font.cell_height(), 13);

        let a = font.get_char('A').unwrap();
        assert_eq!(a.encoding, 65);
        assert_eq!((a.width, a.height, a.offset_y), (6, 13, -2));
        assert_eq!(a.bitmap.len(), 13);
        assert_eq!(font.text_width("AA?"), 12);
    }

    #[test]
    fn reads_glyph_pixels() {
        let font = BdfFont::parse_str(TEST_BDF).unwrap();
        let a = font.get_char('A').unwrap();
        // Row 2: 0x20 = 00100000
        assert!(a.pixel(2, 2));
        assert!(!a.pixel(0, 2));
        // Row 7: 0xF8 = 11111000
        assert!(a.pixel(0, 7) && a.pixel(4, 7));
        assert!(!a.pixel(5, 7));
        assert!(!a.pixel(9, 7));
    }

    #[test]
    fn rejects_garbage() {
        assert!(BdfFont::parse_str("hello").is_err());
        assert!(BdfFont::parse_str("STARTFONT 2.1\nSTARTCHAR x\nBITMAP\nZZ\nENDCHAR\n").is_err());
        assert!(BdfFont::parse_str("STARTFONT 2.1\nSTARTCHAR x\nENCODING 1\n").is_err());
    }
}
