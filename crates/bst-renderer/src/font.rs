// ABOUTME: Embedded 5x7 bitmap font for node labels.
// ABOUTME: Covers the digits and the minus sign, which is all a key needs.

use crate::bdf::{BdfError, BdfFont};

const LABEL_BDF: &str = "STARTFONT 2.1
FONT -bst-label-medium-r-normal--7-70-75-75-c-60-iso10646-1
SIZE 7 75 75
FONTBOUNDINGBOX 5 7 0 0
STARTPROPERTIES 2
FONT_ASCENT 7
FONT_DESCENT 0
ENDPROPERTIES
CHARS 11
STARTCHAR hyphen
ENCODING 45
DWIDTH 6 0
BBX 5 1 0 3
BITMAP
F8
ENDCHAR
STARTCHAR zero
ENCODING 48
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
70
88
98
A8
C8
88
70
ENDCHAR
STARTCHAR one
ENCODING 49
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
20
60
20
20
20
20
70
ENDCHAR
STARTCHAR two
ENCODING 50
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
70
88
08
10
20
40
F8
ENDCHAR
STARTCHAR three
ENCODING 51
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
F8
10
20
10
08
88
70
ENDCHAR
STARTCHAR four
ENCODING 52
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
10
30
50
90
F8
10
10
ENDCHAR
STARTCHAR five
ENCODING 53
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
F8
80
F0
08
08
88
70
ENDCHAR
STARTCHAR six
ENCODING 54
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
30
40
80
F0
88
88
70
ENDCHAR
STARTCHAR seven
ENCODING 55
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
F8
08
10
20
40
40
40
ENDCHAR
STARTCHAR eight
ENCODING 56
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
70
88
88
70
88
88
70
ENDCHAR
STARTCHAR nine
ENCODING 57
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
70
88
88
78
08
10
60
ENDCHAR
ENDFONT
";

/// Parse the embedded label font
pub fn label_font() -> Result<BdfFont, BdfError> {
    BdfFont::parse_str(LABEL_BDF)
}
