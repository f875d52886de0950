use crate::PackedAlpha;
use std::io::{self, Write};

const BYTES_PER_LINE: usize = 16;

/// Write the stream as a C array definition that firmware can `#include`.
pub fn write_c_array<W: Write>(
    packed: &PackedAlpha,
    symbol: &str,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(
        writer,
        "// {} alpha map, 2 bits per pixel, crc32 {:#010x}",
        packed.canvas(),
        packed.crc()
    )?;
    writeln!(writer, "const unsigned char {}[{}] = {{", symbol, packed.len())?;

    for line in packed.as_bytes().chunks(BYTES_PER_LINE) {
        let values = line
            .iter()
            .map(|byte| format!("{:#04x}", byte))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(writer, "    {},", values)?;
    }

    writeln!(writer, "}};")
}

/// Whether `symbol` can be used as a C identifier.
pub fn is_c_identifier(symbol: &str) -> bool {
    let mut chars = symbol.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Canvas;

    #[test]
    fn identifiers() {
        assert!(is_c_identifier("world_map"));
        assert!(is_c_identifier("_map2"));
        assert!(!is_c_identifier("2map"));
        assert!(!is_c_identifier("world-map"));
        assert!(!is_c_identifier(""));
    }

    #[test]
    fn array_layout() {
        let canvas = Canvas::new(72, 1);
        let packed = PackedAlpha::from_bytes((0..18).collect(), canvas).unwrap();

        let mut out = Vec::new();
        write_c_array(&packed, "world_map", &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();

        assert!(lines[0].starts_with("// 72x1 alpha map"));
        assert_eq!(lines[1], "const unsigned char world_map[18] = {");
        assert!(lines[2].starts_with("    0x00, 0x01, 0x02,"));
        assert!(lines[2].ends_with("0x0f,"));
        assert_eq!(lines[3], "    0x10, 0x11,");
        assert_eq!(lines[4], "};");
        assert_eq!(lines.len(), 5);
    }
}
