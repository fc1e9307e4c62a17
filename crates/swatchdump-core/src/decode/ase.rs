use crate::formats::ase::{AseColor, AseDocument};
use crate::formats::common::color::{
    ase_lab_axis, ase_lab_lightness, ase_percent, ase_rgb_channel,
};
use crate::{
    ColorRecord, ColorValue, FormatVersion, Palette, SkipReason, SkippedEntry, SourceFormat,
};

pub(super) fn palette_from_ase(parsed: AseDocument) -> Palette {
    let mut records = Vec::with_capacity(parsed.entries.len());
    let mut skipped = Vec::new();

    for entry in parsed.entries {
        let color = match entry.color {
            AseColor::Rgb([r, g, b]) => ColorValue::Rgb {
                r: ase_rgb_channel(r),
                g: ase_rgb_channel(g),
                b: ase_rgb_channel(b),
            },
            AseColor::Cmyk([c, m, y, k]) => ColorValue::Cmyk {
                c: ase_percent(c),
                m: ase_percent(m),
                y: ase_percent(y),
                k: ase_percent(k),
            },
            AseColor::Lab([l, a, b]) => ColorValue::Lab {
                l: ase_lab_lightness(l),
                a: ase_lab_axis(a),
                b: ase_lab_axis(b),
            },
            AseColor::Unsupported { mode } => {
                skipped.push(SkippedEntry {
                    index: entry.block_index as usize,
                    offset: entry.offset,
                    name: Some(entry.name).filter(|name| !name.is_empty()),
                    reason: SkipReason::UnsupportedColorMode { mode },
                });
                continue;
            }
        };
        records.push(ColorRecord {
            name: Some(entry.name).filter(|name| !name.is_empty()),
            source_format: SourceFormat::Ase,
            color,
        });
    }

    Palette {
        format: SourceFormat::Ase,
        version: FormatVersion {
            major: parsed.major,
            minor: parsed.minor,
        },
        declared_entries: parsed.num_blocks,
        non_color_blocks: parsed.skipped_blocks,
        records,
        skipped,
        bytes_read: parsed.bytes_read,
    }
}
