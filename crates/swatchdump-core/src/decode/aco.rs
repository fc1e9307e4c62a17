use crate::formats::aco::{AcoPalette, ColorSpace};
use crate::formats::common::color::aco_rgb_channel;
use crate::{
    ColorRecord, ColorValue, FormatVersion, Palette, SkipReason, SkippedEntry, SourceFormat,
};

pub(super) fn palette_from_aco(parsed: AcoPalette) -> Palette {
    let mut records = Vec::with_capacity(parsed.entries.len());
    let mut skipped = Vec::new();

    for entry in parsed.entries {
        match entry.color_space {
            ColorSpace::Rgb => {
                let [r, g, b, _] = entry.values;
                records.push(ColorRecord {
                    name: entry.name,
                    source_format: SourceFormat::Aco,
                    color: ColorValue::Rgb {
                        r: aco_rgb_channel(r),
                        g: aco_rgb_channel(g),
                        b: aco_rgb_channel(b),
                    },
                });
            }
            space => skipped.push(SkippedEntry {
                index: entry.index,
                offset: entry.offset,
                name: entry.name,
                reason: SkipReason::UnsupportedColorSpace { code: space.code() },
            }),
        }
    }

    Palette {
        format: SourceFormat::Aco,
        version: FormatVersion {
            major: parsed.header.version,
            minor: 0,
        },
        declared_entries: u32::from(parsed.header.num_colors),
        non_color_blocks: 0,
        records,
        skipped,
        bytes_read: parsed.bytes_read,
    }
}
