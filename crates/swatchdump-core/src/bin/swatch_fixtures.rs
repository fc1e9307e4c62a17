use std::fs;
use std::path::{Path, PathBuf};

const ASE_SIGNATURE: &[u8; 4] = b"ASEF";
const ASE_BLOCK_COLOR_ENTRY: u16 = 0x0001;
const ASE_BLOCK_GROUP_START: u16 = 0xC001;
const ASE_BLOCK_GROUP_END: u16 = 0xC002;
const ASE_COLOR_TYPE_GLOBAL: u16 = 0x0000;

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests/golden");
    write_aco_fixtures(&root)?;
    write_ase_fixtures(&root)?;
    Ok(())
}

fn write_aco_fixtures(root: &Path) -> Result<(), String> {
    let v1 = AcoSpec {
        version: 1,
        entries: vec![
            (0, [65535, 0, 0, 0], ""),
            (0, [0, 32768, 65280, 0], ""),
            (2, [1, 2, 3, 4], ""),
        ],
    };
    write_fixture(root.join("aco_v1").join("input.aco"), v1.encode())?;

    let v2 = AcoSpec {
        version: 2,
        entries: vec![
            (0, [65280, 0, 32768, 0], "Gr"),
            (0, [4096, 8192, 12288, 0], "Dusk Blue"),
        ],
    };
    write_fixture(root.join("aco_v2").join("input.aco"), v2.encode())?;
    Ok(())
}

fn write_ase_fixtures(root: &Path) -> Result<(), String> {
    let blocks = vec![
        group_start("Tollens"),
        color_entry("Red", b"RGB ", &[1.0, 0.0, 0.0]),
        color_entry("Ink", b"CMYK", &[0.5, 0.25, 0.0, 1.0]),
        color_entry("Clay", b"LAB ", &[0.75, 20.5, -10.0]),
        color_entry("Grey", b"Gray", &[0.5]),
        group_end(),
    ];
    write_fixture(root.join("ase_mixed").join("input.ase"), encode_ase(&blocks))
}

struct AcoSpec {
    version: u16,
    entries: Vec<(u16, [u16; 4], &'static str)>,
}

impl AcoSpec {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        push_u16(&mut out, self.version);
        push_u16(&mut out, self.entries.len() as u16);
        for (space, values, _) in &self.entries {
            push_u16(&mut out, *space);
            for value in values {
                push_u16(&mut out, *value);
            }
        }
        if self.version == 2 {
            push_u16(&mut out, self.version);
            push_u16(&mut out, self.entries.len() as u16);
            for (_, _, name) in &self.entries {
                let units = utf16(name, false);
                push_u16(&mut out, units.len() as u16);
                push_units(&mut out, &units);
                push_u16(&mut out, 0);
            }
        }
        out
    }
}

fn group_start(name: &str) -> (u16, Vec<u8>) {
    let units = utf16(name, true);
    let mut body = Vec::new();
    push_u16(&mut body, units.len() as u16);
    push_units(&mut body, &units);
    (ASE_BLOCK_GROUP_START, body)
}

fn group_end() -> (u16, Vec<u8>) {
    (ASE_BLOCK_GROUP_END, Vec::new())
}

fn color_entry(name: &str, mode: &[u8; 4], values: &[f32]) -> (u16, Vec<u8>) {
    let units = utf16(name, true);
    let mut body = Vec::new();
    push_u16(&mut body, units.len() as u16);
    push_units(&mut body, &units);
    body.extend_from_slice(mode);
    for value in values {
        body.extend_from_slice(&value.to_be_bytes());
    }
    push_u16(&mut body, ASE_COLOR_TYPE_GLOBAL);
    (ASE_BLOCK_COLOR_ENTRY, body)
}

fn encode_ase(blocks: &[(u16, Vec<u8>)]) -> Vec<u8> {
    let mut out = ASE_SIGNATURE.to_vec();
    push_u16(&mut out, 1);
    push_u16(&mut out, 0);
    out.extend_from_slice(&(blocks.len() as u32).to_be_bytes());
    for (block_type, body) in blocks {
        push_u16(&mut out, *block_type);
        out.extend_from_slice(&(body.len() as u32).to_be_bytes());
        out.extend_from_slice(body);
    }
    out
}

fn utf16(text: &str, nul_terminated: bool) -> Vec<u16> {
    let mut units: Vec<u16> = text.encode_utf16().collect();
    if nul_terminated {
        units.push(0);
    }
    units
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_units(out: &mut Vec<u8>, units: &[u16]) {
    for unit in units {
        push_u16(out, *unit);
    }
}

fn write_fixture(path: PathBuf, bytes: Vec<u8>) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create {}: {}", parent.display(), err))?;
    }
    fs::write(&path, bytes).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}
