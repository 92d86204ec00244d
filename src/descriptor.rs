//! # Tile Descriptor
//!
//! JSON document registering the sliced images as a multitile. The shape is
//! consumed by an external tile-definition loader, so field names, ordering
//! and the unconnected group's comment string must stay as they are.

use std::{fs, path::Path, path::PathBuf};

use serde::Serialize;

use crate::{autotile::Role, error::SliceError};

const ROTATION_NOTE: &str = "Multitiles are assumed to rotate, two copies to omit rotation";

/// Either a single sprite name or an ordered list of rotations
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Foreground {
    Single(String),
    Rotations(Vec<String>),
}

#[derive(Serialize, Debug, Clone)]
pub struct AdditionalTile {
    pub id: String,
    pub fg: Foreground,
    pub bg: String,
    #[serde(rename = "//", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct TileDescriptor {
    pub id: String,
    pub fg: String,
    pub bg: String,
    pub multitile: bool,
    pub additional_tiles: Vec<AdditionalTile>,
}

/// `<tile>_<role>`, the sprite name shared by the PNG file and the descriptor
pub fn sprite_name(tile: &str, role: Role) -> String {
    format!("{}_{}", tile, role)
}

fn group(tile: &str, id: &str, roles: &[Role]) -> AdditionalTile {
    AdditionalTile {
        id: id.to_string(),
        fg: Foreground::Rotations(roles.iter().map(|&r| sprite_name(tile, r)).collect()),
        bg: String::new(),
        comment: None,
    }
}

impl TileDescriptor {
    /// Build the descriptor for `tile`. Independent of the sheet layout.
    pub fn new(tile: &str) -> Self {
        let additional_tiles = vec![
            AdditionalTile {
                id: "center".to_string(),
                fg: Foreground::Single(sprite_name(tile, Role::Center)),
                bg: String::new(),
                comment: None,
            },
            group(
                tile,
                "corner",
                &[Role::CornerNw, Role::CornerSw, Role::CornerSe, Role::CornerNe],
            ),
            group(
                tile,
                "t_connection",
                &[
                    Role::TConnectionN,
                    Role::TConnectionW,
                    Role::TConnectionS,
                    Role::TConnectionE,
                ],
            ),
            group(tile, "edge", &[Role::EdgeNs, Role::EdgeEw]),
            group(
                tile,
                "end_piece",
                &[Role::EndPieceN, Role::EndPieceW, Role::EndPieceS, Role::EndPieceE],
            ),
            AdditionalTile {
                comment: Some(ROTATION_NOTE.to_string()),
                ..group(tile, "unconnected", &[Role::Unconnected, Role::Unconnected])
            },
        ];

        TileDescriptor {
            id: tile.to_string(),
            fg: sprite_name(tile, Role::Unconnected),
            bg: String::new(),
            multitile: true,
            additional_tiles,
        }
    }

    /// Pretty-printed with a 2-space indent and a trailing newline
    pub fn to_json(&self) -> Result<String, SliceError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Write `<output_dir>/<id>.json`, replacing any existing file
pub fn write_descriptor(descriptor: &TileDescriptor, output_dir: &Path) -> Result<PathBuf, SliceError> {
    let path = output_dir.join(format!("{}.json", descriptor.id));
    fs::write(&path, descriptor.to_json()?)?;
    Ok(path)
}
