use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structural member categories.
///
/// The engine treats the kind as an opaque tag. The per-kind defaults below
/// are data consumed by callers choosing spacing and by the load tables kept
/// outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Beam,
    Column,
    Rafter,
    FloorJoist,
    CeilingJoist,
    Purlin,
    Wall,
    RoofBrace,
}

impl MemberKind {
    pub const ALL: [MemberKind; 8] = [
        MemberKind::Beam,
        MemberKind::Column,
        MemberKind::Rafter,
        MemberKind::FloorJoist,
        MemberKind::CeilingJoist,
        MemberKind::Purlin,
        MemberKind::Wall,
        MemberKind::RoofBrace,
    ];

    /// Prefix used when building member IDs (`B1`, `C2`, `RB3`, ...).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            MemberKind::Beam => "B",
            MemberKind::Column => "C",
            MemberKind::Rafter => "R",
            MemberKind::FloorJoist | MemberKind::CeilingJoist => "J",
            MemberKind::Purlin => "P",
            MemberKind::Wall => "W",
            MemberKind::RoofBrace => "RB",
        }
    }

    /// Vertical connectors span two floors.
    pub fn is_vertical(&self) -> bool {
        matches!(self, MemberKind::Column)
    }

    /// Repetitive framing laid out in parallel runs.
    pub fn is_framing(&self) -> bool {
        matches!(
            self,
            MemberKind::Rafter | MemberKind::FloorJoist | MemberKind::CeilingJoist
        )
    }

    /// Default on-center spacing in inches, for kinds laid out in runs.
    pub fn default_spacing(&self) -> Option<f64> {
        match self {
            MemberKind::Rafter => Some(16.0),
            MemberKind::FloorJoist | MemberKind::CeilingJoist => Some(24.0),
            _ => None,
        }
    }

    /// Default distributed area loads `(dead, live)` in psf.
    pub fn default_area_loads(&self) -> (f64, f64) {
        match self {
            MemberKind::Rafter => (10.0, 20.0),
            MemberKind::FloorJoist => (40.0, 10.0),
            MemberKind::CeilingJoist => (10.0, 5.0),
            _ => (0.0, 0.0),
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemberKind::Beam => "Beam",
            MemberKind::Column => "Column",
            MemberKind::Rafter => "Rafter",
            MemberKind::FloorJoist => "Floor Joist",
            MemberKind::CeilingJoist => "Ceiling Joist",
            MemberKind::Purlin => "Purlin",
            MemberKind::Wall => "Wall",
            MemberKind::RoofBrace => "Roof Brace",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MemberKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "beam" => Ok(MemberKind::Beam),
            "column" => Ok(MemberKind::Column),
            "rafter" => Ok(MemberKind::Rafter),
            "floorjoist" => Ok(MemberKind::FloorJoist),
            "ceilingjoist" => Ok(MemberKind::CeilingJoist),
            "purlin" => Ok(MemberKind::Purlin),
            "wall" => Ok(MemberKind::Wall),
            "roofbrace" => Ok(MemberKind::RoofBrace),
            _ => Err(format!("Unknown member kind: {}", s)),
        }
    }
}
