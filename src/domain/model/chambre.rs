use super::Entity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Room occupancy type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChambreType {
    Simple,
    Double,
    Triple,
}

impl ChambreType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChambreType::Simple => "SIMPLE",
            ChambreType::Double => "DOUBLE",
            ChambreType::Triple => "TRIPLE",
        }
    }
}

impl fmt::Display for ChambreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChambreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SIMPLE" => Ok(ChambreType::Simple),
            "DOUBLE" => Ok(ChambreType::Double),
            "TRIPLE" => Ok(ChambreType::Triple),
            other => Err(format!("unknown room type: {}", other)),
        }
    }
}

/// Chambre entity - a room within a bloc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chambre {
    pub id: Option<i64>,
    pub number: i64,
    pub kind: ChambreType,
    pub bloc_id: Option<i64>,
}

impl Chambre {
    pub fn new(number: i64, kind: ChambreType) -> Self {
        Self {
            id: None,
            number,
            kind,
            bloc_id: None,
        }
    }

    pub fn in_bloc(mut self, bloc_id: i64) -> Self {
        self.bloc_id = Some(bloc_id);
        self
    }
}

impl Entity for Chambre {
    type Id = i64;
    const KIND: &'static str = "Chambre";

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
