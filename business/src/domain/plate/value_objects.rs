use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateCategory {
    Starter,
    Main,
    Dessert,
}

impl std::fmt::Display for PlateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlateCategory::Starter => write!(f, "starter"),
            PlateCategory::Main => write!(f, "main"),
            PlateCategory::Dessert => write!(f, "dessert"),
        }
    }
}

impl std::str::FromStr for PlateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(PlateCategory::Starter),
            "main" => Ok(PlateCategory::Main),
            "dessert" => Ok(PlateCategory::Dessert),
            _ => Err(format!("Invalid plate category: {}", s)),
        }
    }
}
