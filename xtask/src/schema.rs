use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocksJson {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default)]
    pub multiple_facing: bool,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    Bool {
        name: String,
        #[serde(default)]
        default: bool,
    },
    Int {
        name: String,
        min: u8,
        max: u8,
        default: u8,
    },
}

impl Property {
    pub fn name(&self) -> &str {
        match self {
            Property::Bool { name, .. } => name,
            Property::Int { name, .. } => name,
        }
    }
}
