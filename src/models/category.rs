use serde::{Deserialize, Serialize};

/// Business category as listed in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}
