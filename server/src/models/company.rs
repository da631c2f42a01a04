use serde::{Deserialize, Serialize};

/// The company a request was authenticated as.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
}
