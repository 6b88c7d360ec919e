use serde::Deserialize;
use serde_json::Value;

/* ------------- Minimal serde mapping of /datasets/{source}/{code}.json ------------- */

#[derive(Deserialize)]
pub(crate) struct DatasetEnvelope {
    #[serde(default)]
    pub(crate) column_names: Vec<String>,
    #[serde(default)]
    pub(crate) data: Vec<Vec<Value>>,
}
