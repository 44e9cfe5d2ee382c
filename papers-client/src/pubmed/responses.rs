use serde::{Deserialize, Serialize};

/// ESearch JSON envelope: `{"esearchresult": {"idlist": [...]}}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ESearchResult {
    #[serde(default)]
    pub esearchresult: ESearchData,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ESearchData {
    #[serde(default)]
    pub idlist: Vec<String>,
}

impl ESearchResult {
    pub fn into_ids(self) -> Vec<String> {
        self.esearchresult.idlist
    }
}
