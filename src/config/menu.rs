use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    /// Go back to the first page after an invalid or out of range selection
    /// instead of staying on the page the user was looking at.
    #[serde(default)]
    pub reset_page_on_error: bool,
}
