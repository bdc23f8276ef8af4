use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Owner {
    #[serde(rename = "login")]
    pub login: String,
}
