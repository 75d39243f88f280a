use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The curriculum vitae as served by the CV API.
///
/// `header` and `contact` are required; a document without them fails to
/// deserialize and the page is not rendered. The list sections default to
/// empty. `languages`, `skills` and `interests` stay `Option` so an absent
/// key (section hidden) differs from an empty list (section shown, empty).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CvDocument {
    pub header: Header,
    pub contact: Contact,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Header {
    #[serde(deserialize_with = "display_string")]
    pub name: String,
    #[serde(deserialize_with = "display_string")]
    pub surname: String,
    #[serde(deserialize_with = "display_string")]
    pub description: String,
    /// Filesystem path of the profile photo (PNG).
    pub photo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    #[serde(deserialize_with = "display_string")]
    pub birthdate: String,
    #[serde(deserialize_with = "display_string")]
    pub email: String,
    #[serde(deserialize_with = "display_string")]
    pub phone: String,
    #[serde(deserialize_with = "display_string")]
    pub address: String,
    #[serde(deserialize_with = "display_string")]
    pub linkedin: String,
    #[serde(deserialize_with = "display_string")]
    pub github: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    #[serde(deserialize_with = "display_string")]
    pub position: String,
    #[serde(deserialize_with = "display_string")]
    pub company: String,
    #[serde(deserialize_with = "display_string")]
    pub from: String,
    #[serde(deserialize_with = "display_string")]
    pub to: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    #[serde(deserialize_with = "display_string")]
    pub title: String,
    #[serde(deserialize_with = "display_string")]
    pub institution: String,
    #[serde(deserialize_with = "display_string")]
    pub degree: String,
    #[serde(deserialize_with = "display_string")]
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    #[serde(deserialize_with = "display_string")]
    pub name: String,
    #[serde(deserialize_with = "display_string")]
    pub institution: String,
    #[serde(deserialize_with = "display_string")]
    pub date: String,
}

/// Accepts any JSON scalar for a display field: `"2020"` and `2020` both
/// render as `2020`.
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string, number or boolean, found {other}"
        ))),
    }
}

impl Header {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub const ANA_JSON: &str = r#"{
        "header": {"name": "Ana", "surname": "Lopez", "description": "Engineer", "photo": "ana.png"},
        "contact": {
            "birthdate": "1990-04-12",
            "email": "ana@example.com",
            "phone": "+34 600 000 000",
            "address": "Madrid",
            "linkedin": "linkedin.com/in/ana",
            "github": "github.com/ana"
        },
        "experience": [
            {"position": "Dev", "company": "Acme", "from": "2020", "to": "2022", "technologies": ["Go", "SQL"]}
        ]
    }"#;

    pub fn ana() -> CvDocument {
        serde_json::from_str(ANA_JSON).unwrap()
    }
}
