use serde::Serialize;

/// Rich message with a title, a description line and named fields.
///
/// Serializes to the shape chat platforms accept for embeds, so a sink can
/// forward it without translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Embed {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }

    /// Render for transports without embed support (terminal, plain text)
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("{}\n{}", self.title, self.description);
        for field in &self.fields {
            out.push_str("\n\n");
            out.push_str(&field.name);
            out.push('\n');
            out.push_str(&field.value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let embed = Embed::new("Alpha — de_dust", "Players: 5/10").with_field("Top Players", "1. A");
        assert_eq!(
            embed.to_plain_text(),
            "Alpha — de_dust\nPlayers: 5/10\n\nTop Players\n1. A"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let embed = Embed::new("t", "d").with_field("f", "v");
        let json = serde_json::to_value(&embed).unwrap();
        assert_eq!(json["title"], "t");
        assert_eq!(json["fields"][0]["name"], "f");
        assert_eq!(json["fields"][0]["inline"], false);

        let bare = serde_json::to_value(Embed::new("t", "d")).unwrap();
        assert!(bare.get("fields").is_none());
    }
}
