//! `serde` helpers that read JSON `null` the same way as an absent field.
//!
//! Scalars default to the empty string, which the decoder rejects as a required value. Lists
//! default to empty. Null elements of object lists are kept as `None` so that the decoder can
//! report them with their index.

use serde::{Deserialize, Deserializer};

pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub fn strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let strings = Option::<Vec<Option<String>>>::deserialize(deserializer)?;

    Ok(strings
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<Option<T>>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(PartialEq, Eq, Default, Debug, Deserialize)]
    #[serde(default)]
    struct Wire {
        #[serde(deserialize_with = "super::string")]
        scalar: String,
        #[serde(deserialize_with = "super::strings")]
        scalars: Vec<String>,
        #[serde(deserialize_with = "super::list")]
        objects: Vec<Option<Wire>>,
    }

    #[test]
    fn null_fields_match_absent_fields() -> serde_json::Result<()> {
        let null = serde_json::from_value::<Wire>(json!({
            "scalar": null,
            "scalars": null,
            "objects": null,
        }))?;

        assert_eq!(null, serde_json::from_value(json!({}))?);
        assert_eq!(null, Wire::default());

        Ok(())
    }

    #[test]
    fn null_elements_keep_their_position() -> serde_json::Result<()> {
        let wire = serde_json::from_value::<Wire>(json!({
            "scalars": ["0x01", null],
            "objects": [null, {"scalar": "1"}],
        }))?;

        assert_eq!(wire.scalars, ["0x01", ""]);
        assert_eq!(wire.objects.len(), 2);
        assert_eq!(wire.objects[0], None);
        assert_eq!(
            wire.objects[1].as_ref().map(|object| object.scalar.as_str()),
            Some("1"),
        );

        Ok(())
    }
}
