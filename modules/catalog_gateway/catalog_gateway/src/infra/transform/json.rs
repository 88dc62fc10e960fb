use std::collections::BTreeMap;

use catalog_gateway_sdk::{DocumentTransformer, ProjectedCatalog, RawCatalog, TransformError};
use serde_json::{Map, Value};

const CONTEXT: &str = "@context";
const ID: &str = "@id";
const TYPE: &str = "@type";
const PARTICIPANT_ID: &str = "dspace:participantId";
const ORIGINATOR: &str = "originator";
const DATASET: &str = "dcat:dataset";

const RESERVED_KEYS: [&str; 6] = [CONTEXT, ID, TYPE, PARTICIPANT_ID, ORIGINATOR, DATASET];

/// Renders a raw catalog as a compacted JSON-LD `dcat:Catalog` object.
///
/// Catalog properties are copied as top-level members after the fixed ones.
pub struct JsonCatalogTransformer {
    context: Map<String, Value>,
}

impl JsonCatalogTransformer {
    #[must_use]
    pub fn new(context: &BTreeMap<String, String>) -> Self {
        let context = context
            .iter()
            .map(|(prefix, iri)| (prefix.clone(), Value::String(iri.clone())))
            .collect();
        Self { context }
    }
}

impl DocumentTransformer for JsonCatalogTransformer {
    fn transform(&self, raw: &RawCatalog) -> Result<ProjectedCatalog, TransformError> {
        if raw.id.trim().is_empty() {
            return Err(TransformError::BlankId);
        }
        if let Some(index) = raw.datasets.iter().position(|d| !d.is_object()) {
            return Err(TransformError::InvalidDataset { index });
        }
        if let Some(key) = raw
            .properties
            .keys()
            .find(|key| RESERVED_KEYS.contains(&key.as_str()))
        {
            return Err(TransformError::ReservedKey(key.clone()));
        }

        let mut out = Map::new();
        out.insert(CONTEXT.to_owned(), Value::Object(self.context.clone()));
        out.insert(ID.to_owned(), Value::String(raw.id.clone()));
        out.insert(TYPE.to_owned(), Value::String("dcat:Catalog".to_owned()));
        if let Some(participant_id) = &raw.participant_id {
            out.insert(PARTICIPANT_ID.to_owned(), Value::String(participant_id.clone()));
        }
        out.insert(ORIGINATOR.to_owned(), Value::String(raw.origin.clone()));
        out.insert(DATASET.to_owned(), Value::Array(raw.datasets.clone()));
        out.extend(raw.properties.clone());

        Ok(ProjectedCatalog::new(Value::Object(out)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transformer() -> JsonCatalogTransformer {
        let context = BTreeMap::from([(
            "dcat".to_owned(),
            "http://www.w3.org/ns/dcat#".to_owned(),
        )]);
        JsonCatalogTransformer::new(&context)
    }

    #[test]
    fn renders_catalog_object() {
        let raw = RawCatalog::new("cat-1", "http://a.example/dsp")
            .with_participant_id("BPNL0001")
            .with_dataset(json!({"@id": "ds-1", "@type": "dcat:Dataset"}))
            .with_property("dct:title", "Workshop");

        let projected = transformer().transform(&raw).unwrap().into_value();
        assert_eq!(
            projected,
            json!({
                "@context": {"dcat": "http://www.w3.org/ns/dcat#"},
                "@id": "cat-1",
                "@type": "dcat:Catalog",
                "dspace:participantId": "BPNL0001",
                "originator": "http://a.example/dsp",
                "dcat:dataset": [{"@id": "ds-1", "@type": "dcat:Dataset"}],
                "dct:title": "Workshop"
            })
        );
    }

    #[test]
    fn omits_missing_participant_id() {
        let raw = RawCatalog::new("cat-1", "http://a.example/dsp");
        let projected = transformer().transform(&raw).unwrap().into_value();
        assert!(projected.get(PARTICIPANT_ID).is_none());
        assert_eq!(projected[DATASET], json!([]));
    }

    #[test]
    fn rejects_malformed_catalogs() {
        let t = transformer();

        let err = t.transform(&RawCatalog::new("  ", "http://a.example")).unwrap_err();
        assert_eq!(err, TransformError::BlankId);

        let raw = RawCatalog::new("cat-1", "http://a.example")
            .with_dataset(json!({"@id": "ds-1"}))
            .with_dataset(json!("ds-2"));
        assert_eq!(
            t.transform(&raw).unwrap_err(),
            TransformError::InvalidDataset { index: 1 }
        );

        let raw = RawCatalog::new("cat-1", "http://a.example").with_property("@id", "other");
        assert_eq!(
            t.transform(&raw).unwrap_err(),
            TransformError::ReservedKey("@id".to_owned())
        );
    }
}
