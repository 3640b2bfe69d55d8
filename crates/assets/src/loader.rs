use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use layerstack_core::ModelDefinition;
use tracing::info;

use crate::{AssetError, ModelCatalog};

/// Load a model catalog from the provided JSON file path.
pub fn catalog_from_file(path: &Path) -> Result<ModelCatalog, AssetError> {
    let data = fs::read_to_string(path)?;
    let catalog = catalog_from_str(&data)?;
    info!(
        path = %path.display(),
        models = catalog.len(),
        "Loaded model catalog"
    );
    Ok(catalog)
}

/// Load a model catalog from an in-memory JSON string.
///
/// The document is an object mapping selection keys to
/// `{ "name": ..., "layers": [ { "id", "name", "color", ... } ] }`.
pub fn catalog_from_str(input: &str) -> Result<ModelCatalog, AssetError> {
    let defs: BTreeMap<String, ModelDefinition> = serde_json::from_str(input)?;
    Ok(ModelCatalog::from_models(defs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerstack_core::Rgb;

    #[test]
    fn parses_catalog_json() {
        let json = r#"{
            "mini": {
                "name": "Mini Model",
                "layers": [
                    { "id": 2, "name": "Upper", "color": 16737095, "purpose": "p", "protocols": "x, y", "pdu": "Data" },
                    { "id": 1, "name": "Lower", "color": 11583710 }
                ]
            }
        }"#;
        let catalog = catalog_from_str(json).unwrap();
        let model = catalog.get("mini").unwrap();
        assert_eq!(model.name, "Mini Model");
        assert_eq!(model.layers[0].color, Rgb(0xff6347));
        assert_eq!(model.layers[0].protocols, "x, y");
        assert_eq!(model.layers[1].name, "Lower");
        assert!(model.layers[1].pdu.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = catalog_from_str(r#"{ "mini": { "name": "m" } }"#).unwrap_err();
        assert!(matches!(err, AssetError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = catalog_from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AssetError::Io(_)));
    }
}
