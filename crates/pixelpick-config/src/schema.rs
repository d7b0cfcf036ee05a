//! JSON Schema generation for configuration
//!
//! Generates schemas for editor autocomplete and validation.

use serde_json::json;

/// Generate JSON schema for configuration
pub fn generate_schema() -> serde_json::Value {
    let color = json!({
        "oneOf": [
            {
                "type": "string",
                "description": "Hex (#rrggbb) or functional (rgb(r, g, b)) color"
            },
            {
                "type": "array",
                "items": { "type": "integer", "minimum": 0, "maximum": 255 },
                "minItems": 3,
                "maxItems": 3
            }
        ]
    });

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "PixelPick Configuration",
        "description": "Configuration schema for the PixelPick grid editor",
        "type": "object",
        "properties": {
            "canvas": {
                "type": "object",
                "description": "Canvas and grid geometry",
                "properties": {
                    "width": { "type": "integer", "minimum": 1, "default": 400 },
                    "height": { "type": "integer", "minimum": 1, "default": 400 },
                    "size": { "type": "integer", "minimum": 1, "default": 20 },
                    "border_color": color
                }
            },
            "palette": {
                "type": "object",
                "description": "Colors to cycle through",
                "properties": {
                    "colors": { "type": "array", "items": color, "minItems": 1 },
                    "eraser_color": color,
                    "preset": { "type": "string" }
                }
            }
        }
    })
}

/// Save schema to file
pub fn save_schema(path: &std::path::Path) -> anyhow::Result<()> {
    let schema = generate_schema();
    let json = serde_json::to_string_pretty(&schema)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_generation() {
        let schema = generate_schema();
        assert!(schema.get("$schema").is_some());
        assert_eq!(schema["properties"]["canvas"]["properties"]["size"]["default"], 20);
    }

    #[test]
    fn test_save_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        save_schema(&path).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, generate_schema());
    }
}
