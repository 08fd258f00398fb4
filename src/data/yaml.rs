//! YAML helpers for answers files and structured output.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use yaml_rust_davvid::YamlEmitter;

/// Serializes a value to YAML, writing multi-line strings as literal blocks.
///
/// Composed messages and question prompts span several lines; the
/// yaml-rust emitter keeps them readable where serde_yaml would escape them.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    let serde_value = serde_yaml::to_value(data).context("Failed to serialize to serde value")?;
    let yaml_rust_value = convert_serde_to_yaml_rust(&serde_value);

    let mut output = String::new();
    let mut emitter = YamlEmitter::new(&mut output);
    emitter.multiline_strings(true);
    emitter
        .dump(&yaml_rust_value)
        .context("Failed to emit YAML")?;

    Ok(output)
}

fn convert_serde_to_yaml_rust(value: &serde_yaml::Value) -> yaml_rust_davvid::Yaml {
    use yaml_rust_davvid::Yaml;

    match value {
        serde_yaml::Value::Null => Yaml::Null,
        serde_yaml::Value::Bool(b) => Yaml::Boolean(*b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Yaml::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Yaml::Real(f.to_string())
            } else {
                Yaml::String(n.to_string())
            }
        }
        serde_yaml::Value::String(s) => Yaml::String(s.clone()),
        serde_yaml::Value::Sequence(seq) => {
            Yaml::Array(seq.iter().map(convert_serde_to_yaml_rust).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let mut yaml_map = yaml_rust_davvid::yaml::Hash::new();
            for (k, v) in map {
                yaml_map.insert(convert_serde_to_yaml_rust(k), convert_serde_to_yaml_rust(v));
            }
            Yaml::Hash(yaml_map)
        }
        serde_yaml::Value::Tagged(tagged) => convert_serde_to_yaml_rust(&tagged.value),
    }
}

/// Deserializes a YAML string. JSON documents parse too.
pub fn from_yaml<T: for<'de> Deserialize<'de>>(yaml: &str) -> Result<T> {
    serde_yaml::from_str(yaml).context("Failed to deserialize YAML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn multiline_strings_use_literal_blocks() {
        let mut map = BTreeMap::new();
        map.insert("message", "Fix: a\n\nbody");
        let yaml = to_yaml(&map).unwrap();
        assert!(yaml.contains("message: |"), "{yaml}");
        assert!(yaml.contains("body"));
    }

    #[test]
    fn round_trips_plain_values() {
        let mut map = BTreeMap::new();
        map.insert("prefix".to_string(), "Fix".to_string());
        let yaml = to_yaml(&map).unwrap();
        let back: BTreeMap<String, String> = from_yaml(&yaml).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn from_yaml_reports_bad_input() {
        let err = from_yaml::<BTreeMap<String, String>>("prefix: [unclosed").unwrap_err();
        assert!(err.to_string().contains("Failed to deserialize YAML"));
    }
}
