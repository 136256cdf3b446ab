//! Deep merge for layered YAML configuration.
//!
//! A local override file is merged over the project config:
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely, so a workflow's `steps` list is
//!   always taken whole from one file
//! - `null` in the overlay deletes the key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Deep merge two YAML values, `overlay` taking precedence.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge config layers in order (later overrides earlier).
///
/// Empty documents (which parse to `null`) are skipped rather than wiping
/// out the layers beneath them.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .filter(|config| !config.is_null())
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn override_replaces_single_setting() {
        let base = yaml(
            r#"
settings:
  orientation: horizontal
  default_output: normal
"#,
        );
        let overlay = yaml(
            r#"
settings:
  orientation: vertical
"#,
        );

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["settings"]["orientation"], "vertical");
        assert_eq!(result["settings"]["default_output"], "normal");
    }

    #[test]
    fn step_lists_are_replaced_not_merged() {
        let base = yaml(
            r#"
workflows:
  release:
    steps:
      - name: Plan
      - name: Build
"#,
        );
        let overlay = yaml(
            r#"
workflows:
  release:
    steps:
      - name: Ship
"#,
        );

        let result = deep_merge(&base, &overlay);
        let steps = result["workflows"]["release"]["steps"]
            .as_sequence()
            .unwrap();

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0]["name"], "Ship");
    }

    #[test]
    fn null_removes_inherited_workflow() {
        let base = yaml(
            r#"
workflows:
  release:
    steps: [{name: Plan}]
  hotfix:
    steps: [{name: Patch}]
"#,
        );
        let overlay = yaml("workflows:\n  hotfix: null\n");

        let result = deep_merge(&base, &overlay);

        assert!(result["workflows"].get("hotfix").is_none());
        assert!(result["workflows"].get("release").is_some());
    }

    #[test]
    fn merge_configs_merges_in_order() {
        let configs = vec![yaml("a: 1\nb: 2"), yaml("b: 3\nc: 4"), yaml("c: 5")];

        let result = merge_configs(&configs);

        assert_eq!(result["a"], 1);
        assert_eq!(result["b"], 3);
        assert_eq!(result["c"], 5);
    }

    #[test]
    fn empty_layer_is_ignored() {
        let configs = vec![yaml("app_name: Test"), yaml("")];

        let result = merge_configs(&configs);

        assert_eq!(result["app_name"], "Test");
    }
}
