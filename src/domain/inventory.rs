//! Governance inventory and solution enrichment
//!
//! The inventory is a static JSON document describing known solutions:
//!
//! ```json
//! {"inventory": [{"path": "backend/aws/python/api/svc", "status": "active", "docker": {...}}]}
//! ```
//!
//! Enrichment is additive: a field is copied from the inventory only when
//! the solution does not already carry a value for it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Solution;

/// One entry of the governance inventory
///
/// Every field is kept as raw JSON so values are copied onto solutions
/// exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItem {
    pub path: Option<String>,
    pub stack: Option<Value>,
    pub platform: Option<Value>,
    pub platform_version: Option<Value>,
    pub platform_distributor: Option<Value>,
    pub framework: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub name: Option<Value>,
    pub status: Option<Value>,
    pub docker: Option<Value>,
}

/// On-disk layout of the inventory file
///
/// Entries stay untyped until indexing so one malformed entry cannot
/// reject the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InventoryDocument {
    pub inventory: Option<Vec<Value>>,
}

/// Inventory entries indexed by solution path
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    by_path: HashMap<String, InventoryItem>,
}

impl Inventory {
    /// Creates an empty inventory; enrichment against it is a no-op
    pub fn empty() -> Self {
        Self::default()
    }

    /// Indexes entries by their trimmed path
    ///
    /// Entries without a path are skipped. A later entry for the same path
    /// replaces an earlier one.
    pub fn from_items(items: impl IntoIterator<Item = InventoryItem>) -> Self {
        let by_path = items
            .into_iter()
            .filter_map(|item| {
                let path = item.path.as_deref().map(str::trim).unwrap_or_default();
                if path.is_empty() {
                    None
                } else {
                    Some((path.to_string(), item))
                }
            })
            .collect();

        Self { by_path }
    }

    pub fn get(&self, path: &str) -> Option<&InventoryItem> {
        self.by_path.get(path.trim())
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Copies governance fields onto each solution that has an inventory entry
    pub fn enrich(&self, solutions: Vec<Solution>) -> Vec<Solution> {
        solutions
            .into_iter()
            .map(|mut solution| {
                if let Some(item) = self.get(&solution.path) {
                    merge_item(&mut solution, item);
                }
                solution
            })
            .collect()
    }
}

impl From<InventoryDocument> for Inventory {
    fn from(doc: InventoryDocument) -> Self {
        let items = doc.inventory.unwrap_or_default().into_iter().filter_map(|entry| {
            serde_json::from_value::<InventoryItem>(entry)
                .map_err(|e| tracing::debug!(error = %e, "Skipping malformed inventory entry"))
                .ok()
        });
        Self::from_items(items)
    }
}

/// Fills fields of `solution` that are still unset from `item`
fn merge_item(solution: &mut Solution, item: &InventoryItem) {
    fill_str(&mut solution.stack, item.stack.as_ref());
    fill_str(&mut solution.platform, item.platform.as_ref());
    fill_value(&mut solution.platform_version, item.platform_version.as_ref());
    fill_value(&mut solution.platform_distributor, item.platform_distributor.as_ref());
    fill_str(&mut solution.framework, item.framework.as_ref());
    fill_str(&mut solution.kind, item.kind.as_ref());
    fill_str(&mut solution.name, item.name.as_ref());
    fill_value(&mut solution.status, item.status.as_ref());
    fill_value(&mut solution.docker, item.docker.as_ref());
}

fn fill_str(slot: &mut String, value: Option<&Value>) {
    if !slot.is_empty() {
        return;
    }
    if let Some(Value::String(s)) = value {
        slot.clone_from(s);
    }
}

fn fill_value(slot: &mut Option<Value>, value: Option<&Value>) {
    if has_value(slot.as_ref()) {
        return;
    }
    if let Some(v) = value.filter(|v| !v.is_null()) {
        *slot = Some(v.clone());
    }
}

fn has_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SolutionRoot;
    use proptest::prelude::*;
    use serde_json::json;

    fn solution(path: &str) -> Solution {
        path.parse::<SolutionRoot>().unwrap().into()
    }

    fn inventory(value: Value) -> Inventory {
        serde_json::from_value::<InventoryDocument>(value).unwrap().into()
    }

    #[test]
    fn entries_without_path_are_skipped() {
        let inv = inventory(json!({
            "inventory": [
                {"path": "backend/aws/python/api/svc", "status": "active"},
                {"status": "orphan"},
                {"path": "   ", "status": "blank"},
            ]
        }));

        assert_eq!(inv.len(), 1);
        assert!(inv.get("backend/aws/python/api/svc").is_some());
    }

    #[test]
    fn malformed_entries_are_skipped_individually() {
        let inv = inventory(json!({
            "inventory": [
                null,
                {"path": 42, "status": "numeric"},
                "not-an-object",
                {"path": "backend/aws/python/api/svc", "status": "active"},
            ]
        }));

        assert_eq!(inv.len(), 1);
        let enriched = inv.enrich(vec![solution("backend/aws/python/api/svc")]);
        assert_eq!(enriched[0].status, Some(json!("active")));
    }

    #[test]
    fn missing_inventory_key_is_empty() {
        assert!(inventory(json!({})).is_empty());
        assert!(inventory(json!({"inventory": null})).is_empty());
    }

    #[test]
    fn enrich_copies_governance_fields() {
        let inv = inventory(json!({
            "inventory": [{
                "path": "backend/aws/python/api/svc",
                "platformVersion": "3.12",
                "platformDistributor": "lambda",
                "status": "active",
                "docker": {"enabled": true, "file": "Dockerfile"},
            }]
        }));

        let enriched = inv.enrich(vec![solution("backend/aws/python/api/svc")]);
        let s = &enriched[0];

        assert_eq!(s.platform_version, Some(json!("3.12")));
        assert_eq!(s.platform_distributor, Some(json!("lambda")));
        assert_eq!(s.status, Some(json!("active")));
        assert_eq!(s.docker, Some(json!({"enabled": true, "file": "Dockerfile"})));
    }

    #[test]
    fn enrich_never_overwrites_classifier_fields() {
        let inv = inventory(json!({
            "inventory": [{
                "path": "frontend/web/react/app-b",
                "stack": "mobile",
                "platform": "ios",
                "framework": "react",
                "type": "spa",
                "name": "renamed",
            }]
        }));

        let enriched = inv.enrich(vec![solution("frontend/web/react/app-b")]);
        let s = &enriched[0];

        assert_eq!(s.stack, "frontend");
        assert_eq!(s.platform, "web");
        assert_eq!(s.framework, "web");
        assert_eq!(s.kind, "react");
        assert_eq!(s.name, "app-b");
    }

    #[test]
    fn enrich_fills_empty_naming_fields() {
        let inv = inventory(json!({
            "inventory": [{"path": "backend/aws/python/api/svc", "name": "Service", "type": 3}]
        }));

        let mut s = solution("backend/aws/python/api/svc");
        s.name.clear();
        s.kind.clear();

        let enriched = inv.enrich(vec![s]);
        assert_eq!(enriched[0].name, "Service");
        // Non-string values cannot fill a string field.
        assert_eq!(enriched[0].kind, "");
    }

    #[test]
    fn null_inventory_values_are_ignored() {
        let inv = inventory(json!({
            "inventory": [{"path": "backend/aws/python/api/svc", "status": null}]
        }));

        let enriched = inv.enrich(vec![solution("backend/aws/python/api/svc")]);
        assert_eq!(enriched[0].status, None);
    }

    #[test]
    fn unknown_paths_pass_through() {
        let inv = inventory(json!({
            "inventory": [{"path": "backend/aws/python/api/other", "status": "active"}]
        }));

        let input = vec![solution("backend/aws/python/api/svc")];
        assert_eq!(inv.enrich(input.clone()), input);
    }

    #[test]
    fn empty_inventory_is_noop() {
        let input = vec![solution("backend/aws/python/api/svc"), solution("frontend/web/react/app")];
        assert_eq!(Inventory::empty().enrich(input.clone()), input);
    }

    proptest! {
        #[test]
        fn enrich_is_idempotent(
            status in proptest::option::of("[a-z]{0,6}"),
            version in proptest::option::of("[0-9.]{0,4}"),
            preset in proptest::option::of("[a-z]{0,6}"),
        ) {
            let inv = inventory(json!({
                "inventory": [{
                    "path": "backend/aws/python/api/svc",
                    "status": status,
                    "platformVersion": version,
                }]
            }));

            let mut s = solution("backend/aws/python/api/svc");
            s.status = preset.map(Value::String);

            let once = inv.enrich(vec![s]);
            let twice = inv.enrich(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}
