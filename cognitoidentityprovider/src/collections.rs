/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::DuplicateKeyError;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Inserts `key` into the map member, creating the map if it is absent.
///
/// The map is left untouched when `key` is already present.
pub(crate) fn insert_unique(
    map: &mut Option<BTreeMap<String, String>>,
    member: &'static str,
    key: String,
    value: String,
) -> Result<(), DuplicateKeyError> {
    match map.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(entry) => Err(DuplicateKeyError::new(member, entry.key().clone())),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::insert_unique;
    use std::collections::BTreeMap;

    #[test]
    fn creates_map_on_first_insert() {
        let mut map = None;
        insert_unique(&mut map, "ClientMetadata", "a".into(), "1".into()).unwrap();
        assert_eq!(
            map,
            Some(BTreeMap::from([("a".to_string(), "1".to_string())]))
        );
    }

    #[test]
    fn duplicate_key_leaves_map_unchanged() {
        let mut map = None;
        insert_unique(&mut map, "ClientMetadata", "a".into(), "1".into()).unwrap();
        let err = insert_unique(&mut map, "ClientMetadata", "a".into(), "2".into())
            .expect_err("key already present");
        assert_eq!(err.member(), "ClientMetadata");
        assert_eq!(err.key(), "a");
        assert_eq!(map.unwrap().get("a").map(String::as_str), Some("1"));
    }
}
