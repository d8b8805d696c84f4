/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Timestamps travel as fractional seconds since the Unix epoch.
pub(crate) mod epoch_seconds {
    use aws_smithy_types::DateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S>(value: &Option<DateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_f64(value.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.map(DateTime::from_secs_f64))
    }
}

#[cfg(test)]
mod test {
    use crate::primitives::DateTime;
    use crate::types::GroupType;
    use serde_json::json;

    #[test]
    fn timestamps_use_epoch_seconds() {
        let group = GroupType::builder()
            .group_name("admins")
            .creation_date(DateTime::from_secs(1_600_000_000))
            .build();
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(
            value,
            json!({ "GroupName": "admins", "CreationDate": 1600000000.0 })
        );
        let parsed: GroupType = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, group);
    }

    #[test]
    fn integer_and_null_timestamps_parse() {
        let parsed: GroupType =
            serde_json::from_value(json!({ "CreationDate": 1600000000, "LastModifiedDate": null }))
                .unwrap();
        assert_eq!(
            parsed.creation_date(),
            Some(&DateTime::from_secs(1_600_000_000))
        );
        assert_eq!(parsed.last_modified_date(), None);
    }
}
