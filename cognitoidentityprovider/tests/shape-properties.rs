/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use cognitoidentityprovider::operation::admin_create_user::AdminCreateUserInput;
use cognitoidentityprovider::operation::admin_delete_user::AdminDeleteUserInput;
use cognitoidentityprovider::operation::admin_disable_user::AdminDisableUserInput;
use cognitoidentityprovider::operation::confirm_sign_up::builders::ConfirmSignUpInputBuilder;
use cognitoidentityprovider::operation::confirm_sign_up::ConfirmSignUpInput;
use cognitoidentityprovider::types::{
    AttributeType, DeliveryMediumType, GroupType, MessageActionType, UserPoolType,
};
use pretty_assertions::assert_eq;
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;
use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn attribute() -> impl Strategy<Value = AttributeType> {
    ("[a-z_]{1,8}", option::of("[a-z0-9@.]{0,12}")).prop_map(|(name, value)| {
        AttributeType::builder()
            .name(name)
            .set_value(value)
            .build()
    })
}

fn message_action() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(MessageActionType::values()).prop_map(str::to_owned),
        "[A-Z_]{0,12}",
    ]
}

prop_compose! {
    fn admin_create_user_input()(
        user_pool_id in option::of("[a-z0-9_-]{0,12}"),
        username in option::of("[a-z0-9]{0,12}"),
        user_attributes in option::of(vec(attribute(), 0..4)),
        temporary_password in option::of("[a-z0-9]{0,12}"),
        force_alias_creation in option::of(any::<bool>()),
        message_action in option::of(message_action()),
        desired_delivery_mediums in option::of(vec(prop_oneof!["SMS", "EMAIL", "VOICE"], 0..3)),
        client_metadata in option::of(btree_map("[a-z]{1,6}", "[a-z0-9]{0,6}", 0..4)),
    ) -> AdminCreateUserInput {
        AdminCreateUserInput::builder()
            .set_user_pool_id(user_pool_id)
            .set_username(username)
            .set_user_attributes(user_attributes)
            .set_temporary_password(temporary_password)
            .set_force_alias_creation(force_alias_creation)
            .set_message_action(message_action.map(MessageActionType::from))
            .set_desired_delivery_mediums(
                desired_delivery_mediums
                    .map(|mediums| mediums.into_iter().map(DeliveryMediumType::from).collect()),
            )
            .set_client_metadata(client_metadata)
            .build()
            .unwrap()
    }
}

fn rebuild(input: &AdminCreateUserInput) -> AdminCreateUserInput {
    AdminCreateUserInput::builder()
        .set_user_pool_id(input.user_pool_id().map(str::to_owned))
        .set_username(input.username().map(str::to_owned))
        .set_user_attributes(input.user_attributes.clone())
        .set_validation_data(input.validation_data.clone())
        .set_temporary_password(input.temporary_password().map(str::to_owned))
        .set_force_alias_creation(input.force_alias_creation())
        .set_message_action(input.message_action().cloned())
        .set_desired_delivery_mediums(input.desired_delivery_mediums.clone())
        .set_client_metadata(input.client_metadata().cloned())
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn rebuilt_shapes_are_equal_and_hash_equal(input in admin_create_user_input()) {
        let rebuilt = rebuild(&input);
        prop_assert_eq!(&rebuilt, &input);
        prop_assert_eq!(hash_of(&rebuilt), hash_of(&input));
        let cloned = input.clone();
        prop_assert_eq!(hash_of(&cloned), hash_of(&input));
        prop_assert_eq!(cloned, input);
    }

    #[test]
    fn absent_members_are_not_rendered(input in admin_create_user_input()) {
        let rendered = input.to_string();
        let members = [
            ("UserPoolId", input.user_pool_id.is_some()),
            ("Username", input.username.is_some()),
            ("UserAttributes", input.user_attributes.is_some()),
            ("ValidationData", input.validation_data.is_some()),
            ("TemporaryPassword", input.temporary_password.is_some()),
            ("ForceAliasCreation", input.force_alias_creation.is_some()),
            ("MessageAction", input.message_action.is_some()),
            ("DesiredDeliveryMediums", input.desired_delivery_mediums.is_some()),
            ("ClientMetadata", input.client_metadata.is_some()),
        ];
        for (member, present) in members {
            prop_assert_eq!(rendered.contains(&format!("{}: ", member)), present, "{}", rendered);
        }
        prop_assert!(!rendered.contains(",}"), "trailing separator in {}", rendered);
    }

    #[test]
    fn list_setters_append(attributes in vec(attribute(), 0..6)) {
        let mut builder = AdminCreateUserInput::builder();
        for attribute in &attributes {
            builder = builder.user_attributes(attribute.clone());
        }
        let input = builder.build().unwrap();
        prop_assert_eq!(input.user_attributes(), attributes.as_slice());
        prop_assert_eq!(input.user_attributes.is_some(), !attributes.is_empty());
    }

    #[test]
    fn enum_and_string_setters_are_equivalent(value in message_action()) {
        let from_str = AdminCreateUserInput::builder().message_action(value.as_str());
        let from_string = AdminCreateUserInput::builder().message_action(value.clone());
        let from_enum = AdminCreateUserInput::builder()
            .message_action(value.parse::<MessageActionType>().unwrap());
        prop_assert_eq!(&from_str, &from_enum);
        prop_assert_eq!(&from_string, &from_enum);
        let built = from_str.build().unwrap();
        prop_assert_eq!(built.message_action().map(|action| action.as_str()), Some(value.as_str()));
    }
}

#[test]
fn list_setter_appends_to_existing_list() {
    let first = AttributeType::builder().name("email").build();
    let second = AttributeType::builder().name("phone_number").build();
    let input = AdminCreateUserInput::builder()
        .set_user_attributes(Some(vec![first.clone()]))
        .user_attributes(second.clone())
        .build()
        .unwrap();
    assert_eq!(input.user_attributes(), &[first, second]);
}

#[test]
fn set_replaces_and_clears() {
    let builder = AdminCreateUserInput::builder()
        .desired_delivery_mediums(DeliveryMediumType::Sms)
        .set_desired_delivery_mediums(Some(vec![DeliveryMediumType::Email]));
    assert_eq!(
        builder.get_desired_delivery_mediums(),
        &Some(vec![DeliveryMediumType::Email])
    );
    let input = builder.set_desired_delivery_mediums(None).build().unwrap();
    assert_eq!(input.desired_delivery_mediums, None);
    assert!(input.desired_delivery_mediums().is_empty());
}

#[test]
fn duplicate_map_key_is_rejected() {
    let mut builder = ConfirmSignUpInput::builder();
    builder.add_client_metadata_entry("k", "v1").unwrap();
    let err = builder
        .add_client_metadata_entry("k", "v2")
        .expect_err("duplicate key");
    assert_eq!(err.member(), "ClientMetadata");
    assert_eq!(err.key(), "k");
    assert_eq!(
        builder.get_client_metadata(),
        &Some(BTreeMap::from([("k".to_string(), "v1".to_string())]))
    );

    let err = ConfirmSignUpInput::builder()
        .client_metadata("k", "v1")
        .unwrap()
        .client_metadata("k", "v2")
        .expect_err("duplicate key");
    assert_eq!(err.key(), "k");
}

#[test]
fn clear_resets_map_to_absent() {
    let mut builder = ConfirmSignUpInput::builder();
    builder
        .add_client_metadata_entry("a", "1")
        .unwrap()
        .add_client_metadata_entry("b", "2")
        .unwrap()
        .clear_client_metadata_entries();
    assert_eq!(builder.get_client_metadata(), &None);
    let input = builder.build().unwrap();
    assert_eq!(input.client_metadata(), None);
    assert!(!input.to_string().contains("ClientMetadata"));

    let empty = ConfirmSignUpInput::builder()
        .set_client_metadata(Some(BTreeMap::new()))
        .build()
        .unwrap();
    assert_eq!(empty.client_metadata(), Some(&BTreeMap::new()));
    assert_eq!(empty.to_string(), "{ClientMetadata: {}}");
}

#[test]
fn in_place_setters_return_the_same_builder() {
    let mut builder = ConfirmSignUpInputBuilder::default();
    let ptr: *const ConfirmSignUpInputBuilder = &builder;
    let returned: *const ConfirmSignUpInputBuilder =
        builder.add_client_metadata_entry("k", "v").unwrap();
    assert_eq!(ptr, returned);
    let returned: *const ConfirmSignUpInputBuilder = builder.clear_client_metadata_entries();
    assert_eq!(ptr, returned);
}

fn equals_dyn<A: Any + PartialEq>(a: &A, b: &dyn Any) -> bool {
    b.downcast_ref::<A>().map_or(false, |b| a == b)
}

#[test]
fn shapes_of_different_types_are_never_equal() {
    let delete = AdminDeleteUserInput::builder()
        .user_pool_id("pool")
        .username("jane")
        .build()
        .unwrap();
    let disable = AdminDisableUserInput::builder()
        .user_pool_id("pool")
        .username("jane")
        .build()
        .unwrap();
    assert!(!equals_dyn(&delete, &disable));
    assert!(equals_dyn(&delete, &delete.clone()));

    let group = GroupType::builder().user_pool_id("pool").build();
    let pool = UserPoolType::builder().build();
    assert!(!equals_dyn(&group, &pool));
    assert_eq!(group.to_string(), "{UserPoolId: pool}");
}

#[test]
fn default_shapes_have_every_member_absent() {
    let input = AdminCreateUserInput::builder().build().unwrap();
    assert_eq!(input, AdminCreateUserInput::default());
    assert_eq!(input.to_string(), "{}");
    assert_eq!(input.user_pool_id(), None);
    assert!(input.user_attributes().is_empty());
}
