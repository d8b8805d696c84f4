/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The method that delivers a message such as a verification code.</p>
///
/// When matching on `DeliveryMediumType`, keep a wildcard arm: the service may return values that
/// were added after this crate was built. Those arrive as [`Unknown`](Self::Unknown) and
/// round-trip through [`as_str`](Self::as_str) unchanged.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::Eq, ::std::cmp::Ord, ::std::cmp::PartialEq, ::std::cmp::PartialOrd, ::std::fmt::Debug, ::std::hash::Hash, ::serde::Serialize, ::serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeliveryMediumType {
    #[allow(missing_docs)] // documentation missing in model
    Email,
    #[allow(missing_docs)] // documentation missing in model
    Sms,
    /// `Unknown` contains new variants that have been added since this code was generated.
    Unknown(crate::primitives::UnknownVariantValue),
}
impl ::std::convert::From<&str> for DeliveryMediumType {
    fn from(s: &str) -> Self {
        match s {
            "EMAIL" => DeliveryMediumType::Email,
            "SMS" => DeliveryMediumType::Sms,
            other => DeliveryMediumType::Unknown(crate::primitives::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl ::std::convert::From<::std::string::String> for DeliveryMediumType {
    fn from(s: ::std::string::String) -> Self {
        DeliveryMediumType::from(s.as_str())
    }
}
impl ::std::str::FromStr for DeliveryMediumType {
    type Err = ::std::convert::Infallible;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        ::std::result::Result::Ok(DeliveryMediumType::from(s))
    }
}
impl DeliveryMediumType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            DeliveryMediumType::Email => "EMAIL",
            DeliveryMediumType::Sms => "SMS",
            DeliveryMediumType::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["EMAIL", "SMS"]
    }
}
impl ::std::convert::AsRef<str> for DeliveryMediumType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for DeliveryMediumType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::std::convert::From<DeliveryMediumType> for ::std::string::String {
    fn from(value: DeliveryMediumType) -> Self {
        value.as_str().to_owned()
    }
}
