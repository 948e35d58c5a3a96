//! Tagging operation records: add, remove, and list certificate tags

use crate::meta::{self, FieldMeta, Schema, ValueType, WireLocation, WireModel};
use crate::types::response_metadata::{ResponseMetadata, SCHEMA as RESPONSE_METADATA_SCHEMA};
use crate::types::tag::{Tag, TagBuilder, SCHEMA as TAG_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static ADD_TAGS_INPUT_SCHEMA: Schema = Schema {
    type_name: "AddTagsToCertificateInput",
    fields: &[
        FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String)
            .located(WireLocation::Uri),
        FieldMeta::payload("tags", "Tags", ValueType::List).nested(&TAG_SCHEMA),
    ],
};

pub(crate) static REMOVE_TAGS_INPUT_SCHEMA: Schema = Schema {
    type_name: "RemoveTagsFromCertificateInput",
    fields: &[
        FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String)
            .located(WireLocation::Uri),
        FieldMeta::payload("tags", "Tags", ValueType::List).nested(&TAG_SCHEMA),
    ],
};

pub(crate) static LIST_TAGS_INPUT_SCHEMA: Schema = Schema {
    type_name: "ListTagsForCertificateInput",
    fields: &[FieldMeta::payload("certificate_arn", "CertificateArn", ValueType::String)
        .located(WireLocation::Uri)],
};

pub(crate) static LIST_TAGS_OUTPUT_SCHEMA: Schema = Schema {
    type_name: "ListTagsForCertificateOutput",
    fields: &[
        FieldMeta::payload("tags", "Tags", ValueType::List).nested(&TAG_SCHEMA),
        FieldMeta::payload("response_metadata", "ResponseMetadata", ValueType::Structure)
            .located(WireLocation::Header)
            .nested(&RESPONSE_METADATA_SCHEMA),
    ],
};

/// Declare an input record carrying an ARN plus a tag list. The add and
/// remove operations share this shape but are distinct wire types.
macro_rules! tag_mutation_input {
    ($(#[$meta:meta])* $name:ident, $builder:ident, $schema:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        pub struct $name {
            #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
            certificate_arn: Option<String>,
            #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
            tags: Option<Vec<Tag>>,
        }

        impl $name {
            /// Start building the input.
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// ARN of the certificate.
            pub fn certificate_arn(&self) -> Option<&str> {
                self.certificate_arn.as_deref()
            }

            /// The tags named by the request. Empty slice when never set.
            pub fn tags(&self) -> &[Tag] {
                self.tags.as_deref().unwrap_or_default()
            }

            /// True when the tag list was explicitly provided.
            pub fn has_tags(&self) -> bool {
                self.tags.is_some()
            }

            /// A new builder seeded with this record's values.
            pub fn to_builder(&self) -> $builder {
                $builder {
                    certificate_arn: self.certificate_arn.clone(),
                    tags: self.tags.clone(),
                }
            }
        }

        impl WireModel for $name {
            fn schema() -> &'static Schema {
                &$schema
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                meta::format_record(self, f)
            }
        }

        /// Builder for the input record.
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $builder {
            certificate_arn: Option<String>,
            tags: Option<Vec<Tag>>,
        }

        impl $builder {
            /// Set the certificate ARN.
            pub fn certificate_arn(mut self, input: impl Into<String>) -> Self {
                self.certificate_arn = Some(input.into());
                self
            }

            /// Set or clear the certificate ARN.
            pub fn set_certificate_arn(mut self, input: Option<String>) -> Self {
                self.certificate_arn = input;
                self
            }

            /// Append one tag, marking the list as set.
            pub fn tags(mut self, input: impl Into<Tag>) -> Self {
                self.tags.get_or_insert_with(Vec::new).push(input.into());
                self
            }

            /// Build one tag in place through a fresh builder and append
            /// it.
            pub fn tags_with(self, f: impl FnOnce(TagBuilder) -> TagBuilder) -> Self {
                let tag = f(Tag::builder()).build();
                self.tags(tag)
            }

            /// Set or clear the tag list.
            pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
                self.tags = input;
                self
            }

            /// Snapshot the current state into the input record.
            pub fn build(self) -> $name {
                $name {
                    certificate_arn: self.certificate_arn,
                    tags: self.tags,
                }
            }
        }

        impl From<$builder> for $name {
            fn from(builder: $builder) -> Self {
                builder.build()
            }
        }
    };
}

tag_mutation_input! {
    /// Input attaching tags to a certificate.
    AddTagsToCertificateInput,
    AddTagsToCertificateInputBuilder,
    ADD_TAGS_INPUT_SCHEMA
}

tag_mutation_input! {
    /// Input detaching tags from a certificate. A tag with no value
    /// matches any value for its key.
    RemoveTagsFromCertificateInput,
    RemoveTagsFromCertificateInputBuilder,
    REMOVE_TAGS_INPUT_SCHEMA
}

/// Input naming the certificate whose tags to list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ListTagsForCertificateInput {
    #[serde(rename = "CertificateArn", skip_serializing_if = "Option::is_none")]
    certificate_arn: Option<String>,
}

impl ListTagsForCertificateInput {
    /// Start building a `ListTagsForCertificateInput`.
    pub fn builder() -> ListTagsForCertificateInputBuilder {
        ListTagsForCertificateInputBuilder::default()
    }

    /// ARN of the certificate.
    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ListTagsForCertificateInputBuilder {
        ListTagsForCertificateInputBuilder {
            certificate_arn: self.certificate_arn.clone(),
        }
    }
}

impl WireModel for ListTagsForCertificateInput {
    fn schema() -> &'static Schema {
        &LIST_TAGS_INPUT_SCHEMA
    }
}

impl fmt::Display for ListTagsForCertificateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ListTagsForCertificateInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTagsForCertificateInputBuilder {
    certificate_arn: Option<String>,
}

impl ListTagsForCertificateInputBuilder {
    /// Set the certificate ARN.
    pub fn certificate_arn(mut self, input: impl Into<String>) -> Self {
        self.certificate_arn = Some(input.into());
        self
    }

    /// Set or clear the certificate ARN.
    pub fn set_certificate_arn(mut self, input: Option<String>) -> Self {
        self.certificate_arn = input;
        self
    }

    /// Snapshot the current state into a [`ListTagsForCertificateInput`].
    pub fn build(self) -> ListTagsForCertificateInput {
        ListTagsForCertificateInput {
            certificate_arn: self.certificate_arn,
        }
    }
}

impl From<ListTagsForCertificateInputBuilder> for ListTagsForCertificateInput {
    fn from(builder: ListTagsForCertificateInputBuilder) -> Self {
        builder.build()
    }
}

/// Output carrying the certificate's tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ListTagsForCertificateOutput {
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "ResponseMetadata::is_empty"
    )]
    response_metadata: ResponseMetadata,
}

impl ListTagsForCertificateOutput {
    /// Start building a `ListTagsForCertificateOutput`.
    pub fn builder() -> ListTagsForCertificateOutputBuilder {
        ListTagsForCertificateOutputBuilder::default()
    }

    /// The certificate's tags. Empty slice when never set.
    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// True when the tag list was explicitly provided.
    pub fn has_tags(&self) -> bool {
        self.tags.is_some()
    }

    /// Shared response metadata.
    pub fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    /// A new builder seeded with this record's values.
    pub fn to_builder(&self) -> ListTagsForCertificateOutputBuilder {
        ListTagsForCertificateOutputBuilder {
            tags: self.tags.clone(),
            response_metadata: self.response_metadata.clone(),
        }
    }
}

impl WireModel for ListTagsForCertificateOutput {
    fn schema() -> &'static Schema {
        &LIST_TAGS_OUTPUT_SCHEMA
    }
}

impl fmt::Display for ListTagsForCertificateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        meta::format_record(self, f)
    }
}

/// Builder for [`ListTagsForCertificateOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTagsForCertificateOutputBuilder {
    tags: Option<Vec<Tag>>,
    response_metadata: ResponseMetadata,
}

impl ListTagsForCertificateOutputBuilder {
    /// Append one tag, marking the list as set.
    pub fn tags(mut self, input: impl Into<Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Set or clear the tag list.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Set the shared response metadata.
    pub fn response_metadata(mut self, input: impl Into<ResponseMetadata>) -> Self {
        self.response_metadata = input.into();
        self
    }

    /// Snapshot the current state into a [`ListTagsForCertificateOutput`].
    pub fn build(self) -> ListTagsForCertificateOutput {
        ListTagsForCertificateOutput {
            tags: self.tags,
            response_metadata: self.response_metadata,
        }
    }
}

impl From<ListTagsForCertificateOutputBuilder> for ListTagsForCertificateOutput {
    fn from(builder: ListTagsForCertificateOutputBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_are_distinct_types() {
        let add = AddTagsToCertificateInput::builder()
            .certificate_arn("arn:certmgr:cert/abc")
            .tags_with(|t| t.key("Env").value("prod"))
            .build();
        let remove = RemoveTagsFromCertificateInput::builder()
            .certificate_arn("arn:certmgr:cert/abc")
            .tags_with(|t| t.key("Env"))
            .build();
        assert_eq!(add.type_name(), "AddTagsToCertificateInput");
        assert_eq!(remove.type_name(), "RemoveTagsFromCertificateInput");
        assert_eq!(add.tags().len(), 1);
        assert_eq!(remove.tags()[0].value(), None);
    }

    #[test]
    fn test_explicit_empty_tag_list() {
        let output = ListTagsForCertificateOutput::builder()
            .set_tags(Some(vec![]))
            .build();
        assert!(output.has_tags());
        assert!(output.tags().is_empty());

        let unset = ListTagsForCertificateOutput::builder().build();
        assert!(!unset.has_tags());
    }

    #[test]
    fn test_round_trip() {
        let output = ListTagsForCertificateOutput::builder()
            .tags(Tag::builder().key("Env").value("prod"))
            .build();
        assert_eq!(output.to_builder().build(), output);
    }
}
