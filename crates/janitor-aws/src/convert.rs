//! SDK shapes to domain values.
use aws_sdk_cloudformation::{primitives::DateTime, types};
use janitor_model::{StackDetail, StackStatus, StackSummary, Tags};
use time::{Duration, OffsetDateTime};

use crate::AwsError;

/// Uniform access to SDK getters that return either `&T` or `Option<&T>`.
pub(crate) trait SdkField<'a, T: ?Sized> {
    fn present(self) -> Option<&'a T>;
}

impl<'a, T: ?Sized> SdkField<'a, T> for &'a T {
    fn present(self) -> Option<&'a T> {
        Some(self)
    }
}

impl<'a, T: ?Sized> SdkField<'a, T> for Option<&'a T> {
    fn present(self) -> Option<&'a T> {
        self
    }
}

fn required<'a, T: ?Sized>(
    value: impl SdkField<'a, T>,
    shape: &'static str,
    field: &'static str,
) -> Result<&'a T, AwsError> {
    value.present().ok_or(AwsError::MissingField { shape, field })
}

pub(crate) fn sdk_status(status: StackStatus) -> types::StackStatus {
    match status {
        StackStatus::CreateComplete => types::StackStatus::CreateComplete,
        StackStatus::CreateFailed => types::StackStatus::CreateFailed,
        StackStatus::UpdateComplete => types::StackStatus::UpdateComplete,
        StackStatus::DeleteFailed => types::StackStatus::DeleteFailed,
    }
}

pub(crate) fn datetime(value: &DateTime) -> Result<OffsetDateTime, AwsError> {
    let secs = OffsetDateTime::from_unix_timestamp(value.secs())
        .map_err(|e| AwsError::Timestamp(e.to_string()))?;
    Ok(secs + Duration::nanoseconds(i64::from(value.subsec_nanos())))
}

pub(crate) fn summary(value: &types::StackSummary) -> Result<StackSummary, AwsError> {
    let name = required(value.stack_name(), "StackSummary", "StackName")?;
    Ok(StackSummary::new(name))
}

pub(crate) fn detail(value: &types::Stack) -> Result<StackDetail, AwsError> {
    let name = required(value.stack_name(), "Stack", "StackName")?;
    let created = required(value.creation_time(), "Stack", "CreationTime")?;

    let mut tags = Tags::new();
    for tag in value.tags() {
        let key = required(tag.key(), "Tag", "Key")?;
        let val = required(tag.value(), "Tag", "Value")?;
        tags.push(key, val);
    }

    Ok(StackDetail::new(name, tags, datetime(created)?))
}

#[cfg(test)]
mod tests {
    use janitor_model::CLEANUP_STATUSES;

    use super::*;

    #[test]
    fn status_names_match_the_service() {
        for status in CLEANUP_STATUSES {
            assert_eq!(sdk_status(status).as_str(), status.as_str());
        }
    }

    #[test]
    fn datetime_keeps_subsecond_precision() {
        let sdk = DateTime::from_secs_and_nanos(1_700_000_000, 250_000_000);
        let converted = datetime(&sdk).unwrap();

        assert_eq!(converted.unix_timestamp(), 1_700_000_000);
        assert_eq!(converted.millisecond(), 250);
    }

    #[test]
    fn datetime_rejects_out_of_range_seconds() {
        let sdk = DateTime::from_secs(i64::MAX);
        assert!(matches!(datetime(&sdk), Err(AwsError::Timestamp(_))));
    }

    const CREATED: i64 = 1_700_000_000;

    /// Builders of shapes with required members return `Result`; others return the shape.
    /// `None` means the builder itself refused the input.
    trait Built<T> {
        fn built(self) -> Option<T>;
    }

    macro_rules! built {
        ($($shape:ty),*) => {$(
            impl Built<$shape> for $shape {
                fn built(self) -> Option<$shape> {
                    Some(self)
                }
            }
            impl<E> Built<$shape> for Result<$shape, E> {
                fn built(self) -> Option<$shape> {
                    self.ok()
                }
            }
        )*};
    }
    built!(types::Stack, types::StackSummary, types::Tag);

    fn tag(key: &str, value: &str) -> types::Tag {
        types::Tag::builder().key(key).value(value).build().built().unwrap()
    }

    fn stack(tags: Vec<types::Tag>) -> types::Stack {
        types::Stack::builder()
            .stack_name("preview-42")
            .creation_time(DateTime::from_secs(CREATED))
            .stack_status(types::StackStatus::CreateComplete)
            .set_tags(Some(tags))
            .build()
            .built()
            .unwrap()
    }

    #[test]
    fn detail_keeps_tag_order_and_duplicates() {
        let sdk = stack(vec![tag("Env", "prod"), tag("Owner", "ci"), tag("Env", "tmp")]);

        let detail = detail(&sdk).unwrap();

        assert_eq!(detail.name, "preview-42");
        assert_eq!(detail.created_at.unix_timestamp(), CREATED);
        let pairs: Vec<_> = detail.tags.iter().map(|t| (t.key(), t.value())).collect();
        assert_eq!(pairs, [("Env", "prod"), ("Owner", "ci"), ("Env", "tmp")]);
        assert!(detail.tags.contains("Env", "tmp"));
    }

    #[test]
    fn detail_without_tags_is_untagged() {
        let detail = detail(&stack(Vec::new())).unwrap();
        assert!(detail.tags.is_empty());
    }

    #[test]
    fn tag_without_value_is_a_missing_field() {
        let Some(valueless) = types::Tag::builder().key("Env").build().built() else {
            // The SDK refuses to build the tag at all.
            return;
        };

        let err = detail(&stack(vec![valueless])).unwrap_err();
        assert!(matches!(err, AwsError::MissingField { shape: "Tag", field: "Value" }), "{err}");
    }

    #[test]
    fn stack_without_creation_time_is_a_missing_field() {
        let Some(sdk) = types::Stack::builder()
            .stack_name("preview-42")
            .stack_status(types::StackStatus::CreateComplete)
            .build()
            .built()
        else {
            return;
        };

        let err = detail(&sdk).unwrap_err();
        assert!(matches!(err, AwsError::MissingField { shape: "Stack", field: "CreationTime" }), "{err}");
    }

    #[test]
    fn stack_without_name_is_a_missing_field() {
        let Some(sdk) = types::Stack::builder()
            .creation_time(DateTime::from_secs(CREATED))
            .stack_status(types::StackStatus::CreateComplete)
            .build()
            .built()
        else {
            return;
        };

        let err = detail(&sdk).unwrap_err();
        assert!(matches!(err, AwsError::MissingField { shape: "Stack", field: "StackName" }), "{err}");
    }

    #[test]
    fn summary_maps_stack_name() {
        let sdk = types::StackSummary::builder()
            .stack_name("preview-42")
            .creation_time(DateTime::from_secs(CREATED))
            .stack_status(types::StackStatus::UpdateComplete)
            .build()
            .built()
            .unwrap();

        assert_eq!(summary(&sdk).unwrap(), StackSummary::new("preview-42"));
    }

    #[test]
    fn missing_field_names_shape_and_field() {
        let err = required(None::<&str>, "Stack", "StackName").unwrap_err();
        assert_eq!(err.to_string(), "missing field 'StackName' in Stack");
    }
}
