//! GetDeviceId use case tests
//! 设备标识用例测试

use std::sync::Arc;

use devid_app::{DeviceIdOrigin, GetDeviceId};
use devid_core::ports::{DigestPort, PlatformContextPort, PlatformReadError, RandomIdPort};
use devid_core::DescriptorField;
use devid_infra::{Sha1Digest, UuidV4Generator};
use mockall::mock;
use uuid::Uuid;

mock! {
    pub Platform {}

    impl PlatformContextPort for Platform {
        fn installation_id(&self) -> Result<String, PlatformReadError>;
        fn descriptor(&self, field: DescriptorField) -> Result<String, PlatformReadError>;
    }
}

mock! {
    pub Digest {}

    impl DigestPort for Digest {
        fn digest(&self, bytes: &[u8]) -> anyhow::Result<Vec<u8>>;
    }
}

mock! {
    pub Random {}

    impl RandomIdPort for Random {
        fn random_uuid(&self) -> Uuid;
    }
}

fn sample_descriptor(field: DescriptorField) -> String {
    match field {
        DescriptorField::Board => "msm",
        DescriptorField::Brand => "Redmi",
        DescriptorField::Device => "ab",
        DescriptorField::Hardware => "q",
        DescriptorField::BuildId => "QP1",
        DescriptorField::Model => "Mi 9",
        DescriptorField::Product => "walle",
    }
    .to_string()
}

fn platform_with(
    installation_id: Option<&'static str>,
    descriptors_available: bool,
) -> MockPlatform {
    let mut platform = MockPlatform::new();
    platform.expect_installation_id().returning(move || {
        installation_id
            .map(str::to_string)
            .ok_or_else(|| PlatformReadError::NotAvailable("installation id".to_string()))
    });
    platform.expect_descriptor().returning(move |field| {
        if descriptors_available {
            Ok(sample_descriptor(field))
        } else {
            Err(PlatformReadError::Source("build.prop unreadable".to_string()))
        }
    });
    platform
}

fn random_never_called() -> Arc<MockRandom> {
    let mut random = MockRandom::new();
    random.expect_random_uuid().times(0);
    Arc::new(random)
}

#[test]
fn test_known_vector_with_installation_id_and_descriptors() {
    let usecase = GetDeviceId::new(
        Arc::new(platform_with(Some("abc123"), true)),
        Arc::new(Sha1Digest),
        random_never_called(),
    );

    let report = usecase.execute_detailed();

    assert_eq!(
        report.device_id.as_str(),
        "F99D33EAA174D97E9D778C8EF9BEA734DDB97C1A"
    );
    assert_eq!(report.origin, DeviceIdOrigin::Digest);
    assert!(report.installation_id_available);
    assert!(report.descriptors_available);
    assert_eq!(
        report.pseudo_hardware_id.as_deref(),
        Some("fffffffff266b191ffffffffab18d290")
    );
}

#[test]
fn test_missing_installation_id_has_no_leading_separator() {
    let mut digest = MockDigest::new();
    digest
        .expect_digest()
        .withf(|bytes: &[u8]| bytes == b"fffffffff266b1910000000000000000")
        .times(1)
        .returning(|bytes| Sha1Digest.digest(bytes));

    let usecase = GetDeviceId::new(
        Arc::new(platform_with(None, true)),
        Arc::new(digest),
        random_never_called(),
    );

    let report = usecase.execute_detailed();

    assert_eq!(
        report.device_id.as_str(),
        "1053CF2B7CE5F0081913338C5F8E215EFDD8F072"
    );
    assert!(!report.installation_id_available);
}

#[test]
fn test_missing_descriptors_has_no_trailing_separator() {
    let mut digest = MockDigest::new();
    digest
        .expect_digest()
        .withf(|bytes: &[u8]| bytes == b"abc123")
        .times(1)
        .returning(|bytes| Sha1Digest.digest(bytes));

    let usecase = GetDeviceId::new(
        Arc::new(platform_with(Some("abc123"), false)),
        Arc::new(digest),
        random_never_called(),
    );

    let report = usecase.execute_detailed();

    assert_eq!(
        report.device_id.as_str(),
        "6367C48DD193D56EA7B0BAAD25B19455E529F5EE"
    );
    assert!(!report.descriptors_available);
    assert_eq!(report.pseudo_hardware_id, None);
}

#[test]
fn test_no_inputs_falls_back_to_random() {
    let fixed = Uuid::parse_str("0123abcd-4567-89ef-0123-456789abcdef").unwrap();

    let mut digest = MockDigest::new();
    digest.expect_digest().times(0);

    let mut random = MockRandom::new();
    random.expect_random_uuid().times(1).return_const(fixed);

    let usecase = GetDeviceId::new(
        Arc::new(platform_with(None, false)),
        Arc::new(digest),
        Arc::new(random),
    );

    let report = usecase.execute_detailed();

    assert_eq!(report.origin, DeviceIdOrigin::RandomFallback);
    assert_eq!(
        report.device_id.as_str(),
        "0123ABCD456789EF0123456789ABCDEF"
    );
}

#[test]
fn test_empty_installation_id_without_descriptors_falls_back() {
    let usecase = GetDeviceId::new(
        Arc::new(platform_with(Some(""), false)),
        Arc::new(Sha1Digest),
        Arc::new(UuidV4Generator),
    );

    let report = usecase.execute_detailed();

    assert_eq!(report.origin, DeviceIdOrigin::RandomFallback);
    assert_eq!(report.device_id.as_str().len(), 32);
    assert!(report.device_id.is_valid());
}

#[test]
fn test_digest_failure_falls_back_to_random() {
    let mut digest = MockDigest::new();
    digest
        .expect_digest()
        .returning(|_| Err(anyhow::anyhow!("digest provider missing")));

    let mut random = MockRandom::new();
    random
        .expect_random_uuid()
        .times(1)
        .return_const(Uuid::from_u128(0xfeed));

    let usecase = GetDeviceId::new(
        Arc::new(platform_with(Some("abc123"), true)),
        Arc::new(digest),
        Arc::new(random),
    );

    let id = usecase.execute();

    assert_eq!(id.as_str(), "0000000000000000000000000000FEED");
}

#[test]
fn test_empty_digest_falls_back_to_random() {
    let mut digest = MockDigest::new();
    digest.expect_digest().returning(|_| Ok(Vec::new()));

    let mut random = MockRandom::new();
    random
        .expect_random_uuid()
        .times(1)
        .return_const(Uuid::from_u128(1));

    let usecase = GetDeviceId::new(
        Arc::new(platform_with(Some("abc123"), true)),
        Arc::new(digest),
        Arc::new(random),
    );

    assert_eq!(usecase.execute_detailed().origin, DeviceIdOrigin::RandomFallback);
}

#[test]
fn test_digest_path_is_deterministic() {
    let usecase = GetDeviceId::new(
        Arc::new(platform_with(Some("9774d56d682e549c"), true)),
        Arc::new(Sha1Digest),
        random_never_called(),
    );

    let first = usecase.execute();
    let second = usecase.execute();

    assert_eq!(first, second);
    assert_eq!(first.as_str().len(), 40);
    assert!(first.is_valid());
}

#[test]
fn test_random_fallback_differs_between_calls() {
    let usecase = GetDeviceId::new(
        Arc::new(platform_with(None, false)),
        Arc::new(Sha1Digest),
        Arc::new(UuidV4Generator),
    );

    let first = usecase.execute();
    let second = usecase.execute();

    assert_ne!(first, second);
    assert!(first.is_valid());
    assert!(second.is_valid());
}

#[test]
fn test_single_descriptor_failure_drops_pseudo_id() {
    let mut platform = MockPlatform::new();
    platform
        .expect_installation_id()
        .returning(|| Ok("abc123".to_string()));
    platform.expect_descriptor().returning(|field| match field {
        DescriptorField::Hardware => Err(PlatformReadError::NotAvailable(field.to_string())),
        other => Ok(sample_descriptor(other)),
    });

    let usecase = GetDeviceId::new(
        Arc::new(platform),
        Arc::new(Sha1Digest),
        random_never_called(),
    );

    let report = usecase.execute_detailed();

    assert!(!report.descriptors_available);
    assert_eq!(
        report.device_id.as_str(),
        "6367C48DD193D56EA7B0BAAD25B19455E529F5EE"
    );
}

#[test]
fn test_report_serializes_in_camel_case() {
    let usecase = GetDeviceId::new(
        Arc::new(platform_with(Some("abc123"), true)),
        Arc::new(Sha1Digest),
        random_never_called(),
    );

    let json = serde_json::to_value(usecase.execute_detailed()).unwrap();

    assert_eq!(json["deviceId"], "F99D33EAA174D97E9D778C8EF9BEA734DDB97C1A");
    assert_eq!(json["origin"], "digest");
    assert_eq!(json["installationIdAvailable"], true);
    assert_eq!(json["pseudoHardwareId"], "fffffffff266b191ffffffffab18d290");
    assert!(json.get("installationId").is_none());
}
