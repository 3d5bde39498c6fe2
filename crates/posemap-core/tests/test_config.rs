use posemap_core::config::SampleConfig;
use posemap_core::error::PosemapError;

#[test]
fn test_defaults() {
    let c = SampleConfig::default();
    assert_eq!(c.boxsize, 368);
    assert_eq!(c.label_stride, 8);
    assert_eq!(c.joint_sigma, 7.0);
    assert_eq!(c.center_sigma, 21.0);
    assert_eq!(c.seq_len, 5);
    assert_eq!(c.raw_joint_count, 12);
    assert!(c.train);
    assert!(c.validate().is_ok());
}

#[test]
fn test_derived_sizes() {
    let train = SampleConfig::default();
    assert_eq!(train.label_size(), 46);
    assert_eq!(train.joint_count(), 13);
    assert_eq!(train.label_channels(), 13);
    assert_eq!(train.split_dir(), "train");

    let eval = SampleConfig::eval();
    assert_eq!(eval.joint_count(), 12);
    assert_eq!(eval.label_channels(), 13);
    assert_eq!(eval.split_dir(), "test");
}

#[test]
fn test_validate_rejects_bad_values() {
    let cases = [
        SampleConfig {
            label_stride: 0,
            ..SampleConfig::default()
        },
        SampleConfig {
            boxsize: 4,
            ..SampleConfig::default()
        },
        SampleConfig {
            seq_len: 0,
            ..SampleConfig::default()
        },
        SampleConfig {
            raw_joint_count: 2,
            ..SampleConfig::default()
        },
        SampleConfig {
            joint_sigma: 0.0,
            ..SampleConfig::default()
        },
        SampleConfig {
            center_sigma: f32::NAN,
            ..SampleConfig::default()
        },
    ];
    for c in cases {
        assert!(
            matches!(c.validate(), Err(PosemapError::InvalidConfig(_))),
            "accepted {c:?}"
        );
    }
}

#[test]
fn test_partial_config_fills_defaults() {
    let c: SampleConfig = serde_json::from_str(r#"{ "train": false, "seq_len": 3 }"#).unwrap();
    assert_eq!(
        c,
        SampleConfig {
            train: false,
            seq_len: 3,
            ..SampleConfig::default()
        }
    );
}
