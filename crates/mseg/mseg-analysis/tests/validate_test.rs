//! Validator: reference resolution and label checks over loaded trees.

mod common;

use std::fs;

use mseg_analysis::{TreeLoader, Validator};
use mseg_core::errors::{LintError, ReferenceError};
use mseg_core::{NamespaceLevel, RuleKind};
use tempfile::TempDir;

use common::{chain, group, mkdirs, policy, write_policy};

fn tags(names: &[&str]) -> Vec<String> {
    chain(names)
}

fn as_group(tags: &[String]) -> mseg_analysis::TagGroup {
    tags.iter().map(String::as_str).collect()
}

#[test]
fn test_resolvable_references_are_clean() {
    let dir = TempDir::new().unwrap();
    mkdirs(dir.path(), "T1/C1/G1/K1");
    mkdirs(dir.path(), "T1/C2");
    write_policy(
        dir.path(),
        "T1/C1/G1/K1/p.yaml",
        &policy(
            "T1:C1:G1:K1:p.yaml",
            vec![],
            vec![
                as_group(&tags(&["T1", "C1", "G1", "K1"])),
                as_group(&tags(&["T1", "C2"])),
                as_group(&tags(&["T1"])),
            ],
        ),
    );

    let tree = TreeLoader::default().load(dir.path()).into_result().unwrap();
    let errors = Validator::new().validate(&tree);
    assert!(errors.is_empty(), "{errors}");
}

#[test]
fn test_unknown_cloud_names_namespace_path() {
    let dir = TempDir::new().unwrap();
    write_policy(
        dir.path(),
        "T1/p.yaml",
        &policy(
            "T1:p.yaml",
            vec![],
            vec![group(&["@org:tenant=T1", "@org:cloudaccount=ghost"])],
        ),
    );

    let tree = TreeLoader::default().load(dir.path()).into_result().unwrap();
    let errors = Validator::new().validate(&tree).into_vec();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        LintError::Reference(ReferenceError::UnknownNamespace {
            rule_kind,
            level,
            namespace,
            ..
        }) => {
            assert_eq!(*rule_kind, RuleKind::Outgoing);
            assert_eq!(*level, NamespaceLevel::Cloud);
            assert_eq!(namespace, &dir.path().join("T1").join("ghost"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_ancestor_tag_names_that_level() {
    for (drop, level) in [
        (0usize, NamespaceLevel::Tenant),
        (1, NamespaceLevel::Cloud),
        (2, NamespaceLevel::Group),
    ] {
        let dir = TempDir::new().unwrap();
        mkdirs(dir.path(), "T1/C1/G1/K1");
        let mut object = tags(&["T1", "C1", "G1", "K1"]);
        object.remove(drop);
        write_policy(
            dir.path(),
            "T1/C1/p.yaml",
            &policy("T1:C1:p.yaml", vec![], vec![as_group(&object)]),
        );

        let tree = TreeLoader::default().load(dir.path()).into_result().unwrap();
        let errors = Validator::new().validate(&tree).into_vec();
        assert_eq!(errors.len(), 1, "dropping {level}");
        match &errors[0] {
            LintError::Reference(e @ ReferenceError::MissingTag { .. }) => {
                assert_eq!(e.level(), level);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn test_empty_object_requires_tenant() {
    let dir = TempDir::new().unwrap();
    write_policy(
        dir.path(),
        "T1/p.yaml",
        &policy("T1:p.yaml", vec![], vec![group(&["app=x"])]),
    );

    let tree = TreeLoader::default().load(dir.path()).into_result().unwrap();
    let errors = Validator::new().validate(&tree).into_vec();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        LintError::Reference(ReferenceError::MissingTag {
            level: NamespaceLevel::Tenant,
            ..
        })
    ));
}

#[test]
fn test_outgoing_reported_before_incoming() {
    let dir = TempDir::new().unwrap();
    let mut doc = policy(
        "T1:p.yaml",
        vec![],
        vec![group(&["@org:tenant=nope"])],
    );
    if let Some(data) = doc.data.as_mut() {
        data.networkrulesetpolicies[0].incoming_rules =
            vec![mseg_analysis::model::Rule::new(
                mseg_analysis::model::TrafficAction::Allow,
                vec![group(&["@org:tenant=also-nope"])],
            )];
    }
    write_policy(dir.path(), "T1/p.yaml", &doc);

    let tree = TreeLoader::default().load(dir.path()).into_result().unwrap();
    let kinds: Vec<_> = Validator::new()
        .validate(&tree)
        .into_iter()
        .map(|e| match e {
            LintError::Reference(r) => r.rule_kind(),
            other => panic!("unexpected error: {other:?}"),
        })
        .collect();
    assert_eq!(kinds, vec![RuleKind::Outgoing, RuleKind::Incoming]);
}

#[test]
fn test_label_mismatch_and_missing_data() {
    let dir = TempDir::new().unwrap();
    write_policy(
        dir.path(),
        "T1/p.yaml",
        &policy("config1", vec![], vec![]),
    );
    mkdirs(dir.path(), "T2");
    fs::write(dir.path().join("T2/empty.yaml"), "label: T2:empty.yaml\n").unwrap();

    let tree = TreeLoader::default().load(dir.path()).into_result().unwrap();
    let errors = Validator::new().validate(&tree).into_vec();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].kind(), "label");
    assert!(errors[0].to_string().contains("T1:p.yaml"));
    assert_eq!(errors[1].kind(), "document");
}

#[test]
fn test_removing_an_ancestor_namespace_names_that_level() {
    let levels = [
        ("T1", NamespaceLevel::Tenant),
        ("T1/C1", NamespaceLevel::Cloud),
        ("T1/C1/G1", NamespaceLevel::Group),
        ("T1/C1/G1/K1", NamespaceLevel::Kubernetes),
    ];
    for (removed, level) in levels {
        let dir = TempDir::new().unwrap();
        mkdirs(dir.path(), "T1/C1/G1/K1");
        write_policy(
            dir.path(),
            "T0/p.yaml",
            &policy(
                "T0:p.yaml",
                vec![],
                vec![as_group(&tags(&["T1", "C1", "G1", "K1"]))],
            ),
        );

        let tree = TreeLoader::default().load(dir.path()).into_result().unwrap();
        assert!(Validator::new().validate(&tree).is_empty());

        fs::remove_dir_all(dir.path().join(removed)).unwrap();
        let tree = TreeLoader::default().load(dir.path()).into_result().unwrap();
        let errors = Validator::new().validate(&tree).into_vec();
        assert_eq!(errors.len(), 1, "removing {removed}");
        match &errors[0] {
            LintError::Reference(e @ ReferenceError::UnknownNamespace { .. }) => {
                assert_eq!(e.level(), level);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
