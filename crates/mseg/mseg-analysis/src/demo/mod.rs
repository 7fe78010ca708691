//! Demonstration policy tree.
//!
//! Writes two small applications whose documents carry placeholder subject tags
//! and labels that do not match their location. `app_b` only has `cloud1`, so
//! its references into `cloud2` stay broken even after sanitizing.

use std::fs;
use std::path::Path;

use mseg_core::errors::{FsError, LintError};

use crate::model::{codec, NetworkRuleSetPolicy, PolicyDocument, Rule, TrafficAction};
use crate::tags::TagGroup;

/// Tenant namespace shared by both demo applications.
pub const DEMO_TENANT: &str = "841735782980352000";

const APP_A_NOTES: &str = "\
This app fails validation because its tags are incorrect. Running sanitize
corrects these tags.

Note: with both --sanitize and --validate, sanitize runs first and fixes issues
such as labels. To see those errors run --validate on its own. If sanitize has
already run, execute restore.sh and then validate only.";

const APP_B_NOTES: &str = "\
This app fails validation because its tags are incorrect and because it
references a cloud that does not exist. Running sanitize corrects the labels
but cannot fix the missing cloud.

Note: with both --sanitize and --validate, sanitize runs first and fixes issues
such as labels. To see those errors run --validate on its own. If sanitize has
already run, execute restore.sh and then validate only.";

/// (cloud, cluster, namespace, file, is_database) for every app_a document.
const APP_A_LAYOUT: &[(&str, &str, &str, &str, bool)] = &[
    ("cloud1", "cluster1", "database", "policy1.yaml", true),
    ("cloud1", "cluster2", "database", "policy1.yaml", true),
    ("cloud1", "cluster1", "app", "policy1.yaml", false),
    ("cloud1", "cluster2", "app", "policy2.yaml", false),
    ("cloud2", "cluster1", "database", "policy1.yaml", true),
    ("cloud2", "cluster2", "database", "policy1.yaml", true),
    ("cloud2", "cluster1", "app", "policy1.yaml", false),
    ("cloud2", "cluster2", "app", "policy2.yaml", false),
];

/// Write the demonstration tree under `dir`, which must not exist yet.
pub fn write_example(dir: &Path) -> Result<(), LintError> {
    if dir.exists() {
        return Err(FsError::AlreadyExists {
            path: dir.to_path_buf(),
        }
        .into());
    }
    create_dir(dir)?;

    write_app(&dir.join("app_a"), APP_A_NOTES, APP_A_LAYOUT)?;
    let cloud1_only: Vec<_> = APP_A_LAYOUT
        .iter()
        .copied()
        .filter(|(cloud, ..)| *cloud == "cloud1")
        .collect();
    write_app(&dir.join("app_b"), APP_B_NOTES, &cloud1_only)?;

    tracing::info!(path = %dir.display(), "example tree written");
    Ok(())
}

fn write_app(
    app_dir: &Path,
    notes: &str,
    layout: &[(&str, &str, &str, &str, bool)],
) -> Result<(), LintError> {
    create_dir(app_dir)?;
    let notes_path = app_dir.join("notes.txt");
    fs::write(&notes_path, notes).map_err(|source| FsError::WriteFile {
        path: notes_path,
        source,
    })?;

    for &(cloud, cluster, namespace, file, is_database) in layout {
        let ns_dir = app_dir
            .join(DEMO_TENANT)
            .join(cloud)
            .join(cluster)
            .join(namespace);
        create_dir(&ns_dir)?;
        let document = if is_database {
            database_policy()
        } else {
            app_server_policy()
        };
        codec::write(&ns_dir.join(file), &document)?;
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<(), FsError> {
    fs::create_dir_all(path).map_err(|source| FsError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// A fully qualified object tag-group ending in one `app=` tag.
fn endpoint(cloud: &str, cluster: &str, namespace: &str, app: &str) -> TagGroup {
    [
        format!("@org:tenant={DEMO_TENANT}"),
        format!("@org:cloudaccount={cloud}"),
        format!("@org:group={cluster}"),
        format!("@org:kubernetes={namespace}"),
        format!("app={app}"),
    ]
    .into_iter()
    .collect()
}

/// Subject with placeholder `@org:` tags that sanitizing replaces.
fn placeholder_subject(app: &str) -> Vec<TagGroup> {
    vec![[
        "@org:tenant=trash".to_string(),
        "@org:cloudaccount=trash".to_string(),
        "@org:group=trash".to_string(),
        "@org:group=trash".to_string(),
        format!("app={app}"),
    ]
    .into_iter()
    .collect()]
}

/// A database allowed to reach its peers in the same namespace of other clusters.
pub fn database_policy() -> PolicyDocument {
    let peers = vec![
        endpoint("cloud1", "cluster1", "database", "database"),
        endpoint("cloud1", "cluster2", "database", "database"),
        endpoint("cloud2", "cluster1", "database", "database"),
    ];

    let mut ruleset = NetworkRuleSetPolicy::new("ruleset1");
    ruleset.outgoing_rules = vec![Rule::new(TrafficAction::Allow, peers.clone())];
    ruleset.incoming_rules = vec![Rule::new(TrafficAction::Allow, peers)];
    ruleset.subject = placeholder_subject("database");

    PolicyDocument::new("config1").with_ruleset(ruleset)
}

/// An app server allowed to talk to the databases and to other app servers.
pub fn app_server_policy() -> PolicyDocument {
    let outgoing = vec![
        endpoint("cloud1", "cluster1", "app", "app"),
        endpoint("cloud1", "cluster2", "app", "app"),
        endpoint("cloud1", "cluster1", "database", "database"),
        endpoint("cloud1", "cluster2", "database", "database"),
        endpoint("cloud1", "cluster2", "app", "app"),
        endpoint("cloud2", "cluster2", "app", "app"),
    ];
    let incoming = vec![endpoint("cloud1", "cluster1", "app", "app")];

    let mut ruleset = NetworkRuleSetPolicy::new("ruleset1");
    ruleset.outgoing_rules = vec![Rule::new(TrafficAction::Allow, outgoing)];
    ruleset.incoming_rules = vec![Rule::new(TrafficAction::Allow, incoming)];
    ruleset.subject = placeholder_subject("app");

    PolicyDocument::new("config2").with_ruleset(ruleset)
}
