//! Tree benchmarks: load and validate over generated policy trees.
//!
//! Run with: cargo bench -p mseg-analysis --bench tree_bench

use std::path::Path;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mseg_analysis::model::{codec, NetworkRuleSetPolicy, PolicyDocument, Rule, TrafficAction};
use mseg_analysis::{TagGroup, TreeLoader, Validator};
use tempfile::TempDir;

/// `fanout` children at every level, one policy per kubernetes namespace.
fn create_tree(fanout: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for t in 0..fanout {
        for c in 0..fanout {
            for g in 0..fanout {
                for k in 0..fanout {
                    let names = [
                        format!("t{t}"),
                        format!("c{c}"),
                        format!("g{g}"),
                        format!("k{k}"),
                    ];
                    write_policy(dir.path(), &names);
                }
            }
        }
    }
    dir
}

fn write_policy(root: &Path, names: &[String; 4]) {
    let ns = root.join(names.join("/"));
    std::fs::create_dir_all(&ns).unwrap();

    let object: TagGroup = [
        format!("@org:tenant={}", names[0]),
        format!("@org:cloudaccount={}", names[1]),
        format!("@org:group={}", names[2]),
        format!("@org:kubernetes={}", names[3]),
        "app=bench".to_string(),
    ]
    .into_iter()
    .collect();

    let mut ruleset = NetworkRuleSetPolicy::new("ruleset1");
    ruleset.outgoing_rules = vec![Rule::new(TrafficAction::Allow, vec![object.clone()])];
    ruleset.incoming_rules = vec![Rule::new(TrafficAction::Allow, vec![object])];
    let doc = PolicyDocument::new(format!("{}:policy.yaml", names.join(":")))
        .with_ruleset(ruleset);
    codec::write(&ns.join("policy.yaml"), &doc).unwrap();
}

fn tree_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_load");
    group.sample_size(10);

    for fanout in [2, 4, 6] {
        let dir = create_tree(fanout);
        group.bench_with_input(BenchmarkId::new("load", fanout), &fanout, |b, _| {
            b.iter(|| TreeLoader::default().load(dir.path()));
        });
    }
    group.finish();
}

fn tree_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_validate");

    for fanout in [2, 4, 6] {
        let dir = create_tree(fanout);
        let tree = TreeLoader::default().load(dir.path()).data;
        group.bench_with_input(BenchmarkId::new("validate", fanout), &fanout, |b, _| {
            b.iter(|| Validator::new().validate(&tree));
        });
    }
    group.finish();
}

criterion_group!(benches, tree_load, tree_validate);
criterion_main!(benches);
