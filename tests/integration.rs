//! Integration tests for dirq against real directory trees


use dirq::{DiskEntry, ExplorerError, NotFoundCause, RootProblem, TreeWalker, WalkerConfig};
use harness::TestTree;

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn test_sample_tree() {
    let tree = TestTree::sample();
    let walker = TreeWalker::default();
    let root = tree.root();

    assert_eq!(
        sorted(walker.deep_list_contents(&root).unwrap()),
        vec!["a.txt", "b.txt", "c.log"]
    );
    assert_eq!(walker.search_by_key(&root, "log"), vec!["c.log"]);
    assert_eq!(walker.search_by_size(&root, 100, 200), vec!["b.txt"]);
    assert_eq!(
        walker.search_by_name(&root, "b.txt").unwrap(),
        tree.path().join("sub").join("b.txt")
    );
    assert!(walker.search_by_name(&root, "missing").unwrap_err().is_not_found());
}

#[test]
fn test_list_contents_includes_directories() {
    let tree = TestTree::sample();
    tree.add_dir("empty");
    let walker = TreeWalker::default();

    assert_eq!(
        sorted(walker.list_contents(&tree.root()).unwrap()),
        vec!["a.txt", "empty", "sub"]
    );
}

#[test]
fn test_sorted_walker_is_deterministic() {
    let tree = TestTree::new();
    tree.add_file("z.txt", 1);
    tree.add_file("m/inner.txt", 1);
    tree.add_file("a.txt", 1);

    let walker = TreeWalker::new(WalkerConfig {
        sort_entries: true,
        ..Default::default()
    });
    assert_eq!(walker.list_contents(&tree.root()).unwrap(), vec!["a.txt", "m", "z.txt"]);
    assert_eq!(
        walker.deep_list_contents(&tree.root()).unwrap(),
        vec!["a.txt", "inner.txt", "z.txt"]
    );
}

#[test]
fn test_search_by_name_finds_file_after_unrelated_subdirectories() {
    let tree = TestTree::new();
    tree.add_file("aaa/other.txt", 1);
    tree.add_dir("bbb/ccc");
    tree.add_file("zzz/deep/target.txt", 1);

    for sort_entries in [false, true] {
        let walker = TreeWalker::new(WalkerConfig {
            sort_entries,
            ..Default::default()
        });
        assert_eq!(
            walker.search_by_name(&tree.root(), "target.txt").unwrap(),
            tree.path().join("zzz/deep/target.txt")
        );
    }
}

#[test]
fn test_file_root_errors() {
    let tree = TestTree::sample();
    let file = DiskEntry::new(tree.path().join("a.txt"));
    let walker = TreeWalker::default();

    assert!(matches!(
        walker.list_contents(&file),
        Err(ExplorerError::NotADirectory {
            reason: RootProblem::NotADirectory,
            ..
        })
    ));
    assert!(matches!(
        walker.deep_list_contents(&file),
        Err(ExplorerError::NotADirectory {
            reason: RootProblem::NotADirectory,
            ..
        })
    ));
    assert!(matches!(
        walker.search_by_name(&file, "a.txt"),
        Err(ExplorerError::NotFound {
            cause: NotFoundCause::InvalidRoot(RootProblem::NotADirectory),
            ..
        })
    ));
    assert!(walker.search_by_key(&file, "a").is_empty());
    assert!(walker.search_by_size(&file, 0, 100).is_empty());
}

#[test]
fn test_missing_root_errors() {
    let tree = TestTree::new();
    let missing = DiskEntry::new(tree.path().join("does-not-exist"));
    let walker = TreeWalker::default();

    assert!(matches!(
        walker.deep_list_contents(&missing),
        Err(ExplorerError::NotADirectory {
            reason: RootProblem::Missing,
            ..
        })
    ));
    assert!(walker.list_contents(&missing).unwrap_err().is_not_a_directory());
    assert!(walker.search_by_name(&missing, "x").unwrap_err().is_not_found());
    assert!(walker.search_by_key(&missing, "x").is_empty());
    assert!(walker.search_by_size(&missing, 0, 10).is_empty());
}

#[test]
fn test_empty_directory() {
    let tree = TestTree::new();
    let walker = TreeWalker::default();

    assert!(walker.list_contents(&tree.root()).unwrap().is_empty());
    assert!(walker.deep_list_contents(&tree.root()).unwrap().is_empty());
    assert!(walker.search_by_key(&tree.root(), "").is_empty());
    assert!(matches!(
        walker.search_by_name(&tree.root(), "x"),
        Err(ExplorerError::NotFound {
            cause: NotFoundCause::NoMatch,
            ..
        })
    ));
}

#[test]
fn test_search_by_key_across_depths() {
    let tree = TestTree::new();
    tree.add_file("app.log", 1);
    tree.add_file("var/logfile.txt", 1);
    tree.add_file("var/readme.md", 1);
    tree.add_file("var/log/archive/old.LOG", 1);

    let walker = TreeWalker::default();
    assert_eq!(
        sorted(walker.search_by_key(&tree.root(), "log")),
        vec!["app.log", "logfile.txt"]
    );
}

#[test]
fn test_empty_key_matches_every_file() {
    let tree = TestTree::sample();
    let walker = TreeWalker::default();
    assert_eq!(
        sorted(walker.search_by_key(&tree.root(), "")),
        vec!["a.txt", "b.txt", "c.log"]
    );
}

#[test]
fn test_search_by_size_negative_minimum_includes_empty_files() {
    let tree = TestTree::new();
    tree.add_file("empty.txt", 0);
    tree.add_file("nested/one", 1);

    let walker = TreeWalker::default();
    assert_eq!(walker.search_by_size(&tree.root(), 0, 10), vec!["one"]);
    assert_eq!(
        sorted(walker.search_by_size(&tree.root(), -1, 10)),
        vec!["empty.txt", "one"]
    );
}

#[test]
fn test_search_by_size_uses_each_files_own_size() {
    let tree = TestTree::new();
    tree.add_file("tiny", 1);
    tree.add_file("d/small", 101);
    tree.add_file("d/e/edge", 200);
    tree.add_file("d/e/f/mid", 199);

    let walker = TreeWalker::default();
    assert_eq!(
        sorted(walker.search_by_size(&tree.root(), 100, 200)),
        vec!["mid", "small"]
    );
}
