use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn pycheck_clean_binary() -> &'static str {
    env!("CARGO_BIN_EXE_pycheck-clean")
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn run_clean(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(pycheck_clean_binary())
        .args(args)
        .current_dir(cwd)
        .env_remove("PYCHECK_LOG")
        .output()
        .expect("failed to run pycheck-clean");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn make_tree(root: &Path) {
    touch(&root.join("germinate/seeds.py"));
    touch(&root.join("germinate/seeds.pyc"));
    touch(&root.join("germinate/__pycache__/seeds.cpython-312.pyc"));
    touch(&root.join("germinate.egg-info/SOURCES.txt"));
    touch(&root.join("debhelper/dh_germinate_metapackage.1"));
    touch(&root.join("man/germinate.1"));
    touch(&root.join(".pybuild/cache.pyc"));
    touch(&root.join("debian/tmp/module.pyc"));
}

#[test]
fn clean_removes_generated_files_from_current_dir() {
    let dir = tempdir().unwrap();
    make_tree(dir.path());

    let (stdout, stderr, code) = run_clean(dir.path(), &[]);

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(stdout.matches("removing").count(), 4);
    assert!(stdout.contains("germinate/__pycache__"));
    assert!(!dir.path().join("germinate/seeds.pyc").exists());
    assert!(!dir.path().join("germinate/__pycache__").exists());
    assert!(!dir.path().join("germinate.egg-info").exists());
    assert!(!dir.path().join("debhelper/dh_germinate_metapackage.1").exists());
    assert!(dir.path().join("germinate/seeds.py").exists());
    assert!(dir.path().join("man/germinate.1").exists());
    assert!(dir.path().join(".pybuild/cache.pyc").exists());
    assert!(dir.path().join("debian/tmp/module.pyc").exists());
}

#[test]
fn dry_run_lists_without_removing() {
    let dir = tempdir().unwrap();
    make_tree(dir.path());

    let (stdout, _, code) = run_clean(dir.path(), &["--dry-run"]);

    assert_eq!(code, 0);
    assert_eq!(stdout.matches("would remove").count(), 4);
    assert!(dir.path().join("germinate/seeds.pyc").exists());
    assert!(dir.path().join("germinate.egg-info").exists());
}

#[test]
fn root_option_scopes_the_clean() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a/x.pyc"));
    touch(&dir.path().join("b/y.pyc"));

    let (_, _, code) = run_clean(dir.path(), &["--root", "a"]);

    assert_eq!(code, 0);
    assert!(!dir.path().join("a/x.pyc").exists());
    assert!(dir.path().join("b/y.pyc").exists());
}

#[test]
fn clean_tree_prints_nothing() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("germinate/seeds.py"));

    let (stdout, stderr, code) = run_clean(dir.path(), &[]);

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}
