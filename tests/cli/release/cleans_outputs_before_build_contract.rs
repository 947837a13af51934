use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn stale_dist_and_build_are_removed_before_building() {
    let ctx = TestContext::new();
    ctx.write_pyproject("version = \"1.2.3\"");
    ctx.write_file("dist/pkg-1.0.0.tar.gz", "stale");
    ctx.write_file("build/lib/pkg/__init__.py", "");

    ctx.cli()
        .write_stdin("n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("dist/pkg-1.0.0.tar.gz").not());

    assert!(!ctx.command_log().iter().any(|line| line.starts_with("leftover")));
    assert!(!ctx.work_dir().join("dist/pkg-1.0.0.tar.gz").exists());
    assert!(!ctx.work_dir().join("build").exists());
}

#[test]
fn hidden_files_in_dist_are_not_uploaded() {
    let ctx = TestContext::new();
    ctx.write_pyproject("version = \"1.2.3\"");

    ctx.cli().write_stdin("n\ny\nn\n").assert().success();

    assert!(!ctx.command_log().iter().any(|line| line.contains(".gitignore")));
}

#[test]
fn custom_dist_dir_is_cleaned_and_built_into() {
    let ctx = TestContext::new();
    ctx.write_pyproject("version = \"1.2.3\"");
    ctx.write_file("pyship.toml", "dist_dir = \"out\"\nclean_dirs = [\"build\"]\n");
    ctx.write_file("out/pkg-0.9.0.tar.gz", "stale");

    ctx.cli()
        .write_stdin("n\ny\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("out/pkg-0.9.0.tar.gz").not())
        .stdout(predicate::str::contains("Published pkg 1.2.3"));

    assert!(ctx.ran("python3 -m build --outdir out"));
    assert!(ctx.ran("python3 -m twine upload out/pkg-1.2.3-py3-none-any.whl out/pkg-1.2.3.tar.gz"));
    assert!(!ctx.command_log().iter().any(|line| line.contains("0.9.0")));
    assert!(!ctx.command_log().iter().any(|line| line.starts_with("leftover")));
}
