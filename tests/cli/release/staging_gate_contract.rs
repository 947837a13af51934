use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn declining_staging_goes_straight_to_production_confirmation() {
    let ctx = TestContext::new();
    ctx.write_pyproject("version = \"1.2.3\"");

    ctx.cli()
        .write_stdin("n\ny\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Upload to TestPyPI first for testing? (y/n)"))
        .stdout(predicate::str::contains("Confirm publishing to PyPI? (y/n)"))
        .stdout(predicate::str::contains("Testing done?").not());

    assert!(!ctx.ran("python3 -m twine upload --repository"));
    assert!(ctx.ran("python3 -m twine upload dist/"));
}

#[test]
fn negative_answer_after_staging_asks_once_more() {
    let ctx = TestContext::new();
    ctx.write_pyproject("version = \"1.2.3\"");

    ctx.cli()
        .write_stdin("y\nn\ny\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Testing done? Publish to PyPI? (y/n)"))
        .stdout(predicate::str::contains("Confirm publishing to PyPI? (y/n)"));

    assert!(ctx.ran("python3 -m twine upload --repository testpypi"));
    assert!(ctx.ran("python3 -m twine upload dist/"));
}

#[test]
fn only_a_literal_y_is_affirmative() {
    let ctx = TestContext::new();
    ctx.write_pyproject("version = \"1.2.3\"");

    ctx.cli()
        .write_stdin("yes\nok\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Release cancelled"));

    assert!(!ctx.ran("python3 -m twine upload"));
}

#[test]
fn closed_stdin_declines_every_gate() {
    let ctx = TestContext::new();
    ctx.write_pyproject("version = \"1.2.3\"");

    ctx.cli()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Release cancelled"));

    assert!(!ctx.ran("python3 -m twine upload"));
}

#[test]
fn failed_staging_upload_halts_before_production() {
    let ctx = TestContext::new();
    ctx.write_pyproject("version = \"1.2.3\"");

    ctx.cli()
        .env("FAKE_STAGING_UPLOAD_EXIT", "1")
        .write_stdin("y\ny\ny\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("403 Forbidden"));

    assert!(!ctx.ran("python3 -m twine upload dist/"));
    assert!(!ctx.ran("git"));
}

#[test]
fn custom_staging_repository_is_used() {
    let ctx = TestContext::new();
    ctx.write_pyproject("version = \"1.2.3\"");
    ctx.write_file(
        "pyship.toml",
        "[staging]\nrepository = \"devpi\"\nsimple_index = \"https://devpi.local/root/dev/+simple/\"\n",
    );

    ctx.cli()
        .write_stdin("y\nn\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploaded to devpi"))
        .stdout(predicate::str::contains("https://devpi.local/root/dev/+simple/"));

    assert!(ctx.ran("python3 -m twine upload --repository devpi"));
}
