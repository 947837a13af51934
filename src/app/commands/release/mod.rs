//! Release driver: version, probe, clean, build, check, then gated uploads and tag.

pub mod build;
pub mod preflight;
pub mod publish;
pub mod tag;

use crate::app::AppContext;
use crate::domain::{
    AppError, ArtifactSet, CheckOutcome, CommandOutput, CommandSpec, PackageIndex,
    ProjectManifest, ReleaseOutcome,
};
use crate::ports::{CommandRunner, Prompter};

/// Run a command and turn a non-zero exit into a fatal error carrying its stderr.
pub(crate) fn run_checked(
    runner: &impl CommandRunner,
    spec: &CommandSpec,
) -> Result<CommandOutput, AppError> {
    let output = runner.run(spec)?;
    if output.success() {
        return Ok(output);
    }

    let stderr = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    Err(AppError::CommandFailed { command: spec.to_string(), code: output.code, stderr })
}

/// Execute one release run.
///
/// Returns `Ok` both when the package was published and when the operator
/// declined the production upload; every other failure is fatal.
pub fn execute<R, P>(ctx: &AppContext<R, P>) -> Result<ReleaseOutcome, AppError>
where
    R: CommandRunner,
    P: Prompter,
{
    let root = ctx.root();
    let config = ctx.config();
    let runner = ctx.runner();
    let prompter = ctx.prompter();

    let manifest = ProjectManifest::load(&root.join(&config.manifest))?;
    let display_name = manifest.name.as_deref().unwrap_or("package");
    println!("🚀 Releasing {}", display_name);
    println!("📦 Current version: {}", manifest.version);

    preflight::ensure_twine(runner, config, root)?;

    println!("🧹 Cleaning previous build output...");
    for dir in build::clean_outputs(config, root)? {
        log::debug!("Removed {}", dir);
    }

    let backend = build::select_backend(runner, config, root);
    println!("🔨 Building distributions with {}...", backend.label());
    build::build(runner, backend, config, root)?;

    println!("✅ Checking distributions...");
    let artifacts = ArtifactSet::collect(root, &config.dist_dir)?;
    for artifact in artifacts.iter() {
        println!(
            "  • {} ({} bytes, sha256 {})",
            artifact.path.display(),
            artifact.size,
            artifact.sha256
        );
    }

    let check = publish::check_artifacts(runner, config, &artifacts, root)?;
    if let CheckOutcome::Warning { details } = &check {
        println!("⚠️  twine check reported problems, continuing");
        if !details.is_empty() {
            println!("{}", details);
        }
    }

    let staging = PackageIndex::Staging.display_name(config);
    let production = PackageIndex::Production.display_name(config);
    let mut staged = false;

    let mut answer = prompter.confirm(&format!("Upload to {} first for testing?", staging))?;
    if answer.is_yes() {
        println!("📤 Uploading to {}...", staging);
        publish::upload(runner, config, PackageIndex::Staging, &artifacts, root)?;
        staged = true;
        println!("✅ Uploaded to {}", staging);
        println!(
            "💡 Test the install: pip install --index-url {} {}",
            config.staging.simple_index,
            manifest.name.as_deref().unwrap_or("<package>")
        );
        answer = prompter.confirm(&format!("Testing done? Publish to {}?", production))?;
    }

    if !answer.is_yes() {
        answer = prompter.confirm(&format!("Confirm publishing to {}?", production))?;
    }

    let mut outcome = ReleaseOutcome {
        version: manifest.version.clone(),
        backend,
        artifacts: artifacts.as_args(),
        check,
        staged,
        published: false,
        tag: None,
    };

    if !answer.is_yes() {
        println!("❌ Release cancelled");
        println!("✨ Done!");
        return Ok(outcome);
    }

    println!("📤 Uploading to {}...", production);
    publish::upload(runner, config, PackageIndex::Production, &artifacts, root)?;
    outcome.published = true;
    println!("✅ Published {} {}", display_name, manifest.version);
    if let Some(name) = &manifest.name {
        println!("🔗 {}", config.production.project_page(name));
    }

    let tag_name = manifest.tag(&config.tag_prefix);
    if prompter.confirm(&format!("Create git tag {}?", tag_name))?.is_yes() {
        tag::create_and_push_tag(runner, config, &tag_name, root)?;
        println!("✅ Created and pushed tag {} to {}", tag_name, config.remote);
        outcome.tag = Some(tag_name);
    }

    println!("✨ Done!");
    Ok(outcome)
}
