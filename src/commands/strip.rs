use crate::{
    StripArgs,
    config::DetexConfig,
    detex::{Runner, expand_inputs},
};

pub async fn run(args: &StripArgs) -> Result<(), anyhow::Error> {
    let config = DetexConfig::load_from_args(args.config_file.as_deref(), args.threshold)?;

    let files = expand_inputs(&args.paths)?;
    if files.is_empty() {
        return Err(anyhow::anyhow!("no .tex files found in the given paths"));
    }

    let summary = Runner::new(config.threshold)
        .dry_run(args.dry_run)
        .run(&files)
        .await?;

    if args.dry_run {
        println!(
            "Checked {} file(s), {} warning(s), nothing written",
            summary.files, summary.warnings
        );
    } else {
        println!(
            "Detexed {} file(s), {} warning(s)",
            summary.files, summary.warnings
        );
    }

    Ok(())
}
