use crate::{
    SortArgs,
    detex::{expand_inputs, sort_chapters},
};

pub fn run(args: &SortArgs) -> Result<(), anyhow::Error> {
    for path in sort_chapters(expand_inputs(&args.paths)?) {
        println!("{}", path.display());
    }
    Ok(())
}
