use crate::detex::default_pipeline;

pub fn run() {
    for (i, name) in default_pipeline().stage_names().iter().enumerate() {
        println!("{:>2}. {}", i + 1, name);
    }
}
