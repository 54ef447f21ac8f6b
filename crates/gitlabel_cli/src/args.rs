use clap::Parser;

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;

/// gitlabel: copy GitHub label definitions between repositories and JSON files
#[derive(Parser, Debug, Default)]
#[command(name = "gitlabel", version)]
#[command(about = "Copy GitHub label definitions between repositories and JSON files", long_about = None)]
pub struct Cli {
    /// Where to read labels from: a .json file or owner/repo
    #[arg(short = 'i', long, default_value = "", value_name = "STR")]
    pub infile: String,

    /// Where to write labels to: a .json file, owner/repo, or omit to print them
    #[arg(short = 'o', long, default_value = "", value_name = "STR")]
    pub output: String,
}
